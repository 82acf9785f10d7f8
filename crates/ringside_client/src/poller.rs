use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::client_debug;
use ringside_core::JobId;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiSettings, JobsApi, ReqwestApi};
use crate::{ApiError, GeneratePayload, JobRecord};

/// Poll cadence while the owning view is active.
pub const POLL_PERIOD: Duration = Duration::from_secs(10);

enum ClientCommand {
    Refresh,
    Submit(GeneratePayload),
    Delete(JobId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Full authoritative snapshot of the job collection.
    SnapshotLoaded(Vec<JobRecord>),
    /// A poll failed; the consumer keeps its previous collection.
    SnapshotFailed(String),
    Submitted(JobRecord),
    SubmitFailed(String),
    Deleted(JobId),
    DeleteFailed { job_id: JobId, message: String },
}

/// Handle onto the background runtime that talks to the backend.
///
/// Commands go in over a channel; events come back over the receiver the
/// constructor hands out. The periodic poll runs until `shutdown`, which
/// cancels everything deterministically: no event is delivered afterwards,
/// including results of requests still in flight.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    cancel: CancellationToken,
}

impl ClientHandle {
    pub fn new(settings: ApiSettings) -> Result<(Self, mpsc::Receiver<ClientEvent>), ApiError> {
        let api: Arc<dyn JobsApi> = Arc::new(ReqwestApi::new(settings)?);
        Ok(Self::with_api(api, POLL_PERIOD))
    }

    pub fn with_api(
        api: Arc<dyn JobsApi>,
        poll_period: Duration,
    ) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");

            // Periodic poll, scoped to the handle's lifetime. The first tick
            // fires immediately, which doubles as the initial load.
            {
                let api = api.clone();
                let event_tx = event_tx.clone();
                let token = token.clone();
                runtime.spawn(async move {
                    let mut interval = tokio::time::interval(poll_period);
                    loop {
                        tokio::select! {
                            _ = token.cancelled() => break,
                            _ = interval.tick() => {
                                run_refresh(api.as_ref(), &event_tx, &token).await;
                            }
                        }
                    }
                    client_debug!("poll loop stopped");
                });
            }

            while let Ok(command) = cmd_rx.recv() {
                if token.is_cancelled() {
                    break;
                }
                let api = api.clone();
                let event_tx = event_tx.clone();
                let token = token.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, &event_tx, &token).await;
                });
            }
        });

        (Self { cmd_tx, cancel }, event_rx)
    }

    pub fn refresh(&self) {
        let _ = self.cmd_tx.send(ClientCommand::Refresh);
    }

    pub fn submit(&self, payload: GeneratePayload) {
        let _ = self.cmd_tx.send(ClientCommand::Submit(payload));
    }

    pub fn delete(&self, job_id: JobId) {
        let _ = self.cmd_tx.send(ClientCommand::Delete(job_id));
    }

    /// Tear down the poll loop and discard anything still in flight.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

async fn run_refresh(
    api: &dyn JobsApi,
    event_tx: &mpsc::Sender<ClientEvent>,
    token: &CancellationToken,
) {
    let result = tokio::select! {
        _ = token.cancelled() => return,
        result = api.list_jobs() => result,
    };
    // A refresh resolving after teardown must not apply its result.
    if token.is_cancelled() {
        return;
    }
    let event = match result {
        Ok(records) => ClientEvent::SnapshotLoaded(records),
        Err(err) => ClientEvent::SnapshotFailed(err.to_string()),
    };
    let _ = event_tx.send(event);
}

async fn handle_command(
    api: &dyn JobsApi,
    command: ClientCommand,
    event_tx: &mpsc::Sender<ClientEvent>,
    token: &CancellationToken,
) {
    let event = match command {
        ClientCommand::Refresh => {
            run_refresh(api, event_tx, token).await;
            return;
        }
        ClientCommand::Submit(payload) => match api.submit(&payload).await {
            Ok(record) => ClientEvent::Submitted(record),
            Err(err) => ClientEvent::SubmitFailed(err.to_string()),
        },
        ClientCommand::Delete(job_id) => match api.delete_job(&job_id).await {
            Ok(()) => ClientEvent::Deleted(job_id),
            Err(err) => ClientEvent::DeleteFailed {
                job_id,
                message: err.to_string(),
            },
        },
    };
    if token.is_cancelled() {
        return;
    }
    let _ = event_tx.send(event);
}
