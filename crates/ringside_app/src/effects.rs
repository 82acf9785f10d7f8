use std::sync::mpsc;

use client_logging::{client_info, client_warn};
use ringside_client::{ApiError, ApiSettings, ClientEvent, ClientHandle, JobRecord};
use ringside_core::{Effect, Msg};

/// Bridges the pure state machine and the background HTTP client: effects go
/// out as client commands, client events come back as messages.
pub struct EffectRunner {
    client: ClientHandle,
    events: mpsc::Receiver<ClientEvent>,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let (client, events) = ClientHandle::new(settings)?;
        Ok(Self { client, events })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs => self.client.refresh(),
                Effect::SubmitGeneration(request) => {
                    client_info!(
                        "submit generation prompt_len={} duration={}s",
                        request.prompt.len(),
                        request.duration
                    );
                    self.client.submit(request.into());
                }
                Effect::DeleteJob(job_id) => {
                    client_info!("delete job {job_id}");
                    self.client.delete(job_id);
                }
            }
        }
    }

    /// Drain pending client events into the message channel. Poll failures
    /// stop here: the store keeps its previous snapshot and the next poll
    /// gets another chance.
    pub fn pump(&self, msg_tx: &mpsc::Sender<Msg>) {
        while let Ok(event) = self.events.try_recv() {
            let msg = match event {
                ClientEvent::SnapshotLoaded(records) => {
                    Msg::SnapshotLoaded(records.into_iter().map(JobRecord::into_job).collect())
                }
                ClientEvent::SnapshotFailed(message) => {
                    client_warn!("poll failed: {message}");
                    continue;
                }
                ClientEvent::Submitted(record) => Msg::JobCreated(record.into_job()),
                ClientEvent::SubmitFailed(message) => Msg::SubmitFailed(message),
                ClientEvent::Deleted(job_id) => Msg::JobDeleted(job_id),
                ClientEvent::DeleteFailed { job_id, message } => {
                    Msg::DeleteFailed { job_id, message }
                }
            };
            let _ = msg_tx.send(msg);
        }
    }

    pub fn shutdown(&self) {
        self.client.shutdown();
    }
}
