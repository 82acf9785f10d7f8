use std::time::Duration;

use ringside_core::JobId;

use crate::{ApiError, GeneratePayload, JobRecord};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The backend surface the store consumes. Transport mechanics stay behind
/// this seam so the poller can be driven by a stub in tests.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    /// `GET /api/jobs` — the full, authoritative job collection.
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError>;
    /// `POST /api/generate` — returns the newly created job.
    async fn submit(&self, payload: &GeneratePayload) -> Result<JobRecord, ApiError>;
    /// `DELETE /api/jobs/{id}` — no body required on success.
    async fn delete_job(&self, job_id: &JobId) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestApi {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/jobs"))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<Vec<JobRecord>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn submit(&self, payload: &GeneratePayload) -> Result<JobRecord, ApiError> {
        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<JobRecord>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn delete_job(&self, job_id: &JobId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/jobs/{job_id}")))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Transport(err.to_string())
}
