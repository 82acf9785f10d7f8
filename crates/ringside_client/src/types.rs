use ringside_core::{GenerationRequest, Job, JobStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// One job record as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub prompt: String,
    pub status: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
    pub created_at: String,
}

impl JobRecord {
    pub fn into_job(self) -> Job {
        Job {
            id: self.id,
            prompt: self.prompt,
            status: parse_status(&self.status),
            video_url: self.video_url,
            thumbnail_url: self.thumbnail_url,
            cost: self.cost,
            error: self.error,
            created_at: self.created_at,
        }
    }
}

// An unrecognized status reads as pending, the earliest stage; the next
// snapshot carries the authoritative value anyway.
fn parse_status(raw: &str) -> JobStatus {
    match raw {
        "uploading" => JobStatus::Uploading,
        "generating" => JobStatus::Generating,
        "downloading" => JobStatus::Downloading,
        "completed" => JobStatus::Completed,
        "failed" => JobStatus::Failed,
        _ => JobStatus::Pending,
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayload {
    pub model: String,
    pub custom_image_id: String,
    pub prompt: String,
    pub music: bool,
    pub crowd: bool,
    pub commentators: bool,
    pub like_anime: bool,
    pub duration: u32,
    pub aspect_ratio: String,
}

impl From<GenerationRequest> for GeneratePayload {
    fn from(request: GenerationRequest) -> Self {
        Self {
            model: request.model,
            custom_image_id: request.custom_image_id,
            prompt: request.prompt,
            music: request.music,
            crowd: request.crowd,
            commentators: request.commentators,
            like_anime: request.like_anime,
            duration: request.duration,
            aspect_ratio: request.aspect_ratio,
        }
    }
}
