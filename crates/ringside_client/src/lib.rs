//! Ringside client: the backend HTTP surface and the poll loop.
mod api;
mod poller;
mod types;

pub use api::{ApiSettings, JobsApi, ReqwestApi};
pub use poller::{ClientEvent, ClientHandle, POLL_PERIOD};
pub use types::{ApiError, GeneratePayload, JobRecord};
