mod client;
mod error;
mod types;

pub use client::{Collaborator, HttpCollaborator};
pub use error::{ApiError, ApiResult};
pub use types::{AutoResponse, ChatRequest, ChatResponse, ProfileResponse, StateResponse};
