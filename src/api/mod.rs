//! HTTP client for the Simple RAG backend.
//!
//! Two endpoints, both answering `{ "answer": string }`:
//! - `POST /api/agent/ask` with a JSON question
//! - `POST /api/summarize-file` with a multipart `file` field

mod client;
mod error;
mod types;

pub use client::{ApiClient, ASK_PATH, SUMMARIZE_PATH};
pub use error::ApiError;
pub use types::{AnswerResponse, AskRequest};
