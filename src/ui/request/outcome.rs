use crate::api::ApiError;

/// Result of one backend call as the lifecycle sees it.
///
/// Every client error becomes `RequestFailed`; the detail is logged here and
/// never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Server answered; `None` when the answer field was missing.
    Answered(Option<String>),
    RequestFailed,
}

impl RequestOutcome {
    pub fn from_result(slot: &'static str, result: Result<Option<String>, ApiError>) -> Self {
        match result {
            Ok(answer) => {
                let empty = answer.as_deref().map_or(true, str::is_empty);
                tracing::info!(slot, empty, "request succeeded");
                RequestOutcome::Answered(answer)
            }
            Err(err) => {
                tracing::warn!(slot, kind = err.kind(), error = %err, "request failed");
                RequestOutcome::RequestFailed
            }
        }
    }
}
