use async_trait::async_trait;
use floodline_interchange::{Call, CallResponse, InterchangeError};
use floodline_storage::CallContext;

/// Result type for conformance test operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// A host failed to execute a call at all (transport failure, rejected
/// envelope). A `404` response is not a `ConformanceError`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ConformanceError {
    pub message: String,
}

impl ConformanceError {
    pub fn new(message: impl Into<String>) -> Self {
        ConformanceError {
            message: message.into(),
        }
    }
}

impl From<InterchangeError> for ConformanceError {
    fn from(e: InterchangeError) -> Self {
        ConformanceError::new(e.to_string())
    }
}

/// Trait a ledger host implements to run the conformance suite.
///
/// The host supplies the context (clock and caller) unchanged to the
/// registries and must serialize calls: the suite never issues two calls
/// concurrently, but implementations may be shared across tasks.
#[async_trait]
pub trait TestableLedger: Send + Sync {
    /// Execute one call at the given block height as the given sender.
    async fn call(&self, ctx: &CallContext, call: Call) -> ConformanceResult<CallResponse>;
}
