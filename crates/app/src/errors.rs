//! Evaluator error types.
//!
//! These never cross the public entry points: the evaluator logs and
//! swallows them, so failures are operator-visible through logs only. They
//! exist so the dispatch fan-out can say precisely which side of the
//! send/update pair failed, including the case where both did.

use thiserror::Error;

/// Failure inside one evaluation's emitted operations.
#[derive(Debug, Error)]
pub enum EvaluatorError {
    /// The push transport rejected or failed the send.
    #[error("push delivery failed: {0:#}")]
    Push(#[source] anyhow::Error),

    /// The subscriber store rejected or failed the patch.
    #[error("subscriber update failed: {0:#}")]
    Store(#[source] anyhow::Error),

    /// Both concurrently-issued operations failed.
    #[error("push delivery and subscriber update both failed: {push:#}; {store:#}")]
    Both {
        push: anyhow::Error,
        store: anyhow::Error,
    },
}
