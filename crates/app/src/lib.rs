//! Statwatch application layer.
//!
//! One use case, [`NotificationEvaluator`], with four independent entry
//! points (energy, nerve, travel, hospital) plus a combined `check_all`.
//! Each entry point compares a stats snapshot against the stored subscriber
//! record, emits at most one push send and one record patch through the
//! outbound ports, and awaits both together. Port failures are logged with
//! the subscriber id and swallowed; one evaluator failing never blocks
//! another.

pub mod config;
pub mod errors;
pub mod evaluator;
pub mod messages;

pub use config::NotifierConfig;
pub use errors::EvaluatorError;
pub use evaluator::{Evaluation, EvaluationReport, NotificationEvaluator};
