//! Clock abstraction port for time operations
//!
//! The travel cooldown and the hospital release window both compare against
//! "now"; injecting the clock keeps those evaluations deterministic under
//! test instead of racing the wall clock.

use chrono::{DateTime, Utc};

/// Time operations abstraction.
///
/// Evaluators that need current time inject this port rather than calling
/// `Utc::now()` directly.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Get current time as DateTime<Utc>
    fn now(&self) -> DateTime<Utc>;

    /// Get current time as Unix timestamp in seconds
    fn now_unix_secs(&self) -> u64;

    /// Get current time as Unix timestamp in milliseconds
    fn now_millis(&self) -> u64;
}
