//! System clock adapter
//!
//! Production implementation of ClockPort backed by chrono. Tests use
//! [`ManualClock`](crate::infrastructure::testing::ManualClock) or the
//! mockall mock instead.

use chrono::{DateTime, Utc};
use statwatch_ports::outbound::ClockPort;

/// System clock implementation using real time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_unix_secs(&self) -> u64 {
        Utc::now().timestamp().max(0) as u64
    }

    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }
}
