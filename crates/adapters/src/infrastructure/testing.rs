//! Test doubles for the outbound ports.
//!
//! `RecordingPush` captures every send for assertions; `ManualClock` serves
//! a fixed, advanceable time so the travel cooldown and hospital window are
//! deterministic in integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use statwatch_ports::outbound::{ClockPort, DeliveryOptions, PushMessage, PushPort};

/// One captured push send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentPush {
    pub token: String,
    pub message: PushMessage,
    pub options: DeliveryOptions,
}

/// PushPort implementation that records every send.
#[derive(Debug, Default)]
pub struct RecordingPush {
    sent: Mutex<Vec<SentPush>>,
}

impl RecordingPush {
    pub fn new() -> Self {
        Self::default()
    }

    /// All sends captured so far, in order.
    pub fn sent(&self) -> Vec<SentPush> {
        self.sent.lock().expect("recording lock").clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("recording lock").len()
    }
}

#[async_trait]
impl PushPort for RecordingPush {
    async fn send(
        &self,
        token: &str,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> Result<()> {
        self.sent.lock().expect("recording lock").push(SentPush {
            token: token.to_string(),
            message: message.clone(),
            options: *options,
        });
        Ok(())
    }
}

/// ClockPort implementation serving a manually-advanced time.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    /// Start the clock at the given unix millis.
    pub fn at_millis(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Start the clock at the given unix seconds.
    pub fn at_secs(secs: u64) -> Self {
        Self::at_millis(secs * 1000)
    }

    /// Move time forward.
    pub fn advance_secs(&self, secs: u64) {
        self.millis.fetch_add(secs * 1000, Ordering::SeqCst);
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis as i64)
            .single()
            .unwrap_or_else(Utc::now)
    }

    fn now_unix_secs(&self) -> u64 {
        self.millis.load(Ordering::SeqCst) / 1000
    }

    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}
