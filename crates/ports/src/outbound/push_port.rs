//! Push transport port - opaque "send notification" capability
//!
//! The evaluators emit fully-formed messages through this boundary and never
//! learn how delivery happens. Adapters own retries, batching, and transport
//! errors; a failed send surfaces as an `Err` that the evaluator logs and
//! swallows.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Visible payload of one push notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PushMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
            color: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Delivery priority understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushPriority {
    #[default]
    High,
    Normal,
}

/// Transport-level delivery settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryOptions {
    pub priority: PushPriority,
    /// How long the platform may hold an undelivered push before dropping it.
    pub ttl: Duration,
}

impl Default for DeliveryOptions {
    fn default() -> Self {
        Self {
            priority: PushPriority::High,
            ttl: Duration::from_secs(5 * 60 * 60),
        }
    }
}

/// Port for delivering push notifications to a subscriber's device.
///
/// # Testing
///
/// Enable the `testing` feature to get `MockPushPort` via mockall.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PushPort: Send + Sync {
    /// Deliver one message to the device behind `token`.
    async fn send(
        &self,
        token: &str,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> Result<()>;
}
