//! Log-only push transport
//!
//! Stands in for the real delivery platform during local runs: every send
//! becomes a structured log line and always succeeds. The production
//! deployment supplies its own `PushPort` implementation.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use statwatch_ports::outbound::{DeliveryOptions, PushMessage, PushPort};

/// PushPort implementation that logs instead of delivering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPush;

impl TracingPush {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushPort for TracingPush {
    async fn send(
        &self,
        token: &str,
        message: &PushMessage,
        options: &DeliveryOptions,
    ) -> Result<()> {
        info!(
            token,
            title = %message.title,
            body = %message.body,
            priority = ?options.priority,
            ttl_secs = options.ttl.as_secs(),
            "push notification (log-only transport)"
        );
        Ok(())
    }
}
