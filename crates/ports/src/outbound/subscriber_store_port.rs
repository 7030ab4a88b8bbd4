//! Subscriber store port - merge-update persistence for subscriber records
//!
//! The store holds one record per player (the original deployment keeps them
//! in a `players` collection). Updates are partial-field merges, never full
//! overwrites, and are assumed atomic at the storage layer; concurrent
//! evaluations for the same subscriber are last-write-wins by design.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use statwatch_domain::{HospitalStatus, PlayerId};

/// Partial update to a subscriber record.
///
/// Only fields that are `Some` are written. Evaluators build a patch with
/// exactly the fields their transition touched, which keeps racing
/// evaluators from clobbering each other's unrelated flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberPatch {
    #[serde(rename = "energyLastCheckFull", skip_serializing_if = "Option::is_none")]
    pub energy_last_check_full: Option<bool>,
    #[serde(rename = "nerveLastCheckFull", skip_serializing_if = "Option::is_none")]
    pub nerve_last_check_full: Option<bool>,
    #[serde(rename = "lastTravelNotified", skip_serializing_if = "Option::is_none")]
    pub last_travel_notified: Option<u64>,
    #[serde(rename = "hospitalLastStatus", skip_serializing_if = "Option::is_none")]
    pub hospital_last_status: Option<HospitalStatus>,
}

impl SubscriberPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn energy_flag(mut self, full: bool) -> Self {
        self.energy_last_check_full = Some(full);
        self
    }

    pub fn nerve_flag(mut self, full: bool) -> Self {
        self.nerve_last_check_full = Some(full);
        self
    }

    pub fn travel_notified(mut self, at_millis: u64) -> Self {
        self.last_travel_notified = Some(at_millis);
        self
    }

    pub fn hospital_status(mut self, status: HospitalStatus) -> Self {
        self.hospital_last_status = Some(status);
        self
    }

    /// Whether the patch would write anything at all.
    pub fn is_empty(&self) -> bool {
        self.energy_last_check_full.is_none()
            && self.nerve_last_check_full.is_none()
            && self.last_travel_notified.is_none()
            && self.hospital_last_status.is_none()
    }
}

/// Port for persisting subscriber record changes.
///
/// # Testing
///
/// Enable the `testing` feature to get `MockSubscriberStorePort` via mockall.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SubscriberStorePort: Send + Sync {
    /// Merge `patch` into the record for `uid`.
    ///
    /// Fails if no record exists for `uid`; records are created by external
    /// registration flows, never by the evaluators.
    async fn update(&self, uid: &PlayerId, patch: SubscriberPatch) -> Result<()>;
}
