//! In-memory subscriber store
//!
//! Implements the merge-update contract of `SubscriberStorePort` over a
//! concurrent map. Used by tests and local runs; the production deployment
//! points the port at its real document store instead.

use anyhow::{bail, Result};
use async_trait::async_trait;
use dashmap::DashMap;

use statwatch_domain::{PlayerId, SubscriberRecord};
use statwatch_ports::outbound::{SubscriberPatch, SubscriberStorePort};

/// Concurrent in-memory map of subscriber records keyed by player id.
#[derive(Debug, Default)]
pub struct InMemorySubscriberStore {
    records: DashMap<PlayerId, SubscriberRecord>,
}

impl InMemorySubscriberStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Insert or replace a record (registration-flow stand-in).
    pub fn insert(&self, record: SubscriberRecord) {
        self.records.insert(record.uid.clone(), record);
    }

    /// Fetch a copy of a record, if present.
    pub fn get(&self, uid: &PlayerId) -> Option<SubscriberRecord> {
        self.records.get(uid).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl SubscriberStorePort for InMemorySubscriberStore {
    async fn update(&self, uid: &PlayerId, patch: SubscriberPatch) -> Result<()> {
        let Some(mut entry) = self.records.get_mut(uid) else {
            // Mirrors the document store: updating a missing record fails,
            // records are only created by registration.
            bail!("no subscriber record for uid {uid}");
        };

        let record = entry.value_mut();
        if let Some(full) = patch.energy_last_check_full {
            record.energy_last_check_full = full;
        }
        if let Some(full) = patch.nerve_last_check_full {
            record.nerve_last_check_full = full;
        }
        if let Some(at) = patch.last_travel_notified {
            record.last_travel_notified = at;
        }
        if let Some(status) = patch.hospital_last_status {
            record.hospital_last_status = status;
        }
        Ok(())
    }
}
