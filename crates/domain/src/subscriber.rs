//! Persisted per-player notification bookkeeping.
//!
//! A [`SubscriberRecord`] is created and destroyed by external registration
//! flows; the evaluators only read it and patch individual fields. Stored
//! field names stay camelCase so the wire shape of existing records is
//! preserved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque externally-issued player identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Hospital notification debounce state.
///
/// Three states rather than a boolean because the stay lifecycle has two
/// distinct "now out" paths (early release/revival vs. expected release)
/// that are distinguished only by the prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalStatus {
    /// Not in hospital.
    #[default]
    Out,
    /// Admitted; admission has been handled.
    In,
    /// Release warning sent; still inside.
    Notified,
}

impl HospitalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HospitalStatus::Out => "out",
            HospitalStatus::In => "in",
            HospitalStatus::Notified => "notified",
        }
    }
}

impl fmt::Display for HospitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HospitalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out" => Ok(HospitalStatus::Out),
            "in" => Ok(HospitalStatus::In),
            "notified" => Ok(HospitalStatus::Notified),
            other => Err(DomainError::parse(format!(
                "unknown hospital status: {other}"
            ))),
        }
    }
}

/// Persisted subscriber record, distinct from game stats.
///
/// The `*_last_check_full` flags record whether the previous evaluation saw
/// the bar at maximum; they make the bar notifications edge-triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub uid: PlayerId,
    /// Push destination token for this subscriber.
    pub token: String,
    #[serde(rename = "energyLastCheckFull", default)]
    pub energy_last_check_full: bool,
    #[serde(rename = "nerveLastCheckFull", default)]
    pub nerve_last_check_full: bool,
    /// Unix millis of the last travel notification; 0 when never sent.
    #[serde(rename = "lastTravelNotified", default)]
    pub last_travel_notified: u64,
    #[serde(rename = "hospitalLastStatus", default)]
    pub hospital_last_status: HospitalStatus,
}

impl SubscriberRecord {
    /// A fresh record with all flags at their defaults.
    pub fn new(uid: impl Into<PlayerId>, token: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            token: token.into(),
            energy_last_check_full: false,
            nerve_last_check_full: false,
            last_travel_notified: 0,
            hospital_last_status: HospitalStatus::Out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_defaults_apply_on_sparse_input() {
        // Existing records may predate some fields; serde fills defaults.
        let json = r#"{ "uid": "player-1", "token": "tok" }"#;
        let record: SubscriberRecord = serde_json::from_str(json).expect("valid record");

        assert!(!record.energy_last_check_full);
        assert!(!record.nerve_last_check_full);
        assert_eq!(record.last_travel_notified, 0);
        assert_eq!(record.hospital_last_status, HospitalStatus::Out);
    }

    #[test]
    fn record_round_trips_camel_case_fields() {
        let mut record = SubscriberRecord::new("player-2", "tok");
        record.energy_last_check_full = true;
        record.hospital_last_status = HospitalStatus::Notified;

        let json = serde_json::to_string(&record).expect("serializes");
        assert!(json.contains("\"energyLastCheckFull\":true"));
        assert!(json.contains("\"hospitalLastStatus\":\"notified\""));

        let back: SubscriberRecord = serde_json::from_str(&json).expect("parses");
        assert_eq!(back, record);
    }

    #[test]
    fn hospital_status_parses_stored_values() {
        assert_eq!("out".parse::<HospitalStatus>(), Ok(HospitalStatus::Out));
        assert_eq!("in".parse::<HospitalStatus>(), Ok(HospitalStatus::In));
        assert_eq!(
            "notified".parse::<HospitalStatus>(),
            Ok(HospitalStatus::Notified)
        );
        assert!("hospitalised".parse::<HospitalStatus>().is_err());
    }
}
