//! Application configuration loaded from environment
//!
//! The evaluator tunables have shifted between deployments, so they are env
//! configuration with the current defaults baked in.
//!
//! # Environment Variables
//!
//! - `STATWATCH_TRAVEL_WINDOW_SECS` - arrival window for the travel notice (default: 240)
//! - `STATWATCH_TRAVEL_COOLDOWN_SECS` - debounce between travel notices (default: 300)
//! - `STATWATCH_HOSPITAL_WARNING_SECS` - release warning window (default: 240)
//! - `STATWATCH_PUSH_TTL_SECS` - push time-to-live (default: 18000, i.e. 5 h)

use std::time::Duration;

use statwatch_app::NotifierConfig;
use statwatch_domain::{HospitalPolicy, TravelPolicy};
use statwatch_ports::outbound::{DeliveryOptions, PushPriority};

/// Helper to read an environment variable with a default fallback
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Application configuration loaded from environment
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub travel_window_secs: u64,
    pub travel_cooldown_secs: u64,
    pub hospital_warning_secs: u64,
    pub push_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            travel_window_secs: 240,
            travel_cooldown_secs: 300,
            hospital_warning_secs: 240,
            push_ttl_secs: 5 * 60 * 60,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to the
    /// current deployment defaults for anything missing or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            travel_window_secs: env_or("STATWATCH_TRAVEL_WINDOW_SECS", defaults.travel_window_secs),
            travel_cooldown_secs: env_or(
                "STATWATCH_TRAVEL_COOLDOWN_SECS",
                defaults.travel_cooldown_secs,
            ),
            hospital_warning_secs: env_or(
                "STATWATCH_HOSPITAL_WARNING_SECS",
                defaults.hospital_warning_secs,
            ),
            push_ttl_secs: env_or("STATWATCH_PUSH_TTL_SECS", defaults.push_ttl_secs),
        }
    }

    /// Assemble the evaluator configuration.
    pub fn notifier_config(&self) -> NotifierConfig {
        NotifierConfig {
            travel: TravelPolicy {
                arrival_window_secs: self.travel_window_secs,
                cooldown_millis: self.travel_cooldown_secs * 1000,
            },
            hospital: HospitalPolicy {
                release_warning_secs: self.hospital_warning_secs,
            },
            delivery: DeliveryOptions {
                priority: PushPriority::High,
                ttl: Duration::from_secs(self.push_ttl_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_through_to_notifier_config() {
        let config = AppConfig::default().notifier_config();
        assert_eq!(config.travel.arrival_window_secs, 240);
        assert_eq!(config.travel.cooldown_millis, 300_000);
        assert_eq!(config.hospital.release_warning_secs, 240);
        assert_eq!(config.delivery.ttl, Duration::from_secs(18_000));
    }
}
