//! Evaluator configuration.
//!
//! The tunables live here rather than as constants: the travel pair has
//! already shifted once between deployments (180 s/180 s, then 240 s/300 s)
//! and the push TTL differs between the minimal (24 h) and extended (5 h)
//! variants.

use statwatch_domain::{HospitalPolicy, TravelPolicy};
use statwatch_ports::outbound::DeliveryOptions;

/// Assembled configuration for one [`NotificationEvaluator`].
///
/// [`NotificationEvaluator`]: crate::evaluator::NotificationEvaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifierConfig {
    pub travel: TravelPolicy,
    pub hospital: HospitalPolicy,
    /// Delivery settings applied to every push this evaluator sends.
    pub delivery: DeliveryOptions,
}
