//! Statwatch domain layer.
//!
//! Pure types and transition logic for the notification evaluators: stat
//! snapshot shapes as the game API reports them, the persisted subscriber
//! record, and the per-stat transition functions that decide when a push
//! notification fires. No I/O lives here; time and delivery come in through
//! ports.

pub mod error;
pub mod stats;
pub mod subscriber;
pub mod transitions;

pub use error::DomainError;
pub use stats::{BarStats, LastAction, PlayerStates, StatsSnapshot, TravelStats};
pub use subscriber::{HospitalStatus, PlayerId, SubscriberRecord};
pub use transitions::{
    evaluate_bar, evaluate_travel, hospital_transition, BarKind, BarTransition, HospitalNotice,
    HospitalPhase, HospitalPolicy, TravelPolicy,
};
