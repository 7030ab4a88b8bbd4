//! Per-stat transition logic.
//!
//! Everything here is a pure function over snapshot values, stored flags,
//! and a caller-supplied notion of "now". The app layer owns the side
//! effects (push send, record patch); this module only answers "did the
//! state cross a boundary, and what should the new stored state be".

use serde::{Deserialize, Serialize};

use crate::stats::{BarStats, TravelStats};
use crate::subscriber::HospitalStatus;

// =============================================================================
// Bar evaluator (energy / nerve)
// =============================================================================

/// Which refillable bar a transition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    Energy,
    Nerve,
}

impl BarKind {
    pub fn label(&self) -> &'static str {
        match self {
            BarKind::Energy => "Energy",
            BarKind::Nerve => "Nerve",
        }
    }
}

impl std::fmt::Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of comparing a bar against its stored edge-trigger flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTransition {
    /// Crossed into full while the flag was clear: notify and set the flag.
    BecameFull,
    /// Dropped below maximum while the flag was set: clear the flag, no
    /// notification.
    Drained,
    /// Flag already consistent with the bar; nothing to do.
    Steady,
}

/// Edge-triggered evaluation of one bar against its stored flag.
///
/// Fires exactly once per full -> not-full -> full cycle: the notification
/// transition requires the stored flag to be clear, and the flag is only
/// cleared by observing the bar below maximum.
pub fn evaluate_bar(bar: BarStats, last_check_full: bool) -> BarTransition {
    if bar.is_full() && !last_check_full {
        BarTransition::BecameFull
    } else if bar.current < bar.maximum && last_check_full {
        BarTransition::Drained
    } else {
        BarTransition::Steady
    }
}

// =============================================================================
// Travel evaluator
// =============================================================================

/// Tunable constants for the travel arrival notification.
///
/// Both values have shifted between deployments (180 s window / 180 s
/// cooldown originally, 240 s / 300 s later), so they are configuration
/// rather than behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelPolicy {
    /// Seconds-to-landing at or below which the arrival notice fires.
    pub arrival_window_secs: u64,
    /// Minimum millis between consecutive arrival notices.
    pub cooldown_millis: u64,
}

impl Default for TravelPolicy {
    fn default() -> Self {
        Self {
            arrival_window_secs: 240,
            cooldown_millis: 300 * 1000,
        }
    }
}

/// Time-based debounce for the arrival notice.
///
/// `time_left` decreases continuously, so inside the window the condition
/// would hold on every evaluation; the cooldown against the stored
/// `last_travel_notified` millis keeps it to one notice per window.
pub fn evaluate_travel(
    travel: &TravelStats,
    last_notified_millis: u64,
    now_millis: u64,
    policy: &TravelPolicy,
) -> bool {
    travel.time_left > 0
        && travel.time_left <= policy.arrival_window_secs
        && now_millis.saturating_sub(last_notified_millis) > policy.cooldown_millis
}

// =============================================================================
// Hospital evaluator
// =============================================================================

/// Tunable constant for the hospital release warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalPolicy {
    /// Seconds-to-release at or below which a stay counts as "nearly over".
    pub release_warning_secs: u64,
}

impl Default for HospitalPolicy {
    fn default() -> Self {
        Self {
            release_warning_secs: 240,
        }
    }
}

/// Where the current evaluation sits relative to the release time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalPhase {
    /// More than the warning window remains.
    FarFromRelease,
    /// Inside the warning window, release still pending.
    NearRelease,
    /// Release time has passed (or was never set).
    Released,
}

impl HospitalPhase {
    /// Classify seconds-until-release against the policy.
    pub fn classify(release_in_secs: u64, policy: &HospitalPolicy) -> Self {
        if release_in_secs > policy.release_warning_secs {
            HospitalPhase::FarFromRelease
        } else if release_in_secs > 0 {
            HospitalPhase::NearRelease
        } else {
            HospitalPhase::Released
        }
    }
}

/// Which hospital notification a transition should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalNotice {
    /// Admission observed far from the release time.
    Admitted,
    /// Release is inside the warning window.
    ReleaseSoon,
    /// Out before the warning fired: early release or revive.
    LeftEarly,
}

/// Hospital state machine as an explicit transition table.
///
/// Returns the new stored state and the notice to emit, or `None` when the
/// combination matches no row (no-op). The `Notified` -> `Out` row carries
/// no notice on purpose: the release warning already covered that stay, and
/// the expected-release exit never re-notifies.
pub fn hospital_transition(
    current: HospitalStatus,
    phase: HospitalPhase,
) -> Option<(HospitalStatus, Option<HospitalNotice>)> {
    use HospitalPhase::*;
    use HospitalStatus::*;

    match (current, phase) {
        (Out | Notified, FarFromRelease) => Some((In, Some(HospitalNotice::Admitted))),
        (In, NearRelease) => Some((Notified, Some(HospitalNotice::ReleaseSoon))),
        (In, Released) => Some((Out, Some(HospitalNotice::LeftEarly))),
        (Notified, Released) => Some((Out, None)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Bar transitions
    // -------------------------------------------------------------------------

    #[test]
    fn bar_fires_on_crossing_into_full() {
        let bar = BarStats::new(100, 100);
        assert_eq!(evaluate_bar(bar, false), BarTransition::BecameFull);
    }

    #[test]
    fn bar_never_fires_twice_without_a_drop() {
        let bar = BarStats::new(100, 100);
        assert_eq!(evaluate_bar(bar, false), BarTransition::BecameFull);
        // Flag now set; identical input is a no-op.
        assert_eq!(evaluate_bar(bar, true), BarTransition::Steady);
    }

    #[test]
    fn bar_clears_flag_when_drained() {
        let bar = BarStats::new(40, 100);
        assert_eq!(evaluate_bar(bar, true), BarTransition::Drained);
        assert_eq!(evaluate_bar(bar, false), BarTransition::Steady);
    }

    #[test]
    fn bar_full_cycle_fires_exactly_once_per_refill() {
        let full = BarStats::new(150, 150);
        let partial = BarStats::new(20, 150);

        let mut flag = false;
        assert_eq!(evaluate_bar(full, flag), BarTransition::BecameFull);
        flag = true;
        assert_eq!(evaluate_bar(full, flag), BarTransition::Steady);
        assert_eq!(evaluate_bar(partial, flag), BarTransition::Drained);
        flag = false;
        assert_eq!(evaluate_bar(full, flag), BarTransition::BecameFull);
    }

    // -------------------------------------------------------------------------
    // Travel debounce
    // -------------------------------------------------------------------------

    fn mexico(time_left: u64) -> TravelStats {
        TravelStats {
            time_left,
            destination: "Mexico".to_string(),
        }
    }

    #[test]
    fn travel_fires_inside_window_after_cooldown() {
        let policy = TravelPolicy::default();
        assert!(evaluate_travel(&mexico(200), 0, 1_000_000, &policy));
    }

    #[test]
    fn travel_suppressed_within_cooldown_even_in_window() {
        let policy = TravelPolicy::default();
        let fired_at = 1_000_000;
        // Still in the window 10 s later, but inside the 300 s cooldown.
        assert!(!evaluate_travel(&mexico(190), fired_at, fired_at + 10_000, &policy));
        // Once the cooldown elapses the window condition governs again.
        assert!(evaluate_travel(&mexico(120), fired_at, fired_at + 300_001, &policy));
    }

    #[test]
    fn travel_ignores_zero_and_out_of_window_times() {
        let policy = TravelPolicy::default();
        assert!(!evaluate_travel(&mexico(0), 0, 1_000_000, &policy));
        assert!(!evaluate_travel(&mexico(241), 0, 1_000_000, &policy));
        // Boundary: exactly the window edge still fires.
        assert!(evaluate_travel(&mexico(240), 0, 1_000_000, &policy));
    }

    #[test]
    fn travel_legacy_tuning_is_expressible() {
        let legacy = TravelPolicy {
            arrival_window_secs: 180,
            cooldown_millis: 180 * 1000,
        };
        assert!(evaluate_travel(&mexico(180), 0, 1_000_000, &legacy));
        assert!(!evaluate_travel(&mexico(200), 0, 1_000_000, &legacy));
    }

    // -------------------------------------------------------------------------
    // Hospital state machine
    // -------------------------------------------------------------------------

    fn phase(release_in: u64) -> HospitalPhase {
        HospitalPhase::classify(release_in, &HospitalPolicy::default())
    }

    #[test]
    fn phase_classification_boundaries() {
        assert_eq!(phase(241), HospitalPhase::FarFromRelease);
        assert_eq!(phase(240), HospitalPhase::NearRelease);
        assert_eq!(phase(1), HospitalPhase::NearRelease);
        assert_eq!(phase(0), HospitalPhase::Released);
    }

    #[test]
    fn admission_fires_from_out_and_from_notified() {
        for from in [HospitalStatus::Out, HospitalStatus::Notified] {
            assert_eq!(
                hospital_transition(from, HospitalPhase::FarFromRelease),
                Some((HospitalStatus::In, Some(HospitalNotice::Admitted)))
            );
        }
    }

    #[test]
    fn release_warning_fires_only_from_in() {
        assert_eq!(
            hospital_transition(HospitalStatus::In, HospitalPhase::NearRelease),
            Some((HospitalStatus::Notified, Some(HospitalNotice::ReleaseSoon)))
        );
        assert_eq!(
            hospital_transition(HospitalStatus::Out, HospitalPhase::NearRelease),
            None
        );
        assert_eq!(
            hospital_transition(HospitalStatus::Notified, HospitalPhase::NearRelease),
            None
        );
    }

    #[test]
    fn early_release_notifies_but_expected_release_does_not() {
        // Leaving straight from `in` means the warning never fired: notify.
        assert_eq!(
            hospital_transition(HospitalStatus::In, HospitalPhase::Released),
            Some((HospitalStatus::Out, Some(HospitalNotice::LeftEarly)))
        );
        // Leaving after the warning is the expected path: state-only.
        assert_eq!(
            hospital_transition(HospitalStatus::Notified, HospitalPhase::Released),
            Some((HospitalStatus::Out, None))
        );
    }

    #[test]
    fn unmatched_combinations_are_no_ops() {
        assert_eq!(
            hospital_transition(HospitalStatus::Out, HospitalPhase::Released),
            None
        );
        assert_eq!(
            hospital_transition(HospitalStatus::In, HospitalPhase::FarFromRelease),
            None
        );
    }

    #[test]
    fn full_stay_sequence_matches_expected_notices() {
        // out -> (300) in -> (100) notified -> (0) out
        let mut state = HospitalStatus::Out;

        let (next, notice) = hospital_transition(state, phase(300)).expect("admission");
        assert_eq!(notice, Some(HospitalNotice::Admitted));
        state = next;

        let (next, notice) = hospital_transition(state, phase(100)).expect("warning");
        assert_eq!(notice, Some(HospitalNotice::ReleaseSoon));
        state = next;

        let (next, notice) = hospital_transition(state, phase(0)).expect("release");
        assert_eq!(notice, None);
        assert_eq!(next, HospitalStatus::Out);
    }
}
