//! Notification Evaluator Use Case
//!
//! Compares a player's stats snapshot against their stored subscriber record
//! and decides, per stat, whether a push notification fires.
//!
//! # Responsibilities
//!
//! - Run the pure domain transitions (bar edge-trigger, travel debounce,
//!   hospital state machine) against snapshot + record
//! - Emit the resulting push send and record patch concurrently and await
//!   both (conjunction, not sequencing)
//! - Log and swallow port failures per evaluator so one stat's failure never
//!   blocks another
//!
//! # Evaluation Flow
//!
//! ```text
//! check_<stat>(snapshot, record)
//!         │
//!         ▼
//!   domain transition ──no change──> NoAction
//!         │
//!         ▼
//!   build message? + patch
//!         │
//!         ▼
//!   tokio::join!(push.send, store.update)
//!         │
//!         ├── all ok ──> Notified / StateUpdated
//!         └── any err ──> warn!(uid, evaluator, error) ──> Failed
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use statwatch_domain::{
    evaluate_bar, evaluate_travel, hospital_transition, BarKind, BarStats, BarTransition,
    HospitalPhase, PlayerId, StatsSnapshot, SubscriberRecord,
};
use statwatch_ports::outbound::{
    ClockPort, PushMessage, PushPort, SubscriberPatch, SubscriberStorePort,
};

use crate::config::NotifierConfig;
use crate::errors::EvaluatorError;
use crate::messages;

/// Outcome of one evaluator invocation.
///
/// Entry points never return errors; failures are operator-visible via logs
/// and surface here as [`Evaluation::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// A notification was sent (any accompanying state update included).
    Notified,
    /// Only the stored state changed; nothing was sent.
    StateUpdated,
    /// Snapshot and stored state already agree.
    NoAction,
    /// An emitted operation failed; details are in the logs.
    Failed,
}

/// Per-evaluator outcomes from [`NotificationEvaluator::check_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationReport {
    pub energy: Evaluation,
    pub nerve: Evaluation,
    pub travel: Evaluation,
    pub hospital: Evaluation,
}

/// Use case evaluating push notifications for one subscriber at a time.
///
/// Stateless across calls; all persistence goes through the store port.
pub struct NotificationEvaluator {
    push: Arc<dyn PushPort>,
    store: Arc<dyn SubscriberStorePort>,
    clock: Arc<dyn ClockPort>,
    config: NotifierConfig,
}

impl NotificationEvaluator {
    pub fn new(
        push: Arc<dyn PushPort>,
        store: Arc<dyn SubscriberStorePort>,
        clock: Arc<dyn ClockPort>,
        config: NotifierConfig,
    ) -> Self {
        Self {
            push,
            store,
            clock,
            config,
        }
    }

    /// Energy bar evaluator: edge-triggered on crossing into full.
    pub async fn check_energy(
        &self,
        snapshot: &StatsSnapshot,
        subscriber: &SubscriberRecord,
    ) -> Evaluation {
        let result = self
            .run_bar(BarKind::Energy, snapshot.energy, subscriber)
            .await;
        settle("energy", &subscriber.uid, result)
    }

    /// Nerve bar evaluator: same contract as energy over the nerve flag.
    pub async fn check_nerve(
        &self,
        snapshot: &StatsSnapshot,
        subscriber: &SubscriberRecord,
    ) -> Evaluation {
        let result = self
            .run_bar(BarKind::Nerve, snapshot.nerve, subscriber)
            .await;
        settle("nerve", &subscriber.uid, result)
    }

    /// Travel evaluator: arrival window with a time-based cooldown.
    pub async fn check_travel(
        &self,
        snapshot: &StatsSnapshot,
        subscriber: &SubscriberRecord,
    ) -> Evaluation {
        let result = self.run_travel(snapshot, subscriber).await;
        settle("travel", &subscriber.uid, result)
    }

    /// Hospital evaluator: three-state machine over the stay lifecycle.
    pub async fn check_hospital(
        &self,
        snapshot: &StatsSnapshot,
        subscriber: &SubscriberRecord,
    ) -> Evaluation {
        let result = self.run_hospital(snapshot, subscriber).await;
        settle("hospital", &subscriber.uid, result)
    }

    /// Run all four evaluators for one subscriber.
    ///
    /// The evaluators are independent, so they run concurrently; each one's
    /// failure handling is already isolated, so a failing hospital check
    /// cannot block energy, nerve, or travel.
    pub async fn check_all(
        &self,
        snapshot: &StatsSnapshot,
        subscriber: &SubscriberRecord,
    ) -> EvaluationReport {
        let (energy, nerve, travel, hospital) = tokio::join!(
            self.check_energy(snapshot, subscriber),
            self.check_nerve(snapshot, subscriber),
            self.check_travel(snapshot, subscriber),
            self.check_hospital(snapshot, subscriber),
        );
        EvaluationReport {
            energy,
            nerve,
            travel,
            hospital,
        }
    }

    async fn run_bar(
        &self,
        kind: BarKind,
        bar: BarStats,
        subscriber: &SubscriberRecord,
    ) -> Result<Evaluation, EvaluatorError> {
        let last_check_full = match kind {
            BarKind::Energy => subscriber.energy_last_check_full,
            BarKind::Nerve => subscriber.nerve_last_check_full,
        };

        let flag_patch = |full: bool| match kind {
            BarKind::Energy => SubscriberPatch::new().energy_flag(full),
            BarKind::Nerve => SubscriberPatch::new().nerve_flag(full),
        };

        match evaluate_bar(bar, last_check_full) {
            BarTransition::BecameFull => {
                self.dispatch(subscriber, Some(messages::bar_full(kind)), flag_patch(true))
                    .await?;
                Ok(Evaluation::Notified)
            }
            BarTransition::Drained => {
                self.store
                    .update(&subscriber.uid, flag_patch(false))
                    .await
                    .map_err(EvaluatorError::Store)?;
                Ok(Evaluation::StateUpdated)
            }
            BarTransition::Steady => Ok(Evaluation::NoAction),
        }
    }

    async fn run_travel(
        &self,
        snapshot: &StatsSnapshot,
        subscriber: &SubscriberRecord,
    ) -> Result<Evaluation, EvaluatorError> {
        let now_millis = self.clock.now_millis();
        if !evaluate_travel(
            &snapshot.travel,
            subscriber.last_travel_notified,
            now_millis,
            &self.config.travel,
        ) {
            return Ok(Evaluation::NoAction);
        }

        self.dispatch(
            subscriber,
            Some(messages::travel_arriving(&snapshot.travel.destination)),
            SubscriberPatch::new().travel_notified(now_millis),
        )
        .await?;
        Ok(Evaluation::Notified)
    }

    async fn run_hospital(
        &self,
        snapshot: &StatsSnapshot,
        subscriber: &SubscriberRecord,
    ) -> Result<Evaluation, EvaluatorError> {
        let release_in = snapshot
            .states
            .hospital_timestamp
            .saturating_sub(self.clock.now_unix_secs());
        let phase = HospitalPhase::classify(release_in, &self.config.hospital);

        let Some((next_status, notice)) =
            hospital_transition(subscriber.hospital_last_status, phase)
        else {
            return Ok(Evaluation::NoAction);
        };

        // Online players watch hospital events happen; suppress the push but
        // still advance the stored state.
        let message = if snapshot.last_action.is_online() {
            None
        } else {
            notice.map(messages::hospital)
        };
        let notified = message.is_some();

        self.dispatch(
            subscriber,
            message,
            SubscriberPatch::new().hospital_status(next_status),
        )
        .await?;

        Ok(if notified {
            Evaluation::Notified
        } else {
            Evaluation::StateUpdated
        })
    }

    /// Issue the emitted operations for one evaluation.
    ///
    /// When a message is present, the send and the patch run concurrently
    /// and both are awaited; a failure on one side never cancels the other.
    async fn dispatch(
        &self,
        subscriber: &SubscriberRecord,
        message: Option<PushMessage>,
        patch: SubscriberPatch,
    ) -> Result<(), EvaluatorError> {
        let Some(message) = message else {
            return self
                .store
                .update(&subscriber.uid, patch)
                .await
                .map_err(EvaluatorError::Store);
        };

        debug!(uid = %subscriber.uid, title = %message.title, "dispatching notification");

        let send = self
            .push
            .send(&subscriber.token, &message, &self.config.delivery);
        let update = self.store.update(&subscriber.uid, patch);

        match tokio::join!(send, update) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(push), Ok(())) => Err(EvaluatorError::Push(push)),
            (Ok(()), Err(store)) => Err(EvaluatorError::Store(store)),
            (Err(push), Err(store)) => Err(EvaluatorError::Both { push, store }),
        }
    }
}

/// Collapse an evaluation result to its outcome, logging failures.
fn settle(
    evaluator: &'static str,
    uid: &PlayerId,
    result: Result<Evaluation, EvaluatorError>,
) -> Evaluation {
    match result {
        Ok(Evaluation::Notified) => {
            info!(uid = %uid, evaluator, "notification sent");
            Evaluation::Notified
        }
        Ok(outcome) => outcome,
        Err(error) => {
            warn!(uid = %uid, evaluator, error = %error, "evaluation failed");
            Evaluation::Failed
        }
    }
}
