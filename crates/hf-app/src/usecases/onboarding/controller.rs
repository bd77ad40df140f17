//! Wizard controller.
//!
//! This module coordinates the wizard state machine and its side effects:
//! persisting progress after every change and finalizing the profile.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hf_core::navigation::Route;
use hf_core::onboarding::{
    issues, StepDataError, StepKey, StepPayload, WizardAction, WizardEvent, WizardProgress,
    WizardState, WizardStateMachine,
};
use hf_core::ports::{ClockPort, OnboardingProgressPort};
use tracing::{debug, info, info_span, warn, Instrument};

use super::context::{WizardContext, WizardSession};
use super::finalize::{FinalizeError, FinalizeOnboarding};
use super::{CompletionDto, NavigationOutcome, StepUpdateOutcome, WizardSnapshot};

/// Errors produced by the wizard controller.
///
/// Refused navigation is not an error; it is reported through
/// [`NavigationOutcome::blocked`].
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    StepData(#[from] StepDataError),
    #[error("failed to save onboarding progress: {0:#}")]
    Persistence(#[source] anyhow::Error),
    #[error("onboarding could not be completed: {0}")]
    Finalize(#[from] FinalizeError),
    #[error("the wizard is not accepting answers in its current state")]
    NotEditing,
}

/// Controller that drives wizard state and side effects.
pub struct WizardController {
    context: Arc<WizardContext>,
    seeded: AtomicBool,

    progress: Arc<dyn OnboardingProgressPort>,
    clock: Arc<dyn ClockPort>,
    finalize: Arc<FinalizeOnboarding>,
}

impl WizardController {
    pub fn new(
        progress: Arc<dyn OnboardingProgressPort>,
        clock: Arc<dyn ClockPort>,
        finalize: Arc<FinalizeOnboarding>,
    ) -> Self {
        Self {
            context: WizardContext::default().arc(),
            seeded: AtomicBool::new(false),
            progress,
            clock,
            finalize,
        }
    }

    /// Current wizard view. The first call resumes saved progress.
    pub async fn snapshot(&self) -> WizardSnapshot {
        if !self.seeded.load(Ordering::Acquire) {
            let _dispatch_guard = self.context.acquire_dispatch_lock().await;
            self.seed_from_progress().await;
        }
        self.context.get_session().await.snapshot()
    }

    /// Stores the answers of `step` and saves progress right away.
    pub async fn update_step(
        &self,
        step: StepKey,
        payload: StepPayload,
    ) -> Result<StepUpdateOutcome, WizardError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.seed_from_progress().await;

        let span = info_span!("usecase.wizard_controller.update_step", step = %step);
        async {
            let mut session = self.context.get_session().await;
            if !session.state.is_editing() {
                return Err(WizardError::NotEditing);
            }

            session.data.set(step, payload)?;
            let remaining = session.data.get(step).map(issues).unwrap_or_default();
            self.persist(&session).await?;
            self.context.set_session(session.clone()).await;

            debug!(issues = remaining.len(), "step answers stored");
            Ok(StepUpdateOutcome {
                snapshot: session.snapshot(),
                issues: remaining,
            })
        }
        .instrument(span)
        .await
    }

    pub async fn next(&self) -> Result<NavigationOutcome, WizardError> {
        self.dispatch(WizardEvent::Next).await
    }

    pub async fn prev(&self) -> Result<NavigationOutcome, WizardError> {
        self.dispatch(WizardEvent::Prev).await
    }

    pub async fn jump_to(&self, target: usize) -> Result<NavigationOutcome, WizardError> {
        self.dispatch(WizardEvent::JumpTo { target }).await
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<NavigationOutcome, WizardError> {
        // Serialize concurrent dispatches so two calls never act on the
        // same starting state.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.seed_from_progress().await;

        let span = info_span!("usecase.wizard_controller.dispatch", event = ?event);
        async {
            let mut session = self.context.get_session().await;
            let mut pending_events = vec![event];
            let mut blocked = None;
            let mut completed = None;
            let mut failure = None;

            while let Some(event) = pending_events.pop() {
                let from = session.state;
                let (next, actions) =
                    WizardStateMachine::transition(session.state, event, &session.data);
                info!(from = ?from, to = ?next, event = ?event, "wizard state transition");
                session.state = next;

                for action in actions {
                    debug!(?action, "wizard executing action");
                    match action {
                        WizardAction::PersistProgress => self.persist(&session).await?,
                        WizardAction::ReportBlocked(reason) => {
                            info!(?reason, "wizard navigation refused");
                            blocked = Some(reason);
                        }
                        WizardAction::Finalize => {
                            match self.finalize.execute(&session.data).await {
                                Ok(profile) => {
                                    completed = Some(CompletionDto {
                                        profile,
                                        redirect: Route::JobSeekerDashboard,
                                    });
                                    pending_events.push(WizardEvent::FinalizeSucceeded);
                                }
                                Err(err) => {
                                    warn!(error = %err, "onboarding finalization failed");
                                    failure = Some(err);
                                    pending_events.push(WizardEvent::FinalizeFailed);
                                }
                            }
                        }
                    }
                }
            }

            self.context.set_session(session.clone()).await;
            if let Some(err) = failure {
                return Err(WizardError::Finalize(err));
            }
            Ok(NavigationOutcome {
                snapshot: session.snapshot(),
                blocked,
                completed,
            })
        }
        .instrument(span)
        .await
    }

    async fn persist(&self, session: &WizardSession) -> Result<(), WizardError> {
        let progress = WizardProgress::at_millis(
            session.state.step_index(),
            session.data.clone(),
            self.clock.now_ms(),
        );
        self.progress
            .save(&progress)
            .await
            .map_err(WizardError::Persistence)
    }

    /// Loads saved progress once. Must be called with the dispatch lock held.
    async fn seed_from_progress(&self) {
        if self.seeded.load(Ordering::Acquire) {
            return;
        }

        let session = match self.progress.load().await {
            Some(progress) => {
                let progress = progress.clamped();
                info!(
                    step_index = progress.step_index,
                    steps = progress.step_data.len(),
                    "resuming onboarding progress"
                );
                WizardSession::new(
                    WizardState::resume(progress.step_index),
                    progress.step_data,
                )
            }
            None => WizardSession::fresh(),
        };
        self.context.set_session(session).await;
        self.seeded.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hf_core::onboarding::{
        CareerGoalsPayload, ExperienceLevel, NavigationBlock, PrivacyPayload, StepDataStore,
        UserProfile, UserRecord, ValidationIssue,
    };
    use hf_core::ports::{
        OnboardingStatusPort, ProfileSubmissionPort, SubmissionError, UserRecordPort,
    };
    use std::sync::Mutex;

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        initial: Option<WizardProgress>,
        saved: Mutex<Vec<WizardProgress>>,
        fail_saves: bool,
    }

    #[async_trait]
    impl OnboardingProgressPort for RecordingProgress {
        async fn load(&self) -> Option<WizardProgress> {
            self.initial.clone()
        }

        async fn save(&self, progress: &WizardProgress) -> anyhow::Result<()> {
            if self.fail_saves {
                anyhow::bail!("store is read-only");
            }
            self.saved.lock().unwrap().push(progress.clone());
            Ok(())
        }

        async fn clear(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct RejectingSubmission;

    #[async_trait]
    impl ProfileSubmissionPort for RejectingSubmission {
        async fn submit(&self, _profile: &UserProfile) -> Result<(), SubmissionError> {
            Err(SubmissionError::Network("offline".into()))
        }
    }

    struct NoUsers;

    #[async_trait]
    impl UserRecordPort for NoUsers {
        async fn load_user(&self) -> anyhow::Result<Option<UserRecord>> {
            Ok(None)
        }

        async fn save_user(&self, _record: &UserRecord) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct NoFlag;

    #[async_trait]
    impl OnboardingStatusPort for NoFlag {
        async fn is_completed(&self) -> anyhow::Result<bool> {
            Ok(false)
        }

        async fn mark_completed(&self) -> anyhow::Result<()> {
            Ok(())
        }

        async fn reset(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn controller(progress: Arc<RecordingProgress>) -> WizardController {
        let finalize = FinalizeOnboarding::new(
            Arc::new(RejectingSubmission),
            Arc::new(NoUsers),
            Arc::new(NoFlag),
            progress.clone(),
        );
        WizardController::new(progress, Arc::new(FixedClock(1_000)), Arc::new(finalize))
    }

    fn valid_career_goals() -> StepPayload {
        StepPayload::CareerGoals(CareerGoalsPayload {
            industries: vec!["technology".into()],
            roles: vec!["individual-contributor".into()],
            experience_level: Some(ExperienceLevel::Entry),
            career_goals: vec!["career-growth".into()],
        })
    }

    #[tokio::test]
    async fn resumed_index_is_clamped() {
        let progress = Arc::new(RecordingProgress {
            initial: Some(WizardProgress::at_millis(12, StepDataStore::new(), 0)),
            ..Default::default()
        });

        let snapshot = controller(progress).snapshot().await;

        assert_eq!(snapshot.step_index, StepKey::COUNT - 1);
    }

    #[tokio::test]
    async fn update_step_rejects_mismatched_payload() {
        let progress = Arc::new(RecordingProgress::default());
        let controller = controller(progress.clone());

        let err = controller
            .update_step(StepKey::Preferences, valid_career_goals())
            .await
            .unwrap_err();

        assert!(matches!(err, WizardError::StepData(_)));
        assert!(progress.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_step_reports_remaining_issues() {
        let progress = Arc::new(RecordingProgress::default());
        let controller = controller(progress.clone());

        let outcome = controller
            .update_step(
                StepKey::CareerGoals,
                StepPayload::CareerGoals(CareerGoalsPayload {
                    industries: vec!["technology".into()],
                    ..Default::default()
                }),
            )
            .await
            .unwrap();

        assert_eq!(outcome.issues.len(), 3);
        assert!(outcome.issues.contains(&ValidationIssue::Missing {
            field: "experienceLevel"
        }));
        assert_eq!(progress.saved.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blocked_navigation_persists_nothing() {
        let progress = Arc::new(RecordingProgress::default());
        let controller = controller(progress.clone());

        let outcome = controller.prev().await.unwrap();
        assert_eq!(outcome.blocked, Some(NavigationBlock::AtFirstStep));

        let outcome = controller.jump_to(3).await.unwrap();
        assert_eq!(
            outcome.blocked,
            Some(NavigationBlock::AheadOfCurrent {
                target: 3,
                current: 0
            })
        );
        assert!(progress.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_save_leaves_step_unchanged() {
        let progress = Arc::new(RecordingProgress {
            initial: Some(WizardProgress::at_millis(
                0,
                vec![valid_career_goals()].into_iter().collect(),
                0,
            )),
            fail_saves: true,
            ..Default::default()
        });
        let controller = controller(progress);

        let err = controller.next().await.unwrap_err();

        assert!(matches!(err, WizardError::Persistence(_)));
        assert_eq!(controller.snapshot().await.step_index, 0);
    }

    #[tokio::test]
    async fn failed_finalization_stays_completing_and_can_go_back() {
        let data: StepDataStore = vec![StepPayload::Privacy(PrivacyPayload::default())]
            .into_iter()
            .collect();
        let progress = Arc::new(RecordingProgress {
            initial: Some(WizardProgress::at_millis(4, data, 0)),
            ..Default::default()
        });
        let controller = controller(progress);

        let err = controller.next().await.unwrap_err();
        assert!(matches!(
            err,
            WizardError::Finalize(FinalizeError::Incomplete { .. })
        ));
        assert_eq!(controller.snapshot().await.state, WizardState::Completing);

        let err = controller
            .update_step(
                StepKey::Privacy,
                StepPayload::Privacy(PrivacyPayload::default()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::NotEditing));

        let outcome = controller.prev().await.unwrap();
        assert_eq!(outcome.snapshot.state, WizardState::Editing { step_index: 4 });
    }

    #[tokio::test]
    async fn network_failure_surfaces_as_finalize_error() {
        let progress = Arc::new(RecordingProgress {
            initial: Some(WizardProgress::at_millis(
                4,
                super::super::finalize::tests_support::complete_data(),
                0,
            )),
            ..Default::default()
        });
        let controller = controller(progress);

        let err = controller.next().await.unwrap_err();

        assert!(matches!(
            err,
            WizardError::Finalize(FinalizeError::Network(_))
        ));
        let retry = controller.next().await.unwrap_err();
        assert!(matches!(
            retry,
            WizardError::Finalize(FinalizeError::Network(_))
        ));
    }
}
