use std::collections::BTreeMap;
use std::sync::Arc;

use hf_core::onboarding::{validate, StepDataStore, StepKey, WizardState};
use tokio::sync::Mutex;
use tracing::warn;

use super::{StepStatus, StepSummaryDto, WizardSnapshot};

/// Wizard state plus the answers collected so far.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    pub state: WizardState,
    pub data: StepDataStore,
}

impl WizardSession {
    pub fn new(state: WizardState, data: StepDataStore) -> Self {
        Self { state, data }
    }

    /// Step 0 with no answers.
    pub fn fresh() -> Self {
        Self::new(WizardState::start(), StepDataStore::new())
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        let step_index = self.state.step_index();
        let progress_percent = match self.state {
            WizardState::Editing { .. } => (step_index * 100 / (StepKey::COUNT - 1)) as u8,
            WizardState::Completing | WizardState::Completed => 100,
        };

        let steps = StepKey::ALL
            .into_iter()
            .map(|key| {
                let status = match key.index() {
                    i if i < step_index => StepStatus::Completed,
                    i if i == step_index => StepStatus::Current,
                    _ => StepStatus::Upcoming,
                };
                StepSummaryDto {
                    key,
                    title: key.title(),
                    status,
                    has_data: self.data.contains(key),
                    valid: validate(key, self.data.get(key)),
                    reachable: self.state.is_editing() && key.index() <= step_index,
                }
            })
            .collect();

        let mut data = BTreeMap::new();
        for (key, payload) in self.data.iter() {
            match payload.to_value() {
                Ok(value) => {
                    data.insert(key, value);
                }
                Err(err) => warn!(step = %key, error = %err, "Failed to render step data"),
            }
        }

        WizardSnapshot {
            state: self.state,
            step_index,
            current_step: StepKey::at(step_index),
            total_steps: StepKey::COUNT,
            progress_percent,
            steps,
            data,
        }
    }
}

/// Shared wizard context containing the session and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: serializes every mutating controller call.
/// - `session`: guards reads and the final write of a dispatch.
#[derive(Clone)]
pub struct WizardContext {
    session: Arc<Mutex<WizardSession>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl WizardContext {
    pub fn new(initial: WizardSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Does NOT acquire `dispatch_lock`.
    pub async fn get_session(&self) -> WizardSession {
        self.session.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_session(&self, session: WizardSession) {
        let mut guard = self.session.lock().await;
        *guard = session;
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardSession::fresh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::onboarding::{PrivacyPayload, StepPayload};

    #[test]
    fn fresh_snapshot_starts_at_zero_percent() {
        let snapshot = WizardSession::fresh().snapshot();

        assert_eq!(snapshot.step_index, 0);
        assert_eq!(snapshot.current_step, StepKey::CareerGoals);
        assert_eq!(snapshot.total_steps, 5);
        assert_eq!(snapshot.progress_percent, 0);
        assert_eq!(snapshot.steps[0].status, StepStatus::Current);
        assert_eq!(snapshot.steps[1].status, StepStatus::Upcoming);
        assert!(snapshot.data.is_empty());
    }

    #[test]
    fn snapshot_marks_earlier_steps_completed() {
        let data: StepDataStore = vec![StepPayload::Privacy(PrivacyPayload::default())]
            .into_iter()
            .collect();
        let session = WizardSession::new(WizardState::Editing { step_index: 3 }, data);

        let snapshot = session.snapshot();

        assert_eq!(snapshot.progress_percent, 75);
        assert_eq!(snapshot.steps[2].status, StepStatus::Completed);
        assert!(snapshot.steps[2].reachable);
        assert!(!snapshot.steps[4].reachable);
        assert!(snapshot.steps[4].has_data);
        assert!(snapshot.steps[4].valid);
        assert!(snapshot.data.contains_key(&StepKey::Privacy));
    }

    #[test]
    fn completing_snapshot_is_full_progress() {
        let session = WizardSession::new(WizardState::Completing, StepDataStore::new());
        let snapshot = session.snapshot();

        assert_eq!(snapshot.progress_percent, 100);
        assert_eq!(snapshot.current_step, StepKey::Privacy);
        assert!(snapshot.steps.iter().all(|step| !step.reachable));
    }

    #[tokio::test]
    async fn set_session_replaces_state() {
        let context = WizardContext::default();
        let _guard = context.acquire_dispatch_lock().await;

        context
            .set_session(WizardSession::new(
                WizardState::Editing { step_index: 2 },
                StepDataStore::new(),
            ))
            .await;

        assert_eq!(context.get_session().await.state.step_index(), 2);
    }
}
