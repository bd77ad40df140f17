//! Wizard state machine.
//!
//! Defines a pure state transition function for the onboarding wizard.
//! Side effects are returned as [`WizardAction`]s and carried out by the
//! application layer.

use serde::{Deserialize, Serialize};

use super::step::StepKey;
use super::store::StepDataStore;
use super::validation::{issues_for, ValidationIssue};

/// Wizard flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum WizardState {
    /// The user is filling in the step at `step_index`.
    Editing { step_index: usize },
    /// All steps validated, the profile is being submitted.
    Completing,
    /// Profile stored, wizard finished.
    Completed,
}

impl WizardState {
    pub fn start() -> Self {
        WizardState::Editing { step_index: 0 }
    }

    /// Resumes editing at `step_index`, clamped into range.
    pub fn resume(step_index: usize) -> Self {
        WizardState::Editing {
            step_index: step_index.min(StepKey::COUNT - 1),
        }
    }

    /// Index of the step on screen. `Completing` and `Completed` stay on the
    /// last step.
    pub fn step_index(&self) -> usize {
        match self {
            WizardState::Editing { step_index } => *step_index,
            WizardState::Completing | WizardState::Completed => StepKey::COUNT - 1,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, WizardState::Editing { .. })
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// Continue to the next step, or complete on the last one.
    Next,
    /// Go back one step.
    Prev,
    /// Jump to an already reached step.
    JumpTo { target: usize },
    /// Profile submission finished.
    FinalizeSucceeded,
    /// Profile submission failed, the wizard may retry.
    FinalizeFailed,
}

/// Why a navigation request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NavigationBlock {
    /// The current step does not validate.
    Invalid {
        step: StepKey,
        issues: Vec<ValidationIssue>,
    },
    AtFirstStep,
    /// Direct navigation only reaches steps up to the current one.
    AheadOfCurrent { target: usize, current: usize },
    /// The profile is being submitted.
    NotEditing,
    AlreadyCompleted,
}

/// Side effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// Save step index and step data.
    PersistProgress,
    /// Submit the profile and mark onboarding complete.
    Finalize,
    /// Surface a refused request to the caller.
    ReportBlocked(NavigationBlock),
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        data: &StepDataStore,
    ) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::Editing { step_index }, WizardEvent::Next) => {
                let step = StepKey::at(step_index);
                let issues = issues_for(step, data.get(step));
                if !issues.is_empty() {
                    return blocked(state, NavigationBlock::Invalid { step, issues });
                }
                if step.is_last() {
                    (WizardState::Completing, vec![WizardAction::Finalize])
                } else {
                    (
                        WizardState::Editing {
                            step_index: step.index() + 1,
                        },
                        vec![WizardAction::PersistProgress],
                    )
                }
            }
            (WizardState::Editing { step_index }, WizardEvent::Prev) => {
                if step_index == 0 {
                    return blocked(state, NavigationBlock::AtFirstStep);
                }
                (
                    WizardState::resume(step_index - 1),
                    vec![WizardAction::PersistProgress],
                )
            }
            (WizardState::Editing { step_index }, WizardEvent::JumpTo { target }) => {
                if target > step_index {
                    return blocked(
                        state,
                        NavigationBlock::AheadOfCurrent {
                            target,
                            current: step_index,
                        },
                    );
                }
                if target == step_index {
                    return (state, Vec::new());
                }
                (
                    WizardState::Editing { step_index: target },
                    vec![WizardAction::PersistProgress],
                )
            }
            (WizardState::Completing, WizardEvent::Next) => {
                (WizardState::Completing, vec![WizardAction::Finalize])
            }
            (WizardState::Completing, WizardEvent::Prev) => (
                WizardState::resume(StepKey::COUNT - 1),
                vec![WizardAction::PersistProgress],
            ),
            (WizardState::Completing, WizardEvent::JumpTo { .. }) => {
                blocked(state, NavigationBlock::NotEditing)
            }
            (WizardState::Completing, WizardEvent::FinalizeSucceeded) => {
                (WizardState::Completed, Vec::new())
            }
            (WizardState::Completing, WizardEvent::FinalizeFailed) => {
                (WizardState::Completing, Vec::new())
            }
            (WizardState::Completed, _) => blocked(state, NavigationBlock::AlreadyCompleted),
            // Finalize results that arrive while editing are stale.
            (state, _event) => (state, Vec::new()),
        }
    }
}

fn blocked(state: WizardState, reason: NavigationBlock) -> (WizardState, Vec<WizardAction>) {
    (state, vec![WizardAction::ReportBlocked(reason)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::payload::{
        CareerGoalsPayload, ExperienceLevel, PrivacyPayload, StepPayload,
    };
    use proptest::prelude::*;

    fn valid_career_goals() -> StepPayload {
        StepPayload::CareerGoals(CareerGoalsPayload {
            industries: vec!["technology".into()],
            roles: vec!["individual-contributor".into()],
            experience_level: Some(ExperienceLevel::Junior),
            career_goals: vec!["skill-development".into()],
        })
    }

    fn store_with(payloads: Vec<StepPayload>) -> StepDataStore {
        payloads.into_iter().collect()
    }

    #[test]
    fn next_with_valid_step_advances_and_persists() {
        let data = store_with(vec![valid_career_goals()]);
        let (next, actions) =
            WizardStateMachine::transition(WizardState::start(), WizardEvent::Next, &data);

        assert_eq!(next, WizardState::Editing { step_index: 1 });
        assert_eq!(actions, vec![WizardAction::PersistProgress]);
    }

    #[test]
    fn next_with_missing_data_is_blocked() {
        let (next, actions) = WizardStateMachine::transition(
            WizardState::start(),
            WizardEvent::Next,
            &StepDataStore::new(),
        );

        assert_eq!(next, WizardState::start());
        assert_eq!(
            actions,
            vec![WizardAction::ReportBlocked(NavigationBlock::Invalid {
                step: StepKey::CareerGoals,
                issues: vec![ValidationIssue::NoData {
                    step: StepKey::CareerGoals
                }],
            })]
        );
    }

    #[test]
    fn next_on_last_step_starts_finalization() {
        let data = store_with(vec![StepPayload::Privacy(PrivacyPayload::default())]);
        let (next, actions) =
            WizardStateMachine::transition(WizardState::resume(4), WizardEvent::Next, &data);

        assert_eq!(next, WizardState::Completing);
        assert_eq!(actions, vec![WizardAction::Finalize]);
    }

    #[test]
    fn prev_on_first_step_is_blocked() {
        let (next, actions) = WizardStateMachine::transition(
            WizardState::start(),
            WizardEvent::Prev,
            &StepDataStore::new(),
        );

        assert_eq!(next, WizardState::start());
        assert_eq!(
            actions,
            vec![WizardAction::ReportBlocked(NavigationBlock::AtFirstStep)]
        );
    }

    #[test]
    fn jump_back_then_forward_again_is_rejected() {
        let data = StepDataStore::new();
        let (back, actions) = WizardStateMachine::transition(
            WizardState::resume(3),
            WizardEvent::JumpTo { target: 1 },
            &data,
        );
        assert_eq!(back, WizardState::Editing { step_index: 1 });
        assert_eq!(actions, vec![WizardAction::PersistProgress]);

        let (forward, actions) =
            WizardStateMachine::transition(back, WizardEvent::JumpTo { target: 3 }, &data);
        assert_eq!(forward, WizardState::Editing { step_index: 1 });
        assert_eq!(
            actions,
            vec![WizardAction::ReportBlocked(
                NavigationBlock::AheadOfCurrent {
                    target: 3,
                    current: 1
                }
            )]
        );
    }

    #[test]
    fn jump_to_current_step_does_nothing() {
        let (next, actions) = WizardStateMachine::transition(
            WizardState::resume(2),
            WizardEvent::JumpTo { target: 2 },
            &StepDataStore::new(),
        );
        assert_eq!(next, WizardState::resume(2));
        assert!(actions.is_empty());
    }

    #[test]
    fn completing_retries_or_returns_to_last_step() {
        let data = StepDataStore::new();
        let (retry, actions) =
            WizardStateMachine::transition(WizardState::Completing, WizardEvent::Next, &data);
        assert_eq!(retry, WizardState::Completing);
        assert_eq!(actions, vec![WizardAction::Finalize]);

        let (back, actions) =
            WizardStateMachine::transition(WizardState::Completing, WizardEvent::Prev, &data);
        assert_eq!(back, WizardState::Editing { step_index: 4 });
        assert_eq!(actions, vec![WizardAction::PersistProgress]);

        let (failed, actions) = WizardStateMachine::transition(
            WizardState::Completing,
            WizardEvent::FinalizeFailed,
            &data,
        );
        assert_eq!(failed, WizardState::Completing);
        assert!(actions.is_empty());

        let (done, _) = WizardStateMachine::transition(
            WizardState::Completing,
            WizardEvent::FinalizeSucceeded,
            &data,
        );
        assert_eq!(done, WizardState::Completed);
    }

    #[test]
    fn completed_wizard_refuses_navigation() {
        let (next, actions) = WizardStateMachine::transition(
            WizardState::Completed,
            WizardEvent::Prev,
            &StepDataStore::new(),
        );
        assert_eq!(next, WizardState::Completed);
        assert_eq!(
            actions,
            vec![WizardAction::ReportBlocked(NavigationBlock::AlreadyCompleted)]
        );
    }

    #[test]
    fn state_serializes_with_phase_tag() {
        let json = serde_json::to_value(WizardState::Editing { step_index: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "phase": "editing", "step_index": 2 }));
    }

    proptest! {
        #[test]
        fn jump_ahead_never_changes_state(current in 0usize..StepKey::COUNT, offset in 1usize..8) {
            let state = WizardState::resume(current);
            let (next, actions) = WizardStateMachine::transition(
                state,
                WizardEvent::JumpTo { target: current + offset },
                &StepDataStore::new(),
            );
            prop_assert_eq!(next, state);
            prop_assert!(!actions.contains(&WizardAction::PersistProgress));
        }

        #[test]
        fn next_on_empty_data_never_moves(current in 0usize..StepKey::COUNT - 1) {
            let state = WizardState::resume(current);
            let (next, _) =
                WizardStateMachine::transition(state, WizardEvent::Next, &StepDataStore::new());
            prop_assert_eq!(next, state);
        }

        #[test]
        fn accepted_navigation_stays_in_range(
            start in 0usize..StepKey::COUNT,
            events in proptest::collection::vec(0u8..3, 0..24),
        ) {
            let data = store_with(vec![valid_career_goals()]);
            let mut state = WizardState::resume(start);
            for code in events {
                let event = match code {
                    0 => WizardEvent::Next,
                    1 => WizardEvent::Prev,
                    _ => WizardEvent::JumpTo { target: state.step_index() / 2 },
                };
                state = WizardStateMachine::transition(state, event, &data).0;
                prop_assert!(state.step_index() < StepKey::COUNT);
            }
        }
    }
}
