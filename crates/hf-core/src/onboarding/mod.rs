//! Onboarding domain models
//!
//! This module defines the job-seeker onboarding wizard: the ordered step
//! catalogue, the typed payload collected by each step, the validators that
//! gate forward navigation, and the pure state machine driving the flow.

pub mod payload;
pub mod profile;
pub mod progress;
pub mod state_machine;
pub mod step;
pub mod store;
pub mod validation;

mod serde_helpers;

pub use payload::{
    CareerGoalsPayload, Currency, ExperienceLevel, ExtractedSkill, PreferencesPayload,
    PrivacyPayload, ProfileVisibility, QuizResult, RemoteWork, ResumeFile, ResumeRejection,
    ResumeUploadPayload, SalaryRange, SkillLevel, SkillsAssessmentPayload, StepPayload,
    WorkArrangement,
};
pub use profile::{UserProfile, UserRecord};
pub use progress::WizardProgress;
pub use state_machine::{NavigationBlock, WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use step::{StepKey, UnknownStepKey};
pub use store::{StepDataError, StepDataStore};
pub use validation::{issues, issues_for, validate, ValidationIssue};
