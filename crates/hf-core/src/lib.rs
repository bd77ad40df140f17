//! HireFlow core domain
//!
//! Onboarding wizard models, validators and the pure wizard state machine,
//! together with the port traits implemented by `hf-infra`.

pub mod app_dirs;
pub mod config;
pub mod navigation;
pub mod onboarding;
pub mod ports;

pub use config::AppConfig;
pub use navigation::Route;
pub use onboarding::{
    StepDataStore, StepKey, StepPayload, UserProfile, UserRecord, WizardAction, WizardEvent,
    WizardProgress, WizardState, WizardStateMachine,
};
