//! Business logic use cases

pub mod onboarding;

pub use onboarding::{
    FinalizeError, FinalizeOnboarding, GetOnboardingStatus, ResolveOnboardingEntry,
    WizardController, WizardError,
};
