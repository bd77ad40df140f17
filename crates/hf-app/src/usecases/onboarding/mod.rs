//! Onboarding use cases
//!
//! This module contains the wizard controller and the use cases around it:
//! finalizing a completed wizard, reporting onboarding status and deciding
//! where a visitor of the wizard route should land.

pub mod context;
pub mod controller;
pub mod entry;
pub mod finalize;
pub mod get_status;

pub use context::{WizardContext, WizardSession};
pub use controller::{WizardController, WizardError};
pub use entry::ResolveOnboardingEntry;
pub use finalize::{FinalizeError, FinalizeOnboarding};
pub use get_status::GetOnboardingStatus;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hf_core::navigation::Route;
use hf_core::onboarding::{NavigationBlock, StepKey, UserProfile, ValidationIssue, WizardState};
use serde::Serialize;
use serde_json::Value;

/// Position of a step relative to the one on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSummaryDto {
    pub key: StepKey,
    pub title: &'static str,
    pub status: StepStatus,
    pub has_data: bool,
    pub valid: bool,
    /// Only already reached steps can be selected in the step indicator.
    pub reachable: bool,
}

/// Everything a view needs to render the wizard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardSnapshot {
    pub state: WizardState,
    pub step_index: usize,
    pub current_step: StepKey,
    pub total_steps: usize,
    pub progress_percent: u8,
    pub steps: Vec<StepSummaryDto>,
    /// Stored answers keyed by step.
    pub data: BTreeMap<StepKey, Value>,
}

/// Result of `next`, `prev` or `jump_to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationOutcome {
    pub snapshot: WizardSnapshot,
    /// Set when the request was refused; the snapshot is then unchanged.
    pub blocked: Option<NavigationBlock>,
    pub completed: Option<CompletionDto>,
}

/// Hand-off to the host once the profile has been stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionDto {
    pub profile: UserProfile,
    pub redirect: Route,
}

/// Result of `update_step`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepUpdateOutcome {
    pub snapshot: WizardSnapshot,
    /// Problems still preventing the updated step from advancing.
    pub issues: Vec<ValidationIssue>,
}

/// Data transfer object for onboarding status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingStatusDto {
    pub has_completed: bool,
    pub has_saved_progress: bool,
    pub resume_step: Option<StepKey>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Where a visitor of the wizard route should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OnboardingEntry {
    Redirect { route: Route },
    ShowWizard,
}
