//! Onboarding step catalogue.
//!
//! The declaration order of [`StepKey`] is the only source of truth for step
//! sequencing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One page of the onboarding wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StepKey {
    CareerGoals,
    SkillsAssessment,
    ResumeUpload,
    Preferences,
    Privacy,
}

impl StepKey {
    /// All steps in wizard order.
    pub const ALL: [StepKey; 5] = [
        StepKey::CareerGoals,
        StepKey::SkillsAssessment,
        StepKey::ResumeUpload,
        StepKey::Preferences,
        StepKey::Privacy,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position of the step.
    pub fn index(self) -> usize {
        match self {
            StepKey::CareerGoals => 0,
            StepKey::SkillsAssessment => 1,
            StepKey::ResumeUpload => 2,
            StepKey::Preferences => 3,
            StepKey::Privacy => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<StepKey> {
        Self::ALL.get(index).copied()
    }

    /// Step at `index`, clamped into the valid range.
    pub fn at(index: usize) -> StepKey {
        Self::from_index(index).unwrap_or_else(Self::last)
    }

    pub fn first() -> StepKey {
        Self::ALL[0]
    }

    pub fn last() -> StepKey {
        Self::ALL[Self::COUNT - 1]
    }

    pub fn is_last(self) -> bool {
        self == Self::last()
    }

    /// Stable identifier, e.g. `career-goals`.
    pub fn as_str(self) -> &'static str {
        match self {
            StepKey::CareerGoals => "career-goals",
            StepKey::SkillsAssessment => "skills-assessment",
            StepKey::ResumeUpload => "resume-upload",
            StepKey::Preferences => "preferences",
            StepKey::Privacy => "privacy",
        }
    }

    /// Field name used for this step inside the persisted form data.
    pub fn form_field(self) -> &'static str {
        match self {
            StepKey::CareerGoals => "careerGoals",
            StepKey::SkillsAssessment => "skillsAssessment",
            StepKey::ResumeUpload => "resumeUpload",
            StepKey::Preferences => "preferences",
            StepKey::Privacy => "privacy",
        }
    }

    /// Human readable title shown by the step indicator.
    pub fn title(self) -> &'static str {
        match self {
            StepKey::CareerGoals => "Career Goals",
            StepKey::SkillsAssessment => "Skills Assessment",
            StepKey::ResumeUpload => "Resume Upload",
            StepKey::Preferences => "Preferences",
            StepKey::Privacy => "Privacy Settings",
        }
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown onboarding step: {0}")]
pub struct UnknownStepKey(pub String);

impl FromStr for StepKey {
    type Err = UnknownStepKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s || key.form_field() == s)
            .ok_or_else(|| UnknownStepKey(s.to_string()))
    }
}
