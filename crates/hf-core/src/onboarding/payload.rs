//! Typed payloads collected by each onboarding step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_helpers::{empty_as_none, lenient_amount};
use super::step::StepKey;

pub const MAX_INDUSTRIES: usize = 3;
pub const MAX_ROLES: usize = 2;
pub const MIN_SELECTED_SKILLS: usize = 5;
pub const MAX_SELECTED_SKILLS: usize = 10;
pub const MIN_RATED_SKILLS: usize = 5;
pub const MIN_SKILL_RATING: u8 = 1;
pub const MAX_SKILL_RATING: u8 = 5;
pub const MAX_LOCATION_PREFERENCES: usize = 5;
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted for resume uploads (PDF, Word, DOCX).
pub const ALLOWED_RESUME_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Payload of a single step, keyed by the step it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum StepPayload {
    CareerGoals(CareerGoalsPayload),
    SkillsAssessment(SkillsAssessmentPayload),
    ResumeUpload(ResumeUploadPayload),
    Preferences(PreferencesPayload),
    Privacy(PrivacyPayload),
}

impl StepPayload {
    pub fn key(&self) -> StepKey {
        match self {
            StepPayload::CareerGoals(_) => StepKey::CareerGoals,
            StepPayload::SkillsAssessment(_) => StepKey::SkillsAssessment,
            StepPayload::ResumeUpload(_) => StepKey::ResumeUpload,
            StepPayload::Preferences(_) => StepKey::Preferences,
            StepPayload::Privacy(_) => StepKey::Privacy,
        }
    }

    /// Parses the JSON form data of `key` into its typed payload.
    pub fn from_value(key: StepKey, value: Value) -> Result<StepPayload, serde_json::Error> {
        Ok(match key {
            StepKey::CareerGoals => StepPayload::CareerGoals(serde_json::from_value(value)?),
            StepKey::SkillsAssessment => {
                StepPayload::SkillsAssessment(serde_json::from_value(value)?)
            }
            StepKey::ResumeUpload => StepPayload::ResumeUpload(serde_json::from_value(value)?),
            StepKey::Preferences => StepPayload::Preferences(serde_json::from_value(value)?),
            StepKey::Privacy => StepPayload::Privacy(serde_json::from_value(value)?),
        })
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            StepPayload::CareerGoals(p) => serde_json::to_value(p),
            StepPayload::SkillsAssessment(p) => serde_json::to_value(p),
            StepPayload::ResumeUpload(p) => serde_json::to_value(p),
            StepPayload::Preferences(p) => serde_json::to_value(p),
            StepPayload::Privacy(p) => serde_json::to_value(p),
        }
    }

    /// Applies submission rules: unconfirmed resume skills are dropped and
    /// missing privacy toggles take their defaults. Idempotent.
    pub fn normalized(self) -> StepPayload {
        match self {
            StepPayload::ResumeUpload(p) => StepPayload::ResumeUpload(p.with_confirmed_skills()),
            StepPayload::Privacy(p) => StepPayload::Privacy(p.with_defaults()),
            other => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Career goals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    /// 0-2 years
    Entry,
    /// 2-4 years
    Junior,
    /// 4-7 years
    Mid,
    /// 7-10 years
    Senior,
    /// 10+ years
    Lead,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerGoalsPayload {
    pub industries: Vec<String>,
    pub roles: Vec<String>,
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience_level: Option<ExperienceLevel>,
    pub career_goals: Vec<String>,
}

// ---------------------------------------------------------------------------
// Skills assessment
// ---------------------------------------------------------------------------

/// Outcome of a skill quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
}

impl QuizResult {
    /// Grades `answers` against `correct`, question by question.
    ///
    /// Returns `None` for an empty quiz.
    pub fn grade(answers: &[usize], correct: &[usize]) -> Option<QuizResult> {
        if correct.is_empty() {
            return None;
        }
        let score = answers
            .iter()
            .zip(correct)
            .filter(|(given, expected)| given == expected)
            .count() as u32;
        let total = correct.len() as u32;
        Some(QuizResult {
            score,
            total,
            percentage: f64::from(score) / f64::from(total) * 100.0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn from_rating(rating: u8) -> SkillLevel {
        match rating {
            0..=2 => SkillLevel::Beginner,
            3..=4 => SkillLevel::Intermediate,
            _ => SkillLevel::Advanced,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsAssessmentPayload {
    /// Skill id to a 1..=5 star rating.
    pub skill_ratings: BTreeMap<String, u8>,
    pub selected_skills: Vec<String>,
    pub quiz_answers: BTreeMap<String, QuizResult>,
}

impl SkillsAssessmentPayload {
    pub fn skill_level(&self, skill: &str) -> Option<SkillLevel> {
        self.skill_ratings.get(skill).copied().map(SkillLevel::from_rating)
    }
}

// ---------------------------------------------------------------------------
// Resume upload
// ---------------------------------------------------------------------------

/// Reference to an uploaded resume file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFile {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeRejection {
    #[error("unsupported resume type `{0}`, upload a PDF or Word document")]
    UnsupportedType(String),
    #[error("resume is {size} bytes, the limit is {max} bytes")]
    TooLarge { size: u64, max: u64 },
}

impl ResumeFile {
    /// Checks the upload limits applied before a file is accepted.
    pub fn check(&self) -> Result<(), ResumeRejection> {
        if !ALLOWED_RESUME_MIME_TYPES.contains(&self.mime_type.as_str()) {
            return Err(ResumeRejection::UnsupportedType(self.mime_type.clone()));
        }
        if self.size_bytes > MAX_RESUME_BYTES {
            return Err(ResumeRejection::TooLarge {
                size: self.size_bytes,
                max: MAX_RESUME_BYTES,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSkill {
    pub skill: String,
    /// Extraction confidence in percent.
    pub confidence: u8,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
}

impl ExtractedSkill {
    pub fn confidence_label(&self) -> ConfidenceLabel {
        match self.confidence {
            80..=u8::MAX => ConfidenceLabel::High,
            60..=79 => ConfidenceLabel::Medium,
            _ => ConfidenceLabel::Low,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeUploadPayload {
    #[serde(deserialize_with = "empty_as_none")]
    pub resume_file: Option<ResumeFile>,
    pub extracted_skills: Vec<ExtractedSkill>,
}

impl ResumeUploadPayload {
    /// Keeps every extracted skill the user did not explicitly reject.
    pub fn with_confirmed_skills(mut self) -> Self {
        self.extracted_skills
            .retain(|skill| skill.confirmed != Some(false));
        self
    }
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Cad,
    Aud,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteWork {
    FullyRemote,
    Hybrid,
    OccasionalRemote,
    NoRemote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkArrangement {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

/// Expected yearly salary bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRange {
    #[serde(
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub min: Option<u64>,
    #[serde(
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesPayload {
    pub salary_range: SalaryRange,
    pub currency: Currency,
    pub location_preferences: Vec<String>,
    #[serde(
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub remote_work: Option<RemoteWork>,
    pub work_arrangement: Vec<WorkArrangement>,
    pub job_type: Vec<String>,
    pub company_size: Vec<String>,
    pub benefits: Vec<String>,
}

// ---------------------------------------------------------------------------
// Privacy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Limited,
    Private,
}

pub const DATA_SHARING_DEFAULTS: [(&str, bool); 4] = [
    ("analytics", true),
    ("recommendations", true),
    ("marketing", false),
    ("third-party", false),
];

pub const NOTIFICATION_DEFAULTS: [(&str, bool); 5] = [
    ("job-matches", true),
    ("recruiter-messages", true),
    ("application-updates", true),
    ("learning-reminders", false),
    ("weekly-digest", false),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivacyPayload {
    pub profile_visibility: ProfileVisibility,
    pub anonymous_mode: bool,
    pub data_sharing: BTreeMap<String, bool>,
    pub notifications: BTreeMap<String, bool>,
}

impl PrivacyPayload {
    /// Fills toggles the user never touched; explicit choices are kept.
    pub fn with_defaults(mut self) -> Self {
        for (option, enabled) in DATA_SHARING_DEFAULTS {
            self.data_sharing.entry(option.to_string()).or_insert(enabled);
        }
        for (option, enabled) in NOTIFICATION_DEFAULTS {
            self.notifications
                .entry(option.to_string())
                .or_insert(enabled);
        }
        self
    }

    pub fn enabled_data_sharing(&self) -> usize {
        self.data_sharing.values().filter(|on| **on).count()
    }

    pub fn enabled_notifications(&self) -> usize {
        self.notifications.values().filter(|on| **on).count()
    }
}
