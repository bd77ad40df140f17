//! Profile aggregate produced by a completed wizard.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::payload::{
    CareerGoalsPayload, PreferencesPayload, PrivacyPayload, ResumeUploadPayload,
    SkillsAssessmentPayload, StepPayload,
};
use super::serde_helpers::non_object_as_default;
use super::step::StepKey;
use super::store::StepDataStore;

/// The `profile` object of a user record.
///
/// Wizard answers live under their step's form field; anything else the
/// record already carried is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<CareerGoalsPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_assessment: Option<SkillsAssessmentPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_upload: Option<ResumeUploadPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PreferencesPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacyPayload>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn from_step_data(data: &StepDataStore) -> Self {
        let mut profile = Self::default();
        profile.merge_step_data(data);
        profile
    }

    /// Shallow merge: each step present in `data` replaces the stored
    /// answers of that step wholesale, other fields are untouched.
    pub fn merge_step_data(&mut self, data: &StepDataStore) {
        for (_, payload) in data.iter() {
            self.merge_payload(payload.clone());
        }
    }

    pub fn merge_payload(&mut self, payload: StepPayload) {
        match payload {
            StepPayload::CareerGoals(p) => self.career_goals = Some(p),
            StepPayload::SkillsAssessment(p) => self.skills_assessment = Some(p),
            StepPayload::ResumeUpload(p) => self.resume_upload = Some(p),
            StepPayload::Preferences(p) => self.preferences = Some(p),
            StepPayload::Privacy(p) => self.privacy = Some(p),
        }
    }

    pub fn payload(&self, key: StepKey) -> Option<StepPayload> {
        match key {
            StepKey::CareerGoals => self.career_goals.clone().map(StepPayload::CareerGoals),
            StepKey::SkillsAssessment => self
                .skills_assessment
                .clone()
                .map(StepPayload::SkillsAssessment),
            StepKey::ResumeUpload => self.resume_upload.clone().map(StepPayload::ResumeUpload),
            StepKey::Preferences => self.preferences.clone().map(StepPayload::Preferences),
            StepKey::Privacy => self.privacy.clone().map(StepPayload::Privacy),
        }
    }

    /// Whether every wizard step has answers in this profile.
    pub fn is_complete(&self) -> bool {
        StepKey::ALL.iter().all(|key| self.payload(*key).is_some())
    }
}

/// Persisted account record (`userData`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default, deserialize_with = "non_object_as_default")]
    pub profile: UserProfile,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
