//! Onboarding progress gateway
//!
//! Stores unfinished wizard progress under `onboardingProgress` in the
//! local key/value store, using the record layout of the web front end:
//!
//! ```json
//! {
//!   "formData": { "careerGoals": { ... }, "privacy": { ... } },
//!   "currentStep": 2,
//!   "lastUpdated": "2025-01-15T10:30:00.000Z"
//! }
//! ```
//!
//! `currentStep` is 1-based. Steps without answers are omitted on write and
//! empty objects read back as "no answers".

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use hf_core::onboarding::{StepDataStore, StepKey, StepPayload, WizardProgress};
use hf_core::ports::{KeyValueStorePort, OnboardingProgressPort};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::keys;

/// Written shape of the record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredProgress {
    form_data: Map<String, Value>,
    current_step: usize,
    last_updated: String,
}

/// Read shape: every field is checked on its own in [`decode`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawProgress {
    form_data: Value,
    current_step: Value,
    last_updated: Value,
}

pub struct LocalProgressGateway {
    store: Arc<dyn KeyValueStorePort>,
}

impl LocalProgressGateway {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    async fn try_load(&self) -> anyhow::Result<Option<WizardProgress>> {
        let Some(raw) = self
            .store
            .get_item(keys::ONBOARDING_PROGRESS)
            .await
            .context("Failed to read onboarding progress")?
        else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let stored: RawProgress =
            serde_json::from_str(&raw).context("Failed to parse onboarding progress")?;
        Ok(Some(decode(stored)))
    }
}

/// Salvages what it can: a step that does not parse is dropped, a missing
/// or invalid `currentStep` means step 1 and a bad timestamp means epoch.
fn decode(stored: RawProgress) -> WizardProgress {
    let step_number = match &stored.current_step {
        Value::Null => 1,
        value => match value.as_u64().and_then(|n| usize::try_from(n).ok()) {
            Some(0) => 1,
            Some(n) => n,
            None => {
                warn!(current_step = %value, "Invalid currentStep, resuming at step 1");
                1
            }
        },
    };

    let form_data = match stored.form_data {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            warn!(form_data = %other, "formData is not an object, ignoring it");
            Map::new()
        }
    };

    let mut step_data = StepDataStore::new();
    for key in StepKey::ALL {
        let Some(value) = form_data.get(key.form_field()) else {
            continue;
        };
        if is_blank(value) {
            continue;
        }
        match StepPayload::from_value(key, value.clone()) {
            Ok(payload) => {
                if let Err(err) = step_data.set(key, payload) {
                    warn!(step = %key, error = %err, "Skipping saved answers");
                }
            }
            Err(err) => warn!(step = %key, error = %err, "Skipping malformed saved answers"),
        }
    }

    let last_updated = match &stored.last_updated {
        Value::String(ts) => match DateTime::parse_from_rfc3339(ts) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(err) => {
                warn!(last_updated = %ts, error = %err, "Invalid lastUpdated timestamp");
                DateTime::UNIX_EPOCH
            }
        },
        _ => DateTime::UNIX_EPOCH,
    };

    WizardProgress::new(step_number - 1, step_data, last_updated)
}

fn encode(progress: &WizardProgress) -> anyhow::Result<StoredProgress> {
    let mut form_data = Map::new();
    for (key, payload) in progress.step_data.iter() {
        let value = payload
            .to_value()
            .with_context(|| format!("Failed to serialize step `{key}`"))?;
        form_data.insert(key.form_field().to_string(), value);
    }

    Ok(StoredProgress {
        form_data,
        current_step: progress.step_index + 1,
        last_updated: progress
            .last_updated
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[async_trait]
impl OnboardingProgressPort for LocalProgressGateway {
    async fn load(&self) -> Option<WizardProgress> {
        match self.try_load().await {
            Ok(progress) => progress,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "Discarding unreadable onboarding progress");
                None
            }
        }
    }

    async fn save(&self, progress: &WizardProgress) -> anyhow::Result<()> {
        let stored = encode(progress)?;
        let json =
            serde_json::to_string(&stored).context("Failed to serialize onboarding progress")?;
        self.store
            .set_item(keys::ONBOARDING_PROGRESS, &json)
            .await
            .context("Failed to write onboarding progress")?;
        debug!(
            current_step = stored.current_step,
            steps = progress.step_data.len(),
            "Onboarding progress saved"
        );
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        self.store
            .remove_item(keys::ONBOARDING_PROGRESS)
            .await
            .context("Failed to clear onboarding progress")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;
    use hf_core::onboarding::{CareerGoalsPayload, ExperienceLevel, PrivacyPayload};
    use serde_json::json;

    fn gateway_with(raw: Option<&str>) -> (Arc<InMemoryKeyValueStore>, LocalProgressGateway) {
        let store = Arc::new(match raw {
            Some(raw) => InMemoryKeyValueStore::with_entries([(keys::ONBOARDING_PROGRESS, raw)]),
            None => InMemoryKeyValueStore::new(),
        });
        let gateway = LocalProgressGateway::new(store.clone());
        (store, gateway)
    }

    fn sample_progress() -> WizardProgress {
        let step_data: StepDataStore = vec![
            StepPayload::CareerGoals(CareerGoalsPayload {
                industries: vec!["technology".into()],
                roles: vec!["team-lead".into()],
                experience_level: Some(ExperienceLevel::Senior),
                career_goals: vec!["leadership".into()],
            }),
            StepPayload::Privacy(PrivacyPayload::default()),
        ]
        .into_iter()
        .collect();
        WizardProgress::at_millis(1, step_data, 1_736_937_000_250)
    }

    #[tokio::test]
    async fn load_returns_none_when_nothing_saved() {
        let (_, gateway) = gateway_with(None);
        assert_eq!(gateway.load().await, None);
    }

    #[tokio::test]
    async fn save_then_load_yields_same_progress() {
        let (_, gateway) = gateway_with(None);
        let progress = sample_progress();

        gateway.save(&progress).await.unwrap();

        assert_eq!(gateway.load().await, Some(progress));
    }

    #[tokio::test]
    async fn save_writes_front_end_layout() {
        let (store, gateway) = gateway_with(None);
        gateway.save(&sample_progress()).await.unwrap();

        let raw = store
            .get_item(keys::ONBOARDING_PROGRESS)
            .await
            .unwrap()
            .unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["currentStep"], json!(2));
        assert_eq!(value["lastUpdated"], json!("2025-01-15T10:30:00.250Z"));
        assert_eq!(
            value["formData"]["careerGoals"]["experienceLevel"],
            json!("senior")
        );
        assert!(value["formData"].get("skillsAssessment").is_none());
    }

    #[tokio::test]
    async fn load_reads_front_end_record_with_empty_steps() {
        let raw = json!({
            "formData": {
                "careerGoals": {
                    "industries": ["technology"],
                    "roles": ["individual-contributor"],
                    "experienceLevel": "",
                    "careerGoals": []
                },
                "skillsAssessment": {},
                "resumeUpload": {},
                "preferences": {},
                "privacy": {}
            },
            "currentStep": 1,
            "lastUpdated": "2025-01-15T10:30:00.000Z"
        })
        .to_string();
        let (_, gateway) = gateway_with(Some(&raw));

        let progress = gateway.load().await.unwrap();

        assert_eq!(progress.step_index, 0);
        assert_eq!(progress.step_data.len(), 1);
        assert!(progress.step_data.contains(StepKey::CareerGoals));
    }

    #[tokio::test]
    async fn unparsable_record_loads_as_none() {
        for raw in ["{not json", "\"progress\"", "42"] {
            let (_, gateway) = gateway_with(Some(raw));
            assert_eq!(gateway.load().await, None, "record: {raw}");
        }
    }

    #[tokio::test]
    async fn bad_step_is_dropped_and_valid_answers_kept() {
        let raw = json!({
            "formData": {
                "careerGoals": {
                    "industries": ["technology"],
                    "roles": ["individual-contributor"],
                    "experienceLevel": "mid",
                    "careerGoals": ["career-growth"]
                },
                "skillsAssessment": {"selectedSkills": "react"},
                "resumeUpload": {"resumeFile": {}, "extractedSkills": []}
            },
            "currentStep": 3,
            "lastUpdated": "2025-01-15T10:30:00.000Z"
        })
        .to_string();
        let (_, gateway) = gateway_with(Some(&raw));

        let progress = gateway.load().await.unwrap();

        assert_eq!(progress.step_index, 2);
        assert!(progress.step_data.contains(StepKey::CareerGoals));
        assert!(!progress.step_data.contains(StepKey::SkillsAssessment));
        match progress.step_data.get(StepKey::ResumeUpload) {
            Some(StepPayload::ResumeUpload(upload)) => assert_eq!(upload.resume_file, None),
            other => panic!("unexpected resume answers: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_or_zero_current_step_resumes_first_step() {
        for raw in [
            r#"{"formData": {"privacy": {"anonymousMode": true}}}"#,
            r#"{"formData": {"privacy": {"anonymousMode": true}}, "currentStep": 0}"#,
            r#"{"formData": {"privacy": {"anonymousMode": true}}, "currentStep": "three"}"#,
        ] {
            let (_, gateway) = gateway_with(Some(raw));

            let progress = gateway.load().await.unwrap();

            assert_eq!(progress.step_index, 0, "record: {raw}");
            assert!(progress.step_data.contains(StepKey::Privacy), "record: {raw}");
            assert_eq!(progress.last_updated, DateTime::UNIX_EPOCH);
        }
    }

    #[tokio::test]
    async fn bad_timestamp_keeps_answers() {
        let raw = r#"{"formData": {"privacy": {}}, "currentStep": 2, "lastUpdated": "yesterday"}"#;
        let (_, gateway) = gateway_with(Some(raw));

        let progress = gateway.load().await.unwrap();

        assert_eq!(progress.step_index, 1);
        assert_eq!(progress.last_updated, DateTime::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn clear_removes_record() {
        let (store, gateway) = gateway_with(None);
        gateway.save(&sample_progress()).await.unwrap();

        gateway.clear().await.unwrap();

        assert_eq!(gateway.load().await, None);
        assert_eq!(store.get_item(keys::ONBOARDING_PROGRESS).await.unwrap(), None);
    }
}
