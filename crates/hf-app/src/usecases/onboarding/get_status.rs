use std::sync::Arc;

use hf_core::ports::{OnboardingProgressPort, OnboardingStatusPort};

use super::OnboardingStatusDto;

/// Use case for reporting where the user stands with onboarding.
pub struct GetOnboardingStatus {
    status: Arc<dyn OnboardingStatusPort>,
    progress: Arc<dyn OnboardingProgressPort>,
}

impl GetOnboardingStatus {
    pub fn new(
        status: Arc<dyn OnboardingStatusPort>,
        progress: Arc<dyn OnboardingProgressPort>,
    ) -> Self {
        Self { status, progress }
    }

    pub async fn execute(&self) -> anyhow::Result<OnboardingStatusDto> {
        let has_completed = self.status.is_completed().await?;
        let saved = self.progress.load().await.map(|p| p.clamped());

        Ok(OnboardingStatusDto {
            has_completed,
            has_saved_progress: saved.is_some(),
            resume_step: saved.as_ref().map(|p| p.current_step()),
            last_updated: saved.map(|p| p.last_updated),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::onboarding::{StepDataStore, StepKey, WizardProgress};
    use hf_core::ports::KeyValueStorePort;
    use hf_infra::{InMemoryKeyValueStore, LocalCompletionFlag, LocalProgressGateway};

    fn use_case(store: Arc<dyn KeyValueStorePort>) -> GetOnboardingStatus {
        GetOnboardingStatus::new(
            Arc::new(LocalCompletionFlag::new(store.clone())),
            Arc::new(LocalProgressGateway::new(store)),
        )
    }

    #[tokio::test]
    async fn fresh_user_has_nothing_saved() {
        let status = use_case(Arc::new(InMemoryKeyValueStore::new()))
            .execute()
            .await
            .unwrap();

        assert!(!status.has_completed);
        assert!(!status.has_saved_progress);
        assert_eq!(status.resume_step, None);
    }

    #[tokio::test]
    async fn saved_progress_reports_resume_step() {
        let store: Arc<dyn KeyValueStorePort> = Arc::new(InMemoryKeyValueStore::new());
        LocalProgressGateway::new(store.clone())
            .save(&WizardProgress::at_millis(2, StepDataStore::new(), 42))
            .await
            .unwrap();

        let status = use_case(store).execute().await.unwrap();

        assert!(status.has_saved_progress);
        assert_eq!(status.resume_step, Some(StepKey::ResumeUpload));
        assert_eq!(status.last_updated.map(|t| t.timestamp_millis()), Some(42));
    }
}
