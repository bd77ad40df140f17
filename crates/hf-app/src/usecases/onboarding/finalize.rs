use std::sync::Arc;

use hf_core::onboarding::{validate, StepDataStore, StepKey, UserProfile};
use hf_core::ports::{
    OnboardingProgressPort, OnboardingStatusPort, ProfileSubmissionPort, SubmissionError,
    UserRecordPort,
};
use tracing::{info, info_span, Instrument};

/// Errors produced while finalizing onboarding.
#[derive(Debug, thiserror::Error)]
pub enum FinalizeError {
    #[error("onboarding is incomplete, steps without valid answers: {steps:?}")]
    Incomplete { steps: Vec<StepKey> },
    #[error("profile backend unreachable: {0}")]
    Network(String),
    #[error("profile rejected: {0}")]
    Rejected(String),
    #[error("profile conflicts with existing data: {0}")]
    Conflict(String),
    #[error("local storage failed: {0:#}")]
    Storage(#[source] anyhow::Error),
}

impl From<SubmissionError> for FinalizeError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Network(msg) => FinalizeError::Network(msg),
            SubmissionError::Rejected(msg) => FinalizeError::Rejected(msg),
            SubmissionError::Conflict(msg) => FinalizeError::Conflict(msg),
        }
    }
}

/// Use case turning a finished wizard into a stored profile.
///
/// Steps, in order:
/// 1. every step must validate,
/// 2. the profile is submitted,
/// 3. answers are merged into the stored user record, which is flagged as
///    onboarded,
/// 4. the standalone completion flag is set,
/// 5. saved progress is cleared.
///
/// Nothing is rolled back when a later step fails; every write is
/// idempotent, so retrying finishes the job.
pub struct FinalizeOnboarding {
    submission: Arc<dyn ProfileSubmissionPort>,
    user_records: Arc<dyn UserRecordPort>,
    status: Arc<dyn OnboardingStatusPort>,
    progress: Arc<dyn OnboardingProgressPort>,
}

impl FinalizeOnboarding {
    pub fn new(
        submission: Arc<dyn ProfileSubmissionPort>,
        user_records: Arc<dyn UserRecordPort>,
        status: Arc<dyn OnboardingStatusPort>,
        progress: Arc<dyn OnboardingProgressPort>,
    ) -> Self {
        Self {
            submission,
            user_records,
            status,
            progress,
        }
    }

    pub async fn execute(&self, data: &StepDataStore) -> Result<UserProfile, FinalizeError> {
        let span = info_span!("usecase.finalize_onboarding.execute", steps = data.len());
        async move {
            let incomplete: Vec<StepKey> = StepKey::ALL
                .into_iter()
                .filter(|key| !validate(*key, data.get(*key)))
                .collect();
            if !incomplete.is_empty() {
                return Err(FinalizeError::Incomplete { steps: incomplete });
            }

            self.submission
                .submit(&UserProfile::from_step_data(data))
                .await?;

            let mut record = self
                .user_records
                .load_user()
                .await
                .map_err(FinalizeError::Storage)?
                .unwrap_or_default();
            record.profile.merge_step_data(data);
            record.onboarding_completed = true;
            self.user_records
                .save_user(&record)
                .await
                .map_err(FinalizeError::Storage)?;

            self.status
                .mark_completed()
                .await
                .map_err(FinalizeError::Storage)?;
            self.progress
                .clear()
                .await
                .map_err(FinalizeError::Storage)?;

            info!("Onboarding completed");
            Ok(record.profile)
        }
        .instrument(span)
        .await
    }
}
