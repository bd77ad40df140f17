//! Local profile submission.
//!
//! There is no profile backend yet; profiles live in the local user record,
//! so submission accepts every profile immediately.

use async_trait::async_trait;
use hf_core::onboarding::UserProfile;
use hf_core::ports::{ProfileSubmissionPort, SubmissionError};
use tracing::info;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalProfileSubmission;

impl LocalProfileSubmission {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProfileSubmissionPort for LocalProfileSubmission {
    async fn submit(&self, profile: &UserProfile) -> Result<(), SubmissionError> {
        info!(complete = profile.is_complete(), "Profile accepted locally");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_any_profile() {
        let submission = LocalProfileSubmission::new();
        assert_eq!(submission.submit(&UserProfile::default()).await, Ok(()));
    }
}
