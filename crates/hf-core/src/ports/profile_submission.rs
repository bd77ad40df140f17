//! Profile submission port
//!
//! Hands a completed profile to whatever backend owns user profiles.

use async_trait::async_trait;
use thiserror::Error;

use crate::onboarding::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("profile backend unreachable: {0}")]
    Network(String),

    #[error("profile rejected: {0}")]
    Rejected(String),

    #[error("profile conflicts with existing data: {0}")]
    Conflict(String),
}

#[async_trait]
pub trait ProfileSubmissionPort: Send + Sync {
    async fn submit(&self, profile: &UserProfile) -> Result<(), SubmissionError>;
}
