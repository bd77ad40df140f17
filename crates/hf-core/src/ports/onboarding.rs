//! Onboarding state ports
//!
//! Progress of an unfinished wizard and the standalone completion flag.
//! Implementations are provided by the infrastructure layer.

use async_trait::async_trait;

use crate::onboarding::WizardProgress;

#[async_trait]
pub trait OnboardingProgressPort: Send + Sync {
    /// Load saved progress.
    ///
    /// Missing or unreadable progress is `None`; a broken record must never
    /// keep the user out of the wizard.
    async fn load(&self) -> Option<WizardProgress>;

    /// Overwrite saved progress.
    async fn save(&self, progress: &WizardProgress) -> anyhow::Result<()>;

    /// Remove saved progress.
    async fn clear(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait OnboardingStatusPort: Send + Sync {
    /// Check if onboarding is completed
    async fn is_completed(&self) -> anyhow::Result<bool>;

    /// Mark onboarding as completed
    async fn mark_completed(&self) -> anyhow::Result<()>;

    /// Reset onboarding (for testing or re-onboarding)
    async fn reset(&self) -> anyhow::Result<()>;
}
