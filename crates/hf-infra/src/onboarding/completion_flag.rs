//! Standalone onboarding completion flag (`onboardingCompleted`).

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use hf_core::ports::{KeyValueStorePort, OnboardingStatusPort};

use crate::keys;

const COMPLETED: &str = "true";

pub struct LocalCompletionFlag {
    store: Arc<dyn KeyValueStorePort>,
}

impl LocalCompletionFlag {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OnboardingStatusPort for LocalCompletionFlag {
    async fn is_completed(&self) -> anyhow::Result<bool> {
        let value = self
            .store
            .get_item(keys::ONBOARDING_COMPLETED)
            .await
            .context("Failed to read onboarding completion flag")?;
        Ok(value.as_deref() == Some(COMPLETED))
    }

    async fn mark_completed(&self) -> anyhow::Result<()> {
        self.store
            .set_item(keys::ONBOARDING_COMPLETED, COMPLETED)
            .await
            .context("Failed to set onboarding completion flag")
    }

    async fn reset(&self) -> anyhow::Result<()> {
        self.store
            .remove_item(keys::ONBOARDING_COMPLETED)
            .await
            .context("Failed to reset onboarding completion flag")
    }
}
