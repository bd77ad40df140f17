use async_trait::async_trait;

/// Authentication session as seen by the onboarding flow.
#[async_trait]
pub trait SessionPort: Send + Sync {
    /// Current session token, if any.
    async fn auth_token(&self) -> anyhow::Result<Option<String>>;

    /// A session exists when a non-empty token is stored.
    async fn is_authenticated(&self) -> anyhow::Result<bool> {
        Ok(self
            .auth_token()
            .await?
            .is_some_and(|token| !token.trim().is_empty()))
    }
}

#[cfg(test)]
mockall::mock! {
    pub Session {}

    #[async_trait]
    impl SessionPort for Session {
        async fn auth_token(&self) -> anyhow::Result<Option<String>>;
    }
}
