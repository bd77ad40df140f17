use std::sync::Arc;

use hf_core::navigation::Route;
use hf_core::ports::{OnboardingStatusPort, SessionPort};
use tracing::info;

use super::OnboardingEntry;

/// Use case guarding the wizard route.
///
/// Visitors without a session go to the authentication portal, users who
/// already finished onboarding go to their dashboard.
pub struct ResolveOnboardingEntry {
    session: Arc<dyn SessionPort>,
    status: Arc<dyn OnboardingStatusPort>,
}

impl ResolveOnboardingEntry {
    pub fn new(session: Arc<dyn SessionPort>, status: Arc<dyn OnboardingStatusPort>) -> Self {
        Self { session, status }
    }

    pub async fn execute(&self) -> anyhow::Result<OnboardingEntry> {
        if !self.session.is_authenticated().await? {
            info!("No session, redirecting to authentication");
            return Ok(OnboardingEntry::Redirect {
                route: Route::AuthenticationPortal,
            });
        }
        if self.status.is_completed().await? {
            return Ok(OnboardingEntry::Redirect {
                route: Route::JobSeekerDashboard,
            });
        }
        Ok(OnboardingEntry::ShowWizard)
    }
}
