//! Host navigation routes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pages the wizard hands control to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "/authentication-portal")]
    AuthenticationPortal,
    #[serde(rename = "/job-seeker-onboarding-wizard")]
    OnboardingWizard,
    #[serde(rename = "/job-seeker-dashboard")]
    JobSeekerDashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::AuthenticationPortal => "/authentication-portal",
            Route::OnboardingWizard => "/job-seeker-onboarding-wizard",
            Route::JobSeekerDashboard => "/job-seeker-dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
