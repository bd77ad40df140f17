//! Local store keys shared with the web front end.
//!
//! These names are part of the stored data format and must not change.

pub const ONBOARDING_PROGRESS: &str = "onboardingProgress";
pub const ONBOARDING_COMPLETED: &str = "onboardingCompleted";
pub const USER_DATA: &str = "userData";
pub const AUTH_TOKEN: &str = "authToken";
