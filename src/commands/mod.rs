//! Host command facade
//! 宿主命令层
//!
//! Plain async functions over a shared [`AppRuntime`](crate::bootstrap::AppRuntime).
//! They return serializable DTOs and `String` errors so any host (desktop
//! shell, HTTP handler, test) can forward them unchanged.

pub mod onboarding;

pub use onboarding::{
    enter_onboarding, get_onboarding_status, get_wizard_state, jump_to_step, next_step,
    prev_step, update_step,
};
