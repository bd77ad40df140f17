//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for use case construction.
//! 用于构造用例的依赖分组。
//!
//! **Note / 注意**: This is NOT a Builder pattern. No defaults, no hidden
//! logic, just parameter grouping.
//! **这不是 Builder 模式**，无默认值、无隐藏逻辑，仅用于参数打包。

use std::sync::Arc;

use hf_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
/// 应用依赖分组（非 Builder，仅参数打包）
pub struct AppDeps {
    // Onboarding dependencies / 入门引导依赖
    pub progress: Arc<dyn OnboardingProgressPort>,
    pub onboarding_status: Arc<dyn OnboardingStatusPort>,

    // Account dependencies / 账户依赖
    pub user_records: Arc<dyn UserRecordPort>,
    pub session: Arc<dyn SessionPort>,
    pub profile_submission: Arc<dyn ProfileSubmissionPort>,

    // System dependencies / 系统依赖
    pub clock: Arc<dyn ClockPort>,
}
