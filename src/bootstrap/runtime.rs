//! # Use Cases Accessor
//!
//! `AppRuntime` owns the wired dependencies and the single wizard
//! controller of this process. Commands reach use cases through
//! `runtime.usecases()`.
//!
//! ## Adding New Use Cases
//!
//! 1. Ensure use case has a `new()` constructor taking its required ports
//! 2. Add a method to `UseCases` that calls `new()` with deps
//! 3. Commands can now call `runtime.usecases().your_use_case()`

use std::path::Path;
use std::sync::Arc;

use hf_app::usecases::{
    FinalizeOnboarding, GetOnboardingStatus, ResolveOnboardingEntry, WizardController,
};
use hf_app::AppDeps;
use hf_core::config::AppConfig;
use hf_infra::DirsAppDirsAdapter;

use super::config::{default_config_path, load_config_or_empty, resolve_paths};
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;

/// Application runtime with dependencies.
///
/// ## Architecture / 架构
///
/// Use cases without in-memory state are built fresh on every call. The
/// wizard controller is cached so that every command sees the same
/// session.
///
/// 无状态用例在每次调用时新建；向导控制器被缓存，所有命令共享同一会话。
pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
    /// Cached wizard controller / 缓存的向导控制器
    wizard: Arc<WizardController>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        let wizard = Arc::new(Self::build_wizard(&deps));
        Self { deps, wizard }
    }

    /// Get use cases accessor
    /// 获取用例访问器
    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }

    fn build_wizard(deps: &AppDeps) -> WizardController {
        let finalize = Arc::new(FinalizeOnboarding::new(
            deps.profile_submission.clone(),
            deps.user_records.clone(),
            deps.onboarding_status.clone(),
            deps.progress.clone(),
        ));
        WizardController::new(deps.progress.clone(), deps.clock.clone(), finalize)
    }
}

/// Use cases accessor for AppRuntime
/// AppRuntime 的用例访问器
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    /// Create a new UseCases accessor from AppRuntime.
    /// 从 AppRuntime 创建新的 UseCases 访问器。
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    /// The shared wizard controller.
    pub fn wizard(&self) -> Arc<WizardController> {
        self.runtime.wizard.clone()
    }

    /// Route guard for the wizard.
    /// 向导路由守卫。
    pub fn resolve_onboarding_entry(&self) -> ResolveOnboardingEntry {
        ResolveOnboardingEntry::new(
            self.runtime.deps.session.clone(),
            self.runtime.deps.onboarding_status.clone(),
        )
    }

    pub fn get_onboarding_status(&self) -> GetOnboardingStatus {
        GetOnboardingStatus::new(
            self.runtime.deps.onboarding_status.clone(),
            self.runtime.deps.progress.clone(),
        )
    }
}

/// Build a runtime from already loaded config.
/// 从已加载的配置构建运行时。
pub fn create_runtime(config: &AppConfig) -> anyhow::Result<AppRuntime> {
    Ok(AppRuntime::new(wire_dependencies(config)?))
}

/// Full startup: load config, install tracing, wire the runtime.
/// 完整启动：加载配置、安装 tracing、连接运行时。
///
/// `config_path` defaults to `config.toml` in the app data directory.
pub fn start(config_path: Option<&Path>) -> anyhow::Result<AppRuntime> {
    let app_dirs = DirsAppDirsAdapter::new();
    let config = match config_path {
        Some(path) => load_config_or_empty(path)?,
        None => load_config_or_empty(&default_config_path(&app_dirs)?)?,
    };

    let logs_dir = if config.file_logging {
        Some(resolve_paths(&config, &app_dirs)?.logs_dir)
    } else {
        None
    };
    init_tracing_subscriber(logs_dir.as_deref())?;

    create_runtime(&config)
}
