//! Onboarding wizard commands
//! 入门向导命令
//!
//! Host-facing entry points. Every command opens a root span, runs one use
//! case and maps errors to a display string.

use hf_app::usecases::onboarding::{
    NavigationOutcome, OnboardingEntry, OnboardingStatusDto, StepUpdateOutcome, WizardSnapshot,
};
use hf_core::onboarding::{StepKey, StepPayload};
use serde_json::Value;
use tracing::{info_span, Instrument};

use crate::bootstrap::AppRuntime;

/// Decide whether the wizard should be shown
/// 判断是否显示向导
///
/// Without a session the host is sent to the authentication portal, after
/// completion to the dashboard.
pub async fn enter_onboarding(runtime: &AppRuntime) -> Result<OnboardingEntry, String> {
    let span = info_span!("command.onboarding.enter");
    async {
        let uc = runtime.usecases().resolve_onboarding_entry();
        uc.execute().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

/// Get current wizard state
/// 获取当前向导状态
///
/// The first call of a process resumes saved progress.
pub async fn get_wizard_state(runtime: &AppRuntime) -> Result<WizardSnapshot, String> {
    let span = info_span!("command.onboarding.get_state");
    async { Ok(runtime.usecases().wizard().snapshot().await) }
        .instrument(span)
        .await
}

/// Store the answers of one step
/// 保存单个步骤的答案
///
/// `step` accepts the step id (`career-goals`) or its form field
/// (`careerGoals`). `payload` is the raw form object of that step.
pub async fn update_step(
    runtime: &AppRuntime,
    step: String,
    payload: Value,
) -> Result<StepUpdateOutcome, String> {
    let span = info_span!("command.onboarding.update_step", step = %step);
    async {
        let key = step.parse::<StepKey>().map_err(|e| e.to_string())?;
        let payload = StepPayload::from_value(key, payload)
            .map_err(|e| format!("invalid {key} answers: {e}"))?;
        runtime
            .usecases()
            .wizard()
            .update_step(key, payload)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

/// Advance to the next step, or finish on the last one
/// 前进到下一步，最后一步时完成向导
pub async fn next_step(runtime: &AppRuntime) -> Result<NavigationOutcome, String> {
    let span = info_span!("command.onboarding.next");
    async {
        runtime
            .usecases()
            .wizard()
            .next()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

/// Go back one step
/// 返回上一步
pub async fn prev_step(runtime: &AppRuntime) -> Result<NavigationOutcome, String> {
    let span = info_span!("command.onboarding.prev");
    async {
        runtime
            .usecases()
            .wizard()
            .prev()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

/// Jump to an already reached step
/// 跳转到已到达的步骤
pub async fn jump_to_step(
    runtime: &AppRuntime,
    target: usize,
) -> Result<NavigationOutcome, String> {
    let span = info_span!("command.onboarding.jump_to", target);
    async {
        runtime
            .usecases()
            .wizard()
            .jump_to(target)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}

/// Get onboarding status
/// 获取入门引导状态
pub async fn get_onboarding_status(runtime: &AppRuntime) -> Result<OnboardingStatusDto, String> {
    let span = info_span!("command.onboarding.get_status");
    async {
        let uc = runtime.usecases().get_onboarding_status();
        uc.execute().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await
}
