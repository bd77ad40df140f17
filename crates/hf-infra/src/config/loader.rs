//! Configuration file loader
//! 配置文件加载器
//!
//! Reads TOML and maps it onto [`AppConfig`]. No validation and no defaults
//! are applied here; empty values are facts for the bootstrap layer to
//! resolve.

use std::path::Path;

use anyhow::Context;
use hf_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
