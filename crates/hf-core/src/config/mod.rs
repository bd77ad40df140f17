//! # Pure Data Module / 纯数据模块
//!
//! ## Responsibilities / 职责
//!
//! - Define configuration data structures / 定义配置数据结构
//! - Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! No validation logic and no default value calculation. Path resolution
//! happens in the bootstrap layer.
//! 禁止验证逻辑与默认值计算，路径解析由启动层负责。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Local key/value store file (may be empty - resolved later)
    /// 本地键值存储文件（可能为空，稍后解析）
    pub local_store_path: PathBuf,

    /// Directory for log files (may be empty)
    /// 日志目录（可能为空）
    pub logs_dir: PathBuf,

    /// Whether logs are also written to files
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Empty strings are valid "facts", nothing is checked here.
    /// 空字符串是合法的"事实"，此处不做任何检查。
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            local_store_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("local_store_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            logs_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("logs_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            local_store_path: PathBuf::new(),
            logs_dir: PathBuf::new(),
            file_logging: false,
        }
    }
}
