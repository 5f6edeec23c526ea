// ==========================================
// 三明治摊位 - 应用配置
// ==========================================
// 加载顺序: 内置默认值 → JSON 配置文件 → 环境变量 → 命令行参数
// 存储: <config_dir>/love-sandwiches/config.json（可选）
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::DEFAULT_HISTORY_DAYS;
use crate::engine::RoundingRule;
use crate::ledger::LedgerBackend;

/// 应用目录名（数据目录 / 配置目录下）
pub const APP_DIR_NAME: &str = "love-sandwiches";

// ==========================================
// 配置键 / 环境变量
// ==========================================
pub mod env_keys {
    pub const CONFIG_PATH: &str = "LOVE_SANDWICHES_CONFIG";
    pub const LEDGER_PATH: &str = "LOVE_SANDWICHES_LEDGER";
    pub const BACKEND: &str = "LOVE_SANDWICHES_BACKEND";
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config (path: {path}): {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config (path: {path}): {message}")]
    Parse { path: String, message: String },

    #[error("invalid config value (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 账本存储后端
    pub backend: LedgerBackend,

    /// SQLite 文件或 CSV 目录；为空时使用数据目录下的默认位置
    pub ledger_path: Option<PathBuf>,

    /// 预测使用的历史天数
    pub history_days: usize,

    /// 预测取整规则
    pub rounding: RoundingRule,

    /// 默认日志过滤（RUST_LOG 优先）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: LedgerBackend::default(),
            ledger_path: None,
            history_days: DEFAULT_HISTORY_DAYS,
            rounding: RoundingRule::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// 加载配置（默认值 → 文件 → 环境变量）
    ///
    /// # 参数
    /// - explicit_path: 命令行指定的配置文件；必须存在
    ///
    /// 未显式指定时，依次尝试环境变量 LOVE_SANDWICHES_CONFIG 与默认配置文件（存在才读取）
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        let env_path = std::env::var(env_keys::CONFIG_PATH)
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let mut config = match explicit_path.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::from_file(&path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取（缺省字段使用默认值）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 应用环境变量覆写
    ///
    /// # 参数
    /// - lookup: 环境变量读取函数（测试时可注入）
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_keys::LEDGER_PATH) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                self.ledger_path = Some(PathBuf::from(trimmed));
            }
        }

        if let Some(raw) = lookup(env_keys::BACKEND) {
            if !raw.trim().is_empty() {
                self.backend = raw.parse().map_err(|message| ConfigError::InvalidValue {
                    key: env_keys::BACKEND.to_string(),
                    value: raw.clone(),
                    message,
                })?;
            }
        }
        Ok(())
    }

    /// 校验配置值
    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "history_days".to_string(),
                value: self.history_days.to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "log_level".to_string(),
                value: self.log_level.clone(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// 实际使用的账本位置
    pub fn resolved_ledger_path(&self) -> PathBuf {
        self.ledger_path
            .clone()
            .unwrap_or_else(|| default_ledger_path(self.backend))
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.json"))
}

/// 默认账本位置（用户数据目录；取不到时回退到当前目录）
pub fn default_ledger_path(backend: LedgerBackend) -> PathBuf {
    let base = dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."));

    match backend {
        LedgerBackend::Sqlite => base.join("love_sandwiches.db"),
        LedgerBackend::Csv => base.join("love_sandwiches"),
    }
}
