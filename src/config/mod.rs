// ==========================================
// 三明治摊位 - 配置层
// ==========================================
// 职责: 账本位置/后端、预测参数、日志级别
// ==========================================

pub mod app_config;

pub use app_config::{
    default_config_path, default_ledger_path, env_keys, AppConfig, ConfigError, ConfigResult,
    APP_DIR_NAME,
};
