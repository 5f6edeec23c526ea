// ==========================================
// 三明治摊位 - 应用层错误类型
// ==========================================
// 传播策略:
// - InputFormatError 在输入循环内消化，不出现在这里
// - 其余错误一律上抛到运行顶层，打印诊断并终止（已追加的行不回滚）
// ==========================================

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::input::{InputFormatError, PromptError};
use crate::ledger::LedgerError;

/// 应用层错误类型
#[derive(Error, Debug)]
pub enum AppError {
    // ===== 输入 =====
    #[error("input closed before valid sales data was entered")]
    InputClosed,

    #[error("invalid data: {0}")]
    InvalidInput(InputFormatError),

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    // ===== 计算 =====
    #[error(transparent)]
    Engine(#[from] EngineError),

    // ===== 账本 =====
    #[error("ledger I/O failed: {0}")]
    Ledger(#[from] LedgerError),

    // ===== 配置 =====
    #[error(transparent)]
    Config(#[from] ConfigError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<PromptError>
impl From<PromptError> for AppError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Closed => AppError::InputClosed,
            PromptError::Io(e) => AppError::Console(e),
        }
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
