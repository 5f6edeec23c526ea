// ==========================================
// 三明治摊位 - 输入层错误类型
// ==========================================
// InputFormatError 只在输入循环内部流转，不外抛
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 销量输入格式错误（可恢复: 重新提示）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    #[error("'{token}' is not a whole number")]
    NonNumeric { token: String },

    #[error("'{token}' is out of range, values must be between {min} and {max}")]
    OutOfRange { token: String, min: i64, max: i64 },

    #[error("Exactly {expected} values required, you provided {actual}")]
    WrongCount { expected: usize, actual: usize },
}

/// 交互提示错误（不可恢复: 终止本次运行）
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("input closed before valid sales data was entered")]
    Closed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type PromptResult<T> = Result<T, PromptError>;
