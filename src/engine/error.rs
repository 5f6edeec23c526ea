// ==========================================
// 三明治摊位 - 计算层错误类型
// ==========================================

use thiserror::Error;

/// 计算层错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 某商品没有任何历史销量，无法求平均
    #[error("insufficient sales history for item {item} (column {column}): no values recorded")]
    InsufficientHistory {
        /// 商品下标（从 0 开始）
        item: usize,
        /// 账本列号（从 1 开始）
        column: usize,
    },

    /// 结果超出 i64 可表示范围
    #[error("{operation} result for item {item} (column {column}) is out of range")]
    Overflow {
        operation: &'static str,
        item: usize,
        column: usize,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
