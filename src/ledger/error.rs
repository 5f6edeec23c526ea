// ==========================================
// 三明治摊位 - 账本层错误类型
// ==========================================
// 账本读写失败一律不自动重试，向上传播并终止本次运行
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

use crate::domain::{CellParseError, LedgerTable};

/// 账本层错误类型
#[derive(Error, Debug)]
pub enum LedgerError {
    // ===== 结构错误 =====
    #[error("worksheet not found: {0}")]
    TableNotFound(LedgerTable),

    #[error("{kind} index must start at 1, got 0")]
    InvalidIndex { kind: &'static str },

    #[error("worksheet {table} row out of range: row={row}, rows={rows}")]
    RowOutOfRange {
        table: LedgerTable,
        row: usize,
        rows: usize,
    },

    // ===== 数据错误 =====
    #[error("worksheet {table} row {row} is malformed: {source}")]
    MalformedCell {
        table: LedgerTable,
        row: usize,
        #[source]
        source: CellParseError,
    },

    #[error("cell encoding error: {0}")]
    Encoding(String),

    // ===== 存储错误 =====
    #[error("database error: {0}")]
    Storage(String),

    #[error("CSV read/write failed: {0}")]
    Csv(String),

    #[error("file I/O failed: {0}")]
    Io(String),
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Csv(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Encoding(err.to_string())
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Io(err.to_string())
    }
}

/// Result 类型别名
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_english() {
        assert_eq!(
            LedgerError::TableNotFound(LedgerTable::Stock).to_string(),
            "worksheet not found: stock"
        );
        let err = LedgerError::MalformedCell {
            table: LedgerTable::Sales,
            row: 3,
            source: CellParseError {
                column: 2,
                value: "x".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "worksheet sales row 3 is malformed: cell 2 ('x') is not an integer"
        );
        assert!(LedgerError::RowOutOfRange {
            table: LedgerTable::Surplus,
            row: 9,
            rows: 2
        }
        .to_string()
        .starts_with("worksheet surplus row out of range"));
    }
}
