// ==========================================
// 三明治摊位 - 账本层
// ==========================================
// 职责: sales / surplus / stock 三张只追加表的读写
// 支持: SQLite, CSV 工作簿目录, 内存
// ==========================================

pub mod csv_workbook;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod snapshot;
pub mod sqlite;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use csv_workbook::CsvWorkbookLedger;
pub use error::{LedgerError, LedgerResult};
pub use gateway::LedgerGateway;
pub use memory::MemoryLedger;
pub use snapshot::{read_item_headings, read_sales_history, read_stock_row};
pub use sqlite::SqliteLedger;

// ==========================================
// LedgerBackend - 账本存储后端
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerBackend {
    #[default]
    Sqlite,
    Csv,
}

impl fmt::Display for LedgerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerBackend::Sqlite => write!(f, "sqlite"),
            LedgerBackend::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for LedgerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(LedgerBackend::Sqlite),
            "csv" => Ok(LedgerBackend::Csv),
            other => Err(format!("unknown ledger backend '{}' (expected sqlite or csv)", other)),
        }
    }
}

/// 打开账本（返回已就绪的句柄，调用方无需关心后端）
///
/// # 参数
/// - backend: 存储后端
/// - path: SQLite 文件路径或 CSV 目录
pub fn open_ledger(backend: LedgerBackend, path: &Path) -> LedgerResult<Box<dyn LedgerGateway>> {
    tracing::info!(%backend, path = %path.display(), "opening ledger");
    match backend {
        LedgerBackend::Sqlite => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let path = path
                .to_str()
                .ok_or_else(|| LedgerError::Io(format!("non UTF-8 path: {}", path.display())))?;
            Ok(Box::new(SqliteLedger::open(path)?))
        }
        LedgerBackend::Csv => Ok(Box::new(CsvWorkbookLedger::open(path)?)),
    }
}
