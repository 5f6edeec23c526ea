// ==========================================
// 三明治摊位 - 应用层
// ==========================================
// 职责: 单次运行编排、账本初始化与查看、运行报告
// ==========================================

pub mod report;
pub mod session;
pub mod setup;

pub use report::{DisplayEntry, SessionReport, StockDisplay};
pub use session::{SessionRunner, SessionState};
pub use setup::{initialize_ledger, parse_headings, show_table, InitSummary};
