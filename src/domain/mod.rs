// ==========================================
// 三明治摊位 - 领域层
// ==========================================
// 职责: 行数据模型与账本表定义（纯数据，无 I/O）
// ==========================================

pub mod rows;
pub mod types;

pub use rows::{
    parse_integer_cells, CellParseError, ItemHeadings, SalesHistory, SalesRow, StockForecastRow,
    StockRow, SurplusRow,
};
pub use types::{LedgerTable, DEFAULT_HISTORY_DAYS, ITEM_COUNT};
