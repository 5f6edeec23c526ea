// ==========================================
// 三明治摊位 - 账本快照读取
// ==========================================
// 职责: 把账本中的字符串单元格转换为领域行
// - 当前库存: stock 表最后一行
// - 销量历史: sales 表前 N 列，去掉表头后取最后 history_days 个值
// - 商品名: stock 表表头
// ==========================================

use tracing::instrument;

use crate::domain::{parse_integer_cells, ItemHeadings, LedgerTable, SalesHistory, StockRow, ITEM_COUNT};
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::gateway::LedgerGateway;

/// 读取当前库存（stock 表最后一行）
///
/// stock 表只有表头时，最后一行是表头，解析失败返回 MalformedCell
pub fn read_stock_row<L: LedgerGateway + ?Sized>(ledger: &L) -> LedgerResult<StockRow> {
    let row = ledger.row_count(LedgerTable::Stock)?;
    let cells = ledger.read_last_row(LedgerTable::Stock)?;
    StockRow::from_cells(&cells).map_err(|source| LedgerError::MalformedCell {
        table: LedgerTable::Stock,
        row,
        source,
    })
}

/// 读取每个商品最近 history_days 天销量
///
/// # 参数
/// - history_days: 每列保留的最大天数
///
/// # 返回
/// - SalesHistory: 外层 ITEM_COUNT 列，内层按时间先后
#[instrument(skip(ledger))]
pub fn read_sales_history<L: LedgerGateway + ?Sized>(
    ledger: &L,
    history_days: usize,
) -> LedgerResult<SalesHistory> {
    let mut columns = Vec::with_capacity(ITEM_COUNT);
    for column in 1..=ITEM_COUNT {
        let cells = ledger.read_column(LedgerTable::Sales, column)?;
        // 第 1 行为表头
        let body = cells.get(1..).unwrap_or(&[]);
        let start = body.len().saturating_sub(history_days);
        let recent = &body[start..];

        let values = parse_integer_cells(recent).map_err(|source| LedgerError::MalformedCell {
            table: LedgerTable::Sales,
            // 列内第 source.column 个值对应的账本行号
            row: 1 + start + source.column,
            source,
        })?;
        columns.push(values);
    }
    Ok(SalesHistory::new(columns))
}

/// 读取商品名（stock 表表头）
pub fn read_item_headings<L: LedgerGateway + ?Sized>(ledger: &L) -> LedgerResult<ItemHeadings> {
    Ok(ItemHeadings::new(ledger.read_header_row(LedgerTable::Stock)?))
}
