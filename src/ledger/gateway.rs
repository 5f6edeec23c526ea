// ==========================================
// 三明治摊位 - 账本网关 Trait
// ==========================================
// 用途: 三张只追加表的行/列读写接口
// 实现者: SqliteLedger, CsvWorkbookLedger, MemoryLedger
// 约定: 行号、列号均从 1 开始；第 1 行为表头
// ==========================================

use crate::domain::LedgerTable;
use crate::ledger::error::{LedgerError, LedgerResult};

pub trait LedgerGateway {
    /// 追加一行（永不覆盖已有行）
    fn append_row(&mut self, table: LedgerTable, values: &[i64]) -> LedgerResult<()>;

    /// 写入表头
    ///
    /// # 返回
    /// - Ok(true): 表为空，已写入第 1 行
    /// - Ok(false): 表已有数据，未做改动
    fn write_header(&mut self, table: LedgerTable, headings: &[String]) -> LedgerResult<bool>;

    /// 行数（含表头）
    fn row_count(&self, table: LedgerTable) -> LedgerResult<usize>;

    /// 读取第 row 行
    fn read_row(&self, table: LedgerTable, row: usize) -> LedgerResult<Vec<String>>;

    /// 读取第 column 列（自上而下，含表头，去掉尾部空单元格）
    fn read_column(&self, table: LedgerTable, column: usize) -> LedgerResult<Vec<String>>;

    /// 读取最后一行（表中只有表头时返回表头）
    fn read_last_row(&self, table: LedgerTable) -> LedgerResult<Vec<String>> {
        let rows = self.row_count(table)?;
        if rows == 0 {
            return Err(LedgerError::RowOutOfRange { table, row: 1, rows });
        }
        self.read_row(table, rows)
    }

    /// 读取表头（第 1 行）
    fn read_header_row(&self, table: LedgerTable) -> LedgerResult<Vec<String>> {
        self.read_row(table, 1)
    }
}

/// 检查 1-based 下标
pub(crate) fn check_index(kind: &'static str, index: usize) -> LedgerResult<usize> {
    if index == 0 {
        return Err(LedgerError::InvalidIndex { kind });
    }
    Ok(index - 1)
}

/// 从若干行中取出某一列，缺失单元格补空串，去掉尾部空单元格
pub(crate) fn extract_column<'a, I>(rows: I, column: usize) -> LedgerResult<Vec<String>>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let idx = check_index("column", column)?;
    let mut values: Vec<String> = rows
        .into_iter()
        .map(|row| row.get(idx).cloned().unwrap_or_default())
        .collect();
    while values.last().is_some_and(|v| v.is_empty()) {
        values.pop();
    }
    Ok(values)
}

/// 按 1-based 行号取行
pub(crate) fn pick_row(
    table: LedgerTable,
    rows: &[Vec<String>],
    row: usize,
) -> LedgerResult<Vec<String>> {
    let idx = check_index("row", row)?;
    rows.get(idx)
        .cloned()
        .ok_or(LedgerError::RowOutOfRange {
            table,
            row,
            rows: rows.len(),
        })
}

pub(crate) fn to_cells(values: &[i64]) -> Vec<String> {
    values.iter().map(i64::to_string).collect()
}
