// ==========================================
// 三明治摊位 - 内存账本
// ==========================================
// 用途: 测试与演示；进程退出即丢失
// 表需先写表头创建，否则视为工作表不存在
// ==========================================

use std::collections::HashMap;

use crate::domain::LedgerTable;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::gateway::{extract_column, pick_row, to_cells, LedgerGateway};

#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    tables: HashMap<LedgerTable, Vec<Vec<String>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以表头创建三张表
    pub fn with_headings(headings: &[String]) -> Self {
        let mut ledger = Self::new();
        for table in LedgerTable::ALL {
            ledger.tables.insert(table, vec![headings.to_vec()]);
        }
        ledger
    }

    fn rows(&self, table: LedgerTable) -> LedgerResult<&Vec<Vec<String>>> {
        self.tables
            .get(&table)
            .ok_or(LedgerError::TableNotFound(table))
    }
}

impl LedgerGateway for MemoryLedger {
    fn append_row(&mut self, table: LedgerTable, values: &[i64]) -> LedgerResult<()> {
        let rows = self
            .tables
            .get_mut(&table)
            .ok_or(LedgerError::TableNotFound(table))?;
        rows.push(to_cells(values));
        Ok(())
    }

    fn write_header(&mut self, table: LedgerTable, headings: &[String]) -> LedgerResult<bool> {
        let rows = self.tables.entry(table).or_default();
        if !rows.is_empty() {
            return Ok(false);
        }
        rows.push(headings.to_vec());
        Ok(true)
    }

    fn row_count(&self, table: LedgerTable) -> LedgerResult<usize> {
        Ok(self.rows(table)?.len())
    }

    fn read_row(&self, table: LedgerTable, row: usize) -> LedgerResult<Vec<String>> {
        pick_row(table, self.rows(table)?, row)
    }

    fn read_column(&self, table: LedgerTable, column: usize) -> LedgerResult<Vec<String>> {
        extract_column(self.rows(table)?, column)
    }
}
