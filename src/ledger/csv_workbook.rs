// ==========================================
// 三明治摊位 - CSV 工作簿账本
// ==========================================
// 存储: 一个目录，每张表一个文件（sales.csv / surplus.csv / stock.csv）
// 文件不存在 → 工作表不存在；允许行长度不一致
// ==========================================

use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::LedgerTable;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::gateway::{extract_column, pick_row, to_cells, LedgerGateway};

pub struct CsvWorkbookLedger {
    dir: PathBuf,
}

impl CsvWorkbookLedger {
    /// 打开工作簿目录（不存在时创建）
    pub fn open<P: AsRef<Path>>(dir: P) -> LedgerResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// 某张表对应的文件路径
    pub fn table_path(&self, table: LedgerTable) -> PathBuf {
        self.dir.join(format!("{}.csv", table.as_str()))
    }

    fn all_rows(&self, table: LedgerTable) -> LedgerResult<Vec<Vec<String>>> {
        let path = self.table_path(table);
        if !path.exists() {
            return Err(LedgerError::TableNotFound(table));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_path(&path)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn write_record(&self, table: LedgerTable, cells: &[String]) -> LedgerResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.table_path(table))?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(file);
        writer.write_record(cells)?;
        writer.flush()?;
        Ok(())
    }
}

impl LedgerGateway for CsvWorkbookLedger {
    fn append_row(&mut self, table: LedgerTable, values: &[i64]) -> LedgerResult<()> {
        if !self.table_path(table).exists() {
            return Err(LedgerError::TableNotFound(table));
        }
        self.write_record(table, &to_cells(values))?;
        debug!(%table, "row appended");
        Ok(())
    }

    fn write_header(&mut self, table: LedgerTable, headings: &[String]) -> LedgerResult<bool> {
        let path = self.table_path(table);
        if path.exists() && !self.all_rows(table)?.is_empty() {
            return Ok(false);
        }
        self.write_record(table, headings)?;
        Ok(true)
    }

    fn row_count(&self, table: LedgerTable) -> LedgerResult<usize> {
        Ok(self.all_rows(table)?.len())
    }

    fn read_row(&self, table: LedgerTable, row: usize) -> LedgerResult<Vec<String>> {
        pick_row(table, &self.all_rows(table)?, row)
    }

    fn read_column(&self, table: LedgerTable, column: usize) -> LedgerResult<Vec<String>> {
        extract_column(&self.all_rows(table)?, column)
    }
}
