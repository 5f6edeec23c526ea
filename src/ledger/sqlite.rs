// ==========================================
// 三明治摊位 - SQLite 账本
// ==========================================
// 存储: ledger_sheet（工作表登记）+ ledger_row（JSON 单元格数组）
// 追加: 事务内取 MAX(row_no)+1，不覆盖已有行
// ==========================================

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use crate::db::{init_ledger_schema, open_sqlite_connection, read_schema_version, CURRENT_SCHEMA_VERSION};
use crate::domain::LedgerTable;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::gateway::{check_index, extract_column, to_cells, LedgerGateway};

pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// 打开（必要时创建）账本数据库
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn open(db_path: &str) -> LedgerResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Self::from_connection(conn)
    }

    /// 内存数据库（测试用）
    pub fn open_in_memory() -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::configure_sqlite_connection(&conn)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> LedgerResult<Self> {
        init_ledger_schema(&conn)?;
        match read_schema_version(&conn)? {
            Some(v) if v == CURRENT_SCHEMA_VERSION => {}
            other => warn!(
                found = ?other,
                expected = CURRENT_SCHEMA_VERSION,
                "ledger schema version mismatch"
            ),
        }
        Ok(Self { conn })
    }

    fn sheet_exists(conn: &Connection, table: LedgerTable) -> LedgerResult<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM ledger_sheet WHERE name = ?1",
                params![table.as_str()],
                |_row| Ok(true),
            )
            .optional()?;
        Ok(found.unwrap_or(false))
    }

    fn ensure_sheet(&self, table: LedgerTable) -> LedgerResult<()> {
        if Self::sheet_exists(&self.conn, table)? {
            Ok(())
        } else {
            Err(LedgerError::TableNotFound(table))
        }
    }

    fn all_rows(&self, table: LedgerTable) -> LedgerResult<Vec<Vec<String>>> {
        self.ensure_sheet(table)?;
        let mut stmt = self
            .conn
            .prepare("SELECT cells FROM ledger_row WHERE sheet = ?1 ORDER BY row_no")?;
        let raw = stmt
            .query_map(params![table.as_str()], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        raw.iter()
            .map(|cells| serde_json::from_str::<Vec<String>>(cells).map_err(LedgerError::from))
            .collect()
    }

    fn insert_row(conn: &Connection, table: LedgerTable, cells: &[String]) -> LedgerResult<i64> {
        let next: i64 = conn.query_row(
            "SELECT COALESCE(MAX(row_no), 0) + 1 FROM ledger_row WHERE sheet = ?1",
            params![table.as_str()],
            |row| row.get(0),
        )?;
        let encoded = serde_json::to_string(cells)?;
        conn.execute(
            "INSERT INTO ledger_row (sheet, row_no, cells) VALUES (?1, ?2, ?3)",
            params![table.as_str(), next, encoded],
        )?;
        Ok(next)
    }
}

impl LedgerGateway for SqliteLedger {
    fn append_row(&mut self, table: LedgerTable, values: &[i64]) -> LedgerResult<()> {
        let tx = self.conn.transaction()?;
        if !Self::sheet_exists(&tx, table)? {
            return Err(LedgerError::TableNotFound(table));
        }
        let row_no = Self::insert_row(&tx, table, &to_cells(values))?;
        tx.commit()?;
        debug!(%table, row_no, "row appended");
        Ok(())
    }

    fn write_header(&mut self, table: LedgerTable, headings: &[String]) -> LedgerResult<bool> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT OR IGNORE INTO ledger_sheet (name) VALUES (?1)",
            params![table.as_str()],
        )?;
        let rows: i64 = tx.query_row(
            "SELECT COUNT(*) FROM ledger_row WHERE sheet = ?1",
            params![table.as_str()],
            |row| row.get(0),
        )?;
        if rows > 0 {
            tx.commit()?;
            return Ok(false);
        }
        Self::insert_row(&tx, table, headings)?;
        tx.commit()?;
        Ok(true)
    }

    fn row_count(&self, table: LedgerTable) -> LedgerResult<usize> {
        self.ensure_sheet(table)?;
        let rows: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM ledger_row WHERE sheet = ?1",
            params![table.as_str()],
            |row| row.get(0),
        )?;
        Ok(rows as usize)
    }

    fn read_row(&self, table: LedgerTable, row: usize) -> LedgerResult<Vec<String>> {
        check_index("row", row)?;
        self.ensure_sheet(table)?;
        let cells: Option<String> = self
            .conn
            .query_row(
                "SELECT cells FROM ledger_row WHERE sheet = ?1 AND row_no = ?2",
                params![table.as_str(), row as i64],
                |r| r.get(0),
            )
            .optional()?;

        match cells {
            Some(cells) => Ok(serde_json::from_str(&cells)?),
            None => Err(LedgerError::RowOutOfRange {
                table,
                row,
                rows: self.row_count(table)?,
            }),
        }
    }

    fn read_column(&self, table: LedgerTable, column: usize) -> LedgerResult<Vec<String>> {
        let rows = self.all_rows(table)?;
        extract_column(&rows, column)
    }
}
