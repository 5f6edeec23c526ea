// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时账本（SQLite / CSV）初始化、运行一次会话等功能
// ==========================================

#![allow(dead_code)]

use love_sandwiches::app::{initialize_ledger, SessionReport, SessionRunner};
use love_sandwiches::config::AppConfig;
use love_sandwiches::ledger::{CsvWorkbookLedger, LedgerGateway, SqliteLedger};
use love_sandwiches::AppResult;
use std::error::Error;
use std::io::Cursor;
use tempfile::TempDir;

/// 初始库存（与表格模板一致）
pub const INITIAL_STOCK: &str = "10,10,35,45,52,62";

/// 测试用商品名
pub fn headings() -> Vec<String> {
    ["cheese", "ham", "egg", "chicken", "tuna", "turkey"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// 创建临时 SQLite 账本（已写表头与初始库存）
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - SqliteLedger: 账本句柄
pub fn create_test_sqlite_ledger() -> Result<(TempDir, SqliteLedger), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("ledger.db");
    let mut ledger = SqliteLedger::open(db_path.to_str().ok_or("non UTF-8 temp path")?)?;
    initialize_ledger(&mut ledger, &headings(), Some(INITIAL_STOCK))?;
    Ok((dir, ledger))
}

/// 创建临时 CSV 工作簿账本（已写表头与初始库存）
pub fn create_test_csv_ledger() -> Result<(TempDir, CsvWorkbookLedger), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let mut ledger = CsvWorkbookLedger::open(dir.path().join("workbook"))?;
    initialize_ledger(&mut ledger, &headings(), Some(INITIAL_STOCK))?;
    Ok((dir, ledger))
}

/// 以给定输入运行一次会话，返回报告与终端输出
pub fn run_session<L: LedgerGateway + ?Sized>(
    ledger: &mut L,
    input: &str,
) -> (AppResult<SessionReport>, String) {
    let mut input = Cursor::new(input.to_string());
    let mut output = Vec::new();
    let result = SessionRunner::new(ledger).run(&mut input, &mut output);
    (result, String::from_utf8_lossy(&output).into_owned())
}

/// 按给定配置运行一次会话，返回报告与终端输出
pub fn run_session_with_config<L: LedgerGateway + ?Sized>(
    ledger: &mut L,
    config: &AppConfig,
    input: &str,
) -> (AppResult<SessionReport>, String) {
    let mut input = Cursor::new(input.to_string());
    let mut output = Vec::new();
    let result = SessionRunner::from_config(ledger, config).run(&mut input, &mut output);
    (result, String::from_utf8_lossy(&output).into_owned())
}
