// ==========================================
// 三明治摊位 - 账本初始化与查看
// ==========================================
// init: 为三张表写表头（仅空表），可选写入初始库存
// show: 打印某张表的表头与最后 N 行
// ==========================================

use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use crate::domain::{LedgerTable, ITEM_COUNT};
use crate::error::{AppError, AppResult};
use crate::input::{split_sales_line, InputFormatError, InputValidator, ValidationOutcome};
use crate::ledger::LedgerGateway;

/// 初始化结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitSummary {
    /// 本次新写入表头的表
    pub headers_written: Vec<LedgerTable>,
    /// 是否写入了初始库存
    pub stock_seeded: bool,
}

/// 解析逗号分隔的商品名
pub fn parse_headings(raw: &str) -> AppResult<Vec<String>> {
    let names: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if names.len() != ITEM_COUNT {
        return Err(AppError::InvalidInput(InputFormatError::WrongCount {
            expected: ITEM_COUNT,
            actual: names.len(),
        }));
    }
    Ok(names)
}

/// 初始化账本
///
/// # 参数
/// - headings: 6 个商品名
/// - initial_stock: 初始库存原文（逗号分隔，走与销量相同的校验）
///
/// 库存表已有数据行时不再写入初始库存
pub fn initialize_ledger<L: LedgerGateway + ?Sized>(
    ledger: &mut L,
    headings: &[String],
    initial_stock: Option<&str>,
) -> AppResult<InitSummary> {
    // 先校验库存，避免写了表头才发现库存格式错误
    let stock = match initial_stock {
        Some(raw) => match InputValidator::new().validate(&split_sales_line(raw)) {
            ValidationOutcome::Valid(row) => Some(row),
            ValidationOutcome::Invalid(reason) => return Err(AppError::InvalidInput(reason)),
        },
        None => None,
    };

    let mut headers_written = Vec::new();
    for table in LedgerTable::ALL {
        if ledger.write_header(table, headings)? {
            headers_written.push(table);
        }
    }

    let mut stock_seeded = false;
    if let Some(row) = stock {
        if ledger.row_count(LedgerTable::Stock)? > 1 {
            warn!("stock table already has data; initial stock skipped");
        } else {
            ledger.append_row(LedgerTable::Stock, row.values())?;
            stock_seeded = true;
        }
    }

    info!(?headers_written, stock_seeded, "ledger initialized");
    Ok(InitSummary {
        headers_written,
        stock_seeded,
    })
}

/// 打印某张表的表头与最后 N 行（行号从 1 开始）
pub fn show_table<L: LedgerGateway + ?Sized, W: Write>(
    ledger: &L,
    table: LedgerTable,
    last: usize,
    output: &mut W,
) -> AppResult<()> {
    let rows = ledger.row_count(table)?;
    writeln!(output, "{} ({} data rows)", table, rows.saturating_sub(1))?;
    if rows == 0 {
        return Ok(());
    }

    writeln!(output, "{:>5}  {}", "#", ledger.read_header_row(table)?.join(", "))?;
    let first = (rows + 1).saturating_sub(last).max(2);
    for row in first..=rows {
        writeln!(output, "{:>5}  {}", row, ledger.read_row(table, row)?.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;

    fn headings() -> Vec<String> {
        parse_headings("cheese, ham,egg,chicken,tuna,turkey").unwrap()
    }

    #[test]
    fn test_parse_headings_requires_six_names() {
        assert_eq!(headings()[1], "ham");
        assert!(matches!(
            parse_headings("cheese,ham"),
            Err(AppError::InvalidInput(InputFormatError::WrongCount { actual: 2, .. }))
        ));
    }

    #[test]
    fn test_initialize_writes_headers_and_stock_once() {
        let mut ledger = MemoryLedger::new();

        let summary = initialize_ledger(&mut ledger, &headings(), Some("10,10,35,45,52,62")).unwrap();
        assert_eq!(summary.headers_written, LedgerTable::ALL.to_vec());
        assert!(summary.stock_seeded);

        let again = initialize_ledger(&mut ledger, &headings(), Some("1,1,1,1,1,1")).unwrap();
        assert!(again.headers_written.is_empty());
        assert!(!again.stock_seeded);
        assert_eq!(
            ledger.read_last_row(LedgerTable::Stock).unwrap(),
            vec!["10", "10", "35", "45", "52", "62"]
        );
    }

    #[test]
    fn test_invalid_stock_writes_nothing() {
        let mut ledger = MemoryLedger::new();
        let err = initialize_ledger(&mut ledger, &headings(), Some("10,x")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(InputFormatError::NonNumeric { .. })));
        assert!(ledger.row_count(LedgerTable::Sales).is_err());
    }

    #[test]
    fn test_show_table_prints_last_rows() {
        let mut ledger = MemoryLedger::with_headings(&headings());
        for day in 1..=4 {
            ledger.append_row(LedgerTable::Sales, &[day; 6]).unwrap();
        }

        let mut out = Vec::new();
        show_table(&ledger, LedgerTable::Sales, 2, &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(lines[0], "sales (4 data rows)");
        assert!(lines[1].contains("cheese, ham"));
        assert_eq!(lines.len(), 4);
        assert!(lines[2].trim_start().starts_with("4  3, 3"));
        assert!(lines[3].trim_start().starts_with("5  4, 4"));
    }
}
