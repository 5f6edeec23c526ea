// ==========================================
// 会话流程集成测试
// ==========================================
// 测试目标: 录入 → sales → surplus → stock 全流程在真实账本后端上的行为
// ==========================================

mod test_helpers;

use love_sandwiches::config::AppConfig;
use love_sandwiches::ledger::{LedgerError, LedgerGateway, SqliteLedger};
use love_sandwiches::{logging, AppError, EngineError, LedgerTable, RoundingRule};
use test_helpers::{
    create_test_csv_ledger, create_test_sqlite_ledger, headings, run_session,
    run_session_with_config,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_sales_row_round_trip_sqlite() {
    logging::init_test();

    let (_dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");
    let (result, _) = run_session(&mut ledger, "9,10,30,40,50,60\n");
    result.expect("session should succeed");

    assert_eq!(
        ledger.read_last_row(LedgerTable::Sales).unwrap(),
        strings(&["9", "10", "30", "40", "50", "60"])
    );
    assert_eq!(
        ledger.read_last_row(LedgerTable::Surplus).unwrap(),
        strings(&["1", "0", "5", "5", "2", "2"])
    );
}

#[test]
fn test_sales_row_round_trip_csv() {
    logging::init_test();

    let (_dir, mut ledger) = create_test_csv_ledger().expect("Failed to create ledger");
    let (result, output) = run_session(&mut ledger, "9,10,30,40,50,60\n");
    let report = result.expect("session should succeed");

    assert_eq!(
        ledger.read_last_row(LedgerTable::Sales).unwrap(),
        strings(&["9", "10", "30", "40", "50", "60"])
    );
    assert_eq!(
        ledger.read_last_row(LedgerTable::Stock).unwrap(),
        report
            .forecast
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
    );
    assert!(output.contains("stock worksheet updated successfully."));
}

#[test]
fn test_two_identical_runs_append_two_rows() {
    logging::init_test();

    let (_dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");
    let before = ledger.row_count(LedgerTable::Sales).unwrap();

    let (first, _) = run_session(&mut ledger, "1,2,3,4,5,6\n");
    let (second, _) = run_session(&mut ledger, "1,2,3,4,5,6\n");
    let first = first.unwrap();
    let second = second.unwrap();

    assert_ne!(first.run_id, second.run_id);
    assert_eq!(ledger.row_count(LedgerTable::Sales).unwrap(), before + 2);
    assert_eq!(ledger.row_count(LedgerTable::Surplus).unwrap(), 3);
    // 表头 + 初始库存 + 两次预测
    assert_eq!(ledger.row_count(LedgerTable::Stock).unwrap(), 4);

    let last = ledger.read_row(LedgerTable::Sales, before + 2).unwrap();
    let prev = ledger.read_row(LedgerTable::Sales, before + 1).unwrap();
    assert_eq!(last, prev);
}

#[test]
fn test_second_run_uses_previous_forecast_as_stock() {
    let (_dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");

    let (first, _) = run_session(&mut ledger, "10,10,10,10,10,10\n");
    let first = first.unwrap();
    assert_eq!(first.forecast.values(), &[11, 11, 11, 11, 11, 11]);

    let (second, _) = run_session(&mut ledger, "12,8,11,11,0,20\n");
    let second = second.unwrap();
    assert_eq!(second.surplus.values(), &[-1, 3, 0, 0, 11, -9]);
}

#[test]
fn test_forecast_window_is_last_five_days() {
    let (_dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");
    for day in [100, 10, 15, 20, 25] {
        ledger.append_row(LedgerTable::Sales, &[day; 6]).unwrap();
    }

    let (result, _) = run_session(&mut ledger, "30,30,30,30,30,30\n");
    let report = result.unwrap();

    // 最近 5 天: 10, 15, 20, 25, 30 → avg 20 → 22
    assert_eq!(report.forecast.values(), &[22; 6]);
    assert_eq!(report.surplus.values(), &[-20, -20, 5, 15, 22, 32]);
}

#[test]
fn test_invalid_lines_are_retried_in_full_run() {
    let (_dir, mut ledger) = create_test_csv_ledger().expect("Failed to create ledger");

    let (result, output) = run_session(&mut ledger, "\n1,2,3,4,5\n1,2,3,4,5,6.0\n1,2,3,4,5,6\n");
    let report = result.unwrap();

    assert_eq!(report.attempts, 4);
    assert_eq!(output.matches("Invalid data:").count(), 3);
    // 只追加了一次
    assert_eq!(ledger.row_count(LedgerTable::Sales).unwrap(), 2);
}

#[test]
fn test_stock_without_data_aborts_after_sales() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.db");
    let mut ledger = SqliteLedger::open(path.to_str().unwrap()).unwrap();
    for table in LedgerTable::ALL {
        ledger.write_header(table, &headings()).unwrap();
    }

    let (result, _) = run_session(&mut ledger, "1,2,3,4,5,6\n");
    match result {
        Err(AppError::Ledger(LedgerError::MalformedCell { table, row, .. })) => {
            assert_eq!(table, LedgerTable::Stock);
            assert_eq!(row, 1);
        }
        other => panic!("expected malformed stock row, got {:?}", other.map(|r| r.forecast)),
    }

    // sales 已写入，不回滚；surplus 未写入
    assert_eq!(ledger.row_count(LedgerTable::Sales).unwrap(), 2);
    assert_eq!(ledger.row_count(LedgerTable::Surplus).unwrap(), 1);
}

#[test]
fn test_closed_input_leaves_ledger_untouched() {
    let (_dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");

    let (result, _) = run_session(&mut ledger, "oops\n");
    assert!(matches!(result, Err(AppError::InputClosed)));
    assert_eq!(ledger.row_count(LedgerTable::Sales).unwrap(), 1);
}

#[test]
fn test_config_file_controls_history_window_and_rounding() {
    logging::init_test();

    let (dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"history_days": 2, "rounding": "half_away_from_zero"}"#,
    )
    .unwrap();
    let config = AppConfig::load(Some(config_path.as_path())).expect("config should load");
    assert_eq!(config.history_days, 2);
    assert_eq!(config.rounding, RoundingRule::HalfAwayFromZero);

    ledger.append_row(LedgerTable::Sales, &[100; 6]).unwrap();
    ledger.append_row(LedgerTable::Sales, &[15; 6]).unwrap();

    // 最近 2 天: 15, 15 → 16.5 → 17（默认 5 天五成双会得到 48）
    let (result, _) = run_session_with_config(&mut ledger, &config, "15,15,15,15,15,15\n");
    let report = result.expect("session should succeed");
    assert_eq!(report.forecast.values(), &[17; 6]);
    assert_eq!(
        ledger.read_last_row(LedgerTable::Stock).unwrap(),
        strings(&["17", "17", "17", "17", "17", "17"])
    );

    // 同样的窗口，五成双取 16
    let config = AppConfig {
        rounding: RoundingRule::HalfEven,
        ..config
    };
    let (result, _) = run_session_with_config(&mut ledger, &config, "15,15,15,15,15,15\n");
    assert_eq!(result.unwrap().forecast.values(), &[16; 6]);
}

#[test]
fn test_extreme_sales_surface_overflow_instead_of_panicking() {
    let (_dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");

    // 10 - i64::MIN 超出范围: sales 已写入，surplus 不写
    let (result, _) = run_session(&mut ledger, "-9223372036854775808,1,1,1,1,1\n");
    match result {
        Err(AppError::Engine(EngineError::Overflow { operation, item, .. })) => {
            assert_eq!(operation, "surplus");
            assert_eq!(item, 0);
        }
        other => panic!("expected surplus overflow, got {:?}", other.map(|r| r.surplus)),
    }
    assert_eq!(ledger.row_count(LedgerTable::Sales).unwrap(), 2);
    assert_eq!(ledger.row_count(LedgerTable::Surplus).unwrap(), 1);
}

#[test]
fn test_max_sales_twice_fails_forecast_without_wrapping() {
    let (_dir, mut ledger) = create_test_sqlite_ledger().expect("Failed to create ledger");

    for _ in 0..2 {
        let (result, _) = run_session(&mut ledger, "9223372036854775807,1,1,1,1,1\n");
        assert!(matches!(
            result,
            Err(AppError::Engine(EngineError::Overflow {
                operation: "forecast",
                item: 0,
                ..
            }))
        ));
    }

    // 两次 sales 与 surplus 均已写入，stock 仍只有初始库存
    assert_eq!(ledger.row_count(LedgerTable::Sales).unwrap(), 3);
    assert_eq!(ledger.row_count(LedgerTable::Surplus).unwrap(), 3);
    assert_eq!(ledger.row_count(LedgerTable::Stock).unwrap(), 2);
}

