// ==========================================
// 三明治摊位 - 单次运行编排
// ==========================================
// 流程（线性，仅输入校验可重试）:
// AwaitingInput → Validating(↻) → SalesRecorded → SurplusRecorded
//   → StockForecastRecorded → Done
// 任一账本错误直接终止；已追加的行不回滚
// ==========================================

use chrono::Utc;
use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::app::report::{SessionReport, StockDisplay};
use crate::config::AppConfig;
use crate::domain::{LedgerTable, DEFAULT_HISTORY_DAYS};
use crate::engine::{StockForecaster, SurplusCalculator};
use crate::error::AppResult;
use crate::input::{get_sales_data, InputValidator};
use crate::ledger::{read_item_headings, read_sales_history, read_stock_row, LedgerGateway};

// ==========================================
// SessionState - 运行状态
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    AwaitingInput,
    Validating,
    SalesRecorded,
    SurplusRecorded,
    StockForecastRecorded,
    Done,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::AwaitingInput => "AWAITING_INPUT",
            SessionState::Validating => "VALIDATING",
            SessionState::SalesRecorded => "SALES_RECORDED",
            SessionState::SurplusRecorded => "SURPLUS_RECORDED",
            SessionState::StockForecastRecorded => "STOCK_FORECAST_RECORDED",
            SessionState::Done => "DONE",
        };
        f.write_str(s)
    }
}

// ==========================================
// SessionRunner - 运行编排器
// ==========================================
// 账本句柄由调用方打开后注入，运行器不持有任何全局客户端
pub struct SessionRunner<'a, L: LedgerGateway + ?Sized> {
    ledger: &'a mut L,
    validator: InputValidator,
    surplus: SurplusCalculator,
    forecaster: StockForecaster,
    history_days: usize,
    state: SessionState,
}

impl<'a, L: LedgerGateway + ?Sized> SessionRunner<'a, L> {
    /// 使用默认参数创建（5 天历史，五成双取整）
    pub fn new(ledger: &'a mut L) -> Self {
        Self {
            ledger,
            validator: InputValidator::new(),
            surplus: SurplusCalculator::new(),
            forecaster: StockForecaster::default(),
            history_days: DEFAULT_HISTORY_DAYS,
            state: SessionState::AwaitingInput,
        }
    }

    /// 按配置创建
    pub fn from_config(ledger: &'a mut L, config: &AppConfig) -> Self {
        Self::new(ledger)
            .with_forecaster(StockForecaster::new(config.rounding))
            .with_history_days(config.history_days)
    }

    pub fn with_forecaster(mut self, forecaster: StockForecaster) -> Self {
        self.forecaster = forecaster;
        self
    }

    pub fn with_history_days(mut self, history_days: usize) -> Self {
        self.history_days = history_days.max(1);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    fn advance(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "session state");
        self.state = next;
    }

    fn update_worksheet<W: Write>(
        &mut self,
        output: &mut W,
        table: LedgerTable,
        values: &[i64],
    ) -> AppResult<()> {
        writeln!(output, "Updating {} worksheet...\n", table)?;
        self.ledger.append_row(table, values)?;
        writeln!(output, "{} worksheet updated successfully.\n", table)?;
        info!(%table, ?values, "worksheet updated");
        Ok(())
    }

    /// 执行一次完整运行
    ///
    /// # 参数
    /// - input: 销量输入源
    /// - output: 状态行与最终映射的输出
    ///
    /// # 返回
    /// - Ok(SessionReport): 运行结果
    /// - Err: 输入流关闭、账本读写失败、历史不足等（不回滚已写入的行）
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> AppResult<SessionReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let span = info_span!("session", %run_id);
        let _guard = span.enter();

        // 1. 录入并校验销量
        self.advance(SessionState::Validating);
        let entry = get_sales_data(input, output, &self.validator)?;

        // 2. 写入 sales 表
        self.update_worksheet(output, LedgerTable::Sales, entry.row.values())?;
        self.advance(SessionState::SalesRecorded);

        // 3. 剩余量 = 当前库存 - 销量，写入 surplus 表
        writeln!(output, "Calculating surplus data...\n")?;
        let stock = read_stock_row(&*self.ledger)?;
        let surplus = self.surplus.calculate(&stock, &entry.row)?;
        self.update_worksheet(output, LedgerTable::Surplus, surplus.values())?;
        self.advance(SessionState::SurplusRecorded);

        // 4. 最近 N 天销量 → 次日备货，写入 stock 表
        let history = read_sales_history(&*self.ledger, self.history_days)?;
        writeln!(output, "Calculating stock data...\n")?;
        let forecast = self.forecaster.forecast(&history)?;
        self.update_worksheet(output, LedgerTable::Stock, forecast.values())?;
        self.advance(SessionState::StockForecastRecorded);

        // 5. 表头 × 本次录入原文
        let headings = read_item_headings(&*self.ledger)?;
        let display = StockDisplay::from_pairs(&headings, &entry.raw_tokens);
        writeln!(output, "{}", display)?;
        self.advance(SessionState::Done);

        info!(%forecast, "session complete");
        Ok(SessionReport {
            run_id,
            started_at,
            finished_at: Utc::now(),
            attempts: entry.attempts,
            raw_input: entry.raw_tokens,
            sales: entry.row,
            surplus,
            forecast,
            display,
        })
    }
}
