// ==========================================
// 三明治摊位 - 备货预测
// ==========================================
// 公式: forecast = round(avg(最近 N 天销量) * SAFETY_MARGIN)
// 平均值为真除法（f64），不是整数除法
// 取整规则: 默认四舍六入五成双（half-to-even），可配置
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::{SalesHistory, StockForecastRow};
use crate::engine::error::{EngineError, EngineResult};

/// 备货安全系数（在平均需求上加 10%）
pub const SAFETY_MARGIN: f64 = 1.1;

// i64 在 f64 中的可表示边界: [-2^63, 2^63)
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

// ==========================================
// RoundingRule - 取整规则
// ==========================================
// 只在小数部分恰为 .5 时两种规则结果不同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    /// 16.5 → 16, 5.5 → 6
    #[default]
    HalfEven,
    /// 16.5 → 17, -2.5 → -3
    HalfAwayFromZero,
}

impl RoundingRule {
    /// 取整，结果仍为 f64（可能超出 i64 范围）
    pub fn round(&self, value: f64) -> f64 {
        match self {
            RoundingRule::HalfEven => value.round_ties_even(),
            RoundingRule::HalfAwayFromZero => value.round(),
        }
    }

    /// 取整并转换为 i64（超出范围时饱和）
    pub fn apply(&self, value: f64) -> i64 {
        self.round(value) as i64
    }
}

// ==========================================
// StockForecaster - 备货预测器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StockForecaster {
    rounding: RoundingRule,
}

impl StockForecaster {
    pub fn new(rounding: RoundingRule) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> RoundingRule {
        self.rounding
    }

    /// 单个商品的预测量
    ///
    /// # 参数
    /// - item: 商品下标（从 0 开始），仅用于错误定位
    /// - values: 该商品最近 N 天销量
    ///
    /// # 返回
    /// - Err(InsufficientHistory): 没有历史销量
    /// - Err(Overflow): 预测量超出 i64 范围
    pub fn forecast_item(&self, item: usize, values: &[i64]) -> EngineResult<i64> {
        if values.is_empty() {
            return Err(EngineError::InsufficientHistory {
                item,
                column: item + 1,
            });
        }
        // i128 累加，N 天 i64 求和不会溢出
        let sum: i128 = values.iter().map(|v| i128::from(*v)).sum();
        let average = sum as f64 / values.len() as f64;
        let rounded = self.rounding.round(average * SAFETY_MARGIN);
        if !(I64_LOWER..I64_UPPER).contains(&rounded) {
            return Err(EngineError::Overflow {
                operation: "forecast",
                item,
                column: item + 1,
            });
        }
        Ok(rounded as i64)
    }

    /// 按商品计算次日备货量
    ///
    /// # 参数
    /// - history: 每个商品最近 N 天销量
    ///
    /// # 返回
    /// - Ok(StockForecastRow): 与 history 外层同长
    /// - Err(InsufficientHistory): 某商品历史为空
    /// - Err(Overflow): 某商品预测量超出 i64 范围
    #[instrument(skip_all, fields(items = history.columns().len()))]
    pub fn forecast(&self, history: &SalesHistory) -> EngineResult<StockForecastRow> {
        let mut forecast = Vec::with_capacity(history.columns().len());
        for (item, values) in history.columns().iter().enumerate() {
            let qty = self.forecast_item(item, values)?;
            debug!(item, days = values.len(), qty, "item forecast");
            forecast.push(qty);
        }
        Ok(StockForecastRow::new(forecast))
    }
}
