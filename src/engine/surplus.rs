// ==========================================
// 三明治摊位 - 剩余量计算
// ==========================================
// 公式: surplus[i] = stock[i] - sales[i]（整数，不截断到 0）
// 长度不一致时按较短者配对，并告警（上游数据完整性问题）
// ==========================================

use tracing::{instrument, warn};

use crate::domain::{SalesRow, StockRow, SurplusRow};
use crate::engine::error::{EngineError, EngineResult};

#[derive(Debug, Default, Clone)]
pub struct SurplusCalculator;

impl SurplusCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算剩余量
    ///
    /// # 参数
    /// - stock: stock 表最后一行
    /// - sales: 当日销量
    ///
    /// # 返回
    /// - Ok(SurplusRow): 正数为浪费，负数为超卖
    /// - Err(Overflow): 差值超出 i64 范围
    #[instrument(skip_all)]
    pub fn calculate(&self, stock: &StockRow, sales: &SalesRow) -> EngineResult<SurplusRow> {
        let stock_values = stock.values();
        let sales_values = sales.values();

        if stock_values.len() != sales_values.len() {
            warn!(
                stock_len = stock_values.len(),
                sales_len = sales_values.len(),
                "stock and sales rows differ in length; extra items are ignored"
            );
        }

        let surplus = stock_values
            .iter()
            .zip(sales_values)
            .enumerate()
            .map(|(item, (stock, sales))| {
                stock.checked_sub(*sales).ok_or(EngineError::Overflow {
                    operation: "surplus",
                    item,
                    column: item + 1,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(SurplusRow::new(surplus))
    }
}
