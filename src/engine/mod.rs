// ==========================================
// 三明治摊位 - 计算层
// ==========================================
// 职责: 剩余量计算、备货预测（纯函数，无 I/O）
// ==========================================

pub mod error;
pub mod forecast;
pub mod surplus;

pub use error::{EngineError, EngineResult};
pub use forecast::{RoundingRule, StockForecaster, SAFETY_MARGIN};
pub use surplus::SurplusCalculator;
