// ==========================================
// 三明治摊位 - 核心库
// ==========================================
// 功能: 录入每日销量 → 记录剩余量 → 预测次日备货
// 账本: sales / surplus / stock 三张只追加表
// 运行方式: 单人、单次、同步批处理
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 行数据模型
pub mod domain;

// 输入层 - 终端录入与校验
pub mod input;

// 计算层 - 剩余量与备货预测
pub mod engine;

// 账本层 - 外部表格读写
pub mod ledger;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 应用层 - 运行编排
pub mod app;

// 错误类型
pub mod error;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    ItemHeadings, LedgerTable, SalesHistory, SalesRow, StockForecastRow, StockRow, SurplusRow,
    ITEM_COUNT,
};
pub use engine::{EngineError, RoundingRule, StockForecaster, SurplusCalculator, SAFETY_MARGIN};
pub use input::{InputFormatError, InputValidator, ValidationOutcome};
pub use ledger::{LedgerBackend, LedgerError, LedgerGateway, MemoryLedger};
pub use app::{SessionReport, SessionRunner, SessionState};
pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 欢迎语
pub const WELCOME_BANNER: &str = "Welcome to love sandwiches Data Automation";
