// ==========================================
// 三明治摊位 - 输入层
// ==========================================
// 职责: 终端销量录入、格式校验、重试循环
// ==========================================

pub mod error;
pub mod prompt;
pub mod validator;

pub use error::{InputFormatError, PromptError, PromptResult};
pub use prompt::{get_sales_data, SalesEntry};
pub use validator::{split_sales_line, InputValidator, ValidationOutcome};
