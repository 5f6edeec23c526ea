// ==========================================
// 三明治摊位 - 销量录入交互循环
// ==========================================
// 职责: 提示 → 读取一行 → 校验 → 失败则重新提示
// 无最大重试次数；仅在输入流关闭时终止
// ==========================================

use std::io::{BufRead, Write};
use tracing::{debug, instrument};

use crate::domain::SalesRow;
use crate::input::error::{PromptError, PromptResult};
use crate::input::validator::{split_sales_line, InputValidator, ValidationOutcome};

/// 一次有效录入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesEntry {
    /// 原始 token（未裁剪，用于最终展示）
    pub raw_tokens: Vec<String>,
    pub row: SalesRow,
    /// 第几次尝试通过校验（从 1 开始）
    pub attempts: usize,
}

/// 循环提示直到得到有效销量
///
/// # 参数
/// - input: 行输入源（终端或测试数据）
/// - output: 提示与诊断输出
/// - validator: 输入校验器
///
/// # 返回
/// - Ok(SalesEntry): 有效录入
/// - Err(PromptError::Closed): 输入流在得到有效数据前结束
#[instrument(skip_all)]
pub fn get_sales_data<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    validator: &InputValidator,
) -> PromptResult<SalesEntry> {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        writeln!(output, "Please enter sales data from the last market")?;
        writeln!(
            output,
            "Data should be {} numbers separated by commas",
            validator.expected_count()
        )?;
        writeln!(output, "Example: 10,10,35,45,52,62\n")?;
        writeln!(output, "Enter your data here:")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        let line = line.trim_end_matches(['\n', '\r']);
        let tokens = split_sales_line(line);

        match validator.validate(&tokens) {
            ValidationOutcome::Valid(row) => {
                writeln!(output, "Data is valid!")?;
                debug!(attempts, "sales input accepted");
                return Ok(SalesEntry {
                    raw_tokens: tokens,
                    row,
                    attempts,
                });
            }
            ValidationOutcome::Invalid(reason) => {
                debug!(attempts, %reason, "sales input rejected");
                writeln!(output, "Invalid data: {}, please try again.\n", reason)?;
            }
        }
    }
}
