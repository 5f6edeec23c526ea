// ==========================================
// 三明治摊位 - 销量输入校验器
// ==========================================
// 规则: 每个 token 必须可解析为整数，且 token 数恰好为 6
// 顺序: 先逐个解析，再校验数量（与表格录入流程一致）
// 负数与 0 均可通过；小数不通过
// ==========================================

use std::num::{IntErrorKind, ParseIntError};

use crate::domain::{SalesRow, ITEM_COUNT};
use crate::input::error::InputFormatError;

// ==========================================
// ValidationOutcome - 校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(SalesRow),
    Invalid(InputFormatError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

/// 将一行原始输入按逗号切分为 token
///
/// 空白行视为 0 个 token；token 保留原样（不裁剪），以便后续原样展示
pub fn split_sales_line(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }
    line.split(',').map(str::to_string).collect()
}

// 整数但超出 i64 与非整数分开报告
fn classify_parse_error(raw: &str, err: &ParseIntError) -> InputFormatError {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputFormatError::OutOfRange {
            token: raw.to_string(),
            min: i64::MIN,
            max: i64::MAX,
        },
        _ => InputFormatError::NonNumeric {
            token: raw.to_string(),
        },
    }
}

// ==========================================
// InputValidator - 输入校验器
// ==========================================
#[derive(Debug, Clone)]
pub struct InputValidator {
    expected_count: usize,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl InputValidator {
    pub fn new() -> Self {
        Self {
            expected_count: ITEM_COUNT,
        }
    }

    /// 期望的 token 数量
    pub fn expected_count(&self) -> usize {
        self.expected_count
    }

    /// 校验一组 token
    ///
    /// # 返回
    /// - Valid(SalesRow): 全部可解析且数量正确
    /// - Invalid(reason): 第一个不可解析的 token，或数量错误
    pub fn validate<S: AsRef<str>>(&self, tokens: &[S]) -> ValidationOutcome {
        let mut values = Vec::with_capacity(tokens.len());
        for token in tokens {
            let raw = token.as_ref();
            match raw.trim().parse::<i64>() {
                Ok(v) => values.push(v),
                Err(e) => return ValidationOutcome::Invalid(classify_parse_error(raw, &e)),
            }
        }

        let actual = values.len();
        match SalesRow::new(values) {
            Some(row) => ValidationOutcome::Valid(row),
            None => ValidationOutcome::Invalid(InputFormatError::WrongCount {
                expected: self.expected_count,
                actual,
            }),
        }
    }

    /// 便捷方法: 校验一整行原始输入
    pub fn validate_line(&self, line: &str) -> ValidationOutcome {
        self.validate(&split_sales_line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> InputValidator {
        InputValidator::new()
    }

    #[test]
    fn test_six_integers_are_valid() {
        let outcome = validator().validate(&["10", "10", "35", "45", "52", "62"]);
        match outcome {
            ValidationOutcome::Valid(row) => assert_eq!(row.values(), &[10, 10, 35, 45, 52, 62]),
            other => panic!("expected valid, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_and_zero_values_are_accepted() {
        assert!(validator().validate(&["0", "-1", "0", "-20", "3", "0"]).is_valid());
    }

    #[test]
    fn test_whitespace_around_tokens_is_ignored() {
        let outcome = validator().validate_line(" 1, 2 ,3,  4,5 ,6 ");
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_wrong_count_is_rejected_for_every_other_length() {
        let v = validator();
        for len in [0usize, 1, 5, 7, 12] {
            let tokens: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            assert_eq!(
                v.validate(&tokens),
                ValidationOutcome::Invalid(InputFormatError::WrongCount {
                    expected: 6,
                    actual: len
                }),
                "len={}",
                len
            );
        }
    }

    #[test]
    fn test_empty_line_is_zero_tokens() {
        assert!(split_sales_line("").is_empty());
        assert!(split_sales_line("   ").is_empty());
        assert_eq!(
            validator().validate_line(""),
            ValidationOutcome::Invalid(InputFormatError::WrongCount {
                expected: 6,
                actual: 0
            })
        );
    }

    #[test]
    fn test_non_numeric_reported_before_count() {
        let outcome = validator().validate_line("1,2,ham");
        assert_eq!(
            outcome,
            ValidationOutcome::Invalid(InputFormatError::NonNumeric {
                token: "ham".to_string()
            })
        );
    }

    #[test]
    fn test_decimals_are_rejected() {
        let outcome = validator().validate_line("1,2,3,4,5,6.5");
        assert!(matches!(
            outcome,
            ValidationOutcome::Invalid(InputFormatError::NonNumeric { .. })
        ));
    }

    #[test]
    fn test_trailing_comma_counts_as_empty_token() {
        let outcome = validator().validate_line("1,2,3,4,5,6,");
        assert!(matches!(
            outcome,
            ValidationOutcome::Invalid(InputFormatError::NonNumeric { ref token }) if token.is_empty()
        ));
    }

    #[test]
    fn test_out_of_range_integer_is_not_called_non_numeric() {
        let outcome = validator().validate_line("1,2,3,4,5,99999999999999999999");
        match outcome {
            ValidationOutcome::Invalid(err @ InputFormatError::OutOfRange { .. }) => {
                assert!(err.to_string().contains("out of range"));
                assert!(!err.to_string().contains("not a whole number"));
            }
            other => panic!("expected out of range, got {:?}", other),
        }
        assert!(matches!(
            validator().validate_line("-99999999999999999999,2,3,4,5,6"),
            ValidationOutcome::Invalid(InputFormatError::OutOfRange { .. })
        ));
        // i64 边界本身可以录入
        assert!(validator()
            .validate_line("9223372036854775807,-9223372036854775808,0,0,0,0")
            .is_valid());
    }
}
