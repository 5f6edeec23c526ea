// ==========================================
// 三明治摊位 - 行数据模型
// ==========================================
// 不变量: SalesRow / StockRow / SurplusRow / StockForecastRow
//        均按同一商品顺序位置对齐
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::types::ITEM_COUNT;

/// 账本单元格无法解析为整数
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cell {column} ('{value}') is not an integer")]
pub struct CellParseError {
    /// 列号（从 1 开始）
    pub column: usize,
    pub value: String,
}

/// 将账本单元格解析为整数序列
///
/// 单元格两端空白会被忽略；列号从 1 开始报告
pub fn parse_integer_cells<S: AsRef<str>>(cells: &[S]) -> Result<Vec<i64>, CellParseError> {
    cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let raw = cell.as_ref();
            raw.trim().parse::<i64>().map_err(|_| CellParseError {
                column: idx + 1,
                value: raw.to_string(),
            })
        })
        .collect()
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[i64]) -> fmt::Result {
    write!(f, "[")?;
    for (idx, v) in values.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    write!(f, "]")
}

// ==========================================
// SalesRow - 单日销量
// ==========================================
// 只能由 InputValidator 产生，长度恒为 ITEM_COUNT
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SalesRow(Vec<i64>);

impl SalesRow {
    /// 长度不是 ITEM_COUNT 时返回 None
    pub fn new(values: Vec<i64>) -> Option<Self> {
        (values.len() == ITEM_COUNT).then_some(Self(values))
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }
}

impl fmt::Display for SalesRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, &self.0)
    }
}

// ==========================================
// StockRow - 当前库存快照
// ==========================================
// 从 stock 表最后一行读取；长度不强制（由 SurplusCalculator 告警）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockRow(Vec<i64>);

impl StockRow {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// 从账本单元格解析
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self, CellParseError> {
        parse_integer_cells(cells).map(Self)
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }
}

// ==========================================
// SurplusRow - 剩余量 (stock - sales)
// ==========================================
// 正数: 浪费；负数: 超卖
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SurplusRow(Vec<i64>);

impl SurplusRow {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }
}

impl fmt::Display for SurplusRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, &self.0)
    }
}

// ==========================================
// SalesHistory - 每个商品最近 N 天销量
// ==========================================
// 外层长度 = 商品数，内层长度 ≤ history_days（按时间先后）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SalesHistory(Vec<Vec<i64>>);

impl SalesHistory {
    pub fn new(columns: Vec<Vec<i64>>) -> Self {
        Self(columns)
    }

    pub fn columns(&self) -> &[Vec<i64>] {
        &self.0
    }
}

// ==========================================
// StockForecastRow - 次日备货预测
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StockForecastRow(Vec<i64>);

impl StockForecastRow {
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }
}

impl fmt::Display for StockForecastRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, &self.0)
    }
}

// ==========================================
// ItemHeadings - 商品名（stock 表表头）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemHeadings(Vec<String>);

impl ItemHeadings {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}
