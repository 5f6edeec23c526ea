// ==========================================
// 三明治摊位 - 运行报告与展示映射
// ==========================================
// StockDisplay: stock 表表头 × 原始录入 token，按位置配对（较短者为准）
// 注意: 展示的是本次录入的销量原文，不是预测值（见 DESIGN.md 未决问题）
// ==========================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::domain::{ItemHeadings, SalesRow, StockForecastRow, SurplusRow};

/// 展示用的一项（商品名 → 数值原文）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub item: String,
    pub value: String,
}

// ==========================================
// StockDisplay - 最终打印的映射
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StockDisplay(Vec<DisplayEntry>);

impl StockDisplay {
    /// 表头与数值按位置配对；同名表头后者覆盖前者
    pub fn from_pairs<V: AsRef<str>>(headings: &ItemHeadings, values: &[V]) -> Self {
        let mut entries: Vec<DisplayEntry> = Vec::new();
        for (item, value) in headings.names().iter().zip(values) {
            let value = value.as_ref().to_string();
            match entries.iter_mut().find(|e| &e.item == item) {
                Some(existing) => existing.value = value,
                None => entries.push(DisplayEntry {
                    item: item.clone(),
                    value,
                }),
            }
        }
        Self(entries)
    }

    pub fn entries(&self) -> &[DisplayEntry] {
        &self.0
    }

    pub fn get(&self, item: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.item == item)
            .map(|e| e.value.as_str())
    }
}

impl fmt::Display for StockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, entry) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", entry.item, entry.value)?;
        }
        write!(f, "}}")
    }
}

// ==========================================
// SessionReport - 一次运行的结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// 通过校验前的尝试次数
    pub attempts: usize,
    pub raw_input: Vec<String>,
    pub sales: SalesRow,
    pub surplus: SurplusRow,
    pub forecast: StockForecastRow,
    pub display: StockDisplay,
}
