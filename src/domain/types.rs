// ==========================================
// 三明治摊位 - 领域类型定义
// ==========================================
// 账本三张表: sales / surplus / stock
// 所有行按同一商品顺序位置对齐，不带主键
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 每行跟踪的商品数量
pub const ITEM_COUNT: usize = 6;

/// 预测使用的默认历史天数
pub const DEFAULT_HISTORY_DAYS: usize = 5;

// ==========================================
// 账本表 (Ledger Table)
// ==========================================
// 序列化格式: lowercase (与工作表名一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerTable {
    Sales,   // 每日销量
    Surplus, // 库存 - 销量
    Stock,   // 备货量（最后一行为当前库存）
}

impl LedgerTable {
    pub const ALL: [LedgerTable; 3] = [LedgerTable::Sales, LedgerTable::Surplus, LedgerTable::Stock];

    /// 工作表名
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerTable::Sales => "sales",
            LedgerTable::Surplus => "surplus",
            LedgerTable::Stock => "stock",
        }
    }
}

impl fmt::Display for LedgerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sales" => Ok(LedgerTable::Sales),
            "surplus" => Ok(LedgerTable::Surplus),
            "stock" => Ok(LedgerTable::Stock),
            other => Err(format!("unknown table '{}' (expected sales, surplus or stock)", other)),
        }
    }
}
