use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 覆盖片区
///
/// 片区只是一个固定的城市区划标签，匹配时做精确字符串比较。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl District {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// 片区维度的派生统计，不落盘
#[derive(Debug, Clone, Serialize)]
pub struct DistrictStats {
    pub name: String,
    pub carrier_count: usize,
    pub shipment_count: usize,
    pub pending_count: usize,
}
