use serde::{Deserialize, Serialize};

/// 运营总览统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationStats {
    pub total_shipments: usize,
    pub delivered_today: usize,
    pub pending_assignment: usize,
    pub active_carriers: usize,
    /// 所有货到付款运单的待收金额合计
    pub total_cod_to_collect: f64,
}

/// 单个司机的绩效统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierPerformance {
    pub carrier_id: String,
    pub driver_name: String,
    pub assigned_district: String,
    /// 历史指派运单总数
    pub total_shipments: usize,
    pub delivered: usize,
    /// 签收率，百分比
    pub success_rate: f64,
    pub cod_collected: f64,
}
