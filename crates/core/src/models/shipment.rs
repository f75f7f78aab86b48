use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 运单信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    /// 目的片区，仅做精确字符串匹配，不做任何地理计算
    pub district: String,
    pub status: ShipmentStatus,
    pub assigned_carrier_id: Option<String>,
    pub weight: f64,
    pub cod_amount: f64,
    pub payment_method: PaymentMethod,
    pub priority: Priority,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 运单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "RECEIVED")]
    Received,
    #[serde(rename = "ASSIGNED")]
    Assigned,
    #[serde(rename = "PICKED_UP")]
    PickedUp,
    #[serde(rename = "OUT_FOR_DELIVERY")]
    OutForDelivery,
    #[serde(rename = "DELIVERED")]
    Delivered,
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "POSTPONED")]
    Postponed,
    #[serde(rename = "CANCELLED")]
    Cancelled,
    #[serde(rename = "RETURNED")]
    Returned,
}

impl ShipmentStatus {
    /// 终态运单不再参与任何状态流转
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ShipmentStatus::Delivered | ShipmentStatus::Cancelled | ShipmentStatus::Returned
        )
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ShipmentStatus::Pending => "待分配",
            ShipmentStatus::Received => "已入库",
            ShipmentStatus::Assigned => "已指派",
            ShipmentStatus::PickedUp => "已取件",
            ShipmentStatus::OutForDelivery => "派送中",
            ShipmentStatus::Delivered => "已签收",
            ShipmentStatus::Failed => "配送失败",
            ShipmentStatus::Postponed => "已改约",
            ShipmentStatus::Cancelled => "已取消",
            ShipmentStatus::Returned => "已退回",
        };
        write!(f, "{label}")
    }
}

/// 付款方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "COD")]
    Cod,
    #[serde(rename = "PREPAID")]
    Prepaid,
}

/// 运单优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
}

/// 运单查询条件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipmentFilter {
    pub status: Option<ShipmentStatus>,
    pub district: Option<String>,
    pub assigned_carrier_id: Option<String>,
}

impl Shipment {
    /// 创建新运单，初始状态为待分配
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_number: impl Into<String>,
        customer_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        district: impl Into<String>,
        weight: f64,
        cod_amount: f64,
        payment_method: PaymentMethod,
        priority: Priority,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            order_number: order_number.into(),
            customer_name: customer_name.into(),
            phone: phone.into(),
            address: address.into(),
            district: district.into(),
            status: ShipmentStatus::Pending,
            assigned_carrier_id: None,
            weight,
            cod_amount,
            payment_method,
            priority,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, ShipmentStatus::Pending)
    }

    /// 指派给司机；每个运单最多被成功指派一次
    pub fn assign_to(&mut self, carrier_id: impl Into<String>) {
        self.assigned_carrier_id = Some(carrier_id.into());
        self.status = ShipmentStatus::Assigned;
        self.updated_at = Utc::now();
    }

    pub fn is_cod(&self) -> bool {
        matches!(self.payment_method, PaymentMethod::Cod)
    }
}
