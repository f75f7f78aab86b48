use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 司机（运力单元）信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub id: String,
    pub plate_number: String,
    pub driver_name: String,
    pub driver_phone: String,
    /// 负责片区，与运单目的片区做精确字符串匹配
    pub assigned_district: String,
    pub capacity: i32,
    pub current_load: i32,
    pub status: CarrierStatus,
    pub total_cod_collected: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 司机状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarrierStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "SUSPENDED")]
    Suspended,
    #[serde(rename = "OFFLINE")]
    Offline,
    #[serde(rename = "MAINTENANCE")]
    Maintenance,
    #[serde(rename = "FULL")]
    Full,
}

impl std::fmt::Display for CarrierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CarrierStatus::Active => "在岗",
            CarrierStatus::Suspended => "已停用",
            CarrierStatus::Offline => "离线",
            CarrierStatus::Maintenance => "维护中",
            CarrierStatus::Full => "已满载",
        };
        write!(f, "{label}")
    }
}

impl Carrier {
    /// 创建新司机，初始载荷为0、状态为在岗
    pub fn new(
        plate_number: impl Into<String>,
        driver_name: impl Into<String>,
        driver_phone: impl Into<String>,
        assigned_district: impl Into<String>,
        capacity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            plate_number: plate_number.into(),
            driver_name: driver_name.into(),
            driver_phone: driver_phone.into(),
            assigned_district: assigned_district.into(),
            capacity,
            current_load: 0,
            status: CarrierStatus::Active,
            total_cod_collected: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, CarrierStatus::Active)
    }

    pub fn has_spare_capacity(&self) -> bool {
        self.capacity > 0 && self.current_load < self.capacity
    }

    /// 是否可以接收新运单
    pub fn can_accept_shipment(&self) -> bool {
        self.is_active() && self.has_spare_capacity()
    }

    pub fn remaining_capacity(&self) -> i32 {
        (self.capacity - self.current_load).max(0)
    }

    /// 获取司机负载率
    pub fn load_percentage(&self) -> f64 {
        if self.capacity <= 0 {
            0.0
        } else {
            (self.current_load as f64 / self.capacity as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carrier_with(status: CarrierStatus, load: i32, capacity: i32) -> Carrier {
        let mut carrier = Carrier::new("粤B12345", "张伟", "13800000001", "南山区", capacity);
        carrier.status = status;
        carrier.current_load = load;
        carrier
    }

    #[test]
    fn test_can_accept_shipment() {
        assert!(carrier_with(CarrierStatus::Active, 0, 5).can_accept_shipment());
        assert!(carrier_with(CarrierStatus::Active, 4, 5).can_accept_shipment());
        // 满载
        assert!(!carrier_with(CarrierStatus::Active, 5, 5).can_accept_shipment());
        // 非在岗状态一律不可接单
        assert!(!carrier_with(CarrierStatus::Suspended, 0, 5).can_accept_shipment());
        assert!(!carrier_with(CarrierStatus::Offline, 0, 5).can_accept_shipment());
        assert!(!carrier_with(CarrierStatus::Maintenance, 0, 5).can_accept_shipment());
        assert!(!carrier_with(CarrierStatus::Full, 0, 5).can_accept_shipment());
    }

    #[test]
    fn test_capacity_helpers() {
        let carrier = carrier_with(CarrierStatus::Active, 3, 10);
        assert_eq!(carrier.remaining_capacity(), 7);
        assert!((carrier.load_percentage() - 30.0).abs() < f64::EPSILON);

        // 容量字段非法时不出现负剩余或除零
        let broken = carrier_with(CarrierStatus::Active, 3, 0);
        assert_eq!(broken.remaining_capacity(), 0);
        assert_eq!(broken.load_percentage(), 0.0);
        assert!(!broken.has_spare_capacity());
    }

    #[test]
    fn test_status_serde_rename() {
        let carrier = carrier_with(CarrierStatus::Active, 0, 5);
        let json = serde_json::to_string(&carrier).unwrap();
        assert!(json.contains("\"status\":\"ACTIVE\""));

        let parsed: Carrier = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, CarrierStatus::Active);
    }
}
