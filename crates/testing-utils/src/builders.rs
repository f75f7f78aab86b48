//! Test data builders with sensible defaults and easy customization.

use chrono::Utc;
use courier_core::models::{
    Carrier, CarrierStatus, PaymentMethod, Priority, Shipment, ShipmentStatus,
};

/// Builder for creating test Carrier entities
pub struct CarrierBuilder {
    carrier: Carrier,
}

impl CarrierBuilder {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            carrier: Carrier {
                id: uuid::Uuid::new_v4().to_string(),
                plate_number: "粤B12345".to_string(),
                driver_name: "测试司机".to_string(),
                driver_phone: "13800000000".to_string(),
                assigned_district: "南山区".to_string(),
                capacity: 5,
                current_load: 0,
                status: CarrierStatus::Active,
                total_cod_collected: 0.0,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.carrier.id = id.to_string();
        self
    }

    pub fn with_driver_name(mut self, name: &str) -> Self {
        self.carrier.driver_name = name.to_string();
        self
    }

    pub fn with_district(mut self, district: &str) -> Self {
        self.carrier.assigned_district = district.to_string();
        self
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.carrier.capacity = capacity;
        self
    }

    pub fn with_current_load(mut self, load: i32) -> Self {
        self.carrier.current_load = load;
        self
    }

    pub fn with_status(mut self, status: CarrierStatus) -> Self {
        self.carrier.status = status;
        self
    }

    pub fn suspended(mut self) -> Self {
        self.carrier.status = CarrierStatus::Suspended;
        self
    }

    pub fn build(self) -> Carrier {
        self.carrier
    }
}

impl Default for CarrierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test Shipment entities
pub struct ShipmentBuilder {
    shipment: Shipment,
}

impl ShipmentBuilder {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            shipment: Shipment {
                id: uuid::Uuid::new_v4().to_string(),
                order_number: "SF-0001".to_string(),
                customer_name: "测试客户".to_string(),
                phone: "13900000000".to_string(),
                address: "测试地址1号".to_string(),
                district: "南山区".to_string(),
                status: ShipmentStatus::Pending,
                assigned_carrier_id: None,
                weight: 1.0,
                cod_amount: 0.0,
                payment_method: PaymentMethod::Prepaid,
                priority: Priority::Medium,
                notes: None,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.shipment.id = id.to_string();
        self
    }

    pub fn with_order_number(mut self, order_number: &str) -> Self {
        self.shipment.order_number = order_number.to_string();
        self
    }

    pub fn with_district(mut self, district: &str) -> Self {
        self.shipment.district = district.to_string();
        self
    }

    pub fn with_status(mut self, status: ShipmentStatus) -> Self {
        self.shipment.status = status;
        self
    }

    pub fn with_assigned_carrier(mut self, carrier_id: &str) -> Self {
        self.shipment.assigned_carrier_id = Some(carrier_id.to_string());
        self
    }

    pub fn with_cod(mut self, amount: f64) -> Self {
        self.shipment.payment_method = PaymentMethod::Cod;
        self.shipment.cod_amount = amount;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.shipment.priority = priority;
        self
    }

    pub fn build(self) -> Shipment {
        self.shipment
    }
}

impl Default for ShipmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
