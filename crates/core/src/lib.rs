pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use errors::CourierError;
pub use models::{
    ActivityEntry, AssignmentDecision, Carrier, CarrierPerformance, CarrierStatus, DispatchReport,
    District, DistrictStats, OperationStats, PaymentMethod, Priority, Shipment, ShipmentFilter,
    ShipmentStatus,
};

/// 统一的Result类型
pub type CourierResult<T> = std::result::Result<T, CourierError>;
