pub mod repository;

pub use repository::{CarrierRepository, DistrictRepository, ShipmentRepository};
