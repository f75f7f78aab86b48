pub mod storage;

pub use storage::{
    JsonCarrierRepository, JsonDistrictRepository, JsonShipmentRepository, JsonStore,
};
