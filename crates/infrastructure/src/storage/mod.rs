//! 持久化层
//!
//! 以"集合名 -> 整份JSON数组文档"的方式读写数据目录：启动时整体载入，
//! 每次变更整体覆盖写回。不提供事务或持久化强保证，仓储实现持有内存
//! 工作副本并在每次变更后透写。

pub mod carrier_repository;
pub mod district_repository;
pub mod json_store;
pub mod shipment_repository;

pub use carrier_repository::JsonCarrierRepository;
pub use district_repository::JsonDistrictRepository;
pub use json_store::JsonStore;
pub use shipment_repository::JsonShipmentRepository;

/// 集合文档名
pub const COLLECTION_CARRIERS: &str = "carriers";
pub const COLLECTION_SHIPMENTS: &str = "shipments";
pub const COLLECTION_DISTRICTS: &str = "districts";
