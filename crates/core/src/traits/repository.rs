//! 数据仓储层接口定义
//!
//! 定义司机、运单、片区三类实体的数据访问抽象。所有操作都是异步的，
//! 返回 `CourierResult<T>` 统一错误处理，实现要求 `Send + Sync`。
//!
//! 集合的迭代顺序就是存储顺序：调度匹配依赖司机列表的给定顺序做
//! 先到先得的决胜，因此实现必须保持插入序，不得用无序容器替代。

use crate::models::{Carrier, CarrierStatus, District, Shipment, ShipmentFilter, ShipmentStatus};
use crate::CourierResult;
use async_trait::async_trait;

/// 司机仓储接口
#[async_trait]
pub trait CarrierRepository: Send + Sync {
    /// 登记新司机
    async fn create(&self, carrier: &Carrier) -> CourierResult<Carrier>;

    /// 按ID查询司机
    async fn get_by_id(&self, id: &str) -> CourierResult<Option<Carrier>>;

    /// 按存储顺序返回全部司机
    async fn list(&self) -> CourierResult<Vec<Carrier>>;

    /// 返回所有在岗司机
    async fn get_active_carriers(&self) -> CourierResult<Vec<Carrier>>;

    /// 整体更新司机记录
    async fn update(&self, carrier: &Carrier) -> CourierResult<()>;

    /// 更新司机状态
    async fn update_status(&self, id: &str, status: CarrierStatus) -> CourierResult<()>;

    /// 当前载荷加一（指派成功后由调用方触发）
    async fn increment_load(&self, id: &str) -> CourierResult<()>;

    /// 删除司机
    async fn delete(&self, id: &str) -> CourierResult<()>;
}

/// 运单仓储接口
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// 录入新运单
    async fn create(&self, shipment: &Shipment) -> CourierResult<Shipment>;

    /// 按ID查询运单
    async fn get_by_id(&self, id: &str) -> CourierResult<Option<Shipment>>;

    /// 条件查询，返回存储顺序
    async fn list(&self, filter: &ShipmentFilter) -> CourierResult<Vec<Shipment>>;

    /// 返回所有待分配运单（创建先后顺序）
    async fn get_pending_shipments(&self) -> CourierResult<Vec<Shipment>>;

    /// 整体更新运单记录
    async fn update(&self, shipment: &Shipment) -> CourierResult<()>;

    /// 更新运单状态
    async fn update_status(&self, id: &str, status: ShipmentStatus) -> CourierResult<()>;

    /// 将运单标记为已指派给指定司机
    async fn mark_assigned(&self, shipment_id: &str, carrier_id: &str) -> CourierResult<()>;

    /// 删除运单
    async fn delete(&self, id: &str) -> CourierResult<()>;
}

/// 片区仓储接口
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    /// 新增覆盖片区，重名时返回错误
    async fn add(&self, district: &District) -> CourierResult<District>;

    /// 按名称查询片区
    async fn get_by_name(&self, name: &str) -> CourierResult<Option<District>>;

    /// 返回全部覆盖片区
    async fn list(&self) -> CourierResult<Vec<District>>;

    /// 移除覆盖片区
    async fn remove(&self, name: &str) -> CourierResult<()>;
}
