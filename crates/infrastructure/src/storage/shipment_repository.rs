use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use courier_core::models::{Shipment, ShipmentFilter, ShipmentStatus};
use courier_core::traits::ShipmentRepository;
use courier_core::{CourierError, CourierResult};

use super::json_store::JsonStore;
use super::COLLECTION_SHIPMENTS;

/// JSON文档存储上的运单仓储
pub struct JsonShipmentRepository {
    store: JsonStore,
    shipments: RwLock<Vec<Shipment>>,
}

impl JsonShipmentRepository {
    pub async fn new(store: JsonStore) -> CourierResult<Self> {
        let shipments = store.load_collection(COLLECTION_SHIPMENTS).await?;
        Ok(Self {
            store,
            shipments: RwLock::new(shipments),
        })
    }

    async fn persist(&self, shipments: &[Shipment]) -> CourierResult<()> {
        self.store
            .save_collection(COLLECTION_SHIPMENTS, shipments)
            .await
    }
}

#[async_trait]
impl ShipmentRepository for JsonShipmentRepository {
    async fn create(&self, shipment: &Shipment) -> CourierResult<Shipment> {
        let mut shipments = self.shipments.write().await;
        if shipments.iter().any(|s| s.id == shipment.id) {
            return Err(CourierError::Validation(format!(
                "运单ID已存在: {}",
                shipment.id
            )));
        }
        shipments.push(shipment.clone());
        self.persist(&shipments).await?;
        Ok(shipment.clone())
    }

    async fn get_by_id(&self, id: &str) -> CourierResult<Option<Shipment>> {
        let shipments = self.shipments.read().await;
        Ok(shipments.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self, filter: &ShipmentFilter) -> CourierResult<Vec<Shipment>> {
        let shipments = self.shipments.read().await;
        Ok(shipments
            .iter()
            .filter(|s| filter.status.map_or(true, |status| s.status == status))
            .filter(|s| {
                filter
                    .district
                    .as_ref()
                    .map_or(true, |district| &s.district == district)
            })
            .filter(|s| {
                filter
                    .assigned_carrier_id
                    .as_ref()
                    .map_or(true, |id| s.assigned_carrier_id.as_ref() == Some(id))
            })
            .cloned()
            .collect())
    }

    async fn get_pending_shipments(&self) -> CourierResult<Vec<Shipment>> {
        let shipments = self.shipments.read().await;
        Ok(shipments.iter().filter(|s| s.is_pending()).cloned().collect())
    }

    async fn update(&self, shipment: &Shipment) -> CourierResult<()> {
        let mut shipments = self.shipments.write().await;
        let existing = shipments
            .iter_mut()
            .find(|s| s.id == shipment.id)
            .ok_or_else(|| CourierError::shipment_not_found(&shipment.id))?;
        *existing = shipment.clone();
        self.persist(&shipments).await
    }

    async fn update_status(&self, id: &str, status: ShipmentStatus) -> CourierResult<()> {
        let mut shipments = self.shipments.write().await;
        let shipment = shipments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CourierError::shipment_not_found(id))?;
        // 终态运单不允许再流转
        if shipment.status.is_terminal() {
            return Err(CourierError::InvalidStatusTransition {
                from: shipment.status.to_string(),
                to: status.to_string(),
            });
        }
        shipment.status = status;
        shipment.updated_at = Utc::now();
        self.persist(&shipments).await
    }

    async fn mark_assigned(&self, shipment_id: &str, carrier_id: &str) -> CourierResult<()> {
        let mut shipments = self.shipments.write().await;
        let shipment = shipments
            .iter_mut()
            .find(|s| s.id == shipment_id)
            .ok_or_else(|| CourierError::shipment_not_found(shipment_id))?;
        // 每个运单最多被成功指派一次
        if !shipment.is_pending() {
            return Err(CourierError::InvalidStatusTransition {
                from: shipment.status.to_string(),
                to: ShipmentStatus::Assigned.to_string(),
            });
        }
        shipment.assign_to(carrier_id);
        self.persist(&shipments).await
    }

    async fn delete(&self, id: &str) -> CourierResult<()> {
        let mut shipments = self.shipments.write().await;
        let before = shipments.len();
        shipments.retain(|s| s.id != id);
        if shipments.len() == before {
            return Err(CourierError::shipment_not_found(id));
        }
        self.persist(&shipments).await
    }
}
