use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use courier_core::models::{Carrier, CarrierStatus};
use courier_core::traits::CarrierRepository;
use courier_core::{CourierError, CourierResult};

use super::json_store::JsonStore;
use super::COLLECTION_CARRIERS;

/// JSON文档存储上的司机仓储
///
/// 内存中维护按插入序排列的工作副本，每次变更后整体写回集合文档。
pub struct JsonCarrierRepository {
    store: JsonStore,
    carriers: RwLock<Vec<Carrier>>,
}

impl JsonCarrierRepository {
    /// 打开仓储并载入现有集合
    pub async fn new(store: JsonStore) -> CourierResult<Self> {
        let carriers = store.load_collection(COLLECTION_CARRIERS).await?;
        Ok(Self {
            store,
            carriers: RwLock::new(carriers),
        })
    }

    async fn persist(&self, carriers: &[Carrier]) -> CourierResult<()> {
        self.store
            .save_collection(COLLECTION_CARRIERS, carriers)
            .await
    }
}

#[async_trait]
impl CarrierRepository for JsonCarrierRepository {
    async fn create(&self, carrier: &Carrier) -> CourierResult<Carrier> {
        let mut carriers = self.carriers.write().await;
        if carriers.iter().any(|c| c.id == carrier.id) {
            return Err(CourierError::Validation(format!(
                "司机ID已存在: {}",
                carrier.id
            )));
        }
        carriers.push(carrier.clone());
        self.persist(&carriers).await?;
        Ok(carrier.clone())
    }

    async fn get_by_id(&self, id: &str) -> CourierResult<Option<Carrier>> {
        let carriers = self.carriers.read().await;
        Ok(carriers.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> CourierResult<Vec<Carrier>> {
        Ok(self.carriers.read().await.clone())
    }

    async fn get_active_carriers(&self) -> CourierResult<Vec<Carrier>> {
        let carriers = self.carriers.read().await;
        Ok(carriers.iter().filter(|c| c.is_active()).cloned().collect())
    }

    async fn update(&self, carrier: &Carrier) -> CourierResult<()> {
        let mut carriers = self.carriers.write().await;
        let existing = carriers
            .iter_mut()
            .find(|c| c.id == carrier.id)
            .ok_or_else(|| CourierError::carrier_not_found(&carrier.id))?;
        *existing = carrier.clone();
        self.persist(&carriers).await
    }

    async fn update_status(&self, id: &str, status: CarrierStatus) -> CourierResult<()> {
        let mut carriers = self.carriers.write().await;
        let carrier = carriers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CourierError::carrier_not_found(id))?;
        carrier.status = status;
        carrier.updated_at = Utc::now();
        self.persist(&carriers).await
    }

    async fn increment_load(&self, id: &str) -> CourierResult<()> {
        let mut carriers = self.carriers.write().await;
        let carrier = carriers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CourierError::carrier_not_found(id))?;
        carrier.current_load += 1;
        carrier.updated_at = Utc::now();
        self.persist(&carriers).await
    }

    async fn delete(&self, id: &str) -> CourierResult<()> {
        let mut carriers = self.carriers.write().await;
        let before = carriers.len();
        carriers.retain(|c| c.id != id);
        if carriers.len() == before {
            return Err(CourierError::carrier_not_found(id));
        }
        self.persist(&carriers).await
    }
}
