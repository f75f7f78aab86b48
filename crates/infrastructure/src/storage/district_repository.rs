use async_trait::async_trait;
use tokio::sync::RwLock;

use courier_core::models::District;
use courier_core::traits::DistrictRepository;
use courier_core::{CourierError, CourierResult};

use super::json_store::JsonStore;
use super::COLLECTION_DISTRICTS;

/// JSON文档存储上的片区仓储
pub struct JsonDistrictRepository {
    store: JsonStore,
    districts: RwLock<Vec<District>>,
}

impl JsonDistrictRepository {
    pub async fn new(store: JsonStore) -> CourierResult<Self> {
        let districts = store.load_collection(COLLECTION_DISTRICTS).await?;
        Ok(Self {
            store,
            districts: RwLock::new(districts),
        })
    }

    async fn persist(&self, districts: &[District]) -> CourierResult<()> {
        self.store
            .save_collection(COLLECTION_DISTRICTS, districts)
            .await
    }
}

#[async_trait]
impl DistrictRepository for JsonDistrictRepository {
    async fn add(&self, district: &District) -> CourierResult<District> {
        let mut districts = self.districts.write().await;
        if districts.iter().any(|d| d.name == district.name) {
            return Err(CourierError::DistrictAlreadyExists {
                name: district.name.clone(),
            });
        }
        districts.push(district.clone());
        self.persist(&districts).await?;
        Ok(district.clone())
    }

    async fn get_by_name(&self, name: &str) -> CourierResult<Option<District>> {
        let districts = self.districts.read().await;
        Ok(districts.iter().find(|d| d.name == name).cloned())
    }

    async fn list(&self) -> CourierResult<Vec<District>> {
        Ok(self.districts.read().await.clone())
    }

    async fn remove(&self, name: &str) -> CourierResult<()> {
        let mut districts = self.districts.write().await;
        let before = districts.len();
        districts.retain(|d| d.name != name);
        if districts.len() == before {
            return Err(CourierError::district_not_found(name));
        }
        self.persist(&districts).await
    }
}
