//! Mock implementations for the repository traits
//!
//! In-memory, order-preserving implementations for unit testing without a
//! real data directory. Collections are Vec-backed on purpose: the dispatch
//! matcher's tie-break depends on stored order.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use courier_core::models::{
    Carrier, CarrierStatus, District, Shipment, ShipmentFilter, ShipmentStatus,
};
use courier_core::traits::{CarrierRepository, DistrictRepository, ShipmentRepository};
use courier_core::{CourierError, CourierResult};

/// Mock implementation of CarrierRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockCarrierRepository {
    carriers: Arc<Mutex<Vec<Carrier>>>,
}

impl MockCarrierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_carriers(carriers: Vec<Carrier>) -> Self {
        Self {
            carriers: Arc::new(Mutex::new(carriers)),
        }
    }

    pub fn count(&self) -> usize {
        self.carriers.lock().unwrap().len()
    }
}

#[async_trait]
impl CarrierRepository for MockCarrierRepository {
    async fn create(&self, carrier: &Carrier) -> CourierResult<Carrier> {
        let mut carriers = self.carriers.lock().unwrap();
        carriers.push(carrier.clone());
        Ok(carrier.clone())
    }

    async fn get_by_id(&self, id: &str) -> CourierResult<Option<Carrier>> {
        let carriers = self.carriers.lock().unwrap();
        Ok(carriers.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> CourierResult<Vec<Carrier>> {
        Ok(self.carriers.lock().unwrap().clone())
    }

    async fn get_active_carriers(&self) -> CourierResult<Vec<Carrier>> {
        let carriers = self.carriers.lock().unwrap();
        Ok(carriers.iter().filter(|c| c.is_active()).cloned().collect())
    }

    async fn update(&self, carrier: &Carrier) -> CourierResult<()> {
        let mut carriers = self.carriers.lock().unwrap();
        let existing = carriers
            .iter_mut()
            .find(|c| c.id == carrier.id)
            .ok_or_else(|| CourierError::carrier_not_found(&carrier.id))?;
        *existing = carrier.clone();
        Ok(())
    }

    async fn update_status(&self, id: &str, status: CarrierStatus) -> CourierResult<()> {
        let mut carriers = self.carriers.lock().unwrap();
        let carrier = carriers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CourierError::carrier_not_found(id))?;
        carrier.status = status;
        carrier.updated_at = Utc::now();
        Ok(())
    }

    async fn increment_load(&self, id: &str) -> CourierResult<()> {
        let mut carriers = self.carriers.lock().unwrap();
        let carrier = carriers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CourierError::carrier_not_found(id))?;
        carrier.current_load += 1;
        carrier.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> CourierResult<()> {
        let mut carriers = self.carriers.lock().unwrap();
        let before = carriers.len();
        carriers.retain(|c| c.id != id);
        if carriers.len() == before {
            return Err(CourierError::carrier_not_found(id));
        }
        Ok(())
    }
}

/// Mock implementation of ShipmentRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockShipmentRepository {
    shipments: Arc<Mutex<Vec<Shipment>>>,
}

impl MockShipmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shipments(shipments: Vec<Shipment>) -> Self {
        Self {
            shipments: Arc::new(Mutex::new(shipments)),
        }
    }

    pub fn count(&self) -> usize {
        self.shipments.lock().unwrap().len()
    }
}

#[async_trait]
impl ShipmentRepository for MockShipmentRepository {
    async fn create(&self, shipment: &Shipment) -> CourierResult<Shipment> {
        let mut shipments = self.shipments.lock().unwrap();
        shipments.push(shipment.clone());
        Ok(shipment.clone())
    }

    async fn get_by_id(&self, id: &str) -> CourierResult<Option<Shipment>> {
        let shipments = self.shipments.lock().unwrap();
        Ok(shipments.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self, filter: &ShipmentFilter) -> CourierResult<Vec<Shipment>> {
        let shipments = self.shipments.lock().unwrap();
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
        let shipments = self.shipments.lock().unwrap();
        Ok(shipments.iter().filter(|s| s.is_pending()).cloned().collect())
    }

    async fn update(&self, shipment: &Shipment) -> CourierResult<()> {
        let mut shipments = self.shipments.lock().unwrap();
        let existing = shipments
            .iter_mut()
            .find(|s| s.id == shipment.id)
            .ok_or_else(|| CourierError::shipment_not_found(&shipment.id))?;
        *existing = shipment.clone();
        Ok(())
    }

    async fn update_status(&self, id: &str, status: ShipmentStatus) -> CourierResult<()> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = shipments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CourierError::shipment_not_found(id))?;
        shipment.status = status;
        shipment.updated_at = Utc::now();
        Ok(())
    }

    async fn mark_assigned(&self, shipment_id: &str, carrier_id: &str) -> CourierResult<()> {
        let mut shipments = self.shipments.lock().unwrap();
        let shipment = shipments
            .iter_mut()
            .find(|s| s.id == shipment_id)
            .ok_or_else(|| CourierError::shipment_not_found(shipment_id))?;
        shipment.assign_to(carrier_id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> CourierResult<()> {
        let mut shipments = self.shipments.lock().unwrap();
        let before = shipments.len();
        shipments.retain(|s| s.id != id);
        if shipments.len() == before {
            return Err(CourierError::shipment_not_found(id));
        }
        Ok(())
    }
}

/// Mock implementation of DistrictRepository for testing
#[derive(Debug, Clone, Default)]
pub struct MockDistrictRepository {
    districts: Arc<Mutex<Vec<District>>>,
}

impl MockDistrictRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_districts(names: &[&str]) -> Self {
        Self {
            districts: Arc::new(Mutex::new(
                names.iter().map(|name| District::new(*name)).collect(),
            )),
        }
    }
}

#[async_trait]
impl DistrictRepository for MockDistrictRepository {
    async fn add(&self, district: &District) -> CourierResult<District> {
        let mut districts = self.districts.lock().unwrap();
        if districts.iter().any(|d| d.name == district.name) {
            return Err(CourierError::DistrictAlreadyExists {
                name: district.name.clone(),
            });
        }
        districts.push(district.clone());
        Ok(district.clone())
    }

    async fn get_by_name(&self, name: &str) -> CourierResult<Option<District>> {
        let districts = self.districts.lock().unwrap();
        Ok(districts.iter().find(|d| d.name == name).cloned())
    }

    async fn list(&self) -> CourierResult<Vec<District>> {
        Ok(self.districts.lock().unwrap().clone())
    }

    async fn remove(&self, name: &str) -> CourierResult<()> {
        let mut districts = self.districts.lock().unwrap();
        let before = districts.len();
        districts.retain(|d| d.name != name);
        if districts.len() == before {
            return Err(CourierError::district_not_found(name));
        }
        Ok(())
    }
}
