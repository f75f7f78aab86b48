use courier_core::models::{CarrierStatus, District, ShipmentFilter, ShipmentStatus};
use courier_core::traits::{CarrierRepository, DistrictRepository, ShipmentRepository};
use courier_core::CourierError;
use courier_infrastructure::{
    JsonCarrierRepository, JsonDistrictRepository, JsonShipmentRepository, JsonStore,
};
use courier_testing_utils::{CarrierBuilder, ShipmentBuilder};

#[tokio::test]
async fn test_load_missing_collection_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();

    let carriers: Vec<courier_core::models::Carrier> =
        store.load_collection("carriers").await.unwrap();
    assert!(carriers.is_empty());
}

#[tokio::test]
async fn test_collection_roundtrip_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();

    let carriers = vec![
        CarrierBuilder::new().with_id("c1").build(),
        CarrierBuilder::new().with_id("c2").build(),
        CarrierBuilder::new().with_id("c3").build(),
    ];
    store.save_collection("carriers", &carriers).await.unwrap();

    let loaded: Vec<courier_core::models::Carrier> =
        store.load_collection("carriers").await.unwrap();
    let ids: Vec<_> = loaded.iter().map(|c| c.id.as_str()).collect();
    // 存储顺序决定调度决胜顺序，必须原样保持
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}

#[tokio::test]
async fn test_carrier_repository_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = JsonStore::open(dir.path()).await.unwrap();
        let repo = JsonCarrierRepository::new(store).await.unwrap();
        let carrier = CarrierBuilder::new()
            .with_id("c1")
            .with_driver_name("刘洋")
            .build();
        repo.create(&carrier).await.unwrap();
        repo.increment_load("c1").await.unwrap();
        repo.update_status("c1", CarrierStatus::Offline).await.unwrap();
    }

    // 重新打开后读到已落盘的状态
    let store = JsonStore::open(dir.path()).await.unwrap();
    let repo = JsonCarrierRepository::new(store).await.unwrap();
    let carrier = repo.get_by_id("c1").await.unwrap().unwrap();
    assert_eq!(carrier.driver_name, "刘洋");
    assert_eq!(carrier.current_load, 1);
    assert_eq!(carrier.status, CarrierStatus::Offline);
}

#[tokio::test]
async fn test_carrier_repository_rejects_unknown_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let repo = JsonCarrierRepository::new(store).await.unwrap();

    let result = repo.increment_load("ghost").await;
    assert!(matches!(
        result,
        Err(CourierError::CarrierNotFound { ref id }) if id == "ghost"
    ));
    assert!(repo.delete("ghost").await.is_err());
}

#[tokio::test]
async fn test_shipment_assignment_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let repo = JsonShipmentRepository::new(store).await.unwrap();

    let shipment = ShipmentBuilder::new().with_id("s1").build();
    repo.create(&shipment).await.unwrap();

    repo.mark_assigned("s1", "c1").await.unwrap();
    let assigned = repo.get_by_id("s1").await.unwrap().unwrap();
    assert_eq!(assigned.status, ShipmentStatus::Assigned);
    assert_eq!(assigned.assigned_carrier_id.as_deref(), Some("c1"));

    // 已指派的运单不允许二次指派
    let again = repo.mark_assigned("s1", "c2").await;
    assert!(matches!(
        again,
        Err(CourierError::InvalidStatusTransition { .. })
    ));
}

#[tokio::test]
async fn test_shipment_terminal_status_is_final() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let repo = JsonShipmentRepository::new(store).await.unwrap();

    let shipment = ShipmentBuilder::new().with_id("s1").build();
    repo.create(&shipment).await.unwrap();
    repo.update_status("s1", ShipmentStatus::Delivered)
        .await
        .unwrap();

    let result = repo.update_status("s1", ShipmentStatus::Pending).await;
    assert!(matches!(
        result,
        Err(CourierError::InvalidStatusTransition { .. })
    ));
}

#[tokio::test]
async fn test_shipment_filter() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let repo = JsonShipmentRepository::new(store).await.unwrap();

    repo.create(&ShipmentBuilder::new().with_id("s1").with_district("南山区").build())
        .await
        .unwrap();
    repo.create(&ShipmentBuilder::new().with_id("s2").with_district("福田区").build())
        .await
        .unwrap();
    repo.create(
        &ShipmentBuilder::new()
            .with_id("s3")
            .with_district("南山区")
            .with_status(ShipmentStatus::Delivered)
            .build(),
    )
    .await
    .unwrap();

    let filter = ShipmentFilter {
        district: Some("南山区".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.list(&filter).await.unwrap().len(), 2);

    let filter = ShipmentFilter {
        status: Some(ShipmentStatus::Pending),
        district: Some("南山区".to_string()),
        ..Default::default()
    };
    let pending = repo.list(&filter).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "s1");

    assert_eq!(repo.get_pending_shipments().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_district_repository_duplicate_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::open(dir.path()).await.unwrap();
    let repo = JsonDistrictRepository::new(store).await.unwrap();

    repo.add(&District::new("南山区")).await.unwrap();
    let duplicate = repo.add(&District::new("南山区")).await;
    assert!(matches!(
        duplicate,
        Err(CourierError::DistrictAlreadyExists { .. })
    ));

    assert!(repo.get_by_name("南山区").await.unwrap().is_some());
    repo.remove("南山区").await.unwrap();
    assert!(repo.get_by_name("南山区").await.unwrap().is_none());
    assert!(repo.remove("南山区").await.is_err());
}
