use std::sync::Arc;

use courier_core::models::ShipmentStatus;
use courier_core::traits::{CarrierRepository, ShipmentRepository};
use courier_dispatcher::{ActivityLog, DispatchEngine};
use courier_testing_utils::{
    CarrierBuilder, MockCarrierRepository, MockShipmentRepository, ShipmentBuilder,
};

fn build_engine(
    carrier_repo: Arc<MockCarrierRepository>,
    shipment_repo: Arc<MockShipmentRepository>,
) -> (DispatchEngine, Arc<ActivityLog>) {
    let activity = Arc::new(ActivityLog::new(5));
    let engine = DispatchEngine::new(
        carrier_repo as Arc<dyn CarrierRepository>,
        shipment_repo as Arc<dyn ShipmentRepository>,
        Arc::clone(&activity),
    );
    (engine, activity)
}

#[tokio::test]
async fn test_run_once_assigns_and_persists() {
    let carrier_repo = Arc::new(MockCarrierRepository::with_carriers(vec![
        CarrierBuilder::new()
            .with_id("c1")
            .with_driver_name("王强")
            .with_district("南山区")
            .with_capacity(2)
            .build(),
    ]));
    let shipment_repo = Arc::new(MockShipmentRepository::with_shipments(vec![
        ShipmentBuilder::new()
            .with_id("s1")
            .with_order_number("SF-1001")
            .with_district("南山区")
            .build(),
    ]));
    let (engine, activity) = build_engine(Arc::clone(&carrier_repo), Arc::clone(&shipment_repo));

    let report = engine.run_once().await.unwrap();
    assert_eq!(report.examined, 1);
    assert_eq!(report.assigned, 1);
    assert_eq!(report.unassigned, 0);

    // 运单已标记指派
    let shipment = shipment_repo.get_by_id("s1").await.unwrap().unwrap();
    assert_eq!(shipment.status, ShipmentStatus::Assigned);
    assert_eq!(shipment.assigned_carrier_id.as_deref(), Some("c1"));

    // 司机载荷已累加
    let carrier = carrier_repo.get_by_id("c1").await.unwrap().unwrap();
    assert_eq!(carrier.current_load, 1);

    // 活动日志包含指派记录，最新条目在前
    let entries = activity.entries().await;
    assert_eq!(entries[0].message, "本轮自动调度已完成。");
    assert!(entries
        .iter()
        .any(|e| e.message.contains("SF-1001") && e.message.contains("王强")));
}

#[tokio::test]
async fn test_run_once_without_pending_shipments() {
    let carrier_repo = Arc::new(MockCarrierRepository::with_carriers(vec![
        CarrierBuilder::new().with_id("c1").build(),
    ]));
    let shipment_repo = Arc::new(MockShipmentRepository::new());
    let (engine, activity) = build_engine(carrier_repo, shipment_repo);

    let report = engine.run_once().await.unwrap();
    assert_eq!(report.examined, 0);
    assert!(report.decisions.is_empty());

    let entries = activity.entries().await;
    assert_eq!(entries[0].message, "没有待分配的运单。");
}

#[tokio::test]
async fn test_run_once_without_active_carriers() {
    let carrier_repo = Arc::new(MockCarrierRepository::with_carriers(vec![
        CarrierBuilder::new().with_id("c1").suspended().build(),
    ]));
    let shipment_repo = Arc::new(MockShipmentRepository::with_shipments(vec![
        ShipmentBuilder::new().with_id("s1").build(),
    ]));
    let (engine, activity) = build_engine(Arc::clone(&carrier_repo), Arc::clone(&shipment_repo));

    let report = engine.run_once().await.unwrap();
    assert_eq!(report.assigned, 0);
    assert_eq!(report.unassigned, 1);
    assert!(report.decisions.is_empty());

    // 运单保持待分配，司机载荷不变
    let shipment = shipment_repo.get_by_id("s1").await.unwrap().unwrap();
    assert_eq!(shipment.status, ShipmentStatus::Pending);
    let carrier = carrier_repo.get_by_id("c1").await.unwrap().unwrap();
    assert_eq!(carrier.current_load, 0);

    let entries = activity.entries().await;
    assert!(entries[0].message.contains("没有在岗司机"));
}

#[tokio::test]
async fn test_run_once_exhaustion_leaves_remainder_pending() {
    let carrier_repo = Arc::new(MockCarrierRepository::with_carriers(vec![
        CarrierBuilder::new()
            .with_id("c1")
            .with_district("南山区")
            .with_capacity(1)
            .build(),
    ]));
    let shipment_repo = Arc::new(MockShipmentRepository::with_shipments(vec![
        ShipmentBuilder::new()
            .with_id("s1")
            .with_order_number("SF-1001")
            .with_district("南山区")
            .build(),
        ShipmentBuilder::new()
            .with_id("s2")
            .with_order_number("SF-1002")
            .with_district("南山区")
            .build(),
    ]));
    let (engine, activity) = build_engine(Arc::clone(&carrier_repo), Arc::clone(&shipment_repo));

    let report = engine.run_once().await.unwrap();
    assert_eq!(report.assigned, 1);
    assert_eq!(report.unassigned, 1);

    let first = shipment_repo.get_by_id("s1").await.unwrap().unwrap();
    let second = shipment_repo.get_by_id("s2").await.unwrap().unwrap();
    assert_eq!(first.status, ShipmentStatus::Assigned);
    assert_eq!(second.status, ShipmentStatus::Pending);

    let entries = activity.entries().await;
    assert!(entries
        .iter()
        .any(|e| e.message.contains("运力不足") && e.message.contains("SF-1002")));
}

#[tokio::test]
async fn test_rerun_after_assignment_is_idempotent() {
    let carrier_repo = Arc::new(MockCarrierRepository::with_carriers(vec![
        CarrierBuilder::new()
            .with_id("c1")
            .with_district("南山区")
            .with_capacity(5)
            .build(),
    ]));
    let shipment_repo = Arc::new(MockShipmentRepository::with_shipments(vec![
        ShipmentBuilder::new()
            .with_id("s1")
            .with_district("南山区")
            .build(),
    ]));
    let (engine, _activity) = build_engine(Arc::clone(&carrier_repo), Arc::clone(&shipment_repo));

    let first = engine.run_once().await.unwrap();
    assert_eq!(first.assigned, 1);

    // 第二轮没有待分配运单，不产生新的指派
    let second = engine.run_once().await.unwrap();
    assert_eq!(second.examined, 0);
    assert_eq!(second.assigned, 0);

    let carrier = carrier_repo.get_by_id("c1").await.unwrap().unwrap();
    assert_eq!(carrier.current_load, 1);
}

#[tokio::test]
async fn test_fallback_assignment_crosses_district() {
    let carrier_repo = Arc::new(MockCarrierRepository::with_carriers(vec![
        CarrierBuilder::new()
            .with_id("c1")
            .with_district("福田区")
            .with_capacity(3)
            .build(),
    ]));
    let shipment_repo = Arc::new(MockShipmentRepository::with_shipments(vec![
        ShipmentBuilder::new()
            .with_id("s1")
            .with_district("罗湖区")
            .build(),
    ]));
    let (engine, _activity) = build_engine(Arc::clone(&carrier_repo), Arc::clone(&shipment_repo));

    let report = engine.run_once().await.unwrap();
    assert_eq!(report.assigned, 1);

    let shipment = shipment_repo.get_by_id("s1").await.unwrap().unwrap();
    assert_eq!(shipment.assigned_carrier_id.as_deref(), Some("c1"));
}

#[tokio::test]
async fn test_concurrent_triggers_do_not_double_book() {
    let carrier_repo = Arc::new(MockCarrierRepository::with_carriers(vec![
        CarrierBuilder::new()
            .with_id("c1")
            .with_district("南山区")
            .with_capacity(1)
            .build(),
    ]));
    let shipment_repo = Arc::new(MockShipmentRepository::with_shipments(vec![
        ShipmentBuilder::new()
            .with_id("s1")
            .with_district("南山区")
            .build(),
    ]));
    let (engine, _activity) = build_engine(Arc::clone(&carrier_repo), Arc::clone(&shipment_repo));
    let engine = Arc::new(engine);

    // 两次并发触发由引擎内部串行化，总指派数不超过容量
    let first = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move { engine.run_once().await.unwrap() })
    };
    let second = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move { engine.run_once().await.unwrap() })
    };
    let (first, second) = (first.await.unwrap(), second.await.unwrap());

    assert_eq!(first.assigned + second.assigned, 1);
    let carrier = carrier_repo.get_by_id("c1").await.unwrap().unwrap();
    assert_eq!(carrier.current_load, 1);
}
