use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use courier_core::traits::{CarrierRepository, DistrictRepository, ShipmentRepository};
use courier_dispatcher::{ActivityLog, DispatchEngine};

use crate::handlers::{
    carriers::{
        create_carrier, delete_carrier, get_carrier, list_carriers, update_carrier,
        update_carrier_status,
    },
    dispatch::{get_dispatch_activity, run_dispatch},
    districts::{create_district, delete_district, list_districts},
    health::health_check,
    shipments::{
        create_shipment, delete_shipment, get_shipment, list_shipments, update_shipment,
        update_shipment_status,
    },
    system::{get_system_performance, get_system_stats},
};

/// API应用状态
#[derive(Clone)]
pub struct AppState {
    pub carrier_repo: Arc<dyn CarrierRepository>,
    pub shipment_repo: Arc<dyn ShipmentRepository>,
    pub district_repo: Arc<dyn DistrictRepository>,
    pub engine: Arc<DispatchEngine>,
    pub activity: Arc<ActivityLog>,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 司机管理API
        .route("/api/carriers", get(list_carriers).post(create_carrier))
        .route("/api/carriers/{id}", get(get_carrier))
        .route("/api/carriers/{id}/update", post(update_carrier))
        .route("/api/carriers/{id}/delete", post(delete_carrier))
        .route("/api/carriers/{id}/status", post(update_carrier_status))
        // 运单管理API
        .route("/api/shipments", get(list_shipments).post(create_shipment))
        .route("/api/shipments/{id}", get(get_shipment))
        .route("/api/shipments/{id}/update", post(update_shipment))
        .route("/api/shipments/{id}/delete", post(delete_shipment))
        .route("/api/shipments/{id}/status", post(update_shipment_status))
        // 片区管理API
        .route("/api/districts", get(list_districts).post(create_district))
        .route("/api/districts/{name}/delete", post(delete_district))
        // 调度API
        .route("/api/dispatch/run", post(run_dispatch))
        .route("/api/dispatch/activity", get(get_dispatch_activity))
        // 系统统计API
        .route("/api/system/stats", get(get_system_stats))
        .route("/api/system/performance", get(get_system_performance))
        .with_state(state)
}

/// 创建带中间件的完整应用
pub fn create_app(state: AppState, cors_enabled: bool) -> Router {
    let mut app = create_routes(state)
        .layer(axum::middleware::from_fn(crate::middleware::request_logging))
        .layer(crate::middleware::trace_layer());

    if cors_enabled {
        app = app.layer(crate::middleware::cors_layer());
    }

    app
}
