use axum::extract::State;

use courier_core::models::{
    CarrierPerformance, OperationStats, ShipmentFilter, ShipmentStatus,
};

use crate::{error::ApiResult, response::success, routes::AppState};

/// 获取运营总览统计
pub async fn get_system_stats(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let shipments = state.shipment_repo.list(&ShipmentFilter::default()).await?;
    let carriers = state.carrier_repo.list().await?;

    let today = chrono::Utc::now().date_naive();
    let stats = OperationStats {
        total_shipments: shipments.len(),
        delivered_today: shipments
            .iter()
            .filter(|s| {
                s.status == ShipmentStatus::Delivered && s.updated_at.date_naive() == today
            })
            .count(),
        pending_assignment: shipments.iter().filter(|s| s.is_pending()).count(),
        active_carriers: carriers.iter().filter(|c| c.is_active()).count(),
        total_cod_to_collect: shipments
            .iter()
            .filter(|s| s.is_cod())
            .map(|s| s.cod_amount)
            .sum(),
    };

    Ok(success(stats))
}

/// 获取司机绩效报表
pub async fn get_system_performance(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let shipments = state.shipment_repo.list(&ShipmentFilter::default()).await?;
    let carriers = state.carrier_repo.list().await?;

    let performance: Vec<CarrierPerformance> = carriers
        .iter()
        .map(|carrier| {
            let carrier_shipments: Vec<_> = shipments
                .iter()
                .filter(|s| s.assigned_carrier_id.as_deref() == Some(carrier.id.as_str()))
                .collect();
            let delivered = carrier_shipments
                .iter()
                .filter(|s| s.status == ShipmentStatus::Delivered)
                .count();
            let total = carrier_shipments.len();
            let success_rate = if total > 0 {
                (delivered as f64 / total as f64) * 100.0
            } else {
                0.0
            };

            CarrierPerformance {
                carrier_id: carrier.id.clone(),
                driver_name: carrier.driver_name.clone(),
                assigned_district: carrier.assigned_district.clone(),
                total_shipments: total,
                delivered,
                success_rate,
                cod_collected: carrier.total_cod_collected,
            }
        })
        .collect();

    Ok(success(performance))
}
