use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use courier_core::models::{District, DistrictStats, ShipmentFilter};

use crate::{
    error::{ApiError, ApiResult},
    response::{created, no_content, success},
    routes::AppState,
};

/// 片区新增请求
#[derive(Debug, Deserialize)]
pub struct CreateDistrictRequest {
    pub name: String,
}

/// 新增覆盖片区
pub async fn create_district(
    State(state): State<AppState>,
    Json(request): Json<CreateDistrictRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("片区名称不能为空".to_string()));
    }

    let district = District::new(request.name.trim());
    let district = state.district_repo.add(&district).await?;
    Ok(created(district))
}

/// 获取覆盖片区列表（含片区维度统计）
pub async fn list_districts(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let districts = state.district_repo.list().await?;
    let carriers = state.carrier_repo.list().await?;
    let shipments = state.shipment_repo.list(&ShipmentFilter::default()).await?;

    let stats: Vec<DistrictStats> = districts
        .iter()
        .map(|district| DistrictStats {
            name: district.name.clone(),
            carrier_count: carriers
                .iter()
                .filter(|c| c.assigned_district == district.name)
                .count(),
            shipment_count: shipments
                .iter()
                .filter(|s| s.district == district.name)
                .count(),
            pending_count: shipments
                .iter()
                .filter(|s| s.district == district.name && s.is_pending())
                .count(),
        })
        .collect();

    Ok(success(stats))
}

/// 移除覆盖片区
pub async fn delete_district(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    state.district_repo.remove(&name).await?;
    Ok(no_content())
}
