use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use courier_core::models::{Carrier, CarrierStatus};
use courier_core::CourierError;

use crate::{
    error::{ApiError, ApiResult},
    response::{created, no_content, success},
    routes::AppState,
};

/// 司机登记请求
#[derive(Debug, Deserialize)]
pub struct CreateCarrierRequest {
    pub plate_number: String,
    pub driver_name: String,
    pub driver_phone: String,
    pub assigned_district: String,
    pub capacity: i32,
}

/// 司机更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateCarrierRequest {
    pub plate_number: Option<String>,
    pub driver_name: Option<String>,
    pub driver_phone: Option<String>,
    pub assigned_district: Option<String>,
    pub capacity: Option<i32>,
}

/// 司机状态更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateCarrierStatusRequest {
    pub status: CarrierStatus,
}

/// 司机查询参数
#[derive(Debug, Deserialize)]
pub struct CarrierQueryParams {
    pub district: Option<String>,
    pub active_only: Option<bool>,
}

fn validate_create(request: &CreateCarrierRequest) -> Result<(), ApiError> {
    if request.driver_name.trim().is_empty() {
        return Err(ApiError::BadRequest("司机姓名不能为空".to_string()));
    }
    if request.assigned_district.trim().is_empty() {
        return Err(ApiError::BadRequest("负责片区不能为空".to_string()));
    }
    if request.capacity <= 0 {
        return Err(ApiError::BadRequest("容量必须为正数".to_string()));
    }
    Ok(())
}

/// 登记新司机
pub async fn create_carrier(
    State(state): State<AppState>,
    Json(request): Json<CreateCarrierRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    validate_create(&request)?;

    let carrier = Carrier::new(
        request.plate_number,
        request.driver_name,
        request.driver_phone,
        request.assigned_district,
        request.capacity,
    );
    let carrier = state.carrier_repo.create(&carrier).await?;
    Ok(created(carrier))
}

/// 获取司机列表
pub async fn list_carriers(
    State(state): State<AppState>,
    Query(params): Query<CarrierQueryParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let carriers = if params.active_only.unwrap_or(false) {
        state.carrier_repo.get_active_carriers().await?
    } else {
        state.carrier_repo.list().await?
    };

    let carriers: Vec<Carrier> = match &params.district {
        Some(district) => carriers
            .into_iter()
            .filter(|c| &c.assigned_district == district)
            .collect(),
        None => carriers,
    };

    Ok(success(carriers))
}

/// 获取单个司机信息
pub async fn get_carrier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let carrier = state
        .carrier_repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CourierError::carrier_not_found(&id))?;
    Ok(success(carrier))
}

/// 更新司机信息
pub async fn update_carrier(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCarrierRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let mut carrier = state
        .carrier_repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CourierError::carrier_not_found(&id))?;

    if let Some(plate_number) = request.plate_number {
        carrier.plate_number = plate_number;
    }
    if let Some(driver_name) = request.driver_name {
        carrier.driver_name = driver_name;
    }
    if let Some(driver_phone) = request.driver_phone {
        carrier.driver_phone = driver_phone;
    }
    if let Some(assigned_district) = request.assigned_district {
        carrier.assigned_district = assigned_district;
    }
    if let Some(capacity) = request.capacity {
        if capacity <= 0 {
            return Err(ApiError::BadRequest("容量必须为正数".to_string()));
        }
        carrier.capacity = capacity;
    }
    carrier.updated_at = chrono::Utc::now();

    state.carrier_repo.update(&carrier).await?;
    Ok(success(carrier))
}

/// 更新司机状态
pub async fn update_carrier_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCarrierStatusRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    state.carrier_repo.update_status(&id, request.status).await?;
    let carrier = state
        .carrier_repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CourierError::carrier_not_found(&id))?;
    Ok(success(carrier))
}

/// 删除司机
pub async fn delete_carrier(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    state.carrier_repo.delete(&id).await?;
    Ok(no_content())
}
