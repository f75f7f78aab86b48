use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use courier_core::models::{PaymentMethod, Priority, Shipment, ShipmentFilter, ShipmentStatus};
use courier_core::CourierError;

use crate::{
    error::{ApiError, ApiResult},
    response::{created, no_content, success},
    routes::AppState,
};

/// 运单录入请求
#[derive(Debug, Deserialize)]
pub struct CreateShipmentRequest {
    pub order_number: String,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub district: String,
    pub weight: f64,
    pub cod_amount: Option<f64>,
    pub payment_method: PaymentMethod,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}

/// 运单更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateShipmentRequest {
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}

/// 运单状态更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateShipmentStatusRequest {
    pub status: ShipmentStatus,
}

/// 运单查询参数
#[derive(Debug, Deserialize)]
pub struct ShipmentQueryParams {
    pub status: Option<ShipmentStatus>,
    pub district: Option<String>,
    pub carrier_id: Option<String>,
}

/// 录入新运单
pub async fn create_shipment(
    State(state): State<AppState>,
    Json(request): Json<CreateShipmentRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    if request.order_number.trim().is_empty() {
        return Err(ApiError::BadRequest("订单号不能为空".to_string()));
    }
    if request.district.trim().is_empty() {
        return Err(ApiError::BadRequest("目的片区不能为空".to_string()));
    }
    if request.weight < 0.0 {
        return Err(ApiError::BadRequest("重量不能为负数".to_string()));
    }

    let mut shipment = Shipment::new(
        request.order_number,
        request.customer_name,
        request.phone,
        request.address,
        request.district,
        request.weight,
        request.cod_amount.unwrap_or(0.0),
        request.payment_method,
        request.priority.unwrap_or(Priority::Medium),
    );
    shipment.notes = request.notes;

    let shipment = state.shipment_repo.create(&shipment).await?;
    Ok(created(shipment))
}

/// 获取运单列表
pub async fn list_shipments(
    State(state): State<AppState>,
    Query(params): Query<ShipmentQueryParams>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let filter = ShipmentFilter {
        status: params.status,
        district: params.district,
        assigned_carrier_id: params.carrier_id,
    };
    let shipments = state.shipment_repo.list(&filter).await?;
    Ok(success(shipments))
}

/// 获取单个运单
pub async fn get_shipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let shipment = state
        .shipment_repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CourierError::shipment_not_found(&id))?;
    Ok(success(shipment))
}

/// 更新运单信息
pub async fn update_shipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateShipmentRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let mut shipment = state
        .shipment_repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CourierError::shipment_not_found(&id))?;

    if let Some(customer_name) = request.customer_name {
        shipment.customer_name = customer_name;
    }
    if let Some(phone) = request.phone {
        shipment.phone = phone;
    }
    if let Some(address) = request.address {
        shipment.address = address;
    }
    if let Some(district) = request.district {
        if district.trim().is_empty() {
            return Err(ApiError::BadRequest("目的片区不能为空".to_string()));
        }
        shipment.district = district;
    }
    if let Some(priority) = request.priority {
        shipment.priority = priority;
    }
    if request.notes.is_some() {
        shipment.notes = request.notes;
    }
    shipment.updated_at = chrono::Utc::now();

    state.shipment_repo.update(&shipment).await?;
    Ok(success(shipment))
}

/// 更新运单状态
pub async fn update_shipment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateShipmentStatusRequest>,
) -> ApiResult<impl axum::response::IntoResponse> {
    state
        .shipment_repo
        .update_status(&id, request.status)
        .await?;
    let shipment = state
        .shipment_repo
        .get_by_id(&id)
        .await?
        .ok_or_else(|| CourierError::shipment_not_found(&id))?;
    Ok(success(shipment))
}

/// 删除运单
pub async fn delete_shipment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl axum::response::IntoResponse> {
    state.shipment_repo.delete(&id).await?;
    Ok(no_content())
}
