use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use courier_core::CourierError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("业务错误: {0}")]
    Courier(#[from] CourierError),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("请求参数错误: {0}")]
    BadRequest(String),

    #[error("请求冲突: {0}")]
    Conflict(String),

    #[error("未找到资源")]
    NotFound,

    #[error("内部服务器错误: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_type, suggestions) = match &self {
            ApiError::Courier(CourierError::CarrierNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("司机 {} 不存在", id),
                "CARRIER_NOT_FOUND".to_string(),
                vec![
                    "请检查司机ID是否正确".to_string(),
                    "使用 GET /api/carriers 查看所有司机".to_string(),
                ],
            ),
            ApiError::Courier(CourierError::ShipmentNotFound { id }) => (
                StatusCode::NOT_FOUND,
                format!("运单 {} 不存在", id),
                "SHIPMENT_NOT_FOUND".to_string(),
                vec![
                    "请检查运单ID是否正确".to_string(),
                    "使用 GET /api/shipments 查看所有运单".to_string(),
                ],
            ),
            ApiError::Courier(CourierError::DistrictNotFound { name }) => (
                StatusCode::NOT_FOUND,
                format!("片区 {} 不存在", name),
                "DISTRICT_NOT_FOUND".to_string(),
                vec!["使用 GET /api/districts 查看覆盖片区".to_string()],
            ),
            ApiError::Courier(CourierError::DistrictAlreadyExists { name }) => (
                StatusCode::CONFLICT,
                format!("片区 {} 已在覆盖范围内", name),
                "DISTRICT_ALREADY_EXISTS".to_string(),
                vec!["无需重复添加".to_string()],
            ),
            ApiError::Courier(CourierError::InvalidStatusTransition { from, to }) => (
                StatusCode::CONFLICT,
                format!("不允许的状态流转: {} -> {}", from, to),
                "INVALID_STATUS_TRANSITION".to_string(),
                vec![
                    "请刷新资源状态后重试".to_string(),
                    "终态运单不可再流转".to_string(),
                ],
            ),
            ApiError::Courier(CourierError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                format!("数据验证失败: {}", msg),
                "VALIDATION_ERROR".to_string(),
                vec!["请检查请求字段是否完整、取值是否合法".to_string()],
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("请求参数错误: {}", msg),
                "BAD_REQUEST".to_string(),
                vec!["请检查请求参数格式".to_string()],
            ),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                format!("资源冲突: {}", msg),
                "CONFLICT".to_string(),
                vec!["请求的操作与当前资源状态冲突".to_string()],
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "请求的资源不存在".to_string(),
                "NOT_FOUND".to_string(),
                vec!["请检查请求URL是否正确".to_string()],
            ),
            ApiError::Serialization(err) => (
                StatusCode::BAD_REQUEST,
                "请求数据格式错误".to_string(),
                "SERIALIZATION_ERROR".to_string(),
                vec![
                    "请检查JSON格式是否正确".to_string(),
                    format!("详细错误: {}", err),
                ],
            ),
            ApiError::Courier(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "系统内部错误".to_string(),
                "INTERNAL_ERROR".to_string(),
                vec![
                    "系统遇到内部错误，请稍后重试".to_string(),
                    "查看 GET /health 检查系统状态".to_string(),
                ],
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "系统内部错误".to_string(),
                "INTERNAL_ERROR".to_string(),
                vec![format!("错误详情: {}", msg)],
            ),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
                "code": status.as_u16(),
                "suggestions": suggestions,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err = ApiError::Courier(CourierError::carrier_not_found("c1"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_mapping() {
        let err = ApiError::Courier(CourierError::InvalidStatusTransition {
            from: "已签收".to_string(),
            to: "待分配".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_mapping() {
        let err = ApiError::Courier(CourierError::validation_error("容量必须为正数"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
