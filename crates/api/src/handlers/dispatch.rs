use axum::extract::State;

use crate::{error::ApiResult, response::success, routes::AppState};

/// 触发一轮自动调度
pub async fn run_dispatch(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let report = state.engine.run_once().await?;
    Ok(success(report))
}

/// 获取调度活动日志（最新在前）
pub async fn get_dispatch_activity(
    State(state): State<AppState>,
) -> ApiResult<impl axum::response::IntoResponse> {
    let entries = state.activity.entries().await;
    Ok(success(entries))
}
