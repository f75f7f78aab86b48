//! HTTP管理接口
//!
//! 面向调度台的REST接口：司机、运单、片区的增删改查，调度触发与活动
//! 日志，运营统计。路由、响应封装与错误映射按统一约定组织。

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

pub use routes::{create_app, create_routes, AppState};
