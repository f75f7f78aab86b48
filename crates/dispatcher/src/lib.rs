//! 自动调度
//!
//! `matcher` 是核心匹配算法：纯同步函数，片区优先、容量兜底、严格按序决胜。
//! `engine` 负责围绕匹配器的快照、落库与活动记录；`activity` 是操作员可见的
//! 有界日志。

pub mod activity;
pub mod engine;
pub mod matcher;


pub use activity::ActivityLog;
pub use engine::DispatchEngine;
pub use matcher::DispatchMatcher;
