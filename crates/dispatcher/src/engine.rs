use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use courier_core::{
    models::{AssignmentDecision, Carrier, DispatchReport, Shipment},
    traits::{CarrierRepository, ShipmentRepository},
    CourierResult,
};

use crate::activity::ActivityLog;
use crate::matcher::DispatchMatcher;

/// 自动调度引擎
///
/// 围绕匹配器完成一轮调度的完整流程：取待分配运单与司机快照、同步执行
/// 整批匹配、将成功决策逐条落库（运单标记已指派、司机载荷加一）、记录
/// 操作员可见的活动日志。
///
/// `run_once` 内部持锁串行执行，并发触发不会对同一批运力重复占用；
/// 落库失败的运单保持待分配，下一轮重试即可，匹配本身是确定性的。
pub struct DispatchEngine {
    carrier_repo: Arc<dyn CarrierRepository>,
    shipment_repo: Arc<dyn ShipmentRepository>,
    activity: Arc<ActivityLog>,
    matcher: DispatchMatcher,
    run_lock: Mutex<()>,
}

impl DispatchEngine {
    pub fn new(
        carrier_repo: Arc<dyn CarrierRepository>,
        shipment_repo: Arc<dyn ShipmentRepository>,
        activity: Arc<ActivityLog>,
    ) -> Self {
        Self {
            carrier_repo,
            shipment_repo,
            activity,
            matcher: DispatchMatcher::new(),
            run_lock: Mutex::new(()),
        }
    }

    /// 执行一轮自动调度
    pub async fn run_once(&self) -> CourierResult<DispatchReport> {
        let _guard = self.run_lock.lock().await;

        let pending = self.shipment_repo.get_pending_shipments().await?;
        let carriers = self.carrier_repo.list().await?;

        if pending.is_empty() {
            self.activity.record("没有待分配的运单。").await;
            return Ok(DispatchReport::empty());
        }

        let active_count = carriers.iter().filter(|c| c.is_active()).count();
        if active_count == 0 {
            warn!("调度中止: 没有在岗司机");
            self.activity
                .record("错误：系统中当前没有在岗司机，请先添加或启用至少一名司机。")
                .await;
            return Ok(DispatchReport {
                examined: pending.len(),
                assigned: 0,
                unassigned: pending.len(),
                decisions: vec![],
                finished_at: Utc::now(),
            });
        }

        self.activity
            .record(format!(
                "正在分析 {} 个运单与 {} 名在岗司机...",
                pending.len(),
                active_count
            ))
            .await;

        let decisions = self.matcher.match_batch(&pending, &carriers);

        let mut assigned = 0;
        let mut unassigned = 0;
        for decision in &decisions {
            match decision {
                AssignmentDecision::Assigned {
                    shipment_id,
                    carrier_id,
                } => {
                    if let Err(e) = self.apply_assignment(shipment_id, carrier_id).await {
                        // 未落库的运单保持待分配，下一轮重试
                        error!("应用分配决策失败: 运单 {shipment_id} -> 司机 {carrier_id}: {e}");
                        unassigned += 1;
                        continue;
                    }
                    assigned += 1;
                    self.activity
                        .record(format!(
                            "已将运单 {} 指派给司机 {}",
                            order_number_of(&pending, shipment_id),
                            driver_name_of(&carriers, carrier_id)
                        ))
                        .await;
                }
                AssignmentDecision::NoEligibleCarrier { shipment_id } => {
                    unassigned += 1;
                    self.activity
                        .record(format!(
                            "提醒：司机运力不足，运单 {} 暂无法指派",
                            order_number_of(&pending, shipment_id)
                        ))
                        .await;
                }
            }
        }

        self.activity.record("本轮自动调度已完成。").await;
        info!(
            "调度完成: 检视 {} 单, 指派 {} 单, 未指派 {} 单",
            pending.len(),
            assigned,
            unassigned
        );

        Ok(DispatchReport {
            examined: pending.len(),
            assigned,
            unassigned,
            decisions,
            finished_at: Utc::now(),
        })
    }

    /// 落库一条成功决策：运单标记已指派，司机载荷加一
    async fn apply_assignment(&self, shipment_id: &str, carrier_id: &str) -> CourierResult<()> {
        self.shipment_repo
            .mark_assigned(shipment_id, carrier_id)
            .await?;
        self.carrier_repo.increment_load(carrier_id).await?;
        Ok(())
    }
}

fn order_number_of(shipments: &[Shipment], id: &str) -> String {
    shipments
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.order_number.clone())
        .unwrap_or_else(|| id.to_string())
}

fn driver_name_of(carriers: &[Carrier], id: &str) -> String {
    carriers
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.driver_name.clone())
        .unwrap_or_else(|| id.to_string())
}
