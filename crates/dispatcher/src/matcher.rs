use tracing::debug;

use courier_core::models::{AssignmentDecision, Carrier, Shipment};

/// 调度匹配器
///
/// 对一批待分配运单做同步匹配：逐单先在片区相同的在岗司机中找第一个有
/// 剩余容量的（片区优先），找不到再退回任意有剩余容量的在岗司机（容量
/// 兜底），两条路径都按司机列表的给定顺序取第一个命中者，不按负载或其它
/// 指标二次排序。
///
/// 匹配过程中自行累计本轮已占用的容量：同一批次内先处理的运单会立即
/// 挤占后续运单可见的剩余容量，外部载荷状态在本轮运行期间不会被重读。
/// 匹配器不产生任何副作用，落库由调用方根据返回的决策序列执行。
pub struct DispatchMatcher;

impl DispatchMatcher {
    pub fn new() -> Self {
        Self
    }

    /// 对整批运单执行匹配，返回与输入同序的决策序列
    ///
    /// 输入顺序即处理顺序。空运单列表返回空决策序列，不视为错误；
    /// 缺少目的片区的运单、容量字段非法的司机按无效记录跳过，不中断整批。
    pub fn match_batch(
        &self,
        shipments: &[Shipment],
        carriers: &[Carrier],
    ) -> Vec<AssignmentDecision> {
        // 本轮的载荷视图，指派成功立即累加
        let mut tracked_loads: Vec<i32> = carriers.iter().map(|c| c.current_load).collect();
        let mut decisions = Vec::with_capacity(shipments.len());

        for shipment in shipments {
            if shipment.district.trim().is_empty() {
                debug!("运单 {} 缺少目的片区，无法参与匹配", shipment.order_number);
                decisions.push(AssignmentDecision::NoEligibleCarrier {
                    shipment_id: shipment.id.clone(),
                });
                continue;
            }

            let selected = self.select_carrier(shipment, carriers, &tracked_loads);

            match selected {
                Some(index) => {
                    let carrier = &carriers[index];
                    tracked_loads[index] += 1;
                    debug!(
                        "运单 {} 匹配到司机 {} (片区: {}, 本轮载荷: {}/{})",
                        shipment.order_number,
                        carrier.driver_name,
                        carrier.assigned_district,
                        tracked_loads[index],
                        carrier.capacity
                    );
                    decisions.push(AssignmentDecision::Assigned {
                        shipment_id: shipment.id.clone(),
                        carrier_id: carrier.id.clone(),
                    });
                }
                None => {
                    debug!("运单 {} 没有可用司机", shipment.order_number);
                    decisions.push(AssignmentDecision::NoEligibleCarrier {
                        shipment_id: shipment.id.clone(),
                    });
                }
            }
        }

        decisions
    }

    /// 为单个运单选择司机，返回司机在输入列表中的下标
    ///
    /// 候选资格对片区匹配与兜底两条路径一致：在岗且本轮载荷未达容量。
    fn select_carrier(
        &self,
        shipment: &Shipment,
        carriers: &[Carrier],
        tracked_loads: &[i32],
    ) -> Option<usize> {
        let eligible = |(index, carrier): &(usize, &Carrier)| {
            carrier.is_active() && carrier.capacity > 0 && tracked_loads[*index] < carrier.capacity
        };

        // 片区优先
        let district_match = carriers
            .iter()
            .enumerate()
            .filter(eligible)
            .find(|(_, c)| c.assigned_district == shipment.district)
            .map(|(index, _)| index);

        // 容量兜底：任意有剩余容量的在岗司机
        district_match.or_else(|| {
            carriers
                .iter()
                .enumerate()
                .find(|entry| eligible(entry))
                .map(|(index, _)| index)
        })
    }
}

impl Default for DispatchMatcher {
    fn default() -> Self {
        Self::new()
    }
}
