use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单个运单的分配决策
///
/// 匹配器对每个运单恰好产出一个决策；"无可用司机"是正常业务结果而非错误。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum AssignmentDecision {
    /// 运单指派给指定司机
    #[serde(rename = "ASSIGNED")]
    Assigned {
        shipment_id: String,
        carrier_id: String,
    },
    /// 没有符合条件的司机，运单保持待分配
    #[serde(rename = "NO_ELIGIBLE_CARRIER")]
    NoEligibleCarrier { shipment_id: String },
}

impl AssignmentDecision {
    pub fn shipment_id(&self) -> &str {
        match self {
            AssignmentDecision::Assigned { shipment_id, .. } => shipment_id,
            AssignmentDecision::NoEligibleCarrier { shipment_id } => shipment_id,
        }
    }

    pub fn assigned_carrier(&self) -> Option<&str> {
        match self {
            AssignmentDecision::Assigned { carrier_id, .. } => Some(carrier_id),
            AssignmentDecision::NoEligibleCarrier { .. } => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, AssignmentDecision::Assigned { .. })
    }
}

/// 一轮调度的执行报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReport {
    /// 本轮检视的待分配运单数
    pub examined: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub decisions: Vec<AssignmentDecision>,
    pub finished_at: DateTime<Utc>,
}

impl DispatchReport {
    pub fn empty() -> Self {
        Self {
            examined: 0,
            assigned: 0,
            unassigned: 0,
            decisions: vec![],
            finished_at: Utc::now(),
        }
    }
}

/// 活动日志条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_accessors() {
        let assigned = AssignmentDecision::Assigned {
            shipment_id: "s1".to_string(),
            carrier_id: "c1".to_string(),
        };
        assert_eq!(assigned.shipment_id(), "s1");
        assert_eq!(assigned.assigned_carrier(), Some("c1"));
        assert!(assigned.is_assigned());

        let missed = AssignmentDecision::NoEligibleCarrier {
            shipment_id: "s2".to_string(),
        };
        assert_eq!(missed.shipment_id(), "s2");
        assert_eq!(missed.assigned_carrier(), None);
        assert!(!missed.is_assigned());
    }

    #[test]
    fn test_decision_serde_tag() {
        let assigned = AssignmentDecision::Assigned {
            shipment_id: "s1".to_string(),
            carrier_id: "c1".to_string(),
        };
        let json = serde_json::to_string(&assigned).unwrap();
        assert!(json.contains("\"outcome\":\"ASSIGNED\""));

        let missed = AssignmentDecision::NoEligibleCarrier {
            shipment_id: "s2".to_string(),
        };
        let json = serde_json::to_string(&missed).unwrap();
        assert!(json.contains("\"outcome\":\"NO_ELIGIBLE_CARRIER\""));
    }
}
