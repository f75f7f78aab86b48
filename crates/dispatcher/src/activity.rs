use std::collections::VecDeque;

use tokio::sync::RwLock;

use courier_core::models::ActivityEntry;

/// 调度活动日志
///
/// 操作员可见的有界日志，最新条目在前，超出容量时丢弃最旧条目。
#[derive(Debug)]
pub struct ActivityLog {
    entries: RwLock<VecDeque<ActivityEntry>>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// 记录一条活动，最新条目排在最前
    pub async fn record(&self, message: impl Into<String>) {
        let mut entries = self.entries.write().await;
        entries.push_front(ActivityEntry::new(message));
        entries.truncate(self.capacity);
    }

    /// 按最新在前的顺序返回当前全部条目
    pub async fn entries(&self) -> Vec<ActivityEntry> {
        self.entries.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_keeps_most_recent_first() {
        let log = ActivityLog::new(5);
        log.record("第一条").await;
        log.record("第二条").await;

        let entries = log.entries().await;
        assert_eq!(entries[0].message, "第二条");
        assert_eq!(entries[1].message, "第一条");
    }

    #[tokio::test]
    async fn test_capacity_is_enforced() {
        let log = ActivityLog::new(3);
        for i in 0..10 {
            log.record(format!("消息-{i}")).await;
        }

        let entries = log.entries().await;
        assert_eq!(entries.len(), 3);
        // 只保留最新的3条
        assert_eq!(entries[0].message, "消息-9");
        assert_eq!(entries[2].message, "消息-7");
    }

    #[tokio::test]
    async fn test_empty_log() {
        let log = ActivityLog::new(5);
        assert!(log.is_empty().await);
        assert_eq!(log.len().await, 0);
        assert!(log.entries().await.is_empty());
    }
}
