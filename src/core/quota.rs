//! 每日配额跟踪器
//! 以 (chat_id, 日期) 为键的进程内计数，进程重启即清零

use chrono::Utc;
use dashmap::DashMap;

pub type ChatId = i64;

/// 每用户每日用量跟踪器
///
/// 存储是易失的：生命周期与进程一致，多实例部署互不共享。
pub struct QuotaTracker {
    counts: DashMap<(ChatId, String), u32>,
}

impl QuotaTracker {
    pub fn new() -> Self {
        Self {
            counts: DashMap::new(),
        }
    }

    /// 当前 UTC 日期，格式 YYYY-MM-DD
    pub fn today() -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }

    /// 查询 (user, date) 的当前用量，无记录时为 0。只读，无副作用。
    pub fn get_usage(&self, user: ChatId, date: &str) -> u32 {
        self.counts
            .get(&(user, date.to_string()))
            .map(|c| *c)
            .unwrap_or(0)
    }

    /// check-then-increment 作为单个原子操作。
    ///
    /// entry guard 持有分片写锁，同一 key 的并发调用在此串行化，
    /// 因此计数不会超过 limit。被拒绝的调用不改变计数。
    pub fn try_consume(&self, user: ChatId, date: &str, limit: u32) -> bool {
        let mut count = self.counts.entry((user, date.to_string())).or_insert(0);
        if *count >= limit {
            false
        } else {
            *count += 1;
            true
        }
    }

    /// 退还一次用量，仅在启用 refund_on_failure 策略时由路由调用
    pub fn refund(&self, user: ChatId, date: &str) {
        if let Some(mut count) = self.counts.get_mut(&(user, date.to_string())) {
            *count = count.saturating_sub(1);
        }
    }

    /// 丢弃非当日的过期记录，返回清理数量。
    /// 除 "今天" 之外的记录不会被任何路径读取，这里只是控制内存。
    pub fn prune_stale(&self, today: &str) -> usize {
        let before = self.counts.len();
        self.counts.retain(|(_, date), _| date == today);
        before - self.counts.len()
    }
}

impl Default for QuotaTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};

    #[test]
    fn usage_starts_at_zero_and_counts_up() {
        let tracker = QuotaTracker::new();
        assert_eq!(tracker.get_usage(1, "2025-06-01"), 0);

        for k in 1..=5 {
            assert!(tracker.try_consume(1, "2025-06-01", 15));
            assert_eq!(tracker.get_usage(1, "2025-06-01"), k);
        }
    }

    #[test]
    fn denied_once_limit_reached_and_count_unchanged() {
        let tracker = QuotaTracker::new();
        for _ in 0..3 {
            assert!(tracker.try_consume(7, "2025-06-01", 3));
        }
        for _ in 0..10 {
            assert!(!tracker.try_consume(7, "2025-06-01", 3));
        }
        assert_eq!(tracker.get_usage(7, "2025-06-01"), 3);
    }

    #[test]
    fn users_and_dates_are_independent() {
        let tracker = QuotaTracker::new();
        assert!(tracker.try_consume(1, "2025-06-01", 1));
        assert!(!tracker.try_consume(1, "2025-06-01", 1));
        // 另一个用户、另一天都不受影响
        assert!(tracker.try_consume(2, "2025-06-01", 1));
        assert!(tracker.try_consume(1, "2025-06-02", 1));
    }

    #[test]
    fn concurrent_consume_grants_exactly_one_at_last_slot() {
        let tracker = Arc::new(QuotaTracker::new());
        // 预热到 limit - 1
        for _ in 0..14 {
            assert!(tracker.try_consume(42, "2025-06-01", 15));
        }

        let threads = 8;
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let tracker = tracker.clone();
                let barrier = barrier.clone();
                std::thread::spawn(move || {
                    barrier.wait();
                    tracker.try_consume(42, "2025-06-01", 15)
                })
            })
            .collect();

        let granted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|granted| *granted)
            .count();

        assert_eq!(granted, 1);
        assert_eq!(tracker.get_usage(42, "2025-06-01"), 15);
    }

    #[test]
    fn refund_decrements_and_saturates() {
        let tracker = QuotaTracker::new();
        assert!(tracker.try_consume(1, "2025-06-01", 15));
        tracker.refund(1, "2025-06-01");
        assert_eq!(tracker.get_usage(1, "2025-06-01"), 0);
        // 0 时再退还不会下溢
        tracker.refund(1, "2025-06-01");
        assert_eq!(tracker.get_usage(1, "2025-06-01"), 0);
        // 没有记录的用户退还是 no-op
        tracker.refund(99, "2025-06-01");
    }

    #[test]
    fn prune_keeps_only_today() {
        let tracker = QuotaTracker::new();
        tracker.try_consume(1, "2025-06-01", 15);
        tracker.try_consume(1, "2025-06-02", 15);
        tracker.try_consume(2, "2025-06-02", 15);

        let removed = tracker.prune_stale("2025-06-02");
        assert_eq!(removed, 1);
        assert_eq!(tracker.get_usage(1, "2025-06-01"), 0);
        assert_eq!(tracker.get_usage(1, "2025-06-02"), 1);
        assert_eq!(tracker.get_usage(2, "2025-06-02"), 1);
    }
}
