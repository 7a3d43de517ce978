// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Delivery statistics
//!
//! The interception hook never learns whether a forward was delivered;
//! DELIVERED and FAILED diverge only here and in the log.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Delivery statistics collector
#[derive(Debug, Default)]
pub struct ForwardStats {
    /// Snapshots handed to the delivery queue
    dispatched: AtomicU64,
    /// Deliveries acknowledged with a 2xx
    delivered: AtomicU64,
    /// Deliveries lost to timeout, connect failure or non-2xx
    failed: AtomicU64,
}

/// Point-in-time statistics report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Total snapshots dispatched
    pub dispatched: u64,
    /// Total deliveries acknowledged
    pub delivered: u64,
    /// Total deliveries lost
    pub failed: u64,
    /// Dispatches not yet in a terminal state
    pub in_flight: u64,
}

impl ForwardStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot handed to the queue
    pub fn record_dispatched(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a delivery acknowledged with a 2xx
    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lost delivery
    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Total snapshots dispatched
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    /// Total deliveries acknowledged
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Total deliveries lost
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Build a point-in-time report
    pub fn report(&self) -> StatsReport {
        let dispatched = self.dispatched();
        let delivered = self.delivered();
        let failed = self.failed();

        StatsReport {
            dispatched,
            delivered,
            failed,
            in_flight: dispatched.saturating_sub(delivered + failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = ForwardStats::new();
        stats.record_dispatched();
        stats.record_dispatched();
        stats.record_delivered();
        stats.record_failed();

        assert_eq!(stats.dispatched(), 2);
        assert_eq!(stats.delivered(), 1);
        assert_eq!(stats.failed(), 1);
    }

    #[test]
    fn test_report_in_flight() {
        let stats = ForwardStats::new();
        for _ in 0..5 {
            stats.record_dispatched();
        }
        stats.record_delivered();
        stats.record_failed();

        let report = stats.report();
        assert_eq!(report.dispatched, 5);
        assert_eq!(report.in_flight, 3);
    }
}
