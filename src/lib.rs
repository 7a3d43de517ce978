// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Pagebridge - Non-Blocking Interception Bridge
//!
//! Relays HTML pages observed by a MITM traffic-inspection engine to a
//! local ingestion service, without ever stalling the engine's single
//! cooperative scheduling loop.
//!
//! The host engine invokes the response hook once per completed exchange.
//! The hook filters for successful GET responses carrying HTML, snapshots
//! `{url, html}`, and hands the snapshot to a delivery runtime that lives
//! on its own thread. Delivery is best-effort and fire-and-forget: a slow
//! or dead ingestion service costs the traffic path nothing.
//!
//! ## Features
//!
//! - Hook path is enqueue-only: no I/O, no locks, constant-time return
//! - Pure O(1) eligibility filter: GET + 200 + `text/html` Content-Type
//! - Dedicated tokio runtime for deliveries, sized via configuration
//! - Hard per-delivery timeout (default 2s), single attempt, no retries
//! - All delivery failures contained at the worker boundary and logged
//! - Atomic delivery counters as the only observable outcome channel
//! - Configuration via builder or `PAGEBRIDGE_*` environment variables
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//!
//! use pagebridge::{Bridge, BridgeConfig, Exchange, ResponseObserver};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bridge = Bridge::with_config(
//!         BridgeConfig::new().ingest_url("http://localhost:3000/ingest"),
//!     )?;
//!
//!     // The interception engine calls this once per completed exchange.
//!     let headers = HashMap::from([
//!         ("Content-Type".to_string(), "text/html; charset=utf-8".to_string()),
//!     ]);
//!     bridge.on_response(&Exchange {
//!         method: "GET",
//!         status_code: 200,
//!         response_headers: &headers,
//!         response_body: "<html>hi</html>",
//!         url: "http://example.com/",
//!     });
//!
//!     // Returns immediately; delivery happens off the hook path.
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod exchange;
pub mod filter;
pub mod forward;

// Re-exports for convenience

// Bridge and hook seam
pub use bridge::{Bridge, ResponseObserver};

// Configuration
pub use config::{BridgeConfig, DEFAULT_INGEST_URL, DEFAULT_TIMEOUT, DEFAULT_WORKERS};

// Errors
pub use error::{Error, Result};

// Exchange view and filter
pub use exchange::Exchange;
pub use filter::is_eligible;

// Forwarding
pub use forward::{ForwardRequest, ForwardStats, Forwarder, StatsReport};

/// Pagebridge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
