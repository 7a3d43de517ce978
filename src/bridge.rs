// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response hook wiring
//!
//! The interception engine invokes the hook once per completed exchange,
//! on its own scheduling loop. Everything on that path is synchronous and
//! allocation-bounded: evaluate the filter, snapshot the payload, enqueue.
//! The network I/O happens elsewhere, on the forwarder's runtime.

use std::sync::Arc;

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::exchange::Exchange;
use crate::filter;
use crate::forward::{ForwardRequest, ForwardStats, Forwarder};

/// Observer seam the interception engine loads the bridge through.
///
/// Implementations must not block: the hook runs on the engine's single
/// cooperative loop, and any wait here stalls every live connection.
/// Registration with a concrete engine is host-specific; engines that
/// take a callback can wrap a shared implementor in a closure.
///
/// # Example
///
/// ```rust,no_run
/// use std::collections::HashMap;
///
/// use pagebridge::{Bridge, Exchange, ResponseObserver};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let bridge = Bridge::new()?;
///
///     // Invoked by the engine once per completed exchange.
///     let headers = HashMap::from([
///         ("Content-Type".to_string(), "text/html".to_string()),
///     ]);
///     bridge.on_response(&Exchange {
///         method: "GET",
///         status_code: 200,
///         response_headers: &headers,
///         response_body: "<html>hi</html>",
///         url: "http://example.com/",
///     });
///     Ok(())
/// }
/// ```
pub trait ResponseObserver: Send + Sync {
    /// Called once per completed HTTP exchange.
    ///
    /// The exchange is only valid for the duration of the call.
    fn on_response(&self, exchange: &Exchange<'_>);
}

/// The interception-to-ingestion bridge
pub struct Bridge {
    forwarder: Forwarder,
}

impl Bridge {
    /// Create a bridge with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(BridgeConfig::default())
    }

    /// Create a bridge with the given configuration
    pub fn with_config(config: BridgeConfig) -> Result<Self> {
        Ok(Self {
            forwarder: Forwarder::new(config)?,
        })
    }

    /// Create a bridge configured from `PAGEBRIDGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(BridgeConfig::from_env())
    }

    /// Shared handle to the delivery statistics
    pub fn stats(&self) -> Arc<ForwardStats> {
        self.forwarder.stats()
    }
}

impl ResponseObserver for Bridge {
    fn on_response(&self, exchange: &Exchange<'_>) {
        if !filter::is_eligible(exchange) {
            tracing::trace!(
                method = exchange.method,
                status = %exchange.status_code,
                url = exchange.url,
                "exchange skipped"
            );
            return;
        }

        // Deep copy before the hook returns; the engine may reuse the
        // exchange's buffers immediately afterwards.
        self.forwarder.dispatch(ForwardRequest::from_exchange(exchange));
    }
}
