// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fire-and-forget delivery to the ingestion service
//!
//! The interception engine drives every live connection from a single
//! cooperative loop; a hook that waits on the ingestion service stalls all
//! of them until the call completes. Delivery therefore runs on a tokio
//! runtime owned by a dedicated background thread: [`Forwarder::dispatch`]
//! only moves the snapshot onto a queue and returns.
//!
//! Every delivery ends in one of two terminal states, acknowledged or
//! lost, and neither is reported to the caller. The log and
//! [`ForwardStats`] are the only places they differ.

use std::sync::Arc;
use std::thread;

use reqwest::Client;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use url::Url;

use super::request::ForwardRequest;
use super::stats::ForwardStats;
use crate::config::BridgeConfig;
use crate::error::{Error, Result};

/// Fire-and-forget forwarder to the ingestion endpoint
pub struct Forwarder {
    queue: mpsc::UnboundedSender<ForwardRequest>,
    stats: Arc<ForwardStats>,
}

impl Forwarder {
    /// Spawn the delivery runtime and return a handle to it.
    ///
    /// The ingest URL is validated here, before any traffic arrives; the
    /// worker has no channel to report a permanently broken endpoint
    /// later.
    pub fn new(config: BridgeConfig) -> Result<Self> {
        let endpoint: Url = config.ingest_url.parse()?;
        let stats = Arc::new(ForwardStats::new());
        let (queue, receiver) = mpsc::unbounded_channel();

        let worker_stats = stats.clone();
        thread::Builder::new()
            .name("pagebridge-forwarder".to_string())
            .spawn(move || run_worker(endpoint, config, receiver, worker_stats))
            .map_err(|e| Error::worker(format!("failed to spawn forwarder thread: {}", e)))?;

        Ok(Self { queue, stats })
    }

    /// Hand one snapshot to the delivery runtime.
    ///
    /// Returns as soon as the snapshot is queued, long before any network
    /// I/O happens. The caller never learns the delivery outcome.
    pub fn dispatch(&self, request: ForwardRequest) {
        self.stats.record_dispatched();
        if self.queue.send(request).is_err() {
            // Worker thread is gone; nothing left to do but count the loss.
            self.stats.record_failed();
            tracing::warn!("forwarder worker unavailable, dropping payload");
        }
    }

    /// Shared handle to the delivery statistics
    pub fn stats(&self) -> Arc<ForwardStats> {
        self.stats.clone()
    }
}

/// Body of the background delivery thread.
///
/// Owns the runtime and the HTTP client. Drains the queue until every
/// sender is dropped, spawning one task per snapshot so a slow endpoint
/// never serializes deliveries behind it.
fn run_worker(
    endpoint: Url,
    config: BridgeConfig,
    mut receiver: UnboundedReceiver<ForwardRequest>,
    stats: Arc<ForwardStats>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .thread_name("pagebridge-delivery")
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "failed to start delivery runtime");
            return;
        }
    };

    runtime.block_on(async move {
        let client = match Client::builder().timeout(config.timeout).build() {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = %e, "failed to build ingestion HTTP client");
                return;
            }
        };

        while let Some(request) = receiver.recv().await {
            let client = client.clone();
            let endpoint = endpoint.clone();
            let stats = stats.clone();

            tokio::spawn(async move {
                match deliver(&client, endpoint, &request).await {
                    Ok(()) => {
                        stats.record_delivered();
                        tracing::debug!(url = %request.url, "payload delivered");
                    }
                    Err(e) => {
                        stats.record_failed();
                        tracing::warn!(url = %request.url, error = %e, "delivery failed");
                    }
                }
            });
        }
    });
}

/// POST one snapshot to the ingestion endpoint.
///
/// Any 2xx counts as delivered; the response body is ignored.
async fn deliver(client: &Client, endpoint: Url, request: &ForwardRequest) -> Result<()> {
    client
        .post(endpoint)
        .json(request)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
