// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Bridge configuration

use std::env;
use std::time::Duration;

/// Default ingestion endpoint
pub const DEFAULT_INGEST_URL: &str = "http://localhost:3000/ingest";

/// Default hard timeout on one delivery (connect + read)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default worker pool size for the delivery runtime
pub const DEFAULT_WORKERS: usize = 2;

/// Bridge configuration
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Ingestion endpoint URL
    pub ingest_url: String,
    /// Hard timeout on the whole delivery (connect + read)
    pub timeout: Duration,
    /// Worker threads available to the delivery runtime
    pub workers: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            ingest_url: DEFAULT_INGEST_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl BridgeConfig {
    /// Create a new bridge config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ingestion endpoint URL
    pub fn ingest_url(mut self, url: impl Into<String>) -> Self {
        self.ingest_url = url.into();
        self
    }

    /// Set the delivery timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the worker pool size (minimum 1)
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Load configuration from the environment.
    ///
    /// Recognized variables: `PAGEBRIDGE_INGEST_URL`,
    /// `PAGEBRIDGE_TIMEOUT_MS`, `PAGEBRIDGE_WORKERS`. Unset or
    /// unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("PAGEBRIDGE_INGEST_URL") {
            if !url.is_empty() {
                config.ingest_url = url;
            }
        }

        if let Some(ms) = env::var("PAGEBRIDGE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout = Duration::from_millis(ms);
        }

        if let Some(workers) = env::var("PAGEBRIDGE_WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.workers = workers.max(1);
        }

        config
    }
}
