// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the bridge
//!
//! Delivery failures are terminal at the worker boundary: they are
//! logged and counted, never returned to the interception hook. The
//! variants here exist for construction-time failures and for the
//! worker's internal bookkeeping.

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the bridge
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP delivery failed (connect, DNS, timeout, non-2xx)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker pool error
    #[error("Worker error: {0}")]
    Worker(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a worker error
    pub fn worker<S: Into<String>>(msg: S) -> Self {
        Error::Worker(msg.into())
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }

    /// Check if this is a rejected (non-2xx) response
    pub fn is_rejected_status(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_status())
    }
}
