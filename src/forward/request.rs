// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Forward payload snapshot

use serde::Serialize;

use crate::exchange::Exchange;

/// Immutable snapshot of an eligible exchange, taken at filter-accept time.
///
/// Owns deep copies of the URL and body: the engine may reclaim the
/// exchange's buffers as soon as the hook returns, so nothing here may
/// borrow from them. Serializes to the ingestion wire schema
/// `{"url": "<string>", "html": "<string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardRequest {
    /// Originating page URL
    pub url: String,
    /// Decoded HTML payload
    pub html: String,
}

impl ForwardRequest {
    /// Create a forward request from owned parts
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }

    /// Snapshot an exchange
    pub fn from_exchange(exchange: &Exchange<'_>) -> Self {
        Self {
            url: exchange.url.to_string(),
            html: exchange.response_body.to_string(),
        }
    }
}
