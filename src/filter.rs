// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Eligibility filter for observed exchanges
//!
//! A pure predicate over method, status and headers. It never touches the
//! response body, so it stays O(1) no matter how large the page is and can
//! never become a blocking point on the interception loop.

use crate::exchange::Exchange;

/// Decide whether an exchange should be relayed to the ingestion service.
///
/// Eligible iff the exchange is a successful GET for an HTML document:
/// `method == "GET"`, `status_code == 200`, and the Content-Type header
/// contains the substring `text/html` (so `text/html; charset=utf-8`
/// qualifies). A missing Content-Type reads as the empty string and is
/// therefore ineligible.
pub fn is_eligible(exchange: &Exchange<'_>) -> bool {
    exchange.method == "GET"
        && exchange.status_code == 200
        && exchange.content_type().contains("text/html")
}
