// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Borrowed view of one completed HTTP exchange

use std::collections::HashMap;

/// One completed request/response pair observed by the interception engine.
///
/// The engine owns every buffer behind this view and may reclaim or reuse
/// them the moment the response hook returns, so an `Exchange` is only
/// valid for the duration of the hook call. Anything worth keeping must be
/// deep-copied into a [`ForwardRequest`](crate::ForwardRequest) before the
/// hook returns.
#[derive(Debug, Clone, Copy)]
pub struct Exchange<'a> {
    /// Request method, e.g. "GET"
    pub method: &'a str,
    /// Response status code
    pub status_code: u16,
    /// Response headers
    pub response_headers: &'a HashMap<String, String>,
    /// Response body, fully materialized and decoded by the engine
    pub response_body: &'a str,
    /// Absolute request URL
    pub url: &'a str,
}

impl<'a> Exchange<'a> {
    /// Look up a response header, case-insensitively.
    ///
    /// Returns the empty string when the header is absent.
    pub fn header(&self, name: &str) -> &'a str {
        self.response_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Content-Type of the response, or the empty string when absent
    pub fn content_type(&self) -> &'a str {
        self.header("content-type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let headers = headers(&[("Content-Type", "text/html; charset=utf-8")]);
        let exchange = Exchange {
            method: "GET",
            status_code: 200,
            response_headers: &headers,
            response_body: "",
            url: "http://example.com/",
        };

        assert_eq!(exchange.header("content-type"), "text/html; charset=utf-8");
        assert_eq!(exchange.header("CONTENT-TYPE"), "text/html; charset=utf-8");
        assert_eq!(exchange.content_type(), "text/html; charset=utf-8");
    }

    #[test]
    fn test_absent_header_is_empty_string() {
        let headers = headers(&[]);
        let exchange = Exchange {
            method: "GET",
            status_code: 200,
            response_headers: &headers,
            response_body: "",
            url: "http://example.com/",
        };

        assert_eq!(exchange.header("content-type"), "");
        assert_eq!(exchange.content_type(), "");
    }
}
