// Copyright (c) 2026 Bountyy Oy. All rights reserved.

use std::collections::HashMap;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pagebridge::{Bridge, BridgeConfig, Exchange, ResponseObserver};

fn filter_benchmark(c: &mut Criterion) {
    let html_headers = HashMap::from([(
        "Content-Type".to_string(),
        "text/html; charset=utf-8".to_string(),
    )]);
    let json_headers = HashMap::from([(
        "Content-Type".to_string(),
        "application/json".to_string(),
    )]);
    let body = "<html>".to_string() + &"x".repeat(64 * 1024) + "</html>";

    c.bench_function("filter_eligible", |b| {
        let exchange = Exchange {
            method: "GET",
            status_code: 200,
            response_headers: &html_headers,
            response_body: &body,
            url: "http://example.com/",
        };
        b.iter(|| black_box(pagebridge::is_eligible(black_box(&exchange))))
    });

    c.bench_function("filter_ineligible", |b| {
        let exchange = Exchange {
            method: "GET",
            status_code: 200,
            response_headers: &json_headers,
            response_body: "{}",
            url: "http://example.com/api",
        };
        b.iter(|| black_box(pagebridge::is_eligible(black_box(&exchange))))
    });
}

fn hook_benchmark(c: &mut Criterion) {
    // Endpoint with nothing behind it: the measurement covers the hook's
    // enqueue path only, deliveries fail off-loop.
    let bridge = Bridge::with_config(
        BridgeConfig::new()
            .ingest_url("http://127.0.0.1:9/ingest")
            .timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let headers = HashMap::from([(
        "Content-Type".to_string(),
        "text/html".to_string(),
    )]);
    let body = "<html>".to_string() + &"x".repeat(16 * 1024) + "</html>";

    c.bench_function("hook_eligible_exchange", |b| {
        let exchange = Exchange {
            method: "GET",
            status_code: 200,
            response_headers: &headers,
            response_body: &body,
            url: "http://example.com/",
        };
        b.iter(|| bridge.on_response(black_box(&exchange)))
    });
}

criterion_group!(benches, filter_benchmark, hook_benchmark);
criterion_main!(benches);
