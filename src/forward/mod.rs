// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Off-loop delivery to the ingestion service
//!
//! Owns the queue, the delivery runtime and the outcome counters. Nothing
//! in this module ever reports a failure back to the interception hook.

mod forwarder;
mod request;
mod stats;

pub use forwarder::Forwarder;
pub use request::ForwardRequest;
pub use stats::{ForwardStats, StatsReport};
