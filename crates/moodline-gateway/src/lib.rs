// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for Moodline.
//!
//! Exposes the pipeline's sentiment, response, and crisis-support
//! operations as JSON endpoints. Every reply uses the envelope
//! `{success, message, data}`.

pub mod handlers;
pub mod server;

pub use handlers::Envelope;
pub use server::{GatewayState, ServerConfig, router, start_server};
