// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for Moodline's provider adapters.
//!
//! Lets pipeline, gateway, and binary tests run without network access.

pub mod mock_classifier;
pub mod mock_provider;

pub use mock_classifier::MockClassifier;
pub use mock_provider::{MockCompletionProvider, MockReply};
