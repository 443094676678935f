// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that all provider adapters implement.

use async_trait::async_trait;

use crate::error::MoodlineError;
use crate::types::{AdapterType, HealthStatus};

/// Identity and health reporting shared by every provider adapter.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Returns the kind of adapter.
    fn adapter_type(&self) -> AdapterType;

    /// Reports whether the adapter can reach its backend.
    ///
    /// Adapters without a credential report `Degraded` rather than failing.
    async fn health_check(&self) -> Result<HealthStatus, MoodlineError>;
}
