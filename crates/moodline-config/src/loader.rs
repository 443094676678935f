// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./moodline.toml` > `~/.config/moodline/moodline.toml` > `/etc/moodline/moodline.toml`
//! with environment variable overrides via `MOODLINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MoodlineConfig;

/// System-wide config path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/moodline/moodline.toml";

/// Local (working directory) config file name.
pub const LOCAL_CONFIG_FILE: &str = "moodline.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/moodline/moodline.toml` (system-wide)
/// 3. `~/.config/moodline/moodline.toml` (user XDG config)
/// 4. `./moodline.toml` (local directory)
/// 5. `MOODLINE_*` environment variables
pub fn load_config() -> Result<MoodlineConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<MoodlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MoodlineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MoodlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MoodlineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MoodlineConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("moodline").join(LOCAL_CONFIG_FILE))
                .unwrap_or_default(),
        ))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `MOODLINE_GENERATIVE_API_KEY` must map to `generative.api_key`,
/// not `generative.api.key`.
fn env_provider() -> Env {
    Env::prefixed("MOODLINE_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a lowercased, prefix-stripped env var name to its dotted config path.
pub fn map_env_key(key: &str) -> String {
    const SECTIONS: &[&str] = &[
        "app",
        "generative",
        "hosted",
        "lexicon",
        "responder",
        "gateway",
    ];

    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("generative_api_key"), "generative.api_key");
        assert_eq!(map_env_key("hosted_timeout_secs"), "hosted.timeout_secs");
        assert_eq!(map_env_key("lexicon_score_divisor"), "lexicon.score_divisor");
        assert_eq!(map_env_key("app_log_level"), "app.log_level");
        assert_eq!(map_env_key("gateway_port"), "gateway.port");
    }

    #[test]
    fn unknown_env_keys_pass_through() {
        assert_eq!(map_env_key("something"), "something");
        assert_eq!(map_env_key("apple_pie"), "apple_pie");
    }
}
