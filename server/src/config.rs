use std::env;
use std::sync::Arc;

use axum::extract::FromRef;
use leptos::config::LeptosOptions;

pub const DEFAULT_SITE_URL: &str = "https://sentinex.co";

/// Settings the host reads from the environment, on top of the Leptos options
/// from `Cargo.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public origin used for absolute links in the feed and sitemap, without a
    /// trailing slash.
    pub site_url: String,
    pub production: bool,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let site_url = lookup("SITE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_owned());
        let production = lookup("RUST_ENV").is_some_and(|value| value == "production");

        Self {
            site_url: site_url.trim().trim_end_matches('/').to_owned(),
            production,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_owned(),
            production: false,
        }
    }
}

/// Environment validation.
/// In production the public URL and bind address must be set explicitly.
pub fn validate_production_env() -> Result<(), Vec<String>> {
    validate_with(|key| env::var(key).ok())
}

fn validate_with(lookup: impl Fn(&str) -> Option<String>) -> Result<(), Vec<String>> {
    let is_production = lookup("RUST_ENV").is_some_and(|value| value == "production");
    if !is_production {
        return Ok(());
    }

    let errors: Vec<String> = ["SITE_URL", "LEPTOS_SITE_ADDR"]
        .into_iter()
        .filter(|var| lookup(var).is_none_or(|value| value.trim().is_empty()))
        .map(|var| format!("Missing required environment variable: {var}"))
        .collect();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Router state. `LeptosOptions` is extracted from it by the Leptos handlers.
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub site: Arc<SiteConfig>,
}
