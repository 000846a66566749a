use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::session::{DEFAULT_TOP_K, parse_top_k};

/// Settings record; stored under key `SETTINGS_ID`.
pub const SETTINGS_ID: u32 = 1;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub id: Option<u32>,
    /// Prefix for `/rag` and `/health`. Empty means the page origin.
    pub api_base: String,
    pub default_top_k: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            id: Some(SETTINGS_ID),
            api_base: default_api_base(),
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

impl AppSettings {
    pub fn is_configured(&self) -> bool {
        cfg!(target_arch = "wasm32") || !self.api_base.trim().is_empty()
    }

    /// Builds the record the settings form describes, on top of `self`.
    ///
    /// Native builds have no page origin, so an empty service url is refused
    /// there instead of being saved.
    pub fn with_form(&self, api_base: &str, top_k: &str) -> anyhow::Result<AppSettings> {
        let s = AppSettings {
            api_base: api_base.trim().to_string(),
            default_top_k: parse_top_k(top_k, self.default_top_k),
            ..self.clone()
        };
        if !s.is_configured() {
            bail!("A service URL is required.");
        }
        Ok(s)
    }
}

/// Selector value to start from for the given (possibly still loading) settings.
pub fn initial_top_k(settings: Option<&AppSettings>) -> u32 {
    settings.map(|s| s.default_top_k).unwrap_or(DEFAULT_TOP_K)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_api_base() -> String {
    std::env::var("RAGCHAT_API_BASE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn default_api_base() -> String {
    String::new()
}
