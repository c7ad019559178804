//! Submission settings for the entry form.
//!
//! Defaults can be overridden from the page query string, e.g.
//! `/?action=https://example.com/entries&timeout_ms=5000`.

use contracts::form::DEFAULT_CONFIRMATION;
use serde::Deserialize;

pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;
const ENTRIES_PATH: &str = "/api/entries";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// URL the form is posted to
    pub action: String,
    /// Message shown after a successful submission
    pub confirmation: String,
    /// 0 disables the timeout
    pub timeout_ms: u32,
}

#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    action: Option<String>,
    timeout_ms: Option<u32>,
}

impl FormConfig {
    pub fn with_action(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            confirmation: DEFAULT_CONFIRMATION.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Config for the current page: default action next to the API host,
    /// then any overrides from `window.location.search`.
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::with_action(api_url(ENTRIES_PATH)).apply_query(&search)
    }

    /// Applies `action` and `timeout_ms` from a query string. An unparseable
    /// query leaves the config unchanged.
    pub fn apply_query(mut self, query: &str) -> Self {
        let query = query.trim_start_matches('?');
        if query.is_empty() {
            return self;
        }

        match serde_qs::from_str::<QueryOverrides>(query) {
            Ok(overrides) => {
                if let Some(action) = overrides.action.filter(|a| !a.is_empty()) {
                    self.action = action;
                }
                if let Some(timeout_ms) = overrides.timeout_ms {
                    self.timeout_ms = timeout_ms;
                }
            }
            Err(e) => {
                log::warn!("Ignoring query overrides '{}': {}", query, e);
            }
        }
        self
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::with_action(ENTRIES_PATH)
    }
}

/// Base URL of the API host: same protocol and hostname as the page, port 3000.
///
/// Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
