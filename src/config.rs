//! Application configuration baked in at build time.
//!
//! The browser bundle has no process environment, so the optional
//! `ORDERING_*` variables are read by the compiler via `option_env!`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routes::HistoryMode;
use crate::state::session::SESSION_STORE_KEY;

pub const DEFAULT_APP_TITLE: &str = "Ordering";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown history mode {0:?} (expected \"web\" or \"hash\")")]
    UnknownHistoryMode(String),
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Suffix of every document title.
    pub title: String,
    /// Storage key of the session store.
    pub session_key: String,
    pub history: HistoryMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_APP_TITLE.to_owned(),
            session_key: SESSION_STORE_KEY.to_owned(),
            history: HistoryMode::Web,
        }
    }
}

impl AppConfig {
    /// Build config from compile-time variables.
    ///
    /// Optional:
    /// - `ORDERING_APP_TITLE`: default `Ordering`
    /// - `ORDERING_SESSION_KEY`: default `user`
    /// - `ORDERING_HISTORY_MODE`: `web` (default) or `hash`
    ///
    /// Invalid values are logged and replaced by defaults.
    pub fn from_build_env() -> Self {
        match Self::from_values(
            option_env!("ORDERING_APP_TITLE"),
            option_env!("ORDERING_SESSION_KEY"),
            option_env!("ORDERING_HISTORY_MODE"),
        ) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("invalid build configuration, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Build config from optional raw values; `None` selects the default.
    pub fn from_values(
        title: Option<&str>,
        session_key: Option<&str>,
        history: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let title = parse_non_empty("ORDERING_APP_TITLE", title)?.unwrap_or(defaults.title);
        let session_key = parse_non_empty("ORDERING_SESSION_KEY", session_key)?.unwrap_or(defaults.session_key);
        let history = parse_history_mode(history)?;
        Ok(Self { title, session_key, history })
    }

    /// Full document title for a page title.
    pub fn document_title(&self, page_title: &str) -> String {
        format!("{page_title} | {}", self.title)
    }
}

pub(crate) fn parse_history_mode(raw: Option<&str>) -> Result<HistoryMode, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(HistoryMode::default()),
        Some(value) if value.eq_ignore_ascii_case("web") => Ok(HistoryMode::Web),
        Some(value) if value.eq_ignore_ascii_case("hash") => Ok(HistoryMode::Hash),
        Some(other) => Err(ConfigError::UnknownHistoryMode(other.to_owned())),
    }
}

fn parse_non_empty(var: &'static str, raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Err(ConfigError::Empty { var }),
        Some(value) => Ok(Some(value.to_owned())),
    }
}
