//! Application Configuration
//!
//! The owner id is baked in at build time (`TODOS_USER_ID=1234 trunk build`);
//! a browser bundle has no process environment to read at runtime.

use todos_api::DEFAULT_API_URL;

use crate::error::TodoError;

/// How long an error banner stays up before clearing itself
pub const ERROR_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub user_id: u32,
    pub error_dismiss_ms: u32,
}

impl AppConfig {
    /// Config from the values captured when the bundle was compiled
    pub fn from_build_env() -> Result<Self, TodoError> {
        Self::from_user_id(option_env!("TODOS_USER_ID"))
    }

    /// Missing, blank, non-numeric, or zero ids are all treated as unconfigured
    pub fn from_user_id(raw: Option<&str>) -> Result<Self, TodoError> {
        let user_id = raw
            .map(str::trim)
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|id| *id != 0)
            .ok_or(TodoError::ConfigMissing)?;

        Ok(Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_id,
            error_dismiss_ms: ERROR_DISMISS_MS,
        })
    }
}
