//! Access token resolution

use crate::config::{ConnectionConfig, ACCESS_TOKEN_ENV};
use crate::error::{Error, Result};
use crate::types::OptionStringExt;

/// Environment lookup used during credential resolution
pub type EnvLookup = fn(&str) -> Option<String>;

/// Read a variable from the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolve the access token for a connection.
///
/// A non-empty configured token is preferred; otherwise the
/// `LAUNCHDARKLY_ACCESS_TOKEN` variable is read through `env`.
pub fn resolve_access_token(config: &ConnectionConfig, env: EnvLookup) -> Result<String> {
    config
        .access_token
        .clone()
        .none_if_empty()
        .or_else(|| env(ACCESS_TOKEN_ENV).none_if_empty())
        .ok_or_else(|| Error::config("access_token must be configured"))
}
