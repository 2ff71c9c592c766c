//! Authentication module
//!
//! Resolves the connection's access token and attaches it to outgoing
//! requests.
//!
//! Token resolution happens once per connection, before any network call:
//! a configured token wins, the `LAUNCHDARKLY_ACCESS_TOKEN` environment
//! variable is the fallback, and the absence of both is a configuration
//! error.

mod authenticator;
mod credentials;
mod types;

pub use authenticator::Authenticator;
pub use credentials::{process_env, resolve_access_token, EnvLookup};
pub use types::AuthConfig;

#[cfg(test)]
mod tests;
