//! Auth configuration types

/// Resolved credential attached to every request
#[derive(Clone)]
pub struct AuthConfig {
    /// Prefix placed before the token (e.g., "Bearer ")
    pub prefix: Option<String>,
    /// The access token
    pub token: String,
}

impl AuthConfig {
    /// Raw access token in the `Authorization` header
    pub fn access_token(token: impl Into<String>) -> Self {
        Self {
            prefix: None,
            token: token.into(),
        }
    }

    /// Access token with a prefix such as `"Bearer "`
    pub fn prefixed(prefix: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            token: token.into(),
        }
    }

    /// Value of the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("{}{}", self.prefix.as_deref().unwrap_or(""), self.token)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("prefix", &self.prefix)
            .field("token", &"<redacted>")
            .finish()
    }
}
