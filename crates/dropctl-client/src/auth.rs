//! Bearer credentials for API requests

use std::fmt;

/// Credential attached to every outgoing request
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    /// Create a bearer token
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer".to_string(),
        }
    }

    /// Value for the `Authorization` header
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Produces the credential used to authorize requests
///
/// The client asks for a token on every request, so implementations that
/// rotate credentials only need to return the current one.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Token;
}

/// Token source that always hands out the same access token
///
/// Never fails, never expires and never refreshes.
#[derive(Clone)]
pub struct StaticTokenSource {
    access_token: String,
}

impl StaticTokenSource {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl TokenSource for StaticTokenSource {
    fn token(&self) -> Token {
        Token::bearer(self.access_token.clone())
    }
}

impl fmt::Debug for StaticTokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenSource")
            .field("access_token", &"<redacted>")
            .finish()
    }
}
