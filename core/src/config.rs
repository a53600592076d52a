//! Client configuration read from the environment.

use crate::error::MastodonError;

pub const DOMAIN_VAR: &str = "MASTODON_DOMAIN";
pub const ACCESS_TOKEN_VAR: &str = "MASTODON_ACCESS_TOKEN";

/// Where to connect and with which credential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub domain: String,
    pub access_token: Option<String>,
}

impl ClientConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Read `MASTODON_DOMAIN` (required) and `MASTODON_ACCESS_TOKEN` (optional).
    pub fn from_env() -> Result<Self, MastodonError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`ClientConfig::from_env`], with variables resolved by `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MastodonError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let domain = non_blank(DOMAIN_VAR).ok_or(MastodonError::MissingEnvironment(DOMAIN_VAR))?;
        Ok(Self {
            domain,
            access_token: non_blank(ACCESS_TOKEN_VAR),
        })
    }
}
