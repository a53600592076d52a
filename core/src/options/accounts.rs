use super::{required, Params, RequestOptions};
use crate::error::MastodonError;
use crate::http::HttpRequest;

/// Options for getting a single account by ID.
///
/// <https://docs.joinmastodon.org/methods/accounts/#get>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAccountOptions {
    pub id: String,
}

impl GetAccountOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl RequestOptions for GetAccountOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let id = required(&self.id, "id")?;
        Ok(HttpRequest::get(format!("/api/v1/accounts/{id}")))
    }
}

impl From<&str> for GetAccountOptions {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GetAccountOptions {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Options for looking up an account by username or Webfinger address.
///
/// <https://docs.joinmastodon.org/methods/accounts/#lookup>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountLookupOptions {
    /// `username` or `username@domain`.
    pub acct: String,
}

impl AccountLookupOptions {
    pub fn new(acct: impl Into<String>) -> Self {
        Self { acct: acct.into() }
    }
}

impl RequestOptions for AccountLookupOptions {
    fn to_request(&self) -> Result<HttpRequest, MastodonError> {
        let acct = required(&self.acct, "acct")?;
        let mut query = Params::default();
        query.add("acct", acct);
        Ok(HttpRequest::get_with_query(
            "/api/v1/accounts/lookup",
            query.into_pairs(),
        ))
    }
}

impl From<&str> for AccountLookupOptions {
    fn from(acct: &str) -> Self {
        Self::new(acct)
    }
}

impl From<String> for AccountLookupOptions {
    fn from(acct: String) -> Self {
        Self::new(acct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn get_account_builds_path() {
        let req = GetAccountOptions::new("42").to_request().unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "/api/v1/accounts/42");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_account_requires_id() {
        let err = GetAccountOptions::default().to_request().unwrap_err();
        assert!(matches!(err, MastodonError::PropertyNotSet("id")));
    }

    #[test]
    fn lookup_uses_query() {
        let req = AccountLookupOptions::from("alice@example.social")
            .to_request()
            .unwrap();
        assert_eq!(req.url, "/api/v1/accounts/lookup");
        assert_eq!(
            req.query,
            vec![("acct".to_string(), "alice@example.social".to_string())]
        );
    }

    #[test]
    fn lookup_requires_acct() {
        let err = AccountLookupOptions::new(" ").to_request().unwrap_err();
        assert!(matches!(err, MastodonError::PropertyNotSet("acct")));
    }
}
