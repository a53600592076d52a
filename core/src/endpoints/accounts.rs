use crate::client::MastodonHttpClient;
use crate::error::MastodonError;
use crate::http::HttpResponse;
use crate::options::{AccountLookupOptions, GetAccountOptions};
use crate::response::AccountResponse;
use crate::transport::{AsyncTransport, Transport};

/// Raw access to the accounts API.
#[derive(Debug)]
pub struct AccountsRawEndpoint<'a, T> {
    client: &'a MastodonHttpClient<T>,
}

impl<T> Clone for AccountsRawEndpoint<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AccountsRawEndpoint<'_, T> {}

impl<'a, T> AccountsRawEndpoint<'a, T> {
    pub(crate) fn new(client: &'a MastodonHttpClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a MastodonHttpClient<T> {
        self.client
    }
}

impl<T: Transport> AccountsRawEndpoint<'_, T> {
    pub fn get_account(
        &self,
        options: impl Into<GetAccountOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }

    pub fn lookup(
        &self,
        options: impl Into<AccountLookupOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }
}

impl<T: AsyncTransport> AccountsRawEndpoint<'_, T> {
    pub async fn get_account_async(
        &self,
        options: impl Into<GetAccountOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }

    pub async fn lookup_async(
        &self,
        options: impl Into<AccountLookupOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }
}

/// The accounts API.
///
/// <https://docs.joinmastodon.org/methods/accounts/>
#[derive(Debug)]
pub struct AccountsEndpoint<'a, T> {
    raw: AccountsRawEndpoint<'a, T>,
}

impl<'a, T> AccountsEndpoint<'a, T> {
    pub(crate) fn new(client: &'a MastodonHttpClient<T>) -> Self {
        Self {
            raw: AccountsRawEndpoint::new(client),
        }
    }

    pub fn raw(&self) -> AccountsRawEndpoint<'a, T> {
        self.raw
    }
}

impl<T: Transport> AccountsEndpoint<'_, T> {
    /// Get the account with the given ID.
    pub fn get_account(
        &self,
        options: impl Into<GetAccountOptions>,
    ) -> Result<AccountResponse, MastodonError> {
        AccountResponse::new(self.raw.get_account(options)?)
    }

    /// Find an account by `username` or `username@domain`.
    pub fn lookup(
        &self,
        options: impl Into<AccountLookupOptions>,
    ) -> Result<AccountResponse, MastodonError> {
        AccountResponse::new(self.raw.lookup(options)?)
    }
}

impl<T: AsyncTransport> AccountsEndpoint<'_, T> {
    pub async fn get_account_async(
        &self,
        options: impl Into<GetAccountOptions>,
    ) -> Result<AccountResponse, MastodonError> {
        AccountResponse::new(self.raw.get_account_async(options).await?)
    }

    pub async fn lookup_async(
        &self,
        options: impl Into<AccountLookupOptions>,
    ) -> Result<AccountResponse, MastodonError> {
        AccountResponse::new(self.raw.lookup_async(options).await?)
    }
}
