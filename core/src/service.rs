//! Typed entry point to the Mastodon API.

use crate::client::MastodonHttpClient;
use crate::config::ClientConfig;
use crate::endpoints::{AccountsEndpoint, StatusesEndpoint, TimelinesEndpoint};
use crate::transport::HttpTransport;

/// Groups the typed endpoints over one [`MastodonHttpClient`].
///
/// ```no_run
/// use mastodon_core::MastodonHttpService;
///
/// let service = MastodonHttpService::from_domain("mastodon.social");
/// let status = service.statuses().get_status("109372185786654121")?;
/// println!("{}", status.body().content);
/// # Ok::<(), mastodon_core::MastodonError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MastodonHttpService<T = HttpTransport> {
    client: MastodonHttpClient<T>,
}

impl MastodonHttpService {
    /// Anonymous access to `domain`.
    pub fn from_domain(domain: impl Into<String>) -> Self {
        Self::from_client(MastodonHttpClient::new(domain))
    }

    pub fn from_access_token(domain: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::from_client(MastodonHttpClient::new(domain).with_access_token(access_token))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let client = MastodonHttpClient::new(config.domain.as_str());
        match &config.access_token {
            Some(token) => Self::from_client(client.with_access_token(token.as_str())),
            None => Self::from_client(client),
        }
    }
}

impl<T> MastodonHttpService<T> {
    pub fn from_client(client: MastodonHttpClient<T>) -> Self {
        Self { client }
    }

    /// The underlying client, for raw endpoints and custom requests.
    pub fn client(&self) -> &MastodonHttpClient<T> {
        &self.client
    }

    pub fn accounts(&self) -> AccountsEndpoint<'_, T> {
        AccountsEndpoint::new(&self.client)
    }

    pub fn statuses(&self) -> StatusesEndpoint<'_, T> {
        StatusesEndpoint::new(&self.client)
    }

    pub fn timelines(&self) -> TimelinesEndpoint<'_, T> {
        TimelinesEndpoint::new(&self.client)
    }
}
