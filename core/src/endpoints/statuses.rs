use crate::client::MastodonHttpClient;
use crate::error::MastodonError;
use crate::http::HttpResponse;
use crate::options::{
    BookmarkStatusOptions, FavouriteStatusOptions, GetStatusOptions, PostStatusOptions,
    ReblogStatusOptions,
};
use crate::response::StatusResponse;
use crate::transport::{AsyncTransport, Transport};

/// Raw access to the statuses API.
#[derive(Debug)]
pub struct StatusesRawEndpoint<'a, T> {
    client: &'a MastodonHttpClient<T>,
}

impl<T> Clone for StatusesRawEndpoint<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StatusesRawEndpoint<'_, T> {}

impl<'a, T> StatusesRawEndpoint<'a, T> {
    pub(crate) fn new(client: &'a MastodonHttpClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a MastodonHttpClient<T> {
        self.client
    }
}

impl<T: Transport> StatusesRawEndpoint<'_, T> {
    pub fn get_status(
        &self,
        options: impl Into<GetStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }

    pub fn post_status(
        &self,
        options: impl Into<PostStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }

    pub fn favourite_status(
        &self,
        options: impl Into<FavouriteStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }

    pub fn reblog_status(
        &self,
        options: impl Into<ReblogStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }

    pub fn bookmark_status(
        &self,
        options: impl Into<BookmarkStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }
}

impl<T: AsyncTransport> StatusesRawEndpoint<'_, T> {
    pub async fn get_status_async(
        &self,
        options: impl Into<GetStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }

    pub async fn post_status_async(
        &self,
        options: impl Into<PostStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }

    pub async fn favourite_status_async(
        &self,
        options: impl Into<FavouriteStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }

    pub async fn reblog_status_async(
        &self,
        options: impl Into<ReblogStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }

    pub async fn bookmark_status_async(
        &self,
        options: impl Into<BookmarkStatusOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }
}

/// The statuses API.
///
/// <https://docs.joinmastodon.org/methods/statuses/>
#[derive(Debug)]
pub struct StatusesEndpoint<'a, T> {
    raw: StatusesRawEndpoint<'a, T>,
}

impl<'a, T> StatusesEndpoint<'a, T> {
    pub(crate) fn new(client: &'a MastodonHttpClient<T>) -> Self {
        Self {
            raw: StatusesRawEndpoint::new(client),
        }
    }

    pub fn raw(&self) -> StatusesRawEndpoint<'a, T> {
        self.raw
    }
}

impl<T: Transport> StatusesEndpoint<'_, T> {
    pub fn get_status(
        &self,
        options: impl Into<GetStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.get_status(options)?)
    }

    /// Publish a status. Requires an access token.
    pub fn post_status(
        &self,
        options: impl Into<PostStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.post_status(options)?)
    }

    pub fn favourite_status(
        &self,
        options: impl Into<FavouriteStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.favourite_status(options)?)
    }

    /// Boost a status. The body is the new reblog status wrapping the original.
    pub fn reblog_status(
        &self,
        options: impl Into<ReblogStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.reblog_status(options)?)
    }

    pub fn bookmark_status(
        &self,
        options: impl Into<BookmarkStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.bookmark_status(options)?)
    }
}

impl<T: AsyncTransport> StatusesEndpoint<'_, T> {
    pub async fn get_status_async(
        &self,
        options: impl Into<GetStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.get_status_async(options).await?)
    }

    pub async fn post_status_async(
        &self,
        options: impl Into<PostStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.post_status_async(options).await?)
    }

    pub async fn favourite_status_async(
        &self,
        options: impl Into<FavouriteStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.favourite_status_async(options).await?)
    }

    pub async fn reblog_status_async(
        &self,
        options: impl Into<ReblogStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.reblog_status_async(options).await?)
    }

    pub async fn bookmark_status_async(
        &self,
        options: impl Into<BookmarkStatusOptions>,
    ) -> Result<StatusResponse, MastodonError> {
        StatusResponse::new(self.raw.bookmark_status_async(options).await?)
    }
}
