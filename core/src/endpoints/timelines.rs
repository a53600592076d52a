use crate::client::MastodonHttpClient;
use crate::error::MastodonError;
use crate::http::HttpResponse;
use crate::options::{GetHashtagTimelineOptions, GetPublicTimelineOptions};
use crate::response::StatusListResponse;
use crate::transport::{AsyncTransport, Transport};

/// Raw access to the timelines API.
#[derive(Debug)]
pub struct TimelinesRawEndpoint<'a, T> {
    client: &'a MastodonHttpClient<T>,
}

impl<T> Clone for TimelinesRawEndpoint<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TimelinesRawEndpoint<'_, T> {}

impl<'a, T> TimelinesRawEndpoint<'a, T> {
    pub(crate) fn new(client: &'a MastodonHttpClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &'a MastodonHttpClient<T> {
        self.client
    }
}

impl<T: Transport> TimelinesRawEndpoint<'_, T> {
    pub fn get_hashtag_timeline(
        &self,
        options: impl Into<GetHashtagTimelineOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }

    pub fn get_public_timeline(
        &self,
        options: impl Into<GetPublicTimelineOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response(&options.into())
    }
}

impl<T: AsyncTransport> TimelinesRawEndpoint<'_, T> {
    pub async fn get_hashtag_timeline_async(
        &self,
        options: impl Into<GetHashtagTimelineOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }

    pub async fn get_public_timeline_async(
        &self,
        options: impl Into<GetPublicTimelineOptions>,
    ) -> Result<HttpResponse, MastodonError> {
        self.client.get_response_async(&options.into()).await
    }
}

/// The timelines API.
///
/// <https://docs.joinmastodon.org/methods/timelines/>
#[derive(Debug)]
pub struct TimelinesEndpoint<'a, T> {
    raw: TimelinesRawEndpoint<'a, T>,
}

impl<'a, T> TimelinesEndpoint<'a, T> {
    pub(crate) fn new(client: &'a MastodonHttpClient<T>) -> Self {
        Self {
            raw: TimelinesRawEndpoint::new(client),
        }
    }

    pub fn raw(&self) -> TimelinesRawEndpoint<'a, T> {
        self.raw
    }
}

impl<T: Transport> TimelinesEndpoint<'_, T> {
    /// Public statuses tagged with a hashtag, newest first.
    pub fn get_hashtag_timeline(
        &self,
        options: impl Into<GetHashtagTimelineOptions>,
    ) -> Result<StatusListResponse, MastodonError> {
        StatusListResponse::new(self.raw.get_hashtag_timeline(options)?)
    }

    /// Public statuses, newest first.
    pub fn get_public_timeline(
        &self,
        options: impl Into<GetPublicTimelineOptions>,
    ) -> Result<StatusListResponse, MastodonError> {
        StatusListResponse::new(self.raw.get_public_timeline(options)?)
    }
}

impl<T: AsyncTransport> TimelinesEndpoint<'_, T> {
    pub async fn get_hashtag_timeline_async(
        &self,
        options: impl Into<GetHashtagTimelineOptions>,
    ) -> Result<StatusListResponse, MastodonError> {
        StatusListResponse::new(self.raw.get_hashtag_timeline_async(options).await?)
    }

    pub async fn get_public_timeline_async(
        &self,
        options: impl Into<GetPublicTimelineOptions>,
    ) -> Result<StatusListResponse, MastodonError> {
        StatusListResponse::new(self.raw.get_public_timeline_async(options).await?)
    }
}
