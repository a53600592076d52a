//! Data models returned by the Mastodon API.
//!
//! # Design
//! Models are plain records deserialized with serde. Parsing is lenient in
//! the same places the API itself is loose: identifiers are required, most
//! other fields fall back to their defaults when absent or `null`. Enumerations match
//! their names case-insensitively.

mod account;
mod media;
mod preview;
mod status;

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::{de, Deserialize, Deserializer};

pub use account::Account;
pub use media::{
    AudioMetadata, AudioVersion, GifvMetadata, ImageFocus, ImageMetadata, ImageVersion,
    MediaAttachment, MediaMetadata, MediaType, VideoMetadata, VideoVersion,
};
pub use preview::{PreviewCard, PreviewType};
pub use status::{Status, StatusTag, Visibility};

/// Deserialize an enumeration from its name through `FromStr`.
fn from_name<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(de::Error::custom)
}

/// Like `#[serde(default)]`, but an explicit `null` also yields the default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fractional seconds as a `Duration`. Values a `Duration` cannot hold
/// (negative, non-finite or too large) are dropped.
fn seconds<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = Option::<f64>::deserialize(deserializer)?;
    Ok(seconds.and_then(|s| Duration::try_from_secs_f64(s).ok()))
}
