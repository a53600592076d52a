use std::time::Duration;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use super::{null_default, seconds};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MediaType {
    #[default]
    Unknown,
    Image,
    Gifv,
    Video,
    Audio,
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name
            .and_then(|name| name.parse().ok())
            .unwrap_or(MediaType::Unknown))
    }
}

/// A file attached to a status.
///
/// <https://docs.joinmastodon.org/entities/MediaAttachment/>
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMediaAttachment")]
pub struct MediaAttachment {
    pub id: String,
    pub media_type: MediaType,
    pub url: String,
    pub preview_url: String,
    pub remote_url: Option<String>,
    pub meta: MediaMetadata,
    /// Alt text.
    pub description: Option<String>,
    pub blurhash: Option<String>,
}

// The shape of `meta` depends on `type`, so the attachment is read in two
// passes: first with `meta` left as raw JSON, then `meta` by media type.
#[derive(Deserialize)]
struct RawMediaAttachment {
    id: String,
    #[serde(rename = "type", default)]
    media_type: MediaType,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    remote_url: Option<String>,
    #[serde(default)]
    meta: Option<Value>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    blurhash: Option<String>,
}

impl TryFrom<RawMediaAttachment> for MediaAttachment {
    type Error = serde_json::Error;

    fn try_from(raw: RawMediaAttachment) -> Result<Self, Self::Error> {
        Ok(Self {
            meta: MediaMetadata::parse(raw.media_type, raw.meta)?,
            id: raw.id,
            media_type: raw.media_type,
            url: raw.url.unwrap_or_default(),
            preview_url: raw.preview_url.unwrap_or_default(),
            remote_url: raw.remote_url,
            description: raw.description,
            blurhash: raw.blurhash,
        })
    }
}

/// Type-specific metadata of a media attachment.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaMetadata {
    Image(ImageMetadata),
    Video(VideoMetadata),
    Gifv(GifvMetadata),
    Audio(AudioMetadata),
    /// Metadata of a media type this crate does not model, kept as JSON.
    Unknown(Value),
}

impl MediaMetadata {
    /// Parse `meta` according to `media_type`.
    ///
    /// A missing or `null` `meta` yields the variant with every field unset.
    pub fn parse(media_type: MediaType, meta: Option<Value>) -> serde_json::Result<Self> {
        let meta = match meta {
            Some(Value::Null) | None => Value::Object(Default::default()),
            Some(meta) => meta,
        };
        Ok(match media_type {
            MediaType::Image => MediaMetadata::Image(serde_json::from_value(meta)?),
            MediaType::Video => MediaMetadata::Video(serde_json::from_value(meta)?),
            MediaType::Gifv => MediaMetadata::Gifv(serde_json::from_value(meta)?),
            MediaType::Audio => MediaMetadata::Audio(serde_json::from_value(meta)?),
            MediaType::Unknown => MediaMetadata::Unknown(meta),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageMetadata {
    #[serde(default)]
    pub original: Option<ImageVersion>,
    #[serde(default)]
    pub small: Option<ImageVersion>,
    #[serde(default)]
    pub focus: Option<ImageFocus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageVersion {
    #[serde(default, deserialize_with = "null_default")]
    pub width: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub height: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_default")]
    pub aspect: f64,
}

/// Focal point of an image, both axes in `-1.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ImageFocus {
    #[serde(default, deserialize_with = "null_default")]
    pub x: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub aspect: Option<f64>,
    #[serde(default)]
    pub audio_encode: Option<String>,
    #[serde(default)]
    pub audio_bitrate: Option<String>,
    #[serde(default)]
    pub audio_channels: Option<String>,
    #[serde(default)]
    pub original: Option<VideoVersion>,
    #[serde(default)]
    pub small: Option<ImageVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GifvMetadata {
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub aspect: Option<f64>,
    #[serde(default)]
    pub original: Option<VideoVersion>,
    #[serde(default)]
    pub small: Option<ImageVersion>,
}

/// The encoded stream of a video or gifv attachment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VideoVersion {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Rational frame rate such as `30000/1001`.
    #[serde(default)]
    pub frame_rate: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub bitrate: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AudioMetadata {
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub aspect: Option<f64>,
    #[serde(default)]
    pub audio_encode: Option<String>,
    #[serde(default)]
    pub audio_bitrate: Option<String>,
    #[serde(default)]
    pub audio_channels: Option<String>,
    #[serde(default)]
    pub original: Option<AudioVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AudioVersion {
    #[serde(default, deserialize_with = "seconds")]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub bitrate: Option<u64>,
}
