use serde::{Deserialize, Deserializer};
use strum::{AsRefStr, Display, EnumString};

use super::{from_name, null_default};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PreviewType {
    #[default]
    Link,
    Photo,
    Video,
    Rich,
}

impl<'de> Deserialize<'de> for PreviewType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        from_name(deserializer)
    }
}

/// Rich preview of a link embedded in a status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewCard {
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub card_type: PreviewType,
}
