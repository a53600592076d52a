use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

use super::null_default;

/// A Mastodon account (user profile).
///
/// <https://docs.joinmastodon.org/entities/Account/>
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,
    /// `username` for local accounts, `username@domain` for remote ones.
    #[serde(default, deserialize_with = "null_default")]
    pub acct: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_default")]
    pub display_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Profile bio as HTML.
    #[serde(default, deserialize_with = "null_default")]
    pub note: String,
    #[serde(default, deserialize_with = "null_default")]
    pub avatar: String,
    #[serde(default, deserialize_with = "null_default")]
    pub avatar_static: String,
    #[serde(default, deserialize_with = "null_default")]
    pub header: String,
    #[serde(default, deserialize_with = "null_default")]
    pub header_static: String,
    #[serde(default, deserialize_with = "null_default")]
    pub locked: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub bot: bool,
    #[serde(default)]
    pub discoverable: Option<bool>,
    #[serde(default, deserialize_with = "null_default")]
    pub group: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub followers_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub following_count: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub statuses_count: u64,
    #[serde(default, deserialize_with = "date_or_datetime")]
    pub last_status_at: Option<NaiveDate>,
}

// Older servers send a full timestamp here, newer ones only the date.
fn date_or_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(&value)
        .map(|time| Some(time.date_naive()))
        .map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_account() {
        let account: Account = serde_json::from_str(
            r#"{
                "id": "23634",
                "username": "noiob",
                "acct": "noiob@awoo.space",
                "display_name": "ikea shark fan account",
                "locked": false,
                "bot": false,
                "discoverable": true,
                "group": false,
                "created_at": "2017-02-08T02:00:53.274Z",
                "note": "<p>:ms_rainbow_flag:</p>",
                "url": "https://awoo.space/@noiob",
                "uri": "https://awoo.space/users/noiob",
                "avatar": "https://files.mastodon.social/accounts/avatars/000/023/634/original/6ca8804dc46800ad.png",
                "avatar_static": "https://files.mastodon.social/accounts/avatars/000/023/634/original/6ca8804dc46800ad.png",
                "header": "https://files.mastodon.social/accounts/headers/000/023/634/original/256eb8d7ac40f49a.png",
                "header_static": "https://files.mastodon.social/accounts/headers/000/023/634/original/256eb8d7ac40f49a.png",
                "followers_count": 547,
                "following_count": 404,
                "statuses_count": 28468,
                "last_status_at": "2019-11-17",
                "emojis": [],
                "fields": []
            }"#,
        )
        .unwrap();
        assert_eq!(account.acct, "noiob@awoo.space");
        assert_eq!(account.discoverable, Some(true));
        assert_eq!(account.followers_count, 547);
        assert!(account.header_static.ends_with("256eb8d7ac40f49a.png"));
        assert_eq!(
            account.last_status_at,
            NaiveDate::from_ymd_opt(2019, 11, 17)
        );
        assert!(account.created_at.is_some());
    }

    #[test]
    fn last_status_at_accepts_timestamps() {
        let account: Account = serde_json::from_str(
            r#"{"id":"1","last_status_at":"2019-11-17T10:20:30.000Z"}"#,
        )
        .unwrap();
        assert_eq!(
            account.last_status_at,
            NaiveDate::from_ymd_opt(2019, 11, 17)
        );
    }

    #[test]
    fn nullable_fields_accept_null() {
        let account: Account =
            serde_json::from_str(r#"{"id":"1","discoverable":null,"last_status_at":null}"#)
                .unwrap();
        assert_eq!(account.discoverable, None);
        assert_eq!(account.last_status_at, None);
    }

    #[test]
    fn id_is_required() {
        assert!(serde_json::from_str::<Account>(r#"{"username":"alice"}"#).is_err());
    }

    #[test]
    fn null_scalars_fall_back_to_defaults() {
        let account: Account = serde_json::from_str(
            r#"{"id":"1","username":null,"acct":null,
                "locked":null,"bot":null,"followers_count":null}"#,
        )
        .unwrap();
        assert_eq!(account.id, "1");
        assert_eq!(account.username, "");
        assert_eq!(account.acct, "");
        assert!(!account.locked);
        assert!(!account.bot);
        assert_eq!(account.followers_count, 0);
    }
}
