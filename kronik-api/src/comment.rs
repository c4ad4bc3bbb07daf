use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::{Time, UserId};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ReplyId(pub String);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ReplyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub text: String,

    /// None when the server sent no date, or one that could not be parsed
    #[serde(default, deserialize_with = "lenient_time")]
    pub date: Option<Time>,

    #[serde(default)]
    pub likes: u32,

    /// Replies in arrival order
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reply {
    pub id: ReplyId,
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub text: String,
    #[serde(default, deserialize_with = "lenient_time")]
    pub date: Option<Time>,
    #[serde(default)]
    pub likes: u32,
}

// The server sends either RFC 3339 or naive ISO timestamps (the latter being UTC)
fn lenient_time<'de, D>(d: D) -> Result<Option<Time>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = match Option::<String>::deserialize(d)? {
        None => return Ok(None),
        Some(s) => s,
    };
    if let Ok(t) = DateTime::parse_from_rfc3339(&s) {
        return Ok(Some(t.with_timezone(&Utc)));
    }
    Ok(NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|t| Utc.from_utc_datetime(&t)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_comment() {
        let c: Comment = serde_json::from_str(
            r#"{
                "id": "c1",
                "user_id": "@anna",
                "display_name": "Anna",
                "text": "hello",
                "date": "2024-03-01T10:00:00Z",
                "likes": 3,
                "replies": [
                    {"id": "r1", "user_id": "@bob", "text": "hi", "date": "2024-03-01T11:00:00.123456"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(c.id, CommentId(String::from("c1")));
        assert_eq!(c.date, Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()));
        assert_eq!(c.likes, 3);
        assert_eq!(c.avatar_url, None);
        assert_eq!(c.replies.len(), 1);
        assert_eq!(c.replies[0].likes, 0);
        assert!(c.replies[0].date.is_some());
    }

    #[test]
    fn unparseable_date_is_dropped() {
        let r: Reply = serde_json::from_str(
            r#"{"id": "r1", "user_id": "@bob", "text": "hi", "date": "yesterday-ish"}"#,
        )
        .unwrap();
        assert_eq!(r.date, None);

        let r: Reply =
            serde_json::from_str(r#"{"id": "r1", "user_id": "@bob", "text": "hi"}"#).unwrap();
        assert_eq!(r.date, None);
    }
}
