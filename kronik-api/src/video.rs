use std::str::FromStr;

use crate::{Error, UserId};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

/// Identifies a video across owners, written `<owner>__<video>` on the wire
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoKey {
    pub owner: UserId,
    pub video: VideoId,
}

const KEY_SEPARATOR: &str = "__";

impl VideoKey {
    pub fn new(owner: UserId, video: VideoId) -> VideoKey {
        VideoKey { owner, video }
    }
}

impl std::fmt::Display for VideoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.owner.0, KEY_SEPARATOR, self.video.0)
    }
}

impl FromStr for VideoKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<VideoKey, Error> {
        match s.split_once(KEY_SEPARATOR) {
            Some((owner, video)) if !owner.is_empty() && !video.is_empty() => Ok(VideoKey {
                owner: UserId(String::from(owner)),
                video: VideoId(String::from(video)),
            }),
            _ => Err(Error::InvalidVideoKey(String::from(s))),
        }
    }
}

impl TryFrom<String> for VideoKey {
    type Error = Error;

    fn try_from(s: String) -> Result<VideoKey, Error> {
        s.parse()
    }
}

impl From<VideoKey> for String {
    fn from(k: VideoKey) -> String {
        k.to_string()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Views {
    Count(u64),
    Text(String),
}

impl std::fmt::Display for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Views::Count(n) => write!(f, "{n}"),
            Views::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Video {
    pub user_id: UserId,
    pub video_id: VideoId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub views: Option<Views>,
    #[serde(default)]
    pub views_formatted: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub upload_date_formatted: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Video {
    pub fn key(&self) -> VideoKey {
        VideoKey::new(self.user_id.clone(), self.video_id.clone())
    }
}

/// Response of `GET /api/list-videos/`
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VideoPage {
    pub success: bool,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub total: Option<usize>,
}
