use crate::{
    api::{nav, Video, Views},
    Locale,
};

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// What a video card of the feed displays
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VideoCard {
    pub href: String,
    pub thumbnail: String,
    pub title: String,
    pub duration: String,
    pub views: String,
    pub uploaded: String,
    pub channel: String,
}

impl VideoCard {
    pub fn new(v: &Video, locale: Locale) -> VideoCard {
        let msgs = locale.messages();
        let views = non_empty(&v.views_formatted)
            .map(String::from)
            .or_else(|| match &v.views {
                None | Some(Views::Count(0)) => None,
                Some(Views::Text(t)) if t.is_empty() => None,
                Some(views) => Some(views.to_string()),
            })
            .unwrap_or_else(|| String::from(msgs.zero_views));
        let uploaded = non_empty(&v.upload_date_formatted)
            .map(String::from)
            .or_else(|| non_empty(&v.upload_date).map(|d| d.chars().take(10).collect()))
            .unwrap_or_else(|| String::from(msgs.recently));
        VideoCard {
            href: nav::video(&v.key()),
            thumbnail: String::from(
                non_empty(&v.thumbnail_url).unwrap_or(nav::PLACEHOLDER_THUMBNAIL),
            ),
            title: v.title.clone(),
            duration: String::from(non_empty(&v.duration).unwrap_or("00:00")),
            views,
            uploaded,
            channel: channel_name(v),
        }
    }
}

pub fn channel_name(v: &Video) -> String {
    String::from(
        non_empty(&v.display_name)
            .or_else(|| non_empty(&v.channel))
            .unwrap_or(&v.user_id.0),
    )
}
