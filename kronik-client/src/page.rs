use crate::{
    api::{self, User, VideoKey},
    Settings, Viewer,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Home page, with the infinite video feed
    Feed,
    /// Page of a single video, with its question & answer section
    Video,
}

/// What the server tells the front-end about the page it rendered, as a
/// JSON document embedded in the page
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PageContext {
    pub kind: PageKind,
    #[serde(default)]
    pub video: Option<VideoKey>,
    /// None for anonymous visitors
    #[serde(default)]
    pub viewer: Option<User>,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub comments: Vec<api::Comment>,
    #[serde(default)]
    pub settings: Settings,
}

impl PageContext {
    pub fn parse(json: &str) -> serde_json::Result<PageContext> {
        serde_json::from_str(json)
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from(self.viewer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locale;

    #[test]
    fn anonymous_feed_page() {
        let p = PageContext::parse(r#"{"kind": "feed"}"#).unwrap();
        assert_eq!(p.kind, PageKind::Feed);
        assert_eq!(p.viewer(), Viewer::Anonymous);
        assert!(p.comments.is_empty());
        assert_eq!(p.settings, Settings::default());
    }

    #[test]
    fn video_page() {
        let p = PageContext::parse(
            r#"{
                "kind": "video",
                "video": "anna__v1",
                "viewer": {"id": "bob", "display_name": "Bob"},
                "csrf_token": "tok",
                "comments": [{"id": "c1", "user_id": "bob", "text": "q"}],
                "settings": {"locale": "en", "page_size": 10}
            }"#,
        )
        .unwrap();
        assert_eq!(p.video.unwrap().to_string(), "anna__v1");
        assert!(p.viewer().is_authenticated());
        assert_eq!(p.comments.len(), 1);
        assert_eq!(p.settings.locale, Locale::En);
        assert_eq!(p.settings.page_size, 10);
        assert_eq!(p.settings.search_debounce_ms, 300);
    }

    #[test]
    fn bad_video_key_is_an_error() {
        assert!(PageContext::parse(r#"{"kind": "video", "video": "v1"}"#).is_err());
    }
}
