use crate::api::Video;

/// Loaded videos whose title, channel or author contain `query`, ignoring case
pub fn search_videos<'a>(query: &str, videos: &'a [Video]) -> Vec<&'a Video> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    let hit = |s: Option<&str>| s.map(|s| s.to_lowercase().contains(&query)).unwrap_or(false);
    videos
        .iter()
        .filter(|v| {
            hit(Some(&v.title))
                || hit(v.display_name.as_deref())
                || hit(v.channel.as_deref())
                || hit(Some(&v.user_id.0))
        })
        .collect()
}

/// Content of the search dropdown
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Suggestions<'a> {
    pub shown: Vec<&'a Video>,
    /// Whether to offer the full results page
    pub has_more: bool,
}

impl<'a> Suggestions<'a> {
    /// None when the dropdown should be hidden
    pub fn compute(query: &str, videos: &'a [Video], limit: usize) -> Option<Suggestions<'a>> {
        let mut shown = search_videos(query, videos);
        if shown.is_empty() {
            return None;
        }
        let has_more = shown.len() > limit;
        shown.truncate(limit);
        Some(Suggestions { shown, has_more })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn videos() -> Vec<Video> {
        serde_json::from_str(
            r#"[
                {"user_id": "anna", "video_id": "v1", "title": "Кошки и собаки"},
                {"user_id": "bob", "video_id": "v2", "title": "Rust", "channel": "Кошачий канал"},
                {"user_id": "cat-lover", "video_id": "v3", "title": "Untitled"},
                {"user_id": "dan", "video_id": "v4", "title": "Dogs", "display_name": "Dan"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let v = videos();
        let ids = |q| {
            search_videos(q, &v)
                .into_iter()
                .map(|v| v.video_id.0.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids("КОШ"), vec!["v1", "v2"]);
        assert_eq!(ids("cat"), vec!["v3"]);
        assert_eq!(ids("dan"), vec!["v4"]);
        assert!(ids("   ").is_empty());
        assert!(search_videos("anna", &[]).is_empty());
    }

    #[test]
    fn dropdown_is_capped() {
        let v = videos();
        let s = Suggestions::compute("a", &v, 2).unwrap();
        assert_eq!(s.shown.len(), 2);
        assert!(s.has_more);

        let s = Suggestions::compute("rust", &v, 5).unwrap();
        assert_eq!(s.shown.len(), 1);
        assert!(!s.has_more);

        assert_eq!(Suggestions::compute("zzz", &v, 5), None);
        assert_eq!(Suggestions::compute("", &v, 5), None);
    }
}
