use std::collections::BTreeSet;

use rand::{seq::SliceRandom, Rng};

use crate::api::{Video, VideoPage};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Category {
    All,
    /// Lowercased chip label
    Named(String),
}

impl Category {
    pub fn from_chip(label: &str) -> Category {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "все" | "all" => Category::All,
            _ => Category::Named(label),
        }
    }

    pub fn matches(&self, v: &Video) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => v
                .category
                .as_ref()
                .map(|c| c.to_lowercase().contains(name.as_str()))
                .unwrap_or(false),
        }
    }
}

/// Videos of the home page, fetched page by page as the visitor scrolls
#[derive(Clone, Debug)]
pub struct FeedState {
    videos: Vec<Video>,
    page_size: usize,
    offset: usize,
    total: Option<usize>,
    loading: bool,
    loaded_once: bool,
    // set while a category other than "all" is selected
    filtered: Option<(Category, Vec<Video>)>,
}

impl FeedState {
    pub fn new(page_size: usize) -> FeedState {
        FeedState {
            videos: Vec::new(),
            page_size,
            offset: 0,
            total: None,
            loading: false,
            loaded_once: false,
            filtered: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// All loaded videos, whatever the selected category
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Returns the offset to fetch from, or None if no page should be
    /// requested now
    pub fn begin_load(&mut self) -> Option<usize> {
        if self.loading || self.filtered.is_some() {
            return None;
        }
        if matches!(self.total, Some(total) if self.offset >= total) {
            return None;
        }
        self.loading = true;
        tracing::debug!(offset = self.offset, limit = self.page_size, "loading videos");
        Some(self.offset)
    }

    pub fn apply_page(&mut self, page: VideoPage) {
        self.loading = false;
        if !page.success {
            tracing::error!("server returned no videos");
            return;
        }
        self.loaded_once = true;
        self.offset += page.videos.len();
        self.videos.extend(page.videos);
        self.total = Some(
            page.total
                .filter(|t| *t > 0)
                .unwrap_or(self.videos.len()),
        );
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn reset(&mut self) {
        *self = FeedState::new(self.page_size);
    }

    /// Whether the "no videos yet" placeholder should be shown
    pub fn is_empty(&self) -> bool {
        self.loaded_once && self.videos.is_empty()
    }

    /// Whether the selected category has nothing to show
    pub fn category_is_empty(&self) -> bool {
        matches!(&self.filtered, Some((_, v)) if v.is_empty())
    }

    pub fn selected(&self) -> Category {
        match &self.filtered {
            None => Category::All,
            Some((c, _)) => c.clone(),
        }
    }

    /// Distinct categories of the loaded videos, as lowercased chip labels
    pub fn categories(&self) -> Vec<String> {
        self.videos
            .iter()
            .filter_map(|v| v.category.as_ref())
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Selecting a named category shows at most one page of shuffled
    /// matches and stops loading further pages until "all" is selected again
    pub fn select<R: Rng + ?Sized>(&mut self, category: Category, rng: &mut R) {
        tracing::debug!(?category, "selecting category");
        match category {
            Category::All => {
                self.filtered = None;
                self.videos.shuffle(rng);
            }
            named => {
                let mut matching = self
                    .videos
                    .iter()
                    .filter(|v| named.matches(v))
                    .cloned()
                    .collect::<Vec<_>>();
                matching.shuffle(rng);
                matching.truncate(self.page_size);
                self.filtered = Some((named, matching));
            }
        }
    }

    pub fn visible(&self) -> &[Video] {
        match &self.filtered {
            None => &self.videos,
            Some((_, v)) => v,
        }
    }
}

/// Whether the last card is close enough to the bottom of the viewport for
/// the next page to be requested
pub fn should_load_more(last_card_bottom: f64, viewport_height: f64, trigger_offset: f64) -> bool {
    last_card_bottom <= viewport_height + trigger_offset
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::api::{UserId, VideoId};

    fn video(id: &str, category: Option<&str>) -> Video {
        Video {
            user_id: UserId(String::from("anna")),
            video_id: VideoId(String::from(id)),
            title: format!("Video {id}"),
            thumbnail_url: None,
            duration: None,
            views: None,
            views_formatted: None,
            upload_date: None,
            upload_date_formatted: None,
            display_name: None,
            channel: None,
            category: category.map(String::from),
        }
    }

    fn page(ids: std::ops::Range<usize>, total: Option<usize>) -> VideoPage {
        VideoPage {
            success: true,
            videos: ids.map(|i| video(&format!("v{i}"), None)).collect(),
            total,
        }
    }

    #[test]
    fn pages_until_total() {
        let mut f = FeedState::new(20);
        assert_eq!(f.begin_load(), Some(0));
        // only one request at a time
        assert_eq!(f.begin_load(), None);
        f.apply_page(page(0..20, Some(30)));
        assert_eq!(f.videos().len(), 20);

        assert_eq!(f.begin_load(), Some(20));
        f.apply_page(page(20..30, Some(30)));
        assert_eq!(f.begin_load(), None);
        assert!(!f.is_loading());
    }

    #[test]
    fn missing_total_means_everything_is_loaded() {
        let mut f = FeedState::new(20);
        f.begin_load();
        f.apply_page(page(0..5, None));
        assert_eq!(f.begin_load(), None);

        let mut f = FeedState::new(20);
        f.begin_load();
        f.apply_page(page(0..5, Some(0)));
        assert_eq!(f.begin_load(), None);
    }

    #[test]
    fn failure_allows_retry() {
        let mut f = FeedState::new(20);
        f.begin_load();
        f.load_failed();
        assert!(!f.is_empty());
        assert_eq!(f.begin_load(), Some(0));
        f.apply_page(VideoPage {
            success: false,
            videos: Vec::new(),
            total: None,
        });
        assert!(!f.is_empty());
        assert_eq!(f.begin_load(), Some(0));
    }

    #[test]
    fn empty_state_after_first_page() {
        let mut f = FeedState::new(20);
        assert!(!f.is_empty());
        f.begin_load();
        f.apply_page(page(0..0, Some(0)));
        assert!(f.is_empty());
        f.reset();
        assert!(!f.is_empty());
        assert_eq!(f.begin_load(), Some(0));
    }

    #[test]
    fn categories_filter_and_shuffle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut f = FeedState::new(2);
        f.begin_load();
        f.apply_page(VideoPage {
            success: true,
            videos: vec![
                video("a", Some("Music")),
                video("b", Some("Гейминг")),
                video("c", Some("music live")),
                video("d", None),
                video("e", Some("MUSIC")),
            ],
            total: Some(50),
        });
        assert_eq!(f.categories(), vec!["music", "music live", "гейминг"]);

        f.select(Category::from_chip("Music"), &mut rng);
        assert_eq!(f.selected(), Category::Named(String::from("music")));
        assert_eq!(f.visible().len(), 2);
        assert!(f.visible().iter().all(|v| Category::from_chip("music").matches(v)));
        assert_eq!(f.begin_load(), None);

        f.select(Category::from_chip("Спорт"), &mut rng);
        assert!(f.category_is_empty());

        f.select(Category::from_chip("Все"), &mut rng);
        assert_eq!(f.selected(), Category::All);
        assert_eq!(f.visible().len(), 5);
        assert_eq!(f.begin_load(), Some(5));
    }

    #[test]
    fn scroll_trigger() {
        assert!(should_load_more(900., 800., 200.));
        assert!(should_load_more(1000., 800., 200.));
        assert!(!should_load_more(1000.5, 800., 200.));
    }
}
