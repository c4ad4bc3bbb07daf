use std::time::Duration;

use crate::Locale;

/// Tunables of the front-end. Every field may be overridden by the page
/// bootstrap document; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,

    /// Number of videos requested per feed page
    pub page_size: usize,
    pub scroll_debounce_ms: u64,
    /// Load the next page when the last card is this close to the viewport bottom
    pub scroll_trigger_offset_px: f64,

    pub search_debounce_ms: u64,
    pub suggestion_limit: usize,

    pub banner_lifetime_ms: u64,
    pub banner_fade_ms: u64,
    pub login_fade_ms: u64,

    pub theme_switch_delay_ms: u64,
    pub theme_animation_ms: u64,
    pub theme_storage_key: String,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            locale: Locale::default(),
            page_size: 20,
            scroll_debounce_ms: 100,
            scroll_trigger_offset_px: 200.,
            search_debounce_ms: 300,
            suggestion_limit: 5,
            banner_lifetime_ms: 5000,
            banner_fade_ms: 300,
            login_fade_ms: 300,
            theme_switch_delay_ms: 500,
            theme_animation_ms: 1500,
            theme_storage_key: String::from("kronik-theme"),
        }
    }
}

impl Settings {
    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn banner_lifetime(&self) -> Duration {
        Duration::from_millis(self.banner_lifetime_ms)
    }

    pub fn banner_fade(&self) -> Duration {
        Duration::from_millis(self.banner_fade_ms)
    }

    pub fn login_fade(&self) -> Duration {
        Duration::from_millis(self.login_fade_ms)
    }

    pub fn theme_switch_delay(&self) -> Duration {
        Duration::from_millis(self.theme_switch_delay_ms)
    }

    /// Counted from the start of the toggle, not from the swap
    pub fn theme_animation(&self) -> Duration {
        Duration::from_millis(self.theme_animation_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let s: Settings =
            serde_json::from_str(r#"{"locale": "en", "page_size": 12}"#).unwrap();
        assert_eq!(s.locale, Locale::En);
        assert_eq!(s.page_size, 12);
        assert_eq!(s.search_debounce(), Duration::from_millis(300));
        assert_eq!(s.theme_storage_key, "kronik-theme");
    }
}
