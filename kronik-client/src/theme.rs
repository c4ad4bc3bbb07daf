use crate::api::Theme;

/// Theme of the page, and the transition animation while it changes.
///
/// Toggling goes `begin_toggle` (overlay appears, coloured after the target
/// theme), then `swap` after the switch delay, then `end_animation`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ThemeState {
    current: Theme,
    target: Option<Theme>,
    animating: bool,
}

impl ThemeState {
    /// Unknown stored values are ignored
    pub fn load(stored: Option<String>) -> ThemeState {
        let current = match stored.as_deref().map(str::parse::<Theme>) {
            None => Theme::default(),
            Some(Ok(t)) => t,
            Some(Err(e)) => {
                tracing::warn!(err = %e, "ignoring stored theme");
                Theme::default()
            }
        };
        ThemeState {
            current,
            target: None,
            animating: false,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Returns the theme to switch to
    pub fn begin_toggle(&mut self) -> Theme {
        let target = self.current.toggled();
        self.target = Some(target);
        self.animating = true;
        target
    }

    /// Returns the theme to persist, if a toggle was in progress
    pub fn swap(&mut self) -> Option<Theme> {
        let target = self.target.take()?;
        self.current = target;
        Some(target)
    }

    pub fn end_animation(&mut self) {
        self.animating = false;
    }

    pub fn overlay_class(&self) -> String {
        let colour = self.target.unwrap_or(self.current).as_str();
        match self.animating {
            true => format!("theme-transition {colour} animating"),
            false => format!("theme-transition {colour}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_theme_is_applied() {
        assert_eq!(ThemeState::load(Some(String::from("light"))).current(), Theme::Light);
        assert_eq!(ThemeState::load(Some(String::from("dark"))).current(), Theme::Dark);
        assert_eq!(ThemeState::load(Some(String::from("sepia"))).current(), Theme::Dark);
        assert_eq!(ThemeState::load(None).current(), Theme::Dark);
    }

    #[test]
    fn toggle_sequence() {
        let mut t = ThemeState::load(None);
        assert_eq!(t.begin_toggle(), Theme::Light);
        assert_eq!(t.overlay_class(), "theme-transition light animating");
        // not switched before the delay
        assert_eq!(t.current(), Theme::Dark);
        assert_eq!(t.swap(), Some(Theme::Light));
        assert_eq!(t.current(), Theme::Light);
        assert_eq!(t.swap(), None);
        t.end_animation();
        assert!(!t.is_animating());
        assert_eq!(t.overlay_class(), "theme-transition light");
    }
}
