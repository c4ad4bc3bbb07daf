use crate::EntryKey;

#[derive(Clone, Debug, Eq, PartialEq)]
struct OpenForm {
    parent: EntryKey,
    opening: u64,
    draft: String,
}

/// Reply-composition forms of a thread. At most one is visible at a time,
/// and only the visible one holds a draft: hiding a form clears its input.
///
/// Every opening of a form is numbered, so that a reply sent from a form
/// that has since been closed and reopened does not close the new one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReplyForms {
    openings: u64,
    open: Option<OpenForm>,
}

impl ReplyForms {
    /// Shows the form under `parent`, hiding any other one, or hides it if
    /// it was already shown. Returns whether the form is now visible.
    pub fn toggle(&mut self, parent: EntryKey) -> bool {
        if self.is_visible(parent) {
            self.open = None;
            return false;
        }
        if let Some(f) = &self.open {
            tracing::debug!(closed = %f.parent, opened = %parent, "switching reply form");
        }
        self.openings += 1;
        self.open = Some(OpenForm {
            parent,
            opening: self.openings,
            draft: String::new(),
        });
        true
    }

    /// Hides the form under `parent` if it is the one shown
    pub fn hide(&mut self, parent: EntryKey) {
        if self.is_visible(parent) {
            self.open = None;
        }
    }

    /// Number of the current opening of the form under `parent`, None if
    /// that form is hidden
    pub fn opening(&self, parent: EntryKey) -> Option<u64> {
        match &self.open {
            Some(f) if f.parent == parent => Some(f.opening),
            _ => None,
        }
    }

    /// Hides the form under `parent` only if it has stayed open since
    /// `opening`
    pub fn hide_opening(&mut self, parent: EntryKey, opening: u64) {
        if self.opening(parent) == Some(opening) {
            self.open = None;
        }
    }

    pub fn is_visible(&self, parent: EntryKey) -> bool {
        self.opening(parent).is_some()
    }

    pub fn visible(&self) -> Option<EntryKey> {
        self.open.as_ref().map(|f| f.parent)
    }

    /// Current input of the form under `parent`, empty when hidden
    pub fn draft(&self, parent: EntryKey) -> &str {
        match &self.open {
            Some(f) if f.parent == parent => &f.draft,
            _ => "",
        }
    }

    /// Ignored unless the form under `parent` is the visible one
    pub fn set_draft(&mut self, parent: EntryKey, text: String) {
        if let Some(f) = &mut self.open {
            if f.parent == parent {
                f.draft = text;
            }
        }
    }
}
