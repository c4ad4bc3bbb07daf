use crate::api::{nav, User};

/// Who is looking at the page
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Viewer {
    Anonymous,
    Member(User),
}

impl Viewer {
    pub fn user(&self) -> Option<&User> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Member(u) => Some(u),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::Member(_))
    }
}

impl From<Option<User>> for Viewer {
    fn from(u: Option<User>) -> Viewer {
        match u {
            None => Viewer::Anonymous,
            Some(u) => Viewer::Member(u),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum PromptState {
    #[default]
    Closed,
    Open,
    /// Fading out, still in the page
    Closing,
}

/// The overlay asking anonymous visitors to log in
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginPrompt {
    state: PromptState,
}

impl LoginPrompt {
    /// Returns false if an overlay is already in the page
    pub fn open(&mut self) -> bool {
        match self.state {
            PromptState::Closed => {
                tracing::debug!("opening login prompt");
                self.state = PromptState::Open;
                true
            }
            PromptState::Open | PromptState::Closing => false,
        }
    }

    /// Starts the fade-out. Returns true if the caller should schedule
    /// `finish_close` after the fade delay.
    pub fn close(&mut self) -> bool {
        match self.state {
            PromptState::Open => {
                self.state = PromptState::Closing;
                true
            }
            PromptState::Closed | PromptState::Closing => false,
        }
    }

    pub fn finish_close(&mut self) {
        if self.state == PromptState::Closing {
            self.state = PromptState::Closed;
        }
    }

    pub fn is_shown(&self) -> bool {
        self.state != PromptState::Closed
    }

    pub fn is_closing(&self) -> bool {
        self.state == PromptState::Closing
    }

    pub fn login_href(current_path: &str) -> String {
        nav::login(current_path)
    }

    pub fn register_href() -> &'static str {
        nav::REGISTER
    }
}
