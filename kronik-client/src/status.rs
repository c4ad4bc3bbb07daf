#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
            StatusKind::Info => "status-info",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub text: String,
    pub fading: bool,
}

/// Transient banners, oldest first. Timers are up to the caller: each
/// message should start fading after its lifetime, then be dismissed once
/// faded out.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusBoard {
    next_id: u64,
    messages: Vec<StatusMessage>,
}

impl StatusBoard {
    pub fn push(&mut self, kind: StatusKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let text = text.into();
        tracing::debug!(id, ?kind, %text, "showing status message");
        self.messages.push(StatusMessage {
            id,
            kind,
            text,
            fading: false,
        });
        id
    }

    /// Returns false if there is no such message
    pub fn start_fading(&mut self, id: u64) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(m) => {
                m.fading = true;
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.messages.retain(|m| m.id != id);
    }

    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lifecycle() {
        let mut b = StatusBoard::default();
        let a = b.push(StatusKind::Success, "saved");
        let e = b.push(StatusKind::Error, "oops");
        assert_ne!(a, e);
        assert_eq!(b.messages().len(), 2);
        assert_eq!(b.messages()[0].text, "saved");

        assert!(b.start_fading(a));
        assert!(b.messages()[0].fading);
        assert!(!b.messages()[1].fading);

        b.dismiss(a);
        assert_eq!(b.messages().len(), 1);
        assert_eq!(b.messages()[0].id, e);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut b = StatusBoard::default();
        let id = b.push(StatusKind::Info, "hello");
        b.dismiss(id);
        assert!(b.is_empty());
        assert!(!b.start_fading(id));
        b.dismiss(id);
        assert!(b.is_empty());
        // ids are never reused
        assert_ne!(b.push(StatusKind::Info, "again"), id);
    }
}
