use std::{collections::HashMap, rc::Rc};

use crate::{
    api::{self, UserId, VideoKey},
    Backend, Comment, EntryKey, Gateway, LikeTarget, Likes, Locale, LoginPrompt, Outcome,
    PendingComment, PendingReply, Reply, ReplyForms, StatusBoard, StatusKind, SubmitControl,
    SubmitError, ThreadStore, Viewer,
};

/// State of the question & answer section of one video page.
///
/// Submissions are split in two so that the busy state is taken before any
/// await point: `begin_*` validates the input and marks the control busy,
/// the caller sends the returned pending submission through the gateway,
/// and feeds the result back to `finish_*`.
#[derive(Debug)]
pub struct QaSession {
    viewer: Viewer,
    video: VideoKey,
    locale: Locale,
    thread: ThreadStore,
    forms: ReplyForms,
    login: LoginPrompt,
    status: StatusBoard,
    composer: String,
    comment_control: Rc<SubmitControl>,
    reply_controls: HashMap<EntryKey, Rc<SubmitControl>>,
}

/// Names the form a reply was sent from, to be handed back to
/// `QaSession::finish_reply`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReplyTicket {
    pub parent: EntryKey,
    opening: u64,
}

impl QaSession {
    pub fn new(
        viewer: Viewer,
        video: VideoKey,
        comments: Vec<api::Comment>,
        locale: Locale,
    ) -> QaSession {
        QaSession {
            viewer,
            video,
            locale,
            thread: ThreadStore::new(comments),
            forms: ReplyForms::default(),
            login: LoginPrompt::default(),
            status: StatusBoard::default(),
            composer: String::new(),
            comment_control: Rc::new(SubmitControl::default()),
            reply_controls: HashMap::new(),
        }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn video(&self) -> &VideoKey {
        &self.video
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn thread(&self) -> &ThreadStore {
        &self.thread
    }

    pub fn forms(&self) -> &ReplyForms {
        &self.forms
    }

    pub fn login(&self) -> &LoginPrompt {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginPrompt {
        &mut self.login
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusBoard {
        &mut self.status
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn is_video_author(&self, user: &UserId) -> bool {
        crate::view::is_video_author(user, &self.video)
    }

    pub fn comment_busy(&self) -> bool {
        self.comment_control.is_busy()
    }

    pub fn reply_busy(&self, parent: EntryKey) -> bool {
        self.reply_controls
            .get(&parent)
            .map(|c| c.is_busy())
            .unwrap_or(false)
    }

    // Opens the login prompt for anonymous visitors, returning whether the
    // visitor may go on
    fn require_member(&mut self) -> bool {
        if self.viewer.is_authenticated() {
            return true;
        }
        self.login.open();
        false
    }

    /// Returns whether the visitor may type a comment
    pub fn input_clicked(&mut self) -> bool {
        self.require_member()
    }

    /// Likes are only ever kept locally
    pub fn like_clicked(&mut self, target: &LikeTarget) -> Option<Likes> {
        if !self.require_member() {
            return None;
        }
        self.thread.toggle_like(target)
    }

    /// Returns whether the form under `parent` is now visible. Does nothing
    /// for anonymous visitors.
    pub fn reply_clicked(&mut self, parent: EntryKey) -> bool {
        if !self.viewer.is_authenticated() {
            return false;
        }
        self.forms.toggle(parent)
    }

    pub fn reply_cancelled(&mut self, parent: EntryKey) {
        self.forms.hide(parent);
    }

    pub fn set_composer(&mut self, text: String) {
        self.composer = text;
    }

    pub fn set_reply_draft(&mut self, parent: EntryKey, text: String) {
        self.forms.set_draft(parent, text);
    }

    /// Returns None when there is nothing to send, or when the comment
    /// control is already busy
    pub fn begin_comment<B: Backend>(&mut self, gw: &Gateway<B>) -> Option<PendingComment> {
        if !self.require_member() {
            return None;
        }
        match gw.prepare_comment(&self.comment_control, &self.composer) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::debug!(err = %e, "not sending comment");
                None
            }
        }
    }

    /// Returns the id of the status message shown, if any
    pub fn finish_comment(&mut self, res: Result<Outcome<Comment>, SubmitError>) -> Option<u64> {
        let msgs = self.locale.messages();
        let (kind, text) = match res {
            Ok(outcome) => {
                let kind = match outcome.is_synthesized() {
                    true => (StatusKind::Info, String::from(msgs.comment_added_offline)),
                    false => (StatusKind::Success, String::from(msgs.comment_added)),
                };
                self.composer.clear();
                self.thread.insert_top(outcome.into_record());
                kind
            }
            Err(SubmitError::Rejected(msg)) => (
                StatusKind::Error,
                msg.unwrap_or_else(|| String::from(msgs.comment_rejected)),
            ),
            Err(SubmitError::Failed(_)) => (StatusKind::Error, String::from(msgs.comment_failed)),
            Err(SubmitError::Empty | SubmitError::Busy) => return None,
        };
        Some(self.status.push(kind, text))
    }

    /// Returns None when the form under `parent` is hidden or empty, or
    /// when its control is already busy
    pub fn begin_reply<B: Backend>(
        &mut self,
        gw: &Gateway<B>,
        parent: EntryKey,
    ) -> Option<(ReplyTicket, PendingReply)> {
        if !self.viewer.is_authenticated() {
            return None;
        }
        let opening = self.forms.opening(parent)?;
        let id = &self.thread.get(parent)?.id;
        let control = self.reply_controls.entry(parent).or_default();
        match gw.prepare_reply(control, id, self.forms.draft(parent)) {
            Ok(p) => Some((ReplyTicket { parent, opening }, p)),
            Err(e) => {
                tracing::debug!(err = %e, %parent, "not sending reply");
                None
            }
        }
    }

    /// The form the reply was sent from is hidden on success, unless it was
    /// closed in the meantime
    pub fn finish_reply(
        &mut self,
        ticket: ReplyTicket,
        res: Result<Outcome<Reply>, SubmitError>,
    ) -> Option<u64> {
        let msgs = self.locale.messages();
        let (kind, text) = match res {
            Ok(outcome) => {
                let kind = match outcome.is_synthesized() {
                    true => (StatusKind::Info, String::from(msgs.reply_added_offline)),
                    false => (StatusKind::Success, String::from(msgs.reply_added)),
                };
                self.forms.hide_opening(ticket.parent, ticket.opening);
                self.thread.append_reply(ticket.parent, outcome.into_record());
                kind
            }
            Err(SubmitError::Rejected(msg)) => (
                StatusKind::Error,
                msg.unwrap_or_else(|| String::from(msgs.reply_rejected)),
            ),
            Err(SubmitError::Failed(_)) => (StatusKind::Error, String::from(msgs.reply_failed)),
            Err(SubmitError::Empty | SubmitError::Busy) => return None,
        };
        Some(self.status.push(kind, text))
    }
}
