use std::{cell::Cell, rc::Rc};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    api::{
        AddCommentResponse, AddReplyResponse, CommentId, NewComment, NewReply, ReplyId, Time,
        User, Verdict, VideoKey, VideoPage,
    },
    Author, Comment, EntryKey, Likes, Reply,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never got an HTTP response
    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error("server answered with HTTP status {0}")]
    Status(u16),

    #[error("failed to decode server response: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("nothing to submit")]
    Empty,

    #[error("a submission is already in flight")]
    Busy,

    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    /// Never `TransportError::Unreachable`, which resolves to a placeholder record
    #[error(transparent)]
    Failed(#[from] TransportError),
}

/// The endpoints the front-end consumes
#[async_trait(?Send)]
pub trait Backend {
    async fn list_videos(&self, offset: usize, limit: usize) -> Result<VideoPage, TransportError>;
    async fn add_comment(&self, c: &NewComment) -> Result<AddCommentResponse, TransportError>;
    async fn add_reply(&self, r: &NewReply) -> Result<AddReplyResponse, TransportError>;
}

#[async_trait(?Send)]
impl<B: Backend + ?Sized> Backend for &B {
    async fn list_videos(&self, offset: usize, limit: usize) -> Result<VideoPage, TransportError> {
        (**self).list_videos(offset, limit).await
    }

    async fn add_comment(&self, c: &NewComment) -> Result<AddCommentResponse, TransportError> {
        (**self).add_comment(c).await
    }

    async fn add_reply(&self, r: &NewReply) -> Result<AddReplyResponse, TransportError> {
        (**self).add_reply(r).await
    }
}

#[async_trait(?Send)]
impl<B: Backend + ?Sized> Backend for Rc<B> {
    async fn list_videos(&self, offset: usize, limit: usize) -> Result<VideoPage, TransportError> {
        (**self).list_videos(offset, limit).await
    }

    async fn add_comment(&self, c: &NewComment) -> Result<AddCommentResponse, TransportError> {
        (**self).add_comment(c).await
    }

    async fn add_reply(&self, r: &NewReply) -> Result<AddReplyResponse, TransportError> {
        (**self).add_reply(r).await
    }
}

/// Busy state of a submit button
#[derive(Debug, Default)]
pub struct SubmitControl {
    busy: Cell<bool>,
}

impl SubmitControl {
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Marks the control busy until the returned guard is dropped, or
    /// returns None if it already is.
    pub fn begin(self: &Rc<Self>) -> Option<SubmitGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(SubmitGuard(self.clone()))
    }
}

#[derive(Debug)]
pub struct SubmitGuard(Rc<SubmitControl>);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.busy.set(false);
    }
}

/// A validated comment, whose control is held busy until it is sent
#[derive(Debug)]
pub struct PendingComment {
    pub text: String,
    guard: SubmitGuard,
}

#[derive(Debug)]
pub struct PendingReply {
    pub parent: CommentId,
    pub text: String,
    guard: SubmitGuard,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome<T> {
    /// Record returned by the server
    Stored(T),
    /// Record made up locally because the server could not be reached
    Synthesized(T),
}

impl<T> Outcome<T> {
    pub fn record(&self) -> &T {
        match self {
            Outcome::Stored(r) | Outcome::Synthesized(r) => r,
        }
    }

    pub fn into_record(self) -> T {
        match self {
            Outcome::Stored(r) | Outcome::Synthesized(r) => r,
        }
    }

    pub fn is_synthesized(&self) -> bool {
        matches!(self, Outcome::Synthesized(_))
    }
}

/// Turns what the visitor typed into records of the thread of one video
pub struct Gateway<B> {
    backend: B,
    video: VideoKey,
    me: User,
}

fn validate(text: &str) -> Result<String, SubmitError> {
    let text = text.trim();
    match text.is_empty() {
        true => Err(SubmitError::Empty),
        false => Ok(String::from(text)),
    }
}

impl<B: Backend> Gateway<B> {
    pub fn new(backend: B, video: VideoKey, me: User) -> Gateway<B> {
        Gateway { backend, video, me }
    }

    pub fn video(&self) -> &VideoKey {
        &self.video
    }

    pub fn me(&self) -> &User {
        &self.me
    }

    /// Checks the comment is worth sending and marks `control` busy. No
    /// request is made and `control` is untouched on error.
    pub fn prepare_comment(
        &self,
        control: &Rc<SubmitControl>,
        text: &str,
    ) -> Result<PendingComment, SubmitError> {
        let text = validate(text)?;
        let guard = control.begin().ok_or(SubmitError::Busy)?;
        Ok(PendingComment { text, guard })
    }

    pub fn prepare_reply(
        &self,
        control: &Rc<SubmitControl>,
        parent: &CommentId,
        text: &str,
    ) -> Result<PendingReply, SubmitError> {
        let text = validate(text)?;
        let guard = control.begin().ok_or(SubmitError::Busy)?;
        Ok(PendingReply {
            parent: parent.clone(),
            text,
            guard,
        })
    }

    pub async fn send_comment(&self, c: PendingComment) -> Result<Outcome<Comment>, SubmitError> {
        let PendingComment { text, guard: _guard } = c;
        let req = NewComment {
            text,
            video_id: self.video.clone(),
        };
        match self.backend.add_comment(&req).await {
            Ok(resp) => match resp.verdict() {
                Verdict::Accepted(c) => {
                    tracing::info!(id = %c.id, video = %self.video, "comment stored");
                    Ok(Outcome::Stored(Comment::from(c)))
                }
                Verdict::Rejected(msg) => {
                    tracing::info!(?msg, "comment rejected by server");
                    Err(SubmitError::Rejected(msg))
                }
                Verdict::Malformed => Err(TransportError::Decode(String::from(
                    "successful comment submission without a comment",
                ))
                .into()),
            },
            Err(TransportError::Unreachable(err)) => {
                tracing::warn!(%err, "server unreachable, keeping comment locally");
                Ok(Outcome::Synthesized(self.synthesize_comment(req.text, Utc::now())))
            }
            Err(err) => {
                tracing::error!(%err, "comment submission failed");
                Err(err.into())
            }
        }
    }

    pub async fn send_reply(&self, r: PendingReply) -> Result<Outcome<Reply>, SubmitError> {
        let PendingReply {
            parent,
            text,
            guard: _guard,
        } = r;
        let req = NewReply {
            text,
            comment_id: parent,
            video_id: self.video.clone(),
        };
        match self.backend.add_reply(&req).await {
            Ok(resp) => match resp.verdict() {
                Verdict::Accepted(r) => {
                    tracing::info!(id = %r.id, parent = %req.comment_id, "reply stored");
                    Ok(Outcome::Stored(Reply::from(r)))
                }
                Verdict::Rejected(msg) => {
                    tracing::info!(?msg, "reply rejected by server");
                    Err(SubmitError::Rejected(msg))
                }
                Verdict::Malformed => Err(TransportError::Decode(String::from(
                    "successful reply submission without a reply",
                ))
                .into()),
            },
            Err(TransportError::Unreachable(err)) => {
                tracing::warn!(%err, "server unreachable, keeping reply locally");
                Ok(Outcome::Synthesized(self.synthesize_reply(req.text, Utc::now())))
            }
            Err(err) => {
                tracing::error!(%err, "reply submission failed");
                Err(err.into())
            }
        }
    }

    pub async fn submit_comment(
        &self,
        control: &Rc<SubmitControl>,
        text: &str,
    ) -> Result<Outcome<Comment>, SubmitError> {
        let c = self.prepare_comment(control, text)?;
        self.send_comment(c).await
    }

    pub async fn submit_reply(
        &self,
        control: &Rc<SubmitControl>,
        parent: &CommentId,
        text: &str,
    ) -> Result<Outcome<Reply>, SubmitError> {
        let r = self.prepare_reply(control, parent, text)?;
        self.send_reply(r).await
    }

    pub async fn list_videos(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<VideoPage, TransportError> {
        self.backend.list_videos(offset, limit).await
    }

    fn synthesize_comment(&self, text: String, now: Time) -> Comment {
        Comment {
            key: EntryKey::default(),
            id: CommentId(format!("mock-{}", now.timestamp_millis())),
            author: Author::from(&self.me),
            text,
            date: Some(now),
            likes: Likes::default(),
            replies: Vec::new(),
        }
    }

    fn synthesize_reply(&self, text: String, now: Time) -> Reply {
        Reply {
            id: ReplyId(format!("mock-reply-{}", now.timestamp_millis())),
            author: Author::from(&self.me),
            text,
            date: Some(now),
            likes: Likes::default(),
        }
    }
}

/// Whether this record was made up locally rather than returned by the server
pub fn is_synthesized_id(id: &str) -> bool {
    id.starts_with("mock-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_is_released_when_guard_drops() {
        let control = Rc::new(SubmitControl::default());
        let guard = control.begin().expect("control starts idle");
        assert!(control.is_busy());
        assert!(control.begin().is_none());
        drop(guard);
        assert!(!control.is_busy());
        assert!(control.begin().is_some());
    }

    #[test]
    fn blank_texts_are_refused() {
        bolero::check!()
            .with_type::<(u8, u8)>()
            .cloned()
            .for_each(|(spaces, newlines)| {
                let text = format!(
                    "{}{}\t",
                    " ".repeat(spaces as usize % 16),
                    "\n".repeat(newlines as usize % 16)
                );
                assert!(matches!(validate(&text), Err(SubmitError::Empty)));
            });
        assert_eq!(validate("  hi \n").unwrap(), "hi");
    }

    #[test]
    fn synthesized_ids() {
        assert!(is_synthesized_id("mock-1700000000000"));
        assert!(is_synthesized_id("mock-reply-1700000000000"));
        assert!(!is_synthesized_id("42"));
    }
}
