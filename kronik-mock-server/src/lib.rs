use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;
use chrono::Utc;
use kronik_client::{
    api::{
        self, AddCommentResponse, AddReplyResponse, CommentId, NewComment, NewReply, ReplyId,
        User, Video, VideoPage,
    },
    Backend, SubmitControl, TransportError,
};

#[cfg(test)]
mod scenarios;

/// How the mock server answers submissions
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Online,
    /// Requests never reach the server
    Offline,
    /// Submissions are refused, with this explanation if any
    Rejecting(Option<String>),
    /// Every request answers with this HTTP status
    Status(u16),
    /// Response bodies cannot be decoded
    Garbled,
    /// Claims success without sending the record back
    Incomplete,
}

#[derive(Debug)]
struct State {
    mode: Mode,
    user: User,
    videos: Vec<Video>,
    comments: Vec<api::Comment>,
    calls: usize,
    watched: Option<Rc<SubmitControl>>,
    busy_during_calls: Vec<bool>,
}

/// In-memory stand-in for the site's API, acting on behalf of `user`
#[derive(Debug)]
pub struct MockServer(RefCell<State>);

impl MockServer {
    pub fn new(user: User) -> MockServer {
        MockServer(RefCell::new(State {
            mode: Mode::Online,
            user,
            videos: Vec::new(),
            comments: Vec::new(),
            calls: 0,
            watched: None,
            busy_during_calls: Vec::new(),
        }))
    }

    pub fn test_set_mode(&self, mode: Mode) {
        self.0.borrow_mut().mode = mode;
    }

    pub fn test_add_videos(&self, videos: impl IntoIterator<Item = Video>) {
        self.0.borrow_mut().videos.extend(videos);
    }

    pub fn test_add_comment(&self, c: api::Comment) {
        self.0.borrow_mut().comments.push(c);
    }

    /// Return the number of requests received so far, whatever the mode
    pub fn test_num_calls(&self) -> usize {
        self.0.borrow().calls
    }

    /// Return the comments stored so far, in storage order
    pub fn test_comments(&self) -> Vec<api::Comment> {
        self.0.borrow().comments.clone()
    }

    /// Record whether `control` is busy each time a request arrives
    pub fn test_watch(&self, control: Rc<SubmitControl>) {
        self.0.borrow_mut().watched = Some(control);
    }

    /// Return, for each request received while watching, whether the
    /// watched control was busy
    pub fn test_busy_during_calls(&self) -> Vec<bool> {
        self.0.borrow().busy_during_calls.clone()
    }

    // Counts the request and fails it the way the current mode says
    fn receive(&self) -> Result<Mode, TransportError> {
        let mut s = self.0.borrow_mut();
        s.calls += 1;
        if let Some(busy) = s.watched.as_ref().map(|c| c.is_busy()) {
            s.busy_during_calls.push(busy);
        }
        match &s.mode {
            Mode::Offline => Err(TransportError::Unreachable(String::from(
                "connection refused",
            ))),
            Mode::Status(code) => Err(TransportError::Status(*code)),
            Mode::Garbled => Err(TransportError::Decode(String::from(
                "expected value at line 1 column 1",
            ))),
            mode => Ok(mode.clone()),
        }
    }

    fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[async_trait(?Send)]
impl Backend for MockServer {
    async fn list_videos(&self, offset: usize, limit: usize) -> Result<VideoPage, TransportError> {
        self.receive()?;
        let s = self.0.borrow();
        Ok(VideoPage {
            success: true,
            videos: s.videos.iter().skip(offset).take(limit).cloned().collect(),
            total: Some(s.videos.len()),
        })
    }

    async fn add_comment(&self, c: &NewComment) -> Result<AddCommentResponse, TransportError> {
        match self.receive()? {
            Mode::Rejecting(error) => Ok(AddCommentResponse {
                success: false,
                comment: None,
                error,
            }),
            Mode::Incomplete => Ok(AddCommentResponse {
                success: true,
                comment: None,
                error: None,
            }),
            _ => {
                let mut s = self.0.borrow_mut();
                let comment = api::Comment {
                    id: CommentId(Self::new_id()),
                    user_id: s.user.id.clone(),
                    display_name: Some(s.user.display_name.clone()),
                    avatar_url: s.user.avatar_url.clone(),
                    text: c.text.clone(),
                    date: Some(Utc::now()),
                    likes: 0,
                    replies: Vec::new(),
                };
                s.comments.push(comment.clone());
                Ok(AddCommentResponse {
                    success: true,
                    comment: Some(comment),
                    error: None,
                })
            }
        }
    }

    async fn add_reply(&self, r: &NewReply) -> Result<AddReplyResponse, TransportError> {
        let rejected = |error| AddReplyResponse {
            success: false,
            reply: None,
            error,
        };
        match self.receive()? {
            Mode::Rejecting(error) => Ok(rejected(error)),
            Mode::Incomplete => Ok(AddReplyResponse {
                success: true,
                reply: None,
                error: None,
            }),
            _ => {
                let mut s = self.0.borrow_mut();
                let reply = api::Reply {
                    id: ReplyId(Self::new_id()),
                    user_id: s.user.id.clone(),
                    display_name: Some(s.user.display_name.clone()),
                    avatar_url: s.user.avatar_url.clone(),
                    text: r.text.clone(),
                    date: Some(Utc::now()),
                    likes: 0,
                };
                match s.comments.iter_mut().find(|c| c.id == r.comment_id) {
                    None => Ok(rejected(Some(String::from("Comment not found")))),
                    Some(c) => {
                        c.replies.push(reply.clone());
                        Ok(AddReplyResponse {
                            success: true,
                            reply: Some(reply),
                            error: None,
                        })
                    }
                }
            }
        }
    }
}
