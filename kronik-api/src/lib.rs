use chrono::Utc;

pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{Comment, CommentId, Reply, ReplyId};

mod error;
pub use error::Error;

pub mod nav;

mod submit;
pub use submit::{AddCommentResponse, AddReplyResponse, NewComment, NewReply, Verdict};

mod theme;
pub use theme::Theme;

mod user;
pub use user::{User, UserId};

mod video;
pub use video::{Video, VideoId, VideoKey, VideoPage, Views};
