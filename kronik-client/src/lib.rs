mod age;
pub use age::relative_age;

mod card;
pub use card::{channel_name, VideoCard};

mod debounce;
pub use debounce::Debouncer;

mod feed;
pub use feed::{should_load_more, Category, FeedState};

mod gateway;
pub use gateway::{
    Backend, Gateway, Outcome, PendingComment, PendingReply, SubmitControl, SubmitError,
    SubmitGuard, TransportError,
};
pub use gateway::is_synthesized_id;

mod http;
pub use http::HttpBackend;

mod locale;
pub use locale::{Locale, Messages, Plural, Unit};

mod login_prompt;
pub use login_prompt::{LoginPrompt, Viewer};

mod page;
pub use page::{PageContext, PageKind};

mod qa;
pub use qa::{QaSession, ReplyTicket};

mod reply_form;
pub use reply_form::ReplyForms;

mod search;
pub use search::{search_videos, Suggestions};

mod settings;
pub use settings::Settings;

mod status;
pub use status::{StatusBoard, StatusKind, StatusMessage};

mod theme;
pub use theme::ThemeState;

mod thread;
pub use thread::{Author, Comment, EntryKey, LikeTarget, Likes, Reply, ThreadStore};

mod view;
pub use view::{is_video_author, Avatar, EntryView};

pub mod api {
    pub use kronik_api::*;
}
