mod app;
pub use app::{App, AppMsg, AppProps};

mod category_bar;
pub use category_bar::CategoryBar;

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::CommentItem;

mod login_modal;
pub use login_modal::LoginModal;

mod qa_section;
pub use qa_section::QaSection;

mod reply_form;
pub use reply_form::ReplyForm;

mod search_bar;
pub use search_bar::SearchBar;

pub mod sidebar;
pub use sidebar::Sidebar;

mod status_banner;
pub use status_banner::StatusBanner;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

mod user_menu;
pub use user_menu::UserMenu;

mod video_card;
pub use video_card::VideoCardItem;

mod video_feed;
pub use video_feed::VideoFeed;
