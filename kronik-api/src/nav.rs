//! Paths the front-end requests or navigates to

use url::form_urlencoded;

use crate::VideoKey;

pub const ADD_COMMENT: &str = "/api/add-comment/";
pub const ADD_REPLY: &str = "/api/add-reply/";
pub const REGISTER: &str = "/register/";
pub const HOME: &str = "/";
pub const STUDIO: &str = "/studio/";
pub const LOGOUT: &str = "/logout/";
pub const PLACEHOLDER_THUMBNAIL: &str = "/static/placeholder.jpg";

pub fn list_videos(offset: usize, limit: usize) -> String {
    format!("/api/list-videos/?offset={offset}&limit={limit}")
}

pub fn video(key: &VideoKey) -> String {
    format!("/video/{key}/")
}

pub fn search(query: &str) -> String {
    format!("/search?query={}", encode(query))
}

/// Login page that sends the visitor back to `next` afterwards
pub fn login(next: &str) -> String {
    format!("/login/?next={}", encode(next))
}

fn encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
