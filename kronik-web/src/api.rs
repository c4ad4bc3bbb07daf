use std::rc::Rc;

use kronik_client::{
    api::{User, UserId, VideoKey},
    Gateway, HttpBackend, PageContext,
};

use crate::util;

pub type WebGateway = Gateway<Rc<HttpBackend>>;

/// The browser sends the session cookie by itself, only the CSRF token is
/// needed
pub fn backend(page: &PageContext) -> Rc<HttpBackend> {
    Rc::new(
        HttpBackend::new(crate::CLIENT.clone(), util::origin())
            .with_csrf_token(page.csrf_token.clone()),
    )
}

// Records kept locally while the server is unreachable are attributed to
// this user
fn me(page: &PageContext) -> User {
    page.viewer.clone().unwrap_or_else(|| User {
        id: UserId::placeholder(),
        display_name: String::from(page.settings.locale.messages().unnamed_user),
        avatar_url: None,
    })
}

pub fn gateway(page: &PageContext, video: VideoKey) -> Rc<WebGateway> {
    Rc::new(Gateway::new(backend(page), video, me(page)))
}
