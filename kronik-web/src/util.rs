use std::str::FromStr;

use anyhow::Context;
use kronik_client::{api::Theme, PageContext};
use wasm_bindgen::{prelude::*, JsCast};

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let tz = get_timezone();
        chrono_tz::Tz::from_str(&tz).unwrap_or_else(|e| {
            tracing::warn!(%tz, err = %e, "host timezone unknown, falling back to UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

pub fn window() -> web_sys::Window {
    web_sys::window().expect("no window")
}

pub fn document() -> web_sys::Document {
    window().document().expect("no document")
}

pub fn current_path() -> String {
    window()
        .location()
        .pathname()
        .unwrap_or_else(|_| String::from("/"))
}

pub fn origin() -> String {
    window().location().origin().unwrap_or_default()
}

pub fn navigate(href: &str) {
    if let Err(e) = window().location().set_href(href) {
        tracing::error!(?e, %href, "failed to navigate");
    }
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.)
}

pub async fn sleep(d: std::time::Duration) {
    if let Err(e) = wasm_timer::Delay::new(d).await {
        tracing::error!(err = %e, "failed sleeping");
    }
}

/// Reads the document the server embedded in the page
pub fn load_page() -> anyhow::Result<PageContext> {
    let json = document()
        .get_element_by_id("kronik-page")
        .context("page has no #kronik-page element")?
        .text_content()
        .unwrap_or_default();
    PageContext::parse(&json).context("parsing #kronik-page document")
}

pub fn apply_theme(theme: Theme) {
    let body = match document().body() {
        Some(b) => b,
        None => return,
    };
    let classes = body.class_list();
    let res = classes
        .remove_1(theme.toggled().body_class())
        .and_then(|_| classes.add_1(theme.body_class()));
    if let Err(e) = res {
        tracing::error!(?e, "failed setting body theme class");
    }
}

/// Whether `target` is inside the element `node` refers to
pub fn contains(node: &yew::NodeRef, target: Option<web_sys::EventTarget>) -> bool {
    let container = match node.get() {
        Some(c) => c,
        None => return false,
    };
    let target = target.and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    container.contains(target.as_ref())
}

/// Event listener on the document or the window, removed when dropped
pub struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn Fn(web_sys::Event)>,
}

impl Listener {
    fn new<F>(target: web_sys::EventTarget, event: &'static str, f: F) -> Listener
    where
        F: Fn(web_sys::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn Fn(web_sys::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            tracing::error!(?e, %event, "failed adding event listener");
        }
        Listener {
            target,
            event,
            closure,
        }
    }

    pub fn on_document<F: Fn(web_sys::Event) + 'static>(event: &'static str, f: F) -> Listener {
        Listener::new(document().into(), event, f)
    }

    pub fn on_window<F: Fn(web_sys::Event) + 'static>(event: &'static str, f: F) -> Listener {
        Listener::new(window().into(), event, f)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
