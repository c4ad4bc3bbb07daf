use std::rc::Rc;

mod api;
mod ui;
mod util;

lazy_static::lazy_static! {
    static ref CLIENT: reqwest::Client = reqwest::Client::new();
}

fn main() {
    tracing_wasm::set_as_global_default();

    let page = match util::load_page() {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(err = ?e, "not starting the front-end");
            return;
        }
    };
    tracing::info!(kind = ?page.kind, video = ?page.video, "starting front-end");

    let root = match util::document().get_element_by_id("kronik-root") {
        Some(root) => root,
        None => {
            tracing::error!("page has no #kronik-root element");
            return;
        }
    };
    yew::Renderer::<ui::App>::with_root_and_props(
        root,
        ui::AppProps {
            page: Rc::new(page),
        },
    )
    .render();
}
