use std::rc::Rc;

use kronik_client::{
    api::{Video, VideoPage},
    Backend, Category, Debouncer, FeedState, HttpBackend, PageContext, TransportError, VideoCard,
};
use yew::prelude::*;

use crate::{ui, util};

// Cards of one page appear one after the other, this far apart
const CARD_DELAY_STEP_MS: usize = 50;

#[derive(Clone, PartialEq, Properties)]
pub struct VideoFeedProps {
    pub page: Rc<PageContext>,
    /// Called with every video loaded so far, after each page
    pub on_loaded: Callback<Rc<Vec<Video>>>,
}

pub enum VideoFeedMsg {
    Load,
    Loaded(Result<VideoPage, TransportError>),
    Scrolled,
    ScrollSettled(u64),
    SelectCategory(Category),
}

pub struct VideoFeed {
    feed: FeedState,
    backend: Rc<HttpBackend>,
    scroll: Debouncer,
    grid: NodeRef,
    _on_scroll: util::Listener,
}

impl VideoFeed {
    fn last_card_bottom(&self) -> Option<f64> {
        let grid = self.grid.cast::<web_sys::Element>()?;
        let last = grid.last_element_child()?;
        Some(last.get_bounding_client_rect().bottom())
    }
}

impl Component for VideoFeed {
    type Message = VideoFeedMsg;
    type Properties = VideoFeedProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page = &ctx.props().page;
        let on_scroll = {
            let link = ctx.link().clone();
            util::Listener::on_window("scroll", move |_| link.send_message(VideoFeedMsg::Scrolled))
        };
        ctx.link().send_message(VideoFeedMsg::Load);
        VideoFeed {
            feed: FeedState::new(page.settings.page_size),
            backend: crate::api::backend(page),
            scroll: Debouncer::default(),
            grid: NodeRef::default(),
            _on_scroll: on_scroll,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let settings = &ctx.props().page.settings;
        match msg {
            VideoFeedMsg::Load => {
                let offset = match self.feed.begin_load() {
                    Some(o) => o,
                    None => return false,
                };
                let backend = self.backend.clone();
                let limit = self.feed.page_size();
                ctx.link().send_future(async move {
                    VideoFeedMsg::Loaded(backend.list_videos(offset, limit).await)
                });
                true
            }
            VideoFeedMsg::Loaded(Ok(page)) => {
                self.feed.apply_page(page);
                ctx.props()
                    .on_loaded
                    .emit(Rc::new(self.feed.videos().to_vec()));
                true
            }
            VideoFeedMsg::Loaded(Err(e)) => {
                tracing::error!(err = %e, "failed loading videos");
                self.feed.load_failed();
                true
            }
            VideoFeedMsg::Scrolled => {
                let generation = self.scroll.bump();
                let delay = settings.scroll_debounce();
                ctx.link().send_future(async move {
                    util::sleep(delay).await;
                    VideoFeedMsg::ScrollSettled(generation)
                });
                false
            }
            VideoFeedMsg::ScrollSettled(generation) => {
                if !self.scroll.is_current(generation) || self.feed.is_loading() {
                    return false;
                }
                let bottom = match self.last_card_bottom() {
                    Some(b) => b,
                    None => return false,
                };
                if kronik_client::should_load_more(
                    bottom,
                    util::viewport_height(),
                    settings.scroll_trigger_offset_px,
                ) {
                    ctx.link().send_message(VideoFeedMsg::Load);
                }
                false
            }
            VideoFeedMsg::SelectCategory(c) => {
                if c == self.feed.selected() && c != Category::All {
                    return false;
                }
                self.feed.select(c, &mut rand::thread_rng());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let settings = &ctx.props().page.settings;
        let msgs = settings.locale.messages();
        if self.feed.is_empty() {
            return html! {
                <div class="empty-state">
                    <h3>{ msgs.no_videos_title }</h3>
                    <p>{ msgs.no_videos_body }</p>
                </div>
            };
        }
        let selected = self.feed.selected();
        let content = match (&selected, self.feed.category_is_empty()) {
            (Category::Named(name), true) => html! {
                <div class="empty-state">
                    <h3>{ format!("{} \"{}\"", msgs.no_category_videos_title, name) }</h3>
                    <p>{ msgs.no_category_videos_body }</p>
                </div>
            },
            _ => {
                let cards = self.feed.visible().iter().enumerate().map(|(i, v)| {
                    let delay_ms = (i % self.feed.page_size().max(1)) * CARD_DELAY_STEP_MS;
                    html! {
                        <ui::VideoCardItem card={ VideoCard::new(v, settings.locale) } { delay_ms } />
                    }
                });
                html! { <div class="video-grid" ref={ self.grid.clone() }>{ for cards }</div> }
            }
        };
        let spinner = self.feed.is_loading().then(|| html! {
            <div class="loading-indicator">
                <div class="spinner" role="status"></div>
                <span>{ msgs.loading }</span>
            </div>
        });
        html! {
            <>
                <ui::CategoryBar
                    categories={ self.feed.categories() }
                    { selected }
                    locale={ settings.locale }
                    on_select={ ctx.link().callback(VideoFeedMsg::SelectCategory) }
                />
                { content }
                { for spinner }
            </>
        }
    }
}
