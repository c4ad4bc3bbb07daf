use std::rc::Rc;

use kronik_client::{
    api::{nav, Video},
    PageContext, PageKind,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    pub page: Rc<PageContext>,
}

pub enum AppMsg {
    ToggleSidebar,
    ToggleMobileMenu,
    CloseMobileMenu,
    SelectMenuItem(usize),
    VideosLoaded(Rc<Vec<Video>>),
}

pub struct App {
    sidebar_collapsed: bool,
    mobile_menu_shown: bool,
    active_menu_item: usize,
    // what the search bar looks through
    videos: Rc<Vec<Video>>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            sidebar_collapsed: false,
            mobile_menu_shown: false,
            active_menu_item: 0,
            videos: Rc::new(Vec::new()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ToggleSidebar => self.sidebar_collapsed = !self.sidebar_collapsed,
            AppMsg::ToggleMobileMenu => self.mobile_menu_shown = !self.mobile_menu_shown,
            AppMsg::CloseMobileMenu => self.mobile_menu_shown = false,
            AppMsg::SelectMenuItem(i) => {
                self.active_menu_item = i;
                if let Some(href) = ui::sidebar::MENU.get(i).and_then(|m| m.href) {
                    util::navigate(href);
                }
            }
            AppMsg::VideosLoaded(videos) => self.videos = videos,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = &ctx.props().page;
        let locale = page.settings.locale;
        let main = match (page.kind, &page.video) {
            (PageKind::Feed, _) => html! {
                <ui::VideoFeed
                    page={ page.clone() }
                    on_loaded={ ctx.link().callback(AppMsg::VideosLoaded) }
                />
            },
            (PageKind::Video, Some(video)) => html! {
                <ui::QaSection page={ page.clone() } video={ video.clone() } />
            },
            (PageKind::Video, None) => {
                tracing::error!("video page without a video");
                html! {}
            }
        };
        html! {
            <>
                <header class="header">
                    <button
                        type="button"
                        class="mobile-menu-button"
                        aria-label="Menu"
                        onclick={ ctx.link().callback(|_| AppMsg::ToggleMobileMenu) }
                    >
                    </button>
                    <button
                        type="button"
                        id="sidebar-toggle"
                        aria-label="Menu"
                        onclick={ ctx.link().callback(|_| AppMsg::ToggleSidebar) }
                    >
                    </button>
                    <a class="logo" href={ nav::HOME }>{ "Kronik" }</a>
                    <ui::SearchBar
                        videos={ self.videos.clone() }
                        settings={ page.settings.clone() }
                    />
                    <ui::ThemeToggle settings={ page.settings.clone() } />
                    <ui::UserMenu viewer={ page.viewer.clone() } { locale } />
                </header>
                <ui::Sidebar
                    collapsed={ self.sidebar_collapsed }
                    mobile_shown={ self.mobile_menu_shown }
                    active={ self.active_menu_item }
                    { locale }
                    on_select={ ctx.link().callback(AppMsg::SelectMenuItem) }
                />
                <div
                    class={ classes!("overlay", self.mobile_menu_shown.then(|| "show")) }
                    onclick={ ctx.link().callback(|_| AppMsg::CloseMobileMenu) }
                >
                </div>
                <main class={ classes!("main-container", self.sidebar_collapsed.then(|| "expanded")) }>
                    { main }
                </main>
            </>
        }
    }
}
