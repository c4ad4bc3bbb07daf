use std::rc::Rc;

use kronik_client::{
    api::{nav, Video},
    channel_name, Debouncer, Settings, Suggestions, VideoCard,
};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct SearchBarProps {
    /// Videos already loaded in the page, the only ones suggested
    pub videos: Rc<Vec<Video>>,
    pub settings: Settings,
}

pub enum SearchBarMsg {
    Input(String),
    Settled(u64),
    Focused,
    Submit,
    ClickedOutside,
}

pub struct SearchBar {
    query: String,
    debouncer: Debouncer,
    dropdown_shown: bool,
    container: NodeRef,
    _outside_click: util::Listener,
}

impl Component for SearchBar {
    type Message = SearchBarMsg;
    type Properties = SearchBarProps;

    fn create(ctx: &Context<Self>) -> Self {
        let container = NodeRef::default();
        let outside_click = {
            let container = container.clone();
            let link = ctx.link().clone();
            util::Listener::on_document("click", move |e| {
                if !util::contains(&container, e.target()) {
                    link.send_message(SearchBarMsg::ClickedOutside);
                }
            })
        };
        SearchBar {
            query: String::new(),
            debouncer: Debouncer::default(),
            dropdown_shown: false,
            container,
            _outside_click: outside_click,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SearchBarMsg::Input(q) => {
                self.query = q;
                let generation = self.debouncer.bump();
                if self.query.trim().is_empty() {
                    self.dropdown_shown = false;
                    return true;
                }
                let delay = ctx.props().settings.search_debounce();
                ctx.link().send_future(async move {
                    util::sleep(delay).await;
                    SearchBarMsg::Settled(generation)
                });
                false
            }
            SearchBarMsg::Settled(generation) => {
                if !self.debouncer.is_current(generation) {
                    return false;
                }
                self.dropdown_shown = true;
                true
            }
            SearchBarMsg::Focused => {
                self.dropdown_shown = !self.query.trim().is_empty();
                true
            }
            SearchBarMsg::Submit => {
                if !self.query.trim().is_empty() {
                    util::navigate(&nav::search(&self.query));
                }
                false
            }
            SearchBarMsg::ClickedOutside => {
                let changed = self.dropdown_shown;
                self.dropdown_shown = false;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let settings = &ctx.props().settings;
        let msgs = settings.locale.messages();
        let suggestions = self
            .dropdown_shown
            .then(|| {
                Suggestions::compute(&self.query, &ctx.props().videos, settings.suggestion_limit)
            })
            .flatten();
        let dropdown = match &suggestions {
            None => html! { <div class="search-dropdown"></div> },
            Some(s) => {
                let results = s.shown.iter().map(|v| {
                    let card = VideoCard::new(v, settings.locale);
                    let href = card.href.clone();
                    html! {
                        <div class="search-result" onclick={ Callback::from(move |_: MouseEvent| util::navigate(&href)) }>
                            <div class="search-thumbnail">
                                <img src={ card.thumbnail } alt={ card.title.clone() } loading="lazy" />
                            </div>
                            <div class="search-info">
                                <div class="search-title">{ card.title.clone() }</div>
                                <div class="search-channel">{ channel_name(v) }</div>
                            </div>
                        </div>
                    }
                });
                let more = s.has_more.then(|| html! {
                    <div
                        class="search-more"
                        onclick={ ctx.link().callback(|_| SearchBarMsg::Submit) }
                    >
                        { msgs.show_all_results }
                    </div>
                });
                html! {
                    <div class="search-dropdown show">
                        { for results }
                        { for more }
                    </div>
                }
            }
        };
        html! {
            <div class="search-container" ref={ self.container.clone() }>
                <input
                    id="search-input"
                    type="text"
                    placeholder={ msgs.search_placeholder }
                    value={ self.query.clone() }
                    oninput={ ctx.link().callback(|e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        SearchBarMsg::Input(input.value())
                    }) }
                    onfocus={ ctx.link().callback(|_: FocusEvent| SearchBarMsg::Focused) }
                    onkeypress={ ctx.link().batch_callback(|e: KeyboardEvent| {
                        (e.key() == "Enter").then(|| SearchBarMsg::Submit)
                    }) }
                />
                <button
                    type="button"
                    class="search-button"
                    title={ msgs.search_placeholder }
                    onclick={ ctx.link().callback(|_| SearchBarMsg::Submit) }
                >
                </button>
                { dropdown }
            </div>
        }
    }
}
