use gloo_storage::{LocalStorage, Storage};
use kronik_client::{Settings, ThemeState};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct ThemeToggleProps {
    pub settings: Settings,
}

pub enum ThemeToggleMsg {
    Clicked,
    Swap,
    AnimationEnded,
}

pub struct ThemeToggle {
    state: ThemeState,
}

impl ThemeToggle {
    // Stored as a bare string, not as JSON
    fn stored(key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(?e, "failed reading stored theme");
                None
            }
        }
    }

    fn store(key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(?e, "failed saving theme to local storage");
        }
    }
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ThemeToggleProps;

    fn create(ctx: &Context<Self>) -> Self {
        let state = ThemeState::load(Self::stored(&ctx.props().settings.theme_storage_key));
        util::apply_theme(state.current());
        ThemeToggle { state }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let settings = &ctx.props().settings;
        match msg {
            ThemeToggleMsg::Clicked => {
                if self.state.is_animating() {
                    return false;
                }
                let target = self.state.begin_toggle();
                tracing::debug!(?target, "switching theme");
                let (switch, end) = (settings.theme_switch_delay(), settings.theme_animation());
                ctx.link().send_future(async move {
                    util::sleep(switch).await;
                    ThemeToggleMsg::Swap
                });
                ctx.link().send_future(async move {
                    util::sleep(end).await;
                    ThemeToggleMsg::AnimationEnded
                });
            }
            ThemeToggleMsg::Swap => {
                if let Some(theme) = self.state.swap() {
                    util::apply_theme(theme);
                    Self::store(&settings.theme_storage_key, theme.as_str());
                }
            }
            ThemeToggleMsg::AnimationEnded => self.state.end_animation(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let msgs = ctx.props().settings.locale.messages();
        html! {
            <>
                <button
                    type="button"
                    class="theme-toggle"
                    title={ msgs.theme_toggle }
                    onclick={ ctx.link().callback(|_| ThemeToggleMsg::Clicked) }
                >
                    <span class="toggle-text">{ msgs.theme_toggle }</span>
                </button>
                <div class={ self.state.overlay_class() }></div>
            </>
        }
    }
}
