use kronik_client::StatusMessage;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct StatusBannerProps {
    pub messages: Vec<StatusMessage>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(StatusBanner)]
pub fn status_banner(p: &StatusBannerProps) -> Html {
    html! {
        <div class="status-messages" aria-live="polite">
            { for p.messages.iter().map(|m| {
                let id = m.id;
                html! {
                    <div
                        class={ classes!("status-message", m.kind.css_class(), m.fading.then(|| "fade-out")) }
                        role="status"
                    >
                        <span>{ &m.text }</span>
                        <button
                            type="button"
                            class="status-close"
                            aria-label="Close"
                            onclick={ p.on_dismiss.reform(move |_| id) }
                        >
                            { "×" }
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
