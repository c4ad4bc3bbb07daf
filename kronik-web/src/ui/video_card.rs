use kronik_client::{api::nav, VideoCard};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct VideoCardItemProps {
    pub card: VideoCard,
    /// Appearance animation delay, so cards of a page show up one by one
    pub delay_ms: usize,
}

#[function_component(VideoCardItem)]
pub fn video_card_item(p: &VideoCardItemProps) -> Html {
    let card = &p.card;
    let onclick = {
        let href = card.href.clone();
        Callback::from(move |_: MouseEvent| util::navigate(&href))
    };
    let onerror = Callback::from(|e: Event| {
        let img: web_sys::HtmlImageElement = e.target_unchecked_into();
        if !img.src().ends_with(nav::PLACEHOLDER_THUMBNAIL) {
            img.set_src(nav::PLACEHOLDER_THUMBNAIL);
        }
    });
    html! {
        <div
            class="video-card"
            style={ format!("animation-delay: {}ms", p.delay_ms) }
            { onclick }
        >
            <div class="thumbnail">
                <img src={ card.thumbnail.clone() } alt={ card.title.clone() } loading="lazy" { onerror } />
                <div class="duration">{ &card.duration }</div>
            </div>
            <div class="video-info">
                <div class="video-title">{ &card.title }</div>
                <div class="channel-name">{ &card.channel }</div>
                <div class="video-stats">
                    <span>{ &card.views }</span>
                    <span>{ format!("• {}", card.uploaded) }</span>
                </div>
            </div>
        </div>
    }
}
