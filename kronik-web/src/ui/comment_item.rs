use kronik_client::{Avatar, EntryKey, EntryView, LikeTarget, Locale};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub entry_key: EntryKey,
    pub entry: EntryView,
    /// Replies in arrival order, with their like targets
    pub replies: Vec<(LikeTarget, EntryView)>,
    pub locale: Locale,
    /// Current draft when the reply form of this comment is the one shown
    pub reply_draft: Option<String>,
    pub reply_busy: bool,
    pub on_like: Callback<LikeTarget>,
    pub on_reply: Callback<EntryKey>,
    pub on_reply_change: Callback<(EntryKey, String)>,
    pub on_reply_submit: Callback<EntryKey>,
    pub on_reply_cancel: Callback<EntryKey>,
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let msgs = p.locale.messages();
    let key = p.entry_key;
    let reply_form = p.reply_draft.as_ref().map(|draft| {
        html! {
            <ui::ReplyForm
                draft={ draft.clone() }
                busy={ p.reply_busy }
                locale={ p.locale }
                on_change={ p.on_reply_change.reform(move |t| (key, t)) }
                on_submit={ p.on_reply_submit.reform(move |_| key) }
                on_cancel={ p.on_reply_cancel.reform(move |_| key) }
            />
        }
    });
    html! {
        <div class="qa-item">
            { entry_body(&p.entry, p.locale, LikeTarget::Comment(key), &p.on_like) }
            <div class="qa-actions">
                <button
                    type="button"
                    class="qa-reply-btn"
                    onclick={ p.on_reply.reform(move |_| key) }
                >
                    { msgs.reply }
                </button>
            </div>
            { for reply_form }
            <div class="qa-replies">
                { for p.replies.iter().map(|(target, r)| html! {
                    <div class="qa-reply">
                        { entry_body(r, p.locale, *target, &p.on_like) }
                    </div>
                }) }
            </div>
        </div>
    }
}

fn entry_body(
    e: &EntryView,
    locale: Locale,
    target: LikeTarget,
    on_like: &Callback<LikeTarget>,
) -> Html {
    let msgs = locale.messages();
    let avatar = match &e.avatar {
        Avatar::Image { src, alt } => html! {
            <img class="qa-avatar" src={ src.clone() } alt={ alt.clone() } />
        },
        Avatar::Initial(i) => html! { <div class="qa-avatar">{ i }</div> },
    };
    html! {
        <>
            <div class="qa-header">
                { avatar }
                <span class="qa-name">{ &e.name }</span>
                { for e.author_badge.then(|| html! {
                    <span class="author-badge">{ msgs.author_badge }</span>
                }) }
                <span class="qa-time">{ &e.age }</span>
            </div>
            <div class="qa-text">{ &e.text }</div>
            <button
                type="button"
                class={ classes!("qa-like", e.liked.then(|| "liked")) }
                onclick={ on_like.reform(move |_| target) }
            >
                <span class="like-count">{ e.likes }</span>
            </button>
        </>
    }
}
