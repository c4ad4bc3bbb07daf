use kronik_client::Locale;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub text: String,
    pub busy: bool,
    pub locale: Locale,
    /// Anonymous visitors get the login prompt from here instead of typing
    pub on_click: Callback<()>,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(CommentForm)]
pub fn comment_form(p: &CommentFormProps) -> Html {
    let msgs = p.locale.messages();
    let onsubmit = p.on_submit.reform(|e: SubmitEvent| e.prevent_default());
    let onkeypress = {
        let on_submit = p.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };
    html! {
        <form class="qa-form" { onsubmit }>
            <input
                type="text"
                class="qa-input"
                placeholder={ msgs.comment_placeholder }
                value={ p.text.clone() }
                onclick={ p.on_click.reform(|_| ()) }
                oninput={ p.on_change.reform(|e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    input.value()
                }) }
                { onkeypress }
            />
            <button type="submit" class="qa-submit" disabled={ p.busy }>
                { if p.busy { msgs.submitting } else { msgs.submit } }
            </button>
        </form>
    }
}
