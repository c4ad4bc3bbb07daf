use kronik_client::Locale;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyFormProps {
    pub draft: String,
    pub busy: bool,
    pub locale: Locale,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ReplyForm)]
pub fn reply_form(p: &ReplyFormProps) -> Html {
    let msgs = p.locale.messages();
    let input_ref = use_node_ref();

    // the form is only mounted while shown, focus it right away
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                    let _ = input.focus();
                }
                || ()
            },
            (),
        );
    }

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
        <div class="reply-form">
            <input
                ref={ input_ref }
                type="text"
                class="reply-input"
                placeholder={ msgs.reply_placeholder }
                value={ p.draft.clone() }
                oninput={ p.on_change.reform(|e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    input.value()
                }) }
                { onkeypress }
            />
            <div class="reply-form-buttons">
                <button type="button" class="cancel-reply" onclick={ p.on_cancel.reform(|_| ()) }>
                    { msgs.cancel }
                </button>
                <button
                    type="button"
                    class="submit-reply"
                    disabled={ p.busy }
                    onclick={ p.on_submit.reform(|_| ()) }
                >
                    { if p.busy { msgs.submitting } else { msgs.submit } }
                </button>
            </div>
        </div>
    }
}
