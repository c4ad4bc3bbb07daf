use kronik_client::{Locale, LoginPrompt};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct LoginModalProps {
    pub prompt: LoginPrompt,
    pub locale: Locale,
    pub on_close: Callback<()>,
}

#[function_component(LoginModal)]
pub fn login_modal(p: &LoginModalProps) -> Html {
    if !p.prompt.is_shown() {
        return html! {};
    }
    let msgs = p.locale.messages();
    // clicks on the backdrop close the prompt, not those inside the dialog
    let on_backdrop = p.on_close.reform(|_| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {
        <div
            class={ classes!("login-modal", p.prompt.is_closing().then(|| "closing")) }
            onclick={ on_backdrop }
        >
            <div class="login-modal-content" role="dialog" aria-modal="true" onclick={ keep_open }>
                <button
                    type="button"
                    class="login-modal-close"
                    aria-label="Close"
                    onclick={ p.on_close.reform(|_| ()) }
                >
                    { "×" }
                </button>
                <h3>{ msgs.login_title }</h3>
                <p>{ msgs.login_body }</p>
                <div class="login-modal-buttons">
                    <a class="btn-login" href={ LoginPrompt::login_href(&util::current_path()) }>
                        { msgs.login }
                    </a>
                    <a class="btn-register" href={ LoginPrompt::register_href() }>
                        { msgs.register }
                    </a>
                </div>
            </div>
        </div>
    }
}
