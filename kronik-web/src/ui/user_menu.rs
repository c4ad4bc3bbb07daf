use kronik_client::{
    api::{nav, User},
    Author, Avatar, Locale, LoginPrompt,
};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct UserMenuProps {
    pub viewer: Option<User>,
    pub locale: Locale,
}

#[function_component(UserMenu)]
pub fn user_menu(p: &UserMenuProps) -> Html {
    let msgs = p.locale.messages();
    let shown = use_state(|| false);
    let menu_ref = use_node_ref();

    // clicking anywhere else closes the dropdown
    {
        let shown = shown.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = util::Listener::on_document("click", move |e| {
                    if !util::contains(&menu_ref, e.target()) {
                        shown.set(false);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let user = match &p.viewer {
        None => {
            return html! {
                <div class="auth-buttons">
                    <a class="btn-login" href={ LoginPrompt::login_href(&util::current_path()) }>
                        { msgs.login }
                    </a>
                    <a class="btn-register" href={ LoginPrompt::register_href() }>
                        { msgs.register }
                    </a>
                </div>
            }
        }
        Some(u) => u,
    };
    let avatar = match Avatar::for_author(&Author::from(user)) {
        Avatar::Image { src, alt } => html! { <img class="user-avatar" {src} {alt} /> },
        Avatar::Initial(i) => html! { <div class="user-avatar">{ i }</div> },
    };
    let toggle = {
        let shown = shown.clone();
        Callback::from(move |_: MouseEvent| shown.set(!*shown))
    };
    html! {
        <div class="user-menu" ref={ menu_ref } onclick={ toggle }>
            { avatar }
            <div class={ classes!("user-dropdown", shown.then(|| "show")) }>
                <div class="user-name">{ &user.display_name }</div>
                <a class="dropdown-item" href={ nav::STUDIO }>{ msgs.menu_profile }</a>
                <a class="dropdown-item" href={ nav::LOGOUT }>{ msgs.menu_logout }</a>
            </div>
        </div>
    }
}
