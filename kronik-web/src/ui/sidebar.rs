use kronik_client::{api::nav, Locale, Messages};
use yew::prelude::*;

pub struct MenuItem {
    pub icon: &'static str,
    pub label: fn(&Messages) -> &'static str,
    /// None for items that only get highlighted
    pub href: Option<&'static str>,
}

pub const MENU: [MenuItem; 5] = [
    MenuItem {
        icon: "bi-house",
        label: |m| m.menu_home,
        href: Some(nav::HOME),
    },
    MenuItem {
        icon: "bi-fire",
        label: |m| m.menu_trending,
        href: None,
    },
    MenuItem {
        icon: "bi-collection-play",
        label: |m| m.menu_subscriptions,
        href: None,
    },
    MenuItem {
        icon: "bi-clock-history",
        label: |m| m.menu_history,
        href: None,
    },
    MenuItem {
        icon: "bi-camera-reels",
        label: |m| m.menu_studio,
        href: Some(nav::STUDIO),
    },
];

#[derive(Clone, PartialEq, Properties)]
pub struct SidebarProps {
    pub collapsed: bool,
    pub mobile_shown: bool,
    pub active: usize,
    pub locale: Locale,
    pub on_select: Callback<usize>,
}

#[function_component(Sidebar)]
pub fn sidebar(p: &SidebarProps) -> Html {
    let msgs = p.locale.messages();
    html! {
        <nav
            id="sidebar"
            class={ classes!(
                "sidebar",
                p.collapsed.then(|| "collapsed"),
                p.mobile_shown.then(|| "show"),
            ) }
        >
            { for MENU.iter().enumerate().map(|(i, item)| html! {
                <div
                    class={ classes!("menu-item", (i == p.active).then(|| "active")) }
                    onclick={ p.on_select.reform(move |_| i) }
                >
                    <span class={ classes!("menu-icon", item.icon) } aria-hidden="true"></span>
                    <span class="menu-text">{ (item.label)(msgs) }</span>
                </div>
            }) }
        </nav>
    }
}
