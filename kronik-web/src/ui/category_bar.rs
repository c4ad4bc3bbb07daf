use kronik_client::{Category, Locale};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CategoryBarProps {
    /// Lowercased names, without the "all" chip
    pub categories: Vec<String>,
    pub selected: Category,
    pub locale: Locale,
    pub on_select: Callback<Category>,
}

#[function_component(CategoryBar)]
pub fn category_bar(p: &CategoryBarProps) -> Html {
    let all = p.locale.messages().all_categories;
    let chips = std::iter::once(all).chain(p.categories.iter().map(|c| c.as_str()));
    html! {
        <div class="categories">
            { for chips.map(|label| {
                let category = Category::from_chip(label);
                let active = category == p.selected;
                html! {
                    <div
                        class={ classes!("category-chip", active.then(|| "active")) }
                        onclick={ p.on_select.reform(move |_| category.clone()) }
                    >
                        { label }
                    </div>
                }
            }) }
        </div>
    }
}
