use contracts::catalog::CascadingMenu;
use leptos::prelude::*;

use crate::menu::{use_catalog, CategoryMenu};
use crate::shared::components::PageHeader;

/// The cascading selectors on their own, without a form around them.
#[component]
pub fn MenuPage() -> impl IntoView {
    let catalog = use_catalog();
    let menu = RwSignal::new(CascadingMenu::start(&catalog));

    let summary = move || {
        menu.with(|m| {
            let s = m.selection();
            [s.top_level.as_str(), s.subcategory.as_str(), s.leaf.as_str()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" / ")
        })
    };

    view! {
        <div class="page page--menu">
            <PageHeader title="Categories" subtitle="Browse the category tree" />
            <CategoryMenu menu=menu />
            <p class="category-menu__summary">{summary}</p>
        </div>
    }
}
