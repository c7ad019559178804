//! Cascading category selectors shared by the entry form and the menu page.

use contracts::catalog::{placeholder, CascadingMenu, Catalog, MenuSelection};
use leptos::prelude::*;
use std::ops::Deref;

use crate::shared::components::ui::Select;

/// Read-only catalog handed to every page through context.
#[derive(Debug, Clone, Copy)]
pub struct CatalogContext(&'static Catalog);

impl CatalogContext {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self(catalog)
    }
}

impl Deref for CatalogContext {
    type Target = Catalog;

    fn deref(&self) -> &Catalog {
        self.0
    }
}

pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext not provided")
}

/// Three dependent selects: top-level, subcategory (`categorySelect`) and
/// leaf (`subCategorySelect`).
#[component]
pub fn CategoryMenu(
    menu: RwSignal<CascadingMenu>,
    /// Values displayed as selected; follows the menu's own selection when omitted
    #[prop(optional, into)]
    selected: Option<Signal<MenuSelection>>,
    /// Called with the new selection after any of the selects changes
    #[prop(optional)]
    on_select: Option<Callback<MenuSelection>>,
) -> impl IntoView {
    let catalog = use_catalog();
    let selected = selected
        .unwrap_or_else(|| Signal::derive(move || menu.with(|m| m.selection().clone())));

    let notify = move |selection: Option<MenuSelection>| {
        if let (Some(selection), Some(handler)) = (selection, on_select) {
            handler.run(selection);
        }
    };

    let top_level_options = Signal::derive(move || {
        let mut options = placeholder();
        options.extend(catalog.top_levels());
        options
    });
    let subcategory_options =
        Signal::derive(move || menu.with(|m| m.subcategory_options().to_vec()));
    let leaf_options = Signal::derive(move || menu.with(|m| m.leaf_options().to_vec()));

    let on_top_level = Callback::new(move |value: String| {
        log::debug!("Top-level category changed to '{}'", value);
        notify(menu.try_update(|m| m.select_top_level(&catalog, &value).clone()));
    });
    let on_subcategory = Callback::new(move |value: String| {
        log::debug!("Subcategory changed to '{}'", value);
        notify(menu.try_update(|m| m.select_subcategory(&catalog, &value).clone()));
    });
    let on_leaf = Callback::new(move |value: String| {
        notify(menu.try_update(|m| m.select_leaf(&value).clone()));
    });

    view! {
        <div class="category-menu">
            <Select
                id="typeSelect"
                name="type"
                label="Type"
                value=Signal::derive(move || selected.get().top_level)
                options=top_level_options
                on_change=on_top_level
            />
            <Select
                id="categorySelect"
                name="category"
                label="Category"
                value=Signal::derive(move || selected.get().subcategory)
                options=subcategory_options
                on_change=on_subcategory
            />
            <Select
                id="subCategorySelect"
                name="subcategory"
                label="Subcategory"
                value=Signal::derive(move || selected.get().leaf)
                options=leaf_options
                on_change=on_leaf
            />
        </div>
    }
}
