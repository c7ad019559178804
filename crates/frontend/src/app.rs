use crate::menu::CatalogContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::FormConfig;
use contracts::catalog::BUILTIN_CATALOG;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let catalog = CatalogContext::new(&BUILTIN_CATALOG);
    for key in catalog.shadowed_keys() {
        log::warn!(
            "Catalog key '{}' is defined more than once; the last definition is used",
            key
        );
    }

    // One catalog and one config for every page.
    provide_context(catalog);
    provide_context(FormConfig::from_location());

    view! {
        <AppRoutes />
    }
}
