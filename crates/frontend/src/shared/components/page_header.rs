use leptos::prelude::*;

/// Title block shown at the top of each page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {move || subtitle.get().map(|s| view! {
                <div class="page-header__subtitle">{s}</div>
            })}
        </div>
    }
}
