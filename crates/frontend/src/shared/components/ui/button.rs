use leptos::prelude::*;

/// Primary button; plain `type="button"` unless `button_type` says otherwise
#[component]
pub fn Button(
    /// Button type attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// ID for the button element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let button_id = move || id.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            id=button_id
            type=btn_type
            class="button button--primary"
            disabled=move || disabled.get().unwrap_or(false)
        >
            {children()}
        </button>
    }
}
