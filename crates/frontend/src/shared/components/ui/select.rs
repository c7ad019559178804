use leptos::prelude::*;

/// Select whose options use their label as value, like a bare `<option>text</option>`
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; no option is selected when it matches none of them
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Option labels in display order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let select_name = move || name.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                name=select_name
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get().into_iter().enumerate()
                    key=|(index, option)| (*index, option.clone())
                    children=move |(_, option)| {
                        let option_clone = option.clone();
                        let is_selected = move || value.get() == option_clone;
                        let option_value = option.clone();
                        view! {
                            <option value=option_value selected=is_selected>
                                {option}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
