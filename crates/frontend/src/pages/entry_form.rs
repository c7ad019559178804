use contracts::catalog::{CascadingMenu, MenuSelection};
use contracts::form::{FieldKind, FormField, FormState, SubmissionStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::menu::{use_catalog, CategoryMenu};
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::components::PageHeader;
use crate::shared::config::FormConfig;
use crate::submission::{HttpTransport, SubmissionHandler};

const SOURCE: &str = "web";

/// Fields of the entry form in document order.
pub fn entry_fields(selection: &MenuSelection) -> Vec<FormField> {
    vec![
        FormField::new("amount", FieldKind::Number),
        FormField::new("type", FieldKind::Select).with_value(selection.top_level.clone()),
        FormField::new("category", FieldKind::Select).with_value(selection.subcategory.clone()),
        FormField::new("subcategory", FieldKind::Select).with_value(selection.leaf.clone()),
        FormField::new("note", FieldKind::Text),
        FormField::new("recurring", FieldKind::Checkbox),
        FormField::new("source", FieldKind::Hidden).with_value(SOURCE),
        FormField::new("submit", FieldKind::Submit).with_value("Submit"),
    ]
}

/// Writes the menu selection into the three select fields.
pub fn apply_selection(form: &mut FormState, selection: &MenuSelection) {
    form.set_value("type", selection.top_level.clone());
    form.set_value("category", selection.subcategory.clone());
    form.set_value("subcategory", selection.leaf.clone());
}

fn selection_of(form: &FormState) -> MenuSelection {
    MenuSelection {
        top_level: form.value("type").to_string(),
        subcategory: form.value("category").to_string(),
        leaf: form.value("subcategory").to_string(),
    }
}

#[component]
pub fn EntryFormPage() -> impl IntoView {
    let catalog = use_catalog();
    let config = use_context::<FormConfig>().unwrap_or_default();
    let handler = SubmissionHandler::new(HttpTransport::new(config.timeout_ms), &config);

    let menu = RwSignal::new(CascadingMenu::start(&catalog));
    let form = RwSignal::new(FormState::new(
        menu.with_untracked(|m| entry_fields(m.selection())),
    ));

    let text_field = move |name: &'static str| {
        Signal::derive(move || form.with(|f| f.value(name).to_string()))
    };
    let set_field = move |name: &'static str| {
        Callback::new(move |value: String| {
            form.update(|f| {
                f.set_value(name, value);
            })
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(body)) => {
                let handler = handler.clone();
                spawn_local(async move {
                    let result = handler.send(body).await;
                    // `finish` already logs and records a failure in the form.
                    form.update(|f| {
                        handler.finish(f, result).ok();
                    });
                });
            }
            Some(Err(e)) => log::warn!("Submit ignored: {}", e),
            None => {}
        }
    };

    let confirmation_class = move || {
        form.with(|f| match f.status() {
            SubmissionStatus::Failed(_) => "form__confirmation form__confirmation--error",
            _ => "form__confirmation",
        })
    };

    view! {
        <div class="page page--entry">
            <PageHeader title="New entry" subtitle="Record an expense or an income" />

            <form
                id="myForm"
                class="form"
                action=config.action.clone()
                method="post"
                on:submit=on_submit
            >
                <Input
                    id="amount"
                    name="amount"
                    label="Amount"
                    input_type="number"
                    value=text_field("amount")
                    on_input=set_field("amount")
                    required=true
                />

                <CategoryMenu
                    menu=menu
                    selected=Signal::derive(move || form.with(selection_of))
                    on_select=Callback::new(move |selection: MenuSelection| {
                        form.update(|f| apply_selection(f, &selection));
                    })
                />

                <Input
                    id="note"
                    name="note"
                    label="Note"
                    value=text_field("note")
                    on_input=set_field("note")
                />

                <Checkbox
                    id="recurring"
                    name="recurring"
                    label="Recurring"
                    checked=Signal::derive(move || form.with(|f| f.is_checked("recurring")))
                    on_change=Callback::new(move |checked: bool| {
                        form.update(|f| {
                            f.set_checked("recurring", checked);
                        })
                    })
                />

                <input
                    type="hidden"
                    name="source"
                    prop:value=move || form.with(|f| f.value("source").to_string())
                />

                <div class="form__actions">
                    <Button
                        id="mySubmit"
                        button_type="submit"
                        disabled=Signal::derive(move || form.with(|f| !f.submit_enabled()))
                    >
                        {move || form.with(|f| match f.status() {
                            SubmissionStatus::Pending => "Submitting...",
                            _ => "Submit",
                        })}
                    </Button>
                </div>

                <p id="myConf" class=confirmation_class>
                    {move || form.with(|f| f.confirmation().to_string())}
                </p>
            </form>
        </div>
    }
}
