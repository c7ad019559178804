//! Form state owned by the entry page: field values, the confirmation area
//! and the submit control.

mod error;
mod field;

pub use error::SubmitError;
pub use field::{FieldKind, FormField};

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIRMATION: &str = "Submitted!";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Submitted,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
    confirmation: String,
    submit_enabled: bool,
    status: SubmissionStatus,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            confirmation: String::new(),
            submit_enabled: true,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Current value of `name`, empty when the field does not exist
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.field(name).map(|f| f.checked).unwrap_or(false)
    }

    /// Returns false when there is no field called `name`.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// `application/x-www-form-urlencoded` body in field order.
    ///
    /// Buttons are skipped, unchecked checkboxes and radios are skipped,
    /// hidden fields are sent.
    pub fn serialize(&self) -> String {
        self.fields
            .iter()
            .filter_map(|f| f.submitted_value().map(|v| (f.name.as_str(), v)))
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    encode_component(name),
                    encode_component(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Empties every input except buttons and hidden fields.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Moves the form to `Pending` and returns the request body.
    pub fn begin_submit(&mut self) -> Result<String, SubmitError> {
        match self.status {
            SubmissionStatus::Pending => return Err(SubmitError::InFlight),
            SubmissionStatus::Submitted => return Err(SubmitError::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Failed(_) => {}
        }
        self.status = SubmissionStatus::Pending;
        self.submit_enabled = false;
        self.confirmation.clear();
        Ok(self.serialize())
    }

    /// Clears the inputs, shows `confirmation` and keeps the submit control
    /// disabled for good.
    pub fn mark_submitted(&mut self, confirmation: &str) {
        self.clear();
        self.confirmation = confirmation.to_string();
        self.submit_enabled = false;
        self.status = SubmissionStatus::Submitted;
    }

    /// Leaves the inputs untouched and re-enables the submit control.
    pub fn mark_failed(&mut self, error: &SubmitError) {
        self.confirmation = format!("Submission failed: {}", error);
        self.submit_enabled = true;
        self.status = SubmissionStatus::Failed(error.to_string());
    }
}

/// Percent-encodes a name or value the way browsers serialize forms: line
/// breaks become CRLF and spaces become `+`.
fn encode_component(raw: &str) -> String {
    let normalized = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\r\n");
    urlencoding::encode(&normalized).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_form() -> FormState {
        FormState::new(vec![
            FormField::new("amount", FieldKind::Number).with_value("10"),
            FormField::new("category", FieldKind::Select).with_value("Food"),
            FormField::new("note", FieldKind::Text),
            FormField::new("recurring", FieldKind::Checkbox),
            FormField::new("source", FieldKind::Hidden).with_value("web"),
            FormField::new("submit", FieldKind::Submit).with_value("Submit"),
        ])
    }

    #[test]
    fn test_serialize_skips_buttons_and_unchecked() {
        let form = entry_form();
        assert_eq!(
            form.serialize(),
            "amount=10&category=Food&note=&source=web"
        );
    }

    #[test]
    fn test_serialize_includes_checked_box_and_encodes() {
        let mut form = entry_form();
        form.set_checked("recurring", true);
        form.set_value("note", "Eating Out & more");
        assert_eq!(
            form.serialize(),
            "amount=10&category=Food&note=Eating+Out+%26+more&recurring=on&source=web"
        );
    }

    #[test]
    fn test_serialize_line_breaks_as_crlf() {
        let mut form = entry_form();
        form.set_value("note", "Eating Out\nx");
        assert!(form.serialize().contains("&note=Eating+Out%0D%0Ax&"));

        form.set_value("note", "a\r\nb\rc");
        assert!(form.serialize().contains("&note=a%0D%0Ab%0D%0Ac&"));
    }

    #[test]
    fn test_serialize_keeps_literal_percent_sequences() {
        let mut form = entry_form();
        form.set_value("note", "100%20 off");
        assert!(form.serialize().contains("&note=100%2520+off&"));
    }

    #[test]
    fn test_status_json_shape() {
        assert_eq!(
            serde_json::to_value(SubmissionStatus::Pending).ok(),
            Some(serde_json::json!({ "state": "pending" }))
        );
        assert_eq!(
            serde_json::to_value(SubmissionStatus::Failed("timeout".into())).ok(),
            Some(serde_json::json!({ "state": "failed", "reason": "timeout" }))
        );
    }

    #[test]
    fn test_serialize_two_fields() {
        let form = FormState::new(vec![
            FormField::new("amount", FieldKind::Text).with_value("10"),
            FormField::new("category", FieldKind::Select).with_value("Food"),
        ]);
        assert_eq!(form.serialize(), "amount=10&category=Food");
    }

    #[test]
    fn test_clear_keeps_buttons_and_hidden() {
        let mut form = entry_form();
        form.set_checked("recurring", true);
        form.clear();

        assert_eq!(form.value("amount"), "");
        assert_eq!(form.value("category"), "");
        assert!(!form.is_checked("recurring"));
        assert_eq!(form.value("source"), "web");
        assert_eq!(form.value("submit"), "Submit");
    }

    #[test]
    fn test_set_value_on_missing_field() {
        let mut form = entry_form();
        assert!(!form.set_value("missing", "x"));
        assert_eq!(form.value("missing"), "");
    }

    #[test]
    fn test_submit_success_is_one_shot() {
        let mut form = entry_form();
        let body = form.begin_submit();
        assert_eq!(body, Ok("amount=10&category=Food&note=&source=web".to_string()));
        assert_eq!(form.status(), &SubmissionStatus::Pending);
        assert!(!form.submit_enabled());

        form.mark_submitted(DEFAULT_CONFIRMATION);
        assert_eq!(form.confirmation(), "Submitted!");
        assert!(!form.submit_enabled());
        assert_eq!(form.value("amount"), "");
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySubmitted));
    }

    #[test]
    fn test_second_submit_while_pending_is_rejected() {
        let mut form = entry_form();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));
    }

    #[test]
    fn test_failure_keeps_fields_and_reenables() {
        let mut form = entry_form();
        assert!(form.begin_submit().is_ok());
        form.mark_failed(&SubmitError::Status(500));

        assert_eq!(form.value("amount"), "10");
        assert!(form.submit_enabled());
        assert_eq!(
            form.status(),
            &SubmissionStatus::Failed("Server responded with status 500".to_string())
        );
        assert_eq!(
            form.confirmation(),
            "Submission failed: Server responded with status 500"
        );

        // Retry after failure is allowed.
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.confirmation(), "");
    }
}
