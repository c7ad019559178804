use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Checkbox,
    Radio,
    Hidden,
    Button,
    Submit,
    Reset,
}

impl FieldKind {
    pub fn is_button(self) -> bool {
        matches!(self, FieldKind::Button | FieldKind::Submit | FieldKind::Reset)
    }

    pub fn is_checkable(self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }

    /// Whether a successful submission resets this field.
    pub fn is_clearable(self) -> bool {
        !self.is_button() && self != FieldKind::Hidden
    }
}

/// One control of the form, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub checked: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let value = if kind.is_checkable() {
            "on".to_string()
        } else {
            String::new()
        };
        Self {
            name: name.into(),
            kind,
            value,
            checked: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Value sent with the form, if the field takes part in submission.
    pub(crate) fn submitted_value(&self) -> Option<&str> {
        if self.name.is_empty() || self.kind.is_button() {
            return None;
        }
        if self.kind.is_checkable() && !self.checked {
            return None;
        }
        Some(&self.value)
    }

    pub(crate) fn clear(&mut self) {
        if !self.kind.is_clearable() {
            return;
        }
        if self.kind.is_checkable() {
            self.checked = false;
        } else {
            self.value.clear();
        }
    }
}
