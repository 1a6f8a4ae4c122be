//! Admin form draft and its validation.
//!
//! Input handlers build a [`FieldChange`] at the call site, so the draft
//! never has to guess whether an event came from a text box or a checkbox.

use std::collections::BTreeMap;

use serde::Serialize;

/// Text inputs of the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextField {
    /// Destination name.
    Name,
    /// Destination category.
    Kind,
}

impl TextField {
    /// Every text field, in form order.
    pub const ALL: [Self; 2] = [Self::Name, Self::Kind];

    /// The `name` attribute used in markup.
    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kind => "type",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Kind => "Type",
        }
    }
}

/// Checkbox inputs of the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    /// Destination is in high demand; reveals the additional options section.
    HighDemand,
}

impl FlagField {
    /// The `name` attribute used in markup.
    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::HighDemand => "highDemand",
        }
    }
}

/// A single edit to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// New contents of a text input.
    Text {
        /// Edited field.
        field: TextField,
        /// Current input value.
        value: String,
    },
    /// New state of a checkbox.
    Flag {
        /// Edited field.
        field: FlagField,
        /// Whether the box is checked.
        value: bool,
    },
}

impl FieldChange {
    /// Shorthand for [`FieldChange::Text`].
    pub fn text(field: TextField, value: impl Into<String>) -> Self {
        Self::Text {
            field,
            value: value.into(),
        }
    }

    /// Shorthand for [`FieldChange::Flag`].
    #[must_use]
    pub const fn flag(field: FlagField, value: bool) -> Self {
        Self::Flag { field, value }
    }
}

/// Validation failures for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is required but empty.
    Required,
}

impl ValidationError {
    /// Inline message shown next to `field`.
    #[must_use]
    pub fn message(self, field: TextField) -> String {
        match self {
            Self::Required => format!("{} is required", field.label()),
        }
    }
}

/// Validates that a value is present.
///
/// # Errors
/// [`ValidationError::Required`] when the value is empty or whitespace only.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Field-level errors. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<TextField, ValidationError>);

impl FormErrors {
    /// No errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: TextField, error: ValidationError) {
        self.0.insert(field, error);
    }

    /// Error recorded for `field`.
    #[must_use]
    pub fn get(&self, field: TextField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// Inline message for `field`, if it is invalid.
    #[must_use]
    pub fn message(&self, field: TextField) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    /// Number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every field is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Invalid fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = TextField> + '_ {
        self.0.keys().copied()
    }
}

/// Contents of the "add destination" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    /// Destination name.
    pub name: String,
    /// Destination category.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the destination is flagged as high demand.
    #[serde(rename = "highDemand")]
    pub high_demand: bool,
}

impl FormDraft {
    /// Merges one edit into the draft; other fields keep their values.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Text {
                field: TextField::Name,
                value,
            } => self.name = value,
            FieldChange::Text {
                field: TextField::Kind,
                value,
            } => self.kind = value,
            FieldChange::Flag {
                field: FlagField::HighDemand,
                value,
            } => self.high_demand = value,
        }
    }

    /// Consuming form of [`FormDraft::apply`].
    #[must_use]
    pub fn with(mut self, change: FieldChange) -> Self {
        self.apply(change);
        self
    }

    /// Current value of a text field.
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Kind => &self.kind,
        }
    }

    /// Current value of a checkbox.
    #[must_use]
    pub const fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::HighDemand => self.high_demand,
        }
    }

    /// Whether the additional options section should be shown.
    #[must_use]
    pub const fn shows_additional_options(&self) -> bool {
        self.high_demand
    }

    /// Runs presence validation over every required field.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        for field in TextField::ALL {
            if let Err(error) = validate_required(self.text(field)) {
                errors.insert(field, error);
            }
        }
        errors
    }
}
