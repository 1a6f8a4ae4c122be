pub mod destination;
pub mod form;
pub mod theme;

pub use destination::Destination;
pub use form::{
    FieldChange, FlagField, FormDraft, FormErrors, TextField, ValidationError, validate_required,
};
pub use theme::Theme;
