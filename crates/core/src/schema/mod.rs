//! Per-entity form definitions: default values, create/edit rule sets, and
//! the mapping between records, form values, and outgoing payloads.
//!
//! Rule sets are plain `validator` derive structs; [`FormSchema`] ties them
//! to the generic [`EntityForm`](crate::form::EntityForm).

pub mod activity;
pub mod category;
pub mod content;
pub mod user;

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::types::DbId;

pub use activity::ActivitySchema;
pub use category::CategorySchema;
pub use content::{ContentPayload, ContentValues};
pub use user::{UserPayload, UserSchema, UserValues};

/// File extensions the image input accepts.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "bmp"];

/// Whether the form creates a new record or edits an existing one.
///
/// Decided solely by the presence of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(DbId),
}

impl FormMode {
    pub fn from_id(id: Option<DbId>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn id(self) -> Option<DbId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Entity-specific configuration for [`EntityForm`](crate::form::EntityForm).
pub trait FormSchema: Send + Sync + 'static {
    /// Record returned by the backend.
    type Record: Clone + Send + Sync;
    /// Editable form state.
    type Values: Clone + std::fmt::Debug + Send + Sync;
    /// Body sent on create/update.
    type Payload: Send + Sync;

    /// Human-readable entity name, used in logs and titles.
    const ENTITY: &'static str;

    fn initial_values() -> Self::Values;

    /// Run the create or edit rule set against `values`.
    fn validate(values: &Self::Values, mode: FormMode) -> Result<(), ValidationErrors>;

    /// Form values for an existing record, with the image input cleared.
    fn values_from_record(record: &Self::Record) -> Self::Values;

    /// The record's current image, if any.
    fn stored_image(record: &Self::Record) -> Option<&str>;

    /// The image input's value (the selected file name).
    fn image_value_mut(values: &mut Self::Values) -> &mut String;

    /// Build the outgoing body. `image` is `None` when no new file was
    /// selected; the payload must then leave the image field out.
    fn payload(values: &Self::Values, image: Option<String>, mode: FormMode) -> Self::Payload;
}

// ---------------------------------------------------------------------------
// Shared validators
// ---------------------------------------------------------------------------

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn has_image_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// An image must be chosen and must look like an image file.
pub fn validate_required_image(file_name: &str) -> Result<(), ValidationError> {
    if file_name.trim().is_empty() {
        return Err(field_error("image_required", "An image is required"));
    }
    validate_optional_image(file_name)
}

/// Empty is fine; otherwise the file must look like an image.
pub fn validate_optional_image(file_name: &str) -> Result<(), ValidationError> {
    if file_name.trim().is_empty() || has_image_extension(file_name) {
        Ok(())
    } else {
        Err(field_error(
            "image_format",
            "The file must be an image (jpg, jpeg, png, gif, webp, svg, bmp)",
        ))
    }
}

/// Flatten validation errors into sorted `(field, message)` pairs.
pub fn describe_errors(errors: &ValidationErrors) -> Vec<(String, String)> {
    let mut described: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect();
    described.sort();
    described
}
