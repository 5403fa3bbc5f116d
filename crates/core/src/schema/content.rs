//! Form definitions shared by the Activity and Category forms, which have
//! the same fields and rules.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use super::{validate_optional_image, validate_required_image, FormMode};

/// Form state for a name/description/image entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentValues {
    pub name: String,
    /// Rich-text HTML from the editor widget.
    pub description: String,
    /// Name of the selected image file; empty when none is selected.
    pub image: String,
}

/// Body for create/update of an Activity or Category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPayload {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Validate)]
struct ContentCreateRules {
    #[validate(length(min = 4, max = 100, message = "The name must be 4 to 100 characters long"))]
    name: String,
    #[validate(length(min = 1, message = "A description is required"))]
    description: String,
    #[validate(custom(function = "validate_required_image"))]
    image: String,
}

#[derive(Debug, Validate)]
struct ContentEditRules {
    #[validate(length(min = 4, max = 100, message = "The name must be 4 to 100 characters long"))]
    name: String,
    #[validate(length(min = 1, message = "A description is required"))]
    description: String,
    #[validate(custom(function = "validate_optional_image"))]
    image: String,
}

pub(crate) fn validate(values: &ContentValues, mode: FormMode) -> Result<(), ValidationErrors> {
    let name = values.name.trim().to_string();
    let description = values.description.trim().to_string();
    let image = values.image.clone();
    match mode {
        FormMode::Create => ContentCreateRules {
            name,
            description,
            image,
        }
        .validate(),
        FormMode::Edit(_) => ContentEditRules {
            name,
            description,
            image,
        }
        .validate(),
    }
}

pub(crate) fn payload(values: &ContentValues, image: Option<String>) -> ContentPayload {
    ContentPayload {
        name: values.name.trim().to_string(),
        description: values.description.clone(),
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, description: &str, image: &str) -> ContentValues {
        ContentValues {
            name: name.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }

    #[test]
    fn create_requires_image() {
        let errors = validate(&values("Yoga", "<p>Morning class</p>", ""), FormMode::Create)
            .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("image"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn edit_allows_missing_image() {
        assert!(validate(&values("Yoga", "<p>Morning class</p>", ""), FormMode::Edit(5)).is_ok());
    }

    #[test]
    fn short_name_and_empty_description_fail() {
        let errors = validate(&values("Yo", "   ", "yoga.png"), FormMode::Edit(5)).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
    }

    #[test]
    fn payload_omits_missing_image() {
        let body = serde_json::to_value(payload(&values(" Yoga ", "d", ""), None)).unwrap();
        assert_eq!(body["name"], "Yoga");
        assert!(body.get("image").is_none());
    }

    #[test]
    fn payload_includes_encoded_image() {
        let body = serde_json::to_value(payload(
            &values("Yoga", "d", "yoga.png"),
            Some("data:image/png;base64,AA==".to_string()),
        ))
        .unwrap();
        assert_eq!(body["image"], "data:image/png;base64,AA==");
    }
}
