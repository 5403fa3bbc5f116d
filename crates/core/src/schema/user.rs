//! User form: name, email, password, profile image, role.
//!
//! The password is mandatory on create and optional on edit; a blank
//! password on edit is left out of the payload so the stored one is kept.

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use super::{validate_optional_image, FormMode, FormSchema};
use crate::models::{Role, User};

/// Form state for the user form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserValues {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Name of the selected profile image file; empty when none is selected.
    pub image: String,
    pub role: Role,
}

/// Body for create/update of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub role_id: Role,
}

#[derive(Debug, Validate)]
struct UserCreateRules {
    #[validate(length(min = 4, max = 100, message = "The name must be 4 to 100 characters long"))]
    name: String,
    #[validate(email(message = "A valid email is required"))]
    email: String,
    #[validate(length(min = 6, message = "The password must be at least 6 characters long"))]
    password: String,
    #[validate(custom(function = "validate_optional_image"))]
    image: String,
}

#[derive(Debug, Validate)]
struct UserEditRules {
    #[validate(length(min = 4, max = 100, message = "The name must be 4 to 100 characters long"))]
    name: String,
    #[validate(email(message = "A valid email is required"))]
    email: String,
    #[validate(length(min = 6, message = "The password must be at least 6 characters long"))]
    password: Option<String>,
    #[validate(custom(function = "validate_optional_image"))]
    image: String,
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub struct UserSchema;

impl FormSchema for UserSchema {
    type Record = User;
    type Values = UserValues;
    type Payload = UserPayload;

    const ENTITY: &'static str = "user";

    fn initial_values() -> UserValues {
        UserValues::default()
    }

    fn validate(values: &UserValues, mode: FormMode) -> Result<(), ValidationErrors> {
        let name = values.name.trim().to_string();
        let email = values.email.trim().to_string();
        let image = values.image.clone();
        match mode {
            FormMode::Create => UserCreateRules {
                name,
                email,
                password: values.password.clone(),
                image,
            }
            .validate(),
            FormMode::Edit(_) => UserEditRules {
                name,
                email,
                password: non_blank(&values.password),
                image,
            }
            .validate(),
        }
    }

    fn values_from_record(record: &User) -> UserValues {
        UserValues {
            name: record.name.clone(),
            email: record.email.clone(),
            password: String::new(),
            image: String::new(),
            role: record.role_id,
        }
    }

    fn stored_image(record: &User) -> Option<&str> {
        record.profile_image.as_deref()
    }

    fn image_value_mut(values: &mut UserValues) -> &mut String {
        &mut values.image
    }

    fn payload(values: &UserValues, image: Option<String>, mode: FormMode) -> UserPayload {
        let password = match mode {
            FormMode::Create => Some(values.password.clone()),
            FormMode::Edit(_) => non_blank(&values.password),
        };
        UserPayload {
            name: values.name.trim().to_string(),
            email: values.email.trim().to_string(),
            password,
            profile_image: image,
            role_id: values.role,
        }
    }
}
