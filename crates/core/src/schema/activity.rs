use validator::ValidationErrors;

use super::content::{self, ContentPayload, ContentValues};
use super::{FormMode, FormSchema};
use crate::models::Activity;

/// Activity form: name, rich-text description, image.
pub struct ActivitySchema;

impl FormSchema for ActivitySchema {
    type Record = Activity;
    type Values = ContentValues;
    type Payload = ContentPayload;

    const ENTITY: &'static str = "activity";

    fn initial_values() -> ContentValues {
        ContentValues::default()
    }

    fn validate(values: &ContentValues, mode: FormMode) -> Result<(), ValidationErrors> {
        content::validate(values, mode)
    }

    fn values_from_record(record: &Activity) -> ContentValues {
        ContentValues {
            name: record.name.clone(),
            description: record.description.clone(),
            image: String::new(),
        }
    }

    fn stored_image(record: &Activity) -> Option<&str> {
        record.image.as_deref()
    }

    fn image_value_mut(values: &mut ContentValues) -> &mut String {
        &mut values.image
    }

    fn payload(values: &ContentValues, image: Option<String>, _mode: FormMode) -> ContentPayload {
        content::payload(values, image)
    }
}
