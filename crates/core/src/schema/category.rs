use validator::ValidationErrors;

use super::content::{self, ContentPayload, ContentValues};
use super::{FormMode, FormSchema};
use crate::models::Category;

/// Category form: same fields and rules as the activity form.
pub struct CategorySchema;

impl FormSchema for CategorySchema {
    type Record = Category;
    type Values = ContentValues;
    type Payload = ContentPayload;

    const ENTITY: &'static str = "category";

    fn initial_values() -> ContentValues {
        ContentValues::default()
    }

    fn validate(values: &ContentValues, mode: FormMode) -> Result<(), ValidationErrors> {
        content::validate(values, mode)
    }

    fn values_from_record(record: &Category) -> ContentValues {
        ContentValues {
            name: record.name.clone(),
            description: record.description.clone(),
            image: String::new(),
        }
    }

    fn stored_image(record: &Category) -> Option<&str> {
        record.image.as_deref()
    }

    fn image_value_mut(values: &mut ContentValues) -> &mut String {
        &mut values.image
    }

    fn payload(values: &ContentValues, image: Option<String>, _mode: FormMode) -> ContentPayload {
        content::payload(values, image)
    }
}
