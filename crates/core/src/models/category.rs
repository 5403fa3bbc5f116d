use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A news/content category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_description_reads_as_empty() {
        let category: Category =
            serde_json::from_str(r#"{"id": 2, "name": "News", "description": null}"#).unwrap();
        assert_eq!(category.name, "News");
        assert_eq!(category.description, "");
        assert!(category.image.is_none());
    }
}
