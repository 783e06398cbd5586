//! Passport document (field values of one device)

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TemplateResult;
use crate::field::FieldType;
use crate::template::Template;

/// One filled instance of a template for one device
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Inventory tag of the device; used in export file names
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub version: u32,
    /// Raw values keyed by field key
    #[serde(default)]
    pub field_values: Map<String, Value>,
}

impl Passport {
    /// Create an empty passport for the given asset tag
    pub fn new<S: Into<String>>(asset_tag: S) -> Self {
        Self {
            asset_tag: asset_tag.into(),
            version: 1,
            ..Default::default()
        }
    }

    /// Builder-style value setter
    pub fn with_value<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.field_values.insert(key.into(), value.into());
        self
    }

    /// Raw value of a field, if present
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.field_values.get(key)
    }

    /// Blank passport for a template: `[]` for tables, `false` for
    /// checkboxes, `null` for everything else.
    pub fn scaffold<S: Into<String>>(template: &Template, asset_tag: S) -> Self {
        let field_values = template
            .fields
            .iter()
            .map(|field| {
                let blank = match field.field_type {
                    FieldType::Table => Value::Array(Vec::new()),
                    FieldType::Checkbox => Value::Bool(false),
                    _ => Value::Null,
                };
                (field.key.clone(), blank)
            })
            .collect();

        Self {
            template_id: (!template.id.is_empty()).then(|| template.id.clone()),
            field_values,
            ..Self::new(asset_tag)
        }
    }

    /// Parse a passport from JSON text
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a passport from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> TemplateResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDefinition;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let passport = Passport::from_json(
            r#"{
                "assetTag": "INV-000042",
                "version": 3,
                "fieldValues": {
                    "manufacturedAt": "2024-05-01",
                    "components": [{"name": "Контроллер", "qty": 1}]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(passport.asset_tag, "INV-000042");
        assert_eq!(passport.version, 3);
        assert_eq!(passport.value("manufacturedAt"), Some(&json!("2024-05-01")));
        assert!(passport.value("components").unwrap().is_array());
        assert!(passport.value("missing").is_none());
    }

    #[test]
    fn test_scaffold() {
        let mut template = Template::new("Router");
        template.id = "tpl-1".into();
        template.fields = vec![
            FieldDefinition::new("serial", "Serial", FieldType::Text),
            FieldDefinition::new("tested", "Tested", FieldType::Checkbox),
            FieldDefinition::new("parts", "Parts", FieldType::Table),
        ];

        let passport = Passport::scaffold(&template, "INV-7");
        assert_eq!(passport.asset_tag, "INV-7");
        assert_eq!(passport.template_id.as_deref(), Some("tpl-1"));
        assert_eq!(passport.version, 1);
        assert_eq!(passport.value("serial"), Some(&Value::Null));
        assert_eq!(passport.value("tested"), Some(&json!(false)));
        assert_eq!(passport.value("parts"), Some(&json!([])));
    }

    #[test]
    fn test_with_value() {
        let passport = Passport::new("A1").with_value("qty", 5);
        assert_eq!(passport.value("qty"), Some(&json!(5)));
    }
}
