//! Field schema types

use serde::{Deserialize, Serialize};

/// Declared type of a template field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Select,
    Checkbox,
    Multiline,
    /// Repeating rows; values are arrays of records
    Table,
}

/// Declared type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Date,
}

/// Column of a `table` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// Key of the value inside each row record
    pub key: String,
    /// Column title shown in headers
    pub title: String,
    /// Declared column type
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
}

/// One field of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Stable identifier used for value lookup
    pub key: String,
    /// Display text
    pub label: String,
    /// Declared type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Columns (table fields only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnDefinition>,
    /// Minimum number of rows (table fields only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rows: Option<u32>,
    /// Maximum number of rows (table fields only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Choices of a `select` field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldDefinition {
    /// Create a field with the given key, label and type
    pub fn new<K: Into<String>, L: Into<String>>(key: K, label: L, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            columns: Vec::new(),
            min_rows: None,
            max_rows: None,
            required: false,
            options: Vec::new(),
            placeholder: None,
        }
    }

    /// Check whether this is a repeating-row field
    pub fn is_table(&self) -> bool {
        self.field_type == FieldType::Table
    }

    /// Find a column definition by key
    pub fn column(&self, key: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_table_field() {
        let json = r#"{
            "key": "components",
            "label": "Комплектация",
            "type": "table",
            "columns": [
                {"key": "name", "title": "Наименование", "type": "text"},
                {"key": "qty", "title": "Кол-во", "type": "number"}
            ],
            "minRows": 1,
            "maxRows": 3
        }"#;

        let field: FieldDefinition = serde_json::from_str(json).unwrap();
        assert!(field.is_table());
        assert_eq!(field.columns.len(), 2);
        assert_eq!(field.column("qty").unwrap().column_type, ColumnType::Number);
        assert_eq!((field.min_rows, field.max_rows), (Some(1), Some(3)));
        assert!(!field.required);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"key": "x", "label": "X", "type": "color"}"#;
        assert!(serde_json::from_str::<FieldDefinition>(json).is_err());
    }

    #[test]
    fn test_serialize_skips_empty() {
        let field = FieldDefinition::new("serial", "Serial", FieldType::Text);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"{"key":"serial","label":"Serial","type":"text"}"#);
    }
}
