//! Template document

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TemplateResult;
use crate::field::FieldDefinition;
use crate::layout::Layout;

/// A versioned passport blueprint tied to one device model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default = "first_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_model_id: Option<String>,
    /// Ordered field schema
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    /// Spreadsheet layout; required for export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

fn first_version() -> u32 {
    1
}

impl Template {
    /// Create an empty template with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            version: first_version(),
            device_model_id: None,
            fields: Vec::new(),
            layout: None,
        }
    }

    /// Find a field definition by key
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Parse a template from JSON text
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a template from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> TemplateResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> TemplateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
