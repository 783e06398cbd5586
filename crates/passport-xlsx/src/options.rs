//! Export options

/// Environment variable overriding [`ExportOptions::default_date_format`]
pub const ENV_DATE_FORMAT: &str = "PASSPORT_DATE_FORMAT";
/// Environment variable overriding [`ExportOptions::default_datetime_format`]
pub const ENV_DATETIME_FORMAT: &str = "PASSPORT_DATETIME_FORMAT";
/// Environment variable overriding [`ExportOptions::file_name_prefix`]
pub const ENV_FILE_PREFIX: &str = "PASSPORT_FILE_PREFIX";

/// Options for writing passport workbooks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Number format for date cells without one (default: `yyyy-mm-dd`)
    pub default_date_format: String,
    /// Number format for date-time cells without one
    /// (default: `yyyy-mm-dd hh:mm:ss`)
    pub default_datetime_format: String,
    /// Prefix of generated file names (default: `passport_`)
    pub file_name_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            default_date_format: "yyyy-mm-dd".to_string(),
            default_datetime_format: "yyyy-mm-dd hh:mm:ss".to_string(),
            file_name_prefix: "passport_".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with `PASSPORT_*` environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup; blank values are ignored
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(format) = value_of(ENV_DATE_FORMAT) {
            self.default_date_format = format;
        }
        if let Some(format) = value_of(ENV_DATETIME_FORMAT) {
            self.default_datetime_format = format;
        }
        if let Some(prefix) = value_of(ENV_FILE_PREFIX) {
            self.file_name_prefix = prefix;
        }
        self
    }

    pub fn with_date_format<S: Into<String>>(mut self, format: S) -> Self {
        self.default_date_format = format.into();
        self
    }

    pub fn with_datetime_format<S: Into<String>>(mut self, format: S) -> Self {
        self.default_datetime_format = format.into();
        self
    }

    pub fn with_file_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_name_prefix = prefix.into();
        self
    }
}
