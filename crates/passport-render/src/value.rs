//! Field value formatting
//!
//! Passport values arrive as loose JSON. These helpers coerce them into cell
//! values according to the field's declared type, falling back to the raw
//! text whenever a coercion does not apply.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use passport_sheet::CellValue;
use passport_template::FieldType;
use serde_json::Value;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Coerce a bound field's raw value into a cell value
///
/// - missing or `null` becomes an empty string
/// - arrays are joined with `", "`
/// - `date` fields parse date strings; unparseable text passes through
/// - `number` fields parse numeric strings; unparseable text passes through
/// - everything else is written as-is
pub fn format_field_value(field_type: FieldType, raw: Option<&Value>) -> CellValue {
    match raw {
        None | Some(Value::Null) => CellValue::String(String::new()),
        Some(Value::Array(items)) => CellValue::String(join_values(items)),
        Some(Value::String(text)) => match field_type {
            FieldType::Date => parse_date(text).unwrap_or_else(|| CellValue::from(text.as_str())),
            FieldType::Number => parse_number(text)
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::from(text.as_str())),
            _ => CellValue::from(text.as_str()),
        },
        Some(other) => json_to_cell(other),
    }
}

/// Prefix a formatted value; the result is always a string cell
pub fn with_prefix(prefix: &str, value: &CellValue) -> CellValue {
    CellValue::String(format!("{}{}", prefix, value))
}

/// Coerce one table cell: missing or `null` is an empty string
pub fn format_table_cell(raw: Option<&Value>) -> CellValue {
    match raw {
        None | Some(Value::Null) => CellValue::String(String::new()),
        Some(value) => json_to_cell(value),
    }
}

/// Convert a JSON value verbatim (static cells and table cells)
pub fn json_to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Boolean(*b),
        Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
        Value::String(s) => CellValue::from(s.as_str()),
        Value::Array(items) => CellValue::String(join_values(items)),
        Value::Object(_) => CellValue::String(value.to_string()),
    }
}

/// Parse the date spellings passports commonly carry
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (normalized to UTC), ISO
/// date-times without an offset and `DD.MM.YYYY`.
pub fn parse_date(text: &str) -> Option<CellValue> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(CellValue::Date(date));
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(CellValue::DateTime(stamp.naive_utc()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(text, format) {
            return Some(CellValue::DateTime(stamp));
        }
    }
    NaiveDate::parse_from_str(text, "%d.%m.%Y")
        .ok()
        .map(CellValue::Date)
}

/// Parse a numeric string; blank and non-finite input is not a number
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn join_values(items: &[Value]) -> String {
    items
        .iter()
        .map(display_item)
        .collect::<Vec<_>>()
        .join(", ")
}

// Nested arrays flatten with a bare comma.
fn display_item(item: &Value) -> String {
    match item {
        Value::Null => String::new(),
        Value::Array(inner) => inner
            .iter()
            .map(display_item)
            .collect::<Vec<_>>()
            .join(","),
        other => json_to_cell(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> CellValue {
        CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_missing_and_null_become_empty_string() {
        assert_eq!(format_field_value(FieldType::Text, None), CellValue::from(""));
        assert_eq!(format_field_value(FieldType::Date, Some(&Value::Null)), CellValue::from(""));
    }

    #[test]
    fn test_date_strings() {
        let iso = json!("2024-05-01");
        assert_eq!(format_field_value(FieldType::Date, Some(&iso)), date(2024, 5, 1));

        let dotted = json!("01.05.2024");
        assert_eq!(format_field_value(FieldType::Date, Some(&dotted)), date(2024, 5, 1));

        let stamp = json!("2024-05-01T10:30:00Z");
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            format_field_value(FieldType::Date, Some(&stamp)),
            CellValue::DateTime(expected)
        );
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let raw = json!("sometime next week");
        assert_eq!(
            format_field_value(FieldType::Date, Some(&raw)),
            CellValue::from("sometime next week")
        );
    }

    #[test]
    fn test_number_strings() {
        assert_eq!(format_field_value(FieldType::Number, Some(&json!("42"))), CellValue::Number(42.0));
        assert_eq!(format_field_value(FieldType::Number, Some(&json!(" 2.5 "))), CellValue::Number(2.5));
        assert_eq!(format_field_value(FieldType::Number, Some(&json!("abc"))), CellValue::from("abc"));
        assert_eq!(format_field_value(FieldType::Number, Some(&json!(""))), CellValue::from(""));
        assert_eq!(format_field_value(FieldType::Number, Some(&json!("NaN"))), CellValue::from("NaN"));
    }

    #[test]
    fn test_text_field_keeps_numeric_looking_text() {
        assert_eq!(format_field_value(FieldType::Text, Some(&json!("0042"))), CellValue::from("0042"));
    }

    #[test]
    fn test_arrays_join() {
        let raw = json!(["a", 2, true, null, 1.5]);
        assert_eq!(
            format_field_value(FieldType::Select, Some(&raw)),
            CellValue::from("a, 2, true, , 1.5")
        );

        let nested = json!([1, [2, 3]]);
        assert_eq!(format_field_value(FieldType::Text, Some(&nested)), CellValue::from("1, 2,3"));
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(format_field_value(FieldType::Checkbox, Some(&json!(true))), CellValue::Boolean(true));
        assert_eq!(format_field_value(FieldType::Text, Some(&json!(7))), CellValue::Number(7.0));
    }

    #[test]
    fn test_prefix() {
        assert_eq!(with_prefix("S/N: ", &CellValue::Number(42.0)), CellValue::from("S/N: 42"));
        assert_eq!(with_prefix("от ", &date(2024, 5, 1)), CellValue::from("от 2024-05-01"));
        assert_eq!(with_prefix("№", &CellValue::from("")), CellValue::from("№"));
    }

    #[test]
    fn test_table_cell() {
        assert_eq!(format_table_cell(None), CellValue::from(""));
        assert_eq!(format_table_cell(Some(&json!(2))), CellValue::Number(2.0));
        assert_eq!(format_table_cell(Some(&json!(["a", "b"]))), CellValue::from("a, b"));
        assert_eq!(format_table_cell(Some(&json!("2024-05-01"))), CellValue::from("2024-05-01"));
    }

    #[test]
    fn test_json_to_cell() {
        assert_eq!(json_to_cell(&Value::Null), CellValue::Empty);
        assert_eq!(json_to_cell(&json!({"a": 1})), CellValue::from(r#"{"a":1}"#));
    }
}
