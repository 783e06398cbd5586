//! Field binding writer

use passport_sheet::Worksheet;
use passport_template::{FieldBinding, ItemKind, ItemRef, Passport, Template};

use crate::render::{merge_span, write_cell};
use crate::report::{RenderReport, SkipReason};
use crate::value::{format_field_value, with_prefix};

/// Write each bound scalar field's formatted value
///
/// Bindings to unknown fields and to table fields are skipped.
pub(crate) fn write_bindings(
    sheet: &mut Worksheet,
    template: &Template,
    passport: &Passport,
    bindings: &[FieldBinding],
    report: &mut RenderReport,
) {
    for (index, binding) in bindings.iter().enumerate() {
        let item = ItemRef {
            kind: ItemKind::Binding,
            index,
        };

        let Some(field) = template.field(&binding.field_key) else {
            report.skip(item, SkipReason::UnknownField(binding.field_key.clone()));
            continue;
        };
        if field.is_table() {
            report.skip(item, SkipReason::TableFieldBinding(binding.field_key.clone()));
            continue;
        }

        let formatted = format_field_value(field.field_type, passport.value(&binding.field_key));
        let value = match &binding.prefix {
            Some(prefix) => with_prefix(prefix, &formatted),
            None => formatted,
        };

        if let Err(err) = write_cell(sheet, binding.row, binding.col, value, binding.style.as_ref()) {
            log::warn!("{} ('{}') not written: {}", item, binding.field_key, err);
            report.skip(item, SkipReason::InvalidCoordinate(err.to_string()));
            continue;
        }
        report.bindings += 1;

        merge_span(sheet, item, binding.row, binding.col, binding.merge.as_ref(), report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use passport_sheet::CellValue;
    use passport_template::{CellStyle, FieldDefinition, FieldType};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn binding(field_key: &str, row: u32, col: u16) -> FieldBinding {
        FieldBinding {
            field_key: field_key.to_string(),
            row,
            col,
            style: None,
            prefix: None,
            merge: None,
        }
    }

    fn template() -> Template {
        let mut template = Template::new("Controller");
        template.fields = vec![
            FieldDefinition::new("serial", "Serial", FieldType::Text),
            FieldDefinition::new("issued", "Issued", FieldType::Date),
            FieldDefinition::new("qty", "Quantity", FieldType::Number),
            FieldDefinition::new("components", "Components", FieldType::Table),
        ];
        template
    }

    fn render(passport: &Passport, bindings: &[FieldBinding]) -> (Worksheet, RenderReport) {
        let mut sheet = Worksheet::new("Sheet1");
        let mut report = RenderReport::default();
        write_bindings(&mut sheet, &template(), passport, bindings, &mut report);
        (sheet, report)
    }

    #[test]
    fn test_date_binding_with_format() {
        let passport = Passport::new("INV-1").with_value("issued", "2024-05-01");
        let mut issued = binding("issued", 4, 3);
        issued.style = Some(CellStyle::number_format("dd.mm.yyyy"));

        let (sheet, report) = render(&passport, &[issued]);

        let cell = sheet.cell("C4").unwrap().unwrap();
        assert_eq!(
            cell.value,
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert_eq!(cell.num_fmt.as_deref(), Some("dd.mm.yyyy"));
        assert_eq!(report.bindings, 1);
    }

    #[test]
    fn test_number_coercion() {
        let passport = Passport::new("INV-1").with_value("qty", "42");
        let (sheet, _) = render(&passport, &[binding("qty", 1, 1)]);
        assert_eq!(sheet.value("A1").unwrap(), CellValue::Number(42.0));

        let passport = Passport::new("INV-1").with_value("qty", "abc");
        let (sheet, _) = render(&passport, &[binding("qty", 1, 1)]);
        assert_eq!(sheet.value("A1").unwrap(), CellValue::from("abc"));
    }

    #[test]
    fn test_prefix_forces_string() {
        let passport = Passport::new("INV-1").with_value("serial", json!(1024));
        let mut serial = binding("serial", 2, 2);
        serial.prefix = Some("S/N ".into());

        let (sheet, _) = render(&passport, &[serial]);
        assert_eq!(sheet.value("B2").unwrap(), CellValue::from("S/N 1024"));
    }

    #[test]
    fn test_missing_value_writes_empty_string() {
        let (sheet, report) = render(&Passport::new("INV-1"), &[binding("serial", 3, 3)]);
        assert_eq!(sheet.value("C3").unwrap(), CellValue::from(""));
        assert!(report.is_clean());
    }

    #[test]
    fn test_unknown_and_table_fields_are_skipped() {
        let passport = Passport::new("INV-1")
            .with_value("nonexistent", "x")
            .with_value("components", json!([{"name": "a"}]));
        let bindings = [binding("nonexistent", 1, 1), binding("components", 2, 1)];

        let (sheet, report) = render(&passport, &bindings);

        assert_eq!(sheet.cell_count(), 0);
        assert_eq!(report.bindings, 0);
        assert_eq!(
            report.skipped.iter().map(|s| s.reason.clone()).collect::<Vec<_>>(),
            vec![
                SkipReason::UnknownField("nonexistent".into()),
                SkipReason::TableFieldBinding("components".into()),
            ]
        );
    }
}
