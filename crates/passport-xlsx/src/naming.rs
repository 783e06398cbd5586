//! Export file and sheet names

/// Longest sheet name a workbook accepts
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Excel keeps this name for its change-tracking sheet
const RESERVED_SHEET_NAME: &str = "History";

/// File name of an exported passport: `{prefix}{asset_tag}_v{version}.xlsx`
///
/// Characters that are unsafe in file names become `_`.
///
/// ```rust
/// use passport_xlsx::export_file_name;
///
/// assert_eq!(export_file_name("passport_", "INV-000042", 3), "passport_INV-000042_v3.xlsx");
/// assert_eq!(export_file_name("passport_", "A/B:7", 1), "passport_A_B_7_v1.xlsx");
/// ```
pub fn export_file_name(prefix: &str, asset_tag: &str, version: u32) -> String {
    let stem = format!("{}{}_v{}", prefix, asset_tag, version);
    format!("{}.xlsx", replace_unsafe(&stem))
}

fn replace_unsafe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Make a name acceptable as a worksheet name
///
/// Replaces `[]:*?/\`, truncates to 31 characters and then strips
/// surrounding apostrophes and whitespace. A name left empty becomes
/// `Sheet1`; the reserved `History` becomes `History_`.
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c => c,
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c == '\'' || c.is_whitespace());

    if trimmed.is_empty() {
        "Sheet1".to_string()
    } else if trimmed.eq_ignore_ascii_case(RESERVED_SHEET_NAME) {
        format!("{}_", trimmed)
    } else {
        trimmed.to_string()
    }
}
