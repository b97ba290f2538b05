//! Text formatting for headers, labels and cells.

use crate::table::CellValue;

/// Upper-case the first character only; the rest keeps its casing.
///
/// `"parameter"` becomes `"Parameter"`, `"OEM Source"` stays as is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a camelCase or snake_case key into Title Case words.
///
/// `"timingChain"` becomes `"Timing Chain"`, `"oem_part_number"` becomes
/// `"Oem Part Number"`. Runs of capitals stay together.
pub fn title_case_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in key.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        let boundary = c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| capitalize_first(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cell text; absent or null values render as the empty string
pub fn display_value(value: Option<&CellValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_only_touches_first_char() {
        assert_eq!(capitalize_first("parameter"), "Parameter");
        assert_eq!(capitalize_first("OEM Source"), "OEM Source");
        assert_eq!(capitalize_first("oem source"), "Oem source");
        assert_eq!(capitalize_first("value"), "Value");
        assert_eq!(capitalize_first("mAX power"), "MAX power");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_first_unicode() {
        assert_eq!(capitalize_first("ölwechsel"), "Ölwechsel");
        assert_eq!(capitalize_first("ßtest"), "SStest");
    }

    #[test]
    fn title_case_splits_camel_and_snake() {
        assert_eq!(title_case_key("timingChain"), "Timing Chain");
        assert_eq!(title_case_key("fuelType"), "Fuel Type");
        assert_eq!(title_case_key("oem_part_number"), "Oem Part Number");
        assert_eq!(title_case_key("evidence"), "Evidence");
        assert_eq!(title_case_key("euro5Rating"), "Euro5 Rating");
        assert_eq!(title_case_key("OEMCode"), "OEMCode");
        assert_eq!(title_case_key("__lead"), "Lead");
        assert_eq!(title_case_key(""), "");
    }

    #[test]
    fn display_value_blank_for_null() {
        assert_eq!(display_value(None), "");
        assert_eq!(display_value(Some(&CellValue::from("350 Nm"))), "350 Nm");
        assert_eq!(display_value(Some(&CellValue::from(130i64))), "130");
    }
}
