//! Overview key and value formatting.
//!
//! Overview payloads key their metrics by camel-case identifiers, often
//! with embedded acronyms (`evToEBITDA`, `dilutedEPSTTM`). The key
//! formatter splits those into capitalized, space-separated labels; the
//! value formatter picks a rendering per field (dates, ratios, plain
//! numbers, nested objects, missing values).

use serde_json::Value;

use tickerdash_core::OverviewRecord;

use crate::table::{CellAlign, Grid, GridColumn, PLACEHOLDER};

/// Turn a camel-case metric identifier into a display label.
///
/// A space is inserted at every lowercase-to-uppercase boundary and inside
/// an uppercase run right before its last capital when that capital starts
/// a new word (`EBITDAValue` → `EBITDA Value`). Digits pass through
/// unchanged. The first character is capitalized last.
pub fn format_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut label = String::with_capacity(key.len() + 8);

    for (index, &ch) in chars.iter().enumerate() {
        if index > 0 {
            let prev = chars[index - 1];
            let next_is_lower = chars
                .get(index + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            let word_start = (prev.is_ascii_lowercase() && ch.is_ascii_uppercase())
                || (prev.is_ascii_uppercase() && ch.is_ascii_uppercase() && next_is_lower);
            if word_start {
                label.push(' ');
            }
        }
        label.push(ch);
    }

    let mut rest = label.chars();
    match rest.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + rest.as_str(),
        None => label,
    }
}

/// Render one overview value according to its key.
///
/// Rules, in order: date-keyed present values render as a locale date;
/// yield/ratio/beta-keyed or numeric values render with two fractional
/// digits and thousands grouping; nested objects render serialized; null
/// and empty values render as the placeholder; everything else renders as
/// its string form.
pub fn format_value(key: &str, value: &Value) -> String {
    if key.contains("Date") && !value.is_null() {
        return format_date(value);
    }

    let ratio_keyed = key.contains("Yield") || key.contains("Ratio") || key.contains("Beta");
    if ratio_keyed || value.is_number() {
        if let Some(number) = numeric_reading(value) {
            return group_thousands(number);
        }
    }

    match value {
        Value::Null => String::from(PLACEHOLDER),
        Value::String(text) if text.is_empty() => String::from(PLACEHOLDER),
        Value::String(text) => text.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| String::from(PLACEHOLDER))
        }
        other => other.to_string(),
    }
}

/// Project an overview payload into a two-column Metric/Value grid.
/// The `description` field is excluded by the record itself.
pub fn project(overview: &OverviewRecord) -> Grid {
    let columns = vec![
        GridColumn::new("Metric", CellAlign::Left),
        GridColumn::new("Value", CellAlign::Right),
    ];

    let rows = overview
        .entries()
        .map(|(key, value)| vec![format_key(key), format_value(key, value)])
        .collect();

    Grid { columns, rows }
}

fn format_date(value: &Value) -> String {
    let text = match value {
        Value::String(text) => text.as_str(),
        other => return other.to_string(),
    };

    let format = time::format_description::parse("[year]-[month]-[day]")
        .expect("date format description is valid");
    match time::Date::parse(text, &format) {
        Ok(date) => format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()),
        Err(_) => text.to_owned(),
    }
}

fn numeric_reading(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Two fractional digits with comma thousands grouping (`1234567.891`
/// → `1,234,567.89`).
fn group_thousands(number: f64) -> String {
    let fixed = format!("{number:.2}");
    let (integer, fraction) = fixed
        .split_once('.')
        .expect("fixed-point format always has a fraction");
    let (sign, digits) = integer
        .strip_prefix('-')
        .map_or(("", integer), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_acronyms_from_following_words() {
        assert_eq!(format_key("evToEBITDA"), "Ev To EBITDA");
        assert_eq!(format_key("dividendPerShare"), "Dividend Per Share");
        assert_eq!(format_key("adjustedEBITDA"), "Adjusted EBITDA");
        assert_eq!(format_key("EBITDAMargin"), "EBITDA Margin");
        assert_eq!(format_key("name"), "Name");
        assert_eq!(format_key(""), "");
    }

    #[test]
    fn date_keys_render_as_locale_dates() {
        assert_eq!(
            format_value("exDividendDate", &json!("2024-02-09")),
            "2/9/2024"
        );
        // Unparseable date-like content falls back to the raw text.
        assert_eq!(format_value("dividendDate", &json!("soon")), "soon");
        assert_eq!(format_value("dividendDate", &Value::Null), PLACEHOLDER);
    }

    #[test]
    fn ratio_keys_and_numbers_get_two_fraction_digits() {
        assert_eq!(format_value("peRatio", &json!("28.1")), "28.10");
        assert_eq!(format_value("beta", &json!(1.286)), "1.29");
        assert_eq!(format_value("dividendYield", &json!("0.0044")), "0.00");
        assert_eq!(
            format_value("marketCapitalization", &json!(2866933336000.0_f64)),
            "2,866,933,336,000.00"
        );
        assert_eq!(format_value("sharesOutstanding", &json!(-15441900.0)), "-15,441,900.00");
        // Ratio-keyed but not numeric: fall through to the string form.
        assert_eq!(format_value("pegRatio", &json!("None")), "None");
    }

    #[test]
    fn objects_render_serialized_and_missing_values_render_placeholder() {
        assert_eq!(
            format_value("analystRatings", &json!({"strongBuy": 11})),
            "{\"strongBuy\":11}"
        );
        assert_eq!(format_value("sector", &Value::Null), PLACEHOLDER);
        assert_eq!(format_value("sector", &json!("")), PLACEHOLDER);
        assert_eq!(format_value("sector", &json!("TECHNOLOGY")), "TECHNOLOGY");
    }

    #[test]
    fn overview_grid_pairs_labels_with_formatted_values() {
        let mut overview = OverviewRecord::new();
        overview.insert("name", json!("Apple Inc"));
        overview.insert("evToEBITDA", json!("22.4"));
        overview.insert("description", json!("never rendered"));

        let grid = project(&overview);

        assert_eq!(grid.columns.len(), 2);
        assert_eq!(grid.row_count(), 2);
        assert!(grid
            .rows
            .iter()
            .any(|row| row[0] == "Ev To EBITDA" && row[1] == "22.40"));
        assert!(grid.rows.iter().all(|row| row[1] != "never rendered"));
    }
}
