//! Leg-type label parsing.
//!
//! Labels come from a hand-maintained table and are messy: `"N"`, `"-4"`,
//! `"- 3 / +0,70"`, `"1,5 (obsolete)"`. The grammar in `leg_label.pest`
//! splits a label into its base text, an ignorable parenthesized remark and
//! the text after the first `/`; the functions here reduce those pieces to a
//! normalized base string and an optional offset number.

use crate::{LegLabelParser, Rule};
use pest::Parser;

/// A label reduced to its structural parts. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDecomposition {
    /// Normalized base identifier: `"N"`, `"3"`, `"-4"`, `"1,5"`, ...
    pub base: String,
    /// Fractional offset from the `/` part, dot-decimal.
    pub offset: Option<f64>,
}

/// Decompose a raw label into base and offset.
pub fn decompose(label: &str) -> LabelDecomposition {
    LabelDecomposition {
        base: normalize_base(label),
        offset: parse_offset(label),
    }
}

/// Normalize a label down to its base identifier.
///
/// Truncates at the first `/` or `(`, removes all whitespace and strips a
/// leading `+`. Comma decimal separators are kept as written; numeric
/// interpretation happens later via [`parse_numeric_cell`].
pub fn normalize_base(label: &str) -> String {
    let (base_text, _) = label_parts(label);
    let compact: String = base_text.chars().filter(|c| !c.is_whitespace()).collect();
    match compact.strip_prefix('+') {
        Some(rest) => rest.to_string(),
        None => compact,
    }
}

/// Extract the offset number from a label, if it has a `/` part.
///
/// Takes the text after the first `/`, discards any parenthesized suffix and
/// scans for the first signed decimal number (comma or dot separator).
/// Returns the value dot-normalized, or `None` when the label has no `/` or
/// the `/` part holds no number.
pub fn parse_offset(label: &str) -> Option<f64> {
    let (_, after_slash) = label_parts(label);
    let after_slash = after_slash?;
    let significant = match after_slash.find('(') {
        Some(i) => &after_slash[..i],
        None => after_slash,
    };
    let pairs = LegLabelParser::parse(Rule::number_scan, significant).ok()?;
    let number = pairs
        .flatten()
        .find(|p| p.as_rule() == Rule::number)
        .map(|p| p.as_str().to_string())?;
    number_value(&number)
}

/// Parse a free-form numeric cell: comma or dot decimals, surrounding
/// blanks tolerated, anything else (including empty) is `None`.
pub fn parse_numeric_cell(cell: &str) -> Option<f64> {
    let pairs = LegLabelParser::parse(Rule::cell, cell).ok()?;
    let number = pairs
        .flatten()
        .find(|p| p.as_rule() == Rule::number)
        .map(|p| p.as_str().to_string())?;
    number_value(&number)
}

/// Byte range of the (untrimmed) base text within a raw label. Used to point
/// error spans at the offending characters.
pub(crate) fn base_span(label: &str) -> (usize, usize) {
    let (text, _) = label_parts(label);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (0, label.len());
    }
    // base_text always starts at byte 0 of the label
    let start = text.len() - text.trim_start().len();
    (start, trimmed.len())
}

/// Split a raw label into its base text and the text after the first `/`,
/// via the `label` grammar rule. The rule cannot fail (the base may be
/// empty), but a parse error degrades to "the whole label is the base".
fn label_parts(label: &str) -> (&str, Option<&str>) {
    let Ok(pairs) = LegLabelParser::parse(Rule::label, label) else {
        return (label, None);
    };
    let mut base = "";
    let mut offset = None;
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::base_text => base = pair.as_str(),
            Rule::offset_text => offset = Some(pair.as_str()),
            _ => {}
        }
    }
    (base, offset)
}

/// Turn a matched `number` token into an f64: drop internal blanks (the
/// grammar allows `- 3`), swap a comma decimal separator for a dot.
fn number_value(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_of_plain_labels() {
        assert_eq!(normalize_base("N"), "N");
        assert_eq!(normalize_base(" N "), "N");
        assert_eq!(normalize_base("3"), "3");
        assert_eq!(normalize_base("-4"), "-4");
        assert_eq!(normalize_base("- 3"), "-3");
        assert_eq!(normalize_base("+2"), "2");
        assert_eq!(normalize_base("1,5"), "1,5");
    }

    #[test]
    fn base_truncates_at_slash_and_paren() {
        assert_eq!(normalize_base("- 3 / +0,70"), "-3");
        assert_eq!(normalize_base("1,5 (obsolete)"), "1,5");
        assert_eq!(normalize_base("2 (rev A) / 0.5"), "2");
        assert_eq!(normalize_base("N / 0,35"), "N");
    }

    #[test]
    fn base_is_idempotent() {
        for label in ["N", "- 3 / +0,70", "1,5 (x)", "+2", "-4"] {
            let once = normalize_base(label);
            assert_eq!(normalize_base(&once), once, "label {label:?}");
        }
    }

    #[test]
    fn offset_absent_without_slash() {
        assert_eq!(parse_offset("N"), None);
        assert_eq!(parse_offset("-4"), None);
        assert_eq!(parse_offset("1,5 (0,3)"), None);
    }

    #[test]
    fn offset_reads_comma_and_dot_decimals() {
        assert_eq!(parse_offset("- 3 / +0,70"), Some(0.70));
        assert_eq!(parse_offset("N / 0.35"), Some(0.35));
        assert_eq!(parse_offset("2/-1,2"), Some(-1.2));
        assert_eq!(parse_offset("2 / - 1"), Some(-1.0));
    }

    #[test]
    fn offset_ignores_parenthesized_suffix() {
        assert_eq!(parse_offset("3 / 0,5 (new)"), Some(0.5));
        // the number lives inside the suffix, so there is no offset
        assert_eq!(parse_offset("3 / (0,5)"), None);
    }

    #[test]
    fn offset_without_number_is_none() {
        assert_eq!(parse_offset("3 / tbd"), None);
        assert_eq!(parse_offset("3 /"), None);
    }

    #[test]
    fn numeric_cells() {
        assert_eq!(parse_numeric_cell("8,998"), Some(8.998));
        assert_eq!(parse_numeric_cell(" 7.616 "), Some(7.616));
        assert_eq!(parse_numeric_cell("-2"), Some(-2.0));
        assert_eq!(parse_numeric_cell(""), None);
        assert_eq!(parse_numeric_cell("   "), None);
        assert_eq!(parse_numeric_cell("n/a"), None);
        assert_eq!(parse_numeric_cell("8,998 m"), None);
    }

    #[test]
    fn decompose_combines_base_and_offset() {
        let d = decompose("- 1 / +0,70");
        assert_eq!(d.base, "-1");
        assert_eq!(d.offset, Some(0.70));
    }

    #[test]
    fn base_span_points_at_base_text() {
        assert_eq!(base_span("- 3 / +0,70"), (0, 3));
        assert_eq!(base_span("  xx (y)"), (2, 2));
        assert_eq!(base_span("/5"), (0, 2));
    }
}
