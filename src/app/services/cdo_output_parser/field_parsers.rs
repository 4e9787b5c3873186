//! Field parsing utilities for CDO text output
//!
//! This module provides the token-level helpers every output parser shares:
//! scalar coercion, numeric array extraction, de-quoting and `key = value`
//! splitting. None of them fail; anything unparseable is left as text or
//! dropped.

use crate::app::models::Scalar;
use crate::config::ParserConfig;

/// Classify a token as integer, float or string
///
/// Integers may carry a leading sign (`-179` is common for grid origins).
/// A float must contain at least one digit, so words such as `inf` or `nan`
/// stay text.
pub fn coerce_scalar(token: &str) -> Scalar {
    let token = token.trim();

    if is_integer(token) {
        if let Ok(value) = token.parse::<i64>() {
            return Scalar::Int(value);
        }
    }

    match parse_number(token) {
        Some(value) => Scalar::Float(value),
        None => Scalar::Text(token.to_string()),
    }
}

/// Parse a single numeric token, rejecting digit-free spellings
pub fn parse_number(token: &str) -> Option<f64> {
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<f64>().ok()
}

/// Parse every whitespace-separated numeric token, skipping the rest
pub fn parse_float_array(values: &str) -> Vec<f64> {
    values.split_whitespace().filter_map(parse_number).collect()
}

/// Strip exactly one matching pair of double or single quotes
pub fn dequote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Split a line once at the first `=`, trimming both sides
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Check whether a trimmed line carries no data (blank, comment or banner)
pub fn is_noise(line: &str, config: &ParserConfig) -> bool {
    line.is_empty() || config.is_comment(line) || config.is_banner(line)
}

fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce_scalar("64800"), Scalar::Int(64800));
        assert_eq!(coerce_scalar("-12"), Scalar::Int(-12));
        assert_eq!(coerce_scalar(" 0 "), Scalar::Int(0));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_scalar("-179.5"), Scalar::Float(-179.5));
        assert_eq!(coerce_scalar("1e-3"), Scalar::Float(0.001));
        // Overflows i64 but is still a number
        assert_eq!(
            coerce_scalar("99999999999999999999"),
            Scalar::Float(1e20)
        );
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_scalar("lonlat"), Scalar::Text("lonlat".into()));
        assert_eq!(coerce_scalar("inf"), Scalar::Text("inf".into()));
        assert_eq!(coerce_scalar("-"), Scalar::Text("-".into()));
        assert_eq!(coerce_scalar(""), Scalar::Text(String::new()));
    }

    #[test]
    fn test_parse_float_array_drops_junk() {
        assert_eq!(
            parse_float_array("1000 850 hPa 500\t250"),
            vec![1000.0, 850.0, 500.0, 250.0]
        );
        assert!(parse_float_array("no numbers here").is_empty());
        assert!(parse_float_array("").is_empty());
    }

    #[test]
    fn test_dequote_strips_one_pair() {
        assert_eq!(dequote("\"Climate Model\""), "Climate Model");
        assert_eq!(dequote("'Climate Model'"), "Climate Model");
        assert_eq!(dequote("\"\"quoted\"\""), "\"quoted\"");
        assert_eq!(dequote("\"unbalanced'"), "\"unbalanced'");
        assert_eq!(dequote("\""), "\"");
        assert_eq!(dequote("plain"), "plain");
    }

    #[test]
    fn test_split_key_value_first_equals() {
        assert_eq!(
            split_key_value("history = a=b c"),
            Some(("history", "a=b c"))
        );
        assert_eq!(split_key_value("no separator"), None);
    }

    #[test]
    fn test_is_noise() {
        let config = ParserConfig::default();
        assert!(is_noise("", &config));
        assert!(is_noise("# gridID 1", &config));
        assert!(is_noise("cdo    griddes: Processed 1 variable [0.02s 44MB]", &config));
        assert!(!is_noise("gridtype = lonlat", &config));
    }
}
