//! Key/value description block parsing
//!
//! `griddes` and `zaxisdes` print one attribute per line in `key = value`
//! form, grouped into blocks introduced by a `# gridID n` / `# zaxisID n`
//! comment. This module splits such output into blocks of coerced values;
//! the grid and z-axis parsers then map each block onto their record type.

use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::field_parsers::{coerce_scalar, dequote, parse_float_array, split_key_value};
use crate::app::models::{Scalar, Value};
use crate::config::ParserConfig;

/// Shape of one description format
#[derive(Debug, Clone, Copy)]
pub struct BlockLayout {
    /// Comment marker word opening a block (`gridID`)
    pub id_marker: &'static str,
    /// Key whose appearance opens a block when no marker was printed
    pub type_key: &'static str,
    /// Keys whose values are numeric arrays
    pub array_keys: &'static [&'static str],
}

/// One parsed description block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptionBlock {
    pub id: Option<u32>,
    pub entries: BTreeMap<String, Value>,
}

impl DescriptionBlock {
    fn new(id: Option<u32>) -> Self {
        Self {
            id,
            entries: BTreeMap::new(),
        }
    }

    /// Remove and convert a value; values that do not convert stay behind
    fn take_with<T>(&mut self, key: &str, convert: impl Fn(&Value) -> Option<T>) -> Option<T> {
        let converted = convert(self.entries.get(key)?)?;
        self.entries.remove(key);
        Some(converted)
    }

    pub fn take_string(&mut self, key: &str) -> Option<String> {
        self.take_with(key, |value| match value {
            Value::Scalar(scalar) => Some(scalar.to_string()),
            Value::Array(_) => None,
        })
    }

    pub fn take_i64(&mut self, key: &str) -> Option<i64> {
        self.take_with(key, |value| match value {
            Value::Scalar(scalar) => scalar.as_i64(),
            Value::Array(_) => None,
        })
    }

    pub fn take_f64(&mut self, key: &str) -> Option<f64> {
        self.take_with(key, |value| match value {
            Value::Scalar(scalar) => scalar.as_f64(),
            Value::Array(_) => None,
        })
    }

    pub fn take_array(&mut self, key: &str) -> Vec<f64> {
        self.take_with(key, |value| match value {
            Value::Array(values) => Some(values.clone()),
            Value::Scalar(scalar) => scalar.as_f64().map(|v| vec![v]),
        })
        .unwrap_or_default()
    }

    /// Whatever keys the record mapping did not claim
    pub fn into_extra(self) -> BTreeMap<String, Value> {
        self.entries
    }
}

/// Split key/value output into description blocks
///
/// A block opens at an id marker comment, or at the type key when no block
/// is open or the open block already has a type. Lines without `=` extend
/// the most recent array value. Key/value lines before any block are
/// ignored.
pub fn parse_description_blocks(
    output: &str,
    layout: &BlockLayout,
    config: &ParserConfig,
) -> Vec<DescriptionBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<DescriptionBlock> = None;
    let mut open_array: Option<String> = None;

    for line in output.lines() {
        let line = line.trim();

        if line.is_empty() || config.is_banner(line) {
            open_array = None;
            continue;
        }

        if config.is_comment(line) {
            open_array = None;
            if let Some(id) = marker_id(line, layout.id_marker, config) {
                blocks.extend(current.take());
                current = Some(DescriptionBlock::new(Some(id)));
            }
            continue;
        }

        let Some((key, value)) = split_key_value(line) else {
            match (current.as_mut(), open_array.as_deref()) {
                (Some(block), Some(key)) => {
                    if let Some(Value::Array(values)) = block.entries.get_mut(key) {
                        values.extend(parse_float_array(line));
                    }
                }
                _ => trace!("Skipping non key/value line: {}", line),
            }
            continue;
        };

        let opens_block = key == layout.type_key
            && current
                .as_ref()
                .is_none_or(|block| block.entries.contains_key(layout.type_key));
        if opens_block {
            blocks.extend(current.take());
            current = Some(DescriptionBlock::new(None));
        }

        let Some(block) = current.as_mut() else {
            debug!("Ignoring '{}' outside of a {} block", key, layout.id_marker);
            open_array = None;
            continue;
        };

        if layout.array_keys.contains(&key) {
            block
                .entries
                .insert(key.to_string(), Value::Array(parse_float_array(value)));
            open_array = Some(key.to_string());
        } else {
            block.entries.insert(
                key.to_string(),
                Value::Scalar(coerce_scalar(dequote(value))),
            );
            open_array = None;
        }
    }

    blocks.extend(current);
    blocks
}

/// Extract `n` from a `# <marker> n` comment line
fn marker_id(line: &str, marker: &str, config: &ParserConfig) -> Option<u32> {
    let body = line.strip_prefix(config.comment_marker)?.trim();
    let id = body.strip_prefix(marker)?.trim();
    match coerce_scalar(id) {
        Scalar::Int(value) => u32::try_from(value).ok(),
        _ => None,
    }
}
