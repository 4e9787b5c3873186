//! Attribute dump parsing (`showattsglob`, `showatts`)
//!
//! Both parsers are lenient: lines that are not `key = value` pairs or group
//! headers are skipped, and empty input gives an empty map.

use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::OutputParser;
use super::field_parsers::{dequote, is_noise, split_key_value};
use crate::Result;
use crate::app::models::{GlobalAttributes, VariableAttributes};
use crate::config::ParserConfig;

/// Literal phrase marking a per-variable attribute group header
const ATTRIBUTES_PHRASE: &str = "attributes";

/// Parser for `showattsglob` output: flat `name = value` pairs
#[derive(Debug, Clone, Default)]
pub struct ShowattsglobParser {
    config: ParserConfig,
}

impl ShowattsglobParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for ShowattsglobParser {
    type Output = GlobalAttributes;

    const NAME: &'static str = "showattsglob";

    fn parse(&self, output: &str) -> Result<GlobalAttributes> {
        let mut attributes = GlobalAttributes::new();

        for line in output.lines() {
            let line = line.trim();
            if is_noise(line, &self.config) {
                continue;
            }

            match split_key_value(line) {
                // Later duplicates overwrite earlier ones
                Some((key, value)) => {
                    attributes.insert(key.to_string(), dequote(value).to_string());
                }
                None => trace!("Ignoring non-attribute line: {}", line),
            }
        }

        debug!("Parsed {} global attributes", attributes.len());
        Ok(attributes)
    }
}

/// Parser for `showatts` output: attributes grouped under variable headers
///
/// A header is a line without `=` that ends in `:` or contains `attributes:`;
/// its name is the line without the trailing colon and the word `attributes`.
#[derive(Debug, Clone, Default)]
pub struct ShowattsParser {
    config: ParserConfig,
}

impl ShowattsParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for ShowattsParser {
    type Output = VariableAttributes;

    const NAME: &'static str = "showatts";

    fn parse(&self, output: &str) -> Result<VariableAttributes> {
        let mut attributes = VariableAttributes::new();
        let mut current: Option<String> = None;

        for line in output.lines() {
            let line = line.trim();
            if is_noise(line, &self.config) {
                continue;
            }

            if let Some(group) = group_name(line) {
                attributes.entry(group.clone()).or_insert_with(BTreeMap::new);
                current = Some(group);
                continue;
            }

            match (current.as_ref(), split_key_value(line)) {
                (Some(group), Some((key, value))) => {
                    if let Some(group_attributes) = attributes.get_mut(group) {
                        group_attributes.insert(key.to_string(), dequote(value).to_string());
                    }
                }
                (None, Some((key, _))) => {
                    debug!("Attribute '{}' appears before any variable header", key)
                }
                _ => trace!("Ignoring non-attribute line: {}", line),
            }
        }

        debug!("Parsed attributes for {} variables", attributes.len());
        Ok(attributes)
    }
}

/// Group name when the line is a variable header
fn group_name(line: &str) -> Option<String> {
    if line.contains('=') {
        return None;
    }
    let lowered = line.to_ascii_lowercase();
    let is_header =
        lowered.contains(&format!("{}:", ATTRIBUTES_PHRASE)) || line.ends_with(':');
    if !is_header {
        return None;
    }

    let name = line.trim_end_matches(':').trim();
    let name = if name.to_ascii_lowercase().contains(ATTRIBUTES_PHRASE) {
        strip_word(name, ATTRIBUTES_PHRASE)
    } else {
        name.to_string()
    };
    Some(name.trim().to_string())
}

/// Remove every case-insensitive occurrence of `word`
fn strip_word(text: &str, word: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(position) = rest.to_ascii_lowercase().find(word) {
        result.push_str(&rest[..position]);
        rest = &rest[position + word.len()..];
    }
    result.push_str(rest);
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}
