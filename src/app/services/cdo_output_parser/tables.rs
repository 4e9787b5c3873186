//! Tolerant row parsers for `partab`, `vct` and `vlist` output
//!
//! These formats vary between CDO versions, so every non-empty, non-comment
//! line is accepted and read positionally. Nothing here fails.

use tracing::{debug, trace};

use super::OutputParser;
use super::field_parsers::{is_noise, parse_float_array};
use crate::Result;
use crate::app::models::{NumericArray, ParameterRow, VariableListEntry};
use crate::config::ParserConfig;

const PARAMETER_DELIMITER: char = '|';
const VCT_ARRAY_NAME: &str = "vct";

/// Parser for `partab` / `codetab` output
#[derive(Debug, Clone, Default)]
pub struct PartabParser {
    config: ParserConfig,
}

impl PartabParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for PartabParser {
    type Output = Vec<ParameterRow>;

    const NAME: &'static str = "partab";

    fn parse(&self, output: &str) -> Result<Vec<ParameterRow>> {
        let rows: Vec<ParameterRow> = output
            .lines()
            .map(str::trim)
            .filter(|line| !is_noise(line, &self.config))
            .filter_map(parse_parameter_row)
            .collect();

        debug!("Parsed {} parameter table rows", rows.len());
        Ok(rows)
    }
}

/// Read one parameter row, `code | name | units | description...`
///
/// Falls back to whitespace splitting when the line has no pipe delimiters.
pub fn parse_parameter_row(line: &str) -> Option<ParameterRow> {
    let mut fields: Vec<&str> = line.split(PARAMETER_DELIMITER).map(str::trim).collect();
    if fields.len() < 2 {
        fields = line.split_whitespace().collect();
    }

    let code = fields.first()?;
    let description = fields
        .get(3..)
        .filter(|rest| !rest.is_empty())
        .map(|rest| rest.join(" "));
    trace!("Parameter row with {} fields: {}", fields.len(), line);

    Some(ParameterRow {
        code: code.to_string(),
        name: fields.get(1).map(|s| s.to_string()),
        units: fields.get(2).map(|s| s.to_string()),
        description,
        raw: line.to_string(),
    })
}

/// Parser for `vct` / `vct2` output
///
/// Line boundaries are ignored; every numeric token joins a single sequence.
#[derive(Debug, Clone, Default)]
pub struct VctParser {
    config: ParserConfig,
}

impl VctParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for VctParser {
    type Output = NumericArray;

    const NAME: &'static str = "vct";

    fn parse(&self, output: &str) -> Result<NumericArray> {
        let values: Vec<f64> = output
            .lines()
            .map(str::trim)
            .filter(|line| !is_noise(line, &self.config))
            .flat_map(parse_float_array)
            .collect();

        debug!("Parsed {} vertical coordinate values", values.len());
        Ok(NumericArray {
            name: VCT_ARRAY_NAME.to_string(),
            values,
        })
    }
}

/// Parser for `vlist` output, kept as raw lines and their tokens
#[derive(Debug, Clone, Default)]
pub struct VlistParser {
    config: ParserConfig,
}

impl VlistParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for VlistParser {
    type Output = Vec<VariableListEntry>;

    const NAME: &'static str = "vlist";

    fn parse(&self, output: &str) -> Result<Vec<VariableListEntry>> {
        let entries: Vec<VariableListEntry> = output
            .lines()
            .map(str::trim)
            .filter(|line| !is_noise(line, &self.config))
            .map(|line| VariableListEntry {
                raw: line.to_string(),
                parts: line.split_whitespace().map(str::to_string).collect(),
            })
            .collect();

        debug!("Parsed {} variable list lines", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_delimited_row() {
        let row = parse_parameter_row("130 | t | K | Temperature").unwrap();
        assert_eq!(row.code, "130");
        assert_eq!(row.name.as_deref(), Some("t"));
        assert_eq!(row.units.as_deref(), Some("K"));
        assert_eq!(row.description.as_deref(), Some("Temperature"));
    }

    #[test]
    fn test_whitespace_fallback_joins_description() {
        let row = parse_parameter_row("167  2t  K  2 metre temperature").unwrap();
        assert_eq!(row.code, "167");
        assert_eq!(row.name.as_deref(), Some("2t"));
        assert_eq!(row.description.as_deref(), Some("2 metre temperature"));
        assert_eq!(row.raw, "167  2t  K  2 metre temperature");
    }

    #[test]
    fn test_short_row_leaves_fields_unset() {
        let row = parse_parameter_row("131").unwrap();
        assert_eq!(row.code, "131");
        assert!(row.name.is_none());
        assert!(row.units.is_none());
        assert!(row.description.is_none());
    }
}
