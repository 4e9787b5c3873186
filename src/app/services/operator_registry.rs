//! Operator dispatch for CDO output parsing
//!
//! Maps an operator name to the parser that understands its output. The
//! table is static and built once; callers can only read it.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::StructuredOutput;
use crate::app::services::cdo_output_parser::{
    GriddesParser, OutputParser, PartabParser, ShowattsParser, ShowattsglobParser, SinfoParser,
    VctParser, VlistParser, ZaxisdesParser,
};
use crate::config::ParserConfig;
use crate::constants::operators::*;
use crate::{Error, Result};

/// Output shape a registered operator produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParserKind {
    Grid,
    ZAxis,
    Dataset,
    VariableList,
    VariableAttributes,
    GlobalAttributes,
    ParameterTable,
    Vct,
}

impl ParserKind {
    /// Parse text with the default configuration
    pub fn parse(self, output: &str) -> Result<StructuredOutput> {
        self.parse_with_config(output, &ParserConfig::default())
    }

    /// Parse text with the matching parser
    pub fn parse_with_config(
        self,
        output: &str,
        config: &ParserConfig,
    ) -> Result<StructuredOutput> {
        let config = config.clone();
        Ok(match self {
            ParserKind::Grid => {
                StructuredOutput::Grid(GriddesParser::with_config(config).parse(output)?)
            }
            ParserKind::ZAxis => {
                StructuredOutput::ZAxis(ZaxisdesParser::with_config(config).parse(output)?)
            }
            ParserKind::Dataset => {
                StructuredOutput::Dataset(SinfoParser::with_config(config).parse(output)?)
            }
            ParserKind::VariableList => {
                StructuredOutput::VariableList(VlistParser::with_config(config).parse(output)?)
            }
            ParserKind::VariableAttributes => StructuredOutput::VariableAttributes(
                ShowattsParser::with_config(config).parse(output)?,
            ),
            ParserKind::GlobalAttributes => StructuredOutput::GlobalAttributes(
                ShowattsglobParser::with_config(config).parse(output)?,
            ),
            ParserKind::ParameterTable => {
                StructuredOutput::Parameters(PartabParser::with_config(config).parse(output)?)
            }
            ParserKind::Vct => {
                StructuredOutput::Vct(VctParser::with_config(config).parse(output)?)
            }
        })
    }

    /// Name of the parser behind this kind
    pub fn name(self) -> &'static str {
        match self {
            ParserKind::Grid => GriddesParser::NAME,
            ParserKind::ZAxis => ZaxisdesParser::NAME,
            ParserKind::Dataset => SinfoParser::NAME,
            ParserKind::VariableList => VlistParser::NAME,
            ParserKind::VariableAttributes => ShowattsParser::NAME,
            ParserKind::GlobalAttributes => ShowattsglobParser::NAME,
            ParserKind::ParameterTable => PartabParser::NAME,
            ParserKind::Vct => VctParser::NAME,
        }
    }
}

/// Every operator with a parser, including aliases
const REGISTRY: &[(&str, ParserKind)] = &[
    (GRIDDES, ParserKind::Grid),
    (GRIDDES2, ParserKind::Grid),
    (ZAXISDES, ParserKind::ZAxis),
    (SINFO, ParserKind::Dataset),
    (SINFON, ParserKind::Dataset),
    (SINFOV, ParserKind::Dataset),
    (INFO, ParserKind::Dataset),
    (INFON, ParserKind::Dataset),
    (INFOV, ParserKind::Dataset),
    (VLIST, ParserKind::VariableList),
    (SHOWATTS, ParserKind::VariableAttributes),
    (SHOWATTSGLOB, ParserKind::GlobalAttributes),
    (PARTAB, ParserKind::ParameterTable),
    (CODETAB, ParserKind::ParameterTable),
    (VCT, ParserKind::Vct),
    (VCT2, ParserKind::Vct),
];

static PARSERS: LazyLock<BTreeMap<&'static str, ParserKind>> =
    LazyLock::new(|| REGISTRY.iter().copied().collect());

static OPERATOR_NAMES: LazyLock<BTreeSet<&'static str>> =
    LazyLock::new(|| REGISTRY.iter().map(|(name, _)| *name).collect());

/// Extract the lowercase operator name from a full command string
///
/// `"-griddes,bilinear data.nc"` gives `"griddes"`. Only a blank command is
/// an error; a bare `-` yields an empty name that no parser is registered for.
pub fn operator_name(command: &str) -> Result<String> {
    let first = command.split_whitespace().next().ok_or(Error::EmptyCommand)?;
    let operator = first
        .trim_start_matches('-')
        .split(',')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    Ok(operator)
}

/// Look up the parser for a command string
pub fn parser_for(command: &str) -> Result<ParserKind> {
    let operator = operator_name(command)?;
    PARSERS
        .get(operator.as_str())
        .copied()
        .ok_or_else(|| Error::unsupported_command(operator))
}

/// Parse captured output of `command` into its structured record
pub fn parse_cdo_output(command: &str, output: &str) -> Result<StructuredOutput> {
    parse_cdo_output_with_config(command, output, &ParserConfig::default())
}

/// [`parse_cdo_output`] with a custom parser configuration
pub fn parse_cdo_output_with_config(
    command: &str,
    output: &str,
    config: &ParserConfig,
) -> Result<StructuredOutput> {
    let kind = parser_for(command)?;
    debug!("Dispatching '{}' to the {} parser", command.trim(), kind.name());
    kind.parse_with_config(output, config)
}

/// Every operator name with a registered parser
pub fn supported_operators() -> &'static BTreeSet<&'static str> {
    &OPERATOR_NAMES
}
