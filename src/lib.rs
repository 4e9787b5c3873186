//! CDO Output Library
//!
//! A Rust library for turning the plain-text output of Climate Data Operators
//! (CDO) information commands into structured, typed records.
//!
//! This library provides tools for:
//! - Parsing grid (`griddes`) and vertical axis (`zaxisdes`) descriptions
//! - Parsing dataset summaries (`sinfo`, `info`) including time-axis analysis
//! - Parsing global and per-variable attribute dumps
//! - Parsing parameter tables, vertical coordinate tables and variable lists
//! - Dispatching raw command output to the right parser by operator name

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cdo_output_parser;
        pub mod operator_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{
    DatasetInfo, GlobalAttributes, GridDescription, GridInfo, NumericArray, ParameterRow, Scalar,
    StructuredOutput, VariableAttributes, VariableEntry, VariableListEntry, ZAxisDescription,
    ZAxisInfo,
};
pub use app::services::cdo_output_parser::OutputParser;
pub use app::services::operator_registry::{
    ParserKind, operator_name, parse_cdo_output, parse_cdo_output_with_config, parser_for,
    supported_operators,
};
pub use config::ParserConfig;

/// Result type alias for CDO output parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CDO output parsing and dispatch
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The command string handed to the dispatcher was blank
    #[error("Empty command")]
    EmptyCommand,

    /// No parser is registered for the operator
    #[error("No parser available for command: {operator}")]
    UnsupportedCommand { operator: String },

    /// The text did not contain the expected output shape at all
    #[error("Failed to parse {parser} output: {message}")]
    Parse {
        parser: &'static str,
        message: String,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a parsed record failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an unsupported command error
    pub fn unsupported_command(operator: impl Into<String>) -> Self {
        Self::UnsupportedCommand {
            operator: operator.into(),
        }
    }

    /// Create a parse error for the named parser
    pub fn parse(parser: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            parser,
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
