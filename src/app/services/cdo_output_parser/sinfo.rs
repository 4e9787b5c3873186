//! Dataset summary (`sinfo` / `info`) parsing
//!
//! The summary is a loose sequence of sections introduced by literal header
//! phrases. Parsing is an explicit state machine over lines:
//!
//! ```text
//! None ──"-1 :"──▶ Variables ──"Grid coordinates"──▶ Grid
//!   ▲                  │
//!   │       "Vertical coordinates" ──▶ Vertical
//!   │       "Time coordinate"      ──▶ Time
//!   └─ any header phrase moves to its section from any state
//! ```
//!
//! Sections that never appear stay at their empty defaults.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

use super::OutputParser;
use super::field_parsers::{coerce_scalar, is_noise, parse_number};
use super::time_axis::TimeSectionParser;
use crate::Result;
use crate::app::models::{
    AxisExtent, DatasetInfo, GridCoordinates, VariableEntry, VariableLayout, VerticalCoordinates,
};
use crate::config::ParserConfig;
use crate::constants::LEGACY_VARIABLE_FIELDS;
use crate::constants::sinfo_headers::*;

static VARIABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*:").expect("valid variable row regex"));

static GRID_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*:\s*(.+?)\s*:\s*points=(\d+)(?:\s*\(\s*(\d+)\s*x\s*(\d+)\s*\))?")
        .expect("valid grid row regex")
});

static AXIS_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s*:\s*(\S+)\s+to\s+(\S+)(?:\s+by\s+(\S+))?(?:\s+(\S+))?")
        .expect("valid axis row regex")
});

static VERTICAL_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*:\s*(.+?)\s*:\s*levels=(\d+)").expect("valid vertical row regex")
});

/// Section the state machine is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySection {
    None,
    Variables,
    Grid,
    Vertical,
    Time,
}

impl SummarySection {
    /// Section introduced by a header line, if the line is one
    pub fn from_header(line: &str, current: SummarySection) -> Option<Self> {
        if line.contains(GRID) {
            Some(SummarySection::Grid)
        } else if line.contains(VERTICAL) {
            Some(SummarySection::Vertical)
        } else if line.contains(TIME) {
            Some(SummarySection::Time)
        } else if (line.contains(VARIABLE_TABLE_INDEX) && line.contains(VARIABLE_TABLE_PARAMETER))
            || (current == SummarySection::None && line.contains(VARIABLE_TABLE_CODE))
        {
            Some(SummarySection::Variables)
        } else {
            None
        }
    }
}

/// Parser for `sinfo`, `sinfon`, `sinfov`, `info`, `infon` and `infov` output
#[derive(Debug, Clone, Default)]
pub struct SinfoParser {
    config: ParserConfig,
}

impl SinfoParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for SinfoParser {
    type Output = DatasetInfo;

    const NAME: &'static str = "sinfo";

    fn parse(&self, output: &str) -> Result<DatasetInfo> {
        let mut info = DatasetInfo::default();
        let mut time = TimeSectionParser::new(&self.config);
        let mut section = SummarySection::None;
        let mut grid_rows_seen = 0usize;
        let mut vertical_rows_seen = 0usize;

        for line in output.lines() {
            let trimmed = line.trim();
            if is_noise(trimmed, &self.config) {
                continue;
            }

            if line.contains(FILE_FORMAT) {
                info.metadata.format = line
                    .rsplit(':')
                    .next()
                    .map(|format| format.trim().to_string())
                    .filter(|format| !format.is_empty());
                continue;
            }

            if let Some(next) = SummarySection::from_header(line, section) {
                if next != section {
                    debug!("sinfo section {:?} -> {:?}", section, next);
                }
                section = next;
                if section == SummarySection::Time {
                    // Some CDO versions print the step count on the header line
                    time.consume_line(line);
                }
                continue;
            }

            match section {
                SummarySection::None => trace!("Ignoring line outside any section: {}", trimmed),
                SummarySection::Variables => {
                    if VARIABLE_ROW.is_match(line) {
                        if let Some(variable) = parse_variable_row(trimmed) {
                            info.variables.push(variable);
                        }
                    }
                }
                SummarySection::Grid => {
                    parse_grid_line(line, &mut info.grid, &mut grid_rows_seen);
                }
                SummarySection::Vertical => {
                    parse_vertical_line(line, &mut info.vertical, &mut vertical_rows_seen);
                }
                SummarySection::Time => time.consume_line(line),
            }
        }

        info.time = time.finish();
        debug!(
            "Parsed sinfo output: {} variables, format {:?}",
            info.variables.len(),
            info.metadata.format
        );

        Ok(info)
    }
}

/// Parse one variable table row
///
/// `index : <fields...> : name`. The middle fields are positional; their
/// count decides the layout.
pub fn parse_variable_row(line: &str) -> Option<VariableEntry> {
    let first_colon = line.find(':')?;
    let last_colon = line.rfind(':')?;
    if first_colon == last_colon {
        return None;
    }

    let name = line[last_colon + 1..].trim();
    if name.is_empty() || name == "Parameter name" || name == "Parameter ID" {
        return None;
    }

    let index = line[..first_colon].trim().parse().ok()?;
    let fields: Vec<&str> = line[first_colon + 1..last_colon].split_whitespace().collect();

    let mut entry = VariableEntry {
        index,
        name: name.to_string(),
        ..Default::default()
    };

    let field = |i: usize| fields.get(i).map(|value| value.to_string());
    let scalar = |i: usize| fields.get(i).map(|value| coerce_scalar(value));

    if fields.len() == LEGACY_VARIABLE_FIELDS {
        // Date Time Level Gridsize Num Dtype
        entry.layout = VariableLayout::Legacy;
        entry.date = field(0);
        entry.time = field(1);
        entry.level = scalar(2);
        entry.gridsize = scalar(3);
        entry.num = scalar(4);
        entry.dtype = field(5);
    } else if fields.len() > LEGACY_VARIABLE_FIELDS {
        // Institut Source T Steptype Levels Num Points Num Dtype
        entry.layout = VariableLayout::Extended;
        entry.institute = field(0);
        entry.source = field(1);
        entry.table = field(2);
        entry.steptype = field(3);
        entry.levels = scalar(4);
        entry.zaxis_num = scalar(5);
        entry.points = scalar(6);
        entry.grid_num = scalar(7);
        entry.dtype = field(8);
    } else {
        trace!("Variable row with {} fields, keeping name only", fields.len());
    }

    Some(entry)
}

fn parse_grid_line(line: &str, grid: &mut GridCoordinates, rows_seen: &mut usize) {
    if let Some(caps) = GRID_ROW.captures(line) {
        *rows_seen += 1;
        if *rows_seen > 1 {
            debug!("Additional grid in sinfo output ignored: {}", line.trim());
            return;
        }
        grid.grid_id = caps[1].parse().ok();
        grid.gridtype = Some(caps[2].to_string());
        grid.points = caps[3].parse().ok();
        grid.xsize = caps.get(4).and_then(|m| m.as_str().parse().ok());
        grid.ysize = caps.get(5).and_then(|m| m.as_str().parse().ok());
        return;
    }

    // Axis lines after a second grid row belong to that grid
    if *rows_seen > 1 {
        return;
    }

    let Some(caps) = AXIS_ROW.captures(line) else {
        trace!("Ignoring grid section line: {}", line.trim());
        return;
    };
    let (Some(start), Some(end)) = (parse_number(&caps[2]), parse_number(&caps[3])) else {
        return;
    };

    // Gaussian latitudes are printed without a step
    let extent = AxisExtent {
        name: caps[1].to_string(),
        start,
        end,
        resolution: caps.get(4).and_then(|m| parse_number(m.as_str())),
        units: caps.get(5).map(|m| m.as_str().to_string()),
    };

    if grid.x.is_none() {
        grid.x = Some(extent);
    } else if grid.y.is_none() {
        grid.y = Some(extent);
    }
}

fn parse_vertical_line(line: &str, vertical: &mut VerticalCoordinates, rows_seen: &mut usize) {
    let Some(caps) = VERTICAL_ROW.captures(line) else {
        trace!("Ignoring vertical section line: {}", line.trim());
        return;
    };

    *rows_seen += 1;
    if *rows_seen > 1 {
        debug!("Additional z-axis in sinfo output ignored: {}", line.trim());
        return;
    }

    vertical.zaxis_id = caps[1].parse().ok();
    vertical.zaxistype = Some(caps[2].to_string());
    vertical.levels = caps[3].parse().ok();
}
