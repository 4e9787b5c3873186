//! Data models for CDO output parsing
//!
//! This module contains the structured records produced by the output parsers.
//! Every record is built fresh from one command's text output and is never
//! mutated afterwards. Collections default to empty rather than absent so
//! callers can test length instead of existence.

use crate::constants::zaxis_keys::SURFACE_TYPE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Scalar Values
// =============================================================================

/// A single coerced token from CDO output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Integer value, if the token was integral
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric value, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(value) => Some(*value as f64),
            Scalar::Float(value) => Some(*value),
            Scalar::Text(_) => None,
        }
    }

    /// Text value, if the token was not numeric
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

/// A value in a key/value description block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    Array(Vec<f64>),
}

// =============================================================================
// Grid Description (griddes)
// =============================================================================

/// One grid block from `griddes` output
///
/// `xsize * ysize` is not required to equal `gridsize`; curvilinear and
/// unstructured grids routinely diverge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridInfo {
    /// Identifier from the `# gridID n` comment, when printed
    pub grid_id: Option<u32>,
    pub gridtype: Option<String>,
    pub gridsize: Option<i64>,
    pub datatype: Option<String>,
    pub xsize: Option<i64>,
    pub ysize: Option<i64>,

    pub xname: Option<String>,
    pub xlongname: Option<String>,
    pub xunits: Option<String>,
    pub yname: Option<String>,
    pub ylongname: Option<String>,
    pub yunits: Option<String>,

    pub xfirst: Option<f64>,
    pub xinc: Option<f64>,
    pub yfirst: Option<f64>,
    pub yinc: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xvals: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub yvals: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub xbounds: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ybounds: Vec<f64>,

    /// Projection parameters (rotated pole and similar)
    pub grid_mapping: Option<String>,
    pub grid_mapping_name: Option<String>,
    pub grid_north_pole_longitude: Option<f64>,
    pub grid_north_pole_latitude: Option<f64>,

    /// Any other key printed in the block
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl GridInfo {
    /// Longitude (x) extent as `(first, last)`
    pub fn lon_range(&self) -> Option<(f64, f64)> {
        axis_extent(self.xfirst, self.xinc, self.xsize)
    }

    /// Latitude (y) extent as `(first, last)`
    pub fn lat_range(&self) -> Option<(f64, f64)> {
        axis_extent(self.yfirst, self.yinc, self.ysize)
    }

    /// Whether the grid is a plain x by y product
    pub fn is_regular(&self) -> bool {
        match (self.xsize, self.ysize, self.gridsize) {
            (Some(x), Some(y), Some(size)) => x.checked_mul(y) == Some(size),
            _ => false,
        }
    }
}

fn axis_extent(first: Option<f64>, inc: Option<f64>, size: Option<i64>) -> Option<(f64, f64)> {
    let (first, inc, size) = (first?, inc?, size?);
    if size < 1 {
        return None;
    }
    Some((first, first + (size - 1) as f64 * inc))
}

/// All grid blocks from one `griddes` invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridDescription {
    pub grids: Vec<GridInfo>,
}

impl GridDescription {
    pub fn ngrids(&self) -> usize {
        self.grids.len()
    }

    /// First grid in the output
    pub fn primary_grid(&self) -> Option<&GridInfo> {
        self.grids.first()
    }
}

// =============================================================================
// Z-Axis Description (zaxisdes)
// =============================================================================

/// One vertical axis block from `zaxisdes` output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZAxisInfo {
    /// Identifier from the `# zaxisID n` comment, when printed
    pub zaxis_id: Option<u32>,
    pub zaxistype: Option<String>,
    pub size: Option<i64>,
    pub name: Option<String>,
    pub longname: Option<String>,
    pub units: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lbounds: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ubounds: Vec<f64>,

    /// Vertical coordinate table of hybrid axes
    pub vctsize: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vct: Vec<f64>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl ZAxisInfo {
    pub fn is_surface(&self) -> bool {
        self.zaxistype.as_deref() == Some(SURFACE_TYPE)
    }

    /// `(min, max)` of the level values
    pub fn level_range(&self) -> Option<(f64, f64)> {
        let first = *self.levels.first()?;
        Some(
            self.levels
                .iter()
                .fold((first, first), |(min, max), &level| {
                    (min.min(level), max.max(level))
                }),
        )
    }
}

/// All vertical axis blocks from one `zaxisdes` invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZAxisDescription {
    pub zaxes: Vec<ZAxisInfo>,
}

impl ZAxisDescription {
    pub fn nzaxes(&self) -> usize {
        self.zaxes.len()
    }

    /// First vertical axis in the output
    pub fn primary_zaxis(&self) -> Option<&ZAxisInfo> {
        self.zaxes.first()
    }
}

// =============================================================================
// Dataset Summary (sinfo / info)
// =============================================================================

/// Which variable table layout a row was read with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableLayout {
    /// `Date Time Level Gridsize Num Dtype`
    Legacy,
    /// `Institut Source T Steptype Levels Num Points Num Dtype`
    Extended,
    /// Too few fields to map; only the name is known
    #[default]
    NameOnly,
}

/// One row of the variable table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableEntry {
    /// Row index printed before the first colon
    pub index: u32,
    /// Parameter name (or ID) printed after the last colon
    pub name: String,
    pub layout: VariableLayout,

    // Legacy layout
    pub date: Option<String>,
    pub time: Option<String>,
    pub level: Option<Scalar>,
    pub gridsize: Option<Scalar>,
    pub num: Option<Scalar>,

    // Extended layout
    pub institute: Option<String>,
    pub source: Option<String>,
    pub table: Option<String>,
    pub steptype: Option<String>,
    pub levels: Option<Scalar>,
    pub zaxis_num: Option<Scalar>,
    pub points: Option<Scalar>,
    pub grid_num: Option<Scalar>,

    /// Data type (`F32`, `F64`, ...), present in both layouts
    pub dtype: Option<String>,
}

/// File-level metadata of a dataset summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub format: Option<String>,
}

/// Extent of one horizontal axis (`longitude : 0 to 359 by 1 degrees_east`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub name: String,
    pub start: f64,
    pub end: f64,
    /// Absent when the line has no `by <step>` part
    pub resolution: Option<f64>,
    pub units: Option<String>,
}

/// Grid coordinates section of a dataset summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridCoordinates {
    pub grid_id: Option<u32>,
    pub gridtype: Option<String>,
    pub points: Option<i64>,
    pub xsize: Option<i64>,
    pub ysize: Option<i64>,
    pub x: Option<AxisExtent>,
    pub y: Option<AxisExtent>,
}

impl GridCoordinates {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Vertical coordinates section of a dataset summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerticalCoordinates {
    pub zaxis_id: Option<u32>,
    pub zaxistype: Option<String>,
    pub levels: Option<i64>,
}

impl VerticalCoordinates {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Sampling interval inferred from the printed timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResolution {
    /// Human-readable interval, e.g. `"6 hours"` or `"1 day"`
    pub label: String,
    pub interval_seconds: i64,
    pub is_regular: bool,
}

/// Time coordinate section of a dataset summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeCoordinates {
    pub steps: Option<u64>,
    pub reftime: Option<String>,
    pub units: Option<String>,
    pub calendar: Option<String>,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
    /// CDO printed an omission row instead of some timestamps
    pub timestamps_omitted: bool,
    pub time_resolution: Option<TimeResolution>,
}

impl TimeCoordinates {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Structured `sinfo`/`info` output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub metadata: DatasetMetadata,
    pub variables: Vec<VariableEntry>,
    pub grid: GridCoordinates,
    pub vertical: VerticalCoordinates,
    pub time: TimeCoordinates,
}

impl DatasetInfo {
    /// Number of variable rows
    pub fn nvar(&self) -> usize {
        self.variables.len()
    }

    /// Distinct variable names in table order
    pub fn var_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for variable in &self.variables {
            if !names.contains(&variable.name.as_str()) {
                names.push(&variable.name);
            }
        }
        names
    }

    /// First and last printed timestamps
    pub fn time_range(&self) -> Option<(&str, &str)> {
        Some((
            self.time.first_timestamp.as_deref()?,
            self.time.last_timestamp.as_deref()?,
        ))
    }
}

// =============================================================================
// Attributes (showattsglob / showatts)
// =============================================================================

/// Global attributes, keyed by attribute name
pub type GlobalAttributes = BTreeMap<String, String>;

/// Per-variable attributes, keyed by variable name then attribute name
pub type VariableAttributes = BTreeMap<String, BTreeMap<String, String>>;

// =============================================================================
// Tables (partab / vct / vlist)
// =============================================================================

/// One row of a parameter table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRow {
    pub code: String,
    pub name: Option<String>,
    pub units: Option<String>,
    pub description: Option<String>,
    /// The line exactly as printed
    pub raw: String,
}

/// A single named sequence of numbers (vertical coordinate table)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericArray {
    pub name: String,
    pub values: Vec<f64>,
}

/// One uninterpreted line of `vlist` output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableListEntry {
    pub raw: String,
    pub parts: Vec<String>,
}

// =============================================================================
// Dispatch Result
// =============================================================================

/// Record returned by operator dispatch, one variant per output shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum StructuredOutput {
    Grid(GridDescription),
    ZAxis(ZAxisDescription),
    Dataset(DatasetInfo),
    GlobalAttributes(GlobalAttributes),
    VariableAttributes(VariableAttributes),
    Parameters(Vec<ParameterRow>),
    Vct(NumericArray),
    VariableList(Vec<VariableListEntry>),
}

impl StructuredOutput {
    pub fn as_grid(&self) -> Option<&GridDescription> {
        match self {
            StructuredOutput::Grid(grid) => Some(grid),
            _ => None,
        }
    }

    pub fn as_zaxis(&self) -> Option<&ZAxisDescription> {
        match self {
            StructuredOutput::ZAxis(zaxis) => Some(zaxis),
            _ => None,
        }
    }

    pub fn as_dataset(&self) -> Option<&DatasetInfo> {
        match self {
            StructuredOutput::Dataset(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_global_attributes(&self) -> Option<&GlobalAttributes> {
        match self {
            StructuredOutput::GlobalAttributes(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn as_variable_attributes(&self) -> Option<&VariableAttributes> {
        match self {
            StructuredOutput::VariableAttributes(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn as_parameters(&self) -> Option<&[ParameterRow]> {
        match self {
            StructuredOutput::Parameters(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn as_vct(&self) -> Option<&NumericArray> {
        match self {
            StructuredOutput::Vct(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_variable_list(&self) -> Option<&[VariableListEntry]> {
        match self {
            StructuredOutput::VariableList(entries) => Some(entries),
            _ => None,
        }
    }

    /// Short name of the record shape, used in human-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            StructuredOutput::Grid(_) => "grid",
            StructuredOutput::ZAxis(_) => "zaxis",
            StructuredOutput::Dataset(_) => "dataset",
            StructuredOutput::GlobalAttributes(_) => "global_attributes",
            StructuredOutput::VariableAttributes(_) => "variable_attributes",
            StructuredOutput::Parameters(_) => "parameters",
            StructuredOutput::Vct(_) => "vct",
            StructuredOutput::VariableList(_) => "variable_list",
        }
    }
}
