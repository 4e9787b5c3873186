//! Application constants for CDO output parsing
//!
//! This module contains the literal markers, section headers, field names
//! and defaults that the parsers match against CDO's text output.

// =============================================================================
// Line Markers
// =============================================================================

/// Leading character of comment lines in key/value output
pub const DEFAULT_COMMENT_MARKER: char = '#';

/// First word of the trailing banner CDO prints after every operator
/// (e.g. `cdo    griddes: Processed 1 variable [0.02s 44MB]`)
pub const DEFAULT_BANNER_PREFIX: &str = "cdo";

/// Minimum run of dots that marks omitted timesteps in `sinfo` output
pub const DEFAULT_MIN_OMISSION_DOTS: usize = 3;

/// Comment marker opening a grid block (`# gridID 1`)
pub const GRID_ID_MARKER: &str = "gridID";

/// Comment marker opening a z-axis block (`# zaxisID 1`)
pub const ZAXIS_ID_MARKER: &str = "zaxisID";

// =============================================================================
// Key/Value Description Fields
// =============================================================================

/// Grid description field names
pub mod grid_keys {
    pub const GRIDTYPE: &str = "gridtype";
    pub const GRIDSIZE: &str = "gridsize";
    pub const DATATYPE: &str = "datatype";
    pub const XSIZE: &str = "xsize";
    pub const YSIZE: &str = "ysize";
    pub const XNAME: &str = "xname";
    pub const XLONGNAME: &str = "xlongname";
    pub const XUNITS: &str = "xunits";
    pub const YNAME: &str = "yname";
    pub const YLONGNAME: &str = "ylongname";
    pub const YUNITS: &str = "yunits";
    pub const XFIRST: &str = "xfirst";
    pub const XINC: &str = "xinc";
    pub const YFIRST: &str = "yfirst";
    pub const YINC: &str = "yinc";
    pub const XVALS: &str = "xvals";
    pub const YVALS: &str = "yvals";
    pub const XBOUNDS: &str = "xbounds";
    pub const YBOUNDS: &str = "ybounds";
    pub const GRID_MAPPING: &str = "grid_mapping";
    pub const GRID_MAPPING_NAME: &str = "grid_mapping_name";
    pub const NORTH_POLE_LONGITUDE: &str = "grid_north_pole_longitude";
    pub const NORTH_POLE_LATITUDE: &str = "grid_north_pole_latitude";

    /// Keys whose values are whitespace-separated numeric arrays
    pub const ARRAY_KEYS: &[&str] = &[XVALS, YVALS, XBOUNDS, YBOUNDS];
}

/// Z-axis description field names
pub mod zaxis_keys {
    pub const ZAXISTYPE: &str = "zaxistype";
    pub const SIZE: &str = "size";
    pub const NAME: &str = "name";
    pub const LONGNAME: &str = "longname";
    pub const UNITS: &str = "units";
    pub const LEVELS: &str = "levels";
    pub const LBOUNDS: &str = "lbounds";
    pub const UBOUNDS: &str = "ubounds";
    pub const VCTSIZE: &str = "vctsize";
    pub const VCT: &str = "vct";

    /// Keys whose values are whitespace-separated numeric arrays
    pub const ARRAY_KEYS: &[&str] = &[LEVELS, VCT, LBOUNDS, UBOUNDS];

    /// Axis type with a single level and no vertical extent
    pub const SURFACE_TYPE: &str = "surface";
}

// =============================================================================
// Dataset Summary (sinfo) Section Headers
// =============================================================================

/// Section header phrases recognised in `sinfo`/`info` output
pub mod sinfo_headers {
    pub const FILE_FORMAT: &str = "File format";
    pub const VARIABLE_TABLE_INDEX: &str = "-1 :";
    pub const VARIABLE_TABLE_PARAMETER: &str = "Parameter";
    pub const VARIABLE_TABLE_CODE: &str = "Code";
    pub const GRID: &str = "Grid coordinates";
    pub const VERTICAL: &str = "Vertical coordinates";
    pub const TIME: &str = "Time coordinate";
}

/// Field count of the legacy variable table
/// (`Date Time Level Gridsize Num Dtype`)
pub const LEGACY_VARIABLE_FIELDS: usize = 6;

// =============================================================================
// Time Constants
// =============================================================================

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// Operator Names
// =============================================================================

/// Operators whose output has a registered structured parser
pub mod operators {
    pub const GRIDDES: &str = "griddes";
    pub const GRIDDES2: &str = "griddes2";
    pub const ZAXISDES: &str = "zaxisdes";
    pub const SINFO: &str = "sinfo";
    pub const SINFON: &str = "sinfon";
    pub const SINFOV: &str = "sinfov";
    pub const INFO: &str = "info";
    pub const INFON: &str = "infon";
    pub const INFOV: &str = "infov";
    pub const VLIST: &str = "vlist";
    pub const SHOWATTS: &str = "showatts";
    pub const SHOWATTSGLOB: &str = "showattsglob";
    pub const PARTAB: &str = "partab";
    pub const CODETAB: &str = "codetab";
    pub const VCT: &str = "vct";
    pub const VCT2: &str = "vct2";
}
