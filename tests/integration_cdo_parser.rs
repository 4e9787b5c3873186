//! Integration tests for CDO output dispatch
//!
//! These tests drive the public entry points with complete captured outputs,
//! the way a caller holding the stdout of a CDO run would.

use cdo_output::app::services::cdo_output_parser::GriddesParser;
use cdo_output::{
    Error, OutputParser, ParserConfig, Scalar, StructuredOutput, parse_cdo_output,
    parse_cdo_output_with_config, supported_operators,
};

const SINFO_OUTPUT: &str = "\
   File format : NetCDF4 classic
    -1 : Institut Source   T Steptype Levels Num    Points Num Dtype : Parameter name
     1 : MPIMET   ECHAM6   v instant       1   1     18432   1  F32  : tas
     2 : MPIMET   ECHAM6   v instant       1   1     18432   1  F32  : psl
     3 : MPIMET   ECHAM6   v instant      47   2     18432   1  F32  : ta
   Grid coordinates :
     1 : gaussian                 : points=18432 (192x96)  F48
                              lon : 0 to 358.125 by 1.875 degrees_east  circular
                              lat : 88.5721 to -88.5721 degrees_north
   Vertical coordinates :
     1 : surface                  : levels=1
     2 : pressure                 : levels=47
                             plev : 100000 to 1 Pa
   Time coordinate :
                             time : 1460 steps
     RefTime =  1850-01-01 00:00:00  Units = days  Calendar = proleptic_gregorian
  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss
  2001-01-01 00:00:00  2001-01-01 06:00:00  2001-01-01 12:00:00  2001-01-01 18:00:00
  2001-01-02 00:00:00  2001-01-02 06:00:00  2001-01-02 12:00:00  2001-01-02 18:00:00
  ................................................................................
  2001-12-31 00:00:00  2001-12-31 06:00:00  2001-12-31 12:00:00  2001-12-31 18:00:00
cdo    sinfo: Processed 3 variables over 1460 timesteps [0.21s 51MB]
";

const GRIDDES_OUTPUT: &str = "\
#
# gridID 1
#
gridtype  = gaussian
gridsize  = 18432
xsize     = 192
ysize     = 96
xname     = lon
xlongname = \"longitude\"
xunits    = \"degrees_east\"
yname     = lat
ylongname = \"latitude\"
yunits    = \"degrees_north\"
numLPE    = 48
xfirst    = 0
xinc      = 1.875
yvals     = 88.57217 86.72253 84.86197 83.00028 81.13797 79.27515 77.41206 75.54877
            73.68539 71.82191 69.95836 68.09476
cdo    griddes: Processed 1 variable [0.01s 38MB]
";

#[test]
fn test_dataset_summary_end_to_end() {
    let output = parse_cdo_output("sinfo in.nc", SINFO_OUTPUT).unwrap();
    let info = output.as_dataset().unwrap();

    assert_eq!(info.metadata.format.as_deref(), Some("NetCDF4 classic"));
    assert_eq!(info.var_names(), vec!["tas", "psl", "ta"]);
    assert_eq!(info.variables[2].levels, Some(Scalar::Int(47)));
    assert_eq!(info.variables[0].source.as_deref(), Some("ECHAM6"));

    assert_eq!(info.grid.gridtype.as_deref(), Some("gaussian"));
    assert_eq!(info.grid.xsize, Some(192));
    assert_eq!(info.grid.x.as_ref().unwrap().resolution, Some(1.875));

    // Gaussian latitudes carry no step but keep their extent
    let y = info.grid.y.as_ref().unwrap();
    assert_eq!((y.start, y.end), (88.5721, -88.5721));
    assert_eq!(y.resolution, None);
    assert_eq!(y.units.as_deref(), Some("degrees_north"));

    assert_eq!(info.vertical.zaxistype.as_deref(), Some("surface"));
    assert_eq!(info.time.steps, Some(1460));
    assert_eq!(
        info.time.calendar.as_deref(),
        Some("proleptic_gregorian")
    );
    assert!(info.time.timestamps_omitted);

    let resolution = info.time.time_resolution.as_ref().unwrap();
    assert_eq!(resolution.interval_seconds, 21600);
    assert_eq!(resolution.label, "6 hours");
}

#[test]
fn test_grid_description_end_to_end() {
    let output = parse_cdo_output("-griddes in.nc", GRIDDES_OUTPUT).unwrap();
    let grid = output.as_grid().unwrap().primary_grid().unwrap();

    assert_eq!(grid.gridtype.as_deref(), Some("gaussian"));
    assert_eq!(grid.yvals.len(), 12);
    assert_eq!(grid.lon_range(), Some((0.0, 358.125)));
    assert!(grid.extra.contains_key("numLPE"));
}

#[test]
fn test_dispatch_matches_direct_parser() {
    let dispatched = parse_cdo_output("griddes2", GRIDDES_OUTPUT).unwrap();
    let direct = GriddesParser::new().parse(GRIDDES_OUTPUT).unwrap();

    assert_eq!(dispatched, StructuredOutput::Grid(direct));
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        parse_cdo_output("   ", SINFO_OUTPUT),
        Err(Error::EmptyCommand)
    ));
    assert!(matches!(
        parse_cdo_output("remapbil,r360x180 in.nc", SINFO_OUTPUT),
        Err(Error::UnsupportedCommand { .. })
    ));
    match parse_cdo_output("- in.nc", SINFO_OUTPUT) {
        Err(Error::UnsupportedCommand { operator }) => assert_eq!(operator, ""),
        other => panic!("expected unsupported command, got {other:?}"),
    }
    assert!(matches!(
        parse_cdo_output("griddes", "Warning: file has no grids"),
        Err(Error::Parse { .. })
    ));
    // Degrading parsers never fail on foreign text
    assert!(parse_cdo_output("sinfo", GRIDDES_OUTPUT).is_ok());
    assert!(parse_cdo_output("showatts", SINFO_OUTPUT).is_ok());
}

#[test]
fn test_custom_banner_prefix() {
    let text = "gridtype = lonlat\nmycdo griddes: Processed 1 variable\n";
    let config = ParserConfig::default().with_banner_prefix("mycdo");
    let output = parse_cdo_output_with_config("griddes", text, &config).unwrap();
    let grid = output.as_grid().unwrap().primary_grid().unwrap();

    assert_eq!(grid.gridtype.as_deref(), Some("lonlat"));
    assert!(grid.extra.is_empty());
}

#[test]
fn test_records_serialize_to_json() {
    let output = parse_cdo_output("sinfo", SINFO_OUTPUT).unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["kind"], "dataset");
    assert_eq!(json["data"]["variables"][0]["name"], "tas");
    assert_eq!(json["data"]["time"]["time_resolution"]["label"], "6 hours");

    let back: StructuredOutput = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind(), "dataset");
}

#[test]
fn test_supported_operators_are_stable() {
    let operators = supported_operators();
    for name in ["griddes", "griddes2", "zaxisdes", "sinfo", "sinfon", "info", "infon"] {
        assert!(operators.contains(name));
    }
    assert!(std::ptr::eq(operators, supported_operators()));
}
