//! Tests for grid description parsing

use super::*;
use crate::Error;
use crate::app::models::{Scalar, Value};
use crate::app::services::cdo_output_parser::{GriddesParser, OutputParser};
use crate::config::ParserConfig;

#[test]
fn test_global_lonlat_grid() {
    let description = GriddesParser::new().parse(GLOBAL_LONLAT_GRIDDES).unwrap();

    assert_eq!(description.ngrids(), 1);
    let grid = description.primary_grid().unwrap();
    assert_eq!(grid.grid_id, Some(1));
    assert_eq!(grid.gridtype.as_deref(), Some("lonlat"));
    assert_eq!(grid.gridsize, Some(64800));
    assert_eq!(grid.datatype.as_deref(), Some("float"));
    assert_eq!(grid.xsize, Some(360));
    assert_eq!(grid.ysize, Some(180));
    assert_eq!(grid.xlongname.as_deref(), Some("longitude"));
    assert_eq!(grid.yunits.as_deref(), Some("degrees_north"));
    assert_eq!(grid.xfirst, Some(-179.5));
    assert_eq!(grid.xinc, Some(1.0));
    assert!(grid.is_regular());
    assert!(grid.extra.is_empty());
}

#[test]
fn test_banner_is_not_data() {
    let description = GriddesParser::new().parse(GLOBAL_LONLAT_GRIDDES).unwrap();
    let grid = description.primary_grid().unwrap();

    assert!(!grid.extra.keys().any(|key| key.starts_with("cdo")));
}

#[test]
fn test_regional_extent() {
    let description = GriddesParser::new().parse(REGIONAL_GRIDDES).unwrap();
    let grid = description.primary_grid().unwrap();

    let (lon_start, lon_end) = grid.lon_range().unwrap();
    assert_close(lon_start, 66.625);
    assert_close(lon_end, 100.125);

    let (lat_start, lat_end) = grid.lat_range().unwrap();
    assert_close(lat_start, 6.625);
    assert_close(lat_end, 38.625);
}

#[test]
fn test_multiple_grids_with_wrapped_values() {
    let description = GriddesParser::new().parse(TWO_GRID_GRIDDES).unwrap();

    assert_eq!(description.ngrids(), 2);
    assert_eq!(description.grids[0].grid_id, Some(1));
    assert_eq!(description.grids[0].lon_range(), Some((0.0, 90.0)));

    let curvilinear = &description.grids[1];
    assert_eq!(curvilinear.grid_id, Some(2));
    assert_eq!(curvilinear.gridtype.as_deref(), Some("curvilinear"));
    assert_eq!(
        curvilinear.xvals,
        vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0]
    );
    assert_eq!(curvilinear.yvals.len(), 6);
    assert_eq!(curvilinear.lon_range(), None);
}

#[test]
fn test_rotated_pole_fields() {
    let description = GriddesParser::new().parse(ROTATED_POLE_GRIDDES).unwrap();
    let grid = description.primary_grid().unwrap();

    assert_eq!(grid.gridtype.as_deref(), Some("projection"));
    assert_eq!(grid.grid_mapping.as_deref(), Some("rotated_pole"));
    assert_eq!(
        grid.grid_mapping_name.as_deref(),
        Some("rotated_latitude_longitude")
    );
    assert_eq!(grid.grid_north_pole_longitude, Some(-162.0));
    assert_eq!(grid.grid_north_pole_latitude, Some(39.25));
    assert_eq!(
        grid.extra.get("scanningMode"),
        Some(&Value::Scalar(Scalar::Int(64)))
    );
}

#[test]
fn test_blocks_without_marker_comment() {
    let text = "gridtype = gaussian\nxsize = 128\ngridtype = lonlat\nxsize = 2\n";
    let description = GriddesParser::new().parse(text).unwrap();

    assert_eq!(description.ngrids(), 2);
    assert_eq!(description.grids[0].gridtype.as_deref(), Some("gaussian"));
    assert_eq!(description.grids[0].grid_id, None);
    assert_eq!(description.grids[1].xsize, Some(2));
}

#[test]
fn test_gridtype_kept_verbatim() {
    for gridtype in ["lonlat", "gaussian", "curvilinear", "unstructured", "generic"] {
        let text = format!("gridtype = {gridtype}\ngridsize = 10\n");
        let description = GriddesParser::new().parse(&text).unwrap();
        assert_eq!(
            description.primary_grid().unwrap().gridtype.as_deref(),
            Some(gridtype)
        );
    }
}

#[test]
fn test_prose_is_a_parse_error() {
    let result = GriddesParser::new().parse("This is not grid output.\nJust some words.\n");

    match result {
        Err(Error::Parse { parser, .. }) => assert_eq!(parser, "griddes"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_empty_input_is_a_parse_error() {
    assert!(matches!(
        GriddesParser::new().parse(""),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_parsing_is_idempotent() {
    let parser = GriddesParser::new();
    let first = parser.parse(TWO_GRID_GRIDDES).unwrap();
    let second = parser.parse(TWO_GRID_GRIDDES).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_comment_marker() {
    let text = "% gridID 7\ngridtype = lonlat\n";
    let parser = GriddesParser::with_config(ParserConfig::default().with_comment_marker('%'));
    let description = parser.parse(text).unwrap();

    assert_eq!(description.primary_grid().unwrap().grid_id, Some(7));
}
