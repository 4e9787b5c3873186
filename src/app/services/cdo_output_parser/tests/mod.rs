//! Test fixtures for CDO output parser testing
//!
//! Captured output from real CDO runs, trimmed to what the parsers read, and
//! shared across the per-parser test modules.

mod griddes_tests;

/// Regular 1-degree global grid, with the trailing tool banner
pub const GLOBAL_LONLAT_GRIDDES: &str = "\
#
# gridID 1
#
gridtype  = lonlat
gridsize  = 64800
datatype  = float
xsize     = 360
ysize     = 180
xname     = lon
xlongname = \"longitude\"
xunits    = \"degrees_east\"
yname     = lat
ylongname = \"latitude\"
yunits    = \"degrees_north\"
xfirst    = -179.5
xinc      = 1
yfirst    = -89.5
yinc      = 1
cdo    griddes: Processed 1 variable [0.01s 38MB]
";

/// Regional grid matching the `sinfo` fixture below
pub const REGIONAL_GRIDDES: &str = "\
#
# gridID 1
#
gridtype  = lonlat
gridsize  = 17415
xsize     = 135
ysize     = 129
xname     = lon
xunits    = \"degrees_east\"
yname     = lat
yunits    = \"degrees_north\"
xfirst    = 66.625
xinc      = 0.25
yfirst    = 6.625
yinc      = 0.25
";

/// Two grids in one file, the second with explicit coordinate values
pub const TWO_GRID_GRIDDES: &str = "\
#
# gridID 1
#
gridtype  = lonlat
gridsize  = 4
xsize     = 2
ysize     = 2
xfirst    = 0
xinc      = 90
yfirst    = -45
yinc      = 90
#
# gridID 2
#
gridtype  = curvilinear
gridsize  = 6
xsize     = 3
ysize     = 2
xvals     = 10 11 12
            13 14 15
yvals     = 50 50 50 51 51 51
";

/// Rotated pole grid as written by regional climate models
pub const ROTATED_POLE_GRIDDES: &str = "\
# gridID 1
gridtype  = projection
gridsize  = 10000
xsize     = 100
ysize     = 100
xname     = rlon
xunits    = \"degrees\"
yname     = rlat
yunits    = \"degrees\"
xfirst    = -28.375
xinc      = 0.11
yfirst    = -23.375
yinc      = 0.11
grid_mapping = rotated_pole
grid_mapping_name = rotated_latitude_longitude
grid_north_pole_longitude = -162
grid_north_pole_latitude = 39.25
scanningMode = 64
";

/// Pressure level axis with levels wrapped over several lines
pub const PRESSURE_ZAXISDES: &str = "\
#
# zaxisID 1
#
zaxistype = pressure
size      = 8
name      = plev
longname  = \"pressure\"
units     = \"Pa\"
levels    = 100000 92500 85000 70000
            50000 25000 10000 1000
cdo    zaxisdes: Processed 1 variable [0.00s 37MB]
";

/// Surface axis followed by a hybrid axis with a vertical coordinate table
pub const SURFACE_AND_HYBRID_ZAXISDES: &str = "\
#
# zaxisID 1
#
zaxistype = surface
size      = 1
name      = sfc
levels    = 0
#
# zaxisID 2
#
zaxistype = hybrid
size      = 2
levels    = 1 2
vctsize   = 6
vct       = 0 5000 0
            0 0.5 1
";

/// Dataset summary with two legacy-layout variables and a 6-hourly time axis
pub const NETCDF4_SINFO: &str = "\
   File format : NetCDF4
    -1 :       Date     Time   Level Gridsize    Num    Dtype : Parameter name
     1 : 2020-01-01 00:00:00       0   518400      1    F32  : tas
     2 : 2020-01-01 00:00:00       0   518400      2    F32  : pr
   Grid coordinates :
     1 : lonlat                   : points=518400 (960x540)
                        longitude : -180 to 179.625 by 0.375 degrees_east
                         latitude : -90 to 89.6667 by 0.333333 degrees_north
   Vertical coordinates :
     1 : surface                  : levels=1
   Time coordinate :  4 steps
     RefTime =  1970-01-01 00:00:00  Units = hours  Calendar = standard
  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss
  2020-01-01 00:00:00  2020-01-01 06:00:00  2020-01-01 12:00:00  2020-01-01 18:00:00
cdo    sinfo: Processed 2 variables over 4 timesteps [0.05s 45MB]
";

/// Dataset summary in the richer nine-field layout with an abbreviated time axis
pub const EXTENDED_SINFO: &str = "\
   File format : NetCDF2
    -1 : Institut Source   T Steptype Levels Num    Points Num Dtype : Parameter ID
     1 : unknown  unknown  v instant       1   1     17415   1  F32  : tasmax
     2 : unknown  unknown  v instant       1   1     17415   1  F32  : rf
   Grid coordinates :
     1 : lonlat                   : points=17415 (135x129)
                              lon : 66.625 to 100.125 by 0.25 degrees_east
                              lat : 6.625 to 38.625 by 0.25 degrees_north
   Vertical coordinates :
     1 : surface                  : levels=1
   Time coordinate :
                             time : 365 steps
     RefTime =  1900-01-01 00:00:00  Units = days  Calendar = standard
  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss  YYYY-MM-DD hh:mm:ss
  2020-01-01 00:00:00  2020-01-02 00:00:00  2020-01-03 00:00:00  2020-01-04 00:00:00
  ................................................................................
  2020-12-28 00:00:00  2020-12-29 00:00:00  2020-12-30 00:00:00  2020-12-31 00:00:00
";

/// Summary with the variable header but no variable rows
pub const EMPTY_VARIABLES_SINFO: &str = "\
   File format : GRIB
    -1 :       Date     Time   Level Gridsize    Num    Dtype : Parameter name
   Grid coordinates :
     1 : gaussian                 : points=8192 (128x64)
";

/// Global attribute dump with both quote styles
pub const GLOBAL_ATTRIBUTES: &str = "\
Global attributes:
  CDI = \"Climate Data Interface version 2.0.5\"
  Conventions = \"CF-1.6\"
  title = 'Climate Model'
  history = \"Mon Jan 01 2024: cdo -f nc copy in.grb out.nc\"
  frequency = day
";

/// Per-variable attribute dump
pub const VARIABLE_ATTRIBUTES: &str = "\
tas attributes:
  standard_name = \"air_temperature\"
  long_name = \"Near-Surface Air Temperature\"
  units = \"K\"
pr attributes:
  standard_name = \"precipitation_flux\"
  units = \"kg m-2 s-1\"
";

/// Assert two floats agree to within a small tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
