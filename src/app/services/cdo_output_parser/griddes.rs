//! Grid description (`griddes`) parsing

use tracing::debug;

use super::OutputParser;
use super::description::{BlockLayout, DescriptionBlock, parse_description_blocks};
use crate::app::models::{GridDescription, GridInfo};
use crate::config::ParserConfig;
use crate::constants::GRID_ID_MARKER;
use crate::constants::grid_keys::*;
use crate::{Error, Result};

const GRID_LAYOUT: BlockLayout = BlockLayout {
    id_marker: GRID_ID_MARKER,
    type_key: GRIDTYPE,
    array_keys: ARRAY_KEYS,
};

/// Parser for `griddes` / `griddes2` output
///
/// Fails only when the text holds no grid block at all; missing fields inside
/// a recognised block are simply left unset.
#[derive(Debug, Clone, Default)]
pub struct GriddesParser {
    config: ParserConfig,
}

impl GriddesParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for GriddesParser {
    type Output = GridDescription;

    const NAME: &'static str = "griddes";

    fn parse(&self, output: &str) -> Result<GridDescription> {
        let blocks = parse_description_blocks(output, &GRID_LAYOUT, &self.config);
        if blocks.is_empty() {
            return Err(Error::parse(Self::NAME, "no grid description found"));
        }

        let grids: Vec<GridInfo> = blocks.into_iter().map(grid_from_block).collect();
        debug!("Parsed {} grid description(s)", grids.len());

        Ok(GridDescription { grids })
    }
}

fn grid_from_block(mut block: DescriptionBlock) -> GridInfo {
    GridInfo {
        grid_id: block.id,
        gridtype: block.take_string(GRIDTYPE),
        gridsize: block.take_i64(GRIDSIZE),
        datatype: block.take_string(DATATYPE),
        xsize: block.take_i64(XSIZE),
        ysize: block.take_i64(YSIZE),
        xname: block.take_string(XNAME),
        xlongname: block.take_string(XLONGNAME),
        xunits: block.take_string(XUNITS),
        yname: block.take_string(YNAME),
        ylongname: block.take_string(YLONGNAME),
        yunits: block.take_string(YUNITS),
        xfirst: block.take_f64(XFIRST),
        xinc: block.take_f64(XINC),
        yfirst: block.take_f64(YFIRST),
        yinc: block.take_f64(YINC),
        xvals: block.take_array(XVALS),
        yvals: block.take_array(YVALS),
        xbounds: block.take_array(XBOUNDS),
        ybounds: block.take_array(YBOUNDS),
        grid_mapping: block.take_string(GRID_MAPPING),
        grid_mapping_name: block.take_string(GRID_MAPPING_NAME),
        grid_north_pole_longitude: block.take_f64(NORTH_POLE_LONGITUDE),
        grid_north_pole_latitude: block.take_f64(NORTH_POLE_LATITUDE),
        extra: block.into_extra(),
    }
}
