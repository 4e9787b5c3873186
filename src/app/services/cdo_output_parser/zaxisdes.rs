//! Vertical axis description (`zaxisdes`) parsing

use tracing::debug;

use super::OutputParser;
use super::description::{BlockLayout, DescriptionBlock, parse_description_blocks};
use crate::app::models::{ZAxisDescription, ZAxisInfo};
use crate::config::ParserConfig;
use crate::constants::ZAXIS_ID_MARKER;
use crate::constants::zaxis_keys::*;
use crate::{Error, Result};

const ZAXIS_LAYOUT: BlockLayout = BlockLayout {
    id_marker: ZAXIS_ID_MARKER,
    type_key: ZAXISTYPE,
    array_keys: ARRAY_KEYS,
};

/// Parser for `zaxisdes` output
#[derive(Debug, Clone, Default)]
pub struct ZaxisdesParser {
    config: ParserConfig,
}

impl ZaxisdesParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl OutputParser for ZaxisdesParser {
    type Output = ZAxisDescription;

    const NAME: &'static str = "zaxisdes";

    fn parse(&self, output: &str) -> Result<ZAxisDescription> {
        let blocks = parse_description_blocks(output, &ZAXIS_LAYOUT, &self.config);
        if blocks.is_empty() {
            return Err(Error::parse(Self::NAME, "no z-axis description found"));
        }

        let zaxes: Vec<ZAxisInfo> = blocks.into_iter().map(zaxis_from_block).collect();
        debug!("Parsed {} z-axis description(s)", zaxes.len());

        Ok(ZAxisDescription { zaxes })
    }
}

fn zaxis_from_block(mut block: DescriptionBlock) -> ZAxisInfo {
    ZAxisInfo {
        zaxis_id: block.id,
        zaxistype: block.take_string(ZAXISTYPE),
        size: block.take_i64(SIZE),
        name: block.take_string(NAME),
        longname: block.take_string(LONGNAME),
        units: block.take_string(UNITS),
        levels: block.take_array(LEVELS),
        lbounds: block.take_array(LBOUNDS),
        ubounds: block.take_array(UBOUNDS),
        vctsize: block.take_i64(VCTSIZE),
        vct: block.take_array(VCT),
        extra: block.into_extra(),
    }
}
