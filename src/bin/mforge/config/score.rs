use mpo_forge::{ReadMode, ScoreConfig};

use crate::cli::{IoOptions, ScoreOptions};

pub fn build_score_config(opts: &ScoreOptions) -> ScoreConfig {
    ScoreConfig {
        solubility_index: opts.sfi,
        radar_area: opts.area,
    }
}

pub fn build_read_mode(opts: &IoOptions) -> ReadMode {
    if opts.strict {
        ReadMode::Strict
    } else {
        ReadMode::Lenient
    }
}
