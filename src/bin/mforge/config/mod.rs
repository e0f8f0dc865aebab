mod calc;
mod score;

pub use calc::build_calculator;
pub use score::{build_read_mode, build_score_config};
