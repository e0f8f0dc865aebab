use mpo_forge::io::CxCalc;

use crate::cli::CalcOptions;

/// Returns the calculator to run, or `None` when properties are supplied.
pub fn build_calculator(opts: &CalcOptions) -> Option<CxCalc> {
    (!opts.no_calc).then(|| CxCalc::new(&opts.cxcalc))
}
