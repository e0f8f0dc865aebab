use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser)]
#[command(
    name = "mforge",
    about = "CNS MPO scoring and solubility forecast index for SD files",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub score: ScoreOptions,

    #[command(flatten)]
    pub calc: CalcOptions,
}

/// Input/output and reporting options.
#[derive(Args)]
pub struct IoOptions {
    /// Input SD file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Folder for the scored file (relative to the input's folder)
    #[arg(short = 'f', long, value_name = "DIR")]
    pub output_folder: Option<PathBuf>,

    /// Print every field of every record
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress banner, progress and report (for scripting)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Fail on text after the last `$$$$` instead of dropping it
    #[arg(long)]
    pub strict: bool,
}

/// Optional score outputs.
#[derive(Args)]
#[command(next_help_heading = "Scoring")]
pub struct ScoreOptions {
    /// Report the solubility forecast index (requires ArRings with --no-calc)
    #[arg(short = 'S', long)]
    pub sfi: bool,

    /// Report the MPO radar-plot area as a percentage
    #[arg(long)]
    pub area: bool,
}

/// Property calculator options.
#[derive(Args)]
#[command(next_help_heading = "Property Calculation")]
pub struct CalcOptions {
    /// Use properties already present in the input instead of running cxcalc
    ///
    /// Fields must use the canonical names: bpKa, logD, logP, HBD, TPSA, MW
    /// (and ArRings for --sfi).
    #[arg(short = 'C', long)]
    pub no_calc: bool,

    /// cxcalc executable
    #[arg(long, value_name = "PATH", default_value = "cxcalc")]
    pub cxcalc: PathBuf,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_match_documented_options() {
        let cli = Cli::try_parse_from(["mforge", "-i", "in.sdf", "-S", "-C", "-f", "out", "-v"])
            .expect("parse args");
        assert_eq!(cli.io.input, PathBuf::from("in.sdf"));
        assert_eq!(cli.io.output_folder, Some(PathBuf::from("out")));
        assert!(cli.io.verbose);
        assert!(cli.score.sfi);
        assert!(cli.calc.no_calc);
        assert_eq!(cli.calc.cxcalc, PathBuf::from("cxcalc"));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["mforge", "-S"]).is_err());
    }
}
