mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{RunSummary, print_record_details, print_run_summary, print_score_table};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Spinner and banner on stderr.
    pub interactive: bool,
    /// Score report after the run.
    pub report: bool,
    /// Every field of every record in the report.
    pub verbose: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
            report: true,
            verbose: false,
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self {
                interactive: false,
                report: false,
                verbose: false,
            }
        } else {
            self
        }
    }

    pub fn with_verbose(self, verbose: bool) -> Self {
        Self {
            verbose: verbose && self.report,
            ..self
        }
    }
}
