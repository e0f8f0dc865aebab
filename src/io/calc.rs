//! External property calculation.
//!
//! The scoring pipeline consumes properties it does not compute itself. By
//! default they come from ChemAxon's `cxcalc`, run once per input file; its
//! standard output is an SD file carrying the calculator's field names.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use super::error::Error;

/// A source of calculated molecular properties.
pub trait PropertyCalculator {
    /// Returns SD text for the structures in `input`, one record per
    /// structure, annotated with calculated property fields.
    fn calculate(&self, input: &Path) -> Result<String, Error>;
}

/// Plugins requested from `cxcalc`, in output order.
pub const CXCALC_ARGS: &[&str] = &[
    "-i",
    "name",
    "-S",
    "pkacalculator",
    "-t",
    "basic",
    "-b",
    "1",
    "logD",
    "-H",
    "7.4",
    "logP",
    "donorcount",
    "polarsurfacearea",
    "mass",
    "aromaticringcount",
    "rotatablebondcount",
];

/// Runs ChemAxon `cxcalc` as a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CxCalc {
    program: PathBuf,
}

impl CxCalc {
    pub const DEFAULT_PROGRAM: &'static str = "cxcalc";

    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument list for `input`, which is made absolute.
    pub fn arguments(&self, input: &Path) -> Result<Vec<OsString>, Error> {
        let input = std::path::absolute(input)?;
        let mut args: Vec<OsString> = CXCALC_ARGS.iter().map(OsString::from).collect();
        args.push(input.into_os_string());
        Ok(args)
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl Default for CxCalc {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl PropertyCalculator for CxCalc {
    fn calculate(&self, input: &Path) -> Result<String, Error> {
        let args = self.arguments(input)?;
        info!(program = %self.program.display(), input = %input.display(), "running property calculator");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                let detail = match e.kind() {
                    std::io::ErrorKind::NotFound => "program not found in PATH".to_string(),
                    _ => e.to_string(),
                };
                Error::external_tool(self.program_name(), detail)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                msg => format!("exited with {}: {}", output.status, msg),
            };
            return Err(Error::external_tool(self.program_name(), detail));
        }

        String::from_utf8(output.stdout).map_err(|_| Error::InvalidUtf8 {
            context: format!("output of '{}'", self.program_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_end_with_absolute_input() {
        let calc = CxCalc::default();
        let args = calc.arguments(Path::new("mols/input.sdf")).unwrap();

        assert_eq!(args.len(), CXCALC_ARGS.len() + 1);
        assert_eq!(args[0], "-i");
        assert_eq!(args[3], "pkacalculator");
        let input = PathBuf::from(args.last().unwrap());
        assert!(input.is_absolute());
        assert!(input.ends_with("mols/input.sdf"));
    }

    #[test]
    fn missing_program_is_an_external_tool_error() {
        let calc = CxCalc::new("definitely-not-a-real-cxcalc-binary");
        let err = calc.calculate(Path::new("input.sdf")).unwrap_err();
        match err {
            Error::ExternalTool { program, detail } => {
                assert_eq!(program, "definitely-not-a-real-cxcalc-binary");
                assert_eq!(detail, "program not found in PATH");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
