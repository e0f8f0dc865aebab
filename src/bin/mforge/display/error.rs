use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    use mpo_forge::ScoreError;
    use mpo_forge::io::Error as IoError;

    for cause in err.chain() {
        if let Some(io_err) = cause.downcast_ref::<IoError>() {
            return io_hints(io_err);
        }
        if let Some(score_err) = cause.downcast_ref::<ScoreError>() {
            return match score_err {
                ScoreError::DegenerateBoundary { .. } => vec![
                    "The built-in transfer function boundaries are inconsistent".to_string(),
                    "This is a bug, please report it".to_string(),
                ],
            };
        }
        if let Some(std_err) = cause.downcast_ref::<std::io::Error>() {
            return std_io_hints(std_err);
        }
    }

    Vec::new()
}

fn io_hints(err: &mpo_forge::io::Error) -> Vec<String> {
    use mpo_forge::io::Error as IoError;

    match err {
        IoError::Io { source } => std_io_hints(source),

        IoError::UnterminatedRecord { line } => vec![
            format!("Text from line {line} onward is not closed by a `$$$$` line"),
            "Terminate the last record with `$$$$`".to_string(),
            "Or drop --strict to ignore the trailing fragment".to_string(),
        ],

        IoError::ExternalTool { detail, .. } if detail.contains("not found") => vec![
            "Install ChemAxon Marvin/JChem and add cxcalc to PATH".to_string(),
            "Or point --cxcalc at the executable".to_string(),
            "Or use -C/--no-calc with bpKa, logD, logP, HBD, TPSA and MW fields in the input"
                .to_string(),
        ],

        IoError::ExternalTool { .. } => vec![
            "cxcalc could not process the input".to_string(),
            "Check that a valid ChemAxon license is installed".to_string(),
            "Run the cxcalc command by hand to see its full output".to_string(),
        ],

        IoError::InvalidUtf8 { .. } => vec![
            "SD files must be UTF-8 or plain ASCII".to_string(),
            "Re-encode the file, e.g. with `iconv -t UTF-8`".to_string(),
        ],
    }
}

fn std_io_hints(source: &std::io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    let hints: &[&str] = match source.kind() {
        ErrorKind::NotFound => &[
            "File or directory not found",
            "Check the path spelling and ensure the file exists",
        ],
        ErrorKind::PermissionDenied => &[
            "Permission denied accessing the file",
            "Check read access to the input and write access to the output folder",
        ],
        ErrorKind::InvalidData => &[
            "File contains invalid or corrupt data",
            "Verify the file is a text SD file",
        ],
        ErrorKind::WriteZero | ErrorKind::StorageFull => &[
            "Failed to write data (disk full?)",
            "Check available disk space",
        ],
        _ => &["Check file path, permissions, and disk space"],
    };

    hints.iter().map(|h| h.to_string()).collect()
}
