use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use mpo_forge::io::{PropertyCalculator, sdf};
use mpo_forge::{ReadMode, Record};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn ensure_input_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        bail!("Input file '{}' does not exist", path.display());
    }
    Ok(())
}

/// Reads the records to score, running the calculator when one is given.
pub fn load_records(
    path: &Path,
    calculator: Option<&dyn PropertyCalculator>,
    mode: ReadMode,
) -> Result<Vec<Record>> {
    match calculator {
        Some(calc) => {
            let text = calc
                .calculate(path)
                .context("Property calculation failed")?;
            sdf::parse_str(&text, mode).context("Failed to read calculator output")
        }
        None => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            sdf::read(BufReader::new(file), mode).context("Failed to read input file")
        }
    }
}

pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    sdf::write(&mut writer, records).context("Failed to write output file")?;
    writer.flush().context("Failed to write output file")?;
    Ok(())
}
