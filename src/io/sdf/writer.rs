use std::io::Write;

use super::reader::{TERMINATOR, is_terminator};
use crate::io::error::Error;
use crate::model::record::Record;

pub fn write<W: Write>(mut writer: W, records: &[Record]) -> Result<(), Error> {
    for record in records {
        write_record(&mut writer, record)?;
    }
    Ok(())
}

/// Writes one record. Field lines and the terminator reuse the payload's
/// line ending (`\r\n` if its first line has one, otherwise `\n`).
pub fn write_record<W: Write>(mut writer: W, record: &Record) -> Result<(), Error> {
    let eol = line_ending(&record.payload);

    let mut last_line = None;
    for line in record
        .payload
        .split_inclusive('\n')
        .filter(|l| !is_terminator(l))
    {
        writer.write_all(line.as_bytes())?;
        last_line = Some(line);
    }
    if last_line.is_some_and(|l| !l.ends_with('\n')) {
        write!(writer, "{eol}")?;
    }

    for (name, value) in record.fields.iter() {
        write!(writer, ">  <{name}>{eol}")?;
        for line in value.split('\n') {
            write!(writer, "{line}{eol}")?;
        }
        write!(writer, "{eol}")?;
    }

    write!(writer, "{TERMINATOR}{eol}")?;
    Ok(())
}

fn line_ending(payload: &str) -> &'static str {
    match payload.split_once('\n') {
        Some((first, _)) if first.ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

pub fn to_string(records: &[Record]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write(&mut buf, records);
    String::from_utf8_lossy(&buf).into_owned()
}
