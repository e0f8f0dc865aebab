use std::io::BufRead;

use tracing::debug;

use crate::io::{ReadMode, error::Error};
use crate::model::property::Property;
use crate::model::record::Record;
use crate::model::score::is_output_field;

pub const TERMINATOR: &str = "$$$$";

/// Reads every terminated record from `reader`.
pub fn read<R: BufRead>(mut reader: R, mode: ReadMode) -> Result<Vec<Record>, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => Error::InvalidUtf8 {
            context: "SDF input".to_string(),
        },
        _ => Error::Io { source: e },
    })?;
    parse_str(&text, mode)
}

/// Parses every terminated record in `text`.
///
/// Text after the last terminator is dropped in [`ReadMode::Lenient`] and
/// rejected in [`ReadMode::Strict`] unless it is only whitespace.
pub fn parse_str(text: &str, mode: ReadMode) -> Result<Vec<Record>, Error> {
    let mut blocks = split_records(text);
    let records: Vec<Record> = blocks.by_ref().map(parse_record).collect();

    let fragment = blocks.remainder();
    if !fragment.trim().is_empty() {
        match mode {
            ReadMode::Lenient => debug!(
                line = blocks.line(),
                bytes = fragment.len(),
                "dropping unterminated trailing record"
            ),
            ReadMode::Strict => {
                return Err(Error::UnterminatedRecord {
                    line: blocks.line(),
                });
            }
        }
    }

    Ok(records)
}

/// Splits `text` into record blocks, each ending with its terminator line.
pub fn split_records(text: &str) -> RecordBlocks<'_> {
    RecordBlocks {
        rest: text,
        line: 1,
    }
}

/// Lazy iterator over the terminated record blocks of an SD file.
///
/// Once exhausted, [`remainder`](RecordBlocks::remainder) holds whatever
/// followed the last terminator.
#[derive(Debug, Clone)]
pub struct RecordBlocks<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> RecordBlocks<'a> {
    /// Text not yet consumed as a terminated block.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    /// 1-based line number where the remainder starts.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<'a> Iterator for RecordBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut end = 0;
        let mut lines = 0;
        for line in self.rest.split_inclusive('\n') {
            end += line.len();
            lines += 1;
            if is_terminator(line) {
                let (block, rest) = self.rest.split_at(end);
                self.rest = rest;
                self.line += lines;
                return Some(block);
            }
        }
        None
    }
}

pub(crate) fn is_terminator(line: &str) -> bool {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line == TERMINATOR
}

/// Returns the field name of a data header line such as `>  <LOGD>`.
///
/// Only whitespace and an optional external registry number may sit between
/// `>` and `<`.
pub(crate) fn field_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('>')?;
    let open = rest.find('<')?;
    if !rest[..open]
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_digit())
    {
        return None;
    }
    let rest = &rest[open + 1..];
    let close = rest.find('>')?;
    let name = &rest[..close];
    (!name.is_empty()).then_some(name)
}

enum State<'a> {
    ReadingPayload,
    ReadingFieldValue { name: &'a str, lines: Vec<&'a str> },
    Done,
}

/// Parses one record block into its payload and recognized fields.
///
/// The payload is everything before the first header of a recognized
/// property or of a score field written by an earlier run, kept byte for
/// byte. Values of unrecognized fields that follow it are dropped; earlier
/// score fields are kept so that rescoring replaces them in place.
pub fn parse_record(block: &str) -> Record {
    let mut record = Record::default();
    let mut state = State::ReadingPayload;

    for raw in block.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\r', '\n']);
        let header = field_header(line);

        state = match state {
            State::Done => State::Done,
            _ if is_terminator(raw) => {
                finish_field(&mut record, state);
                State::Done
            }
            State::ReadingPayload => match header {
                Some(name) if is_retained(name) => State::ReadingFieldValue {
                    name,
                    lines: Vec::new(),
                },
                _ => {
                    record.payload.push_str(raw);
                    State::ReadingPayload
                }
            },
            State::ReadingFieldValue { name, mut lines } => match header {
                Some(next) => {
                    finish_field(
                        &mut record,
                        State::ReadingFieldValue { name, lines },
                    );
                    State::ReadingFieldValue {
                        name: next,
                        lines: Vec::new(),
                    }
                }
                None => {
                    lines.push(line);
                    State::ReadingFieldValue { name, lines }
                }
            },
        };
    }

    finish_field(&mut record, state);
    record
}

fn is_retained(name: &str) -> bool {
    Property::lookup(name).is_some() || is_output_field(name)
}

fn finish_field(record: &mut Record, state: State<'_>) {
    let State::ReadingFieldValue { name, mut lines } = state else {
        return;
    };

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let raw = lines.join("\n");

    match Property::transcribe(name, &raw) {
        Some((property, value)) => record.fields.insert(property.canonical_name(), value),
        None if is_output_field(name) => record.fields.insert(name, raw),
        None => debug!(field = name, "ignoring unrecognized field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CXCALC_RECORD: &str = "\
ethylamine
  Marvin  01011700002D

  3  2  0  0  0  0            999 V2000
   -0.7145    0.4125    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    0.7145    0.4125    0.0000 N   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
  2  3  1  0  0  0  0
M  END
>  <Name>
ethylamine

>  <pkacalculator>
10.63\t

>  <LOGD>
7.40\t-2.78

>  <LOGP>
0.13

>  <DONOR_COUNT>
1

>  <PSA>
26.02

>  <MASS>
45.085

>  <AROMATIC_RINGCOUNT>
0

>  <ROTATABLE_BOND_COUNT>
0

$$$$
";

    #[test]
    fn splits_on_terminator_lines() {
        let text = "a\n$$$$\nb\r\n$$$$\r\ntrailing\n";
        let mut blocks = split_records(text);
        assert_eq!(blocks.next(), Some("a\n$$$$\n"));
        assert_eq!(blocks.next(), Some("b\r\n$$$$\r\n"));
        assert_eq!(blocks.next(), None);
        assert_eq!(blocks.remainder(), "trailing\n");
        assert_eq!(blocks.line(), 5);
    }

    #[test]
    fn terminator_must_match_whole_line() {
        let text = "x\n$$$$ extra\n $$$$\n";
        assert_eq!(split_records(text).count(), 0);
    }

    #[test]
    fn final_terminator_without_newline_is_accepted() {
        assert_eq!(split_records("m\n$$$$").collect::<Vec<_>>(), vec!["m\n$$$$"]);
    }

    #[test]
    fn splitting_is_restartable() {
        let text = "a\n$$$$\nb\n$$$$\n";
        let first: Vec<_> = split_records(text).collect();
        let second: Vec<_> = split_records(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn parses_header_names() {
        assert_eq!(field_header(">  <LOGD>"), Some("LOGD"));
        assert_eq!(field_header("> <charge_dist(7.4)> (3)"), Some("charge_dist(7.4)"));
        assert_eq!(field_header("M  END"), None);
        assert_eq!(field_header(">  <>"), None);
        assert_eq!(field_header("> 25 <MELTING.POINT>"), Some("MELTING.POINT"));
    }

    #[test]
    fn value_lines_starting_with_angle_bracket_are_not_headers() {
        assert_eq!(field_header(">weird <x> name"), None);

        let record = parse_record("m\nM  END\n>  <name>\n>weird <x> name\n\n$$$$\n");
        assert_eq!(record.fields.get("name"), Some(">weird <x> name"));
    }

    #[test]
    fn earlier_score_fields_end_the_payload() {
        let block = "m\nM  END\n>  <SMILES>\nCCO\n\n>  <bpKaScore>\nError\n\n>  <MPO_area>\n12.5\n\n$$$$\n";
        let record = parse_record(block);
        assert_eq!(record.payload, "m\nM  END\n>  <SMILES>\nCCO\n\n");
        assert_eq!(
            record.fields.iter().collect::<Vec<_>>(),
            vec![("bpKaScore", "Error"), ("MPO_area", "12.5")]
        );
    }

    #[test]
    fn extracts_calculator_fields() {
        let record = parse_record(CXCALC_RECORD);

        assert!(record.payload.starts_with("ethylamine\n"));
        assert!(record.payload.ends_with("M  END\n"));
        assert_eq!(record.name(), Some("ethylamine"));
        assert_eq!(record.fields.get("bpKa"), Some("10.63"));
        assert_eq!(record.fields.get("logD"), Some("-2.78"));
        assert_eq!(record.fields.get("logP"), Some("0.13"));
        assert_eq!(record.fields.get("HBD"), Some("1"));
        assert_eq!(record.fields.get("TPSA"), Some("26.02"));
        assert_eq!(record.fields.get("MW"), Some("45.085"));
        assert_eq!(record.fields.get("ArRings"), Some("0"));
        assert_eq!(record.fields.get("RotB"), Some("0"));
        assert_eq!(record.fields.len(), 9);
    }

    #[test]
    fn multi_line_values_are_joined() {
        let block = "m\nM  END\n>  <name>\nfirst\nsecond\n\n>  <MW>\n300\n\n$$$$\n";
        let record = parse_record(block);
        assert_eq!(record.fields.get("name"), Some("first\nsecond"));
        assert_eq!(record.fields.get("MW"), Some("300"));
    }

    #[test]
    fn unrecognized_fields_before_known_ones_stay_in_payload() {
        let block = "m\nM  END\n>  <SMILES>\nCCN\n\n>  <logP>\n1.2\n\n>  <ID>\n7\n\n$$$$\n";
        let record = parse_record(block);
        assert_eq!(record.payload, "m\nM  END\n>  <SMILES>\nCCN\n\n");
        assert_eq!(record.fields.iter().collect::<Vec<_>>(), vec![("logP", "1.2")]);
    }

    #[test]
    fn record_without_fields_keeps_everything_but_terminator() {
        let record = parse_record("m\n\n\n  0  0\nM  END\n$$$$\n");
        assert_eq!(record.payload, "m\n\n\n  0  0\nM  END\n");
        assert!(record.fields.is_empty());
    }

    #[test]
    fn crlf_values_are_trimmed() {
        let record = parse_record("m\r\nM  END\r\n>  <TPSA>\r\n45.1\r\n\r\n$$$$\r\n");
        assert_eq!(record.payload, "m\r\nM  END\r\n");
        assert_eq!(record.fields.get("TPSA"), Some("45.1"));
    }

    #[test]
    fn lenient_mode_drops_trailing_fragment() {
        let text = format!("{CXCALC_RECORD}partial\nM  END\n");
        let records = parse_str(&text, ReadMode::Lenient).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn strict_mode_rejects_trailing_fragment() {
        let text = "a\n$$$$\nb\nc\n";
        let err = parse_str(text, ReadMode::Strict).unwrap_err();
        assert!(matches!(err, Error::UnterminatedRecord { line: 3 }));
    }

    #[test]
    fn strict_mode_ignores_trailing_whitespace() {
        let records = parse_str("a\n$$$$\n\n  \n", ReadMode::Strict).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse_str("", ReadMode::Strict).unwrap().is_empty());
    }

    #[test]
    fn reads_from_buffered_source() {
        let records = read(std::io::Cursor::new(CXCALC_RECORD.repeat(3)), ReadMode::Strict).unwrap();
        assert_eq!(records.len(), 3);
    }
}
