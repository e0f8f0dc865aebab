use std::io::{self, Write};

use mpo_forge::{Record, RecordScore, ScoreConfig};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

/// Totals shown once the output file has been written.
pub struct RunSummary<'a> {
    pub source: &'a str,
    pub records: usize,
    pub scored: usize,
    pub output: &'a str,
}

pub fn print_run_summary(summary: &RunSummary<'_>) {
    let mut out = io::stderr().lock();

    let rows = vec![
        ("Properties", summary.source.to_string()),
        ("Records", summary.records.to_string()),
        ("Scored", summary.scored.to_string()),
        ("Skipped", (summary.records - summary.scored).to_string()),
        ("Output", summary.output.to_string()),
    ];

    print_kv_table(&mut out, "Run Summary", &rows);
}

/// One line per record: name, both MPO scores and the optional extras.
pub fn print_score_table(results: &[RecordScore], config: &ScoreConfig) {
    let mut out = io::stderr().lock();

    let mut columns: Vec<(&str, usize)> = vec![("MPO", 6), ("MPO v2", 6)];
    if config.solubility_index {
        columns.push(("SFI", 6));
    }
    if config.radar_area {
        columns.push(("Area %", 6));
    }
    let fixed: usize = columns.iter().map(|(_, w)| w + 3).sum();
    let name_w = SAFE_TABLE_WIDTH.saturating_sub(fixed + 4).max(8);

    let rule = |left: &str, mid: &str, right: &str| {
        let mut line = format!("{INDENT}{left}{}", "─".repeat(name_w + 2));
        for (_, w) in &columns {
            line.push_str(mid);
            line.push_str(&"─".repeat(w + 2));
        }
        line.push_str(right);
        line
    };

    let _ = writeln!(out, "{INDENT}┌─ CNS MPO Scores ─┐");
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));

    let mut header = format!("{INDENT}│ {:<name_w$} │", "Record");
    for (title, w) in &columns {
        header.push_str(&format!(" {:>w$} │", title, w = *w));
    }
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for result in results {
        let mut cells = vec![cell(result.mpo()), cell(result.mpo_v2())];
        if config.solubility_index {
            let sfi = result
                .solubility_index
                .as_ref()
                .and_then(|r| r.as_ref().ok().copied());
            cells.push(cell(sfi));
        }
        if config.radar_area {
            cells.push(cell(result.area));
        }

        let mut line = format!("{INDENT}│ {:<name_w$} │", truncate(&result.label, name_w));
        for ((_, w), value) in columns.iter().zip(cells) {
            line.push_str(&format!(" {:>w$} │", value, w = *w));
        }
        let _ = writeln!(out, "{line}");
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));

    let failures: Vec<_> = results.iter().filter_map(|r| r.scores.as_ref().err()).collect();
    if !failures.is_empty() {
        let _ = writeln!(out, "{INDENT}\x1b[33m{} record(s) not scored:\x1b[0m", failures.len());
        for failure in failures {
            let _ = writeln!(
                out,
                "{INDENT}  · {}",
                truncate(&failure.to_string(), SAFE_TABLE_WIDTH - 4)
            );
        }
    }
}

/// Every field of one record, in output order.
pub fn print_record_details(record: &Record, index: usize) {
    let mut out = io::stderr().lock();

    let rows: Vec<(&str, String)> = record
        .fields
        .iter()
        .map(|(k, v)| (k, v.replace('\n', " ⏎ ")))
        .collect();

    print_kv_table(&mut out, &record.label(index), &rows);
}

fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "—".to_string(),
    }
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
