use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use mpo_forge::io::{PropertyCalculator, prepare_output_path};
use mpo_forge::{ReadMode, Record, RecordScore, ScoreConfig, score};

use crate::cli::Cli;
use crate::config::{build_calculator, build_read_mode, build_score_config};
use crate::display::{
    Context as DisplayContext, Progress, RunSummary, print_record_details, print_run_summary,
    print_score_table,
};
use crate::io::{ensure_input_exists, load_records, write_records};

const TOTAL_STEPS: u8 = 3;

pub fn run(cli: Cli, ctx: DisplayContext) -> Result<()> {
    ensure_input_exists(&cli.io.input)?;

    let calculator = build_calculator(&cli.calc);
    let source = match &calculator {
        Some(calc) => calc.program().display().to_string(),
        None => "input file".to_string(),
    };
    let job = Job {
        input: &cli.io.input,
        output_folder: cli.io.output_folder.as_deref(),
        calculator: calculator.as_ref().map(|c| c as &dyn PropertyCalculator),
        read_mode: build_read_mode(&cli.io),
        score_config: build_score_config(&cli.score),
        source: &source,
    };

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let outcome = execute(&job, &mut progress)?;
    progress.finish();

    let scored = outcome.results.iter().filter(|r| r.is_scored()).count();
    let output_name = outcome.output.display().to_string();
    info!(
        records = outcome.records.len(),
        scored,
        output = %output_name,
        "scoring finished"
    );

    if ctx.report {
        if ctx.verbose {
            for (index, record) in outcome.records.iter().enumerate() {
                print_record_details(record, index);
            }
        }
        print_score_table(&outcome.results, &job.score_config);
        print_run_summary(&RunSummary {
            source: &source,
            records: outcome.records.len(),
            scored,
            output: &output_name,
        });
    }

    Ok(())
}

struct Job<'a> {
    input: &'a Path,
    output_folder: Option<&'a Path>,
    calculator: Option<&'a dyn PropertyCalculator>,
    read_mode: ReadMode,
    score_config: ScoreConfig,
    source: &'a str,
}

struct Outcome {
    records: Vec<Record>,
    results: Vec<RecordScore>,
    output: PathBuf,
}

/// Loads, scores and writes one file. Nothing is written unless loading and
/// scoring both succeeded.
fn execute(job: &Job<'_>, progress: &mut Progress) -> Result<Outcome> {
    let read_step = match job.calculator {
        Some(_) => "Calculating properties",
        None => "Reading supplied properties",
    };
    progress.step(read_step);
    let mut records = load_records(job.input, job.calculator, job.read_mode)?;
    progress.complete_step(
        read_step,
        &[format!("{} record(s) from {}", records.len(), job.source)],
    );

    progress.step("Scoring");
    let results = score(&mut records, &job.score_config).context("Scoring aborted")?;
    progress.complete_step("Scoring", &build_score_details(&results, &job.score_config));

    progress.step("Writing output");
    let output = prepare_output_path(job.input, job.output_folder)
        .context("Failed to prepare output folder")?;
    write_records(&output, &records)?;
    progress.complete_step(
        "Writing output",
        &[format!("Write SDF → {}", output.display())],
    );

    Ok(Outcome {
        records,
        results,
        output,
    })
}

fn build_score_details(results: &[RecordScore], config: &ScoreConfig) -> Vec<String> {
    let scored = results.iter().filter(|r| r.is_scored()).count();
    let mut details = vec![format!(
        "CNS MPO for {} of {} record(s)",
        scored,
        results.len()
    )];

    if scored < results.len() {
        details.push(format!(
            "{} record(s) marked Error (missing or invalid fields)",
            results.len() - scored
        ));
    }
    if config.solubility_index {
        details.push("Solubility forecast index (SFI = logD + ArRings)".to_string());
    }
    if config.radar_area {
        details.push("MPO radar-plot area".to_string());
    }

    details
}
