//! CNS MPO desirability scoring for multi-record SD files.
//!
//! Each record's property fields are mapped through piecewise-linear
//! desirability functions and combined into the CNS MPO score, then written
//! back into the record alongside the original structure block.
//!
//! # Features
//!
//! - **SD file framing** — Splits on `$$$$`, extracts `>  <NAME>` data items,
//!   and re-serializes records with the structure block untouched
//! - **Calculator vocabulary** — Field names produced by ChemAxon `cxcalc`
//!   are transcribed to short canonical names (`LOGD` → `logD`, `PSA` → `TPSA`)
//! - **MPO scoring** — Six desirability components, `MPOScore` and the
//!   alternate `MPOScore_v2`
//! - **Extras** — Optional solubility forecast index (`SFI`) and radar-plot
//!   area percentage (`MPO_area`)
//! - **Per-record isolation** — A record with a missing or non-numeric
//!   property is marked `Error` and the batch continues
//!
//! # Quick Start
//!
//! ```
//! use mpo_forge::{ReadMode, ScoreConfig, score};
//! use mpo_forge::io::sdf;
//!
//! let input = "\
//! aminoether
//!   Marvin
//!
//!   0  0  0  0  0  0            999 V2000
//! M  END
//! >  <bpKa>
//! 9.0
//!
//! >  <logP>
//! 2.5
//!
//! >  <logD>
//! 3.0
//!
//! >  <MW>
//! 430
//!
//! >  <HBD>
//! 2
//!
//! >  <TPSA>
//! 60
//!
//! $$$$
//! ";
//!
//! let mut records = sdf::parse_str(input, ReadMode::Strict)?;
//! let results = score(&mut records, &ScoreConfig::default())?;
//!
//! // 0.5 + 1 + 0.5 + 0.5 + 0.5 + 1
//! assert_eq!(results[0].mpo(), Some(4.0));
//! // 0.5 + 1 + 0.5 + 2 × 0.5 + 1
//! assert_eq!(results[0].mpo_v2(), Some(4.0));
//! assert_eq!(records[0].fields.get("MPOScore"), Some("4.0"));
//!
//! let output = sdf::to_string(&records);
//! assert!(output.ends_with(">  <MPOScore_v2>\n4.0\n\n$$$$\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — SD file reading/writing, the `cxcalc` collaborator, output paths
//! - [`score`] — Scoring engine and transfer functions
//!
//! # Data Types
//!
//! - [`Record`] — Verbatim structure payload plus ordered [`Fields`]
//! - [`Property`] — Scored and carried molecular properties
//! - [`ScoreSet`] — The six desirability components
//! - [`ScoreField`] — Names of the fields the engine writes
//! - [`RecordScore`] — Per-record outcome, including the failure reason
//! - [`ScoreConfig`] — Optional outputs

mod model;

pub mod io;
pub mod score;

pub use model::property::{ParsePropertyError, Property};
pub use model::record::{Fields, Record};
pub use model::score::{AREA_FIELD, SFI_FIELD, ScoreField, ScoreSet, UNAVAILABLE, format_value};

pub use io::ReadMode;
pub use score::{RecordError, RecordScore, ScoreConfig, score, score_record};

pub use score::Error as ScoreError;
