//! Core data structures flowing through the scoring pipeline.
//!
//! - [`record`] – One SD file entry: verbatim structure payload plus ordered data fields.
//! - [`property`] – Molecular properties and the calculator-to-canonical name table.
//! - [`score`] – Score field names, the six-component [`ScoreSet`](score::ScoreSet) and
//!   the formatting used when scores are written back into records.

pub mod property;
pub mod record;
pub mod score;
