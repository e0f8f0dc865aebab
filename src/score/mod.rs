mod area;
mod config;
mod error;
mod transfer;

pub use area::radar_area;
pub use config::{ScoreConfig, TERMS, Term};
pub use error::{Error, RecordError};
pub use transfer::{Transfer, hump, monotone};

use tracing::{debug, warn};

use crate::model::property::Property;
use crate::model::record::{Fields, Record};
use crate::model::score::{AREA_FIELD, SFI_FIELD, ScoreField, ScoreSet, UNAVAILABLE, format_value};

/// Scoring result for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordScore {
    /// Record name, or `#<position>` when unnamed.
    pub label: String,
    /// The six components, or the reason the record could not be scored.
    pub scores: Result<ScoreSet, RecordError>,
    /// Solubility forecast index, when requested.
    pub solubility_index: Option<Result<f64, RecordError>>,
    /// Radar-plot area percentage, when requested and scores are available.
    pub area: Option<f64>,
}

impl RecordScore {
    pub fn mpo(&self) -> Option<f64> {
        self.scores.as_ref().ok().map(ScoreSet::mpo)
    }

    pub fn mpo_v2(&self) -> Option<f64> {
        self.scores.as_ref().ok().map(ScoreSet::mpo_v2)
    }

    pub fn is_scored(&self) -> bool {
        self.scores.is_ok()
    }
}

/// Scores every record in place, in order.
///
/// A record lacking a required property, or holding a non-numeric value for
/// one, gets [`UNAVAILABLE`] in all eight score fields and does not affect the
/// other records. Only a degenerate boundary definition aborts the batch.
pub fn score(records: &mut [Record], config: &ScoreConfig) -> Result<Vec<RecordScore>, Error> {
    records
        .iter_mut()
        .enumerate()
        .map(|(index, record)| score_record(record, index, config))
        .collect()
}

/// Scores a single record and writes the score fields into it.
///
/// `index` is the record's zero-based position, used to label unnamed records.
/// Scores are derived from the raw property fields only, so scoring a record
/// again overwrites the previous results with identical values.
pub fn score_record(
    record: &mut Record,
    index: usize,
    config: &ScoreConfig,
) -> Result<RecordScore, Error> {
    let label = record.label(index);

    // SFI reads the raw logD, so it goes first.
    let solubility_index = if config.solubility_index {
        let sfi = solubility_index(&record.fields, &label);
        match &sfi {
            Ok(value) => record.fields.insert(SFI_FIELD, format_value(*value)),
            Err(e) => {
                warn!(record = %label, property = %e.property(), "solubility index unavailable: {e}");
                record.fields.insert(SFI_FIELD, UNAVAILABLE);
            }
        }
        Some(sfi)
    } else {
        None
    };

    let scores = match read_terms(&record.fields, &label) {
        Ok(values) => Ok(transfer_all(&values)?),
        Err(e) => {
            warn!(record = %label, property = %e.property(), "record skipped: {e}");
            Err(e)
        }
    };

    match &scores {
        Ok(set) => {
            for field in ScoreField::ALL {
                record.fields.insert(field.name(), format_value(set.get(field)));
            }
            debug!(record = %label, mpo = set.mpo(), mpo_v2 = set.mpo_v2(), "record scored");
        }
        Err(_) => {
            for field in ScoreField::ALL {
                record.fields.insert(field.name(), UNAVAILABLE);
            }
        }
    }

    let area = if config.radar_area {
        let area = scores.as_ref().ok().map(radar_area);
        match area {
            Some(value) => record.fields.insert(AREA_FIELD, format_value(value)),
            None => record.fields.insert(AREA_FIELD, UNAVAILABLE),
        }
        area
    } else {
        None
    };

    Ok(RecordScore {
        label,
        scores,
        solubility_index,
        area,
    })
}

fn solubility_index(fields: &Fields, label: &str) -> Result<f64, RecordError> {
    let logd = read_number(fields, label, Property::LogD)?;
    let rings = read_number(fields, label, Property::AromaticRings)?;
    Ok(logd + rings)
}

fn read_terms(fields: &Fields, label: &str) -> Result<[f64; 6], RecordError> {
    let mut values = [0.0; 6];
    for (slot, term) in values.iter_mut().zip(TERMS.iter()) {
        *slot = read_number(fields, label, term.property)?;
    }
    Ok(values)
}

fn transfer_all(values: &[f64; 6]) -> Result<ScoreSet, Error> {
    let mut s = [0.0; 6];
    for ((slot, term), value) in s.iter_mut().zip(TERMS.iter()).zip(values) {
        *slot = term.transfer.apply(*value)?;
    }
    Ok(ScoreSet {
        bpka: s[0],
        logp: s[1],
        logd: s[2],
        mw: s[3],
        hbd: s[4],
        tpsa: s[5],
    })
}

fn read_number(fields: &Fields, label: &str, property: Property) -> Result<f64, RecordError> {
    let raw = fields
        .property(property)
        .ok_or_else(|| RecordError::MissingProperty {
            record: label.to_string(),
            property,
        })?;

    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordError::MalformedValue {
            record: label.to_string(),
            property,
            value: raw.to_string(),
        })
}
