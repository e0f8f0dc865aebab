use std::fmt;

/// Value written to every score field of a record that could not be scored.
pub const UNAVAILABLE: &str = "Error";

/// Fields written by the scoring engine, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreField {
    BpkaScore,
    LogPScore,
    LogDScore,
    MwScore,
    HbdScore,
    TpsaScore,
    MpoScore,
    MpoScoreV2,
}

impl ScoreField {
    pub const ALL: [ScoreField; 8] = [
        ScoreField::BpkaScore,
        ScoreField::LogPScore,
        ScoreField::LogDScore,
        ScoreField::MwScore,
        ScoreField::HbdScore,
        ScoreField::TpsaScore,
        ScoreField::MpoScore,
        ScoreField::MpoScoreV2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScoreField::BpkaScore => "bpKaScore",
            ScoreField::LogPScore => "logPScore",
            ScoreField::LogDScore => "logDScore",
            ScoreField::MwScore => "MWScore",
            ScoreField::HbdScore => "HBDScore",
            ScoreField::TpsaScore => "TPSAScore",
            ScoreField::MpoScore => "MPOScore",
            ScoreField::MpoScoreV2 => "MPOScore_v2",
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solubility forecast index field.
pub const SFI_FIELD: &str = "SFI";

/// Radar-plot area percentage field.
pub const AREA_FIELD: &str = "MPO_area";

/// Returns `true` for any field name the scoring engine writes.
pub fn is_output_field(name: &str) -> bool {
    name == SFI_FIELD || name == AREA_FIELD || ScoreField::ALL.iter().any(|f| f.name() == name)
}

/// Six desirability components of the CNS MPO score, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSet {
    pub bpka: f64,
    pub logp: f64,
    pub logd: f64,
    pub mw: f64,
    pub hbd: f64,
    pub tpsa: f64,
}

impl ScoreSet {
    /// CNS MPO score: unweighted sum of all six components, in `[0, 6]`.
    pub fn mpo(&self) -> f64 {
        self.bpka + self.logp + self.logd + self.mw + self.hbd + self.tpsa
    }

    /// Alternate formulation without logD and with donors counted twice.
    pub fn mpo_v2(&self) -> f64 {
        self.bpka + self.logp + self.mw + 2.0 * self.hbd + self.tpsa
    }

    pub fn components(&self) -> [f64; 6] {
        [self.bpka, self.logp, self.logd, self.mw, self.hbd, self.tpsa]
    }

    pub fn get(&self, field: ScoreField) -> f64 {
        match field {
            ScoreField::BpkaScore => self.bpka,
            ScoreField::LogPScore => self.logp,
            ScoreField::LogDScore => self.logd,
            ScoreField::MwScore => self.mw,
            ScoreField::HbdScore => self.hbd,
            ScoreField::TpsaScore => self.tpsa,
            ScoreField::MpoScore => self.mpo(),
            ScoreField::MpoScoreV2 => self.mpo_v2(),
        }
    }
}

/// Formats a score the way it is stored in a record field.
///
/// Integral values keep one decimal (`1.0`, `0.0`); everything else uses the
/// shortest representation that round-trips.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
