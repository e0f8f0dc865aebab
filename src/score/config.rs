//! Configuration for MPO scoring.
//!
//! The transfer function boundaries are fixed constants of the CNS MPO
//! definition; only the optional extra outputs are configurable.

use crate::model::property::Property;
use crate::model::score::ScoreField;

use super::transfer::Transfer;

/// Controls which optional fields [`score`](super::score) writes.
///
/// # Examples
///
/// ```
/// use mpo_forge::ScoreConfig;
///
/// let config = ScoreConfig {
///     solubility_index: true,
///     ..Default::default()
/// };
/// assert!(!config.radar_area);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Write the solubility forecast index (`SFI = logD + ArRings`).
    ///
    /// Makes the `ArRings` field required for that index.
    pub solubility_index: bool,

    /// Write `MPO_area`, the radar-plot polygon area as a percentage.
    pub radar_area: bool,
}

/// One component of the MPO score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub property: Property,
    pub field: ScoreField,
    pub transfer: Transfer,
}

/// MPO components in evaluation order.
pub const TERMS: [Term; 6] = [
    Term {
        property: Property::BasicPka,
        field: ScoreField::BpkaScore,
        transfer: Transfer::Monotone {
            lower: 8.0,
            upper: 10.0,
        },
    },
    Term {
        property: Property::LogP,
        field: ScoreField::LogPScore,
        transfer: Transfer::Monotone {
            lower: 3.0,
            upper: 5.0,
        },
    },
    Term {
        property: Property::LogD,
        field: ScoreField::LogDScore,
        transfer: Transfer::Monotone {
            lower: 2.0,
            upper: 4.0,
        },
    },
    Term {
        property: Property::MolecularWeight,
        field: ScoreField::MwScore,
        transfer: Transfer::Monotone {
            lower: 360.0,
            upper: 500.0,
        },
    },
    Term {
        property: Property::DonorCount,
        field: ScoreField::HbdScore,
        transfer: Transfer::Monotone {
            lower: 0.5,
            upper: 3.5,
        },
    },
    Term {
        property: Property::PolarSurfaceArea,
        field: ScoreField::TpsaScore,
        transfer: Transfer::Hump {
            low1: 20.0,
            up1: 40.0,
            up2: 90.0,
            low2: 120.0,
        },
    },
];
