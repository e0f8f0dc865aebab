use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized property field name: '{0}'")]
pub struct ParsePropertyError(String);

/// Molecular properties understood by the scoring pipeline.
///
/// Each property has a canonical field name (the one written to output
/// records) and the external name emitted by the `cxcalc` property
/// calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    BasicPka,
    LogD,
    LogP,
    DonorCount,
    PolarSurfaceArea,
    MolecularWeight,
    AromaticRings,
    RotatableBonds,
    ChargeDistribution,
    Name,
}

type PostProcess = fn(&str) -> String;

struct Transcription {
    external: &'static str,
    canonical: &'static str,
    post_process: PostProcess,
}

const TRANSCRIPTIONS: &[Transcription] = &[
    Transcription {
        external: "pkacalculator",
        canonical: "bpKa",
        post_process: first_token_or_zero,
    },
    Transcription {
        external: "LOGD",
        canonical: "logD",
        post_process: second_token_trimmed,
    },
    Transcription {
        external: "LOGP",
        canonical: "logP",
        post_process: verbatim,
    },
    Transcription {
        external: "DONOR_COUNT",
        canonical: "HBD",
        post_process: verbatim,
    },
    Transcription {
        external: "PSA",
        canonical: "TPSA",
        post_process: verbatim,
    },
    Transcription {
        external: "MASS",
        canonical: "MW",
        post_process: verbatim,
    },
    Transcription {
        external: "AROMATIC_RINGCOUNT",
        canonical: "ArRings",
        post_process: verbatim,
    },
    Transcription {
        external: "ROTATABLE_BOND_COUNT",
        canonical: "RotB",
        post_process: verbatim,
    },
    Transcription {
        external: "CHARGE_DISTRIBUTION",
        canonical: "charge_dist(7.4)",
        post_process: second_token_left_trimmed,
    },
    Transcription {
        external: "Name",
        canonical: "name",
        post_process: verbatim,
    },
];

impl Property {
    pub const ALL: [Property; 10] = [
        Property::BasicPka,
        Property::LogD,
        Property::LogP,
        Property::DonorCount,
        Property::PolarSurfaceArea,
        Property::MolecularWeight,
        Property::AromaticRings,
        Property::RotatableBonds,
        Property::ChargeDistribution,
        Property::Name,
    ];

    fn transcription(self) -> &'static Transcription {
        // ALL and TRANSCRIPTIONS share the same order.
        &TRANSCRIPTIONS[self as usize]
    }

    /// Field name used inside this crate and in written records.
    pub fn canonical_name(self) -> &'static str {
        self.transcription().canonical
    }

    /// Field name produced by the external property calculator.
    pub fn external_name(self) -> &'static str {
        self.transcription().external
    }

    /// Resolves a raw field name into a property and its normalized value.
    ///
    /// External names have their calculator-specific post-processing applied;
    /// canonical names are accepted unchanged. Returns `None` for names the
    /// pipeline does not retain.
    pub fn transcribe(field_name: &str, raw_value: &str) -> Option<(Property, String)> {
        Property::ALL.into_iter().find_map(|p| {
            if p.external_name() == field_name {
                Some((p, (p.transcription().post_process)(raw_value)))
            } else if p.canonical_name() == field_name {
                Some((p, raw_value.to_string()))
            } else {
                None
            }
        })
    }

    /// Returns the property named by `field_name`, external or canonical.
    pub fn lookup(field_name: &str) -> Option<Property> {
        Property::ALL
            .into_iter()
            .find(|p| p.external_name() == field_name || p.canonical_name() == field_name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for Property {
    type Err = ParsePropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::lookup(s).ok_or_else(|| ParsePropertyError(s.to_string()))
    }
}

fn verbatim(raw: &str) -> String {
    raw.to_string()
}

// The pKa plugin reports "<basic pKa>\t..." and leaves the first column
// empty when the molecule has no basic centre.
fn first_token_or_zero(raw: &str) -> String {
    let token = raw.split('\t').next().unwrap_or_default();
    if token.trim().is_empty() {
        "0.0".to_string()
    } else {
        token.to_string()
    }
}

// "<pH>\t<logD>"
fn second_token_trimmed(raw: &str) -> String {
    match raw.split('\t').nth(1) {
        Some(token) => token.trim().to_string(),
        None => raw.trim().to_string(),
    }
}

fn second_token_left_trimmed(raw: &str) -> String {
    match raw.split('\t').nth(1) {
        Some(token) => token.trim_start().to_string(),
        None => raw.trim_start().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_order_matches_variant_order() {
        assert_eq!(TRANSCRIPTIONS.len(), Property::ALL.len());
        for (index, property) in Property::ALL.into_iter().enumerate() {
            assert_eq!(property as usize, index);
        }
        assert_eq!(Property::BasicPka.external_name(), "pkacalculator");
        assert_eq!(Property::Name.external_name(), "Name");
    }

    #[test]
    fn table_is_one_to_one() {
        let externals: HashSet<_> = TRANSCRIPTIONS.iter().map(|t| t.external).collect();
        let canonicals: HashSet<_> = TRANSCRIPTIONS.iter().map(|t| t.canonical).collect();
        assert_eq!(externals.len(), TRANSCRIPTIONS.len());
        assert_eq!(canonicals.len(), TRANSCRIPTIONS.len());
        assert!(externals.is_disjoint(&canonicals));
    }

    #[test]
    fn external_names_map_to_canonical() {
        assert_eq!(
            Property::transcribe("PSA", "45.2"),
            Some((Property::PolarSurfaceArea, "45.2".to_string()))
        );
        assert_eq!(Property::lookup("MASS"), Some(Property::MolecularWeight));
        assert_eq!(Property::MolecularWeight.canonical_name(), "MW");
    }

    #[test]
    fn canonical_names_are_accepted_without_post_processing() {
        assert_eq!(
            Property::transcribe("logD", "1.5\t2.5"),
            Some((Property::LogD, "1.5\t2.5".to_string()))
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Property::transcribe("SMILES", "CCO"), None);
        let err = Property::from_str("logd").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized property field name: 'logd'");
    }

    #[test]
    fn logd_keeps_second_column() {
        assert_eq!(
            Property::transcribe("LOGD", "7.40\t 2.31 "),
            Some((Property::LogD, "2.31".to_string()))
        );
    }

    #[test]
    fn blank_pka_defaults_to_zero() {
        assert_eq!(
            Property::transcribe("pkacalculator", "\t3.2"),
            Some((Property::BasicPka, "0.0".to_string()))
        );
        assert_eq!(
            Property::transcribe("pkacalculator", "9.14\t"),
            Some((Property::BasicPka, "9.14".to_string()))
        );
    }

    #[test]
    fn charge_distribution_trims_only_leading_whitespace() {
        assert_eq!(
            Property::transcribe("CHARGE_DISTRIBUTION", "7.40\t  1.00 "),
            Some((Property::ChargeDistribution, "1.00 ".to_string()))
        );
    }

    #[test]
    fn name_field_is_lower_cased() {
        let (property, value) = Property::transcribe("Name", "Aspirin").unwrap();
        assert_eq!(property.canonical_name(), "name");
        assert_eq!(value, "Aspirin");
    }
}
