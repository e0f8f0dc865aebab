use std::fs;
use std::path::Path;

use mpo_forge::io::{self, PropertyCalculator, prepare_output_path, sdf};
use mpo_forge::{Property, ReadMode, RecordError, ScoreConfig, UNAVAILABLE, score};

const COMPLETE: &str = "\
alpha
  Marvin  01011700002D

  0  0  0  0  0  0            999 V2000
M  END
>  <name>
alpha

>  <bpKa>
7.2

>  <logP>
2.1

>  <logD>
1.4

>  <MW>
320.4

>  <HBD>
0

>  <TPSA>
52.3

>  <ArRings>
2

$$$$
";

const MISSING_HBD: &str = "\
beta
  Marvin  01011700002D

  0  0  0  0  0  0            999 V2000
M  END
>  <name>
beta

>  <bpKa>
9.5

>  <logP>
4.2

>  <logD>
3.5

>  <MW>
410

>  <TPSA>
30

$$$$
";

/// Stands in for cxcalc by returning calculator-style field names.
struct FakeCalculator;

impl PropertyCalculator for FakeCalculator {
    fn calculate(&self, _input: &Path) -> Result<String, io::Error> {
        Ok("\
gamma
  Marvin  01011700002D

  0  0  0  0  0  0            999 V2000
M  END
>  <Name>
gamma

>  <pkacalculator>
\t4.1

>  <LOGD>
7.40\t2.50

>  <LOGP>
3.00

>  <DONOR_COUNT>
0

>  <PSA>
75.6

>  <MASS>
280.3

>  <AROMATIC_RINGCOUNT>
1

>  <ROTATABLE_BOND_COUNT>
4

$$$$
"
        .to_string())
    }
}

struct FailingCalculator;

impl PropertyCalculator for FailingCalculator {
    fn calculate(&self, _input: &Path) -> Result<String, io::Error> {
        Err(io::Error::external_tool("cxcalc", "license expired"))
    }
}

fn field_of<'a>(output: &'a str, record: usize, name: &str) -> Option<&'a str> {
    let block = sdf::split_records(output).nth(record)?;
    let header = format!(">  <{name}>\n");
    let start = block.find(&header)? + header.len();
    block[start..].lines().next()
}

#[test]
fn incomplete_record_does_not_affect_its_neighbours() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("batch.sdf");
    fs::write(&input, format!("{COMPLETE}{MISSING_HBD}{COMPLETE}")).unwrap();

    let text = fs::read_to_string(&input).unwrap();
    let mut records = sdf::parse_str(&text, ReadMode::Lenient).unwrap();
    let results = score(&mut records, &ScoreConfig::default()).unwrap();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_scored());
    assert!(results[2].is_scored());
    assert_eq!(
        results[1].scores,
        Err(RecordError::MissingProperty {
            record: "beta".to_string(),
            property: Property::DonorCount,
        })
    );
    assert!(results[1].scores.as_ref().unwrap_err().to_string().contains("HBD"));

    let output_path = prepare_output_path(&input, Some(Path::new("scored"))).unwrap();
    assert_eq!(output_path, dir.path().join("scored").join("batch_out.sdf"));
    fs::write(&output_path, sdf::to_string(&records)).unwrap();

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(sdf::split_records(&output).count(), 3);
    assert_eq!(field_of(&output, 0, "MPOScore"), Some("6.0"));
    assert_eq!(field_of(&output, 0, "MPOScore_v2"), Some("6.0"));
    assert_eq!(field_of(&output, 1, "MPOScore"), Some(UNAVAILABLE));
    assert_eq!(field_of(&output, 1, "MPOScore_v2"), Some(UNAVAILABLE));
    assert_eq!(field_of(&output, 1, "logDScore"), Some(UNAVAILABLE));
    assert_eq!(field_of(&output, 2, "MPOScore"), Some("6.0"));
}

#[test]
fn calculator_output_is_transcribed_and_scored() {
    let text = FakeCalculator.calculate(Path::new("ignored.sdf")).unwrap();
    let mut records = sdf::parse_str(&text, ReadMode::Strict).unwrap();
    let config = ScoreConfig {
        solubility_index: true,
        radar_area: true,
    };
    let results = score(&mut records, &config).unwrap();

    let record = &records[0];
    assert_eq!(record.name(), Some("gamma"));
    assert_eq!(record.fields.get("bpKa"), Some("0.0"));
    assert_eq!(record.fields.get("logD"), Some("2.50"));
    assert_eq!(record.fields.get("SFI"), Some("3.5"));
    assert_eq!(record.fields.get("logDScore"), Some("0.75"));
    assert_eq!(record.fields.get("MPO_area"), Some("91.67"));

    // 1 + 1 + 0.75 + 1 + 1 + 1
    assert_eq!(results[0].mpo(), Some(5.75));
    // 1 + 1 + 1 + 2 + 1
    assert_eq!(results[0].mpo_v2(), Some(6.0));
}

#[test]
fn calculator_failure_is_reported_to_the_caller() {
    let err = FailingCalculator.calculate(Path::new("in.sdf")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "property calculator 'cxcalc' failed: license expired"
    );
}

#[test]
fn rerunning_on_scored_output_is_stable() {
    let mut records = sdf::parse_str(COMPLETE, ReadMode::Strict).unwrap();
    score(&mut records, &ScoreConfig::default()).unwrap();
    let first = sdf::to_string(&records);

    let mut again = sdf::parse_str(&first, ReadMode::Strict).unwrap();
    score(&mut again, &ScoreConfig::default()).unwrap();
    let second = sdf::to_string(&again);

    assert_eq!(first, second);
}

#[test]
fn rerunning_on_record_without_properties_does_not_duplicate_scores() {
    let config = ScoreConfig {
        solubility_index: true,
        radar_area: true,
    };
    let input = "m\nM  END\n>  <SMILES>\nCCO\n\n$$$$\n";

    let mut records = sdf::parse_str(input, ReadMode::Strict).unwrap();
    score(&mut records, &config).unwrap();
    let first = sdf::to_string(&records);

    let mut again = sdf::parse_str(&first, ReadMode::Strict).unwrap();
    assert_eq!(again[0].payload, "m\nM  END\n>  <SMILES>\nCCO\n\n");
    score(&mut again, &config).unwrap();
    let second = sdf::to_string(&again);

    assert_eq!(first.matches(">  <MPOScore>").count(), 1);
    assert_eq!(second.matches(">  <MPOScore>").count(), 1);
    assert_eq!(second.matches(">  <SFI>").count(), 1);
    assert_eq!(field_of(&second, 0, "MPOScore"), Some(UNAVAILABLE));
    assert_eq!(first, second);
}
