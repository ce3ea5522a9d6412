// tests/players.rs
//
// Player position codes from per-season `pos` cells.
//
use nfldata::{ClassifyError, PlayerType, classify_positions};
use nfldata::PlayerType::*;

fn types(labels: &[&str]) -> Vec<PlayerType> {
    classify_positions(labels.iter().copied()).unwrap().into_iter().collect()
}

#[test]
fn codes_and_translations() {
    assert_eq!(types(&["QB"]), vec![Qb]);
    assert_eq!(types(&["lb"]), vec![Ilb, Olb]);
    assert_eq!(types(&["FS", "SS"]), vec![S]);
    assert_eq!(types(&["NT", "T"]), vec![Dt, Ot]);
}

#[test]
fn multi_valued_labels() {
    assert_eq!(types(&["DE-LB"]), vec![De, Ilb, Olb]);
    assert_eq!(types(&["RCB/KR", "cb"]), vec![Cb, Kr]);
    assert_eq!(types(&["re r"]), vec![De]);
}

#[test]
fn placeholders_and_blanks_add_nothing() {
    assert_eq!(types(&["FLEX"]), vec![]);
    assert_eq!(types(&["", "WR,", "/TE"]), vec![Te, Wr]);
}

#[test]
fn unknown_code() {
    match classify_positions(["QB", "XYZ"]) {
        Err(ClassifyError::UnrecognizedPlayerType { label, code }) => {
            assert_eq!(label, "XYZ");
            assert_eq!(code, "XYZ");
        }
        other => panic!("unexpected {other:?}"),
    }
}
