// src/tables/player.rs
use std::sync::LazyLock;

use super::SubstitutionTable;
use crate::vocab::PlayerType;

/// Position codes from player pages that are not themselves player types.
/// Broad codes (`LB`, `DB`, `OL`) expand to several types; codes too vague to
/// place (`FLEX`, `D`, `NG`, ...) map to none and contribute nothing.
pub static POSITION_CODE_TRANSLATIONS: LazyLock<SubstitutionTable<PlayerType>> =
    LazyLock::new(|| SubstitutionTable::new(ENTRIES));

const ENTRIES: &[(&str, &[PlayerType])] = &[
    ("3QB", &[PlayerType::Qb]),
    ("B", &[PlayerType::Rb]),
    ("BB", &[PlayerType::Fb]),
    ("BLB", &[PlayerType::Ilb]),
    ("D", &[]),
    ("DB", &[PlayerType::Cb, PlayerType::S]),
    ("DG", &[PlayerType::Dt]),
    ("DL", &[PlayerType::De, PlayerType::Dt]),
    ("DS", &[]),
    ("E", &[PlayerType::Te]),
    ("EDGE", &[PlayerType::De, PlayerType::Olb]),
    ("END", &[PlayerType::De]),
    ("F", &[]),
    ("FL", &[PlayerType::Wr]),
    ("FLEX", &[]),
    ("FS", &[PlayerType::S]),
    ("G", &[PlayerType::Og]),
    ("H", &[]),
    ("HB", &[PlayerType::Rb]),
    ("JACK", &[PlayerType::Olb]),
    ("JLB", &[PlayerType::Ilb]),
    ("K", &[PlayerType::K]),
    ("L", &[]),
    ("LB", &[PlayerType::Olb, PlayerType::Ilb]),
    ("LCB", &[PlayerType::Cb]),
    ("LDE", &[PlayerType::De]),
    ("LDH", &[PlayerType::Cb]),
    ("LDT", &[PlayerType::Dt]),
    ("LE", &[PlayerType::Te]),
    ("LG", &[PlayerType::Og]),
    ("LH", &[PlayerType::Rb]),
    ("LILB", &[PlayerType::Ilb]),
    ("LLB", &[PlayerType::Olb]),
    ("LOLB", &[PlayerType::Olb]),
    ("LOT", &[PlayerType::Ot]),
    ("LS", &[PlayerType::S]),
    ("LT", &[PlayerType::Ot]),
    ("M", &[]),
    ("MG", &[PlayerType::Dt]),
    ("MIKE", &[PlayerType::Ilb]),
    ("MILB", &[PlayerType::Ilb]),
    ("MLB", &[PlayerType::Ilb]),
    ("MOLB", &[PlayerType::Ilb]),
    ("N", &[]),
    ("NB", &[PlayerType::Cb]),
    ("NG", &[]),
    ("NT", &[PlayerType::Dt]),
    ("OL", &[PlayerType::Ot, PlayerType::Og]),
    ("P", &[PlayerType::P]),
    ("PK", &[PlayerType::K]),
    ("PR", &[PlayerType::Kr]),
    ("Q", &[]),
    ("R", &[]),
    ("RCB", &[PlayerType::Cb]),
    ("RDE", &[PlayerType::De]),
    ("RDH", &[PlayerType::Cb]),
    ("RDT", &[PlayerType::Dt]),
    ("RE R", &[PlayerType::De]),
    ("RE", &[PlayerType::De]),
    ("RET", &[PlayerType::Kr]),
    ("RG", &[PlayerType::Og]),
    ("RH", &[PlayerType::Rb]),
    ("RILB", &[PlayerType::Ilb]),
    ("RLB", &[PlayerType::Olb]),
    ("ROLB", &[PlayerType::Olb]),
    ("ROT", &[PlayerType::Ot]),
    ("RS", &[PlayerType::S]),
    ("RT", &[PlayerType::Ot]),
    ("RUSH", &[PlayerType::Olb]),
    ("SAM", &[PlayerType::Olb]),
    ("SE", &[PlayerType::Wr]),
    ("SLB", &[PlayerType::Olb]),
    ("SS", &[PlayerType::S]),
    ("T", &[PlayerType::Ot]),
    ("TB", &[PlayerType::Rb]),
    ("UT", &[PlayerType::Dt]),
    ("W", &[]),
    ("WB", &[PlayerType::Rb]),
    ("WE", &[PlayerType::De]),
    ("WIL", &[PlayerType::Olb]),
    ("WILL", &[PlayerType::Olb]),
    ("WLB", &[PlayerType::Olb]),
];
