// src/classify/player.rs

use std::collections::BTreeSet;

use crate::core::rules::{self, Step};
use crate::core::token::Normalizer;
use crate::error::{ClassifyError, Result};
use crate::tables::POSITION_CODE_TRANSLATIONS;
use crate::vocab::PlayerType;

/// Every player type named by a set of position labels (`"LB"`, `"DE-LB"`,
/// `"RCB/KR"`, ...). Codes are looked up in the translation table, then by
/// name; a translation may contribute nothing (`FLEX`). Blank codes left by
/// stray delimiters are ignored.
pub fn classify_positions<I, S>(labels: I) -> Result<BTreeSet<PlayerType>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let steps = [Step::Table(&*POSITION_CODE_TRANSLATIONS), Step::Name];
    let mut out = BTreeSet::new();

    for label in labels {
        let label = label.as_ref();
        for code in Normalizer::POSITION.split_multi(label) {
            if code.is_empty() {
                continue;
            }
            let hit = rules::resolve(&code, &steps).ok_or_else(|| {
                logw!("unrecognized position code '{}' in '{}'", code, label);
                ClassifyError::UnrecognizedPlayerType { label: label.to_string(), code: code.clone() }
            })?;
            out.extend(hit.codes.iter().copied());
        }
    }
    Ok(out)
}
