// src/classify/injury.rs
//! Injury report tooltips (`"Questionable: Right Knee, Ankle"`).
//!
//! The status half is matched exactly. The reason half is split into
//! alternates and **every** alternate must resolve; results are concatenated
//! in order, so one tooltip can yield several injury types. Compare the
//! coaching engine, where the first resolving alternate wins.

use crate::config::consts::DNP_CLASS;
use crate::core::rules::{self, Step};
use crate::core::token::Normalizer;
use crate::error::{ClassifyError, Result};
use crate::tables::{INJURY_REASON_SUBSTITUTIONS, SubstitutionTable};
use crate::vocab::{InjuryOutcome, InjuryStatus, InjuryType, Vocabulary};

/// Exact match of the normalized status against [`InjuryStatus`]. There is
/// no substitution table for statuses.
pub fn classify_injury_status(label: &str) -> Result<InjuryStatus> {
    let token = Normalizer::INJURY_STATUS.normalize(label);
    InjuryStatus::from_name(&token).ok_or_else(|| {
        logw!("unrecognized injury status '{}'", label);
        ClassifyError::UnrecognizedStatus { label: label.to_string(), token }
    })
}

/// Injury reason classifier; [`classify_injury_reasons`] uses the standard table.
#[derive(Clone, Copy)]
pub struct InjuryEngine<'a> {
    substitutions: &'a SubstitutionTable<InjuryType>,
}

impl InjuryEngine<'static> {
    pub fn standard() -> Self {
        Self { substitutions: &INJURY_REASON_SUBSTITUTIONS }
    }
}

impl<'a> InjuryEngine<'a> {
    pub fn with_substitutions(substitutions: &'a SubstitutionTable<InjuryType>) -> Self {
        Self { substitutions }
    }

    pub fn reasons(&self, status: InjuryStatus, label: &str) -> Result<Vec<InjuryType>> {
        // suspensions carry no reason text
        if status == InjuryStatus::Suspended {
            return Ok(vec![InjuryType::Suspension]);
        }
        self.classify(label)
    }

    /// Reason text alone, with no status to short-circuit on.
    pub fn classify(&self, label: &str) -> Result<Vec<InjuryType>> {
        let steps = [Step::Table(self.substitutions), Step::Name];
        let mut out = Vec::new();
        for alt in Normalizer::INJURY_REASON.split_multi(label) {
            match rules::resolve(&alt, &steps) {
                Some(hit) => {
                    logd!("injury reason '{}' -> {:?} via {}", alt, hit.codes, hit.via);
                    out.extend_from_slice(hit.codes);
                }
                None => {
                    logw!("unrecognized injury reason '{}' in '{}'", alt, label);
                    return Err(ClassifyError::UnrecognizedReason { label: label.to_string(), token: alt });
                }
            }
        }
        Ok(out)
    }
}

/// Injury types for the reason half of a tooltip, in label order.
pub fn classify_injury_reasons(status: InjuryStatus, label: &str) -> Result<Vec<InjuryType>> {
    InjuryEngine::standard().reasons(status, label)
}

/// `DID_NOT_PLAY` when the `dnp` marker is among the cell's classes.
pub fn classify_injury_outcome<I, S>(classes: I) -> InjuryOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if classes.into_iter().any(|c| c.as_ref() == DNP_CLASS) {
        InjuryOutcome::DidNotPlay
    } else {
        InjuryOutcome::Played
    }
}

/// Same, from a raw space-delimited `class` attribute.
pub fn outcome_from_class_attr(attr: &str) -> InjuryOutcome {
    classify_injury_outcome(attr.split_whitespace())
}
