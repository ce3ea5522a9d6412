// src/specs/injuries.rs
//! One cell of a team's weekly injury report.
//!
//! ```text
//! <td data-stat="week_5" class="dnp" data-tip="Out: Right Knee">O</td>
//! ```

use crate::classify::{classify_injury_reasons, classify_injury_status, outcome_from_class_attr};
use crate::config::consts::{INJURY_REPORTS_FIRST_SEASON, WEEK_PREFIX};
use crate::core::html::{attr_value, strip_tags};
use crate::error::SpecError;
use crate::records::{Injury, InjuryReason};

/// Raw attributes of a report cell, plus its visible text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub stat: String,
    pub class: String,
    pub tip: String,
    pub text: String,
}

impl Cell {
    /// Pull the attributes out of one `<td ...>...</td>` block.
    pub fn from_html(td: &str) -> Self {
        let open_end = td.find('>').map(|i| i + 1).unwrap_or(td.len());
        let open = &td[..open_end];
        Self {
            stat: attr_value(open, "data-stat").unwrap_or_default(),
            class: attr_value(open, "class").unwrap_or_default(),
            tip: attr_value(open, "data-tip").unwrap_or_default(),
            text: strip_tags(td),
        }
    }

    /// Empty cells mean the player was not on that week's report.
    pub fn is_reportable(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Reports are only published from the 2009 season on.
pub fn has_injury_reports(year: u32) -> bool {
    year >= INJURY_REPORTS_FIRST_SEASON
}

/// `"week_5"` -> 5
pub fn parse_week(stat: &str) -> Result<u32, SpecError> {
    stat.trim()
        .strip_prefix(WEEK_PREFIX)
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| SpecError::BadWeek(stat.to_string()))
}

/// Read one reportable cell into its injury and the reasons behind it.
pub fn read_cell(player: &str, team: &str, cell: &Cell) -> Result<(Injury, Vec<InjuryReason>), SpecError> {
    let week = parse_week(&cell.stat)?;
    let (raw_status, raw_reasons) = cell
        .tip
        .split_once(':')
        .ok_or_else(|| SpecError::MalformedTip(cell.tip.clone()))?;

    let status = classify_injury_status(raw_status)?;
    let outcome = outcome_from_class_attr(&cell.class);
    let reasons = classify_injury_reasons(status, raw_reasons)?
        .into_iter()
        .map(|reason| InjuryReason { player: s!(player), team: s!(team), week, reason })
        .collect();

    let injury = Injury { player: s!(player), team: s!(team), week, status, outcome };
    Ok((injury, reasons))
}
