// src/specs/coaches.rs
//! Coaching staff of one team season.
//!
//! The head coach and the two coordinators each sit in their own paragraph
//! and map straight onto a position. Everyone else is listed in a single
//! paragraph:
//!
//! ```text
//! <p><strong>Other Notable Asst.:</strong> <a href="/coaches/BelcBi0.htm">Bill Belichick</a> (Defensive Coordinator), ...</p>
//! ```
//!
//! Links and parenthesized titles are paired up by position.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::classify_position;
use crate::config::consts::ASSISTANTS_MARKER;
use crate::core::html::{attr_value, attr_values, child_text_nodes, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::error::SpecError;
use crate::records::{Coach, CoachingStaffMember};
use crate::vocab::CoachingPosition;

static TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.+)\)").expect("valid regex"));

/// Coach links found on a team season page. Empty strings mean "not listed".
#[derive(Clone, Debug, Default)]
pub struct StaffCells {
    pub head_coach: String,
    pub offensive_coordinator: String,
    pub defensive_coordinator: String,
    /// Raw HTML of the "Other Notable Asst." paragraph, if any.
    pub assistants: String,
}

impl StaffCells {
    /// Locate the staff paragraphs in a team season page (or any fragment
    /// holding its `<p>` blocks).
    pub fn from_page(html: &str) -> Self {
        let link = |marker: &str| {
            paragraph(html, marker)
                .and_then(|p| attr_values(&p, "a", "href").into_iter().next())
                .unwrap_or_default()
        };
        Self {
            head_coach: link("Coach:"),
            offensive_coordinator: link("Offensive Coordinator:"),
            defensive_coordinator: link("Defensive Coordinator:"),
            assistants: paragraph(html, ASSISTANTS_MARKER).unwrap_or_default(),
        }
    }
}

/// First `<p>` block whose text contains `marker`.
fn paragraph(html: &str, marker: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(html, "<p", "</p>", pos) {
        pos = e;
        let block = &html[s..e];
        // `<p` also opens `<pre>`
        if !block[2..].starts_with(|c: char| c.is_whitespace() || c == '>') {
            continue;
        }
        if strip_tags(block).contains(marker) {
            return Some(block.to_string());
        }
    }
    None
}

/// Titles in the paragraph's own text between the links, one per text node
/// at most. Text inside links and labels is never a title.
pub fn assistant_titles(paragraph: &str) -> Vec<String> {
    child_text_nodes(paragraph)
        .iter()
        .filter_map(|node| TITLE.captures(node))
        .map(|c| c[1].trim().to_string())
        .collect()
}

/// Classify every assistant in the paragraph; links and titles must pair up.
pub fn read_assistants(team: &str, paragraph: &str) -> Result<Vec<CoachingStaffMember>, SpecError> {
    let coaches = attr_values(paragraph, "a", "href");
    if coaches.is_empty() {
        return Ok(Vec::new());
    }
    let positions = assistant_titles(paragraph);
    if coaches.len() != positions.len() {
        return Err(SpecError::CountMismatch { coaches, positions });
    }

    let mut out = Vec::with_capacity(coaches.len());
    for (coach, title) in coaches.into_iter().zip(positions) {
        let position = classify_position(&title.replace(' ', "_").to_uppercase())?;
        out.push(CoachingStaffMember { coach, team: s!(team), position });
    }
    Ok(out)
}

/// The whole staff: head coach first, then coordinators, then assistants.
pub fn read_staff(team: &str, cells: &StaffCells) -> Result<Vec<CoachingStaffMember>, SpecError> {
    let direct = [
        (&cells.head_coach, CoachingPosition::HeadCoach),
        (&cells.offensive_coordinator, CoachingPosition::OffensiveCoordinator),
        (&cells.defensive_coordinator, CoachingPosition::DefensiveCoordinator),
    ];
    let mut out: Vec<_> = direct
        .into_iter()
        .filter(|(coach, _)| !coach.trim().is_empty())
        .map(|(coach, position)| CoachingStaffMember { coach: s!(coach.trim()), team: s!(team), position })
        .collect();

    if !cells.assistants.trim().is_empty() {
        out.extend(read_assistants(team, &cells.assistants)?);
    }
    logd!("{} staff members for {}", out.len(), team);
    Ok(out)
}

/// `<a href=...>Name</a>` pairs as coach records.
pub fn coach_links(html: &str) -> Vec<Coach> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(html, "<a", "</a>", pos) {
        pos = e;
        let block = &html[s..e];
        let open = &block[..block.find('>').map(|i| i + 1).unwrap_or(block.len())];
        let Some(href) = attr_value(open, "href") else { continue };
        let name = strip_tags(inner_after_open_tag(block));
        if !name.is_empty() {
            out.push(Coach { coach: href, name });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifyError;
    use CoachingPosition::*;

    const TEAM: &str = "/teams/nwe/2001.htm";
    const ASSISTANTS: &str = concat!(
        "<p><strong>Other Notable Asst.:</strong> ",
        "<a href=\"/coaches/CrenRo0.htm\">Romeo Crennel</a> (Defensive Coordinator), ",
        "<a href=\"/coaches/WeisCh0.htm\">Charlie Weis</a> (Offensive Coordinator), ",
        "<a href=\"/coaches/ScarDa0.htm\">Dante Scarnecchia</a> (Asst. Head Coach/Offensive Line)</p>",
    );

    #[test]
    fn titles_from_text_nodes() {
        assert_eq!(
            assistant_titles(ASSISTANTS),
            vec!["Defensive Coordinator", "Offensive Coordinator", "Asst. Head Coach/Offensive Line"]
        );
    }

    #[test]
    fn assistants_pair_up() {
        let staff = read_assistants(TEAM, ASSISTANTS).unwrap();
        let got: Vec<_> = staff.iter().map(|m| (m.coach.as_str(), m.position)).collect();
        assert_eq!(
            got,
            vec![
                ("/coaches/CrenRo0.htm", DefensiveCoordinator),
                ("/coaches/WeisCh0.htm", OffensiveCoordinator),
                ("/coaches/ScarDa0.htm", AssistantHeadCoach),
            ]
        );
    }

    #[test]
    fn parenthesized_name_is_not_a_title() {
        let p = concat!(
            "<p><strong>Other Notable Asst. (2001):</strong> ",
            "<a href=\"/coaches/A.htm\">Bob (Bubba) Smith</a> (Scout)</p>",
        );
        assert_eq!(assistant_titles(p), vec!["Scout"]);
        let staff = read_assistants(TEAM, p).unwrap();
        assert_eq!(staff, vec![CoachingStaffMember { coach: s!("/coaches/A.htm"), team: s!(TEAM), position: Scout }]);
    }

    #[test]
    fn count_mismatch() {
        let p = "<p>Other Notable Asst.: <a href=\"/c/a\">A</a> (Scout), <a href=\"/c/b\">B</a></p>";
        match read_assistants(TEAM, p) {
            Err(SpecError::CountMismatch { coaches, positions }) => {
                assert_eq!(coaches.len(), 2);
                assert_eq!(positions, vec!["Scout"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_title() {
        let p = "<p><a href=\"/c/a\">A</a> (Mascot)</p>";
        let err = read_assistants(TEAM, p).unwrap_err();
        assert!(matches!(err, SpecError::Classify(ClassifyError::UnrecognizedPosition { .. })));
    }

    #[test]
    fn full_staff() {
        let cells = StaffCells {
            head_coach: s!("/coaches/BeliBi0.htm"),
            offensive_coordinator: s!(""),
            defensive_coordinator: s!("/coaches/CrenRo0.htm"),
            assistants: s!(""),
        };
        let staff = read_staff(TEAM, &cells).unwrap();
        assert_eq!(staff.len(), 2);
        assert_eq!(staff[0].position, HeadCoach);
        assert_eq!(staff[1].position, DefensiveCoordinator);
    }

    #[test]
    fn cells_from_page() {
        let page = format!(
            "<div id=\"meta\"><p><strong>Coach:</strong> <a href=\"/coaches/BeliBi0.htm\">Bill Belichick</a> (11-5)</p>\
             <p><strong>Offensive Coordinator:</strong> <a href=\"/coaches/WeisCh0.htm\">Charlie Weis</a></p>\
             {ASSISTANTS}</div>"
        );
        let cells = StaffCells::from_page(&page);
        assert_eq!(cells.head_coach, "/coaches/BeliBi0.htm");
        assert_eq!(cells.offensive_coordinator, "/coaches/WeisCh0.htm");
        assert_eq!(cells.defensive_coordinator, "");
        assert_eq!(cells.assistants, ASSISTANTS);
        assert_eq!(read_staff(TEAM, &cells).unwrap().len(), 5);
    }

    #[test]
    fn links_to_coaches() {
        let coaches = coach_links(ASSISTANTS);
        assert_eq!(coaches.len(), 3);
        assert_eq!(coaches[0], Coach { coach: s!("/coaches/CrenRo0.htm"), name: s!("Romeo Crennel") });
    }
}
