// src/specs/players.rs
//! Player profile page: header counts and the per-season `pos` cells.

use crate::classify::classify_positions;
use crate::core::html::{attr_value, next_tag_block_ci, strip_tags};
use crate::core::sanitize::leading_int;
use crate::error::SpecError;
use crate::records::{Player, PlayerPosition};

/// Text values read off one profile.
#[derive(Clone, Debug, Default)]
pub struct ProfileCells {
    pub name: String,
    /// Leaderboard button text, e.g. `"3x First-team All-Pro"`.
    pub all_pros: String,
    /// e.g. `"7x Pro Bowl"`.
    pub pro_bowls: String,
    /// e.g. `"112 Weighted Career AV"`.
    pub career_av: String,
    /// One entry per season row; blanks are fine.
    pub positions: Vec<String>,
}

/// Leading count of a leaderboard text. Missing text counts as zero.
pub fn parse_count(text: &str) -> u32 {
    if text.trim().is_empty() {
        return 0;
    }
    leading_int(text).unwrap_or_else(|| {
        logw!("no leading count in '{}'", text);
        0
    })
}

/// Text of every `<td data-stat="pos">` in a stats table fragment.
pub fn position_cells(table: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(table, "<td", "</td>", pos) {
        pos = e;
        let block = &table[s..e];
        let open = &block[..block.find('>').map(|i| i + 1).unwrap_or(block.len())];
        if attr_value(open, "data-stat").as_deref() == Some("pos") {
            out.push(strip_tags(block));
        }
    }
    out
}

/// The player plus one position record per distinct player type, in
/// vocabulary order.
pub fn read_profile(player: &str, cells: &ProfileCells) -> Result<(Player, Vec<PlayerPosition>), SpecError> {
    let types = classify_positions(cells.positions.iter().filter(|p| !p.trim().is_empty()))?;
    let positions = types
        .into_iter()
        .map(|position| PlayerPosition { player: s!(player), position })
        .collect();

    let record = Player {
        player: s!(player),
        name: s!(cells.name.trim()),
        first_team_all_pros: parse_count(&cells.all_pros),
        pro_bowls: parse_count(&cells.pro_bowls),
        career_approx_value: parse_count(&cells.career_av),
    };
    Ok((record, positions))
}
