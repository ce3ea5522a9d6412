// src/tables/coaching.rs
use std::sync::LazyLock;

use super::SubstitutionTable;
use crate::vocab::CoachingPosition;

/// Coaching titles seen on staff pages that are not canonical names:
/// typos, shorthand and one-off titles with a fixed home.
pub static COACHING_POSITION_SUBSTITUTIONS: LazyLock<SubstitutionTable<CoachingPosition>> =
    LazyLock::new(|| SubstitutionTable::new(ENTRIES));

const ENTRIES: &[(&str, &[CoachingPosition])] = &[
    ("ASSISTANT_COACH", &[CoachingPosition::OtherAssistant]),
    ("ASSISTANT_O-LINE_COACH", &[CoachingPosition::AssistantOffensiveLine]),
    ("ASSISTANT_QB_COACH", &[CoachingPosition::AssistantQuarterbacks]),
    ("ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("COACHING_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("CORNERBACKS", &[CoachingPosition::DefensiveBacks]),
    ("DEFENSIVE_BACKFIELD", &[CoachingPosition::DefensiveBacks]),
    ("DEFENSIVE_COACH", &[CoachingPosition::DefensiveAssistant]),
    ("DEFENSIVE_QUALITY_CONTROL", &[CoachingPosition::DefensiveAssistant]),
    ("DEFENSIVE", &[CoachingPosition::DefensiveAssistant]),
    ("FOOTBALL_SYSTEMS_ANALYST", &[CoachingPosition::OtherAssistant]),
    ("INSIDE_LINEBACKERS", &[CoachingPosition::Linebackers]),
    ("LINE_COACH", &[CoachingPosition::OffensiveLine]),
    ("OFFENSIVE_ASISTANT", &[CoachingPosition::OffensiveAssistant]),
    ("OFFENSIVE_BACKFIELD", &[CoachingPosition::BackfieldCoach]),
    ("OFFENSIVE_BACKS", &[CoachingPosition::BackfieldCoach]),
    ("OFFENSIVE_COACH", &[CoachingPosition::OffensiveAssistant]),
    ("OFFENSIVE_CONSULTANT", &[CoachingPosition::OtherAssistant]),
    ("OFFENSIVE_QUALITY_CONTROL", &[CoachingPosition::OffensiveAssistant]),
    ("OL", &[CoachingPosition::OffensiveLine]),
    ("PERSONNEL_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("PLAYER_PERSONNEL_INTERN", &[CoachingPosition::OtherAssistant]),
    ("QUALITY_CONTROL", &[CoachingPosition::OtherAssistant]),
    ("RECEIVERS", &[CoachingPosition::WideReceivers]),
    ("SAFETIES", &[CoachingPosition::DefensiveBacks]),
    ("SECONDARY", &[CoachingPosition::DefensiveBacks]),
    ("SENIOR_DEFENSIVE_ASSISTANT", &[CoachingPosition::DefensiveAssistant]),
    ("SPECIAL_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("VOLUNTEER_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("CONSULTANT", &[CoachingPosition::OtherAssistant]),
    ("DEF._QUALITY_CONTROL", &[CoachingPosition::DefensiveAssistant]),
    ("ASSISTANT_TO_THE_HEAD_COACH", &[CoachingPosition::OtherAssistant]),
    ("SENIOR_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("COACHING_INTERN", &[CoachingPosition::OtherAssistant]),
    ("ADMINISTRATIVE_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("COACHES'_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("COACHING_ADMINISTRATIVE_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("OFFENSIVE_COACHING_INTERN", &[CoachingPosition::OffensiveAssistant]),
    ("SR._OFFENSIVE_CONSULTANT", &[CoachingPosition::OffensiveAssistant]),
    ("SPECIAL_ADVISOR", &[CoachingPosition::OtherAssistant]),
    ("ST", &[CoachingPosition::SpecialTeamsCoordinator]),
    ("ASSISTANT_SECONDARY", &[CoachingPosition::AssistantDefensiveBacks]),
    ("ASSOCIATE_HEAD_COACH", &[CoachingPosition::AssistantHeadCoach]),
    ("INTERN", &[CoachingPosition::OtherAssistant]),
    ("TACKLES", &[CoachingPosition::OffensiveLine]),
    ("SECONDARY_COACH", &[CoachingPosition::DefensiveBacks]),
    ("INTERIM_DL_COACH", &[CoachingPosition::DefensiveLine]),
    ("QUALITY_CONTROL_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("PLAYER_PERSONNEL_STAFF", &[CoachingPosition::Scout]),
    ("DL", &[CoachingPosition::DefensiveLine]),
    ("LB", &[CoachingPosition::Linebackers]),
    ("DB", &[CoachingPosition::DefensiveBacks]),
    ("ASSISTANT_ST_COACH", &[CoachingPosition::OtherAssistant]),
    ("DEFENSIVE_INTERN", &[CoachingPosition::DefensiveAssistant]),
    ("QUALITY_CONTROL_COORDINATOR", &[CoachingPosition::OtherAssistant]),
    ("SPREAD_GAME_ANALYST", &[CoachingPosition::OtherAssistant]),
    ("RUNNING_GAME_COORDINATOR", &[CoachingPosition::OffensiveAssistant]),
    ("DC", &[CoachingPosition::DefensiveCoordinator]),
    ("DEF._RUNNING_GAME_COORDINATOR", &[CoachingPosition::DefensiveAssistant]),
    ("OFF._LINE_ASSISTANT", &[CoachingPosition::AssistantOffensiveLine]),
    ("COACHES_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("SECONDARY_(NICKEL_PACKAGE)", &[CoachingPosition::AssistantDefensiveBacks]),
    ("SENIOR_ADVISOR", &[CoachingPosition::OtherAssistant]),
    ("SPECIAL_TEAM_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("ASSISTANT_TO_HEAD_COACH", &[CoachingPosition::OtherAssistant]),
    ("INTERIM_HEAD_COACH", &[CoachingPosition::HeadCoach]),
    ("PGC", &[CoachingPosition::OffensiveAssistant]),
    ("DEFENSIVE_TACKLES", &[CoachingPosition::AssistantDefensiveLine]),
    ("SR._COACHING_ASSISTANT", &[CoachingPosition::OtherAssistant]),
    ("DEF._PASSING_GAME_SPECIALIST", &[CoachingPosition::DefensiveAssistant]),
    ("QUATERBACKS", &[CoachingPosition::Quarterbacks]),
    ("DEFENSIVE_ENDS", &[CoachingPosition::AssistantDefensiveLine]),
    ("OFFENSE", &[CoachingPosition::OffensiveAssistant]),
    ("SPECIAL_ASSISTANT_TO_HEAD_COACH", &[CoachingPosition::OtherAssistant]),
    ("INTERIM_OC", &[CoachingPosition::OffensiveAssistant]),
    ("SAFETIES_COACH", &[CoachingPosition::AssistantDefensiveBacks]),
    ("OFFENSIVE_INTERN", &[CoachingPosition::OffensiveAssistant]),
    ("ASSOCIATE_HEAD_COACH-OFFENSE", &[CoachingPosition::OffensiveAssistant]),
    ("DEFENSIVE_ASISTANT", &[CoachingPosition::DefensiveAssistant]),
    // legacy spelling of the canonical name, still present in older exports
    ("DEFENSIVE_COORDNATOR", &[CoachingPosition::DefensiveCoordinator]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_maps_to_exactly_one_position() {
        assert_eq!(COACHING_POSITION_SUBSTITUTIONS.len(), ENTRIES.len());
        for (key, codes) in COACHING_POSITION_SUBSTITUTIONS.iter() {
            assert_eq!(codes.len(), 1, "{key}");
        }
    }

    #[test]
    fn keys_with_punctuation_are_kept_verbatim() {
        let t = &*COACHING_POSITION_SUBSTITUTIONS;
        assert_eq!(t.get("COACHES'_ASSISTANT"), Some(&[CoachingPosition::OtherAssistant][..]));
        assert_eq!(t.get("ASSISTANT_O-LINE_COACH"), Some(&[CoachingPosition::AssistantOffensiveLine][..]));
        assert_eq!(t.get("SECONDARY_(NICKEL_PACKAGE)"), Some(&[CoachingPosition::AssistantDefensiveBacks][..]));
    }
}
