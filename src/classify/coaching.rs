// src/classify/coaching.rs
//! Coaching title -> [`CoachingPosition`].
//!
//! A title may carry several `/`-joined alternates. Each alternate runs the
//! chain *name, substitution table, ordered rules*; the first alternate that
//! resolves at all decides the title. A coach holds one title, so later
//! alternates are never consulted once one resolves.

use crate::core::rules::{self, Predicate::*, Rule, Step};
use crate::core::token::Normalizer;
use crate::error::{ClassifyError, Result};
use crate::tables::{COACHING_POSITION_SUBSTITUTIONS, SubstitutionTable};
use crate::vocab::CoachingPosition::{self, *};

/// Compound-title heuristics, in evaluation order. Each assistant variant
/// directly follows its primary position.
pub static COACHING_RULES: &[Rule<CoachingPosition>] = &[
    Rule {
        name: "assistant-head-coach",
        when: Any(&[Contains("ASSISTANT_HEAD_COACH"), Contains("ASSISTANT_HC")]),
        then: AssistantHeadCoach,
    },
    Rule { name: "offensive-coordinator", when: Contains("OFFENSIVE_COORDINATOR"), then: OffensiveCoordinator },
    Rule { name: "defensive-coordinator", when: Contains("DEFENSIVE_COORDINATOR"), then: DefensiveCoordinator },
    // offense
    Rule {
        name: "quarterbacks",
        when: Any(&[Prefix("QUARTERBACKS"), Prefix("QB"), Suffix("QBS")]),
        then: Quarterbacks,
    },
    Rule {
        name: "assistant-quarterbacks",
        when: Any(&[Prefix("ASSISTANT_QUARTERBACKS"), Prefix("ASSISTANT_QB")]),
        then: AssistantQuarterbacks,
    },
    Rule { name: "running-backs", when: Prefix("RUNNING_BACKS"), then: RunningBacks },
    Rule {
        name: "assistant-running-backs",
        when: Any(&[Prefix("ASSISTANT_RUNNING_BACKS"), Prefix("ASSISTANT_RB")]),
        then: AssistantRunningBacks,
    },
    Rule {
        name: "wide-receivers",
        when: Any(&[Prefix("WIDE_RECEIVERS"), Prefix("WR")]),
        then: WideReceivers,
    },
    Rule {
        name: "assistant-wide-receivers",
        when: Any(&[Prefix("ASSISTANT_WIDE_RECEIVERS"), Prefix("ASSISTANT_WR")]),
        then: AssistantWideReceivers,
    },
    Rule { name: "tight-ends", when: Any(&[Prefix("TIGHT_ENDS"), Prefix("TE")]), then: TightEnds },
    Rule {
        name: "assistant-tight-ends",
        when: Any(&[Prefix("ASSISTANT_TIGHT_ENDS"), Prefix("ASSISTANT_TE")]),
        then: AssistantTightEnds,
    },
    Rule {
        name: "offensive-line",
        when: Any(&[Prefix("OFFENSIVE_LINE"), Prefix("OL")]),
        then: OffensiveLine,
    },
    Rule {
        name: "assistant-offensive-line",
        when: Any(&[Prefix("ASSISTANT_OFFENSIVE_LINE"), Contains("OL_COACH"), Prefix("ASSISTANT_OL")]),
        then: AssistantOffensiveLine,
    },
    Rule { name: "ends", when: Prefix("ENDS"), then: Ends },
    Rule { name: "backfield", when: Prefix("BACKFIELD_COACH"), then: BackfieldCoach },
    Rule {
        name: "offensive-assistant",
        when: Any(&[
            Prefix("PASSING_COORDINATOR"),
            Contains("OFFENSIVE_ASSISTANT"),
            Prefix("ASSISTANT_OFFENSE"),
            Prefix("PASSING_GAME"),
            Prefix("RUN_GAME"),
            All(&[Contains("OFF"), Contains("QUALITY_CONTROL")]),
        ]),
        then: OffensiveAssistant,
    },
    // defense
    Rule { name: "defensive-line", when: Prefix("DEFENSIVE_LINE"), then: DefensiveLine },
    Rule {
        name: "assistant-defensive-line",
        when: Any(&[Prefix("ASSISTANT_DEFENSIVE_LINE"), Prefix("ASSISTANT_DL")]),
        then: AssistantDefensiveLine,
    },
    Rule { name: "linebackers", when: Prefix("LINEBACKERS"), then: Linebackers },
    Rule {
        name: "assistant-linebackers",
        when: Any(&[
            Prefix("ASSISTANT_LINEBACKERS"),
            Contains("ASSISTANT_LB"),
            Contains("OUTSIDE_LINEBACKERS"),
            Contains("INSIDE_LINEBACKERS"),
        ]),
        then: AssistantLinebackers,
    },
    Rule {
        name: "defensive-backs",
        when: Any(&[Prefix("DEFENSIVE_BACKS"), Prefix("DB")]),
        then: DefensiveBacks,
    },
    Rule {
        name: "assistant-defensive-backs",
        when: Any(&[Prefix("ASSISTANT_DEFENSIVE_BACKS"), Prefix("ASSISTANT_DB")]),
        then: AssistantDefensiveBacks,
    },
    Rule {
        name: "defensive-assistant",
        when: Any(&[
            Contains("DEFENSIVE_ASSISTANT"),
            Prefix("DEFENSIVE_QUALITY"),
            All(&[Contains("DEF"), Contains("QUALITY_CONTROL")]),
            Prefix("SENIOR_DEF._ASSISTANT"),
        ]),
        then: DefensiveAssistant,
    },
    // special teams
    Rule { name: "special-teams", when: Contains("SPECIAL_TEAMS"), then: SpecialTeamsCoordinator },
    Rule { name: "kicking", when: Prefix("KICKING"), then: Kicking },
    // other
    Rule { name: "scout", when: Contains("SCOUT"), then: Scout },
    Rule {
        name: "strength-and-conditioning",
        when: Any(&[All(&[Contains("STRENGTH"), Contains("CONDITIONING")]), Contains("S&C")]),
        then: StrengthAndConditioning,
    },
];

/// Coaching classifier over a substitution table and rule list.
/// [`CoachingEngine::standard`] is what [`classify_position`] uses.
#[derive(Clone, Copy)]
pub struct CoachingEngine<'a> {
    substitutions: &'a SubstitutionTable<CoachingPosition>,
    rules: &'a [Rule<CoachingPosition>],
}

impl CoachingEngine<'static> {
    pub fn standard() -> Self {
        Self { substitutions: &COACHING_POSITION_SUBSTITUTIONS, rules: COACHING_RULES }
    }
}

impl<'a> CoachingEngine<'a> {
    /// Standard rules with a different substitution table.
    pub fn with_substitutions(substitutions: &'a SubstitutionTable<CoachingPosition>) -> Self {
        Self { substitutions, rules: COACHING_RULES }
    }

    pub fn classify(&self, label: &str) -> Result<CoachingPosition> {
        let alternates = Normalizer::COACHING.split_multi(label);
        let steps = [Step::Name, Step::Table(self.substitutions), Step::Rules(self.rules)];

        for alt in &alternates {
            if let Some(hit) = rules::resolve(alt, &steps) {
                // name and rule hits are single-valued; table entries hold exactly one position
                if let Some(&position) = hit.codes.first() {
                    logd!("coaching '{}' -> {} via {}", alt, position, hit.via);
                    return Ok(position);
                }
            }
        }

        logw!("no coaching position for '{}' (alternates {:?})", label, alternates);
        Err(ClassifyError::UnrecognizedPosition { label: label.to_string(), alternates })
    }
}

/// Classify one coaching title.
///
/// ```
/// use nfldata::{classify_position, vocab::CoachingPosition};
/// assert_eq!(classify_position("Off. Line Asst.").unwrap(), CoachingPosition::AssistantOffensiveLine);
/// assert_eq!(classify_position("QB/Asst. WR").unwrap(), CoachingPosition::Quarterbacks);
/// ```
pub fn classify_position(label: &str) -> Result<CoachingPosition> {
    CoachingEngine::standard().classify(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Vocabulary;

    #[test]
    fn canonical_names_resolve_to_themselves() {
        for p in CoachingPosition::ALL {
            assert_eq!(classify_position(p.name()), Ok(*p));
        }
    }

    #[test]
    fn every_substitution_key_resolves_to_its_entry() {
        for (key, codes) in COACHING_POSITION_SUBSTITUTIONS.iter() {
            assert_eq!(classify_position(key), Ok(codes[0]), "key {key}");
        }
    }

    #[test]
    fn name_beats_table_beats_rules() {
        static ENTRIES: &[(&str, &[CoachingPosition])] = &[
            ("HEAD_COACH", &[Scout]),
            ("QB_WHISPERER", &[Kicking]),
        ];
        let table = SubstitutionTable::new(ENTRIES);
        let engine = CoachingEngine::with_substitutions(&table);
        assert_eq!(engine.classify("Head Coach"), Ok(HeadCoach));
        // table entry wins over the QB prefix rule
        assert_eq!(engine.classify("QB Whisperer"), Ok(Kicking));
        assert_eq!(classify_position("QB Whisperer"), Ok(Quarterbacks));
    }

    #[test]
    fn rule_order_decides_ambiguous_titles() {
        assert_eq!(classify_position("Assistant Head Coach QB"), Ok(AssistantHeadCoach));
        assert_eq!(classify_position("Linebackers and Defensive Backs"), Ok(Linebackers));
        // assistant-linebackers is declared before defensive-backs
        assert_eq!(classify_position("Defensive Backs and Inside Linebackers"), Ok(AssistantLinebackers));
        assert_eq!(classify_position("Off. Quality Control"), Ok(OffensiveAssistant));
        assert_eq!(classify_position("Def. Quality Control Asst"), Ok(DefensiveAssistant));
    }

    #[test]
    fn scraped_titles() {
        assert_eq!(classify_position("Off. Line Asst."), Ok(AssistantOffensiveLine));
        assert_eq!(classify_position("Asst. Strength & Conditioning"), Ok(StrengthAndConditioning));
        assert_eq!(classify_position("Asst. QB"), Ok(AssistantQuarterbacks));
        assert_eq!(classify_position("Special Teams Asst."), Ok(SpecialTeamsCoordinator));
        assert_eq!(classify_position("Pro Scout"), Ok(Scout));
        assert_eq!(classify_position("Kicking Consultant"), Ok(Kicking));
        assert_eq!(classify_position("  tight   ends "), Ok(TightEnds));
        assert_eq!(classify_position("Defensive Coordnator"), Ok(DefensiveCoordinator));
    }

    #[test]
    fn first_resolving_alternate_wins() {
        assert_eq!(classify_position("Quarterbacks/Wide Receivers"), Ok(Quarterbacks));
        assert_eq!(classify_position("Wide Receivers/Quarterbacks"), Ok(WideReceivers));
        assert_eq!(classify_position("Zzz/Tight Ends"), Ok(TightEnds));
    }

    #[test]
    fn unknown_title_is_an_error_naming_every_alternate() {
        let err = classify_position("ZZZZZ_NONSENSE").unwrap_err();
        assert!(err.to_string().contains("ZZZZZ_NONSENSE"), "{err}");

        match classify_position("Foo/Bar") {
            Err(ClassifyError::UnrecognizedPosition { label, alternates }) => {
                assert_eq!(label, "Foo/Bar");
                assert_eq!(alternates, vec!["FOO", "BAR"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn deterministic() {
        for label in ["Off. Line Asst.", "Secondary", "Asst. S&C", "Run Game Coordinator"] {
            assert_eq!(classify_position(label), classify_position(label));
        }
    }
}
