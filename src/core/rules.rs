// src/core/rules.rs
//! Ordered "first match wins" resolution.
//!
//! Each engine declares its precedence chain as a list of [`Step`]s; the
//! heuristic part of a chain is a static list of [`Rule`]s. Order is the
//! contract: a token matching two rules resolves to the earlier one.

use crate::tables::SubstitutionTable;
use crate::vocab::Vocabulary;

/// Test over a normalized token.
#[derive(Clone, Copy, Debug)]
pub enum Predicate {
    Exact(&'static str),
    Prefix(&'static str),
    Suffix(&'static str),
    Contains(&'static str),
    /// At least one of.
    Any(&'static [Predicate]),
    /// All of.
    All(&'static [Predicate]),
}

impl Predicate {
    pub fn matches(&self, token: &str) -> bool {
        match *self {
            Predicate::Exact(s) => token == s,
            Predicate::Prefix(s) => token.starts_with(s),
            Predicate::Suffix(s) => token.ends_with(s),
            Predicate::Contains(s) => token.contains(s),
            Predicate::Any(ps) => ps.iter().any(|p| p.matches(token)),
            Predicate::All(ps) => ps.iter().all(|p| p.matches(token)),
        }
    }
}

/// A predicate and the code it yields.
#[derive(Clone, Copy, Debug)]
pub struct Rule<T: 'static> {
    /// Short label for logs and test failures.
    pub name: &'static str,
    pub when: Predicate,
    pub then: T,
}

/// First rule whose predicate matches, in declaration order.
pub fn first_match<'a, T>(rules: &'a [Rule<T>], token: &str) -> Option<&'a Rule<T>> {
    rules.iter().find(|r| r.when.matches(token))
}

/// One stage of a precedence chain.
pub enum Step<'a, T: Vocabulary> {
    /// Exact symbolic-name match against the vocabulary.
    Name,
    /// Exact key match against a substitution table.
    Table(&'a SubstitutionTable<T>),
    /// Ordered heuristic rules.
    Rules(&'a [Rule<T>]),
}

/// Codes produced for a token, and which step produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit<'a, T> {
    pub codes: &'a [T],
    pub via: &'static str,
}

/// Run `token` through `steps` in order; the first step that answers wins.
/// A table entry may legitimately answer with zero codes.
pub fn resolve<'a, T: Vocabulary>(token: &str, steps: &[Step<'a, T>]) -> Option<Hit<'a, T>> {
    for step in steps {
        let hit = match step {
            Step::Name => T::slice_by_name(token).map(|codes| Hit { codes, via: "name" }),
            Step::Table(table) => table.get(token).map(|codes| Hit { codes, via: "table" }),
            Step::Rules(rules) => first_match(*rules, token).map(|r| Hit {
                codes: std::slice::from_ref(&r.then),
                via: r.name,
            }),
        };
        if hit.is_some() {
            return hit;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::InjuryOutcome;

    use Predicate::*;

    static RULES: &[Rule<InjuryOutcome>] = &[
        Rule { name: "dnp", when: Any(&[Prefix("DNP"), Suffix("_DNP")]), then: InjuryOutcome::DidNotPlay },
        Rule { name: "played", when: All(&[Contains("PLAY"), Contains("ED")]), then: InjuryOutcome::Played },
        Rule { name: "late-dnp", when: Contains("DNP"), then: InjuryOutcome::Played },
    ];

    #[test]
    fn predicates() {
        assert!(Exact("A").matches("A"));
        assert!(!Exact("A").matches("AB"));
        assert!(Prefix("QB").matches("QB_COACH"));
        assert!(Suffix("QBS").matches("ASSISTANT_QBS"));
        assert!(Contains("S&C").matches("HEAD_S&C"));
        assert!(All(&[Contains("OFF"), Contains("QUALITY_CONTROL")]).matches("OFF._QUALITY_CONTROL"));
        assert!(!All(&[Contains("OFF"), Contains("QUALITY_CONTROL")]).matches("QUALITY_CONTROL"));
    }

    #[test]
    fn first_declared_rule_wins() {
        // matches both "dnp" and "late-dnp"
        assert_eq!(first_match(RULES, "DNP_X").map(|r| r.name), Some("dnp"));
        assert_eq!(first_match(RULES, "X_DNP_X").map(|r| r.name), Some("late-dnp"));
        assert!(first_match(RULES, "NOTHING").is_none());
    }

    #[test]
    fn resolve_reports_step() {
        let steps = [Step::Name, Step::Rules(RULES)];
        let hit = resolve("PLAYED", &steps).unwrap();
        assert_eq!((hit.codes, hit.via), (&[InjuryOutcome::Played][..], "name"));
        let hit = resolve("REPLAYED", &steps).unwrap();
        assert_eq!(hit.via, "played");
        assert!(resolve("ZZZ", &steps).is_none());
    }
}
