// src/classify/state.rs

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{ClassifyError, Result};
use crate::tables::STATE_TEXT_ALIASES;
use crate::vocab::UsState;

/// Name/abbreviation -> state lookup. The built-in [`UsStates`] is the
/// default; callers with a richer gazetteer can supply their own.
pub trait StateLookup {
    fn lookup(&self, text: &str) -> Option<UsState>;
}

/// Built-in lookup over the states, DC and inhabited territories. Accepts a
/// postal abbreviation, FIPS code or full name, ignoring case, punctuation
/// and repeated spaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsStates;

static INDEX: LazyLock<HashMap<String, UsState>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (state, name, fips) in UsState::table() {
        map.insert(state.abbr().to_ascii_lowercase(), state);
        map.insert(fips.to_string(), state);
        map.insert(fold(name), state);
    }
    for alias in ["washington dc", "washington district of columbia"] {
        map.insert(alias.to_string(), UsState::DistrictOfColumbia);
    }
    map
});

/// Lowercase, drop punctuation, collapse whitespace.
fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        let word: String = word.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase).collect();
        if word.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&word);
    }
    out
}

impl StateLookup for UsStates {
    fn lookup(&self, text: &str) -> Option<UsState> {
        INDEX.get(&fold(text)).copied()
    }
}

/// Canonical state for free text, using the built-in lookup.
///
/// ```
/// use nfldata::normalize_state;
/// assert_eq!(normalize_state("Jersey").unwrap().abbr(), "NJ");
/// assert_eq!(normalize_state("D.C.").unwrap().abbr(), "DC");
/// ```
pub fn normalize_state(raw: &str) -> Result<UsState> {
    normalize_state_with(&UsStates, raw)
}

/// The two site-specific aliases are applied before `lookup` sees the text.
/// Failure carries the original text.
pub fn normalize_state_with<L: StateLookup + ?Sized>(lookup: &L, raw: &str) -> Result<UsState> {
    let lowered = raw.trim().to_lowercase();
    let text = STATE_TEXT_ALIASES.get(lowered.as_str()).copied().unwrap_or(raw);

    lookup.lookup(text).ok_or_else(|| {
        logw!("invalid state '{}'", raw);
        ClassifyError::InvalidState { raw: raw.to_string() }
    })
}
