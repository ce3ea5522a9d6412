// src/tables/mod.rs
//! Static substitution tables: exact-key corrections for typos, shorthand and
//! laterality that the site uses in place of canonical names.
//!
//! Tables are literal data, hashed once on first use and immutable after.

pub mod address;
pub mod coaching;
pub mod injury;
pub mod player;

use std::collections::HashMap;

pub use address::{CITY_NAME_SUBSTITUTIONS, STATE_TEXT_ALIASES};
pub use coaching::COACHING_POSITION_SUBSTITUTIONS;
pub use injury::INJURY_REASON_SUBSTITUTIONS;
pub use player::POSITION_CODE_TRANSLATIONS;

/// Normalized token -> one or more codes of a single vocabulary.
/// An entry may map to zero codes ("known label, no concrete code").
#[derive(Debug)]
pub struct SubstitutionTable<T: 'static> {
    map: HashMap<&'static str, &'static [T]>,
}

impl<T: 'static> SubstitutionTable<T> {
    pub fn new(entries: &[(&'static str, &'static [T])]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for &(key, codes) in entries {
            let prev = map.insert(key, codes);
            debug_assert!(prev.is_none(), "duplicate substitution key {key:?}");
        }
        Self { map }
    }

    pub fn get(&self, token: &str) -> Option<&'static [T]> {
        self.map.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.map.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static [T])> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }
}
