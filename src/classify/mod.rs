// src/classify/mod.rs
//! # Classification engines
//!
//! One engine per domain, each a fixed precedence chain over the shared
//! resolver in [`core::rules`](crate::core::rules):
//!
//! | engine     | per-alternate chain         | alternates            |
//! |------------|-----------------------------|-----------------------|
//! | coaching   | name, table, ordered rules  | first resolving wins  |
//! | injury     | table, name                 | all must resolve      |
//! | player     | table, name                 | all must resolve, set |
//! | state      | aliases, lookup             | n/a                   |
//!
//! Engines are pure: no state beyond the static tables, safe to call from
//! any number of threads. Unknown input is always an error; nothing is
//! defaulted.

pub mod coaching;
pub mod injury;
pub mod player;
pub mod state;

pub use coaching::{COACHING_RULES, CoachingEngine, classify_position};
pub use injury::{
    InjuryEngine, classify_injury_outcome, classify_injury_reasons, classify_injury_status,
    outcome_from_class_attr,
};
pub use player::classify_positions;
pub use state::{StateLookup, UsStates, normalize_state, normalize_state_with};
