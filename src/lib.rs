// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod address;
pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod records;
pub mod specs;
pub mod store;
pub mod tables;
pub mod vocab;

pub use address::{Address, parse_address};
pub use classify::{
    classify_injury_outcome, classify_injury_reasons, classify_injury_status, classify_position,
    classify_positions, normalize_state,
};
pub use error::{ClassifyError, SpecError};
pub use vocab::{CoachingPosition, InjuryOutcome, InjuryStatus, InjuryType, PlayerType, UsState, Vocabulary};
