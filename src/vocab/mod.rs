// src/vocab/mod.rs
//! # Vocabularies
//!
//! The closed sets of canonical codes that every classification engine
//! resolves into. Each vocabulary is a fieldless enum declared through
//! [`vocabulary!`](crate::vocabulary); its identity is the symbolic name
//! (e.g. `HEAD_COACH`), which is also what storage persists.
//!
//! Vocabularies are never extended at runtime. `Vocabulary::ALL` lists the
//! members in declaration order.

pub mod coaching;
pub mod injury;
pub mod player;
pub mod state;

pub use coaching::CoachingPosition;
pub use injury::{InjuryOutcome, InjuryStatus, InjuryType};
pub use player::PlayerType;
pub use state::UsState;

use std::fmt::Debug;
use std::hash::Hash;

/// A closed enumeration of canonical codes identified by symbolic name.
pub trait Vocabulary: Copy + Eq + Hash + Ord + Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];
    /// Type name used in error messages.
    const KIND: &'static str;

    /// Symbolic name, e.g. `"QUARTERBACKS"`.
    fn name(self) -> &'static str;

    /// Exact, case-sensitive lookup by symbolic name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }

    /// Same as [`from_name`](Self::from_name) but yields a one-element
    /// slice borrowed from `ALL`, so resolvers can treat single and
    /// multi-valued hits uniformly.
    fn slice_by_name(name: &str) -> Option<&'static [Self]> {
        let all = Self::ALL;
        all.iter().position(|v| v.name() == name).map(|i| &all[i..=i])
    }
}
