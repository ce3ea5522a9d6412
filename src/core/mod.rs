// src/core/mod.rs

pub mod html;
pub mod rules;
pub mod sanitize;
pub mod token;

pub use rules::{Hit, Predicate, Rule, Step};
pub use token::Normalizer;
