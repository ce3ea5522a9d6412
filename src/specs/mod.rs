// src/specs/mod.rs
//! # Page-cell readers
//!
//! Each reader takes the raw values one page exposes (attribute strings, text
//! nodes, small HTML fragments) and turns them into canonical
//! [`records`](crate::records). Readers know **where** the ground truth sits on
//! a page and which engine in [`classify`](crate::classify) decodes it; they
//! do not fetch, cache or store anything.
//!
//! ## Current readers
//! - `injuries`: one weekly cell of a team's injury report: `data-stat`,
//!   `class` and `data-tip` -> `Injury` + `InjuryReason`s.
//! - `coaches`: head coach, coordinators and the "Other Notable Asst."
//!   paragraph of a team season page -> `CoachingStaffMember`s.
//! - `players`: profile header counts and per-season `pos` cells ->
//!   `Player` + `PlayerPosition`s.
//! - `stadiums`: stadium page title and address line -> `Stadium` +
//!   `StadiumMember`.
//!
//! ## Conventions
//! - Inputs are plain `&str` slices so readers stay testable offline against
//!   captured fragments.
//! - A classification failure is returned, never papered over; the caller
//!   decides between skipping and aborting.
//! - Links are kept exactly as the site wrote them (site-relative hrefs).
pub mod coaches;
pub mod injuries;
pub mod players;
pub mod stadiums;
