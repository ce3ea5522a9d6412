// src/config/options.rs
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::*;
use crate::csv::Delim;

/// What `classify` maps labels onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    Coaching,
    Status,
    Reasons,
    Outcome,
    Positions,
    State,
    Address,
}

impl Domain {
    pub const ALL: &'static [Domain] = &[
        Domain::Coaching, Domain::Status, Domain::Reasons, Domain::Outcome,
        Domain::Positions, Domain::State, Domain::Address,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Coaching => "coaching",
            Domain::Status => "status",
            Domain::Reasons => "reasons",
            Domain::Outcome => "outcome",
            Domain::Positions => "positions",
            Domain::State => "state",
            Domain::Address => "address",
        }
    }
}

impl FromStr for Domain {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown domain: {}", s))
    }
}

/// Which page's cells `ingest` reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Injuries,
    Coaches,
    Players,
    Stadiums,
}

impl FromStr for Page {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "injuries" => Ok(Page::Injuries),
            "coaches" => Ok(Page::Coaches),
            "players" => Ok(Page::Players),
            "stadiums" => Ok(Page::Stadiums),
            other => Err(format!("Unknown page: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// Delimiter for the row formats; `None` for JSON.
    pub fn delim(self) -> Option<Delim> {
        match self {
            OutputFormat::Csv => Some(Delim::Csv),
            OutputFormat::Tsv => Some(Delim::Tsv),
            OutputFormat::Json => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    Classify(Domain),
    Ingest(Page),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub task: Option<Task>,
    /// Labels given on the command line (classify only).
    pub labels: Vec<String>,
    pub format: OutputFormat,
    pub include_headers: bool,
    /// Abort on the first unrecognized label instead of logging and skipping it.
    pub strict: bool,
    pub input: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub config: PathBuf,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            task: None,
            labels: Vec::new(),
            format: OutputFormat::Tsv,
            include_headers: false,
            strict: false,
            input: None,
            out: None,
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            log_level: s!(DEFAULT_LOG_LEVEL),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
