// src/config/consts.rs

// Injury report cells
pub const DNP_CLASS: &str = "dnp";
pub const WEEK_PREFIX: &str = "week_";
pub const INJURY_REPORTS_FIRST_SEASON: u32 = 2009;

// Coaching staff paragraph
pub const ASSISTANTS_MARKER: &str = "Other Notable Asst";

// Stadium pages
pub const STADIUM_TITLE_SUFFIX: &str = " History";

// Local files
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_CONFIG_FILE: &str = "nfldata.cfg";
pub const DEFAULT_LOG_LEVEL: &str = "info";
