// src/tables/address.rs
use std::collections::HashMap;
use std::sync::LazyLock;

/// City spellings (lowercase) rewritten after address parsing.
pub static CITY_NAME_SUBSTITUTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([("foxborough", "foxboro"), ("philadephia", "philadelphia")]));

/// Free-text state fragments the general lookup cannot place, rewritten
/// before lookup. Keys are lowercase and compared case-insensitively.
pub static STATE_TEXT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([("jersey", "new jersey"), ("d.c.", "dc")]));
