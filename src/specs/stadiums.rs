// src/specs/stadiums.rs
//! Stadium page: title and the first meta paragraph (the address).

use crate::address::{AddressParser, parse_address_with};
use crate::classify::state::StateLookup;
use crate::config::consts::STADIUM_TITLE_SUFFIX;
use crate::core::html::strip_tags;
use crate::core::sanitize::{normalize_entities, strip_suffix_once};
use crate::error::SpecError;
use crate::records::{Stadium, StadiumMember};

/// `"Gillette Stadium History"` -> `"Gillette Stadium"`.
pub fn stadium_name(title: &str) -> String {
    let title = normalize_entities(&strip_tags(title));
    s!(strip_suffix_once(title.trim(), STADIUM_TITLE_SUFFIX).trim())
}

/// The stadium and the team playing there, or `None` when the page has no
/// address.
pub fn read_stadium(
    stadium: &str,
    team: &str,
    title: &str,
    address: &str,
) -> Result<Option<(Stadium, StadiumMember)>, SpecError> {
    read_stadium_with(&crate::address::CommaAddressParser, &crate::classify::UsStates, stadium, team, title, address)
}

pub fn read_stadium_with<P, L>(
    parser: &P,
    lookup: &L,
    stadium: &str,
    team: &str,
    title: &str,
    address: &str,
) -> Result<Option<(Stadium, StadiumMember)>, SpecError>
where
    P: AddressParser + ?Sized,
    L: StateLookup + ?Sized,
{
    if address.trim().is_empty() {
        logd!("no address for {}", stadium);
        return Ok(None);
    }
    let parsed = parse_address_with(parser, lookup, address)?;
    let record = Stadium {
        stadium: s!(stadium),
        name: stadium_name(title),
        city: parsed.city,
        state: parsed.state,
    };
    let member = StadiumMember { stadium: s!(stadium), team: s!(team) };
    Ok(Some((record, member)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifyError;
    use crate::vocab::UsState;

    const STADIUM: &str = "/stadiums/BOS00.htm";
    const TEAM: &str = "/teams/nwe/2012.htm";

    #[test]
    fn names() {
        assert_eq!(stadium_name("Gillette Stadium History"), "Gillette Stadium");
        assert_eq!(stadium_name("<span>Soldier Field</span>"), "Soldier Field");
        // only the whole suffix is removed
        assert_eq!(stadium_name("Mile High Story"), "Mile High Story");
    }

    #[test]
    fn reads_stadium_and_member() {
        let (s, m) = read_stadium(STADIUM, TEAM, "Gillette Stadium History", "1 Patriot Place, Foxborough, MA 02035")
            .unwrap()
            .unwrap();
        assert_eq!(s.name, "Gillette Stadium");
        assert_eq!(s.city.as_deref(), Some("foxboro"));
        assert_eq!(s.state, Some(UsState::Massachusetts));
        assert_eq!(m, StadiumMember { stadium: s!(STADIUM), team: s!(TEAM) });
    }

    #[test]
    fn blank_address() {
        assert_eq!(read_stadium(STADIUM, TEAM, "X History", "  ").unwrap(), None);
    }

    #[test]
    fn bad_state() {
        let err = read_stadium(STADIUM, TEAM, "X", "Main St, Toronto, Ontario").unwrap_err();
        assert!(matches!(err, SpecError::Classify(ClassifyError::InvalidState { .. })));
    }
}
