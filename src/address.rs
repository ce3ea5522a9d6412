// src/address.rs
//! Address canonicalizer: free-text stadium address -> (city, state).
//!
//! Parsing is delegated to an [`AddressParser`] that labels components the
//! way common address parsers do (`road`, `city`, `state`, `postcode`, ...).
//! Only `city` and `state` are used; when a label repeats, the last value
//! wins. The city goes through the spelling table, the state through
//! [`normalize_state`](crate::classify::normalize_state).

use std::collections::HashMap;

use serde::Serialize;

use crate::classify::state::{StateLookup, UsStates, normalize_state_with};
use crate::error::Result;
use crate::tables::CITY_NAME_SUBSTITUTIONS;
use crate::vocab::UsState;

/// One labelled address component, e.g. `("city", "foxborough")`.
pub type Component = (String, String);

pub trait AddressParser {
    fn parse(&self, raw: &str) -> Vec<Component>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub city: Option<String>,
    pub state: Option<UsState>,
}

/// Parser for the US layout the site uses:
/// `"[Address:] <street> [<city>], <state> [<zip>][, USA]"`.
///
/// Values are lowercased. Street and city often share one comma segment
/// (`"1 Patriot Place Foxborough"`); they are split after the last street
/// suffix word.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommaAddressParser;

const STREET_SUFFIXES: &[&str] = &[
    "street", "st", "avenue", "ave", "road", "rd", "boulevard", "blvd", "drive", "dr", "way",
    "place", "pl", "parkway", "pkwy", "lane", "ln", "court", "ct", "circle", "cir", "plaza",
    "highway", "hwy", "terrace", "square", "sq",
];

const COUNTRIES: &[&str] = &["usa", "us", "u.s.a.", "u.s.", "united states", "united states of america"];

fn is_zip(word: &str) -> bool {
    let b = word.as_bytes();
    b.len() >= 5
        && b[..5].iter().all(u8::is_ascii_digit)
        && (b.len() == 5 || (b.len() == 10 && b[5] == b'-' && b[6..].iter().all(u8::is_ascii_digit)))
}

/// `"1 patriot place foxborough"` -> (Some(road), Some(city)).
fn split_street_city(segment: &str) -> (Option<String>, Option<String>) {
    let words: Vec<&str> = segment.split_whitespace().collect();
    if words.is_empty() {
        return (None, None);
    }
    let numbered = words[0].starts_with(|c: char| c.is_ascii_digit());
    if !numbered {
        return (None, Some(words.join(" ")));
    }
    let cut = words
        .iter()
        .rposition(|w| STREET_SUFFIXES.contains(&w.trim_end_matches('.')))
        .map(|i| i + 1)
        .unwrap_or(words.len());
    let road = words[..cut].join(" ");
    let city = (cut < words.len()).then(|| words[cut..].join(" "));
    (Some(road), city)
}

impl AddressParser for CommaAddressParser {
    fn parse(&self, raw: &str) -> Vec<Component> {
        let text = raw.trim();
        let text = match text.get(..8) {
            Some(head) if head.eq_ignore_ascii_case("address:") => &text[8..],
            _ => text,
        };
        let text = text.to_lowercase();

        let mut segments: Vec<&str> = text.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
        let mut out: Vec<Component> = Vec::new();

        if segments.last().is_some_and(|s| COUNTRIES.contains(s)) {
            if let Some(country) = segments.pop() {
                out.push((s!("country"), country.to_string()));
            }
        }
        let Some(last) = segments.pop() else { return out };

        // "<state> [zip]"
        let mut words: Vec<&str> = last.split_whitespace().collect();
        let postcode = words.last().copied().filter(|w| is_zip(w));
        if postcode.is_some() {
            words.pop();
        }
        if segments.is_empty() {
            // no comma at all: trailing word is the state, the rest street/city
            if let Some(state) = words.pop() {
                let (road, city) = split_street_city(&words.join(" "));
                push_opt(&mut out, "road", road);
                push_opt(&mut out, "city", city);
                out.push((s!("state"), state.to_string()));
            }
        } else {
            let head = segments.join(", ");
            let (road, city) = match segments.len() {
                1 => split_street_city(&head),
                _ => {
                    let city = segments.pop().map(str::to_string);
                    (Some(segments.join(", ")), city)
                }
            };
            push_opt(&mut out, "road", road);
            push_opt(&mut out, "city", city);
            if !words.is_empty() {
                out.push((s!("state"), words.join(" ")));
            }
        }
        if let Some(zip) = postcode {
            out.push((s!("postcode"), zip.to_string()));
        }
        out
    }
}

fn push_opt(out: &mut Vec<Component>, label: &str, value: Option<String>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        out.push((label.to_string(), v));
    }
}

/// Canonicalize an address with the built-in parser and state lookup.
pub fn parse_address(raw: &str) -> Result<Address> {
    parse_address_with(&CommaAddressParser, &UsStates, raw)
}

/// Missing city or state components are `None`; an unplaceable state is an error.
pub fn parse_address_with<P, L>(parser: &P, lookup: &L, raw: &str) -> Result<Address>
where
    P: AddressParser + ?Sized,
    L: StateLookup + ?Sized,
{
    let components: HashMap<String, String> = parser.parse(raw).into_iter().collect();

    let city = components.get("city").map(|c| {
        CITY_NAME_SUBSTITUTIONS.get(c.as_str()).map(|s| s.to_string()).unwrap_or_else(|| c.clone())
    });
    let state = components.get("state").map(|s| normalize_state_with(lookup, s)).transpose()?;

    logd!("address '{}' -> city {:?}, state {:?}", raw, city, state);
    Ok(Address { city, state })
}
