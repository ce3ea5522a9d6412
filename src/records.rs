// src/records.rs
//! Canonical records handed to storage. Enumerations are rendered by their
//! symbolic name; links are the site-relative hrefs that identify entities.

use serde::Serialize;

use crate::vocab::{
    CoachingPosition, InjuryOutcome, InjuryStatus, InjuryType, PlayerType, UsState, Vocabulary,
};

/// A row-shaped record destined for one storage table.
pub trait Record: Serialize {
    fn table(&self) -> &'static str;
    fn headers(&self) -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Coach {
    pub coach: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoachingStaffMember {
    pub coach: String,
    pub team: String,
    pub position: CoachingPosition,
}

/// One player's line on one week's injury report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Injury {
    pub player: String,
    pub team: String,
    pub week: u32,
    pub status: InjuryStatus,
    pub outcome: InjuryOutcome,
}

/// One reason behind an [`Injury`]; a report line may have several.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InjuryReason {
    pub player: String,
    pub team: String,
    pub week: u32,
    pub reason: InjuryType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub player: String,
    pub name: String,
    pub first_team_all_pros: u32,
    pub pro_bowls: u32,
    pub career_approx_value: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerPosition {
    pub player: String,
    pub position: PlayerType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stadium {
    pub stadium: String,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<UsState>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StadiumMember {
    pub stadium: String,
    pub team: String,
}

impl Record for Coach {
    fn table(&self) -> &'static str { "coaches" }
    fn headers(&self) -> &'static [&'static str] { &["coach", "name"] }
    fn to_row(&self) -> Vec<String> {
        vec![self.coach.clone(), self.name.clone()]
    }
}

impl Record for CoachingStaffMember {
    fn table(&self) -> &'static str { "coaching_staff_members" }
    fn headers(&self) -> &'static [&'static str] { &["coach", "team", "position"] }
    fn to_row(&self) -> Vec<String> {
        vec![self.coach.clone(), self.team.clone(), s!(self.position.name())]
    }
}

impl Record for Injury {
    fn table(&self) -> &'static str { "injuries" }
    fn headers(&self) -> &'static [&'static str] { &["player", "team", "week", "status", "outcome"] }
    fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.team.clone(),
            self.week.to_string(),
            s!(self.status.name()),
            s!(self.outcome.name()),
        ]
    }
}

impl Record for InjuryReason {
    fn table(&self) -> &'static str { "injury_reasons" }
    fn headers(&self) -> &'static [&'static str] { &["player", "team", "week", "reason"] }
    fn to_row(&self) -> Vec<String> {
        vec![self.player.clone(), self.team.clone(), self.week.to_string(), s!(self.reason.name())]
    }
}

impl Record for Player {
    fn table(&self) -> &'static str { "players" }
    fn headers(&self) -> &'static [&'static str] {
        &["player", "name", "first_team_all_pros", "pro_bowls", "career_approx_value"]
    }
    fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.name.clone(),
            self.first_team_all_pros.to_string(),
            self.pro_bowls.to_string(),
            self.career_approx_value.to_string(),
        ]
    }
}

impl Record for PlayerPosition {
    fn table(&self) -> &'static str { "player_positions" }
    fn headers(&self) -> &'static [&'static str] { &["player", "position"] }
    fn to_row(&self) -> Vec<String> {
        vec![self.player.clone(), s!(self.position.name())]
    }
}

impl Record for Stadium {
    fn table(&self) -> &'static str { "stadiums" }
    fn headers(&self) -> &'static [&'static str] { &["stadium", "name", "city", "state"] }
    fn to_row(&self) -> Vec<String> {
        vec![
            self.stadium.clone(),
            self.name.clone(),
            self.city.clone().unwrap_or_default(),
            self.state.map(|s| s!(s.abbr())).unwrap_or_default(),
        ]
    }
}

impl Record for StadiumMember {
    fn table(&self) -> &'static str { "stadium_members" }
    fn headers(&self) -> &'static [&'static str] { &["stadium", "team"] }
    fn to_row(&self) -> Vec<String> {
        vec![self.stadium.clone(), self.team.clone()]
    }
}

/// Any record a page reader can produce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyRecord {
    Coach(Coach),
    CoachingStaffMember(CoachingStaffMember),
    Injury(Injury),
    InjuryReason(InjuryReason),
    Player(Player),
    PlayerPosition(PlayerPosition),
    Stadium(Stadium),
    StadiumMember(StadiumMember),
}

macro_rules! any_record {
    ($($v:ident),+) => {
        impl AnyRecord {
            fn inner(&self) -> &dyn Row {
                match self { $( AnyRecord::$v(r) => r as &dyn Row ),+ }
            }
        }
        $(
            impl From<$v> for AnyRecord {
                fn from(r: $v) -> Self { AnyRecord::$v(r) }
            }
        )+
    };
}

any_record!(Coach, CoachingStaffMember, Injury, InjuryReason, Player, PlayerPosition, Stadium, StadiumMember);

/// Object-safe view of [`Record`] (which is not, through `Serialize`).
trait Row {
    fn row_table(&self) -> &'static str;
    fn row_headers(&self) -> &'static [&'static str];
    fn row_values(&self) -> Vec<String>;
}

impl<R: Record> Row for R {
    fn row_table(&self) -> &'static str { self.table() }
    fn row_headers(&self) -> &'static [&'static str] { self.headers() }
    fn row_values(&self) -> Vec<String> { self.to_row() }
}

impl Record for AnyRecord {
    fn table(&self) -> &'static str { self.inner().row_table() }
    fn headers(&self) -> &'static [&'static str] { self.inner().row_headers() }
    fn to_row(&self) -> Vec<String> { self.inner().row_values() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_use_symbolic_names() {
        let r = Injury {
            player: s!("/players/B/BradTo00.htm"),
            team: s!("/teams/nwe/2012.htm"),
            week: 5,
            status: InjuryStatus::Questionable,
            outcome: InjuryOutcome::Played,
        };
        assert_eq!(r.to_row(), vec!["/players/B/BradTo00.htm", "/teams/nwe/2012.htm", "5", "QUESTIONABLE", "PLAYED"]);
        assert_eq!(r.headers().len(), r.to_row().len());
    }

    #[test]
    fn any_record_delegates() {
        let r: AnyRecord = Stadium {
            stadium: s!("/stadiums/BOS00.htm"),
            name: s!("Gillette Stadium"),
            city: Some(s!("foxboro")),
            state: Some(UsState::Massachusetts),
        }
        .into();
        assert_eq!(r.table(), "stadiums");
        assert_eq!(r.to_row()[3], "MA");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"stadium":"/stadiums/BOS00.htm","name":"Gillette Stadium","city":"foxboro","state":"MA"}"#);
    }
}
