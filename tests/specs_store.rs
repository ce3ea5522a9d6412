// tests/specs_store.rs
//
// Page readers feeding the record sinks.
//
use nfldata::csv::Delim;
use nfldata::records::{AnyRecord, Record};
use nfldata::specs::{coaches, injuries, players, stadiums};
use nfldata::store::{DelimitedSink, JsonLinesSink, MemorySink, RecordSink};
use nfldata::SpecError;

const TEAM: &str = "/teams/nwe/2012.htm";

fn injury_records(td: &str, player: &str) -> Result<Vec<AnyRecord>, SpecError> {
    let cell = injuries::Cell::from_html(td);
    let (injury, reasons) = injuries::read_cell(player, TEAM, &cell)?;
    let mut out = vec![AnyRecord::from(injury)];
    out.extend(reasons.into_iter().map(AnyRecord::from));
    Ok(out)
}

#[test]
fn injury_cells_into_memory() {
    let mut sink = MemorySink::new();
    let rows = [
        r#"<td class="dnp" data-stat="week_5" data-tip="Out: Hamstring, Ankle">O</td>"#,
        r#"<td data-stat="week_6" data-tip="Questionable: Left Hamstring">Q</td>"#,
    ];
    for td in rows {
        sink.put_all(injury_records(td, "/players/E/EdelJu00.htm").unwrap()).unwrap();
    }
    assert_eq!(sink.table("injuries").len(), 2);
    assert_eq!(sink.table("injury_reasons").len(), 3);
    assert_eq!(sink.table("injuries")[0].to_row()[4], "OUT");
    assert_eq!(sink.table("injuries")[1].to_row()[5], "PLAYED");
}

#[test]
fn malformed_cells() {
    let td = r#"<td data-stat="week_5" data-tip="Out">O</td>"#;
    assert_eq!(injury_records(td, "/p").unwrap_err(), SpecError::MalformedTip("Out".into()));
    let td = r#"<td data-stat="wk5" data-tip="Out: Knee">O</td>"#;
    assert_eq!(injury_records(td, "/p").unwrap_err(), SpecError::BadWeek("wk5".into()));
}

#[test]
fn staff_into_csv() {
    let cells = coaches::StaffCells {
        head_coach: "/coaches/BeliBi0.htm".into(),
        offensive_coordinator: "/coaches/McDaJo0.htm".into(),
        defensive_coordinator: String::new(),
        assistants: concat!(
            "<p><b>Other Notable Asst.:</b> ",
            "<a href='/coaches/ScarDa0.htm'>Dante Scarnecchia</a> (Offensive Line), ",
            "<a href='/coaches/PatrMa0.htm'>Matt Patricia</a> (Defensive Coordinator)</p>"
        )
        .into(),
    };
    let staff = coaches::read_staff(TEAM, &cells).unwrap();
    let mut sink = DelimitedSink::new(Vec::new(), Delim::Csv, false);
    sink.put_all(staff.into_iter().map(AnyRecord::from)).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(
        text,
        "coaching_staff_members,/coaches/BeliBi0.htm,/teams/nwe/2012.htm,HEAD_COACH\n\
         coaching_staff_members,/coaches/McDaJo0.htm,/teams/nwe/2012.htm,OFFENSIVE_COORDINATOR\n\
         coaching_staff_members,/coaches/ScarDa0.htm,/teams/nwe/2012.htm,OFFENSIVE_LINE\n\
         coaching_staff_members,/coaches/PatrMa0.htm,/teams/nwe/2012.htm,DEFENSIVE_COORDINATOR\n"
    );
}

#[test]
fn profile_and_stadium_as_json_lines() {
    let cells = players::ProfileCells {
        name: "Julian Edelman".into(),
        all_pros: String::new(),
        pro_bowls: String::new(),
        career_av: "60 Weighted Career AV".into(),
        positions: vec!["qb".into(), "WR/PR".into()],
    };
    let (player, positions) = players::read_profile("/players/E/EdelJu00.htm", &cells).unwrap();
    assert_eq!((player.pro_bowls, player.career_approx_value), (0, 60));
    assert_eq!(positions.len(), 3);

    let (stadium, member) = stadiums::read_stadium(
        "/stadiums/BOS00.htm",
        TEAM,
        "Gillette Stadium History",
        "1 Patriot Place, Foxborough, MA 02035",
    )
    .unwrap()
    .unwrap();

    let mut sink = JsonLinesSink::new(Vec::new());
    sink.put(stadium.into()).unwrap();
    sink.put(member.into()).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines[0]["table"], "stadiums");
    assert_eq!(lines[0]["record"]["city"], "foxboro");
    assert_eq!(lines[0]["record"]["state"], "MA");
    assert_eq!(lines[1]["record"]["team"], TEAM);
}
