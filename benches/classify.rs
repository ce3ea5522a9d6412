// benches/classify.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nfldata::{
    InjuryStatus, classify_injury_reasons, classify_position, classify_positions, normalize_state, parse_address,
};

const TITLES: &[&str] = &[
    "Asst. Head Coach", "QB Coach", "Off. Line Asst.", "Secondary", "Special Teams Asst.",
    "Defensive Quality Control", "Strength and Conditioning", "Tight Ends/QB", "Pro Scout",
    "Outside Linebackers",
];

const REASONS: &[&str] = &["Right Knee, Ankle", "Shoulder Back", "Concussion", "Left Hamstring", "Illness"];

const POSITIONS: &[&str] = &["QB", "DE-LB", "RCB/KR", "re r", "FS", "NT"];

const STATES: &[&str] = &["MA", "Jersey", "Washington D.C.", "36", "wisconsin"];

fn bench_classify(c: &mut Criterion) {
    c.bench_function("coaching_titles", |b| {
        b.iter(|| {
            for t in TITLES {
                black_box(classify_position(black_box(t)).ok());
            }
        })
    });

    c.bench_function("injury_reasons", |b| {
        b.iter(|| {
            for r in REASONS {
                black_box(classify_injury_reasons(InjuryStatus::Out, black_box(r)).ok());
            }
        })
    });

    c.bench_function("player_positions", |b| {
        b.iter(|| black_box(classify_positions(black_box(POSITIONS).iter().copied()).ok()))
    });

    c.bench_function("states_and_addresses", |b| {
        b.iter(|| {
            for s in STATES {
                black_box(normalize_state(black_box(s)).ok());
            }
            black_box(parse_address(black_box("1 Patriot Place, Foxborough, MA 02035")).ok())
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
