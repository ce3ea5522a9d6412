// src/cli.rs
use std::{
    env,
    fs::{self, File},
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
};

use crate::address::parse_address;
use crate::classify::{
    InjuryEngine, classify_injury_reasons, classify_injury_status, classify_position, classify_positions,
    normalize_state, outcome_from_class_attr,
};
use crate::config::{self, Domain, Options, Page, Task};
use crate::csv::{self, Delim};
use crate::error::{ClassifyError, CliError};
use crate::records::AnyRecord;
use crate::specs::{coaches, injuries, players, stadiums};
use crate::store::{DelimitedSink, JsonLinesSink, RecordSink};
use crate::vocab::Vocabulary;

pub fn run() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = load_options(&args)?;

    match crate::log::init_file(&opts.log_file, &opts.log_level) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Could not open log file {}: {e}", opts.log_file.display());
            crate::log::init_stderr(&opts.log_level);
        }
    }

    let stdin = io::stdin();
    execute(&opts, stdin.lock(), io::stdout().lock())
}

/// Defaults, then the config file, then command line arguments.
pub fn load_options(args: &[String]) -> Result<Options, CliError> {
    let mut opts = Options::default();
    if let Some(i) = args.iter().position(|a| a == "--config") {
        let v = args.get(i + 1).ok_or("Missing value for --config")?;
        opts.config = PathBuf::from(v);
    }
    config::file::load_into(&opts.config.clone(), &mut opts)?;
    parse_args(args, &mut opts)?;
    Ok(opts)
}

pub fn parse_args(args: &[String], opts: &mut Options) -> Result<(), CliError> {
    let mut args = args.iter();
    let mut positional = Vec::new();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => opts.input = Some(PathBuf::from(args.next().ok_or("Missing input path")?)),
            "-o" | "--out" => opts.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = v.parse()?;
            }
            "--include-headers" => opts.include_headers = true,
            "--strict" => opts.strict = true,
            "--config" => {
                // already applied by load_options
                args.next().ok_or("Missing value for --config")?;
            }
            "--log-level" => opts.log_level = args.next().ok_or("Missing value for --log-level")?.clone(),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            s if s.starts_with('-') && s.len() > 1 => return Err(format!("Unknown arg: {}", a).into()),
            _ => positional.push(a.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let Some(command) = positional.next() else {
        return Err("Missing command (classify or ingest); see --help".into());
    };
    opts.task = Some(match command.as_str() {
        "classify" => {
            let domain: Domain = positional.next().ok_or("Missing domain for classify")?.parse()?;
            opts.labels = positional.by_ref().collect();
            Task::Classify(domain)
        }
        "ingest" => {
            let page: Page = positional.next().ok_or("Missing page for ingest")?.parse()?;
            if let Some(extra) = positional.next() {
                return Err(format!("Unexpected argument: {}", extra).into());
            }
            Task::Ingest(page)
        }
        other => return Err(format!("Unknown command: {}", other).into()),
    });
    Ok(())
}

/// Run the task in `opts`, reading from `stdin` unless an input file or
/// labels were given, and writing to `stdout` unless `--out` was given.
pub fn execute<R: BufRead, W: Write>(opts: &Options, stdin: R, mut stdout: W) -> Result<(), CliError> {
    match &opts.out {
        Some(p) => dispatch(opts, stdin, BufWriter::new(File::create(p)?)),
        None => dispatch(opts, stdin, &mut stdout),
    }
}

fn dispatch<R: BufRead, W: Write>(opts: &Options, stdin: R, out: W) -> Result<(), CliError> {
    match opts.task.as_ref().ok_or("No task given")? {
        Task::Classify(domain) => {
            let labels = if opts.input.is_none() && !opts.labels.is_empty() {
                opts.labels.clone()
            } else {
                read_input(opts, stdin)?.lines().filter(|l| !l.trim().is_empty()).map(String::from).collect()
            };
            classify_labels(*domain, &labels, opts, out)
        }
        Task::Ingest(page) => {
            let text = read_input(opts, stdin)?;
            match opts.format.delim() {
                Some(d) => ingest(*page, &text, opts, DelimitedSink::new(out, d, opts.include_headers)),
                None => ingest(*page, &text, opts, JsonLinesSink::new(out)),
            }
        }
    }
}

fn read_input<R: BufRead>(opts: &Options, mut stdin: R) -> Result<String, CliError> {
    match &opts.input {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut s = String::new();
            stdin.read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

/* ---------------- classify ---------------- */

/// Codes for one label, by symbolic name. Addresses give `city;STATE`.
pub fn classify_one(domain: Domain, label: &str) -> Result<Vec<String>, ClassifyError> {
    fn names<V: Vocabulary>(v: impl IntoIterator<Item = V>) -> Vec<String> {
        v.into_iter().map(|c| s!(c.name())).collect()
    }

    Ok(match domain {
        Domain::Coaching => names([classify_position(label)?]),
        Domain::Status => names([classify_injury_status(label)?]),
        Domain::Reasons => match label.split_once(':') {
            Some((status, reasons)) => names(classify_injury_reasons(classify_injury_status(status)?, reasons)?),
            None => names(InjuryEngine::standard().classify(label)?),
        },
        Domain::Outcome => names([outcome_from_class_attr(label)]),
        Domain::Positions => names(classify_positions([label])?),
        Domain::State => names([normalize_state(label)?]),
        Domain::Address => {
            let a = parse_address(label)?;
            vec![a.city.unwrap_or_default(), a.state.map(|s| s!(s.name())).unwrap_or_default()]
        }
    })
}

fn classify_labels<W: Write>(domain: Domain, labels: &[String], opts: &Options, mut out: W) -> Result<(), CliError> {
    let delim = opts.format.delim();
    if let (Some(d), true) = (delim, opts.include_headers) {
        csv::write_row(&mut out, &["label", "codes"], d)?;
    }

    let (mut ok, mut skipped) = (0usize, 0usize);
    for label in labels {
        let codes = match classify_one(domain, label) {
            Ok(c) => c,
            Err(e) if opts.strict => return Err(e.into()),
            Err(e) => {
                logw!("skipping '{}': {}", label, e);
                skipped += 1;
                continue;
            }
        };
        match delim {
            Some(d) => {
                let joined = codes.join(";");
                csv::write_row(&mut out, &[label.as_str(), joined.as_str()], d)?
            }
            None => {
                serde_json::to_writer(&mut out, &serde_json::json!({ "label": label, "codes": codes }))
                    .map_err(io::Error::from)?;
                writeln!(out)?;
            }
        }
        ok += 1;
    }
    out.flush()?;
    logf!("classified {} {} labels ({} skipped)", ok, domain.name(), skipped);
    Ok(())
}

/* ---------------- ingest ---------------- */

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(String::as_str).unwrap_or("")
}

/// Records for one TSV row of raw page values. Column layouts are listed in
/// `cli_help.txt`.
pub fn read_row(page: Page, row: &[String]) -> Result<Vec<AnyRecord>, CliError> {
    let mut out: Vec<AnyRecord> = Vec::new();
    match page {
        Page::Injuries => {
            let c = injuries::Cell {
                stat: s!(cell(row, 2)),
                class: s!(cell(row, 3)),
                tip: s!(cell(row, 4)),
                text: s!(if row.len() > 5 { cell(row, 5) } else { cell(row, 4) }),
            };
            if !c.is_reportable() {
                return Ok(out);
            }
            let (injury, reasons) = injuries::read_cell(cell(row, 0), cell(row, 1), &c)?;
            out.push(injury.into());
            out.extend(reasons.into_iter().map(AnyRecord::from));
        }
        Page::Coaches => {
            let cells = coaches::StaffCells {
                head_coach: s!(cell(row, 1)),
                offensive_coordinator: s!(cell(row, 2)),
                defensive_coordinator: s!(cell(row, 3)),
                assistants: s!(cell(row, 4)),
            };
            let staff = coaches::read_staff(cell(row, 0), &cells)?;
            out.extend(coaches::coach_links(&cells.assistants).into_iter().map(AnyRecord::from));
            out.extend(staff.into_iter().map(AnyRecord::from));
        }
        Page::Players => {
            let cells = players::ProfileCells {
                name: s!(cell(row, 1)),
                all_pros: s!(cell(row, 2)),
                pro_bowls: s!(cell(row, 3)),
                career_av: s!(cell(row, 4)),
                positions: row.iter().skip(5).cloned().collect(),
            };
            let (player, positions) = players::read_profile(cell(row, 0), &cells)?;
            out.push(player.into());
            out.extend(positions.into_iter().map(AnyRecord::from));
        }
        Page::Stadiums => {
            if let Some((stadium, member)) = stadiums::read_stadium(cell(row, 0), cell(row, 1), cell(row, 2), cell(row, 3))? {
                out.push(stadium.into());
                out.push(member.into());
            }
        }
    }
    Ok(out)
}

fn ingest<S: RecordSink>(page: Page, text: &str, opts: &Options, mut sink: S) -> Result<(), CliError> {
    let (mut rows, mut records, mut skipped) = (0usize, 0usize, 0usize);
    for row in csv::parse_rows(text, Delim::Tsv) {
        if cell(&row, 0).starts_with('#') {
            continue;
        }
        rows += 1;
        match read_row(page, &row) {
            Ok(rs) => {
                records += rs.len();
                for r in rs {
                    sink.put(r)?;
                }
            }
            Err(e) if opts.strict => return Err(e),
            Err(e) => {
                logw!("skipping row {}: {}", rows, e);
                skipped += 1;
            }
        }
    }
    sink.flush()?;
    logf!("ingested {} rows into {} records ({} skipped)", rows, records, skipped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn opts(s: &str) -> Options {
        let mut o = Options::default();
        parse_args(&args(s), &mut o).unwrap();
        o
    }

    fn run_to_string(o: &Options, stdin: &str) -> String {
        let mut buf = Vec::new();
        execute(o, stdin.as_bytes(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn parses_classify() {
        let o = opts("classify coaching --format csv QB WR --strict");
        assert_eq!(o.task, Some(Task::Classify(Domain::Coaching)));
        assert_eq!(o.labels, vec!["QB", "WR"]);
        assert_eq!(o.format, OutputFormat::Csv);
        assert!(o.strict);
    }

    #[test]
    fn parses_ingest() {
        let o = opts("ingest stadiums --input cells.tsv --include-headers");
        assert_eq!(o.task, Some(Task::Ingest(Page::Stadiums)));
        assert_eq!(o.input, Some(PathBuf::from("cells.tsv")));
        assert!(o.include_headers);
    }

    #[test]
    fn usage_errors() {
        let mut o = Options::default();
        assert!(matches!(parse_args(&args(""), &mut o), Err(CliError::Usage(_))));
        assert!(parse_args(&args("classify nope"), &mut o).is_err());
        assert!(parse_args(&args("ingest players extra"), &mut o).is_err());
        assert!(parse_args(&args("classify state --format"), &mut o).is_err());
        assert!(parse_args(&args("classify state --bogus"), &mut o).is_err());
    }

    #[test]
    fn classify_args_tsv() {
        let o = opts("classify reasons Out:Knee,Ankle Groin");
        assert_eq!(run_to_string(&o, ""), "Out:Knee,Ankle\tKNEE;ANKLE\nGroin\tGROIN\n");
    }

    #[test]
    fn classify_stdin_skips_failures() {
        let o = opts("classify state");
        assert_eq!(run_to_string(&o, "ma\n\nOntario\nwashington dc\n"), "ma\tMA\nwashington dc\tDC\n");
    }

    #[test]
    fn classify_strict_aborts() {
        let o = opts("classify status --strict");
        let mut buf = Vec::new();
        let err = execute(&o, "Out\nMaybe\n".as_bytes(), &mut buf).unwrap_err();
        assert!(matches!(err, CliError::Classify(ClassifyError::UnrecognizedStatus { .. })));
    }

    #[test]
    fn classify_json() {
        let o = opts("classify positions --format json LB");
        assert_eq!(run_to_string(&o, ""), "{\"codes\":[\"ILB\",\"OLB\"],\"label\":\"LB\"}\n");
    }

    #[test]
    fn ingest_injuries() {
        let o = opts("ingest injuries --format csv");
        let tsv = "# player\tteam\tstat\tclass\ttip\ttext\n\
                   /p/a\t/t/nwe\tweek_5\tdnp\tOut: Knee\tO\n\
                   /p/b\t/t/nwe\tweek_5\t\t\t\n\
                   /p/c\t/t/nwe\tweek_6\t\tOut\tO\n";
        assert_eq!(
            run_to_string(&o, tsv),
            "injuries,/p/a,/t/nwe,5,OUT,DID_NOT_PLAY\ninjury_reasons,/p/a,/t/nwe,5,KNEE\n"
        );
    }

    #[test]
    fn ingest_stadiums_with_headers() {
        let o = opts("ingest stadiums --include-headers");
        let tsv = "/stadiums/BOS00.htm\t/teams/nwe/2012.htm\tGillette Stadium History\t1 Patriot Place, Foxborough, MA 02035\n";
        assert_eq!(
            run_to_string(&o, tsv),
            "table\tstadium\tname\tcity\tstate\n\
             stadiums\t/stadiums/BOS00.htm\tGillette Stadium\tfoxboro\tMA\n\
             table\tstadium\tteam\n\
             stadium_members\t/stadiums/BOS00.htm\t/teams/nwe/2012.htm\n"
        );
    }
}
