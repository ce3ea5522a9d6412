// src/store.rs
//! Storage seam. Readers produce [`AnyRecord`]s; a [`RecordSink`] persists
//! them. Provided sinks keep records in memory or write CSV/TSV/JSON lines.

use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};

use serde::Serialize;

use crate::csv::{self, Delim};
use crate::records::{AnyRecord, Record};

pub trait RecordSink {
    fn put(&mut self, record: AnyRecord) -> io::Result<()>;

    fn put_all<I>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = AnyRecord>,
        Self: Sized,
    {
        for r in records {
            self.put(r)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records grouped by table, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: BTreeMap<&'static str, Vec<AnyRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, name: &str) -> &[AnyRecord] {
        self.tables.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables.keys().copied()
    }
}

impl RecordSink for MemorySink {
    fn put(&mut self, record: AnyRecord) -> io::Result<()> {
        self.tables.entry(record.table()).or_default().push(record);
        Ok(())
    }
}

/// CSV/TSV rows prefixed by the table name, so one stream can carry several
/// tables. With `include_headers`, each table's header line is written once,
/// before its first row.
pub struct DelimitedSink<W: Write> {
    out: W,
    delim: Delim,
    include_headers: bool,
    seen: HashSet<&'static str>,
}

impl<W: Write> DelimitedSink<W> {
    pub fn new(out: W, delim: Delim, include_headers: bool) -> Self {
        Self { out, delim, include_headers, seen: HashSet::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for DelimitedSink<W> {
    fn put(&mut self, record: AnyRecord) -> io::Result<()> {
        let table = record.table();
        if self.include_headers && self.seen.insert(table) {
            let mut header = vec![s!("table")];
            header.extend(record.headers().iter().map(|h| s!(*h)));
            csv::write_row(&mut self.out, &header, self.delim)?;
        }
        let mut row = vec![s!(table)];
        row.extend(record.to_row());
        csv::write_row(&mut self.out, &row, self.delim)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// One JSON object per line: `{"table":"injuries","record":{...}}`.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Serialize)]
struct Line<'a> {
    table: &'static str,
    record: &'a AnyRecord,
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn put(&mut self, record: AnyRecord) -> io::Result<()> {
        let line = Line { table: record.table(), record: &record };
        serde_json::to_writer(&mut self.out, &line)?;
        writeln!(self.out)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{StadiumMember, InjuryReason};
    use crate::vocab::InjuryType;

    fn member(stadium: &str) -> AnyRecord {
        StadiumMember { stadium: s!(stadium), team: s!("/teams/nwe/2012.htm") }.into()
    }

    fn reason() -> AnyRecord {
        InjuryReason { player: s!("/p"), team: s!("/t"), week: 3, reason: InjuryType::Knee }.into()
    }

    #[test]
    fn memory_groups_by_table() {
        let mut sink = MemorySink::new();
        sink.put_all([member("/s1"), reason(), member("/s2")]).unwrap();
        assert_eq!(sink.len(), 3);
        assert_eq!(sink.table("stadium_members").len(), 2);
        assert_eq!(sink.tables().collect::<Vec<_>>(), vec!["injury_reasons", "stadium_members"]);
        assert!(sink.table("nope").is_empty());
    }

    #[test]
    fn delimited_writes_headers_once_per_table() {
        let mut sink = DelimitedSink::new(Vec::new(), Delim::Csv, true);
        sink.put_all([member("/s1"), reason(), member("/s2")]).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "table,stadium,team\n\
             stadium_members,/s1,/teams/nwe/2012.htm\n\
             table,player,team,week,reason\n\
             injury_reasons,/p,/t,3,KNEE\n\
             stadium_members,/s2,/teams/nwe/2012.htm\n"
        );
    }

    #[test]
    fn json_lines_keep_field_order() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.put(reason()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text,
            "{\"table\":\"injury_reasons\",\"record\":{\"player\":\"/p\",\"team\":\"/t\",\"week\":3,\"reason\":\"KNEE\"}}\n"
        );
    }
}
