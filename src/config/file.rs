// src/config/file.rs
//! `key=value` config file. Lines starting with `#` and blank lines are
//! skipped; unknown keys and unparseable values are ignored with a warning.
//! A missing file leaves the options untouched.

use std::{fs, io, path::Path};

use super::options::Options;

/// Overlay the file at `path` onto `opts`.
pub fn load_into(path: &Path, opts: &mut Options) -> io::Result<()> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    apply(&text, opts);
    logd!("loaded config from {}", path.display());
    Ok(())
}

pub fn apply(text: &str, opts: &mut Options) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else {
            logw!("config: ignoring line without '=': {}", line);
            continue;
        };
        let (key, val) = (key.trim(), val.trim());
        match key {
            "format" => match val.parse() {
                Ok(f) => opts.format = f,
                Err(e) => logw!("config: {}", e),
            },
            "include_headers" => opts.include_headers = truthy(val),
            "strict" => opts.strict = truthy(val),
            "out" => opts.out = Some(val.into()),
            "log_level" => opts.log_level = val.to_string(),
            "log_file" => opts.log_file = val.into(),
            _ => logw!("config: unknown key '{}'", key),
        }
    }
}

fn truthy(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}

/// Render `opts` in the same format.
pub fn render(opts: &Options) -> String {
    let mut s = String::new();
    let format = match opts.format {
        super::OutputFormat::Csv => "csv",
        super::OutputFormat::Tsv => "tsv",
        super::OutputFormat::Json => "json",
    };
    s.push_str(&format!("format={}\n", format));
    s.push_str(&format!("include_headers={}\n", if opts.include_headers { 1 } else { 0 }));
    s.push_str(&format!("strict={}\n", if opts.strict { 1 } else { 0 }));
    if let Some(out) = &opts.out {
        s.push_str(&format!("out={}\n", out.display()));
    }
    s.push_str(&format!("log_level={}\n", opts.log_level));
    s.push_str(&format!("log_file={}\n", opts.log_file.display()));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn overlays_known_keys() {
        let mut o = Options::default();
        apply("# comment\n\nformat = csv\nstrict=true\nbogus=1\nnoequals\nout=records.csv\n", &mut o);
        assert_eq!(o.format, OutputFormat::Csv);
        assert!(o.strict);
        assert!(!o.include_headers);
        assert_eq!(o.out.as_deref(), Some(Path::new("records.csv")));
    }

    #[test]
    fn bad_value_keeps_previous() {
        let mut o = Options::default();
        apply("format=xml", &mut o);
        assert_eq!(o.format, OutputFormat::Tsv);
    }

    #[test]
    fn render_then_apply_is_stable() {
        let mut o = Options::default();
        o.format = OutputFormat::Json;
        o.include_headers = true;
        let mut back = Options::default();
        apply(&render(&o), &mut back);
        assert_eq!(back, o);
    }

    #[test]
    fn missing_file_is_fine() {
        let mut o = Options::default();
        load_into(Path::new("/definitely/not/here.cfg"), &mut o).unwrap();
        assert_eq!(o, Options::default());
    }
}
