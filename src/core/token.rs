// src/core/token.rs
//! Token Normalizer: folds a raw scraped label into the key shape used by the
//! substitution tables and vocabularies.
//!
//! Every domain uppercases and trims, but they differ in what else gets
//! folded. Coaching titles keep `-` and `'` because table keys like
//! `ASSISTANT_O-LINE_COACH` and `COACHES'_ASSISTANT` depend on them; injury
//! reasons fold `-` into `_` and drop quotes; position codes keep inner
//! spaces (`RE R` is a real code). Each shape is a [`Normalizer`] preset.
//!
//! Normalization is pure and idempotent: `n.normalize(&n.normalize(s)) == n.normalize(s)`.

/// One token shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Normalizer {
    /// Each run of whitespace becomes this one character.
    pub space: char,
    /// Fold `-` into `_`.
    pub hyphen_to_underscore: bool,
    /// Remove `'` and `"`.
    pub strip_quotes: bool,
    /// Literal rewrites applied, in order, after case folding.
    pub expansions: &'static [(&'static str, &'static str)],
    /// Characters that separate alternates in a multi-valued label.
    pub delimiters: &'static [char],
}

impl Normalizer {
    /// Coaching titles: `"Off. Line Asst"` -> `OFF._LINE_ASSISTANT`, alternates on `/`.
    pub const COACHING: Normalizer = Normalizer {
        space: '_',
        hyphen_to_underscore: false,
        strip_quotes: false,
        expansions: &[("ASST.", "ASSISTANT"), ("ASST", "ASSISTANT")],
        delimiters: &['/'],
    };

    /// Injury reasons: `"Right-Knee"` -> `RIGHT_KNEE`, alternates on `,` and `/`.
    pub const INJURY_REASON: Normalizer = Normalizer {
        space: '_',
        hyphen_to_underscore: true,
        strip_quotes: true,
        expansions: &[],
        delimiters: &[',', '/'],
    };

    /// Injury statuses: `"Injured Reserve"` -> `INJURED_RESERVE`. Never split.
    pub const INJURY_STATUS: Normalizer = Normalizer {
        space: '_',
        hyphen_to_underscore: false,
        strip_quotes: false,
        expansions: &[],
        delimiters: &[],
    };

    /// Player position codes: `"lb"` -> `LB`, alternates on `,`, `/` and `-`.
    pub const POSITION: Normalizer = Normalizer {
        space: ' ',
        hyphen_to_underscore: false,
        strip_quotes: false,
        expansions: &[],
        delimiters: &[',', '/', '-'],
    };

    /// Fold one label. Never fails; characters with no special meaning pass
    /// through uppercased.
    pub fn normalize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut in_space = false;

        for ch in raw.trim().chars() {
            if ch.is_whitespace() {
                if !in_space {
                    out.push(self.space);
                    in_space = true;
                }
                continue;
            }
            in_space = false;
            match ch {
                '-' if self.hyphen_to_underscore => out.push('_'),
                '\'' | '"' if self.strip_quotes => {}
                _ => out.extend(ch.to_uppercase()),
            }
        }

        for (from, to) in self.expansions {
            if out.contains(from) {
                out = out.replace(from, to);
            }
        }
        out
    }

    /// Split a multi-valued label on this shape's delimiters and normalize
    /// each alternate, preserving order. A label with no delimiter yields a
    /// single alternate; an empty label yields one empty alternate.
    pub fn split_multi(&self, raw: &str) -> Vec<String> {
        if self.delimiters.is_empty() {
            return vec![self.normalize(raw)];
        }
        raw.split(self.delimiters).map(|part| self.normalize(part)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coaching_expands_assistant_abbreviations() {
        let n = Normalizer::COACHING;
        assert_eq!(n.normalize("Off. Line Asst."), "OFF._LINE_ASSISTANT");
        assert_eq!(n.normalize("Asst. QB"), "ASSISTANT_QB");
        assert_eq!(n.normalize("asst wr"), "ASSISTANT_WR");
        assert_eq!(n.normalize("Assistant O-Line Coach"), "ASSISTANT_O-LINE_COACH");
        assert_eq!(n.normalize("Coaches' Assistant"), "COACHES'_ASSISTANT");
    }

    #[test]
    fn whitespace_runs_collapse() {
        let n = Normalizer::INJURY_STATUS;
        assert_eq!(n.normalize("  Injured \t Reserve \n"), "INJURED_RESERVE");
    }

    #[test]
    fn injury_reason_shape() {
        let n = Normalizer::INJURY_REASON;
        assert_eq!(n.normalize("Right-Knee"), "RIGHT_KNEE");
        assert_eq!(n.normalize("Coach's Decision"), "COACHS_DECISION");
        assert_eq!(n.normalize("\"Illness\""), "ILLNESS");
    }

    #[test]
    fn position_keeps_inner_space() {
        assert_eq!(Normalizer::POSITION.normalize(" re  r "), "RE R");
    }

    #[test]
    fn split_multi_preserves_order() {
        let n = Normalizer::INJURY_REASON;
        assert_eq!(n.split_multi("Knee, Ankle/hip,Back"), vec!["KNEE", "ANKLE", "HIP", "BACK"]);
        assert_eq!(n.split_multi(""), vec![""]);
        assert_eq!(Normalizer::COACHING.split_multi("QB/WR"), vec!["QB", "WR"]);
        assert_eq!(Normalizer::INJURY_STATUS.split_multi("Out/Doubtful"), vec!["OUT/DOUBTFUL"]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "Off. Line Asst.", "asst", "Right-Knee", "  a  b  ", "Coaches' Assistant",
            "S&C", "ASST.ASST", "é-ß", "", "\"quoted\" - text",
        ];
        for n in [Normalizer::COACHING, Normalizer::INJURY_REASON, Normalizer::INJURY_STATUS, Normalizer::POSITION] {
            for s in samples {
                let once = n.normalize(s);
                assert_eq!(n.normalize(&once), once, "not idempotent for {s:?}");
            }
        }
    }
}
