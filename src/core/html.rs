// src/core/html.rs
//! Tolerant scanning over small HTML fragments. Page readers hand these a
//! single cell or paragraph, never a whole document.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `open .. close` block at or after byte offset `from`, case-insensitive.
/// Returns byte offsets `(start, end)` with `end` just past the close pattern.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Value of `name="..."` (or single-quoted, or bare) inside one opening tag.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let key = format!("{}=", to_lower(name));
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&key) {
        let at = from + rel;
        from = at + key.len();
        // must be a whole attribute name
        let boundary = at == 0 || lc[..at].ends_with(|c: char| c.is_whitespace());
        if !boundary {
            continue;
        }
        let rest = &open_tag[from..];
        let value = match rest.chars().next()? {
            q @ ('"' | '\'') => {
                let body = &rest[1..];
                &body[..body.find(q)?]
            }
            _ => {
                let end = rest.find(|c: char| c.is_whitespace() || c == '>').unwrap_or(rest.len());
                &rest[..end]
            }
        };
        return Some(value.to_string());
    }
    None
}

/// `attr` of every `<tag ...>` in document order.
pub fn attr_values(s: &str, tag: &str, attr: &str) -> Vec<String> {
    let lc = to_lower(s);
    let open = format!("<{}", to_lower(tag));
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&open) {
        let start = pos + rel;
        let after = start + open.len();
        // `<a` must not match `<abbr`
        let named = lc[after..].starts_with(|c: char| c.is_whitespace() || c == '>' || c == '/');
        let Some(end_rel) = s[start..].find('>') else { break };
        let end = start + end_rel + 1;
        if named {
            if let Some(v) = attr_value(&s[start..end], attr) {
                out.push(v);
            }
        }
        pos = end;
    }
    out
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

/// Direct text children of the outermost element in `s`, entity-decoded,
/// blanks dropped. Text inside nested elements is skipped.
pub fn child_text_nodes(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut tag = String::new();
    let mut in_tag = false;
    let mut depth = 0usize;
    for ch in s.chars() {
        match ch {
            '<' if !in_tag => {
                in_tag = true;
                tag.clear();
                push_node(&mut out, &mut cur);
            }
            '>' if in_tag => {
                in_tag = false;
                let t = tag.trim();
                let name = to_lower(t.split(|c: char| c.is_whitespace() || c == '/').find(|n| !n.is_empty()).unwrap_or(""));
                if t.starts_with('/') {
                    depth = depth.saturating_sub(1);
                } else if !(t.starts_with('!') || t.starts_with('?') || t.ends_with('/') || VOID_TAGS.contains(&name.as_str())) {
                    depth += 1;
                }
            }
            _ if in_tag => tag.push(ch),
            _ if depth == 1 => cur.push(ch),
            _ => {}
        }
    }
    push_node(&mut out, &mut cur);
    out
}

fn push_node(out: &mut Vec<String>, cur: &mut String) {
    let text = super::sanitize::normalize_entities(cur);
    if !text.trim().is_empty() {
        out.push(text);
    }
    cur.clear();
}
