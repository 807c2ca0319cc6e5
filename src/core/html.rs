// src/core/html.rs
//
// Tolerant, case-insensitive tag scanning. No DOM: callers locate blocks by
// tag name (and optionally an `id` attribute) and slice the source text.
// All offsets are byte offsets into the original markup; the lowercase copy
// keeps the same length because only ASCII is folded.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Drop comment delimiters so commented-out markup becomes live markup.
pub fn strip_comment_markers(doc: &str) -> String {
    doc.replace("<!--", "").replace("-->", "")
}

/// Markup plus its lowercase shadow, scanned together.
pub struct Markup<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> Markup<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: to_lower(src) }
    }

    pub fn as_str(&self) -> &'a str { self.src }
    pub fn len(&self) -> usize { self.src.len() }
    pub fn is_empty(&self) -> bool { self.src.is_empty() }

    /// Start of the next `<name` open tag in `from..to`. The name must be
    /// followed by whitespace, `>` or `/`, so `<th` never matches `<thead`.
    pub fn find_open(&self, name: &str, from: usize, to: usize) -> Option<usize> {
        let pat = format!("<{}", to_lower(name));
        let hay = self.lc.get(from..to)?;
        let mut pos = 0usize;
        while let Some(rel) = hay[pos..].find(&pat) {
            let at = pos + rel;
            let after = at + pat.len();
            match hay.as_bytes().get(after) {
                Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {
                    return Some(from + at);
                }
                _ => pos = after,
            }
        }
        None
    }

    /// `(start, end)` of the next `<name …>…</name>` block in `from..to`,
    /// `end` just past the closing tag. No nesting of the same tag.
    pub fn next_block(&self, name: &str, from: usize, to: usize) -> Option<(usize, usize)> {
        let start = self.find_open(name, from, to)?;
        self.block_from(name, start, to)
    }

    fn block_from(&self, name: &str, start: usize, to: usize) -> Option<(usize, usize)> {
        let open_end = open_tag_end(self.lc.get(..to)?, start)?;
        let close = format!("</{}>", to_lower(name));
        let end_rel = self.lc.get(open_end..to)?.find(&close)?;
        Some((start, open_end + end_rel + close.len()))
    }

    /// First `<name>` block whose `id` attribute equals `id` (case-sensitive).
    pub fn find_block_by_id(&self, name: &str, id: &str) -> Option<(usize, usize)> {
        let mut pos = 0usize;
        while let Some(start) = self.find_open(name, pos, self.len()) {
            let open_end = open_tag_end(self.src, start)?;
            let open_tag = &self.src[start..open_end];
            if attr_value(open_tag, "id").as_deref() == Some(id) {
                return self.block_from(name, start, self.len());
            }
            pos = open_end;
        }
        None
    }

    /// Next `<th>` or `<td>` block in `from..to`, whichever opens first.
    pub fn next_cell(&self, from: usize, to: usize) -> Option<(usize, usize)> {
        let th = self.find_open("th", from, to);
        let td = self.find_open("td", from, to);
        let (start, name) = match (th, td) {
            (Some(a), Some(b)) if a < b => (a, "th"),
            (Some(_), Some(b)) => (b, "td"),
            (Some(a), None) => (a, "th"),
            (None, Some(b)) => (b, "td"),
            (None, None) => return None,
        };
        self.block_from(name, start, to)
    }

    /// Every `<th>`/`<td>` cell text of the block in `from..to`, in document order.
    pub fn cell_texts(&self, from: usize, to: usize) -> Vec<String> {
        let mut out = Vec::new();
        let mut pos = from;
        while let Some((s, e)) = self.next_cell(pos, to) {
            out.push(cell_text(&self.src[s..e]));
            pos = e;
        }
        out
    }
}

/// Offset just past the `>` closing the open tag that starts at `start`.
/// A quoted attribute value may itself contain `<` and `>`.
pub fn open_tag_end(s: &str, start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    // last non-space byte seen outside quotes
    let mut prev = 0u8;
    for (i, &b) in s.as_bytes().iter().enumerate().skip(start) {
        if let Some(q) = quote {
            if b == q {
                quote = None;
                prev = b;
            }
            continue;
        }
        match b {
            b'>' => return Some(i + 1),
            b'"' | b'\'' if prev == b'=' => quote = Some(b),
            _ if b.is_ascii_whitespace() => {}
            _ => prev = b,
        }
    }
    None
}

/// Value of attribute `name` in an open tag. Handles `"…"`, `'…'` and bare values.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(open_tag);
    let pat = format!("{}=", to_lower(name));
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&pat) {
        let at = pos + rel;
        pos = at + pat.len();
        // Must start a fresh attribute: `data-id=` is not `id=`
        let prev = lc[..at].chars().next_back();
        if !prev.is_some_and(|c| c.is_ascii_whitespace()) {
            continue;
        }
        let rest = &open_tag[pos..];
        let value = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let inner = &rest[1..];
                &inner[..inner.find(q)?]
            }
            _ => {
                let stop = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                &rest[..stop]
            }
        };
        return Some(s!(value));
    }
    None
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = open_tag_end(block, 0) {
        if let Some(cs) = block.rfind('<') {
            if cs >= oe {
                return block[oe..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    let mut quote: Option<char> = None;
    let mut prev = ' ';

    for ch in s.chars() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
                prev = ch;
            }
            continue;
        }
        match ch {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => in_tag = false,
            '"' | '\'' if in_tag && prev == '=' => quote = Some(ch),
            _ if !in_tag => out.push(ch),
            _ => {}
        }
        if in_tag && !ch.is_whitespace() {
            prev = ch;
        }
    }
    normalize_ws(&out)
}

/// Visible text of one cell block: tags stripped, entities decoded, spaces collapsed.
pub fn cell_text(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner_after_open_tag(block))))
}
