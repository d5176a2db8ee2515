//! # Fenced code extraction
//!
//! Fenced regions are lifted out of the document before any other rule runs
//! and replaced by placeholders, so nothing inside a fence can be read as
//! markup. Bodies are escaped only when they are spliced back in.
//!
//! A placeholder is `S<index>S` where `S` is a private-use character that
//! does not occur anywhere in the input document. It never contains a line
//! break, so block segmentation cannot split it.

use std::collections::HashSet;

use super::escape;

/// Fence delimiter knowledge lives here, not in the pipeline.
pub struct CodeFence;

impl CodeFence {
    /// The delimiter opening and closing a fenced region.
    pub const TICKS: &'static str = "```";

    /// Splits a stored body into an optional language tag and displayed code.
    ///
    /// The first line counts as a language tag when it is a single word with
    /// no whitespace and is followed by a line break.
    pub fn split_info(body: &str) -> (Option<&str>, &str) {
        if let Some(nl) = body.find('\n') {
            let first = &body[..nl];
            if !first.is_empty() && !first.chars().any(char::is_whitespace) {
                return (Some(first), &body[nl + 1..]);
            }
        }
        (None, body)
    }
}

/// Ordered table of extracted fence bodies for one render call.
#[derive(Debug)]
pub struct FenceTable {
    bodies: Vec<String>,
    sentinel: char,
}

impl FenceTable {
    /// Extracts every closed fenced region from `doc`.
    ///
    /// Returns the document with each region replaced by a placeholder,
    /// together with the table of verbatim bodies. An opener with no closer
    /// after it is left in place as ordinary text.
    pub fn extract(doc: &str) -> (String, FenceTable) {
        let mut table = FenceTable {
            bodies: Vec::new(),
            sentinel: pick_sentinel(doc),
        };
        let mut out = String::with_capacity(doc.len());
        let mut rest = doc;

        while let Some(open) = rest.find(CodeFence::TICKS) {
            let body_start = open + CodeFence::TICKS.len();
            let Some(close) = rest[body_start..].find(CodeFence::TICKS) else {
                break;
            };
            let body_end = body_start + close;

            out.push_str(&rest[..open]);
            let index = table.bodies.len();
            table.bodies.push(rest[body_start..body_end].to_string());
            out.push_str(&table.placeholder(index));

            rest = &rest[body_end + CodeFence::TICKS.len()..];
        }
        out.push_str(rest);

        (out, table)
    }

    /// Number of extracted regions.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The verbatim body stored at `index`.
    pub fn body(&self, index: usize) -> Option<&str> {
        self.bodies.get(index).map(String::as_str)
    }

    /// The placeholder text standing in for region `index`.
    pub fn placeholder(&self, index: usize) -> String {
        format!("{s}{index}{s}", s = self.sentinel)
    }

    /// Returns the region index if `block` is nothing but one placeholder.
    pub fn sole_placeholder(&self, block: &str) -> Option<usize> {
        let inner = block
            .trim()
            .strip_prefix(self.sentinel)?
            .strip_suffix(self.sentinel)?;
        if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        inner.parse().ok().filter(|&i| i < self.bodies.len())
    }

    /// Appends the `<pre><code>` fragment for region `index`.
    pub fn write_block(&self, index: usize, out: &mut String) {
        let Some(body) = self.body(index) else {
            return;
        };
        let (lang, code) = CodeFence::split_info(body);
        match lang {
            Some(lang) => {
                out.push_str("<pre><code class=\"language-");
                out.push_str(&escape::attribute(lang));
                out.push_str("\">");
            }
            None => out.push_str("<pre><code>"),
        }
        out.push_str(&escape::text(code));
        out.push_str("</code></pre>");
    }

    /// Replaces every placeholder left in `html` with its code fragment.
    pub fn restore(&self, html: &str) -> String {
        if self.bodies.is_empty() {
            return html.to_string();
        }

        let mut out = String::with_capacity(html.len());
        let mut rest = html;
        while let Some(open) = rest.find(self.sentinel) {
            out.push_str(&rest[..open]);
            let after = &rest[open + self.sentinel.len_utf8()..];
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            let index = after[..digits].parse::<usize>().ok();

            match index {
                Some(i) if i < self.bodies.len() && after[digits..].starts_with(self.sentinel) => {
                    self.write_block(i, &mut out);
                    rest = &after[digits + self.sentinel.len_utf8()..];
                }
                _ => {
                    out.push(self.sentinel);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Picks the first private-use character that is absent from `doc`.
fn pick_sentinel(doc: &str) -> char {
    let used: HashSet<char> = doc.chars().filter(|c| is_private_use(*c)).collect();
    ('\u{E000}'..='\u{F8FF}')
        .chain('\u{F0000}'..='\u{FFFFD}')
        .chain('\u{100000}'..='\u{10FFFD}')
        .find(|c| !used.contains(c))
        .unwrap_or('\u{E000}')
}

fn is_private_use(c: char) -> bool {
    matches!(c, '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}')
}
