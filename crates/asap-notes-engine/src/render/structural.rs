//! # Structural blocks
//!
//! Headings, blockquotes, table rows, task items and list items. A block is
//! structural when its first non-blank text opens one of these; every line
//! of it is then dispatched on its leading characters.
//!
//! Line precedence, tried in order:
//!
//! 1. heading (`#` × 1–6 then a space, counted exactly so `######` is level 6)
//! 2. blockquote (`> `)
//! 3. table row (leading `|`)
//! 4. task item (`- [ ] `, `- [x] `, `- [X] `)
//! 5. list item (`- `, `* `, `+ `, or digits then `. `)
//! 6. anything else: inline text

use super::{RenderOptions, inline::render_inline};

/// Structural marker knowledge.
pub struct Marker;

impl Marker {
    pub const HEADING: u8 = b'#';
    pub const MAX_HEADING_LEVEL: usize = 6;
    pub const QUOTE: &'static str = "> ";
    pub const PIPE: char = '|';
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "+ "];
    pub const TASK_OPEN: &'static str = "- [";
    pub const TASK_CLOSE: &'static str = "] ";

    /// Heading level and text when `line` opens with 1–6 `#` and a space.
    pub fn heading(line: &str) -> Option<(usize, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::HEADING).count();
        if !(1..=Self::MAX_HEADING_LEVEL).contains(&level) {
            return None;
        }
        line[level..].strip_prefix(' ').map(|text| (level, text))
    }

    /// Length of a `digits. ` ordinal marker at the start of `line`.
    pub fn ordinal(line: &str) -> Option<usize> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || !line[digits..].starts_with(". ") {
            return None;
        }
        Some(digits + 2)
    }

    /// Whether `block` begins, after leading whitespace, with a structural marker.
    pub fn opens_structural(block: &str) -> bool {
        let t = block.trim_start();
        Self::heading(t).is_some()
            || t.starts_with(Self::QUOTE)
            || t.starts_with(Self::PIPE)
            || Self::BULLETS.iter().any(|b| t.starts_with(b))
            || Self::ordinal(t).is_some()
    }
}

/// One classified line of a structural block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Heading { level: usize, text: &'a str },
    Quote(&'a str),
    TableRow(Vec<&'a str>),
    Task { checked: bool, text: &'a str },
    Item { ordered: bool, text: &'a str },
    Text(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some((level, text)) = Marker::heading(line) {
            return Line::Heading { level, text };
        }
        if let Some(text) = line.strip_prefix(Marker::QUOTE) {
            return Line::Quote(text);
        }

        let t = line.trim_start();
        if let Some(cells) = table_cells(t) {
            return Line::TableRow(cells);
        }
        if let Some((checked, text)) = task(t) {
            return Line::Task { checked, text };
        }
        if let Some(bullet) = Marker::BULLETS.iter().find(|b| t.starts_with(*b)) {
            return Line::Item {
                ordered: false,
                text: &t[bullet.len()..],
            };
        }
        if let Some(len) = Marker::ordinal(t) {
            return Line::Item {
                ordered: true,
                text: &t[len..],
            };
        }
        Line::Text(line)
    }
}

/// Splits a pipe-delimited row into trimmed cells.
///
/// The row must open with `|` and have some content before its last `|`.
/// Text after the last pipe, if any, becomes a final cell.
fn table_cells(t: &str) -> Option<Vec<&str>> {
    let body = t.strip_prefix(Marker::PIPE)?;
    let last = body.rfind(Marker::PIPE).filter(|&k| k > 0)?;
    let mut cells: Vec<&str> = body[..last].split(Marker::PIPE).map(str::trim).collect();
    let trailing = body[last + 1..].trim();
    if !trailing.is_empty() {
        cells.push(trailing);
    }
    Some(cells)
}

fn task(t: &str) -> Option<(bool, &str)> {
    let rest = t.strip_prefix(Marker::TASK_OPEN)?;
    let mark = rest.chars().next()?;
    let checked = match mark {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };
    rest[1..]
        .strip_prefix(Marker::TASK_CLOSE)
        .map(|text| (checked, text))
}

/// Consecutive lines that render inside one shared container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Table,
    Bullets,
    Ordinals,
}

impl Group {
    fn open(self) -> &'static str {
        match self {
            Group::Table => "<table>",
            Group::Bullets => "<ul>",
            Group::Ordinals => "<ol>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Group::Table => "</table>",
            Group::Bullets => "</ul>",
            Group::Ordinals => "</ol>",
        }
    }
}

/// Joins rendered lines, opening and closing containers as groups change.
///
/// Lines are separated by `\n` except inside a group, where fragments are
/// adjacent so `<table><tr>` and `</tr></table>` stay contiguous.
struct LineWriter<'o> {
    out: &'o mut String,
    group: Option<Group>,
    first: bool,
}

impl<'o> LineWriter<'o> {
    fn new(out: &'o mut String) -> Self {
        Self {
            out,
            group: None,
            first: true,
        }
    }

    fn start_line(&mut self, group: Option<Group>) -> &mut String {
        let continues = group.is_some() && group == self.group;
        if !continues {
            if let Some(open) = self.group.take() {
                self.out.push_str(open.close());
            }
            if !self.first {
                self.out.push('\n');
            }
            if let Some(g) = group {
                self.out.push_str(g.open());
            }
            self.group = group;
        }
        self.first = false;
        &mut *self.out
    }

    fn finish(self) {
        if let Some(open) = self.group {
            self.out.push_str(open.close());
        }
    }
}

/// Renders a structural block line by line into `out`.
pub fn render_block(block: &str, options: &RenderOptions, out: &mut String) {
    let mut writer = LineWriter::new(out);

    for raw in block.split('\n') {
        let line = Line::classify(raw);
        let group = match &line {
            Line::TableRow(_) => Some(Group::Table),
            Line::Item { ordered: false, .. } if options.list_containers => Some(Group::Bullets),
            Line::Item { ordered: true, .. } if options.list_containers => Some(Group::Ordinals),
            _ => None,
        };
        let out = writer.start_line(group);

        match line {
            Line::Heading { level, text } => {
                out.push_str(&format!("<h{level}>"));
                render_inline(text, out);
                out.push_str(&format!("</h{level}>"));
            }
            Line::Quote(text) => {
                out.push_str("<blockquote>");
                render_inline(text, out);
                out.push_str("</blockquote>");
            }
            Line::TableRow(cells) => {
                out.push_str("<tr>");
                for cell in cells {
                    out.push_str("<td>");
                    render_inline(cell, out);
                    out.push_str("</td>");
                }
                out.push_str("</tr>");
            }
            Line::Task { checked, text } => {
                out.push_str(if checked {
                    "<div class=\"task-item\"><input type=\"checkbox\" checked disabled> "
                } else {
                    "<div class=\"task-item\"><input type=\"checkbox\" disabled> "
                });
                render_inline(text, out);
                out.push_str("</div>");
            }
            Line::Item { text, .. } => {
                out.push_str("<li>");
                render_inline(text, out);
                out.push_str("</li>");
            }
            Line::Text(text) => render_inline(text, out),
        }
    }

    writer.finish();
}
