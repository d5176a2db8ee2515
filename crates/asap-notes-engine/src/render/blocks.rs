use super::{escape, fence::FenceTable, inline::render_inline, structural::Marker};

/// Splits text into blocks on every run of two or more `\n`.
///
/// Separators at the edges produce empty blocks, as `"\n\na"` yields
/// `["", "a"]`. Callers render those to nothing.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\n' {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < bytes.len() && bytes[i] == b'\n' {
            i += 1;
        }
        if i - run_start >= 2 {
            blocks.push(&text[start..run_start]);
            start = i;
        }
    }
    blocks.push(&text[start..]);
    blocks
}

/// How a block will be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    /// Empty or whitespace only: renders to nothing.
    Empty,
    /// Exactly one fence placeholder, restored directly.
    Fence(usize),
    /// Heading, quote, list, task or table markup.
    Structural,
    /// Everything else: a paragraph.
    Plain,
}

impl BlockClass {
    pub fn of(block: &str, fences: &FenceTable) -> Self {
        if block.trim().is_empty() {
            return BlockClass::Empty;
        }
        if let Some(index) = fences.sole_placeholder(block) {
            return BlockClass::Fence(index);
        }
        if Marker::opens_structural(block) {
            BlockClass::Structural
        } else {
            BlockClass::Plain
        }
    }
}

/// Renders a plain block as one paragraph.
///
/// Line breaks become `<br>` and whitespace runs collapse to one space.
pub fn render_paragraph(block: &str, out: &mut String) {
    let mut inner = String::with_capacity(block.len() + 16);
    for (i, line) in block.split('\n').enumerate() {
        if i > 0 {
            inner.push_str("<br>");
        }
        render_inline(line, &mut inner);
    }

    out.push_str("<p>");
    out.push_str(&escape::collapse_whitespace(&inner));
    out.push_str("</p>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_on_blank_line() {
        assert_eq!(split_blocks("Hello\n\nWorld"), vec!["Hello", "World"]);
    }

    #[test]
    fn single_newline_stays_in_block() {
        assert_eq!(split_blocks("a\nb"), vec!["a\nb"]);
    }

    #[test]
    fn long_separator_runs() {
        assert_eq!(split_blocks("a\n\n\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn edge_separators_yield_empty_blocks() {
        assert_eq!(split_blocks("\n\na\n\n"), vec!["", "a", ""]);
    }

    #[test]
    fn empty_input_is_one_empty_block() {
        assert_eq!(split_blocks(""), vec![""]);
    }

    #[test]
    fn whitespace_lines_do_not_separate() {
        assert_eq!(split_blocks("a\n \nb"), vec!["a\n \nb"]);
    }

    #[test]
    fn classify_blocks() {
        let (text, fences) = FenceTable::extract("```x```");
        assert_eq!(BlockClass::of(&text, &fences), BlockClass::Fence(0));
        assert_eq!(BlockClass::of("   ", &fences), BlockClass::Empty);
        assert_eq!(BlockClass::of("# h", &fences), BlockClass::Structural);
        assert_eq!(BlockClass::of("words", &fences), BlockClass::Plain);
    }

    #[test]
    fn paragraph_escapes_and_breaks_lines() {
        let mut out = String::new();
        render_paragraph("a < b\nc & d", &mut out);
        assert_eq!(out, "<p>a &lt; b<br>c &amp; d</p>");
    }

    #[test]
    fn paragraph_collapses_spaces() {
        let mut out = String::new();
        render_paragraph("too    many   spaces", &mut out);
        assert_eq!(out, "<p>too many spaces</p>");
    }

    #[test]
    fn paragraph_applies_inline_rules() {
        let mut out = String::new();
        render_paragraph("some **bold** text", &mut out);
        assert_eq!(out, "<p>some <b>bold</b> text</p>");
    }
}
