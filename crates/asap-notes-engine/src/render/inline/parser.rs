use super::{
    cursor::{Cursor, Finder},
    kinds::{CodeSpan, Emphasis, Image, Link, Strikethrough, Strong},
    types::InlineNode,
};

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Constructs are dispatched on the byte at the cursor. Where two constructs
/// share a leading byte the longer one is tried first: `![` before `[`
/// (handled by the `!` arm) and `**` before `*`. Closer searches step over
/// complete inner spans that would otherwise be cut in half: an italic
/// closer over bold, a link's `](` over an image. Text between constructs is
/// emitted as [`InlineNode::Text`].
///
/// Unclosed or empty constructs fall back to literal text.
pub fn parse_inline(s: &str) -> Vec<InlineNode<'_>> {
    let mut cur = Cursor::new(s);
    let mut finder = Finder::default();
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text<'a>(out: &mut Vec<InlineNode<'a>>, s: &'a str, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(node) = try_construct(&mut cur, &mut finder) {
            flush_text(&mut out, s, text_start, start);
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, s.len());
    out
}

fn try_construct<'a>(cur: &mut Cursor<'a>, finder: &mut Finder) -> Option<InlineNode<'a>> {
    match cur.peek()? {
        b'!' => try_parse_image(cur, finder),
        Link::OPEN => try_parse_link(cur, finder),
        b'*' => try_parse_strong(cur, finder).or_else(|| try_parse_emphasis(cur, finder)),
        b'~' => try_parse_strikethrough(cur, finder),
        b'`' => try_parse_code_span(cur, finder),
        _ => None,
    }
}

/// Finds `](` and the closing `)` after the alt text starting at `alt_start`.
///
/// Returns `(alt_end, src_start, src_end)`. Alt text is verbatim, so the first
/// `](` ends it.
fn image_tail(s: &str, finder: &mut Finder, alt_start: usize) -> Option<(usize, usize, usize)> {
    let alt_end = finder.find(s, Link::MIDDLE, alt_start)?;
    target(s, finder, alt_end)
}

/// Like [`image_tail`], but a complete image inside the link text keeps its
/// own `](`, so `[![alt](img)](url)` links the image to `url`.
fn link_tail(s: &str, finder: &mut Finder, text_start: usize) -> Option<(usize, usize, usize)> {
    let text_end = finder.find_outside(s, Link::MIDDLE, Image::OPEN, text_start, |f, open| {
        image_tail(s, f, open + Image::OPEN.len())
            .map(|(_, _, src_end)| src_end + Link::CLOSE.len())
    })?;
    target(s, finder, text_end)
}

fn target(s: &str, finder: &mut Finder, text_end: usize) -> Option<(usize, usize, usize)> {
    let target_start = text_end + Link::MIDDLE.len();
    let target_end = finder.find(s, Link::CLOSE, target_start)?;
    Some((text_end, target_start, target_end))
}

fn try_parse_image<'a>(cur: &mut Cursor<'a>, finder: &mut Finder) -> Option<InlineNode<'a>> {
    if !cur.starts_with(Image::OPEN.as_bytes()) {
        return None;
    }
    let s = cur.s;
    let alt_start = cur.pos() + Image::OPEN.len();
    let (alt_end, src_start, src_end) = image_tail(s, finder, alt_start)?;
    cur.seek(src_end + Link::CLOSE.len());

    Some(InlineNode::Image {
        alt: &s[alt_start..alt_end],
        src: &s[src_start..src_end],
    })
}

fn try_parse_link<'a>(cur: &mut Cursor<'a>, finder: &mut Finder) -> Option<InlineNode<'a>> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    let s = cur.s;
    let text_start = cur.pos() + 1;
    let (text_end, href_start, href_end) = link_tail(s, finder, text_start)?;
    cur.seek(href_end + Link::CLOSE.len());

    Some(InlineNode::Link {
        children: parse_inline(&s[text_start..text_end]),
        href: &s[href_start..href_end],
    })
}

/// Locates a non-empty span enclosed by `delim` on both sides.
///
/// On success the cursor is moved past the closing delimiter and the inner
/// slice is returned. On failure the cursor is untouched.
fn delimited<'a>(cur: &mut Cursor<'a>, finder: &mut Finder, delim: &'static str) -> Option<&'a str> {
    if !cur.starts_with(delim.as_bytes()) {
        return None;
    }
    let s = cur.s;
    let inner_start = cur.pos() + delim.len();
    let inner_end = finder.find(s, delim, inner_start)?;
    if inner_end == inner_start {
        return None;
    }
    cur.seek(inner_end + delim.len());
    Some(&s[inner_start..inner_end])
}

fn try_parse_strong<'a>(cur: &mut Cursor<'a>, finder: &mut Finder) -> Option<InlineNode<'a>> {
    delimited(cur, finder, Strong::DELIM).map(|inner| InlineNode::Strong(parse_inline(inner)))
}

/// End of the non-empty `**…**` span opened at `open`, past its closer.
fn strong_end(s: &str, finder: &mut Finder, open: usize) -> Option<usize> {
    let inner_start = open + Strong::DELIM.len();
    let inner_end = finder.find(s, Strong::DELIM, inner_start)?;
    (inner_end > inner_start).then_some(inner_end + Strong::DELIM.len())
}

/// A lone `*` closes italic only outside a complete bold span, so
/// `*a **b** c*` keeps the bold intact.
fn try_parse_emphasis<'a>(cur: &mut Cursor<'a>, finder: &mut Finder) -> Option<InlineNode<'a>> {
    if !cur.starts_with(Emphasis::DELIM.as_bytes()) {
        return None;
    }
    let s = cur.s;
    let inner_start = cur.pos() + Emphasis::DELIM.len();
    let inner_end = finder.find_outside(s, Emphasis::DELIM, Strong::DELIM, inner_start, |f, open| {
        strong_end(s, f, open)
    })?;
    if inner_end == inner_start {
        return None;
    }
    cur.seek(inner_end + Emphasis::DELIM.len());
    Some(InlineNode::Emphasis(parse_inline(&s[inner_start..inner_end])))
}

fn try_parse_strikethrough<'a>(
    cur: &mut Cursor<'a>,
    finder: &mut Finder,
) -> Option<InlineNode<'a>> {
    delimited(cur, finder, Strikethrough::DELIM)
        .map(|inner| InlineNode::Strikethrough(parse_inline(inner)))
}

fn try_parse_code_span<'a>(cur: &mut Cursor<'a>, finder: &mut Finder) -> Option<InlineNode<'a>> {
    delimited(cur, finder, CodeSpan::TICK).map(InlineNode::Code)
}

#[cfg(test)]
mod tests {
    use super::{InlineNode, parse_inline};
    use pretty_assertions::assert_eq;
    use InlineNode::*;

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![Text("hello world")]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(parse_inline("`code`"), vec![Code("code")]);
    }

    #[test]
    fn code_span_is_raw_zone() {
        assert_eq!(parse_inline("`**not bold**`"), vec![Code("**not bold**")]);
    }

    #[test]
    fn image_before_link() {
        assert_eq!(
            parse_inline("![alt](http://x/y.png)[t](http://z)"),
            vec![
                Image {
                    alt: "alt",
                    src: "http://x/y.png"
                },
                Link {
                    children: vec![Text("t")],
                    href: "http://z"
                },
            ]
        );
    }

    #[test]
    fn bang_without_bracket_is_text() {
        assert_eq!(parse_inline("wow! ok"), vec![Text("wow! ok")]);
    }

    #[test]
    fn link_text_is_parsed() {
        assert_eq!(
            parse_inline("[**a**](u)"),
            vec![Link {
                children: vec![Strong(vec![Text("a")])],
                href: "u"
            }]
        );
    }

    #[test]
    fn strong_before_emphasis() {
        assert_eq!(
            parse_inline("**bold *and italic* still bold**"),
            vec![Strong(vec![
                Text("bold "),
                Emphasis(vec![Text("and italic")]),
                Text(" still bold"),
            ])]
        );
    }

    #[test]
    fn bold_inside_italic() {
        assert_eq!(
            parse_inline("*a **b** c*"),
            vec![Emphasis(vec![
                Text("a "),
                Strong(vec![Text("b")]),
                Text(" c"),
            ])]
        );
    }

    #[test]
    fn italic_closes_at_unpaired_double_asterisk() {
        assert_eq!(
            parse_inline("*a **b*"),
            vec![Emphasis(vec![Text("a ")]), Emphasis(vec![Text("b")])]
        );
    }

    #[test]
    fn image_inside_link() {
        assert_eq!(
            parse_inline("[![badge](http://x/b.png)](http://z)"),
            vec![Link {
                children: vec![Image {
                    alt: "badge",
                    src: "http://x/b.png"
                }],
                href: "http://z"
            }]
        );
    }

    #[test]
    fn image_then_text_inside_link() {
        assert_eq!(
            parse_inline("see [![i](p) docs](u) now"),
            vec![
                Text("see "),
                Link {
                    children: vec![
                        Image { alt: "i", src: "p" },
                        Text(" docs"),
                    ],
                    href: "u"
                },
                Text(" now"),
            ]
        );
    }

    #[test]
    fn strikethrough() {
        assert_eq!(
            parse_inline("a ~~b~~ c"),
            vec![Text("a "), Strikethrough(vec![Text("b")]), Text(" c")]
        );
    }

    #[test]
    fn unpaired_asterisk_is_text() {
        assert_eq!(parse_inline("2 * 3 = 6"), vec![Text("2 * 3 = 6")]);
    }

    #[test]
    fn empty_delimiters_are_text() {
        assert_eq!(parse_inline("**** ~~~~ ``"), vec![Text("**** ~~~~ ``")]);
    }

    #[test]
    fn unclosed_link_is_text() {
        assert_eq!(parse_inline("[text](no close"), vec![Text("[text](no close")]);
    }

    #[test]
    fn unclosed_image_is_text() {
        assert_eq!(parse_inline("![alt] (x)"), vec![Text("![alt] (x)")]);
    }

    #[test]
    fn multibyte_text_around_constructs() {
        assert_eq!(
            parse_inline("héllo *wörld* ✓"),
            vec![Text("héllo "), Emphasis(vec![Text("wörld")]), Text(" ✓")]
        );
    }

    #[test]
    fn many_unmatched_openers() {
        let line = "[".repeat(10_000);
        assert_eq!(parse_inline(&line), vec![Text(line.as_str())]);
    }
}
