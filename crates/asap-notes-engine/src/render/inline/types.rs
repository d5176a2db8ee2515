/// A parsed inline node borrowing from the line it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode<'a> {
    /// Plain text that isn't part of any special construct.
    Text(&'a str),
    /// `![alt](src)`. The alt text is kept verbatim, not parsed.
    Image { alt: &'a str, src: &'a str },
    /// `[text](href)`. The link text is parsed for nested inlines.
    Link {
        children: Vec<InlineNode<'a>>,
        href: &'a str,
    },
    Strong(Vec<InlineNode<'a>>),
    Emphasis(Vec<InlineNode<'a>>),
    Strikethrough(Vec<InlineNode<'a>>),
    /// A code span. This is a raw zone: its content is never parsed.
    Code(&'a str),
}
