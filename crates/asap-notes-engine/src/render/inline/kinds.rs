//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser reads
//! these constants; it never hardcodes `**` or `](`.

/// `![alt](src)`: the link grammar behind a leading `!`.
pub struct Image;

impl Image {
    pub const OPEN: &'static str = "![";
}

/// `[text](href)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Separates the bracketed text from the parenthesised target.
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";
}

/// `**bold**`. Tried before [`Emphasis`] so a double asterisk is never split.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}

/// `*italic*`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: &'static str = "*";
}

/// `~~struck~~`.
pub struct Strikethrough;

impl Strikethrough {
    pub const DELIM: &'static str = "~~";
}

/// `` `code` ``. A raw zone: nothing inside it is parsed.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: &'static str = "`";
}
