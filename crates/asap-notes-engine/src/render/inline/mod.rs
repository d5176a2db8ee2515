//! # Inline Rendering
//!
//! Cursor-based inline parsing over a single line, followed by HTML output.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Image, Link, Strong, Emphasis, Strikethrough, Code)
//! - **`kinds`**: Inline types that own their delimiters
//! - **`cursor`**: `Cursor` for byte scanning, `Finder` for memoised delimiter search
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Images before links, bold before italic. An image inside link text and
//! bold inside italic stay whole. Code spans are raw zones:
//! `` `**x**` `` renders the asterisks literally.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;

use super::escape;

/// Parses `line` and appends its HTML to `out`.
pub fn render_inline(line: &str, out: &mut String) {
    write_nodes(&parse_inline(line), out);
}

/// Appends the HTML for a sequence of inline nodes.
pub fn write_nodes(nodes: &[InlineNode<'_>], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(t) => out.push_str(&escape::text(t)),
            InlineNode::Image { alt, src } => {
                out.push_str("<img src=\"");
                out.push_str(&escape::attribute(src));
                out.push_str("\" alt=\"");
                out.push_str(&escape::attribute(alt));
                out.push_str("\" style=\"max-width: 100%; height: auto;\">");
            }
            InlineNode::Link { children, href } => {
                out.push_str("<a href=\"");
                out.push_str(&escape::attribute(href));
                out.push_str("\" target=\"_blank\">");
                write_nodes(children, out);
                out.push_str("</a>");
            }
            InlineNode::Strong(children) => wrap(out, "b", children),
            InlineNode::Emphasis(children) => wrap(out, "i", children),
            InlineNode::Strikethrough(children) => wrap(out, "del", children),
            InlineNode::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape::text(code));
                out.push_str("</code>");
            }
        }
    }
}

fn wrap(out: &mut String, tag: &str, children: &[InlineNode<'_>]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    write_nodes(children, out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
