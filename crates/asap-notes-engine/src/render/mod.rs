//! # Preview Rendering
//!
//! Turns a note's raw text into HTML for the live preview. Rendering is a
//! pure function of the input: no state survives between calls and every
//! input, however malformed, produces some HTML.
//!
//! ## Pipeline
//!
//! 1. **Fence extraction** (`fence`): closed ```` ``` ```` regions are swapped
//!    for placeholders so later stages never see their contents
//! 2. **Block segmentation** (`blocks`): split on runs of two or more newlines
//! 3. **Block rendering**: a lone placeholder becomes `<pre><code>`;
//!    structural blocks (`structural`) are rendered line by line; everything
//!    else becomes a paragraph. Both apply the inline rules (`inline`)
//! 4. **Table assembly** (`table`): rows are wrapped and given a `<tbody>`
//! 5. **Fence restoration**: remaining placeholders are replaced by escaped
//!    code blocks
//!
//! Fragments are concatenated with no separator.

pub mod blocks;
pub mod escape;
pub mod fence;
pub mod inline;
pub mod structural;
pub mod table;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use blocks::{BlockClass, render_paragraph, split_blocks};
use fence::FenceTable;
use table::assemble_tables;

/// Options that change rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap consecutive list items in `<ul>`/`<ol>`.
    ///
    /// Off by default: list items are emitted as bare `<li>` fragments.
    pub list_containers: bool,
}

/// Markdown-subset to HTML renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders a whole document to HTML. Never fails.
    pub fn render(&self, document: &str) -> String {
        let document = normalize_line_endings(document);
        let (text, fences) = FenceTable::extract(&document);

        let mut html = String::with_capacity(text.len() + text.len() / 2);
        for block in split_blocks(&text) {
            match BlockClass::of(block, &fences) {
                BlockClass::Empty => {}
                BlockClass::Fence(index) => fences.write_block(index, &mut html),
                BlockClass::Structural => structural::render_block(block, &self.options, &mut html),
                BlockClass::Plain => render_paragraph(block, &mut html),
            }
        }

        let html = assemble_tables(&html);
        fences.restore(&html)
    }
}

/// Renders `document` with default options.
pub fn render(document: &str) -> String {
    Renderer::default().render(document)
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
fn normalize_line_endings(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\r\n", "\n").replace('\r', "\n"))
}
