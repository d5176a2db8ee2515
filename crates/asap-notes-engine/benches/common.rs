// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_note(sections: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n- [ ] open task\n- [x] done task\n\n| name | qty |\n| apples | 3 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n> quoted line\n\n";
    base.repeat(sections)
}

/// A single line full of openers that never close.
#[allow(dead_code)]
pub fn generate_unclosed_markers(len: usize) -> String {
    "[*~`!".repeat(len / 5)
}

/// Many short fenced regions separated by prose.
#[allow(dead_code)]
pub fn generate_fence_heavy(blocks: usize) -> String {
    let mut content = String::new();
    for i in 0..blocks {
        content.push_str(&format!("Step {i}\n\n```\nlet x = {i};\n```\n\n"));
    }
    content
}
