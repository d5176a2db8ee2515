use std::borrow::Cow;

/// Escapes `&`, `<` and `>` for use as HTML text content.
pub fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a value for use inside a double-quoted HTML attribute.
pub fn attribute(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Replaces every run of two or more whitespace characters with one space.
///
/// A lone whitespace character is kept as it is.
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run_start: Option<usize> = None;

    for (i, c) in s.char_indices() {
        if c.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(i);
            }
            continue;
        }
        if let Some(start) = run_start.take() {
            push_run(&mut out, &s[start..i]);
        }
        out.push(c);
    }
    if let Some(start) = run_start {
        push_run(&mut out, &s[start..]);
    }
    out
}

fn push_run(out: &mut String, run: &str) {
    if run.chars().nth(1).is_some() {
        out.push(' ');
    } else {
        out.push_str(run);
    }
}
