//! Document-level table assembly.
//!
//! Runs once over the concatenated fragments. Any run of adjacent
//! `<tr>…</tr>` rows that is not already inside a table gets a `<table>`
//! wrapper, then every table gains a `<tbody>`. Applying the pass to its
//! own output changes nothing.

const ROW_OPEN: &str = "<tr>";
const ROW_CLOSE: &str = "</tr>";
const TABLE_OPEN: &str = "<table>";
const BODY_OPEN: &str = "<tbody>";

/// Wraps bare row runs in `<table>` and normalises every table to carry a `<tbody>`.
pub fn assemble_tables(html: &str) -> String {
    let wrapped = wrap_bare_rows(html);
    wrapped
        .replace("<table><tr>", "<table><tbody><tr>")
        .replace("</tr></table>", "</tr></tbody></table>")
}

fn wrap_bare_rows(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find(ROW_OPEN) {
        let end = row_run_end(rest, start);
        if end == start {
            // An unclosed row: nothing after it can form a run either.
            break;
        }

        let before = &rest[..start];
        let preceded = before.trim_end();
        out.push_str(before);
        if preceded.ends_with(TABLE_OPEN) || preceded.ends_with(BODY_OPEN) {
            out.push_str(&rest[start..end]);
        } else {
            out.push_str(TABLE_OPEN);
            out.push_str(&rest[start..end]);
            out.push_str("</table>");
        }
        rest = &rest[end..];
    }

    out.push_str(rest);
    out
}

/// End of the run of rows beginning at `start`, allowing whitespace between rows.
fn row_run_end(s: &str, start: usize) -> usize {
    let mut end = start;
    let mut probe = start;

    while s[probe..].starts_with(ROW_OPEN) {
        let Some(close) = s[probe..].find(ROW_CLOSE) else {
            break;
        };
        end = probe + close + ROW_CLOSE.len();
        let after = &s[end..];
        probe = end + (after.len() - after.trim_start().len());
    }
    end
}
