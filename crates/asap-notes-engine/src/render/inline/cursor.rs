use std::collections::HashMap;

/// A cursor for byte-by-byte inline scanning of a single line.
///
/// Every delimiter the inline rules look for is ASCII, so positions the
/// parser slices at always fall on char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves to an absolute index.
    pub fn seek(&mut self, i: usize) {
        self.i = i;
    }
}

/// Memoised forward search for closing delimiters.
///
/// A search for `pat` from `from` that found nothing also finds nothing from
/// any later position, and a hit at `f` is still the first hit for any start
/// in `from..=f`. Remembering the last answer per pattern keeps scanning a
/// line full of unmatched openers linear.
#[derive(Default)]
pub struct Finder {
    memo: HashMap<&'static str, (usize, Option<usize>)>,
    outside: HashMap<(&'static str, usize), Option<usize>>,
}

impl Finder {
    /// Returns the absolute index of the first `pat` in `s` at or after `from`.
    pub fn find(&mut self, s: &str, pat: &'static str, from: usize) -> Option<usize> {
        if let Some(&(start, hit)) = self.memo.get(pat) {
            match hit {
                None if from >= start => return None,
                Some(f) if start <= from && from <= f => return Some(f),
                _ => {}
            }
        }
        let hit = s.get(from..).and_then(|rest| rest.find(pat)).map(|k| from + k);
        self.memo.insert(pat, (from, hit));
        hit
    }

    /// Like [`Finder::find`], but skips every complete span that starts with
    /// `open` at or before the candidate `pat`.
    ///
    /// `span_end` returns the index just past the span opened at a given
    /// position, or `None` when that opener is not closed. An unclosed opener
    /// does not hide the candidate after it.
    ///
    /// The answer only depends on the opener being skipped, so it is
    /// remembered per opener and every opener is resolved once per line.
    pub fn find_outside(
        &mut self,
        s: &str,
        pat: &'static str,
        open: &'static str,
        from: usize,
        mut span_end: impl FnMut(&mut Self, usize) -> Option<usize>,
    ) -> Option<usize> {
        let mut from = from;
        let mut skipped = vec![];
        let hit = loop {
            let Some(hit) = self.find(s, pat, from) else {
                break None;
            };
            let Some(opener) = self.find(s, open, from).filter(|&o| o <= hit) else {
                break Some(hit);
            };
            if let Some(&known) = self.outside.get(&(pat, opener)) {
                break known;
            }
            skipped.push(opener);
            match span_end(self, opener) {
                Some(end) => from = end,
                None => break Some(hit),
            }
        };
        for opener in skipped {
            self.outside.insert((pat, opener), hit);
        }
        hit
    }
}
