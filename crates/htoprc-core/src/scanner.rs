//! Line scanner: raw text into `(line, key, value)` entries.
//!
//! - Splits on `\n` and trims each line, which also drops a trailing `\r`
//! - Skips blank lines and `#` comment lines
//! - Splits at the *first* `=`; later `=` characters belong to the value
//! - Lines without any `=` are skipped silently
//!
//! There are no inline comments and no escapes: everything after the first
//! `=` (trimmed) is the value.

/// One `key=value` line that survived scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based line number in the original input.
    pub line: usize,
    pub key: &'a str,
    pub value: &'a str,
}

/// Iterate over the `key=value` entries of `text`, borrowing from it.
pub fn scan(text: &str) -> impl Iterator<Item = Entry<'_>> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, raw)| scan_line(idx + 1, raw))
}

fn scan_line(line: usize, raw: &str) -> Option<Entry<'_>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let (key, value) = trimmed.split_once('=')?;
    Some(Entry {
        line,
        key: key.trim(),
        value: value.trim(),
    })
}
