//! Minimal CSV splitting: one row per line, one field per comma.
//!
//! Quoted fields and escaped commas are not recognized; a comma inside quotes
//! still starts a new field.

pub type CsvRow = Vec<String>;

/// Splits raw file content into rows of fields.
///
/// The content is decoded as UTF-8 (invalid sequences become U+FFFD) and
/// trimmed as a whole before splitting, so leading blank lines and a trailing
/// newline do not produce rows. A trailing `\r` is dropped from every line.
pub fn parse_csv(bytes: &[u8]) -> Vec<CsvRow> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.split(',').map(|field| field.to_string()).collect()
        })
        .collect()
}
