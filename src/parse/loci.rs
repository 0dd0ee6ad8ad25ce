use super::row_error::{get_field, Extraction, RowError};
use super::CsvRow;

pub const LOCUS_ID_COLUMN: usize = 22;
pub const LOCUS_SEQ_COLUMN: usize = 23;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusRecord {
    pub id: String,
    pub locus: String,
}

impl LocusRecord {
    pub fn new(id: impl Into<String>, locus: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            locus: locus.into(),
        }
    }

    fn from_row(row: &[String], line: usize) -> Result<Self, RowError> {
        let id = get_field(row, line, LOCUS_ID_COLUMN)?;
        let locus = get_field(row, line, LOCUS_SEQ_COLUMN)?;
        Ok(LocusRecord::new(id, locus))
    }
}

/// Extracts locus records from the rows of an output file. The first row is
/// a header and is skipped. The sequence is kept verbatim.
pub fn extract_loci(rows: &[CsvRow]) -> Extraction<LocusRecord> {
    rows.iter()
        .enumerate()
        .skip(1)
        .map(|(index, row)| LocusRecord::from_row(row, index + 1))
        .collect()
}
