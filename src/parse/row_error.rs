use crate::utils::Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RowErrorKind {
    MissingColumn { column: usize, found: usize },
    NotNumeric { column: usize, value: String },
    OutOfRange { column: usize, value: String },
}

/// A row that could not be turned into a record. `line` is 1-based and
/// counts the header.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub kind: RowErrorKind,
}

impl RowError {
    pub fn new(line: usize, kind: RowErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            RowErrorKind::MissingColumn { column, found } => write!(
                formatter,
                "line {}: missing column {} (row has {} fields)",
                self.line, column, found
            ),
            RowErrorKind::NotNumeric { column, value } => write!(
                formatter,
                "line {}: column {} is not numeric: {:?}",
                self.line, column, value
            ),
            RowErrorKind::OutOfRange { column, value } => write!(
                formatter,
                "line {}: column {} is out of range: {:?}",
                self.line, column, value
            ),
        }
    }
}

/// Records extracted from a table together with the rows that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<T> {
    pub records: Vec<T>,
    pub failures: Vec<RowError>,
}

impl<T> Extraction<T> {
    pub fn num_rows(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the records, or an error describing the first failed row.
    pub fn into_strict(self) -> Result<Vec<T>> {
        match self.failures.first() {
            None => Ok(self.records),
            Some(first) => Err(format!(
                "{} malformed row(s), first at {}",
                self.failures.len(),
                first
            )),
        }
    }
}

impl<T> FromIterator<std::result::Result<T, RowError>> for Extraction<T> {
    fn from_iter<I: IntoIterator<Item = std::result::Result<T, RowError>>>(iter: I) -> Self {
        let mut records = Vec::new();
        let mut failures = Vec::new();
        for result in iter {
            match result {
                Ok(record) => records.push(record),
                Err(failure) => failures.push(failure),
            }
        }
        Extraction { records, failures }
    }
}

/// Fetches column `column` of `row`, reporting a missing column otherwise.
pub(crate) fn get_field<'a>(
    row: &'a [String],
    line: usize,
    column: usize,
) -> std::result::Result<&'a str, RowError> {
    row.get(column).map(|s| s.as_str()).ok_or_else(|| {
        RowError::new(
            line,
            RowErrorKind::MissingColumn {
                column,
                found: row.len(),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_display() {
        let error = RowError::new(
            3,
            RowErrorKind::MissingColumn {
                column: 22,
                found: 5,
            },
        );
        assert_eq!(error.to_string(), "line 3: missing column 22 (row has 5 fields)");

        let error = RowError::new(
            2,
            RowErrorKind::NotNumeric {
                column: 5,
                value: "abc".to_string(),
            },
        );
        assert_eq!(error.to_string(), "line 2: column 5 is not numeric: \"abc\"");
    }

    #[test]
    fn test_extraction_collect() {
        let results = vec![
            Ok(1),
            Err(RowError::new(
                3,
                RowErrorKind::MissingColumn {
                    column: 1,
                    found: 1,
                },
            )),
            Ok(2),
        ];
        let extraction: Extraction<i32> = results.into_iter().collect();
        assert_eq!(extraction.records, vec![1, 2]);
        assert_eq!(extraction.failures.len(), 1);
        assert_eq!(extraction.num_rows(), 3);
        assert!(!extraction.is_clean());
        assert!(extraction.into_strict().is_err());
    }

    #[test]
    fn test_extraction_strict_clean() {
        let extraction: Extraction<i32> = vec![Ok(1), Ok(2)].into_iter().collect();
        assert_eq!(extraction.into_strict().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_get_field() {
        let row = vec!["a".to_string(), "b".to_string()];
        assert_eq!(get_field(&row, 2, 1).unwrap(), "b");
        let error = get_field(&row, 2, 5).unwrap_err();
        assert_eq!(
            error.kind,
            RowErrorKind::MissingColumn {
                column: 5,
                found: 2
            }
        );
    }
}
