use super::row_error::{get_field, Extraction, RowError, RowErrorKind};
use super::CsvRow;

pub const PREDICTION_ID_COLUMN: usize = 1;
pub const PREDICTION_INDEX_COLUMN: usize = 2;
pub const PREDICTION_PROBABILITY_COLUMN: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub id: String,
    pub index: usize,
    pub probability: f64,
}

impl PredictionRecord {
    pub fn new(id: impl Into<String>, index: usize, probability: f64) -> Self {
        Self {
            id: id.into(),
            index,
            probability,
        }
    }

    fn from_row(row: &[String], line: usize) -> Result<Self, RowError> {
        let id = get_field(row, line, PREDICTION_ID_COLUMN)?;
        let index = parse_index(get_field(row, line, PREDICTION_INDEX_COLUMN)?, line)?;
        let probability =
            parse_probability(get_field(row, line, PREDICTION_PROBABILITY_COLUMN)?, line)?;
        Ok(PredictionRecord::new(id, index, probability))
    }
}

/// Extracts prediction records from the rows of a predictions file. The
/// first row is a header and is skipped.
pub fn extract_predictions(rows: &[CsvRow]) -> Extraction<PredictionRecord> {
    rows.iter()
        .enumerate()
        .skip(1)
        .map(|(index, row)| PredictionRecord::from_row(row, index + 1))
        .collect()
}

fn parse_index(field: &str, line: usize) -> Result<usize, RowError> {
    let column = PREDICTION_INDEX_COLUMN;
    let value = field.trim();
    if let Ok(index) = value.parse::<usize>() {
        return Ok(index);
    }

    // Integral floats such as "3.0" are positions too
    let number = value.parse::<f64>().map_err(|_| {
        RowError::new(
            line,
            RowErrorKind::NotNumeric {
                column,
                value: field.to_string(),
            },
        )
    })?;
    if number.is_finite() && number >= 0.0 && number.fract() == 0.0 {
        Ok(number as usize)
    } else {
        Err(RowError::new(
            line,
            RowErrorKind::OutOfRange {
                column,
                value: field.to_string(),
            },
        ))
    }
}

fn parse_probability(field: &str, line: usize) -> Result<f64, RowError> {
    let column = PREDICTION_PROBABILITY_COLUMN;
    let probability = field.trim().parse::<f64>().map_err(|_| {
        RowError::new(
            line,
            RowErrorKind::NotNumeric {
                column,
                value: field.to_string(),
            },
        )
    })?;
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(RowError::new(
            line,
            RowErrorKind::OutOfRange {
                column,
                value: field.to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_csv;

    fn extract(content: &str) -> Extraction<PredictionRecord> {
        extract_predictions(&parse_csv(content.as_bytes()))
    }

    #[test]
    fn test_extract_predictions() {
        let extraction = extract("n,id,index,x,y,prob\n0,S1,0,_,_,0.8\n1,S1,1,_,_,0.25\n");
        assert!(extraction.is_clean());
        assert_eq!(
            extraction.records,
            vec![
                PredictionRecord::new("S1", 0, 0.8),
                PredictionRecord::new("S1", 1, 0.25)
            ]
        );
    }

    #[test]
    fn test_extract_predictions_trims_numbers() {
        let extraction = extract("header\n0,S1, 7 ,_,_, 0.5 ");
        assert_eq!(extraction.records, vec![PredictionRecord::new("S1", 7, 0.5)]);
    }

    #[test]
    fn test_extract_predictions_integral_float_index() {
        let extraction = extract("header\n0,S1,3.0,_,_,1");
        assert_eq!(extraction.records, vec![PredictionRecord::new("S1", 3, 1.0)]);
    }

    #[test]
    fn test_extract_predictions_missing_column() {
        let extraction = extract("header\n0,S1,3,_");
        assert!(extraction.records.is_empty());
        assert_eq!(
            extraction.failures[0],
            RowError::new(
                2,
                RowErrorKind::MissingColumn {
                    column: PREDICTION_PROBABILITY_COLUMN,
                    found: 4
                }
            )
        );
    }

    #[test]
    fn test_extract_predictions_not_numeric() {
        let extraction = extract("header\n0,S1,first,_,_,0.5\n0,S1,0,_,_,high\n0,S1,0,_,_,");
        assert!(extraction.records.is_empty());
        let kinds: Vec<_> = extraction.failures.iter().map(|f| f.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                RowErrorKind::NotNumeric {
                    column: PREDICTION_INDEX_COLUMN,
                    value: "first".to_string()
                },
                RowErrorKind::NotNumeric {
                    column: PREDICTION_PROBABILITY_COLUMN,
                    value: "high".to_string()
                },
                RowErrorKind::NotNumeric {
                    column: PREDICTION_PROBABILITY_COLUMN,
                    value: "".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_extract_predictions_out_of_range() {
        let extraction =
            extract("header\n0,S1,-1,_,_,0.5\n0,S1,1.5,_,_,0.5\n0,S1,0,_,_,1.01\n0,S1,0,_,_,NaN");
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.failures.len(), 4);
        assert!(extraction
            .failures
            .iter()
            .all(|f| matches!(f.kind, RowErrorKind::OutOfRange { .. })));
        assert_eq!(
            extraction.failures.iter().map(|f| f.line).collect::<Vec<_>>(),
            vec![2, 3, 4, 5]
        );
    }

    #[test]
    fn test_extract_predictions_probability_bounds() {
        let extraction = extract("header\n0,S1,0,_,_,0\n0,S1,1,_,_,1");
        assert_eq!(extraction.records[0].probability, 0.0);
        assert_eq!(extraction.records[1].probability, 1.0);
    }
}
