mod csv_reader;
mod loci;
mod predictions;
mod row_error;

pub use csv_reader::{parse_csv, CsvRow};
pub use loci::{extract_loci, LocusRecord, LOCUS_ID_COLUMN, LOCUS_SEQ_COLUMN};
pub use predictions::{
    extract_predictions, PredictionRecord, PREDICTION_ID_COLUMN, PREDICTION_INDEX_COLUMN,
    PREDICTION_PROBABILITY_COLUMN,
};
pub use row_error::{Extraction, RowError, RowErrorKind};
