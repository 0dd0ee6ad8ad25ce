use crate::correlate::LocusTable;
use crate::utils::Result;
use itertools::Itertools;
use std::io::Write;

const HEADER: [&str; 7] = [
    "#id",
    "position",
    "base",
    "complement",
    "probability",
    "label",
    "color",
];
const MISSING: &str = ".";

/// Writes one tab-separated line per table cell, `.` marking absent values.
pub fn write_tsv<W: Write>(writer: &mut W, tables: &[LocusTable]) -> Result<()> {
    let to_error = |e: std::io::Error| format!("Failed to write TSV: {}", e);
    writeln!(writer, "{}", HEADER.iter().join("\t")).map_err(to_error)?;
    for table in tables {
        for pos in &table.positions {
            let prediction = &pos.prediction;
            let fields = [
                table.id.clone(),
                pos.number.to_string(),
                pos.base.symbol.to_string(),
                or_missing(prediction.complement.map(|b| b.to_string())),
                or_missing(prediction.probability.map(|p| p.to_string())),
                if prediction.label.is_empty() {
                    MISSING.to_string()
                } else {
                    prediction.label.clone()
                },
                or_missing(prediction.fill.map(|c| c.to_string())),
            ];
            writeln!(writer, "{}", fields.iter().join("\t")).map_err(to_error)?;
        }
    }
    writer.flush().map_err(to_error)?;
    Ok(())
}

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}
