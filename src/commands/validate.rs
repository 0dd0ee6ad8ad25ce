use crate::cli::ValidateArgs;
use crate::correlate::PredictionIndex;
use crate::parse::{Extraction, LocusRecord, PredictionRecord};
use crate::session::{load_loci, load_predictions};
use crate::utils::Result;
use itertools::{Itertools, MinMaxResult};
use std::collections::HashSet;
use std::path::Path;

pub fn validate(args: ValidateArgs) -> Result<()> {
    let predictions = load_predictions(&args.predictions_path)?;
    let loci = load_loci(&args.loci_path)?;

    let error_count = report_failures(&predictions, &args.predictions_path)
        + report_failures(&loci, &args.loci_path);
    let success_count = predictions.records.len() + loci.records.len();

    let lengths: Vec<usize> = loci.records.iter().map(|l| l.locus.chars().count()).collect();
    let length_stats = calculate_stats(&lengths);
    log::info!(
        "Locus lengths - Range: [{},{}], Median: {:.2}, Mean: {:.2}, StdDev: {:.2}",
        length_stats.min,
        length_stats.max,
        length_stats.median,
        length_stats.mean,
        length_stats.std_dev
    );

    let coverage = calculate_coverage(&loci.records, &predictions.records);
    log::info!(
        "Join coverage - Positions matched: {}/{} ({:.2}%), Loci with predictions: {}/{}, Unmatched prediction ids: {}",
        coverage.matched_positions,
        coverage.total_positions,
        percentage(coverage.matched_positions, coverage.total_positions),
        coverage.matched_loci,
        loci.records.len(),
        coverage.unmatched_ids
    );

    if loci.records.is_empty() || predictions.records.is_empty() {
        log::warn!("At least one input holds no valid records; no tables would be rendered");
    }

    let total = success_count + error_count;
    match error_count {
        0 => {
            log::info!("Validation successful. Rows pass={}", success_count);
            Ok(())
        }
        _ => Err(format!(
            "Validation failed. Rows pass={} ({:.2}%), fail={} ({:.2}%)",
            success_count,
            percentage(success_count, total),
            error_count,
            percentage(error_count, total)
        )),
    }
}

fn report_failures<T>(extraction: &Extraction<T>, path: &Path) -> usize {
    for failure in &extraction.failures {
        log::error!("{}: {}", path.display(), failure);
    }
    log::info!(
        "{}: {} rows, {} valid",
        path.display(),
        extraction.num_rows(),
        extraction.records.len()
    );
    extraction.failures.len()
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

#[derive(Debug, PartialEq)]
struct Coverage {
    total_positions: usize,
    matched_positions: usize,
    matched_loci: usize,
    unmatched_ids: usize,
}

fn calculate_coverage(loci: &[LocusRecord], predictions: &[PredictionRecord]) -> Coverage {
    let index = PredictionIndex::new(predictions);
    let mut total_positions = 0;
    let mut matched_positions = 0;
    let mut matched_loci = 0;
    for locus in loci {
        let length = locus.locus.chars().count();
        let matched = (0..length)
            .filter(|&k| index.find(&locus.id, k).is_some())
            .count();
        total_positions += length;
        matched_positions += matched;
        if matched > 0 {
            matched_loci += 1;
        }
    }

    let locus_ids: HashSet<&str> = loci.iter().map(|l| l.id.as_str()).collect();
    let unmatched_ids = predictions
        .iter()
        .map(|p| p.id.as_str())
        .unique()
        .filter(|id| !locus_ids.contains(id))
        .count();

    Coverage {
        total_positions,
        matched_positions,
        matched_loci,
        unmatched_ids,
    }
}

fn calculate_stats(data: &[usize]) -> Stats {
    if data.is_empty() {
        return Stats::default();
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    let len = sorted.len();
    let median = if len % 2 == 0 {
        (sorted[len / 2 - 1] + sorted[len / 2]) as f64 / 2.0
    } else {
        sorted[len / 2] as f64
    };
    let sum: usize = sorted.iter().sum();
    let mean = sum as f64 / len as f64;
    let std_dev = (sorted
        .iter()
        .map(|&x| (x as f64 - mean).powi(2))
        .sum::<f64>()
        / len as f64)
        .sqrt();
    let (min, max) = match sorted.iter().minmax() {
        MinMaxResult::NoElements => (0, 0),
        MinMaxResult::OneElement(&x) => (x, x),
        MinMaxResult::MinMax(&min, &max) => (min, max),
    };
    Stats {
        min,
        max,
        mean,
        median,
        std_dev,
    }
}

#[derive(Debug, Default, PartialEq)]
struct Stats {
    min: usize,
    max: usize,
    mean: f64,
    median: f64,
    std_dev: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_stats() {
        let stats = calculate_stats(&[4, 2, 2, 8]);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 8);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.mean, 4.0);
        assert!((stats.std_dev - 6.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_stats_empty() {
        assert_eq!(calculate_stats(&[]), Stats::default());
    }

    #[test]
    fn test_calculate_coverage() {
        let loci = vec![
            LocusRecord::new("S1", "ACGT"),
            LocusRecord::new("S2", "AA"),
        ];
        let predictions = vec![
            PredictionRecord::new("S1", 0, 0.5),
            PredictionRecord::new("S1", 3, 0.5),
            PredictionRecord::new("S1", 9, 0.5),
            PredictionRecord::new("S3", 0, 0.5),
            PredictionRecord::new("S3", 1, 0.5),
        ];
        let coverage = calculate_coverage(&loci, &predictions);
        assert_eq!(
            coverage,
            Coverage {
                total_positions: 6,
                matched_positions: 2,
                matched_loci: 1,
                unmatched_ids: 1,
            }
        );
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(0, 0), 0.0);
    }
}
