use super::{base_color, prediction_alpha, probability_label, Base};
use crate::parse::{LocusRecord, PredictionRecord};
use cellgrid::Color;
use rayon::prelude::*;
use std::collections::HashMap;

/// Raw base letter with the color of the base itself.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCell {
    pub symbol: char,
    pub color: Option<Color>,
}

/// Prediction for the complement of a base. All fields are empty when no
/// prediction matches the position.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionCell {
    pub complement: Option<Base>,
    pub probability: Option<f64>,
    pub fill: Option<Color>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// 1-based
    pub number: usize,
    pub base: BaseCell,
    pub prediction: PredictionCell,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocusTable {
    pub id: String,
    pub locus: String,
    pub positions: Vec<Position>,
}

impl LocusTable {
    pub fn title(&self) -> String {
        format!("{}: {}", self.id, self.locus)
    }

    pub fn num_matched(&self) -> usize {
        self.positions
            .iter()
            .filter(|pos| pos.prediction.probability.is_some())
            .count()
    }
}

/// Predictions keyed by sequence id and then by base index. When the same
/// (id, index) pair occurs more than once the earliest record is kept.
#[derive(Debug, Default)]
pub struct PredictionIndex<'a> {
    by_id: HashMap<&'a str, HashMap<usize, &'a PredictionRecord>>,
}

impl<'a> PredictionIndex<'a> {
    pub fn new(predictions: &'a [PredictionRecord]) -> Self {
        let mut by_id: HashMap<&'a str, HashMap<usize, &'a PredictionRecord>> = HashMap::new();
        for prediction in predictions {
            by_id
                .entry(prediction.id.as_str())
                .or_default()
                .entry(prediction.index)
                .or_insert(prediction);
        }
        Self { by_id }
    }

    pub fn find(&self, id: &str, index: usize) -> Option<&'a PredictionRecord> {
        self.by_id
            .get(id)
            .and_then(|positions| positions.get(&index))
            .copied()
    }
}

/// Builds one table per locus record, in input order. No tables are built
/// unless both record sets are non-empty.
pub fn correlate(loci: &[LocusRecord], predictions: &[PredictionRecord]) -> Vec<LocusTable> {
    if loci.is_empty() || predictions.is_empty() {
        return Vec::new();
    }
    let index = PredictionIndex::new(predictions);
    loci.par_iter()
        .map(|locus| build_table(locus, &index))
        .collect()
}

fn build_table(locus: &LocusRecord, index: &PredictionIndex) -> LocusTable {
    let positions = locus
        .locus
        .chars()
        .enumerate()
        .map(|(k, symbol)| build_position(&locus.id, k, symbol, index))
        .collect();
    log::debug!("Built table for {} ({} bases)", locus.id, locus.locus.len());
    LocusTable {
        id: locus.id.clone(),
        locus: locus.locus.clone(),
        positions,
    }
}

fn build_position(id: &str, k: usize, symbol: char, index: &PredictionIndex) -> Position {
    let base = Base::from_char(symbol);
    let complement = base.map(Base::complement);

    let prediction = match index.find(id, k) {
        Some(record) => PredictionCell {
            complement,
            probability: Some(record.probability),
            fill: complement.map(|c| base_color(c, prediction_alpha(record.probability))),
            label: probability_label(record.probability),
        },
        None => PredictionCell {
            complement,
            probability: None,
            fill: None,
            label: String::new(),
        },
    };

    Position {
        number: k + 1,
        base: BaseCell {
            symbol,
            color: base.map(|b| base_color(b, 1.0)),
        },
        prediction,
    }
}
