mod base;
mod palette;
mod table;

pub use base::Base;
pub use palette::{base_color, prediction_alpha, probability_label};
pub use table::{
    correlate, BaseCell, LocusTable, Position, PredictionCell, PredictionIndex,
};
