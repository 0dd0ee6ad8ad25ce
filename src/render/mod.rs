mod grid;
mod tsv;

pub use grid::{build_grid, GridLayout};
pub use tsv::write_tsv;
