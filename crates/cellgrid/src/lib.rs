/*!
This crate renders "cell grids": stacks of titled panels, each made of rows of
fixed-width cells. Every cell carries an optional translucent fill and a
centered text label. Grids are rendered as SVG, PNG, PDF, or as an HTML page
wrapping the SVG.

Cell grids are useful for showing per-base values along short sequences.
*/

mod common;
mod grid;
mod image;
mod pdf;
mod png;
mod svg;

pub use common::prepare_svg_tree;
pub use grid::{Cell, Color, Grid, Panel, Row};
pub use image::{generate as generate_image, FileType};
pub use svg::generate_string as generate_svg_string;
