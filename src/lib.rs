pub mod cli;
pub mod commands;
pub mod correlate;
pub mod parse;
pub mod render;
pub mod session;
pub mod utils;
