mod readers;
mod util;

pub use readers::read_input;
pub use util::{handle_error_and_exit, Result};
