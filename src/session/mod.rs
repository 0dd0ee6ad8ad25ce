mod load;
mod state;

pub use load::{load_inputs, load_loci, load_predictions, InputKind, LoadMessage, Loaded, Loader};
pub use state::{Session, SessionState, Ticket};
