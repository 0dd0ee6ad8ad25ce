use super::{Session, Ticket};
use crate::parse::{
    extract_loci, extract_predictions, parse_csv, Extraction, LocusRecord, PredictionRecord,
};
use crate::utils::{read_input, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fmt;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Loci,
    Predictions,
}

impl fmt::Display for InputKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputKind::Loci => write!(formatter, "output"),
            InputKind::Predictions => write!(formatter, "predictions"),
        }
    }
}

#[derive(Debug)]
pub enum Loaded {
    Loci(Extraction<LocusRecord>),
    Predictions(Extraction<PredictionRecord>),
}

#[derive(Debug)]
pub struct LoadMessage {
    pub ticket: Ticket,
    pub path: PathBuf,
    pub result: Result<Loaded>,
}

pub fn load_loci(path: &Path) -> Result<Extraction<LocusRecord>> {
    let bytes = read_input(path)?;
    Ok(extract_loci(&parse_csv(&bytes)))
}

pub fn load_predictions(path: &Path) -> Result<Extraction<PredictionRecord>> {
    let bytes = read_input(path)?;
    Ok(extract_predictions(&parse_csv(&bytes)))
}

/// Reads input files on background threads. Every finished load is sent back
/// over a channel and applied to the session by [`Loader::finish`], in
/// whatever order the loads complete.
pub struct Loader {
    sender: Sender<LoadMessage>,
    receiver: Receiver<LoadMessage>,
    handles: Vec<JoinHandle<()>>,
    strict: bool,
}

impl Loader {
    pub fn new(strict: bool) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            handles: Vec::new(),
            strict,
        }
    }

    pub fn spawn(&mut self, kind: InputKind, path: &Path, ticket: Ticket) {
        let sender = self.sender.clone();
        let path = path.to_path_buf();
        log::debug!("Loading {} file {}", kind, path.display());
        let handle = thread::spawn(move || {
            let result = match kind {
                InputKind::Loci => load_loci(&path).map(Loaded::Loci),
                InputKind::Predictions => load_predictions(&path).map(Loaded::Predictions),
            };
            if let Err(e) = sender.send(LoadMessage {
                ticket,
                path,
                result,
            }) {
                log::error!("Failed to send load result: {}", e);
            }
        });
        self.handles.push(handle);
    }

    /// Waits for all spawned loads and applies their results to `session`.
    /// A failed read is returned as an error once every load has finished.
    pub fn finish(self, session: &mut Session) -> Result<()> {
        let Loader {
            sender,
            receiver,
            handles,
            strict,
        } = self;
        drop(sender);

        let mut first_error = None;
        for message in &receiver {
            if let Err(e) = apply(session, message, strict) {
                log::debug!("Load failed: {}", e);
                first_error.get_or_insert(e);
            }
        }

        for handle in handles {
            handle
                .join()
                .map_err(|_| "Loader thread panicked".to_string())?;
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn apply(session: &mut Session, message: LoadMessage, strict: bool) -> Result<()> {
    let LoadMessage {
        ticket,
        path,
        result,
    } = message;
    let applied = match result? {
        Loaded::Loci(extraction) => {
            let records = accept(extraction, &path, strict)?;
            log::info!("Loaded {} loci from {}", records.len(), path.display());
            session.set_loci(ticket, records)
        }
        Loaded::Predictions(extraction) => {
            let records = accept(extraction, &path, strict)?;
            log::info!("Loaded {} predictions from {}", records.len(), path.display());
            session.set_predictions(ticket, records)
        }
    };
    if !applied {
        log::debug!("Discarding stale load of {}", path.display());
    }
    Ok(())
}

fn accept<T>(extraction: Extraction<T>, path: &Path, strict: bool) -> Result<Vec<T>> {
    if strict {
        return extraction
            .into_strict()
            .map_err(|e| format!("{}: {}", path.display(), e));
    }
    for failure in &extraction.failures {
        log::warn!("Skipping row in {}: {}", path.display(), failure);
    }
    Ok(extraction.records)
}

/// Loads both inputs concurrently into a fresh session.
pub fn load_inputs(predictions_path: &Path, loci_path: &Path, strict: bool) -> Result<Session> {
    let mut session = Session::new();
    let mut loader = Loader::new(strict);
    loader.spawn(InputKind::Predictions, predictions_path, session.ticket());
    loader.spawn(InputKind::Loci, loci_path, session.ticket());
    loader.finish(&mut session)?;
    Ok(session)
}
