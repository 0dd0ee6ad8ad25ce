use crate::correlate::{correlate, LocusTable};
use crate::parse::{LocusRecord, PredictionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// At least one of the record sets is empty
    Empty,
    /// Both record sets hold records
    Populated,
}

/// Session epoch captured when a load starts. Results carrying a ticket
/// from before the latest clear are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

/// Owns the two record sets. Each set is only ever replaced as a whole.
#[derive(Debug, Default)]
pub struct Session {
    epoch: u64,
    loci: Vec<LocusRecord>,
    predictions: Vec<PredictionRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> Ticket {
        Ticket { epoch: self.epoch }
    }

    pub fn state(&self) -> SessionState {
        if self.loci.is_empty() || self.predictions.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Populated
        }
    }

    pub fn loci(&self) -> &[LocusRecord] {
        &self.loci
    }

    pub fn predictions(&self) -> &[PredictionRecord] {
        &self.predictions
    }

    /// Replaces the locus records. Returns false if the ticket is stale.
    pub fn set_loci(&mut self, ticket: Ticket, loci: Vec<LocusRecord>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loci = loci;
        true
    }

    /// Replaces the prediction records. Returns false if the ticket is stale.
    pub fn set_predictions(&mut self, ticket: Ticket, predictions: Vec<PredictionRecord>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.predictions = predictions;
        true
    }

    /// Drops both record sets and invalidates every outstanding ticket.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.loci = Vec::new();
        self.predictions = Vec::new();
    }

    /// Render-ready tables, or `None` while the session is empty.
    pub fn tables(&self) -> Option<Vec<LocusTable>> {
        match self.state() {
            SessionState::Empty => None,
            SessionState::Populated => Some(correlate(&self.loci, &self.predictions)),
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.epoch == self.epoch
    }
}
