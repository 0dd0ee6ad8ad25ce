pub mod export;
pub mod plot;
pub mod validate;

use crate::correlate::LocusTable;
use crate::session::Session;
use crate::utils::Result;
use rayon::ThreadPoolBuilder;

/// Correlates the session on a thread pool of `num_threads` threads,
/// optionally keeping only the loci with id `locus_id`.
pub(crate) fn build_tables(
    session: &Session,
    locus_id: Option<&str>,
    num_threads: usize,
) -> Result<Vec<LocusTable>> {
    log::debug!("Initializing thread pool with {} threads...", num_threads);
    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("locusview-{}", i))
        .build()
        .map_err(|e| format!("Failed to initialize thread pool: {}", e))?;

    let tables = pool
        .install(|| session.tables())
        .ok_or("Nothing to render: no loci or no predictions were loaded")?;

    match locus_id {
        None => Ok(tables),
        Some(id) => {
            let selected: Vec<_> = tables.into_iter().filter(|t| t.id == id).collect();
            if selected.is_empty() {
                Err(format!("Locus id not found: {}", id))
            } else {
                Ok(selected)
            }
        }
    }
}
