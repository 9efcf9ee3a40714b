//! Concurrent fan-out of per-distributor evaluation with an ordered fan-in.
//!
//! Each distributor gets its own pre-sized slot, indexed by submission order.
//! A task writes only into its own slot, so no locking is needed and the
//! report order never depends on which task finishes first.

use crate::engine::evaluate;
use crate::model::{Distributor, Location};
use crate::report::{DomainReport, ResultBlock};
use rayon::{Scope, ThreadPool};
use tracing::{debug, info};

/// Evaluate every distributor against the catalog on the global rayon pool.
pub fn aggregate(distributors: &[Distributor], locations: &[Location]) -> DomainReport {
    let mut slots = empty_slots(distributors);
    dispatched(distributors, locations);
    rayon::scope(|s| fan_out(s, distributors, locations, &mut slots));
    DomainReport { blocks: slots }
}

/// Same as [`aggregate`], but runs the tasks on `pool`.
pub fn aggregate_in(
    pool: &ThreadPool,
    distributors: &[Distributor],
    locations: &[Location],
) -> DomainReport {
    let mut slots = empty_slots(distributors);
    dispatched(distributors, locations);
    pool.scope(|s| fan_out(s, distributors, locations, &mut slots));
    DomainReport { blocks: slots }
}

fn empty_slots(distributors: &[Distributor]) -> Vec<ResultBlock> {
    distributors
        .iter()
        .map(|d| ResultBlock {
            distributor: d.name.clone(),
            results: Vec::new(),
        })
        .collect()
}

fn dispatched(distributors: &[Distributor], locations: &[Location]) {
    info!(
        distributors = distributors.len(),
        locations = locations.len(),
        "dispatching evaluation"
    );
}

fn fan_out<'scope>(
    s: &Scope<'scope>,
    distributors: &'scope [Distributor],
    locations: &'scope [Location],
    slots: &'scope mut [ResultBlock],
) {
    for (index, (slot, distributor)) in slots.iter_mut().zip(distributors).enumerate() {
        s.spawn(move |_| {
            slot.results = evaluate(distributor, locations);
            debug!(
                index,
                distributor = %distributor.name,
                permitted = slot.permitted_count(),
                "distributor evaluated"
            );
        });
    }
}
