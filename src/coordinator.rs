//! Root-only concerns: seeding the array, timing the run, and collecting
//! the final sequence.

use crate::data_structures::{Config, Elem, SortReport};
use crate::worker::WorkerState;

use mpi::traits::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use std::time::Instant;

/// The default seed data: the descending run `n, n-1, .., 1`. Worst case
/// for the exchange sort, and trivially checkable.
pub fn descending_run(n: usize) -> Vec<Elem> {
    (1..=n as Elem).rev().collect()
}

/// Uniform fill from a seeded generator, identical across runs for the same
/// seed.
pub fn random_run(n: usize, seed: u64) -> Vec<Elem> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

pub struct CoordinatorState<'a, C: Communicator> {
    comm: &'a C,
    cfg: Config,
}

impl<'a, C: Communicator> CoordinatorState<'a, C> {
    pub fn new(comm: &'a C, cfg: Config) -> Self {
        CoordinatorState { comm, cfg }
    }

    /// Drives the whole sort from rank 0. The clock starts when distribution
    /// begins and stops once the fully merged sequence is back in hand.
    pub fn run(&self, data: Vec<Elem>) -> SortReport {
        let start = Instant::now();
        let sorted = WorkerState::new(self.comm, self.cfg).sort_segment(data);
        let elapsed = start.elapsed();
        SortReport { sorted, elapsed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_run_counts_down_to_one() {
        assert_eq!(descending_run(5), vec![5, 4, 3, 2, 1]);
        assert_eq!(descending_run(1), vec![1]);
        assert!(descending_run(0).is_empty());
    }

    #[test]
    fn random_run_is_deterministic_per_seed() {
        assert_eq!(random_run(100, 7), random_run(100, 7));
        assert_ne!(random_run(100, 7), random_run(100, 8));
        assert_eq!(random_run(100, 7).len(), 100);
    }
}
