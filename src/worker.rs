//! The per-rank protocol driver.
//!
//! Every rank runs the same cycle: take ownership of a segment, either sort
//! it in place or split it between its two child ranks and merge what they
//! send back, then hand the result upward. Only where the segment comes from
//! and where it goes differs between the root and everyone else.

use crate::data_structures::{Config, Elem};
use crate::merge::interleave;
use crate::sort::local_sort;
use crate::topology::{has_both_children, left_child, parent, right_child};

use mpi::topology::Rank;
use mpi::traits::*;

/// Where a segment of this length is cut before the halves are handed out.
/// The merge step relies on the same convention, so this is the single place
/// it is written down.
pub fn split_point(len: usize) -> usize {
    len / 2
}

/// A rank splits its segment only when it strictly exceeds the threshold AND
/// both child ranks exist. Threshold alone is not enough: a rank near the
/// bottom of a too-shallow pool sorts locally even when its segment is far
/// larger than the threshold, and a rank with one in-range child index never
/// delegates to it alone.
pub fn should_delegate(rank: Rank, size: Rank, len: usize, delta: usize) -> bool {
    len > delta && has_both_children(rank, size)
}

pub struct WorkerState<'a, C: Communicator> {
    comm: &'a C,
    cfg: Config,
}

impl<'a, C: Communicator> WorkerState<'a, C> {
    pub fn new(comm: &'a C, cfg: Config) -> Self {
        WorkerState { comm, cfg }
    }

    /// The full cycle for a non-root rank: block until the parent sends a
    /// segment, sort it, send the sorted segment back.
    pub fn run(&self) {
        let rank = self.comm.rank();
        let source = parent(rank);

        let segment = self.acquire(source);
        let sorted = self.sort_segment(segment);

        if self.cfg.debug {
            println!(
                "[Worker {rank}] returning {} sorted elements to parent {source}",
                sorted.len()
            );
        }
        self.comm.process_at_rank(source).send(&sorted[..]);
    }

    /// Segment lengths are never negotiated ahead of time. Probe the pending
    /// message, size a fresh buffer from its element count, then complete
    /// the receive into it.
    fn acquire(&self, source: Rank) -> Vec<Elem> {
        let rank = self.comm.rank();
        if self.cfg.debug {
            println!("[Worker {rank}] waiting for a segment from parent {source}");
        }

        let (message, status) = self.comm.process_at_rank(source).matched_probe();
        let len = status.count(Elem::equivalent_datatype()) as usize;

        let mut segment = vec![0; len];
        let status = message.matched_receive_into(&mut segment[..]);
        assert_eq!(
            status.count(Elem::equivalent_datatype()) as usize,
            len,
            "[Worker {rank}] segment length changed between probe and receive"
        );
        segment
    }

    /// Delegate-or-conquer driver, shared by the root and the workers.
    pub fn sort_segment(&self, mut segment: Vec<Elem>) -> Vec<Elem> {
        let rank = self.comm.rank();
        let size = self.comm.size();
        let len = segment.len();

        if !should_delegate(rank, size, len, self.cfg.delta) {
            let passes = local_sort(&mut segment);
            if self.cfg.debug {
                println!("[Worker {rank}] sorted {len} elements locally in {passes} passes");
            }
            return segment;
        }

        let mid = split_point(len);
        let (left, right) = (left_child(rank), right_child(rank));
        if self.cfg.debug {
            println!(
                "[Worker {rank}] sending {mid} elements to child {left} and {} to child {right}",
                len - mid
            );
        }
        self.comm.process_at_rank(left).send(&segment[..mid]);
        self.comm.process_at_rank(right).send(&segment[mid..]);

        // The sorted halves land back in the positions they were cut from,
        // left first. A right child that finishes early stays queued in the
        // transport until the left half has arrived.
        let status = self.comm.process_at_rank(left).receive_into(&mut segment[..mid]);
        assert_eq!(
            status.count(Elem::equivalent_datatype()) as usize,
            mid,
            "[Worker {rank}] left child {left} returned a segment of the wrong length"
        );
        let status = self.comm.process_at_rank(right).receive_into(&mut segment[mid..]);
        assert_eq!(
            status.count(Elem::equivalent_datatype()) as usize,
            len - mid,
            "[Worker {rank}] right child {right} returned a segment of the wrong length"
        );

        if self.cfg.debug {
            println!("[Worker {rank}] merging {len} elements");
        }
        interleave(&segment)
    }
}
