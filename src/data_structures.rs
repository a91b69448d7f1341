use std::time::Duration;

/// Element type carried by every segment. A segment of length n travels as
/// n of these, using the element's MPI equivalent datatype.
pub type Elem = i32;

/// Per-run settings, parsed once at launch and passed into the drivers by
/// value. Every rank of a run holds an identical copy.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Segments of this length or shorter are sorted in place instead of
    /// being split between child ranks.
    pub delta: usize,
    /// Print per-rank protocol progress and the input/output sequences.
    pub debug: bool,
}

/// What the root ends up holding: the merged sequence and the wall-clock
/// time from the start of distribution to its receipt.
#[derive(Clone, Debug)]
pub struct SortReport {
    pub sorted: Vec<Elem>,
    pub elapsed: Duration,
}
