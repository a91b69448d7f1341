use clap::Parser;
use itertools::Itertools;
use mimalloc::MiMalloc;
use mpi::traits::*;

use mpi_sort::{
    coordinator::{descending_run, random_run, CoordinatorState},
    data_structures::Config,
    sort::is_sorted,
    worker::WorkerState,
    DEFAULT_DELTA,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// One rank of the distributed merge sort. Launch a pool of these under
/// mpirun; rank 0 seeds the array and reports, every other rank serves its
/// subtree of the implicit binary tree.
#[derive(Parser)]
struct Args {
    /// Number of elements to sort
    #[clap(long, value_name = "NUM")]
    size: usize,

    /// Segments of this length or shorter are sorted locally instead of
    /// being split between child ranks
    #[clap(long, value_name = "NUM", default_value_t = DEFAULT_DELTA)]
    delta: usize,

    /// Fill the array from this RNG seed instead of the descending run
    #[clap(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the input and output sequences and per-rank progress
    #[clap(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    assert!(args.size >= 1, "array size MUST be at least 1");
    assert!(args.delta >= 1, "delta MUST be at least 1");

    let universe = mpi::initialize().expect("failed to initialize MPI");
    let world = universe.world();
    let rank = world.rank();

    let cfg = Config {
        delta: args.delta,
        debug: args.debug,
    };

    if rank == 0 {
        let data = match args.seed {
            Some(seed) => random_run(args.size, seed),
            None => descending_run(args.size),
        };
        if cfg.debug {
            println!("unsorted: {}", data.iter().format(" "));
        }

        let report = CoordinatorState::new(&world, cfg).run(data);

        if cfg.debug {
            println!("sorted:   {}", report.sorted.iter().format(" "));
        }
        assert!(is_sorted(&report.sorted), "collected sequence is out of order");
        println!(
            "sorted {} elements across {} ranks in {:.6} s",
            args.size,
            world.size(),
            report.elapsed.as_secs_f64()
        );
    } else {
        WorkerState::new(&world, cfg).run();
    }
}
