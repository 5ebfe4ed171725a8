// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This example shows how to use hamil to compute a provably optimal
//! travelling salesman tour. By default it solves the small four cities
//! instance that serves as a running example throughout the documentation;
//! pass `--size` to solve a randomly generated symmetric instance instead,
//! and `--threads` to do so with the parallel solver.

use std::time::Instant;

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};

use hamil::*;

/// Solve a travelling salesman instance to proven optimality.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The number of cities of a randomly generated symmetric instance.
    /// When this flag is omitted, the four cities instance from the
    /// documentation is solved instead.
    #[clap(short, long)]
    size: Option<usize>,
    /// The seed used to generate the random instance
    #[clap(long, default_value = "42")]
    seed: u64,
    /// The number of threads used to solve the instance. When this flag is
    /// omitted, the sequential solver runs.
    #[clap(short, long)]
    threads: Option<usize>,
    /// The maximum instance size (in cities) this driver agrees to submit
    /// to the solver
    #[clap(short, long)]
    max: Option<usize>,
}

/// The four cities instance used as a running example throughout the
/// documentation. Its optimal tour is `[0, 3, 2, 1, 0]` and costs 97.
fn reference_instance() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![ 0, 20, 42, 35],
        vec![20,  0, 30, 34],
        vec![42, 30,  0, 12],
        vec![35, 34, 12,  0],
    ])
    .unwrap()
}

/// Generates a random symmetric instance over the requested number of
/// cities, with distances drawn uniformly between 1 and 100.
fn random_instance(size: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![0; size]; size];
    for i in 0..size {
        for j in (i + 1)..size {
            let distance = rng.gen_range(1..=100);
            rows[i][j] = distance;
            rows[j][i] = distance;
        }
    }
    DistanceMatrix::from_rows(rows).unwrap()
}

/// This is your executable's entry point. It parses the command line, screens
/// the instance through the admission policy and solves it with the requested
/// flavor of the solver.
fn main() {
    env_logger::init();
    let args = Args::parse();

    let matrix = match args.size {
        Some(size) => random_instance(size, args.seed),
        None => reference_instance(),
    };

    let limits = match args.max {
        Some(max) => LimitsBuilder::default()
            .max_tour_vertices(max)
            .build()
            .unwrap(),
        None => Limits::default(),
    };
    if let Err(e) = limits.admit_tour(matrix.nb_vertices()) {
        eprintln!("refused: {e}");
        std::process::exit(1);
    }

    let start = Instant::now();
    let tour = match args.threads {
        Some(threads) => ParallelSolver::custom(&matrix, threads).minimize(),
        None => SequentialSolver::new(&matrix).minimize(),
    }
    .unwrap();
    let duration = start.elapsed();

    println!("Duration:   {:.3} seconds", duration.as_secs_f32());
    println!("Objective:  {}",            tour.cost);
    println!("Solution:   {:?}",          tour.path);
}
