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

//! This module provides the definition of a parallel tsp solver. It exploits
//! the one independence the Held-Karp recurrence offers: every state of one
//! level depends on the previous level only, so all the states of a level
//! can be computed concurrently.

use std::thread;

use crate::{
    implementation::solver::table::{close, expand, levels, members, Cell, Mask, StateTable},
    Distances, Error, Result, Tour, TourSolver,
};

/// A multi-threaded exact solver producing bit-for-bit the result of the
/// sequential one. Each DP level is split into contiguous shards of masks;
/// scoped worker threads compute the cells of their shard against the
/// (frozen) previous levels and hand them back in owned buffers; the
/// coordinating thread then writes the buffers into the table in shard
/// order. Nothing about the outcome depends on thread scheduling: values,
/// tie-breaks and the final path are exactly those of a sequential run.
pub struct ParallelSolver<'a, D: Distances + Sync> {
    /// The cost oracle describing the instance to solve.
    distances: &'a D,
    /// The number of worker threads spawned on each DP level.
    nb_threads: usize,
    /// The tour found by the last successful resolution, if any.
    best: Option<Tour>,
}

impl<'a, D: Distances + Sync> ParallelSolver<'a, D> {
    /// Creates a solver using one worker per available hardware thread.
    pub fn new(distances: &'a D) -> Self {
        Self::custom(distances, num_cpus::get())
    }

    /// Creates a solver using the given number of workers (at least one).
    pub fn custom(distances: &'a D, nb_threads: usize) -> Self {
        ParallelSolver {
            distances,
            nb_threads: nb_threads.max(1),
            best: None,
        }
    }

    /// Sets the number of workers used by this solver.
    pub fn with_nb_threads(mut self, nb_threads: usize) -> Self {
        self.nb_threads = nb_threads.max(1);
        self
    }

    /// Computes one complete level of the dynamic program. The masks of the
    /// level are sharded, the cells of each shard are computed on a worker
    /// against a frozen view of the table, and the shards are merged back in
    /// order once every worker is done.
    fn process_level(&self, table: &mut StateTable, masks: &[Mask]) {
        let chunk = ((masks.len() + self.nb_threads - 1) / self.nb_threads).max(1);
        let mut buffers: Vec<Vec<Cell>> = vec![Vec::new(); masks.chunks(chunk).len()];

        {
            let distances = self.distances;
            let snapshot: &StateTable = table;
            thread::scope(|s| {
                for (shard, out) in masks.chunks(chunk).zip(buffers.iter_mut()) {
                    s.spawn(move || {
                        for &mask in shard {
                            for terminal in members(mask) {
                                out.push(expand(distances, snapshot, mask, terminal));
                            }
                        }
                    });
                }
            });
        }

        for (shard, cells) in masks.chunks(chunk).zip(buffers) {
            let mut cells = cells.into_iter();
            for &mask in shard {
                for terminal in members(mask) {
                    if let Some(cell) = cells.next() {
                        table.set(mask, terminal, cell);
                    }
                }
            }
        }
    }
}

impl<D: Distances + Sync> TourSolver for ParallelSolver<'_, D> {
    fn minimize(&mut self) -> Result<Tour> {
        let n = self.distances.nb_vertices();
        if n <= 2 {
            let tour = Tour::trivial();
            self.best = Some(tour.clone());
            return Ok(tour);
        }
        if n > usize::BITS as usize {
            return Err(Error::TooLarge { nb_vertices: n, max: usize::BITS as usize });
        }

        let nb_free = n - 1;
        let mut table = StateTable::new(nb_free);
        table.seed(self.distances);

        for (size, masks) in levels(nb_free).iter().enumerate().skip(2) {
            self.process_level(&mut table, masks);
            log::debug!(
                "tsp.par: level {size} done ({} subsets over {} threads)",
                masks.len(),
                self.nb_threads
            );
        }

        let (cost, terminal) = close(self.distances, &table);
        if terminal == 0 {
            return Err(Error::invalid_input("the distance oracle yields no finite tour"));
        }
        let path = table.reconstruct(terminal);
        log::info!(
            "tsp.par: n={n} threads={} states={} optimum={cost}",
            self.nb_threads,
            table.nb_states()
        );

        let tour = Tour { cost, path };
        self.best = Some(tour.clone());
        Ok(tour)
    }

    fn best_tour(&self) -> Option<&Tour> {
        self.best.as_ref()
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

/// The parallel solver is defined by one property: whatever the number of
/// workers, it returns exactly what the sequential solver returns. So that
/// is mostly what these tests check.
