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

//! This module provides the definition of a sequential tsp solver. It is
//! the reference execution of the Held-Karp dynamic program: everything the
//! parallel solver produces is defined as "exactly what the sequential
//! solver would have produced".

use crate::{
    implementation::solver::table::{close, expand, levels, members, StateTable},
    Distances, Error, Result, Tour, TourSolver,
};

/// A single-threaded exact solver. It fills the state table one level at a
/// time, each level in ascending mask order, closes the cycle back to the
/// origin and rebuilds the winning path from the back-pointers.
///
/// # Example
/// ```
/// # use hamil::*;
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![ 0, 20, 42, 35],
///     vec![20,  0, 30, 34],
///     vec![42, 30,  0, 12],
///     vec![35, 34, 12,  0],
/// ]).unwrap();
///
/// let mut solver = SequentialSolver::new(&matrix);
/// let tour = solver.minimize().unwrap();
///
/// assert_eq!(97, tour.cost);
/// assert_eq!(vec![0, 3, 2, 1, 0], tour.path);
/// ```
pub struct SequentialSolver<'a, D: Distances> {
    /// The cost oracle describing the instance to solve.
    distances: &'a D,
    /// The tour found by the last successful resolution, if any.
    best: Option<Tour>,
}

impl<'a, D: Distances> SequentialSolver<'a, D> {
    pub fn new(distances: &'a D) -> Self {
        SequentialSolver { distances, best: None }
    }
}

impl<D: Distances> TourSolver for SequentialSolver<'_, D> {
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
            for &mask in masks {
                for terminal in members(mask) {
                    let cell = expand(self.distances, &table, mask, terminal);
                    table.set(mask, terminal, cell);
                }
            }
            log::debug!("tsp.seq: level {size} done ({} subsets)", masks.len());
        }

        let (cost, terminal) = close(self.distances, &table);
        if terminal == 0 {
            return Err(Error::invalid_input("the distance oracle yields no finite tour"));
        }
        let path = table.reconstruct(terminal);
        log::info!("tsp.seq: n={n} states={} optimum={cost}", table.nb_states());

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
