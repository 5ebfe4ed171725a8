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

//! # HAMIL
//! HAMIL is a small library of exact algorithms over Hamiltonian cycles.
//! It does two things, and does both to provable optimality or exhaustion:
//!
//! 1. It solves the travelling salesman problem with the Held-Karp dynamic
//!    program over vertex subsets. This is the `O(2^n * n^2)` algorithm, the
//!    best exactness currently buys: the returned tour is the true global
//!    optimum, not a good guess.
//! 2. It enumerates *every* Hamiltonian circuit of a labelled graph by an
//!    anchored exhaustive search, so that each circuit is reported exactly
//!    once instead of once per rotation.
//!
//! Both computations are pure, deterministic functions without any internal
//! time limit: either you get the complete answer, or you get an error,
//! never something in between. Because the two algorithms are exponential by
//! design, the library also ships a `Limits` admission policy which wrapping
//! code is expected to run instances through before submitting them.
//!
//! ## Side benefit
//! Both algorithms come in a sequential and a parallel flavor, and the
//! parallel one is guaranteed to return bit-for-bit the result of the
//! sequential one (values, tie-breaks and output order included). Using all
//! of your cores never costs you reproducibility.
//!
//! ## Quick Example
//! The following solves a 4-city instance to optimality and then lists the
//! Hamiltonian circuits of a small labelled graph.
//!
//! ```
//! use hamil::*;
//!
//! fn main() -> Result<()> {
//!     let matrix = DistanceMatrix::from_rows(vec![
//!         vec![ 0, 20, 42, 35],
//!         vec![20,  0, 30, 34],
//!         vec![42, 30,  0, 12],
//!         vec![35, 34, 12,  0],
//!     ])?;
//!     let mut solver = SequentialSolver::new(&matrix);
//!     let tour = solver.minimize()?;
//!     assert_eq!(97, tour.cost);
//!     assert_eq!(vec![0, 3, 2, 1, 0], tour.path);
//!
//!     let graph = Graph::from_adjacency(vec![
//!         ('A', vec!['B', 'C']),
//!         ('B', vec!['A', 'C', 'D']),
//!         ('C', vec!['A', 'B', 'D']),
//!         ('D', vec!['B', 'C']),
//!     ])?;
//!     let mut enumerator = SequentialEnumerator::new(&graph);
//!     assert_eq!(vec![
//!         vec!['A', 'B', 'D', 'C'],
//!         vec!['A', 'C', 'D', 'B'],
//!     ], enumerator.enumerate());
//!     Ok(())
//! }
//! ```
//!
//! Swapping `SequentialSolver` for `ParallelSolver` (or the enumerators
//! alike) changes the wallclock, not the answer. The `demos` folder of our
//! repository shows both drivers end to end, admission checks included.

// I don't want to emit a lint warning because of the main method appearing
// in the crate documentation. It is specifically the purpose of that doc to
// show an example (including the main) of how to use the hamil library.
#![allow(clippy::needless_doctest_main)]

mod common;
mod errors;
mod abstraction;
mod implementation;

pub use common::*;
pub use errors::*;
pub use abstraction::*;
pub use implementation::*;
