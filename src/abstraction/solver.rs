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

//! This module defines the behavior of the two result-producing facades of
//! the library: the exact travelling salesman solver and the Hamiltonian
//! circuit enumerator.

use crate::{Circuit, Result, Tour};

/// This trait describes the behavior of an exact travelling salesman solver.
/// Whatever the execution strategy (one thread or many), a solver consumes a
/// `Distances` oracle and produces the provably cheapest tour anchored at
/// vertex `0`. The resolution runs to completion: there is no internal
/// timeout and no approximation, so the only failures are a malformed oracle
/// or an instance too large to even represent.
pub trait TourSolver {
    /// Runs the resolution and returns the optimal tour. Equal-cost optima
    /// are disambiguated deterministically: among tied alternatives, the
    /// first candidate examined (candidates are examined in ascending
    /// vertex order) wins.
    fn minimize(&mut self) -> Result<Tour>;
    /// Returns the tour found by the last successful call to `minimize`,
    /// if any.
    fn best_tour(&self) -> Option<&Tour>;
}

/// This trait describes the behavior of an exhaustive Hamiltonian circuit
/// enumerator. Whatever the execution strategy, an enumerator consumes an
/// `Adjacency` oracle and produces *every* Hamiltonian circuit of the
/// instance, anchored on the vertex with id `0` to weed out rotational
/// duplicates (a circuit and its reversal are two distinct results when the
/// edges permit both). The output order is deterministic and identical
/// across implementations.
pub trait CircuitEnumerator {
    /// The type of the vertex labels of the underlying instance.
    type Label;

    /// Runs the exhaustive search and returns all the circuits it found.
    /// An instance admitting no circuit at all (disconnected, say) yields
    /// an empty vector, which is a perfectly valid outcome and not an error.
    fn enumerate(&mut self) -> Vec<Circuit<Self::Label>>;
}
