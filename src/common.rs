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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

// ----------------------------------------------------------------------------
// --- COST -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The cost of an edge or of a complete tour. Costs are plain signed machine
/// integers: when your distances are fractional, scale them by a constant
/// factor before building the matrix so that every comparison made by the
/// solver stays exact. `Cost::MAX` is reserved by the solver to mean
/// "not reached yet" and must not appear among the input distances.
pub type Cost = isize;

// ----------------------------------------------------------------------------
// --- TOUR -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of an exact resolution: the cheapest travelling salesman tour
/// of the given distance matrix. For an instance counting `n >= 3` vertices,
/// the `path` comprises `n + 1` vertex ids: it starts and ends with the
/// origin (vertex `0`) and visits every other vertex exactly once in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// The total cost of the tour, that is, the sum of the distances of all
    /// the legs it traverses.
    pub cost: Cost,
    /// The ordered sequence of vertex ids realizing that cost.
    pub path: Vec<usize>,
}

impl Tour {
    /// This function returns the degenerate tour which stands for any
    /// instance counting two vertices or less. Such a "tour" involves no
    /// travelling at all: its cost is zero and its path is the sole origin.
    /// Callers must treat it as a sentinel, not as a general solution.
    pub fn trivial() -> Self {
        Tour { cost: 0, path: vec![0] }
    }

    /// This function returns the number of legs (edges) traversed by the
    /// tour. The trivial tour traverses none.
    ///
    /// # Examples:
    /// ```
    /// # use hamil::Tour;
    /// assert_eq!(0, Tour::trivial().nb_legs());
    /// assert_eq!(3, Tour { cost: 6, path: vec![0, 2, 1, 0] }.nb_legs());
    /// ```
    pub fn nb_legs(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// ----------------------------------------------------------------------------
// --- CIRCUIT ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One Hamiltonian circuit, expressed as the ordered sequence of the vertex
/// labels it traverses. The closing vertex is *not* repeated at the end of
/// the sequence: the wraparound from the last label back to the first one is
/// implied (append it yourself for display if you wish).
pub type Circuit<T> = Vec<T>;


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
