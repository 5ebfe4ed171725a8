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

//! This module provides the stock cost oracle: a dense distance matrix kept
//! in one flat allocation.

use crate::{Cost, Distances, Error, Result};

/// A dense `n x n` distance matrix, the stock implementation of the
/// `Distances` oracle. Entry `[i][j]` is the cost of travelling from vertex
/// `i` to vertex `j`. The matrix is consulted exactly as given: asymmetric
/// entries are legitimate and used as such, and the diagonal is assumed to
/// be zero but never read by the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    /// The number of vertices (rows and columns alike).
    nb_vertices: usize,
    /// The costs, laid out row after row.
    costs: Vec<Cost>,
}

impl DistanceMatrix {
    /// Builds a matrix from its rows. The shape is validated eagerly: every
    /// row must count exactly as many entries as there are rows, and any
    /// raggedness is reported as `InvalidInput` before anything else runs.
    /// Zero rows denote the valid (empty) 0-vertex instance.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let nb_vertices = rows.len();
        let mut costs = Vec::with_capacity(nb_vertices * nb_vertices);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != nb_vertices {
                return Err(Error::invalid_input(format!(
                    "row {i} has {} entries for {nb_vertices} vertices",
                    row.len()
                )));
            }
            costs.extend(row);
        }
        Ok(DistanceMatrix { nb_vertices, costs })
    }
}

impl Distances for DistanceMatrix {
    fn nb_vertices(&self) -> usize {
        self.nb_vertices
    }

    fn distance(&self, from: usize, to: usize) -> Cost {
        self.costs[from * self.nb_vertices + to]
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
