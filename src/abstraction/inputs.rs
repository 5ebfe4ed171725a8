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

//! This module defines the two oracles through which the algorithms look at
//! an instance: a cost oracle for the travelling salesman solver and an edge
//! oracle for the circuit enumerator.

use crate::Cost;

/// This trait defines the "contract" of what the travelling salesman solver
/// expects from an instance: a number of vertices and the cost of travelling
/// from any vertex to any other. Vertices are identified with the integers
/// `0..nb_vertices()`, and vertex `0` is always the tour origin.
///
/// The stock implementation is `DistanceMatrix`, but nothing prevents you
/// from implementing this trait directly when your distances are computed
/// rather than tabulated (euclidean coordinates, say).
pub trait Distances {
    /// Returns the number of vertices of the instance.
    fn nb_vertices(&self) -> usize;
    /// Returns the cost of travelling from vertex `from` to vertex `to`.
    /// The solver consults the costs exactly as given: it assumes nothing
    /// about symmetry, and `distance(i, i)` is never requested. The returned
    /// cost must be lower than `Cost::MAX`, which the solver reserves as its
    /// "unreached" sentinel.
    fn distance(&self, from: usize, to: usize) -> Cost;
}

/// This trait defines the "contract" of what the circuit enumerator expects
/// from an instance: a finite vertex set in a deterministic order and an
/// edge membership test. Vertices are identified with the integers
/// `0..nb_vertices()`; each id maps back to the label your input used for
/// that vertex.
///
/// Adjacency is consulted exactly as given: symmetric edges are what you
/// want for undirected semantics, but nothing enforces the symmetry, and a
/// one-way edge will simply never validate in the other direction.
pub trait Adjacency {
    /// The type of the vertex labels ('A', "Brussels", 42, .. whatever your
    /// input names its vertices with).
    type Label;

    /// Returns the number of vertices of the instance.
    fn nb_vertices(&self) -> usize;
    /// Returns the label of the vertex identified by the given id. The
    /// mapping from ids to labels is fixed and deterministic: enumerating
    /// twice yields the very same circuits in the very same order.
    fn label(&self, id: usize) -> &Self::Label;
    /// Returns true iff the instance comprises an edge going from the vertex
    /// identified by `from` to the one identified by `to`.
    fn connected(&self, from: usize, to: usize) -> bool;
}
