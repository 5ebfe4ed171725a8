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

//! This module provides the definition of a sequential Hamiltonian circuit
//! enumerator. Like for the solvers, it is the reference execution: the
//! parallel enumerator is defined as producing exactly its output.

use crate::{
    implementation::enumerator::search::anchored_search, Adjacency, Circuit, CircuitEnumerator,
};

/// A single-threaded exhaustive enumerator. It anchors the search on the
/// vertex with id 0 (the smallest label of the instance) so that every
/// circuit is reported once instead of once per rotation, and explores the
/// extensions in ascending id order so that the output order is fixed.
///
/// # Example
/// ```
/// # use hamil::*;
/// let graph = Graph::from_adjacency(vec![
///     ('A', vec!['B', 'C']),
///     ('B', vec!['A', 'C', 'D']),
///     ('C', vec!['A', 'B', 'D']),
///     ('D', vec!['B', 'C']),
/// ]).unwrap();
///
/// let mut enumerator = SequentialEnumerator::new(&graph);
/// let circuits = enumerator.enumerate();
///
/// assert_eq!(vec![
///     vec!['A', 'B', 'D', 'C'],
///     vec!['A', 'C', 'D', 'B'],
/// ], circuits);
/// ```
pub struct SequentialEnumerator<'a, A: Adjacency> {
    /// The edge oracle describing the instance to enumerate.
    graph: &'a A,
}

impl<'a, A: Adjacency> SequentialEnumerator<'a, A> {
    pub fn new(graph: &'a A) -> Self {
        SequentialEnumerator { graph }
    }
}

impl<A> CircuitEnumerator for SequentialEnumerator<'_, A>
where
    A: Adjacency,
    A::Label: Clone,
{
    type Label = A::Label;

    fn enumerate(&mut self) -> Vec<Circuit<A::Label>> {
        let n = self.graph.nb_vertices();
        if n == 0 {
            return vec![];
        }
        if n == 1 {
            // a lone vertex is trivially a circuit, no self-loop required
            return vec![vec![self.graph.label(0).clone()]];
        }

        let circuits = anchored_search(self.graph, &[0]);
        log::info!("circuits.seq: n={n} found={}", circuits.len());
        circuits
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_sequential {
    use crate::*;

    fn scenario() -> Graph<char> {
        Graph::from_adjacency(vec![
            ('A', vec!['B', 'C']),
            ('B', vec!['A', 'C', 'D']),
            ('C', vec!['A', 'B', 'D']),
            ('D', vec!['B', 'C']),
        ])
        .unwrap()
    }

    #[test]
    fn the_reference_scenario_yields_its_two_circuits() {
        let graph = scenario();
        let circuits = SequentialEnumerator::new(&graph).enumerate();

        assert_eq!(
            vec![vec!['A', 'B', 'D', 'C'], vec!['A', 'C', 'D', 'B']],
            circuits
        );
    }

    #[test]
    fn anchoring_is_immune_to_the_order_of_the_mapping() {
        let scrambled = Graph::from_adjacency(vec![
            ('D', vec!['B', 'C']),
            ('B', vec!['A', 'C', 'D']),
            ('A', vec!['B', 'C']),
            ('C', vec!['A', 'B', 'D']),
        ])
        .unwrap();
        let circuits = SequentialEnumerator::new(&scrambled).enumerate();

        assert_eq!(
            vec![vec!['A', 'B', 'D', 'C'], vec!['A', 'C', 'D', 'B']],
            circuits
        );
    }

    #[test]
    fn a_disconnected_graph_has_no_circuit() {
        let graph = Graph::from_adjacency(vec![
            ('A', vec!['B']),
            ('B', vec!['A']),
            ('C', vec!['D']),
            ('D', vec!['C']),
        ])
        .unwrap();

        assert!(SequentialEnumerator::new(&graph).enumerate().is_empty());
    }

    #[test]
    fn the_empty_graph_has_no_circuit() {
        let graph: Graph<char> = Graph::from_adjacency(vec![]).unwrap();
        assert!(SequentialEnumerator::new(&graph).enumerate().is_empty());
    }

    #[test]
    fn a_single_vertex_is_a_trivial_circuit() {
        let graph = Graph::from_adjacency(vec![('A', vec![])]).unwrap();
        assert_eq!(
            vec![vec!['A']],
            SequentialEnumerator::new(&graph).enumerate()
        );
    }

    #[test]
    fn two_vertices_close_into_a_degenerate_circuit() {
        let graph = Graph::from_adjacency(vec![
            ('A', vec!['B']),
            ('B', vec!['A']),
        ])
        .unwrap();

        assert_eq!(
            vec![vec!['A', 'B']],
            SequentialEnumerator::new(&graph).enumerate()
        );
    }

    #[test]
    fn a_one_way_edge_never_validates_backwards() {
        // the directed triangle turns one way only
        let graph = Graph::from_adjacency(vec![
            ('A', vec!['B']),
            ('B', vec!['C']),
            ('C', vec!['A']),
        ])
        .unwrap();

        assert_eq!(
            vec![vec!['A', 'B', 'C']],
            SequentialEnumerator::new(&graph).enumerate()
        );
    }
}
