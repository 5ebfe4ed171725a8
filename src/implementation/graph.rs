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

//! This module provides the stock edge oracle: a labelled graph built from
//! an adjacency mapping.

use std::fmt::Debug;
use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

use crate::{Adjacency, Error, Result};

/// A labelled graph, the stock implementation of the `Adjacency` oracle.
/// It is built from a mapping associating each vertex label with the labels
/// of its neighbours, exactly the shape of a textbook adjacency list.
///
/// The set of vertices is the set of mapping *keys*: naming a neighbour
/// which is not itself a key is a malformed instance. To make enumeration
/// reproducible whatever the iteration order of your mapping, the labels are
/// sorted and the vertex ids `0..n` are assigned in that sorted order.
///
/// Edges are recorded exactly as given. Feeding a symmetric mapping yields
/// the usual undirected semantics; a one-sided entry yields a directed edge
/// that will never validate in the other direction.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// The vertex labels, in ascending order. The position of a label in
    /// this vector is the id of the vertex it denotes.
    labels: Vec<T>,
    /// The reverse mapping, from label back to vertex id.
    index: FxHashMap<T, usize>,
    /// The successors of each vertex, by id.
    succ: Vec<FxHashSet<usize>>,
}

impl<T> Graph<T>
where
    T: Clone + Eq + Hash + Ord + Debug,
{
    /// Builds a graph from an adjacency mapping. The two ways for the
    /// mapping to be malformed, a label declared as a vertex twice and a
    /// neighbour which is not a vertex, are both detected here and reported
    /// as `InvalidInput`. An empty mapping denotes the valid empty graph.
    pub fn from_adjacency(adjacency: impl IntoIterator<Item = (T, Vec<T>)>) -> Result<Self> {
        let entries: Vec<(T, Vec<T>)> = adjacency.into_iter().collect();

        let mut labels: Vec<T> = entries.iter().map(|(vertex, _)| vertex.clone()).collect();
        labels.sort_unstable();

        let mut index = FxHashMap::default();
        for (id, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), id).is_some() {
                return Err(Error::invalid_input(format!(
                    "vertex {label:?} is declared twice"
                )));
            }
        }

        let mut succ = vec![FxHashSet::default(); labels.len()];
        for (vertex, neighbours) in entries {
            let from = index[&vertex];
            for neighbour in neighbours {
                match index.get(&neighbour) {
                    Some(&to) => {
                        succ[from].insert(to);
                    }
                    None => {
                        return Err(Error::invalid_input(format!(
                            "vertex {vertex:?} names {neighbour:?} as a neighbour \
                             but no such vertex exists"
                        )))
                    }
                }
            }
        }

        Ok(Graph { labels, index, succ })
    }

    /// Returns the id of the vertex carrying the given label, if any.
    pub fn id_of(&self, label: &T) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the vertex labels in ascending order. The position of each
    /// label is the id of the vertex it denotes.
    pub fn labels(&self) -> &[T] {
        &self.labels
    }
}

impl<T> Adjacency for Graph<T> {
    type Label = T;

    fn nb_vertices(&self) -> usize {
        self.labels.len()
    }

    fn label(&self, id: usize) -> &T {
        &self.labels[id]
    }

    fn connected(&self, from: usize, to: usize) -> bool {
        self.succ[from].contains(&to)
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_graph {
    use crate::*;

    #[test]
    fn ids_follow_the_sorted_label_order() {
        let graph = Graph::from_adjacency(vec![
            ('C', vec!['A']),
            ('A', vec!['C', 'B']),
            ('B', vec!['A']),
        ])
        .unwrap();

        assert_eq!(&['A', 'B', 'C'], graph.labels());
        assert_eq!(Some(0), graph.id_of(&'A'));
        assert_eq!(Some(1), graph.id_of(&'B'));
        assert_eq!(Some(2), graph.id_of(&'C'));
        assert_eq!(None, graph.id_of(&'Z'));
    }

    #[test]
    fn edges_are_recorded_exactly_as_given() {
        let graph = Graph::from_adjacency(vec![
            ('A', vec!['B']),
            ('B', vec![]),
        ])
        .unwrap();

        assert!(graph.connected(0, 1));
        assert!(!graph.connected(1, 0));
    }

    #[test]
    fn an_unknown_neighbour_is_rejected() {
        let result = Graph::from_adjacency(vec![
            ('A', vec!['B']),
            ('B', vec!['A', 'D']),
        ]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn a_vertex_declared_twice_is_rejected() {
        let result = Graph::from_adjacency(vec![
            ('A', vec!['B']),
            ('B', vec!['A']),
            ('A', vec![]),
        ]);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn the_empty_mapping_is_a_valid_graph() {
        let graph: Graph<char> = Graph::from_adjacency(vec![]).unwrap();
        assert_eq!(0, graph.nb_vertices());
    }

    #[test]
    fn labels_need_not_be_chars() {
        let graph = Graph::from_adjacency(vec![
            ("rome", vec!["oslo"]),
            ("oslo", vec!["rome"]),
        ])
        .unwrap();

        assert_eq!(&["oslo", "rome"], graph.labels());
        assert!(graph.connected(0, 1));
        assert!(graph.connected(1, 0));
    }
}
