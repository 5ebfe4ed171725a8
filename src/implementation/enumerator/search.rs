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

//! This module provides the common core of both enumerators: an explicit
//! recursive generator producing the vertex orderings of the instance one
//! extension at a time, in lexicographic id order, anchored on whatever
//! prefix it is given. An ordering only ever grows along existing edges and
//! is emitted as a circuit when its wraparound edge (back to the anchor)
//! exists too; a candidate permutation is thereby abandoned at the first
//! consecutive pair which is no edge, which changes nothing to the set nor
//! to the order of the emitted circuits compared to filtering complete
//! permutations one by one.

use crate::{Adjacency, Circuit};

/// Runs the search from the given nonempty prefix of vertex ids and returns
/// every circuit of the instance extending that prefix, in lexicographic
/// order of the extensions. A prefix which is not itself a chain of edges
/// yields nothing.
pub(crate) fn anchored_search<A>(graph: &A, prefix: &[usize]) -> Vec<Circuit<A::Label>>
where
    A: Adjacency,
    A::Label: Clone,
{
    debug_assert!(!prefix.is_empty());

    let mut circuits = vec![];
    if prefix.windows(2).any(|leg| !graph.connected(leg[0], leg[1])) {
        return circuits;
    }

    let mut used = vec![false; graph.nb_vertices()];
    for &vertex in prefix {
        used[vertex] = true;
    }
    let mut path = prefix.to_vec();
    extend(graph, &mut path, &mut used, &mut circuits);
    circuits
}

/// Tries every admissible one-vertex extension of the current path, in
/// ascending id order. A complete path is emitted iff the edge closing it
/// back onto its first vertex exists.
fn extend<A>(
    graph: &A,
    path: &mut Vec<usize>,
    used: &mut [bool],
    circuits: &mut Vec<Circuit<A::Label>>,
) where
    A: Adjacency,
    A::Label: Clone,
{
    let n = graph.nb_vertices();
    let last = path[path.len() - 1];

    if path.len() == n {
        if graph.connected(last, path[0]) {
            circuits.push(path.iter().map(|&id| graph.label(id).clone()).collect());
        }
        return;
    }

    for next in 0..n {
        if !used[next] && graph.connected(last, next) {
            path.push(next);
            used[next] = true;
            extend(graph, path, used, circuits);
            path.pop();
            used[next] = false;
        }
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_search {
    use super::anchored_search;
    use crate::*;

    fn square() -> Graph<usize> {
        Graph::from_adjacency(vec![
            (0, vec![1, 3]),
            (1, vec![0, 2]),
            (2, vec![1, 3]),
            (3, vec![0, 2]),
        ])
        .unwrap()
    }

    #[test]
    fn extensions_come_out_in_lexicographic_order() {
        let graph = square();
        let circuits = anchored_search(&graph, &[0]);
        assert_eq!(vec![vec![0, 1, 2, 3], vec![0, 3, 2, 1]], circuits);
    }

    #[test]
    fn a_longer_prefix_narrows_the_search() {
        let graph = square();
        assert_eq!(vec![vec![0, 1, 2, 3]], anchored_search(&graph, &[0, 1]));
        assert_eq!(vec![vec![0, 3, 2, 1]], anchored_search(&graph, &[0, 3]));
    }

    #[test]
    fn a_prefix_which_is_no_chain_yields_nothing() {
        let graph = square();
        assert!(anchored_search(&graph, &[0, 2]).is_empty());
    }
}
