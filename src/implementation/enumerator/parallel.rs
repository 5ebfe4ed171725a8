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

//! This module provides the definition of a parallel Hamiltonian circuit
//! enumerator. The search tree below the anchor splits into one independent
//! subtree per choice of the second vertex, which is the natural sharding
//! unit.

use std::thread;

use crate::{
    implementation::enumerator::search::anchored_search, Adjacency, Circuit, CircuitEnumerator,
};

/// A multi-threaded exhaustive enumerator producing exactly the output of
/// the sequential one. The candidates for the position right after the
/// anchor are split into contiguous shards; each worker explores the
/// subtrees of its shard in order and collects its circuits in an owned
/// buffer; the buffers are then concatenated in shard order, which restores
/// the sequential output order regardless of thread scheduling.
pub struct ParallelEnumerator<'a, A: Adjacency + Sync> {
    /// The edge oracle describing the instance to enumerate.
    graph: &'a A,
    /// The number of worker threads spawned by the enumeration.
    nb_threads: usize,
}

impl<'a, A: Adjacency + Sync> ParallelEnumerator<'a, A> {
    /// Creates an enumerator using one worker per available hardware thread.
    pub fn new(graph: &'a A) -> Self {
        Self::custom(graph, num_cpus::get())
    }

    /// Creates an enumerator using the given number of workers (at least
    /// one).
    pub fn custom(graph: &'a A, nb_threads: usize) -> Self {
        ParallelEnumerator { graph, nb_threads: nb_threads.max(1) }
    }

    /// Sets the number of workers used by this enumerator.
    pub fn with_nb_threads(mut self, nb_threads: usize) -> Self {
        self.nb_threads = nb_threads.max(1);
        self
    }
}

impl<A> CircuitEnumerator for ParallelEnumerator<'_, A>
where
    A: Adjacency + Sync,
    A::Label: Clone + Send,
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

        let candidates: Vec<usize> = (1..n).collect();
        let chunk = ((candidates.len() + self.nb_threads - 1) / self.nb_threads).max(1);
        let mut buffers: Vec<Vec<Circuit<A::Label>>> =
            vec![Vec::new(); candidates.chunks(chunk).len()];

        let graph = self.graph;
        thread::scope(|s| {
            for (shard, out) in candidates.chunks(chunk).zip(buffers.iter_mut()) {
                s.spawn(move || {
                    for &second in shard {
                        out.extend(anchored_search(graph, &[0, second]));
                    }
                });
            }
        });

        let circuits: Vec<_> = buffers.into_iter().flatten().collect();
        log::info!(
            "circuits.par: n={n} threads={} found={}",
            self.nb_threads,
            circuits.len()
        );
        circuits
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

/// The parallel enumerator is defined by one property: whatever the number
/// of workers, it returns exactly what the sequential enumerator returns,
/// in the same order. So that is mostly what these tests check.

#[cfg(test)]
mod test_parallel {
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

    fn complete(n: usize) -> Graph<usize> {
        Graph::from_adjacency((0..n).map(|v| {
            (v, (0..n).filter(|&w| w != v).collect())
        }))
        .unwrap()
    }

    #[test]
    fn it_agrees_with_the_sequential_enumerator_whatever_the_thread_count() {
        let graph = complete(6);
        let expected = SequentialEnumerator::new(&graph).enumerate();

        for nb_threads in [1, 2, 3, 8] {
            let circuits = ParallelEnumerator::custom(&graph, nb_threads).enumerate();
            assert_eq!(expected, circuits);
        }
    }

    #[test]
    fn it_finds_the_two_circuits_of_the_reference_scenario() {
        let graph = scenario();
        let circuits = ParallelEnumerator::new(&graph).enumerate();

        assert_eq!(
            vec![vec!['A', 'B', 'D', 'C'], vec!['A', 'C', 'D', 'B']],
            circuits
        );
    }

    #[test]
    fn degenerate_graphs_behave_like_in_the_sequential_case() {
        let empty: Graph<char> = Graph::from_adjacency(vec![]).unwrap();
        assert!(ParallelEnumerator::new(&empty).enumerate().is_empty());

        let lone = Graph::from_adjacency(vec![('A', vec![])]).unwrap();
        assert_eq!(vec![vec!['A']], ParallelEnumerator::new(&lone).enumerate());
    }

    #[test]
    fn a_zero_thread_count_is_clamped_to_one() {
        let graph = scenario();
        let circuits = ParallelEnumerator::custom(&graph, 0).enumerate();
        assert_eq!(2, circuits.len());
    }
}
