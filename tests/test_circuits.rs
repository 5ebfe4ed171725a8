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

#![cfg(test)]

//! These tests exercise the Hamiltonian circuit enumerator end to end. Every
//! circuit reported on random graphs is validated hop by hop (wraparound
//! included), the counts are checked against the closed form on complete
//! graphs, and the parallel enumerator is required to reproduce the
//! sequential listing exactly, order included.

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use hamil::*;

/// The four vertices graph used as a running example throughout the
/// documentation. It admits exactly two Hamiltonian circuits, one the
/// reverse of the other.
fn example_graph() -> Graph<&'static str> {
    Graph::from_adjacency(vec![
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "C", "D"]),
        ("C", vec!["A", "B", "D"]),
        ("D", vec!["B", "C"]),
    ])
    .unwrap()
}

/// A complete undirected graph over `n` vertices labeled `0..n`.
fn complete_graph(n: usize) -> Graph<usize> {
    let adjacency = (0..n)
        .map(|v| (v, (0..n).filter(|&w| w != v).collect()))
        .collect::<Vec<_>>();
    Graph::from_adjacency(adjacency).unwrap()
}

/// A random directed graph over `n` vertices where each possible edge is
/// present with probability `density`.
fn random_graph(n: usize, density: f64, seed: u64) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let adjacency = (0..n)
        .map(|v| {
            let succ = (0..n)
                .filter(|&w| w != v && rng.gen_bool(density))
                .collect();
            (v, succ)
        })
        .collect::<Vec<_>>();
    Graph::from_adjacency(adjacency).unwrap()
}

/// Checks that the circuit is Hamiltonian on the given graph: it visits
/// every vertex exactly once and each of its hops, the wraparound back to
/// the start included, follows an edge of the graph.
fn check_circuit(graph: &Graph<usize>, circuit: &[usize]) {
    let n = graph.nb_vertices();
    assert_eq!(n, circuit.len());

    let ids = circuit
        .iter()
        .map(|label| graph.id_of(label).expect("circuit names an unknown vertex"))
        .collect::<Vec<_>>();

    let mut seen = vec![false; n];
    for &id in &ids {
        assert!(!seen[id], "vertex {id} is visited twice");
        seen[id] = true;
    }

    for hop in ids.windows(2) {
        assert!(graph.connected(hop[0], hop[1]), "hop {hop:?} is not an edge");
    }
    assert!(
        graph.connected(ids[n - 1], ids[0]),
        "the wraparound hop is not an edge"
    );
}

#[test]
fn the_example_graph_yields_its_two_circuits_in_order() {
    let graph = example_graph();
    let circuits = SequentialEnumerator::new(&graph).enumerate();
    assert_eq!(
        vec![vec!["A", "B", "D", "C"], vec!["A", "C", "D", "B"]],
        circuits
    );
}

#[test]
fn every_circuit_reported_on_random_graphs_is_hamiltonian() {
    for n in 3..=7 {
        for seed in 0..3 {
            let graph = random_graph(n, 0.5, seed);
            let circuits = SequentialEnumerator::new(&graph).enumerate();

            for circuit in &circuits {
                check_circuit(&graph, circuit);
            }

            let unique = circuits.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), circuits.len(), "duplicate circuits reported");
        }
    }
}

#[test]
fn complete_graphs_have_factorial_many_circuits() {
    // starting vertex fixed, the others free: (n-1)! circuits
    for (n, expected) in [(3, 2), (4, 6), (5, 24), (6, 120)] {
        let graph = complete_graph(n);
        let circuits = SequentialEnumerator::new(&graph).enumerate();
        assert_eq!(expected, circuits.len());

        for circuit in &circuits {
            check_circuit(&graph, circuit);
        }
    }
}

#[test]
fn a_disconnected_graph_has_no_circuit() {
    let graph = Graph::from_adjacency(vec![
        (0, vec![1]),
        (1, vec![0]),
        (2, vec![3]),
        (3, vec![2]),
    ])
    .unwrap();
    assert!(SequentialEnumerator::new(&graph).enumerate().is_empty());
}

#[test]
fn the_wraparound_edge_is_genuinely_consulted() {
    let cycle = Graph::from_adjacency(vec![(0, vec![1]), (1, vec![2]), (2, vec![0])])
        .unwrap();
    let circuits = SequentialEnumerator::new(&cycle).enumerate();
    assert_eq!(vec![vec![0, 1, 2]], circuits);

    // same chain without the closing edge: the path exists, the circuit not
    let broken = Graph::from_adjacency(vec![(0, vec![1]), (1, vec![2]), (2, vec![])])
        .unwrap();
    assert!(SequentialEnumerator::new(&broken).enumerate().is_empty());
}

#[test]
fn degenerate_graphs_are_handled() {
    let empty = Graph::<&str>::from_adjacency(Vec::new()).unwrap();
    assert!(SequentialEnumerator::new(&empty).enumerate().is_empty());

    let lone = Graph::from_adjacency(vec![("X", vec![])]).unwrap();
    let circuits = SequentialEnumerator::new(&lone).enumerate();
    assert_eq!(vec![vec!["X"]], circuits);
}

#[test]
fn the_parallel_enumerator_reproduces_the_sequential_listing_exactly() {
    for n in 3..=7 {
        for seed in 0..3 {
            let graph = random_graph(n, 0.5, seed);
            let expected = SequentialEnumerator::new(&graph).enumerate();

            for threads in [1, 2, 3, 8] {
                let circuits = ParallelEnumerator::custom(&graph, threads).enumerate();
                assert_eq!(
                    expected, circuits,
                    "divergence on n {n} seed {seed} threads {threads}"
                );
            }
        }
    }

    let graph = complete_graph(6);
    let expected = SequentialEnumerator::new(&graph).enumerate();
    for threads in [1, 2, 3, 8] {
        let circuits = ParallelEnumerator::custom(&graph, threads).enumerate();
        assert_eq!(expected, circuits);
    }
}
