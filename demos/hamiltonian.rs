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

//! This example shows how to use hamil to enumerate every Hamiltonian circuit
//! of a labeled graph. It runs on a small four vertices graph and prints the
//! circuits one per line, each closed back onto its starting vertex. Pass
//! `--threads` to enumerate with the parallel enumerator.

use clap::Parser;

use hamil::*;

/// Enumerate all Hamiltonian circuits of a small example graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The number of threads used to enumerate the circuits. When this flag
    /// is omitted, the sequential enumerator runs.
    #[clap(short, long)]
    threads: Option<usize>,
}

/// A four vertices graph with exactly two Hamiltonian circuits, one the
/// reverse of the other.
fn example_graph() -> Graph<char> {
    Graph::from_adjacency(vec![
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'C', 'D']),
        ('C', vec!['A', 'B', 'D']),
        ('D', vec!['B', 'C']),
    ])
    .unwrap()
}

/// This is your executable's entry point. It screens the graph through the
/// admission policy, enumerates its circuits and prints them.
fn main() {
    env_logger::init();
    let args = Args::parse();

    let graph = example_graph();

    let limits = Limits::default();
    if let Err(e) = limits.admit_circuits(graph.nb_vertices()) {
        eprintln!("refused: {e}");
        std::process::exit(1);
    }

    let circuits = match args.threads {
        Some(threads) => ParallelEnumerator::custom(&graph, threads).enumerate(),
        None => SequentialEnumerator::new(&graph).enumerate(),
    };

    if circuits.is_empty() {
        println!("No Hamiltonian Circuits exist");
    } else {
        println!("Found {} Hamiltonian Circuits:", circuits.len());
        for circuit in circuits {
            let closed = circuit
                .iter()
                .chain(circuit.first())
                .map(|label| label.to_string())
                .collect::<Vec<_>>();
            println!("{}", closed.join(" -> "));
        }
    }
}
