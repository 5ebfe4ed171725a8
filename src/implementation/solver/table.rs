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

//! This module provides the state table of the Held-Karp dynamic program and
//! the three moves made over it (seeding, state expansion, closure). It is
//! the common core of the sequential and parallel solvers: one state is
//! always computed the same way, only the scheduling of a level differs.
//!
//! A state is a pair (subset of the non-origin vertices, terminal vertex) and
//! stands for the cheapest path leaving the origin, visiting exactly that
//! subset, and stopping on that terminal. The subset is encoded as a bitmask
//! (bit `k - 1` set means vertex `k` belongs to it) and the table is a flat
//! arena indexed by `mask * (n - 1) + (terminal - 1)`: no hashing, no
//! per-state allocation. Instead of carrying path copies around, each cell
//! remembers the terminal of the state it was expanded from, and the winning
//! path is rebuilt once at the very end by walking those back-pointers.

use crate::{Cost, Distances};

/// A subset of the non-origin vertices, encoded as a bitmask: bit `k - 1`
/// stands for vertex `k`.
pub(crate) type Mask = usize;

/// Returns the bit standing for vertex `k` (with `k >= 1`).
pub(crate) fn bit(k: usize) -> Mask {
    1 << (k - 1)
}

/// Iterates the vertices of the given subset in ascending order. The order
/// matters: it is what makes "the first candidate examined wins" a
/// deterministic tie-breaking rule.
pub(crate) fn members(mask: Mask) -> Members {
    Members(mask)
}

pub(crate) struct Members(Mask);

impl Iterator for Members {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            let vertex = self.0.trailing_zeros() as usize + 1;
            self.0 &= self.0 - 1;
            Some(vertex)
        }
    }
}

/// Groups every nonempty subset of the `nb_free` non-origin vertices by
/// size. Within one size class the masks appear in ascending numeric order,
/// which both solvers follow so that their work (and hence their logs and
/// their results) line up exactly.
pub(crate) fn levels(nb_free: usize) -> Vec<Vec<Mask>> {
    let mut levels = vec![vec![]; nb_free + 1];
    for mask in 1..(1_usize << nb_free) {
        levels[mask.count_ones() as usize].push(mask);
    }
    levels
}

/// One cell of the table: the value of one (subset, terminal) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    /// The cost of the cheapest path covering the subset and stopping on
    /// the terminal.
    pub cost: Cost,
    /// The terminal of the state this cost was expanded from; the origin
    /// (vertex 0) for the singleton states of the first level.
    pub pred: usize,
}

impl Cell {
    /// The value of a state nothing has reached yet.
    pub fn unreached() -> Self {
        Cell { cost: Cost::MAX, pred: 0 }
    }
}

/// The arena holding every state of one resolution. It is local to that
/// resolution: nothing is cached across calls. Once a level is complete its
/// cells are never written again, which is exactly what lets the parallel
/// solver read a whole level concurrently while preparing the next one.
pub(crate) struct StateTable {
    /// The number of non-origin vertices (n - 1).
    nb_free: usize,
    /// The cells, one per (mask, terminal) pair.
    cells: Vec<Cell>,
}

impl StateTable {
    pub fn new(nb_free: usize) -> Self {
        StateTable {
            nb_free,
            cells: vec![Cell::unreached(); (1_usize << nb_free) * nb_free],
        }
    }

    /// Returns the total number of cells of the arena.
    pub fn nb_states(&self) -> usize {
        self.cells.len()
    }

    /// Returns the mask comprising every non-origin vertex.
    pub fn full_mask(&self) -> Mask {
        (1_usize << self.nb_free) - 1
    }

    fn index(&self, mask: Mask, terminal: usize) -> usize {
        mask * self.nb_free + (terminal - 1)
    }

    pub fn cell(&self, mask: Mask, terminal: usize) -> Cell {
        self.cells[self.index(mask, terminal)]
    }

    pub fn set(&mut self, mask: Mask, terminal: usize, cell: Cell) {
        let at = self.index(mask, terminal);
        self.cells[at] = cell;
    }

    /// Fills the first level: visiting the singleton `{k}` and stopping on
    /// `k` costs exactly the distance from the origin to `k`.
    pub fn seed<D: Distances>(&mut self, distances: &D) {
        for k in 1..=self.nb_free {
            self.set(bit(k), k, Cell { cost: distances.distance(0, k), pred: 0 });
        }
    }

    /// Rebuilds the optimal path by walking the back-pointers from the given
    /// terminal of the full subset down to the origin. The result starts and
    /// ends with the origin and visits every other vertex exactly once.
    pub fn reconstruct(&self, terminal: usize) -> Vec<usize> {
        // both endpoints are the origin already
        let mut path = vec![0; self.nb_free + 2];
        let mut mask = self.full_mask();
        let mut k = terminal;
        let mut at = self.nb_free;
        while mask != 0 {
            path[at] = k;
            at -= 1;
            let pred = self.cell(mask, k).pred;
            mask &= !bit(k);
            k = pred;
        }
        path
    }
}

/// Computes the value of one state of level 2 or above: the cheapest way of
/// covering `mask` and stopping on `terminal` extends some state of the
/// previous level by one leg. Candidate predecessors are examined in
/// ascending vertex order and compared with a strict `<`, so the first
/// minimum encountered wins. The additions saturate: a predecessor nothing
/// has reached stays at `Cost::MAX` and can never win.
pub(crate) fn expand<D: Distances>(
    distances: &D,
    table: &StateTable,
    mask: Mask,
    terminal: usize,
) -> Cell {
    let sub = mask & !bit(terminal);
    let mut best = Cell::unreached();
    for m in members(sub) {
        let cost = table.cell(sub, m).cost.saturating_add(distances.distance(m, terminal));
        if cost < best.cost {
            best = Cell { cost, pred: m };
        }
    }
    best
}

/// The closure step: picks the terminal whose full-subset state, extended by
/// the leg back to the origin, is the cheapest. Terminals are examined in
/// ascending order with a strict `<`, like everywhere else. Returns the
/// optimal cost along with the winning terminal, `(Cost::MAX, 0)` if no
/// finite tour exists at all.
pub(crate) fn close<D: Distances>(distances: &D, table: &StateTable) -> (Cost, usize) {
    let full = table.full_mask();
    let mut best = (Cost::MAX, 0);
    for k in members(full) {
        let cost = table.cell(full, k).cost.saturating_add(distances.distance(k, 0));
        if cost < best.0 {
            best = (cost, k);
        }
    }
    best
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_table {
    use super::*;
    use crate::DistanceMatrix;

    #[test]
    fn bits_stand_for_the_non_origin_vertices() {
        assert_eq!(0b001, bit(1));
        assert_eq!(0b010, bit(2));
        assert_eq!(0b100, bit(3));
    }

    #[test]
    fn members_come_out_in_ascending_order() {
        assert_eq!(vec![1, 3, 4], members(0b1101).collect::<Vec<_>>());
        assert_eq!(Vec::<usize>::new(), members(0).collect::<Vec<_>>());
    }

    #[test]
    fn levels_group_the_masks_by_popcount() {
        let levels = levels(3);
        assert_eq!(4, levels.len());
        assert!(levels[0].is_empty());
        assert_eq!(vec![0b001, 0b010, 0b100], levels[1]);
        assert_eq!(vec![0b011, 0b101, 0b110], levels[2]);
        assert_eq!(vec![0b111], levels[3]);
    }

    #[test]
    fn seeding_reads_the_distances_from_the_origin() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 7, 4],
            vec![7, 0, 2],
            vec![4, 2, 0],
        ])
        .unwrap();

        let mut table = StateTable::new(2);
        table.seed(&matrix);

        assert_eq!(Cell { cost: 7, pred: 0 }, table.cell(bit(1), 1));
        assert_eq!(Cell { cost: 4, pred: 0 }, table.cell(bit(2), 2));
    }

    #[test]
    fn expansion_keeps_the_first_minimum_encountered() {
        // both predecessors offer the expanded state at cost 9
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 4, 6, 1],
            vec![4, 0, 5, 5],
            vec![6, 5, 0, 3],
            vec![1, 5, 3, 0],
        ])
        .unwrap();

        let mut table = StateTable::new(3);
        table.set(bit(1) | bit(3), 1, Cell { cost: 4, pred: 3 });
        table.set(bit(1) | bit(3), 3, Cell { cost: 6, pred: 1 });

        let cell = expand(&matrix, &table, bit(1) | bit(2) | bit(3), 2);

        assert_eq!(9, cell.cost);
        assert_eq!(1, cell.pred);
    }

    #[test]
    fn reconstruction_walks_the_back_pointers() {
        let mut table = StateTable::new(3);
        table.set(bit(2), 2, Cell { cost: 1, pred: 0 });
        table.set(bit(2) | bit(3), 3, Cell { cost: 2, pred: 2 });
        table.set(bit(1) | bit(2) | bit(3), 1, Cell { cost: 3, pred: 3 });

        assert_eq!(vec![0, 2, 3, 1, 0], table.reconstruct(1));
    }
}
