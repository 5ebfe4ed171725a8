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

//! This module provides the admission policy which wrapping code is expected
//! to run instances through before handing them to the algorithms.

use derive_builder::Builder;

use crate::{Error, Result};

/// The ceiling applied to solver instances when nothing else is configured.
/// Past twenty vertices the state table of the dynamic program stops fitting
/// in the memory of a commodity machine.
pub const DEFAULT_MAX_TOUR_VERTICES: usize = 20;
/// The ceiling applied to enumeration instances when nothing else is
/// configured. The search visits up to `(n-1)!` orderings, which stops being
/// reasonable around ten vertices.
pub const DEFAULT_MAX_CIRCUIT_VERTICES: usize = 10;

/// Both algorithms of this library are exponential by design and run to
/// completion once started: they never time out, never approximate, never
/// self-limit. The recommended discipline is therefore to screen every
/// instance *before* invoking them, and this type is that screen. Build one
/// (the builder lets you override either ceiling), call the `admit_*` method
/// matching the algorithm you are about to run, and propagate the `TooLarge`
/// rejection to whoever submitted the oversized instance.
///
/// ```
/// # use hamil::*;
/// let limits = LimitsBuilder::default()
///     .max_tour_vertices(12)
///     .build()
///     .unwrap();
///
/// assert!(limits.admit_tour(12).is_ok());
/// assert!(limits.admit_tour(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct Limits {
    /// The largest instance the travelling salesman solver may be given,
    /// in vertices.
    #[builder(default = "DEFAULT_MAX_TOUR_VERTICES")]
    pub max_tour_vertices: usize,
    /// The largest instance the circuit enumerator may be given, in
    /// vertices.
    #[builder(default = "DEFAULT_MAX_CIRCUIT_VERTICES")]
    pub max_circuit_vertices: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_tour_vertices: DEFAULT_MAX_TOUR_VERTICES,
            max_circuit_vertices: DEFAULT_MAX_CIRCUIT_VERTICES,
        }
    }
}

impl Limits {
    /// Screens an instance about to be submitted to the travelling salesman
    /// solver. Returns `TooLarge` when it exceeds the configured ceiling.
    pub fn admit_tour(&self, nb_vertices: usize) -> Result<()> {
        if nb_vertices <= self.max_tour_vertices {
            Ok(())
        } else {
            Err(Error::TooLarge { nb_vertices, max: self.max_tour_vertices })
        }
    }

    /// Screens an instance about to be submitted to the circuit enumerator.
    /// Returns `TooLarge` when it exceeds the configured ceiling.
    pub fn admit_circuits(&self, nb_vertices: usize) -> Result<()> {
        if nb_vertices <= self.max_circuit_vertices {
            Ok(())
        } else {
            Err(Error::TooLarge { nb_vertices, max: self.max_circuit_vertices })
        }
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_limits {
    use crate::*;

    #[test]
    fn by_default_the_practical_ceilings_apply() {
        let limits = LimitsBuilder::default().build().unwrap();
        assert_eq!(DEFAULT_MAX_TOUR_VERTICES, limits.max_tour_vertices);
        assert_eq!(DEFAULT_MAX_CIRCUIT_VERTICES, limits.max_circuit_vertices);
    }

    #[test]
    fn either_ceiling_can_be_overridden() {
        let limits = LimitsBuilder::default()
            .max_tour_vertices(25)
            .max_circuit_vertices(8)
            .build()
            .unwrap();

        assert_eq!(25, limits.max_tour_vertices);
        assert_eq!(8, limits.max_circuit_vertices);
    }

    #[test]
    fn instances_at_the_ceiling_are_admitted() {
        let limits = Limits::default();
        assert!(limits.admit_tour(DEFAULT_MAX_TOUR_VERTICES).is_ok());
        assert!(limits.admit_circuits(DEFAULT_MAX_CIRCUIT_VERTICES).is_ok());
    }

    #[test]
    fn oversized_instances_are_turned_away_with_both_bounds() {
        let limits = Limits::default();
        let rejection = limits.admit_tour(DEFAULT_MAX_TOUR_VERTICES + 1);

        assert!(matches!(
            rejection,
            Err(Error::TooLarge { nb_vertices, max })
                if nb_vertices == DEFAULT_MAX_TOUR_VERTICES + 1
                && max == DEFAULT_MAX_TOUR_VERTICES
        ));
    }
}
