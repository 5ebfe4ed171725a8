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

//! This module defines the error taxonomy of the library. Because both
//! algorithms are pure, deterministic and run to completion, there are
//! exactly two ways for a call to go wrong: the input was malformed, or the
//! instance was turned away by an admission policy before any work started.
//! Nothing is ever silently swallowed and no partial result is returned.

/// This enumeration groups the kinds of errors the library can report.
/// Malformed inputs are detected eagerly, when the instance is built, and
/// never in the middle of a resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input did not denote a valid instance. Typically: a distance
    /// matrix whose rows do not all match the number of rows (not square),
    /// or an adjacency mapping naming a neighbour which is not itself one
    /// of the vertices.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The instance was rejected before resolution because it exceeds a
    /// configured ceiling. Both algorithms are exponential by design: they
    /// never self-limit, so the wrapping code screens instances upfront
    /// (see `Limits`) and reports the rejection with this variant.
    #[error("instance with {nb_vertices} vertices exceeds the allowed maximum of {max}")]
    TooLarge {
        /// The number of vertices of the offending instance.
        nb_vertices: usize,
        /// The ceiling that was enforced when it got rejected.
        max: usize,
    },
}

/// A convenient shorthand for any result whose error case is ours.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps the given message in the `InvalidInput` variant.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
