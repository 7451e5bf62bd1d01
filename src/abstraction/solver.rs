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

//! This module defines the `AssignmentSolver` trait.

use crate::{AssignmentMapping, Cutoff, Result, ScoreMatrix};

/// This is the solver abstraction. It is implemented by the structures that
/// know how to pair the rows (agents) of a score matrix with its columns
/// (tasks) so that the total score is as high as possible.
///
/// A solver keeps no state between two calls to `solve`: all the bookkeeping
/// it needs is allocated for the duration of one call. Hence, one solver can
/// safely be shared among as many threads as you like.
pub trait AssignmentSolver {
    /// Computes an assignment for the given matrix. The returned mapping holds
    /// exactly one entry per row of the matrix: `Some(col)` when that agent
    /// has been given the task `col` and `None` when it is left unmatched.
    /// No two agents are ever given the same task.
    ///
    /// The `cutoff` is polled between two steps of the computation. Whenever
    /// it says the search must stop, the solver gives up and returns
    /// `Error::Aborted` (a partial mapping is never returned).
    ///
    /// An `Error::SolverInvariant` is returned when the matrix breaks the
    /// preconditions of the algorithm (e.g. it contains NaN scores).
    fn solve(&self, matrix: &ScoreMatrix, cutoff: &dyn Cutoff) -> Result<AssignmentMapping>;
}
