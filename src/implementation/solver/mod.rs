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

//! This module provide the solver implementations.
mod greedy;
mod hungarian;
pub use greedy::*;
pub use hungarian::*;

use std::{fmt, str::FromStr};

use crate::{AssignmentMapping, AssignmentSolver, Cutoff, Result, ScoreMatrix};

/// The solving strategy to use. This is the way to pick a solver through
/// plain configuration (see `OrchestratorConfig`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Fast but approximate, see `Greedy`
    Greedy,
    /// Exact, see `Hungarian`
    #[default]
    Optimal,
}

impl AssignmentSolver for Strategy {
    fn solve(&self, matrix: &ScoreMatrix, cutoff: &dyn Cutoff) -> Result<AssignmentMapping> {
        match self {
            Strategy::Greedy  => Greedy.solve(matrix, cutoff),
            Strategy::Optimal => Hungarian.solve(matrix, cutoff),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Greedy  => write!(f, "greedy"),
            Strategy::Optimal => write!(f, "optimal"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy"                         => Ok(Strategy::Greedy),
            "optimal" | "hungarian" | "exact"=> Ok(Strategy::Optimal),
            other => Err(format!("unknown strategy '{other}' (expected greedy or optimal)")),
        }
    }
}
