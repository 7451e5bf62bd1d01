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

//! This module provides the implementation of the greedy assignment solver.

use crate::{AssignmentMapping, AssignmentSolver, Cutoff, Error, Result, ScoreMatrix};

/// The greedy solver repeatedly locks in the best remaining (agent, task)
/// pair:
///
/// 1. Scan the whole matrix for the highest score among the agents and tasks
///    which are still available. Ties are broken in favor of the first cell
///    met in row-major order.
/// 2. Give that task to that agent, and make both of them unavailable.
/// 3. Repeat until no more pair can be formed.
///
/// Each round rescans the complete matrix, so the solver runs in O(n^3) time.
/// It is fast and simple, but it does *not* guarantee the best total score
/// (use `Hungarian` for that).
///
/// # Example
/// ```
/// # use shipmatch::*;
/// let matrix  = ScoreMatrix::from_rows(vec![vec![10.0, 9.0], vec![9.0, 1.0]]);
/// let mapping = Greedy.solve(&matrix, &NoCutoff).unwrap();
/// assert_eq!(vec![Some(0), Some(1)], mapping);
/// assert_eq!(11.0, total_score(&matrix, &mapping));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Greedy;

impl AssignmentSolver for Greedy {
    fn solve(&self, matrix: &ScoreMatrix, cutoff: &dyn Cutoff) -> Result<AssignmentMapping> {
        let rows   = matrix.nb_rows();
        let cols   = matrix.nb_cols();
        let rounds = rows.min(cols);

        let mut mapping    = vec![None; rows];
        let mut agent_busy = vec![false; rows];
        let mut task_busy  = vec![false; cols];

        for round in 0..rounds {
            if cutoff.must_stop() {
                return Err(Error::Aborted);
            }

            let mut best: Option<(usize, usize, f64)> = None;
            for agent in 0..rows {
                if agent_busy[agent] {
                    continue;
                }
                for (task, &score) in matrix.row(agent).iter().enumerate() {
                    if task_busy[task] {
                        continue;
                    }
                    // strictly greater: the first cell wins ties. NaN never wins.
                    let improves = match best {
                        None => !score.is_nan(),
                        Some((_, _, max)) => score > max,
                    };
                    if improves {
                        best = Some((agent, task, score));
                    }
                }
            }

            match best {
                Some((agent, task, _)) => {
                    mapping[agent]    = Some(task);
                    agent_busy[agent] = true;
                    task_busy[task]   = true;
                }
                None => {
                    return Err(Error::SolverInvariant(format!(
                        "greedy: no eligible cell left at round {round} of {rounds}")));
                }
            }
        }

        Ok(mapping)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
