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

//! This module provides the implementation of the optimal assignment solver
//! (the hungarian algorithm, Kuhn-Munkres, in its shortest augmenting path
//! formulation). It runs in O(n^3) time.
//!
//! The algorithm minimizes a cost. Hence, the scores are first turned into
//! costs: `cost = max_score - score`. Then, the agents are seated one after
//! the other. Seating an agent amounts to finding an augmenting path: a chain
//! of reassignments which ends on a task that nobody holds yet. That search is
//! a Dijkstra-like exploration of the reduced costs; whenever it gets stuck
//! (no zero reduced cost edge leaves the explored tree) the dual potentials
//! are adjusted so as to open the cheapest possible edge.
//!
//! # Rectangular matrices
//! The matrix is padded to a square `n x n` matrix with `n = max(rows, cols)`.
//! Padding cells are given a score of 0, that is a cost of `max_score`: the
//! highest possible cost, making padding the least attractive choice. The
//! agents which end up holding a padding task are reported as unmatched, and
//! padding agents never show up in the mapping.

use crate::{AssignmentMapping, AssignmentSolver, Cutoff, Error, Result, ScoreMatrix};

/// The exact solver: it returns an assignment whose total score is the
/// maximum achievable on the given matrix.
///
/// # Example
/// ```
/// # use shipmatch::*;
/// let matrix  = ScoreMatrix::from_rows(vec![vec![10.0, 9.0], vec![9.0, 1.0]]);
/// let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
/// assert_eq!(vec![Some(1), Some(0)], mapping);
/// assert_eq!(18.0, total_score(&matrix, &mapping));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Hungarian;

impl AssignmentSolver for Hungarian {
    fn solve(&self, matrix: &ScoreMatrix, cutoff: &dyn Cutoff) -> Result<AssignmentMapping> {
        if matrix.is_empty() {
            return Ok(vec![None; matrix.nb_rows()]);
        }

        let mut arena = Arena::new(matrix);
        for agent in 1..=arena.n {
            // within one agent, the intermediate state means nothing. The
            // cutoff is thus only ever checked in between two agents.
            if cutoff.must_stop() {
                return Err(Error::Aborted);
            }
            arena.seat(agent)?;
        }
        Ok(arena.into_mapping(matrix.nb_rows(), matrix.nb_cols()))
    }
}

/// Returns the `n x n` row-major cost matrix derived from `matrix`
/// (`cost = max_score - score`), where all cells outside of the original
/// matrix are given a score of 0.
fn square_costs(matrix: &ScoreMatrix, n: usize) -> Vec<f64> {
    let max = matrix.max_score();
    let mut costs = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            costs.push(max - matrix.get(i, j).unwrap_or(0.0));
        }
    }
    costs
}

/// All the bookkeeping of one resolution. It is allocated once when the
/// resolution starts and dropped when it ends.
///
/// # Note:
/// Agents and tasks are numbered from 1 to n. The slot 0 is a sentinel: the
/// task 0 is held by the agent being seated and the agent 0 means "nobody".
struct Arena {
    /// The dimension of the (padded) square matrix
    n: usize,
    /// The n x n cost matrix (0-based, row-major)
    costs: Vec<f64>,
    /// The dual potential of each agent
    agent_potential: Vec<f64>,
    /// The dual potential of each task
    task_potential: Vec<f64>,
    /// The agent currently holding each task (0 when the task is free)
    holder: Vec<usize>,
    /// The task from which each task has been reached on the augmenting path
    predecessor: Vec<usize>,
    /// The minimum reduced cost to reach each task from the explored tree
    slack: Vec<f64>,
    /// The tasks which belong to the explored tree
    visited: Vec<bool>,
}

impl Arena {
    fn new(matrix: &ScoreMatrix) -> Self {
        let n = matrix.nb_rows().max(matrix.nb_cols());
        Arena {
            n,
            costs:           square_costs(matrix, n),
            agent_potential: vec![0.0; n + 1],
            task_potential:  vec![0.0; n + 1],
            holder:          vec![0; n + 1],
            predecessor:     vec![0; n + 1],
            slack:           vec![f64::INFINITY; n + 1],
            visited:         vec![false; n + 1],
        }
    }

    #[inline]
    fn cost(&self, agent: usize, task: usize) -> f64 {
        self.costs[(agent - 1) * self.n + (task - 1)]
    }

    /// Seats `agent` by searching an augmenting path that ends on a free
    /// task, then shifts the holders along that path.
    fn seat(&mut self, agent: usize) -> Result<()> {
        let n = self.n;
        self.holder[0] = agent;
        self.slack.fill(f64::INFINITY);
        self.visited.fill(false);

        let mut task = 0;
        loop {
            self.visited[task] = true;
            let current = self.holder[task];

            let mut delta = f64::INFINITY;
            let mut next  = 0;
            for j in 1..=n {
                if self.visited[j] {
                    continue;
                }
                let reduced = self.cost(current, j)
                    - self.agent_potential[current]
                    - self.task_potential[j];
                if reduced < self.slack[j] {
                    self.slack[j]       = reduced;
                    self.predecessor[j] = task;
                }
                if self.slack[j] < delta {
                    delta = self.slack[j];
                    next  = j;
                }
            }

            if next == 0 {
                return Err(Error::SolverInvariant(format!(
                    "hungarian: no augmenting path for agent {} of {n}", agent - 1)));
            }

            for j in 0..=n {
                if self.visited[j] {
                    self.agent_potential[self.holder[j]] += delta;
                    self.task_potential[j] -= delta;
                } else {
                    self.slack[j] -= delta;
                }
            }

            task = next;
            if self.holder[task] == 0 {
                break;
            }
        }

        // augment: walk back to the sentinel
        while task != 0 {
            let previous = self.predecessor[task];
            self.holder[task] = self.holder[previous];
            task = previous;
        }
        Ok(())
    }

    /// Inverts the task -> agent table, dropping the padding.
    fn into_mapping(self, rows: usize, cols: usize) -> AssignmentMapping {
        let mut mapping = vec![None; rows];
        for task in 1..=self.n {
            let agent = self.holder[task];
            if agent != 0 && agent <= rows && task <= cols {
                mapping[agent - 1] = Some(task - 1);
            }
        }
        mapping
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_hungarian {
    use crate::*;
    use super::square_costs;

    #[test]
    fn beats_greedy_on_the_textbook_case() {
        let matrix  = ScoreMatrix::from_rows(vec![vec![10.0, 9.0], vec![9.0, 1.0]]);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert_eq!(vec![Some(1), Some(0)], mapping);
        assert_eq!(18.0, total_score(&matrix, &mapping));
    }
    #[test]
    fn finds_the_maximum_score() {
        let matrix = ScoreMatrix::from_rows(vec![
            vec![ 5.0, 12.0,  3.0],
            vec![10.0,  6.0,  5.0],
            vec![ 4.0,  8.0, 11.0],
        ]);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert_eq!(vec![Some(1), Some(0), Some(2)], mapping);
        assert_eq!(33.0, total_score(&matrix, &mapping));
    }
    #[test]
    fn uniform_matrix_yields_a_bijection() {
        let matrix  = ScoreMatrix::uniform(5, 5, 10.0);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert!(is_bijection(&mapping, 5));
        assert_eq!(50.0, total_score(&matrix, &mapping));
    }
    #[test]
    fn single_cell() {
        let matrix  = ScoreMatrix::from_rows(vec![vec![3.5]]);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert_eq!(vec![Some(0)], mapping);
    }
    #[test]
    fn more_agents_than_tasks() {
        let matrix  = ScoreMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 0.0]]);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert_eq!(vec![None, Some(1), Some(0)], mapping);
        assert_eq!(9.0, total_score(&matrix, &mapping));
    }
    #[test]
    fn more_tasks_than_agents() {
        let matrix  = ScoreMatrix::from_rows(vec![vec![1.0, 2.0, 8.0], vec![3.0, 4.0, 9.0]]);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert_eq!(vec![Some(2), Some(1)], mapping);
        assert_eq!(12.0, total_score(&matrix, &mapping));
    }
    #[test]
    fn padding_costs_the_most() {
        let matrix = ScoreMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 0.0]]);
        let costs  = square_costs(&matrix, 3);
        // cost = max - score, with max = 5
        assert_eq!(vec![4.0, 3.0, 5.0,
                        2.0, 1.0, 5.0,
                        0.0, 5.0, 5.0], costs);
        // no real cell costs more than a padding cell
        let pad = costs[2];
        assert!(costs.iter().all(|c| *c <= pad));
    }
    #[test]
    fn padding_never_displaces_a_real_task() {
        // every agent prefers task 0; only one can have it and the others
        // must fall back on the real task 1 before any padding
        let matrix  = ScoreMatrix::from_rows(vec![vec![9.0, 1.0], vec![8.0, 2.0], vec![7.0, 3.0]]);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert_eq!(2, mapping.iter().flatten().count());
        assert_eq!(12.0, total_score(&matrix, &mapping));
    }
    #[test]
    fn empty_matrix_yields_unmatched_agents() {
        let matrix  = ScoreMatrix::uniform(3, 0, 0.0);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert_eq!(vec![None, None, None], mapping);
        let matrix  = ScoreMatrix::uniform(0, 3, 0.0);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert!(mapping.is_empty());
    }
    #[test]
    fn nan_matrix_violates_the_invariant() {
        let matrix = ScoreMatrix::uniform(3, 3, f64::NAN);
        let result = Hungarian.solve(&matrix, &NoCutoff);
        assert!(matches!(result, Err(Error::SolverInvariant(_))));
    }
    #[test]
    fn raised_cutoff_aborts() {
        let flag = StopFlag::new();
        flag.raise();
        let matrix = ScoreMatrix::uniform(2, 2, 1.0);
        assert!(matches!(Hungarian.solve(&matrix, &flag), Err(Error::Aborted)));
    }
    #[test]
    fn large_instance_is_a_bijection() {
        let n = 200;
        let rows = (0..n).map(|i| (0..n).map(|j| ((i * 31 + j * 17) % 97) as f64).collect()).collect();
        let matrix  = ScoreMatrix::from_rows(rows);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert!(is_bijection(&mapping, n));
        let greedy  = Greedy.solve(&matrix, &NoCutoff).unwrap();
        assert!(total_score(&matrix, &mapping) >= total_score(&matrix, &greedy));
    }
}
