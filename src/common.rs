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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use serde::Serialize;

// ----------------------------------------------------------------------------
// --- AGENT ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An agent (a driver) is the entity which must be given exactly one task.
/// It is only identified by its name; which also happens to be the sole input
/// of the suitability score on the agent side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Agent {
    pub name: String,
}
impl Agent {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Agent { name: name.into() }
    }
}

// ----------------------------------------------------------------------------
// --- TASK -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A task (a shipment) is the entity which must be matched with one agent.
/// Its descriptor typically looks like a street address ("123 Main St"):
/// a leading identifier followed by the name of the street.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub descriptor: String,
}
impl Task {
    pub fn new<S: Into<String>>(descriptor: S) -> Self {
        Task { descriptor: descriptor.into() }
    }

    /// Returns the portion of the descriptor which is used for scoring. That
    /// is everything which follows the first whitespace of the descriptor.
    /// When the descriptor has no whitespace at all, the complete descriptor
    /// is used.
    ///
    /// # Examples:
    /// ```
    /// # use shipmatch::Task;
    /// assert_eq!("Main St",  Task::new("123 Main St").name());
    /// assert_eq!("Broadway", Task::new("Broadway").name());
    /// ```
    pub fn name(&self) -> &str {
        match self.descriptor.split_once(char::is_whitespace) {
            Some((_prefix, name)) => name,
            None => &self.descriptor,
        }
    }
}

// ----------------------------------------------------------------------------
// --- ROSTER -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The complete input of one assignment run: the agents and the tasks in the
/// order they were obtained from the data provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub agents: Vec<Agent>,
    pub tasks: Vec<Task>,
}

// ----------------------------------------------------------------------------
// --- SCORE MATRIX -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// A dense, row-major table of pairwise suitability scores. Rows stand for
/// the agents and columns for the tasks. The matrix need not be square.
///
/// Once built, a matrix is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}
impl ScoreMatrix {
    /// Creates a matrix from its rows. All rows are expected to have the same
    /// length; missing cells (ragged input) are filled with a zero score and
    /// extra cells are ignored.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows.iter() {
            for j in 0..ncols {
                data.push(row.get(j).copied().unwrap_or(0.0));
            }
        }
        ScoreMatrix { rows: nrows, cols: ncols, data }
    }
    /// Creates a matrix from its row-major cells.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, data.len());
        ScoreMatrix { rows, cols, data }
    }
    /// A `rows x cols` matrix where every cell holds the same `value`.
    pub fn uniform(rows: usize, cols: usize, value: f64) -> Self {
        ScoreMatrix { rows, cols, data: vec![value; rows * cols] }
    }

    #[inline]
    pub fn nb_rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn nb_cols(&self) -> usize {
        self.cols
    }
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
    /// Returns the score of assigning task `col` to agent `row` or `None`
    /// when the cell lies outside of the matrix.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }
    /// The cells of one row.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
    /// The largest score of the matrix (0.0 when the matrix is empty).
    /// NaN cells are ignored.
    pub fn max_score(&self) -> f64 {
        self.data.iter().copied().fold(None, |acc: Option<f64>, x| match acc {
            None if !x.is_nan() => Some(x),
            Some(m) if x > m    => Some(x),
            _ => acc,
        })
        .unwrap_or(0.0)
    }
}

// ----------------------------------------------------------------------------
// --- MAPPING ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a solver: for each agent (index), the task it has been given
/// if any. Unmatched agents are explicitly represented as `None`.
pub type AssignmentMapping = Vec<Option<usize>>;

/// Returns true iff the given mapping assigns each of the `n` agents a
/// distinct task in `0..n`.
pub fn is_bijection(mapping: &[Option<usize>], n: usize) -> bool {
    if mapping.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for task in mapping.iter() {
        match task {
            Some(t) if *t < n && !seen[*t] => seen[*t] = true,
            _ => return false,
        }
    }
    true
}

// ----------------------------------------------------------------------------
// --- RESULTS ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One matched pair, as presented to the outside world.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub agent_name: String,
    pub task_descriptor: String,
    pub score: f64,
}

/// The outcome of one orchestration run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outcome {
    /// One record per matched agent, in the input order of the agents
    pub assignments: Vec<Assignment>,
    /// The sum of the scores of all matched pairs
    pub total_score: f64,
}
impl Outcome {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_task {
    use crate::Task;

    #[test]
    fn name_is_what_follows_the_first_space() {
        assert_eq!("Main",    Task::new("100 Main").name());
        assert_eq!("Main St", Task::new("123 Main St").name());
    }
    #[test]
    fn name_falls_back_to_whole_descriptor() {
        assert_eq!("Broadway", Task::new("Broadway").name());
        assert_eq!("",         Task::new("").name());
    }
    #[test]
    fn any_whitespace_separates_the_prefix() {
        assert_eq!("Elm", Task::new("7\tElm").name());
        assert_eq!("Elm", Task::new(" Elm").name());
    }
}
