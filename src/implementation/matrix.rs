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

//! This module provides the construction of the score matrix.

use crate::{Agent, ScoreFunction, ScoreMatrix, Task};

impl ScoreMatrix {
    /// Rates every agent for every task with the given score function. The
    /// resulting matrix has one row per agent and one column per task, in the
    /// order of the given slices.
    ///
    /// # Example
    /// ```
    /// # use shipmatch::*;
    /// let agents = [Agent::new("Al"), Agent::new("Bob")];
    /// let tasks  = [Task::new("100 Main"), Task::new("12 Elm"), Task::new("Broadway")];
    /// let matrix = ScoreMatrix::build(&agents, &tasks, &SuitabilityScore);
    /// assert_eq!(2, matrix.nb_rows());
    /// assert_eq!(3, matrix.nb_cols());
    /// assert_eq!(Some(2.25), matrix.get(0, 0));
    /// ```
    pub fn build(agents: &[Agent], tasks: &[Task], scorer: &dyn ScoreFunction) -> Self {
        let mut data = Vec::with_capacity(agents.len() * tasks.len());
        for agent in agents.iter() {
            for task in tasks.iter() {
                data.push(scorer.score(agent, task));
            }
        }
        ScoreMatrix::from_raw(agents.len(), tasks.len(), data)
    }
}

#[cfg(test)]
mod test_build {
    use crate::*;

    #[test]
    fn cells_are_laid_out_agent_major() {
        let agents = [Agent::new("a"), Agent::new("bb")];
        let tasks  = [Task::new("x"), Task::new("yyy"), Task::new("zzzzz")];
        let rule   = |a: &Agent, t: &Task| (10 * a.name.len() + t.name().len()) as f64;
        let matrix = ScoreMatrix::build(&agents, &tasks, &rule);

        assert_eq!(&[11.0, 13.0, 15.0], matrix.row(0));
        assert_eq!(&[21.0, 23.0, 25.0], matrix.row(1));
    }
    #[test]
    fn empty_inputs_give_empty_matrix() {
        let tasks  = [Task::new("1 Elm")];
        let matrix = ScoreMatrix::build(&[], &tasks, &SuitabilityScore);
        assert!(matrix.is_empty());
        assert_eq!(0, matrix.nb_rows());

        let agents = [Agent::new("Al")];
        let matrix = ScoreMatrix::build(&agents, &[], &SuitabilityScore);
        assert!(matrix.is_empty());
        assert_eq!(1, matrix.nb_rows());
        assert_eq!(0, matrix.nb_cols());
    }
}
