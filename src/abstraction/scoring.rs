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

//! This module defines the `ScoreFunction` trait.

use crate::{Agent, Task};

/// A score function rates how well suited an agent is to carry out a given
/// task. Implementations must be pure: the same pair always yields the same
/// score and computing it has no side effect. The rest of the engine assumes
/// scores are non negative; greater means better suited.
pub trait ScoreFunction {
    /// Returns the suitability score of `agent` for `task`.
    fn score(&self, agent: &Agent, task: &Task) -> f64;
}

impl<F> ScoreFunction for F where F: Fn(&Agent, &Task) -> f64 {
    fn score(&self, agent: &Agent, task: &Task) -> f64 {
        self(agent, task)
    }
}
