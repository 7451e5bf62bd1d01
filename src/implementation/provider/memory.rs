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

//! A provider that simply hands out lists it already holds.

use crate::{Agent, DataProvider, ProviderError, Roster, Task};

/// A data provider whose agents and tasks are already materialized in memory.
///
/// # Example
/// ```
/// # use shipmatch::*;
/// let provider = InMemoryProvider::new(["Al", "Bob"], ["100 Main", "12 Elm"]);
/// let roster   = provider.fetch().unwrap();
/// assert_eq!(2, roster.agents.len());
/// assert_eq!("12 Elm", roster.tasks[1].descriptor);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    roster: Roster,
}
impl InMemoryProvider {
    pub fn new<A, T, S1, S2>(agents: A, tasks: T) -> Self
    where
        A: IntoIterator<Item = S1>,
        T: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        let roster = Roster {
            agents: agents.into_iter().map(Agent::new).collect(),
            tasks : tasks.into_iter().map(Task::new).collect(),
        };
        InMemoryProvider { roster }
    }
}
impl From<Roster> for InMemoryProvider {
    fn from(roster: Roster) -> Self {
        InMemoryProvider { roster }
    }
}
impl DataProvider for InMemoryProvider {
    fn fetch(&self) -> Result<Roster, ProviderError> {
        Ok(self.roster.clone())
    }
}
