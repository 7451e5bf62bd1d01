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


//! # Shipmatch
//! Shipmatch assigns drivers to shipments. Each driver gets at most one
//! shipment, each shipment is given to at most one driver, and the goal is to
//! make the total *suitability score* of the matched pairs as high as possible.
//!
//! Two interchangeable strategies are provided:
//! * `Greedy` repeatedly locks in the best remaining pair. It is simple and
//!   fast, but its answer may be suboptimal.
//! * `Hungarian` is an exact O(n^3) algorithm (Kuhn-Munkres with dual
//!   potentials and shortest augmenting paths). Its answer is guaranteed to
//!   reach the maximum total score.
//!
//! ## Quick Example
//! The simplest way to use the library is to hand your drivers and shipments
//! to an `AssignmentOrchestrator` through a `DataProvider`. The orchestrator
//! rates each pair with the `SuitabilityScore`, runs the configured solver,
//! and gives you one `Assignment` per matched driver.
//!
//! ```
//! # use shipmatch::*;
//! let provider = InMemoryProvider::new(
//!     ["Al", "Bob", "Eve"],
//!     ["100 Main", "12 Elm", "Broadway"]);
//!
//! let config  = OrchestratorConfigBuilder::default()
//!     .strategy(Strategy::Optimal)
//!     .build()
//!     .unwrap();
//! let outcome = AssignmentOrchestrator::new(config).run(&provider).unwrap();
//!
//! assert_eq!(3, outcome.assignments.len());
//! for a in outcome.assignments.iter() {
//!     println!("{} -> {} ({})", a.agent_name, a.task_descriptor, a.score);
//! }
//! ```
//!
//! ## Using the solvers directly
//! The solvers work on any `ScoreMatrix` (rows are agents, columns are tasks).
//!
//! ```
//! # use shipmatch::*;
//! let matrix = ScoreMatrix::from_rows(vec![
//!     vec![10.0, 9.0],
//!     vec![ 9.0, 1.0],
//! ]);
//! let greedy = Greedy.solve(&matrix, &NoCutoff).unwrap();
//! let exact  = Hungarian.solve(&matrix, &NoCutoff).unwrap();
//!
//! assert_eq!(11.0, total_score(&matrix, &greedy));
//! assert_eq!(18.0, total_score(&matrix, &exact));
//! ```

mod common;
mod error;
mod abstraction;
mod implementation;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;
