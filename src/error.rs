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

//! This module groups the kinds of errors that might occur while computing an
//! assignment. Note that an empty input is *not* an error: it simply yields an
//! empty outcome.

/// The errors that may occur while fetching the agents and tasks to assign.
/// There can be io errors (file unavailable ?) or format errors (the file
/// is not a valid json document, or it does not list drivers and shipments).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The input document was not properly formatted
    #[error("ill formed input {0}")]
    Json(#[from] serde_json::Error),
}

/// All that can go wrong when running an assignment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The agents and tasks could not be obtained from the data provider
    #[error("could not obtain data: {0}")]
    DataRetrieval(#[from] ProviderError),
    /// A solver was fed a matrix that breaks its preconditions (typically a
    /// matrix holding NaN scores): no augmenting path or no eligible cell
    /// could be found.
    #[error("solver invariant violated: {0}")]
    SolverInvariant(String),
    /// The computation was stopped because the cutoff criterion was met
    #[error("computation aborted by cutoff")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, Error>;
