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

//! This module defines the `DataProvider` trait: the source of the agents and
//! tasks that are to be assigned.

use crate::{ProviderError, Roster};

/// A data provider yields the ordered list of agents and the ordered list of
/// tasks of one assignment run. The way these lists are obtained (file,
/// network, memory) is left to the implementation.
///
/// # Note:
/// A provider which fails to obtain its data must report it as an error. It
/// must never pretend the roster is empty since an empty roster is a perfectly
/// legitimate input (for which there is nothing to assign).
pub trait DataProvider {
    /// Fetches the agents and tasks.
    fn fetch(&self) -> Result<Roster, ProviderError>;
}
