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

//! This module contains everything that is necessary to read the drivers and
//! shipments of a run from a json document that looks like:
//!
//! ```json
//! {
//!   "shipments": ["215 Osinski Manors", "9856 Marvin Stravenue"],
//!   "drivers":   ["Everardo Welch", "Orval Mayert"]
//! }
//! ```

use std::{fs::File, io::{BufReader, Read}, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::{Agent, DataProvider, ProviderError, Roster, Task};

/// The raw content of the json document
#[derive(Debug, Deserialize)]
struct RosterDocument {
    shipments: Vec<String>,
    drivers: Vec<String>,
}
impl From<RosterDocument> for Roster {
    fn from(doc: RosterDocument) -> Self {
        Roster {
            agents: doc.drivers.into_iter().map(Agent::new).collect(),
            tasks : doc.shipments.into_iter().map(Task::new).collect(),
        }
    }
}

/// This function parses a roster from any reader. It returns either the
/// roster if everything went on well or an error describing the problem.
pub fn read_roster<R: Read>(reader: R) -> Result<Roster, ProviderError> {
    let doc: RosterDocument = serde_json::from_reader(reader)?;
    Ok(doc.into())
}

/// A data provider reading its roster from a json file each time it is asked
/// to fetch it.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}
impl JsonFileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileProvider { path: path.as_ref().to_path_buf() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl DataProvider for JsonFileProvider {
    fn fetch(&self) -> Result<Roster, ProviderError> {
        let f = File::open(&self.path)?;
        read_roster(BufReader::new(f))
    }
}
