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

//! This module provides the implementation of various cutoff heuristics that can
//! be used to tune the behavior of an assignment solver.

use std::{sync::{Arc, atomic::{AtomicBool, Ordering}}, time::Duration};

use crate::Cutoff;

/// _This is the default cutoff heuristic._ It imposes that the computation
/// runs until completion.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoCutoff;
impl Cutoff for NoCutoff {
    fn must_stop(&self) -> bool {false}
}

/// This cutoff allows one to specify a maximum time budget to compute the
/// assignment. Once the time budget is elapsed, the solver gives up and reports
/// the computation as aborted.
///
/// # Example
/// ```
/// # use shipmatch::*;
/// use std::time::Duration;
///
/// let matrix = ScoreMatrix::from_rows(vec![vec![10.0, 9.0], vec![9.0, 1.0]]);
/// let cutoff = TimeBudget::new(Duration::from_secs(10));
/// let result = Hungarian.solve(&matrix, &cutoff); // will run for maximum 10 seconds
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TimeBudget {
    stop  : Arc<AtomicBool>
}
impl TimeBudget {
    pub fn new(budget: Duration) -> Self {
        let stop   = Arc::new(AtomicBool::new(false));
        let t_flag = Arc::clone(&stop);

        // timer
        std::thread::spawn(move || {
            std::thread::sleep(budget);
            t_flag.store(true, Ordering::Relaxed);
        });

        TimeBudget { stop }
    }
}
impl Cutoff for TimeBudget {
    fn must_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// This cutoff lets an other part of the program cancel a running computation.
/// Clones share the same flag: raising it through any clone stops all the
/// computations that were given one of them.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    stop  : Arc<AtomicBool>
}
impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }
    /// Requests all computations watching this flag to stop
    pub fn raise(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
impl Cutoff for StopFlag {
    fn must_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
