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

//! This module computes the total score realized by an assignment.

use crate::ScoreMatrix;

/// Sums the scores of the cells selected by `mapping`. Unmatched agents are
/// skipped and so are the entries which point outside of the matrix.
///
/// # Example
/// ```
/// # use shipmatch::*;
/// let matrix = ScoreMatrix::from_rows(vec![vec![10.0, 9.0], vec![9.0, 1.0]]);
/// assert_eq!(18.0, total_score(&matrix, &[Some(1), Some(0)]));
/// assert_eq!( 9.0, total_score(&matrix, &[Some(1), None]));
/// ```
pub fn total_score(matrix: &ScoreMatrix, mapping: &[Option<usize>]) -> f64 {
    mapping.iter()
        .enumerate()
        .filter_map(|(agent, task)| task.and_then(|t| matrix.get(agent, t)))
        .sum()
}
