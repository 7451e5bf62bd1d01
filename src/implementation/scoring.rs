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

//! This module provides the suitability score: the rule which rates how well a
//! driver fits a shipment.

use crate::{Agent, ScoreFunction, Task};

/// The letters considered as vowels (after lowercasing).
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
/// The multiplier applied to the vowel count of the agent name.
const VOWEL_WEIGHT: f64 = 1.5;
/// The bonus multiplier applied when lengths share a common factor.
const COMMON_FACTOR_BONUS: f64 = 1.5;

/// _This is the default score function._ It rates an agent for a task as
/// follows:
///
/// 1. When the length of the task name (see `Task::name`) is even, the base
///    score is the number of vowels in the agent name times 1.5.
/// 2. Otherwise, the base score is the number of consonants in the agent
///    name. Characters which are not letters count neither as vowels nor as
///    consonants.
/// 3. When the length of the task name and that of the agent name share a
///    common factor greater than one, the base score is increased by 50%.
///
/// All lengths are counted in characters.
///
/// # Example
/// ```
/// # use shipmatch::*;
/// let score = SuitabilityScore.score(&Agent::new("Al"), &Task::new("100 Main"));
/// // "Main" has an even length; "Al" has one vowel; gcd(4, 2) = 2
/// assert_eq!(2.25, score);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct SuitabilityScore;

impl ScoreFunction for SuitabilityScore {
    fn score(&self, agent: &Agent, task: &Task) -> f64 {
        let task_len  = task.name().chars().count();
        let agent_len = agent.name.chars().count();

        let mut score = if task_len % 2 == 0 {
            vowels(&agent.name) as f64 * VOWEL_WEIGHT
        } else {
            consonants(&agent.name) as f64
        };

        if gcd(task_len, agent_len) > 1 {
            score *= COMMON_FACTOR_BONUS;
        }
        score
    }
}

fn is_vowel(c: char) -> bool {
    c.to_lowercase().any(|l| VOWELS.contains(&l))
}
fn vowels(name: &str) -> usize {
    name.chars().filter(|c| is_vowel(*c)).count()
}
fn consonants(name: &str) -> usize {
    name.chars().filter(|c| c.is_alphabetic() && !is_vowel(*c)).count()
}
/// Euclid's algorithm. Note: gcd(0, x) = x.
fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
