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

//! This module checks the properties both solvers must satisfy on randomly
//! generated score matrices.

use rand::{rngs::StdRng, Rng, SeedableRng};
use shipmatch::*;

/// Integral scores keep the sums exact regardless of the summation order.
fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> ScoreMatrix {
    let rows = (0..rows)
        .map(|_| (0..cols).map(|_| rng.random_range(0..100) as f64).collect())
        .collect();
    ScoreMatrix::from_rows(rows)
}

/// The best total over all the ways to give distinct columns to the rows
/// (leaving rows unmatched when there are fewer columns than rows).
fn brute_force(matrix: &ScoreMatrix) -> f64 {
    fn explore(m: &ScoreMatrix, row: usize, used: &mut Vec<bool>, left: usize) -> f64 {
        if row == m.nb_rows() || left == 0 {
            return 0.0;
        }
        let rows_left = m.nb_rows() - row;
        // skipping this row is only allowed if the others can still use all the columns
        let mut best = if rows_left > left {
            explore(m, row + 1, used, left)
        } else {
            f64::NEG_INFINITY
        };
        for col in 0..m.nb_cols() {
            if !used[col] {
                used[col] = true;
                let value = m.row(row)[col] + explore(m, row + 1, used, left - 1);
                used[col] = false;
                best = best.max(value);
            }
        }
        best
    }
    let left = matrix.nb_rows().min(matrix.nb_cols());
    explore(matrix, 0, &mut vec![false; matrix.nb_cols()], left)
}

/// The mapping is one-to-one, within bounds, and matches as many pairs as possible.
fn is_valid(matrix: &ScoreMatrix, mapping: &[Option<usize>]) -> bool {
    let mut seen = vec![false; matrix.nb_cols()];
    let mut count = 0;
    for task in mapping.iter().flatten() {
        if *task >= matrix.nb_cols() || seen[*task] {
            return false;
        }
        seen[*task] = true;
        count += 1;
    }
    mapping.len() == matrix.nb_rows() && count == matrix.nb_rows().min(matrix.nb_cols())
}

#[test]
fn optimal_matches_brute_force_on_square_matrices() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..200 {
        let n       = rng.random_range(1..=7);
        let matrix  = random_matrix(&mut rng, n, n);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert!(is_bijection(&mapping, n));
        assert_eq!(brute_force(&matrix), total_score(&matrix, &mapping));
    }
}

#[test]
fn optimal_matches_brute_force_on_rectangular_matrices() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let rows    = rng.random_range(1..=6);
        let cols    = rng.random_range(1..=6);
        let matrix  = random_matrix(&mut rng, rows, cols);
        let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert!(is_valid(&matrix, &mapping));
        assert_eq!(brute_force(&matrix), total_score(&matrix, &mapping));
    }
}

#[test]
fn optimal_dominates_greedy() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let n      = rng.random_range(1..=30);
        let matrix = random_matrix(&mut rng, n, n);
        let greedy = Greedy.solve(&matrix, &NoCutoff).unwrap();
        let exact  = Hungarian.solve(&matrix, &NoCutoff).unwrap();
        assert!(is_bijection(&greedy, n));
        assert!(is_bijection(&exact, n));
        assert!(total_score(&matrix, &exact) >= total_score(&matrix, &greedy));
    }
}

#[test]
fn greedy_is_valid_on_rectangular_matrices() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..100 {
        let rows    = rng.random_range(1..=12);
        let cols    = rng.random_range(1..=12);
        let matrix  = random_matrix(&mut rng, rows, cols);
        let mapping = Greedy.solve(&matrix, &NoCutoff).unwrap();
        assert!(is_valid(&matrix, &mapping));
    }
}

#[test]
fn greedy_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    let matrix  = random_matrix(&mut rng, 20, 20);
    let first   = Greedy.solve(&matrix, &NoCutoff).unwrap();
    for _ in 0..5 {
        assert_eq!(first, Greedy.solve(&matrix, &NoCutoff).unwrap());
    }
}

#[test]
fn uniform_matrices_total_n_times_v() {
    for n in 1..=10 {
        let matrix = ScoreMatrix::uniform(n, n, 2.5);
        for strategy in [Strategy::Greedy, Strategy::Optimal] {
            let mapping = strategy.solve(&matrix, &NoCutoff).unwrap();
            assert!(is_bijection(&mapping, n));
            assert_eq!(n as f64 * 2.5, total_score(&matrix, &mapping));
        }
    }
}

#[test]
fn hundred_by_hundred_is_solved() {
    let mut rng = StdRng::seed_from_u64(100);
    let matrix  = random_matrix(&mut rng, 100, 100);
    let mapping = Hungarian.solve(&matrix, &NoCutoff).unwrap();
    assert!(is_bijection(&mapping, 100));
}

#[test]
fn solvers_can_run_concurrently() {
    let mut rng = StdRng::seed_from_u64(5);
    let matrices: Vec<ScoreMatrix> = (0..16).map(|_| random_matrix(&mut rng, 25, 25)).collect();

    let sequential: Vec<f64> = matrices.iter()
        .map(|m| total_score(m, &Hungarian.solve(m, &NoCutoff).unwrap()))
        .collect();
    let parallel: Vec<f64> = run_parallel(&matrices, 4, |m| {
        total_score(m, &Hungarian.solve(m, &NoCutoff).unwrap())
    });
    assert_eq!(sequential, parallel);
}
