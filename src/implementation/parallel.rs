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

//! This module provides a tiny worker pool used to carry out many independent
//! computations at once. Each job is processed by exactly one thread and the
//! results are handed back in the order of the jobs.

use parking_lot::Mutex;

/// The shared data that may only be manipulated within critical sections
struct Critical<R> {
    /// The index of the next job to hand out
    next: usize,
    /// The result of each job (`None` until the job has been processed)
    results: Vec<Option<R>>,
}

/// Applies `f` to each of the `jobs` using (at most) `nb_threads` threads and
/// returns the results in the order of the jobs.
pub fn run_parallel<J, R, F>(jobs: &[J], nb_threads: usize, f: F) -> Vec<R>
where
    J: Sync,
    R: Send,
    F: Fn(&J) -> R + Sync,
{
    let nb_threads = nb_threads.max(1).min(jobs.len());
    let critical = Mutex::new(Critical {
        next: 0,
        results: jobs.iter().map(|_| None).collect(),
    });

    std::thread::scope(|s| {
        for _ in 0..nb_threads {
            let critical = &critical;
            let f = &f;
            s.spawn(move || loop {
                let i = {
                    let mut shared = critical.lock();
                    if shared.next >= jobs.len() {
                        break;
                    }
                    shared.next += 1;
                    shared.next - 1
                };
                let result = f(&jobs[i]);
                critical.lock().results[i] = Some(result);
            });
        }
    });

    critical.into_inner().results.into_iter().flatten().collect()
}

#[cfg(test)]
mod test_parallel {
    use super::run_parallel;

    #[test]
    fn results_come_back_in_job_order() {
        let jobs: Vec<usize> = (0..100).collect();
        let out = run_parallel(&jobs, 8, |x| x * x);
        assert_eq!(jobs.iter().map(|x| x * x).collect::<Vec<_>>(), out);
    }
    #[test]
    fn works_with_a_single_thread() {
        let jobs = ["a", "bb", "ccc"];
        assert_eq!(vec![1, 2, 3], run_parallel(&jobs, 1, |s| s.len()));
    }
    #[test]
    fn zero_threads_means_one() {
        let jobs = [1, 2];
        assert_eq!(vec![2, 4], run_parallel(&jobs, 0, |x| x * 2));
    }
    #[test]
    fn no_job_no_result() {
        let jobs: [u8; 0] = [];
        assert!(run_parallel(&jobs, 4, |x| *x).is_empty());
    }
}
