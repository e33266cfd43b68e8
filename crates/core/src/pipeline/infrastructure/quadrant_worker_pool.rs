use std::thread;

use crossbeam_channel::bounded;

use crate::error::{Result, SeamBlendError};
use crate::shared::constants::DEFAULT_WORKER_THREADS;

/// Fan-out/fan-in over a handful of independent jobs.
///
/// Jobs go onto a bounded MPMC queue that up to `threads` scoped workers
/// drain; results come back on a second channel and are reordered to match
/// the input. `map` returns only after every worker has been joined, which
/// is the barrier between pipeline stages. Each job value is moved into
/// exactly one worker, so no locking is needed.
#[derive(Clone, Copy, Debug)]
pub struct QuadrantWorkerPool {
    threads: usize,
}

impl QuadrantWorkerPool {
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }

    pub fn map<T, R, F>(&self, jobs: Vec<T>, work: F) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync,
    {
        let count = jobs.len();
        if count == 0 {
            return Ok(Vec::new());
        }

        let (job_tx, job_rx) = bounded::<(usize, T)>(count);
        let (done_tx, done_rx) = bounded::<(usize, R)>(count);
        for job in jobs.into_iter().enumerate() {
            job_tx
                .send(job)
                .map_err(|_| SeamBlendError::Worker("job queue closed".into()))?;
        }
        drop(job_tx);

        let workers = self.threads.min(count);
        let work = &work;
        let panicked = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let job_rx = job_rx.clone();
                    let done_tx = done_tx.clone();
                    scope.spawn(move || {
                        for (slot, job) in job_rx {
                            if done_tx.send((slot, work(job))).is_err() {
                                break;
                            }
                        }
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join())
                .filter(|joined| joined.is_err())
                .count()
        });
        drop(done_tx);

        if panicked > 0 {
            return Err(SeamBlendError::Worker(format!(
                "{panicked} worker thread(s) panicked"
            )));
        }

        let mut slots: Vec<Option<R>> = (0..count).map(|_| None).collect();
        for (slot, result) in done_rx {
            slots[slot] = Some(result);
        }
        slots
            .into_iter()
            .enumerate()
            .map(|(slot, r)| {
                r.ok_or_else(|| SeamBlendError::Worker(format!("job {slot} produced no result")))
            })
            .collect()
    }
}

impl Default for QuadrantWorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_WORKER_THREADS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    #[case(16)]
    fn test_results_keep_input_order(#[case] threads: usize) {
        let pool = QuadrantWorkerPool::new(threads);
        let out = pool.map(vec![1, 2, 3, 4], |x| x * 10).unwrap();
        assert_eq!(out, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_empty_jobs() {
        let out: Vec<u8> = QuadrantWorkerPool::default().map(Vec::<u8>::new(), |x| x).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_threads_still_runs_jobs() {
        let out = QuadrantWorkerPool::new(0).map(vec![1, 2, 3], |x| x + 1).unwrap();
        assert_eq!(out, vec![2, 3, 4]);
    }

    #[test]
    fn test_jobs_are_moved_and_mutated() {
        let pool = QuadrantWorkerPool::new(4);
        let buffers = vec![vec![0u8; 3], vec![1u8; 3]];
        let out = pool
            .map(buffers, |mut b| {
                b.push(9);
                b
            })
            .unwrap();
        assert_eq!(out, vec![vec![0, 0, 0, 9], vec![1, 1, 1, 9]]);
    }

    #[test]
    fn test_runs_on_multiple_threads() {
        let seen = Mutex::new(HashSet::new());
        let pool = QuadrantWorkerPool::new(4);
        pool.map(vec![(); 4], |_| {
            seen.lock().unwrap().insert(thread::current().id());
            std::thread::sleep(std::time::Duration::from_millis(20));
        })
        .unwrap();
        assert!(seen.lock().unwrap().len() > 1);
    }

    #[test]
    fn test_worker_panic_is_worker_error() {
        let pool = QuadrantWorkerPool::new(2);
        let result = pool.map(vec![1, 2, 3], |x| {
            if x == 2 {
                panic!("boom");
            }
            x
        });
        assert!(matches!(result, Err(SeamBlendError::Worker(_))));
    }
}
