//! Scoped worker threads for parallel batch conversion

use crate::batch::{BatchJob, JobResult};
use crate::converter::TextConverter;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

/// Runs `jobs` on up to `workers` threads. Each worker claims the next
/// unstarted job; results come back in submission order.
pub(crate) fn run_jobs(
    converter: &TextConverter,
    jobs: &[BatchJob],
    workers: usize,
    stop_on_error: bool,
) -> Vec<JobResult> {
    let next = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);
    let workers = workers.clamp(1, jobs.len().max(1));

    let mut results: Vec<Option<JobResult>> = vec![None; jobs.len()];
    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let (next, stop) = (&next, &stop);
                scope.spawn(move || {
                    let mut done = Vec::new();
                    loop {
                        let index = next.fetch_add(1, Ordering::SeqCst);
                        let Some(job) = jobs.get(index) else {
                            break;
                        };
                        let result = if stop.load(Ordering::SeqCst) {
                            JobResult::Cancelled {
                                job_name: job.display_name(),
                            }
                        } else {
                            let result = run_job(converter, job, worker);
                            if stop_on_error && result.is_failed() {
                                stop.store(true, Ordering::SeqCst);
                            }
                            result
                        };
                        done.push((index, result));
                    }
                    done
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(done) => {
                    for (index, result) in done {
                        results[index] = Some(result);
                    }
                }
                Err(_) => tracing::error!("batch worker panicked"),
            }
        }
    });

    results
        .into_iter()
        .zip(jobs)
        .map(|(result, job)| {
            result.unwrap_or_else(|| JobResult::Failed {
                job_name: job.display_name(),
                duration: Default::default(),
                error: "worker thread panicked".to_string(),
            })
        })
        .collect()
}

fn run_job(converter: &TextConverter, job: &BatchJob, worker: usize) -> JobResult {
    let job_name = job.display_name();
    let start = Instant::now();
    tracing::debug!(worker, input = %job.input.display(), "starting job");

    match converter.convert_file(&job.input, &job.output) {
        Ok(report) => JobResult::Success {
            job_name,
            duration: start.elapsed(),
            output: job.output.clone(),
            report,
        },
        Err(error) => {
            tracing::warn!(worker, input = %job.input.display(), %error, "job failed");
            JobResult::Failed {
                job_name,
                duration: start.elapsed(),
                error: error.to_string(),
            }
        }
    }
}
