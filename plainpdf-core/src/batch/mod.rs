//! Batch conversion of many text files
//!
//! Jobs run on a pool of scoped worker threads. Every job builds and saves
//! its own document, so a failure only affects that job unless
//! [`BatchOptions::stop_on_error`] is set.
//!
//! # Example
//!
//! ```rust,no_run
//! use plainpdf::batch::{jobs_for_inputs, BatchOptions, BatchProcessor};
//! use plainpdf::{LayoutConfig, TextConverter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = TextConverter::new(LayoutConfig::default())?;
//! let mut processor = BatchProcessor::new(converter, BatchOptions::default().with_parallelism(4));
//! processor.add_jobs(jobs_for_inputs(&["a.txt", "b.txt"], "out")?);
//!
//! let summary = processor.execute();
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

use crate::converter::TextConverter;
use std::time::Instant;

pub mod job;
pub mod result;
mod worker;

pub use job::{jobs_for_inputs, BatchJob};
pub use result::{BatchSummary, JobResult};

/// Options for batch processing
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of parallel workers
    pub parallelism: usize,
    /// Whether to stop on first error
    pub stop_on_error: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallelism: num_cpus::get().min(8),
            stop_on_error: false,
        }
    }
}

impl BatchOptions {
    /// Set the number of parallel workers
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    /// Set whether to stop on first error
    pub fn stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }
}

/// Converts a list of jobs with one shared converter.
pub struct BatchProcessor {
    converter: TextConverter,
    options: BatchOptions,
    jobs: Vec<BatchJob>,
}

impl BatchProcessor {
    pub fn new(converter: TextConverter, options: BatchOptions) -> Self {
        Self {
            converter,
            options,
            jobs: Vec::new(),
        }
    }

    pub fn add_job(&mut self, job: BatchJob) {
        self.jobs.push(job);
    }

    pub fn add_jobs(&mut self, jobs: impl IntoIterator<Item = BatchJob>) {
        self.jobs.extend(jobs);
    }

    pub fn jobs(&self) -> &[BatchJob] {
        &self.jobs
    }

    /// Runs every job and reports per-job outcomes. Job failures are
    /// collected, never returned as an error.
    pub fn execute(self) -> BatchSummary {
        if self.jobs.is_empty() {
            return BatchSummary::empty();
        }

        let start_time = Instant::now();
        tracing::info!(
            jobs = self.jobs.len(),
            workers = self.options.parallelism,
            "starting batch"
        );
        let results = worker::run_jobs(
            &self.converter,
            &self.jobs,
            self.options.parallelism,
            self.options.stop_on_error,
        );
        let summary = BatchSummary::from_results(results, start_time.elapsed());
        tracing::info!(
            successful = summary.successful,
            failed = summary.failed,
            cancelled = summary.cancelled,
            "batch finished"
        );
        summary
    }
}
