//! Results and summaries for batch operations

use crate::converter::ConversionReport;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Result of a single job in the batch
#[derive(Debug, Clone)]
pub enum JobResult {
    /// Job completed successfully
    Success {
        job_name: String,
        duration: Duration,
        output: PathBuf,
        report: ConversionReport,
    },

    /// Job failed with an error
    Failed {
        job_name: String,
        duration: Duration,
        error: String,
    },

    /// Job never started because an earlier job failed
    Cancelled { job_name: String },
}

impl JobResult {
    pub fn is_success(&self) -> bool {
        matches!(self, JobResult::Success { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobResult::Failed { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, JobResult::Cancelled { .. })
    }

    pub fn job_name(&self) -> &str {
        match self {
            JobResult::Success { job_name, .. }
            | JobResult::Failed { job_name, .. }
            | JobResult::Cancelled { job_name } => job_name,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            JobResult::Success { duration, .. } | JobResult::Failed { duration, .. } => {
                Some(*duration)
            }
            JobResult::Cancelled { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            JobResult::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for JobResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobResult::Success {
                job_name,
                duration,
                output,
                report,
            } => {
                write!(
                    f,
                    "✓ {} - {} pages to {} in {:.2}s",
                    job_name,
                    report.pages,
                    output.display(),
                    duration.as_secs_f64()
                )
            }
            JobResult::Failed {
                job_name,
                duration,
                error,
            } => {
                write!(
                    f,
                    "✗ {job_name} - failed after {:.2}s: {error}",
                    duration.as_secs_f64()
                )
            }
            JobResult::Cancelled { job_name } => {
                write!(f, "⚠ {job_name} - cancelled")
            }
        }
    }
}

/// Summary of a batch operation
#[derive(Debug)]
pub struct BatchSummary {
    pub total_jobs: usize,
    pub successful: usize,
    pub failed: usize,
    pub cancelled: usize,
    pub duration: Duration,
    /// Per-job results, in submission order
    pub results: Vec<JobResult>,
}

impl BatchSummary {
    pub fn empty() -> Self {
        Self::from_results(Vec::new(), Duration::from_secs(0))
    }

    pub(crate) fn from_results(results: Vec<JobResult>, duration: Duration) -> Self {
        Self {
            total_jobs: results.len(),
            successful: results.iter().filter(|r| r.is_success()).count(),
            failed: results.iter().filter(|r| r.is_failed()).count(),
            cancelled: results.iter().filter(|r| r.is_cancelled()).count(),
            duration,
            results,
        }
    }

    pub fn all_successful(&self) -> bool {
        self.successful == self.total_jobs
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_jobs == 0 {
            100.0
        } else {
            (self.successful as f64 / self.total_jobs as f64) * 100.0
        }
    }

    pub fn total_pages(&self) -> usize {
        self.results
            .iter()
            .map(|r| match r {
                JobResult::Success { report, .. } => report.pages,
                _ => 0,
            })
            .sum()
    }

    /// Format summary as a report
    pub fn format_report(&self) -> String {
        let mut report = format!(
            "Batch Conversion Summary\n\
             ========================\n\
             Total Jobs: {}\n\
             Successful: {} ({:.1}%)\n\
             Failed: {}\n\
             Pages: {}\n\
             Duration: {:.2}s\n",
            self.total_jobs,
            self.successful,
            self.success_rate(),
            self.failed,
            self.total_pages(),
            self.duration.as_secs_f64()
        );

        if self.cancelled > 0 {
            report.push_str(&format!("Cancelled: {}\n", self.cancelled));
        }

        let failed_jobs: Vec<_> = self.results.iter().filter(|r| r.is_failed()).collect();
        if !failed_jobs.is_empty() {
            report.push_str("\nFailed Jobs:\n");
            for job in failed_jobs {
                report.push_str(&format!("  - {job}\n"));
            }
        }

        report
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_report())
    }
}
