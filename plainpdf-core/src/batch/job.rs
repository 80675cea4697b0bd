//! Batch job definitions

use crate::error::{PdfError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One text file to convert and where to write the PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl BatchJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Job writing `<out_dir>/<input stem>.pdf`.
    pub fn into_dir(input: impl Into<PathBuf>, out_dir: impl AsRef<Path>) -> Self {
        let input = input.into();
        let stem = input
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_else(|| "output".into());
        let mut output = out_dir.as_ref().join(stem);
        output.set_extension("pdf");
        Self { input, output }
    }

    /// Get a display name for the job
    pub fn display_name(&self) -> String {
        format!(
            "Convert {}",
            self.input.file_name().unwrap_or_default().to_string_lossy()
        )
    }
}

/// Builds one job per input, all writing into `out_dir`. Two inputs that
/// would produce the same output file are rejected.
pub fn jobs_for_inputs<P: AsRef<Path>>(
    inputs: &[P],
    out_dir: impl AsRef<Path>,
) -> Result<Vec<BatchJob>> {
    let out_dir = out_dir.as_ref();
    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let job = BatchJob::into_dir(input.as_ref(), out_dir);
        if !seen.insert(job.output.clone()) {
            return Err(PdfError::InvalidConfiguration(format!(
                "more than one input would be written to {}",
                job.output.display()
            )));
        }
        jobs.push(job);
    }
    Ok(jobs)
}
