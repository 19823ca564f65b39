//! Drive the conversion over a single file or every FASTA file in a directory.
//!
//! Files are processed one after another. A file that cannot be read as text,
//! holds no records, or (when named explicitly) has an unrecognised extension
//! is skipped with a warning. Problems with the input path itself or with
//! writing output abort the run.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::record::Batch;
use crate::core::types::{EmptySequencePolicy, GroupingMode};
use crate::jobs::builder::JobBuilder;
use crate::jobs::writer::JobWriter;
use crate::jobs::ConvertError;
use crate::parsing::fasta::{has_fasta_extension, parse_fasta_file, DEFAULT_EXTENSIONS};
use crate::utils::validation::normalize_extensions;

/// Run parameters for a conversion
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// FASTA file or directory of FASTA files
    pub input: PathBuf,

    /// Directory receiving the job files
    pub output_dir: PathBuf,

    /// Seeds copied into every job; empty means `[1]`
    pub model_seeds: Vec<i64>,

    /// Recognised input extensions, e.g. `.fasta`
    pub extensions: Vec<String>,

    pub mode: GroupingMode,

    pub empty_policy: EmptySequencePolicy,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            model_seeds: vec![1],
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            mode: GroupingMode::default(),
            empty_policy: EmptySequencePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GroupingMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_model_seeds(mut self, seeds: Vec<i64>) -> Self {
        self.model_seeds = seeds;
        self
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    #[must_use]
    pub fn with_empty_policy(mut self, policy: EmptySequencePolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    fn builder(&self) -> JobBuilder {
        JobBuilder::new(&self.model_seeds, self.mode).with_empty_policy(self.empty_policy)
    }
}

/// A job file written during the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenJob {
    pub path: PathBuf,
    pub name: String,
    pub chain_ids: Vec<String>,

    /// Header labels of the records in the job, in chain order
    pub labels: Vec<String>,

    /// Sanitized residue count per chain
    pub sequence_lengths: Vec<usize>,
}

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Jobs written, in processing order
    pub jobs: Vec<WrittenJob>,

    /// Input files that produced at least one job
    pub files_converted: usize,

    /// Input files skipped with a warning
    pub files_skipped: usize,

    pub mode: GroupingMode,

    pub output_dir: PathBuf,

    /// Where the job count was written
    pub total_jobs_path: PathBuf,
}

impl RunSummary {
    #[must_use]
    pub fn total_jobs(&self) -> usize {
        self.jobs.len()
    }
}

/// Run a full conversion and write the job-count sidecar.
///
/// # Errors
///
/// Returns `ConvertError::PathKindMismatch` if the input is neither a file nor
/// a directory, `ConvertError::ReadDirectory` if the input directory cannot be
/// listed, or `ConvertError::WriteFailure` if any output cannot be written.
pub fn run(config: &ConvertConfig) -> Result<RunSummary, ConvertError> {
    let extensions = normalize_extensions(&config.extensions);

    let inputs = if config.input.is_file() {
        vec![config.input.clone()]
    } else if config.input.is_dir() {
        collect_inputs(&config.input, &extensions)?
    } else {
        return Err(ConvertError::PathKindMismatch(config.input.clone()));
    };

    let writer = JobWriter::create(&config.output_dir)?;
    let builder = config.builder();

    let mut jobs = Vec::new();
    let mut files_converted = 0;
    let mut files_skipped = 0;

    for path in &inputs {
        let outcome = if has_fasta_extension(path, &extensions) {
            convert_file(path, &builder, &writer)
        } else {
            Err(ConvertError::UnsupportedExtension(path.clone()))
        };

        match outcome {
            Ok(written) => {
                files_converted += 1;
                jobs.extend(written);
            }
            Err(e) if e.is_recoverable() => {
                warn!("{e}");
                files_skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let total_jobs_path = writer.write_total_jobs(jobs.len())?;
    info!(
        "Wrote total job count {} to {}",
        jobs.len(),
        total_jobs_path.display()
    );

    Ok(RunSummary {
        jobs,
        files_converted,
        files_skipped,
        mode: config.mode,
        output_dir: config.output_dir.clone(),
        total_jobs_path,
    })
}

/// Convert one FASTA file, writing every job built from it.
///
/// # Errors
///
/// Returns `ConvertError::MalformedInput` if the file cannot be parsed or
/// yields no jobs, or `ConvertError::WriteFailure` if a job cannot be written.
pub fn convert_file(
    path: &Path,
    builder: &JobBuilder,
    writer: &JobWriter,
) -> Result<Vec<WrittenJob>, ConvertError> {
    let records = parse_fasta_file(path).map_err(|e| ConvertError::MalformedInput {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let batch = Batch::from_path(path, records);
    if batch.is_empty() {
        return Err(ConvertError::MalformedInput {
            path: path.to_path_buf(),
            reason: "No sequences found".to_string(),
        });
    }

    let documents = builder.build_labelled(&batch);
    if documents.is_empty() {
        return Err(ConvertError::MalformedInput {
            path: path.to_path_buf(),
            reason: "No sequences left after residue filtering".to_string(),
        });
    }

    info!(
        "{}: {} record{} -> {} job{}",
        path.display(),
        batch.len(),
        if batch.len() == 1 { "" } else { "s" },
        documents.len(),
        if documents.len() == 1 { "" } else { "s" },
    );

    documents
        .into_iter()
        .map(|(job, labels)| {
            let path = writer.write_job(&job)?;
            Ok(WrittenJob {
                path,
                chain_ids: job.chain_ids().into_iter().map(str::to_string).collect(),
                sequence_lengths: job.sequences.iter().map(|s| s.sequence().len()).collect(),
                labels,
                name: job.name,
            })
        })
        .collect()
}

/// List the regular files in `dir` carrying one of `extensions`, sorted by path.
///
/// # Errors
///
/// Returns `ConvertError::ReadDirectory` if the directory cannot be listed.
pub fn collect_inputs<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
) -> Result<Vec<PathBuf>, ConvertError> {
    let read_error = |source| ConvertError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && has_fasta_extension(&path, extensions) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
