//! Assemble job documents from a parsed batch.
//!
//! In [`GroupingMode::Combined`] a file becomes one job named after the file,
//! with one chain per record. In [`GroupingMode::Split`] every record becomes
//! its own single-chain job named `<file>_<NNN>_<label>`, where `NNN` is the
//! 1-based record position padded to three digits.

use tracing::{debug, warn};

use crate::core::job::{JobDocument, SequenceEntry};
use crate::core::record::{Batch, Record};
use crate::core::types::{EmptySequencePolicy, GroupingMode};
use crate::jobs::chain_ids::generate_ids;
use crate::jobs::sanitize::{sanitize_label, sanitize_sequence};

/// Builds job documents using run-level settings shared by every job
#[derive(Debug, Clone)]
pub struct JobBuilder {
    model_seeds: Vec<i64>,
    mode: GroupingMode,
    empty_policy: EmptySequencePolicy,
}

impl Default for JobBuilder {
    fn default() -> Self {
        Self::new(&[], GroupingMode::default())
    }
}

impl JobBuilder {
    /// An empty seed list means the default seed `[1]`.
    pub fn new(model_seeds: &[i64], mode: GroupingMode) -> Self {
        Self {
            model_seeds: model_seeds.to_vec(),
            mode,
            empty_policy: EmptySequencePolicy::default(),
        }
    }

    #[must_use]
    pub fn with_empty_policy(mut self, policy: EmptySequencePolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Build the jobs for one batch. An empty batch yields no jobs.
    #[must_use]
    pub fn build(&self, batch: &Batch) -> Vec<JobDocument> {
        self.build_labelled(batch)
            .into_iter()
            .map(|(job, _)| job)
            .collect()
    }

    /// Like [`JobBuilder::build`], pairing each job with the labels of the
    /// records it holds, in chain order.
    #[must_use]
    pub fn build_labelled(&self, batch: &Batch) -> Vec<(JobDocument, Vec<String>)> {
        match self.mode {
            GroupingMode::Combined => self.build_combined(batch).into_iter().collect(),
            GroupingMode::Split => self.build_split(batch),
        }
    }

    fn build_combined(&self, batch: &Batch) -> Option<(JobDocument, Vec<String>)> {
        let (labels, sequences): (Vec<String>, Vec<String>) = batch
            .records
            .iter()
            .filter_map(|record| {
                let sequence = self.kept_sequence(batch, record)?;
                Some((record.label.clone(), sequence))
            })
            .unzip();

        if sequences.is_empty() {
            return None;
        }

        let entries = generate_ids(sequences.len())
            .into_iter()
            .zip(sequences)
            .map(|(id, sequence)| SequenceEntry::protein(id, sequence))
            .collect();

        let job = JobDocument::new(&batch.base_name, entries, &self.model_seeds);
        debug!("Job {}: chain IDs {:?}", job.name, job.chain_ids());
        Some((job, labels))
    }

    fn build_split(&self, batch: &Batch) -> Vec<(JobDocument, Vec<String>)> {
        batch
            .records
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let sequence = self.kept_sequence(batch, record)?;
                let name = split_job_name(&batch.base_name, i, &record.label);

                // Each record gets a fresh single-entry id batch
                let entries = generate_ids(1)
                    .into_iter()
                    .map(|id| SequenceEntry::protein(id, sequence.clone()))
                    .collect();

                debug!("Job {name}: record '{}', {} residues", record.label, sequence.len());
                let job = JobDocument::new(name, entries, &self.model_seeds);
                Some((job, vec![record.label.clone()]))
            })
            .collect()
    }

    /// Sanitized sequence for `record`, or None if the empty-sequence policy
    /// leaves it out.
    fn kept_sequence(&self, batch: &Batch, record: &Record) -> Option<String> {
        let sequence = sanitize_sequence(&record.raw_sequence);
        if !sequence.is_empty() {
            return Some(sequence);
        }

        match self.empty_policy {
            EmptySequencePolicy::Keep => {
                warn!(
                    "Record '{}' in {} has no standard residues; keeping empty sequence",
                    record.label,
                    batch.source.display()
                );
                Some(sequence)
            }
            EmptySequencePolicy::Drop => {
                warn!(
                    "Record '{}' in {} has no standard residues; skipping",
                    record.label,
                    batch.source.display()
                );
                None
            }
        }
    }
}

/// Name of the split-mode job for the record at zero-based `index`.
#[must_use]
pub fn split_job_name(base_name: &str, index: usize, label: &str) -> String {
    format!("{base_name}_{:03}_{}", index + 1, sanitize_label(label))
}
