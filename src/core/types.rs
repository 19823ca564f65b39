/// How the records of one input file are grouped into jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
    /// One job per input file holding every record as a separate chain
    #[default]
    Combined,
    /// One single-chain job per record
    Split,
}

impl GroupingMode {
    #[must_use]
    pub fn from_split_flag(split: bool) -> Self {
        if split {
            Self::Split
        } else {
            Self::Combined
        }
    }
}

/// What to do with a record whose sequence is empty after residue filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySequencePolicy {
    /// Emit the chain with an empty sequence
    #[default]
    Keep,
    /// Leave the record out of the job, with a warning
    Drop,
}

impl EmptySequencePolicy {
    #[must_use]
    pub fn from_drop_flag(drop_empty: bool) -> Self {
        if drop_empty {
            Self::Drop
        } else {
            Self::Keep
        }
    }
}
