//! Parser for STRIDE secondary-structure reports.
//!
//! Each residue appears on an `ASG` line with its one-letter secondary
//! structure code at byte offset 24.

/// STRIDE codes that are tallied, in output column order
pub const STRIDE_CODES: [char; 8] = ['H', 'G', 'I', 'E', 'B', 'T', 'C', 'S'];

const ASG_CODE_OFFSET: usize = 24;

/// Residue counts per secondary-structure class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondaryStructureCounts {
    /// Alpha helix
    pub alpha_helix: u32,
    /// 3-10 helix
    pub helix_310: u32,
    /// Pi helix
    pub pi_helix: u32,
    /// Extended strand
    pub strand: u32,
    /// Isolated beta bridge
    pub bridge: u32,
    /// Turn
    pub turn: u32,
    /// Coil
    pub coil: u32,
    /// Bend
    pub bend: u32,
}

impl SecondaryStructureCounts {
    /// Count one residue; codes outside [`STRIDE_CODES`] are ignored
    pub fn record(&mut self, code: char) {
        match code {
            'H' => self.alpha_helix += 1,
            'G' => self.helix_310 += 1,
            'I' => self.pi_helix += 1,
            'E' => self.strand += 1,
            'B' => self.bridge += 1,
            'T' => self.turn += 1,
            'C' => self.coil += 1,
            'S' => self.bend += 1,
            _ => {}
        }
    }
}

/// Tally the secondary-structure codes of a STRIDE report
#[must_use]
pub fn parse_stride_report(text: &str) -> SecondaryStructureCounts {
    let mut counts = SecondaryStructureCounts::default();
    for line in text.lines().filter(|l| l.starts_with("ASG")) {
        if let Some(code) = line.as_bytes().get(ASG_CODE_OFFSET) {
            counts.record(char::from(*code));
        }
    }
    counts
}
