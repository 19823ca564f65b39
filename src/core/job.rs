use serde::{Deserialize, Serialize};

/// Dialect tag expected by the AlphaFold3 input loader
pub const AF3_DIALECT: &str = "alphafold3";

/// Input format version written into every job
pub const AF3_VERSION: u32 = 1;

/// Seeds used when none are configured
pub const DEFAULT_MODEL_SEEDS: [i64; 1] = [1];

/// Chain identifier within one job (`A`, `B`, ..., `Z`, `AA`, `AB`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub String);

impl ChainId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A protein chain entry: `{"id": [...], "sequence": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinChain {
    pub id: Vec<ChainId>,
    pub sequence: String,
}

/// One element of a job's `sequences` list, tagged by molecule type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceEntry {
    Protein(ProteinChain),
}

impl SequenceEntry {
    pub fn protein(id: ChainId, sequence: impl Into<String>) -> Self {
        Self::Protein(ProteinChain {
            id: vec![id],
            sequence: sequence.into(),
        })
    }

    /// First chain identifier of this entry
    #[must_use]
    pub fn chain_id(&self) -> Option<&ChainId> {
        match self {
            Self::Protein(chain) => chain.id.first(),
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        match self {
            Self::Protein(chain) => &chain.sequence,
        }
    }
}

/// An AlphaFold3 job description.
///
/// Field order is the serialized key order and must stay
/// `name, sequences, modelSeeds, dialect, version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDocument {
    pub name: String,
    pub sequences: Vec<SequenceEntry>,
    pub model_seeds: Vec<i64>,
    pub dialect: String,
    pub version: u32,
}

impl JobDocument {
    /// Create a job with the fixed dialect and version tags.
    ///
    /// An empty seed list falls back to [`DEFAULT_MODEL_SEEDS`].
    pub fn new(name: impl Into<String>, sequences: Vec<SequenceEntry>, model_seeds: &[i64]) -> Self {
        let model_seeds = if model_seeds.is_empty() {
            DEFAULT_MODEL_SEEDS.to_vec()
        } else {
            model_seeds.to_vec()
        };

        Self {
            name: name.into(),
            sequences,
            model_seeds,
            dialect: AF3_DIALECT.to_string(),
            version: AF3_VERSION,
        }
    }

    /// Chain identifiers in `sequences` order
    #[must_use]
    pub fn chain_ids(&self) -> Vec<&str> {
        self.sequences
            .iter()
            .filter_map(SequenceEntry::chain_id)
            .map(ChainId::as_str)
            .collect()
    }

    /// Serialize as pretty-printed JSON (two-space indent) with non-ASCII
    /// characters written as `\uXXXX` escapes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self).map(|json| escape_non_ascii(&json))
    }
}

/// Replace every non-ASCII character with its UTF-16 `\uXXXX` escape(s).
///
/// Non-ASCII text only occurs inside JSON strings, so the result is
/// equivalent JSON.
fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_document_key_order() {
        let job = JobDocument::new(
            "dimer",
            vec![SequenceEntry::protein(ChainId::new("A"), "ACDEFG")],
            &[],
        );
        let json = job.to_json().unwrap();

        let name = json.find("\"name\"").unwrap();
        let sequences = json.find("\"sequences\"").unwrap();
        let seeds = json.find("\"modelSeeds\"").unwrap();
        let dialect = json.find("\"dialect\"").unwrap();
        let version = json.find("\"version\"").unwrap();
        assert!(name < sequences && sequences < seeds && seeds < dialect && dialect < version);
    }

    #[test]
    fn test_job_document_schema() {
        let job = JobDocument::new(
            "dimer",
            vec![
                SequenceEntry::protein(ChainId::new("A"), "ACDEFG"),
                SequenceEntry::protein(ChainId::new("B"), "GGHIKL"),
            ],
            &[1, 2],
        );
        let value: serde_json::Value = serde_json::from_str(&job.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "dimer",
                "sequences": [
                    {"protein": {"id": ["A"], "sequence": "ACDEFG"}},
                    {"protein": {"id": ["B"], "sequence": "GGHIKL"}}
                ],
                "modelSeeds": [1, 2],
                "dialect": "alphafold3",
                "version": 1
            })
        );
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let job = JobDocument::new(
            "f_001_\u{e9}",
            vec![SequenceEntry::protein(ChainId::new("A"), "MK")],
            &[1],
        );
        let expected = "{\n  \"name\": \"f_001_\\u00e9\",\n  \"sequences\": [\n    {\n      \"protein\": {\n        \"id\": [\n          \"A\"\n        ],\n        \"sequence\": \"MK\"\n      }\n    }\n  ],\n  \"modelSeeds\": [\n    1\n  ],\n  \"dialect\": \"alphafold3\",\n  \"version\": 1\n}";
        assert_eq!(job.to_json().unwrap(), expected);

        // Characters outside the BMP become surrogate pairs
        assert_eq!(escape_non_ascii("\u{1f9ec}"), "\\ud83e\\uddec");

        let parsed: JobDocument = serde_json::from_str(&job.to_json().unwrap()).unwrap();
        assert_eq!(parsed.name, "f_001_\u{e9}");
    }

    #[test]
    fn test_default_model_seeds() {
        let job = JobDocument::new("x", vec![SequenceEntry::protein(ChainId::new("A"), "")], &[]);
        assert_eq!(job.model_seeds, vec![1]);
        assert_eq!(job.chain_ids(), vec!["A"]);
    }

    #[test]
    fn test_roundtrip_from_json() {
        let text = r#"{"name":"m","sequences":[{"protein":{"id":["A"],"sequence":"MK"}}],"modelSeeds":[7],"dialect":"alphafold3","version":1}"#;
        let job: JobDocument = serde_json::from_str(text).unwrap();
        assert_eq!(job.sequences[0].sequence(), "MK");
        assert_eq!(job.model_seeds, vec![7]);
    }
}
