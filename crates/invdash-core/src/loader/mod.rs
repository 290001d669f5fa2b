//! CSV loading into invoice datasets.

mod parser;

pub use parser::CsvLoader;

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::models::record::Dataset;

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, InputError>;

/// How rows whose field count differs from the header are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Pad short rows with empty strings and drop extra values.
    #[default]
    Lenient,
    /// Reject ragged rows and empty header names.
    Strict,
}

impl std::fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadPolicy::Lenient => write!(f, "lenient"),
            LoadPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Trait for dataset loaders.
pub trait DatasetLoader {
    /// Load a dataset from text.
    fn load(&self, text: &str) -> Result<Dataset>;

    /// Load a dataset from raw bytes, which must be UTF-8.
    fn load_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let text = std::str::from_utf8(bytes).map_err(|e| InputError::NotUtf8 {
            offset: e.valid_up_to(),
        })?;
        self.load(text)
    }
}

/// Load CSV text with the lenient policy.
///
/// Lenient loading of text never fails.
pub fn load(text: &str) -> Dataset {
    CsvLoader::new().parse_lenient(text)
}

/// Load CSV bytes with the lenient policy.
pub fn load_bytes(bytes: &[u8]) -> Result<Dataset> {
    CsvLoader::new().load_bytes(bytes)
}
