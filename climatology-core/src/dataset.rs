//! Extraction and strict parsing of the dataset embedded in the source file.
//!
//! The records live in a single `const SOCAL_DATA = {...};` literal inside a
//! larger JavaScript blob. Extraction slices the object literal out between
//! the known declaration prefix and the trailing `};`, then hands it to
//! serde_json so malformed records surface as parse errors with positions
//! rather than being patched over.

use crate::errors::{ClimatologyError, ClimatologyResult};
use crate::observation::{FutureObservation, Observation};
use serde::Deserialize;

/// Name of the constant whose object literal holds the records.
const DATA_CONST: &str = "SOCAL_DATA";
/// Declaration text that introduces the object literal.
const DATA_PREFIX: &str = "const SOCAL_DATA = ";

/// The two record lists the pipeline consumes.
///
/// Either list may be absent from the source object; an absent list is
/// treated as empty rather than as an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceDataset {
    #[serde(default)]
    pub socal_cloudmap_monthly: Vec<Observation>,
    #[serde(default)]
    pub future_socal_cloudmap_monthly: Vec<FutureObservation>,
}

/// Locates and parses the embedded dataset within a source blob.
pub fn extract_dataset(source: &str) -> ClimatologyResult<SourceDataset> {
    let start = source
        .find(DATA_PREFIX)
        .ok_or(ClimatologyError::DataBlockNotFound(DATA_CONST))?;
    let body = &source[start + DATA_PREFIX.len()..];
    // The literal runs to the last `};` in the file, matching how the data
    // export is terminated.
    let end = body
        .rfind("};")
        .ok_or(ClimatologyError::DataBlockNotFound(DATA_CONST))?;
    Ok(serde_json::from_str(&body[..=end])?)
}
