//! JSON and YAML codecs for the resume document.
//!
//! Export is plain serialization; import parses to a generic value and then
//! routes through the same structural merge as load-time hydration, so an
//! imported document gets exactly the schema-drift tolerance of a stored
//! one and nothing more.

use serde_json::Value;

use cvkit_core::resume::ResumeData;
use cvkit_core::{CvError, Result};

use crate::merge::merge_with_default;

/// Data formats accepted for document import/export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Sniffs the format from a file name. Anything other than `.json`,
    /// `.yaml` or `.yml` is rejected before any parse attempt.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".json") {
            Ok(Self::Json)
        } else if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Ok(Self::Yaml)
        } else {
            Err(CvError::unsupported_format(file_name))
        }
    }
}

/// Serializes a document to JSON with 2-space indentation.
pub fn to_json(resume: &ResumeData) -> Result<String> {
    Ok(serde_json::to_string_pretty(resume)?)
}

/// Serializes a document to YAML.
pub fn to_yaml(resume: &ResumeData) -> Result<String> {
    serde_yaml::to_string(resume).map_err(|e| CvError::serialization("YAML", e.to_string()))
}

/// Parses a JSON document. Malformed input is an error; structurally odd but
/// well-formed input goes through the merge, all-or-nothing.
pub fn from_json(content: &str) -> Result<ResumeData> {
    let value: Value = serde_json::from_str(content)?;
    Ok(merge_with_default(&value))
}

/// Parses a YAML document, with the same merge semantics as JSON.
pub fn from_yaml(content: &str) -> Result<ResumeData> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| CvError::serialization("YAML", e.to_string()))?;
    Ok(merge_with_default(&value))
}

/// Parses a document in the given format.
pub fn parse(format: DataFormat, content: &str) -> Result<ResumeData> {
    match format {
        DataFormat::Json => from_json(content),
        DataFormat::Yaml => from_yaml(content),
    }
}
