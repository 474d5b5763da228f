//! JSON export records for the tag and alarm registries.
//!
//! The registry files are consumed by downstream SCADA tooling that
//! expects PascalCase member names, so the serde renames here are part of
//! the file format and must not change.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while serializing a registry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A symbol joined with the consolidated tag that covers its address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundSymbol {
    pub symbol_name: String,
    pub symbol_periph: String,
    pub symbol_address_hi: String,
    pub symbol_address_lo: String,
    pub comment: String,
    /// Name of the covering consolidated tag.
    pub tag_name: String,
    /// Byte index of the symbol within the covering tag.
    pub index: u32,
    /// Bit number within the byte, 0 when not bit-addressed.
    pub bit_nr: u32,
    pub size: u32,
}

/// The tag registry handed to the external serializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagRegistry {
    pub connection_name: String,
    /// Unix timestamp of generation.
    pub timestamp: i64,
    pub source_filename: String,
    pub source_info: String,
    pub tags: Vec<BoundSymbol>,
}

/// One alarm resolved onto a consolidated tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmRecord {
    pub number: u32,
    pub tag_name: String,
    /// Byte index of the trigger bit within the tag.
    pub index: u32,
    /// Bit number of the trigger bit within that byte.
    pub bit_nr: u32,
    pub texts: Vec<String>,
}

/// The alarm registry handed to the external serializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmRegistry {
    pub connection_name: String,
    /// Unix timestamp of generation.
    pub timestamp: i64,
    pub source_filename: String,
    /// First line of the source export, kept for traceability.
    pub source_info: String,
    pub alarms: Vec<AlarmRecord>,
}

/// Serializes a registry with a single-space indent.
///
/// The indent matches the registry files emitted by earlier releases so
/// that existing consumers can diff generations.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
