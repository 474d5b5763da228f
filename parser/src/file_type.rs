//! Source format detection and classification.

use std::path::Path;

/// The export format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Step7 symbol table export (.asc), fixed-column.
    Step7Asc,
    /// TIA Portal tag export (.sdf), comma-delimited.
    TiaSdf,
    /// WinCC flexible tag export (.csv), tab-delimited.
    FlexCsv,
    /// Unknown format.
    Unknown,
}

impl SourceFormat {
    /// Determines the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("asc") => SourceFormat::Step7Asc,
            Some(ext) if ext.eq_ignore_ascii_case("sdf") => SourceFormat::TiaSdf,
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::FlexCsv,
            _ => SourceFormat::Unknown,
        }
    }

    /// Returns true if this format has a decoder.
    pub fn is_supported(&self) -> bool {
        !matches!(self, SourceFormat::Unknown)
    }

    /// Returns the file extensions associated with this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SourceFormat::Step7Asc => &["asc"],
            SourceFormat::TiaSdf => &["sdf"],
            SourceFormat::FlexCsv => &["csv"],
            SourceFormat::Unknown => &[],
        }
    }
}
