//! Lookup tables for controller memory-area codes.
//!
//! An area code is a letter prefix that names a memory region (I=input,
//! M=marker/flag, Q=output) with an optional width suffix (B=byte, W=word,
//! D=double word). Numbered data blocks (`DB<n>`) are addressed separately
//! and use the `DBX`/`DBB`/`DBW`/`DBD` type tokens instead.

use phf::phf_map;

/// Widths for the fixed-area tokens: `(declared, image)`.
///
/// `declared` is the size the symbol reports in the tag registry (0 for
/// bit-addressed items). `image` is the width marked in the occupancy
/// image; a bit still claims the byte it lives in.
static AREA_WIDTHS: phf::Map<&'static str, (u16, u16)> = phf_map! {
    "I" => (0, 1),
    "IB" => (1, 1),
    "IW" => (2, 2),
    "ID" => (4, 4),
    "M" => (0, 1),
    "MB" => (1, 1),
    "MW" => (2, 2),
    "MD" => (4, 4),
    "Q" => (0, 1),
    "QB" => (1, 1),
    "QW" => (2, 2),
    "QD" => (4, 4),
};

/// Widths for the data-block type tokens: `(declared, image)`.
static DB_TYPE_WIDTHS: phf::Map<&'static str, (u16, u16)> = phf_map! {
    "DBX" => (0, 1),
    "DBB" => (1, 1),
    "DBW" => (2, 2),
    "DBD" => (4, 4),
};

/// The three fixed 64K memory areas of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryArea {
    Inputs,
    Markers,
    Outputs,
}

impl MemoryArea {
    /// Selects the area from the leading letter of an area-code token.
    pub fn from_token(token: &str) -> Option<MemoryArea> {
        match token.chars().next() {
            Some('I') => Some(MemoryArea::Inputs),
            Some('M') => Some(MemoryArea::Markers),
            Some('Q') => Some(MemoryArea::Outputs),
            _ => None,
        }
    }

    /// The label used for consolidated tags packed from this area.
    pub fn label(&self) -> &'static str {
        match self {
            MemoryArea::Inputs => "IB",
            MemoryArea::Markers => "MB",
            MemoryArea::Outputs => "QB",
        }
    }
}

/// Returns the size a fixed-area symbol declares in the registry output.
pub fn declared_size(token: &str) -> Option<u16> {
    AREA_WIDTHS.get(token).map(|w| w.0)
}

/// Returns the byte width a fixed-area symbol occupies in an image.
pub fn image_width(token: &str) -> Option<u16> {
    AREA_WIDTHS.get(token).map(|w| w.1)
}

/// Returns the size a data-block type token declares in the registry output.
pub fn db_declared_size(type_token: &str) -> Option<u16> {
    DB_TYPE_WIDTHS.get(type_token).map(|w| w.0)
}

/// Returns the byte width a data-block type token occupies in an image.
pub fn db_image_width(type_token: &str) -> Option<u16> {
    DB_TYPE_WIDTHS.get(type_token).map(|w| w.1)
}
