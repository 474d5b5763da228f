//! Decoders that turn one raw export line into a normalized record.
//!
//! Every decoder is lenient: a line with fewer fields than expected
//! produces a record with the trailing fields left empty, never an error.
//! A record that decodes to nothing useful simply contributes nothing
//! downstream.

pub mod address;
pub mod alarm;
pub mod file_type;
pub mod flex;
pub mod schema;
pub mod sdf;
pub mod step7;

use kepgen_dsl::symbol::Symbol;

use crate::file_type::SourceFormat;

/// Decodes one symbol line according to the source format.
pub fn decode_symbol_line(format: SourceFormat, line: &str) -> Symbol {
    match format {
        SourceFormat::Step7Asc => step7::decode_line(line),
        SourceFormat::TiaSdf => sdf::decode_line(line),
        SourceFormat::FlexCsv => flex::decode_line(line),
        SourceFormat::Unknown => Symbol::default(),
    }
}
