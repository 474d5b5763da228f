//! The stages of a conversion run.
//!
//! A run decodes the controller symbol table first and the HMI tag table
//! second, consolidates, then resolves references back onto the packed
//! tags. Each stage feeds the shared [`Conversion`] context.

use std::path::Path;

use kepgen_dsl::alarm::AlarmLine;
use kepgen_mapper::pipeline::Conversion;
use kepgen_parser::{alarm, decode_symbol_line, file_type::SourceFormat};
use log::{info, warn};

/// Decodes symbol lines in the format the file extension selects and
/// adds them to the conversion context.
pub fn decode_symbols(conversion: &mut Conversion, path: &Path, lines: &[String]) {
    let format = SourceFormat::from_path(path);
    if !format.is_supported() {
        warn!("No decoder for {}; file skipped", path.display());
        return;
    }

    info!("Decoding {} lines from {}", lines.len(), path.display());
    conversion.add_symbols(lines.iter().map(|line| decode_symbol_line(format, line)));
}

/// Decodes alarm export lines, dropping comment and short lines.
pub fn decode_alarms(lines: &[String]) -> Vec<AlarmLine> {
    let alarms: Vec<AlarmLine> = lines.iter().filter_map(|line| alarm::decode_line(line)).collect();
    info!("Decoded {} alarm lines", alarms.len());
    alarms
}
