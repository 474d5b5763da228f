//! Decoder for the fixed-column Step7 symbol table export (.asc).
//!
//! A line is a record number, a comma, a fixed-width symbol name column,
//! then whitespace-separated area code, `hi[.lo]` address, declared type
//! and a free-text comment.

use kepgen_dsl::{areas, symbol::Symbol};
use log::trace;

use crate::{address, schema::step7};

/// Decodes one `.asc` line into a partially-populated symbol.
pub fn decode_line(line: &str) -> Symbol {
    // Everything before the first comma is the record number.
    let record = match line.find(',') {
        Some(idx) => &line[idx + 1..],
        None => line,
    };

    let cut = record
        .char_indices()
        .nth(step7::NAME_WIDTH)
        .map(|(idx, _)| idx)
        .unwrap_or(record.len());
    let (name, rest) = record.split_at(cut);

    let mut sym = Symbol {
        name: name.trim().to_string(),
        ..Default::default()
    };

    let fields: Vec<&str> = rest.split_whitespace().collect();

    if let Some(area) = fields.first() {
        sym.area = area.to_string();
        sym.declared_size = areas::declared_size(area);
    }
    if let Some(addr) = fields.get(1) {
        let (hi, lo) = address::split_dotted(addr);
        sym.address = hi.parse().ok();
        sym.bit = lo.and_then(|lo| lo.parse().ok());
    }
    if let Some(declared_type) = fields.get(2) {
        sym.declared_type = declared_type.to_string();
    }
    if fields.len() > 3 {
        sym.comment = fields[3..].join(" ");
    }

    trace!("Decoded .asc symbol {} at {}{:?}", sym.name, sym.area, sym.address);
    sym
}
