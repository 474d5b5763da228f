//! Decoder for the TIA Portal tag export (.sdf).
//!
//! Comma-delimited; the second field is a quoted compact address such as
//! `"%IW64"` or `"%M103.7"` where the area prefix is concatenated
//! directly with the numeric address. This format carries no symbol name
//! or type information that the consolidation needs.

use kepgen_dsl::symbol::Symbol;
use log::trace;

use crate::address;

/// Decodes one `.sdf` line into a partially-populated symbol.
pub fn decode_line(line: &str) -> Symbol {
    let mut sym = Symbol::default();

    let fields: Vec<&str> = line.split(',').collect();
    if let Some(field) = fields.get(1) {
        let full = field.replace('"', "").replace('%', "");
        let (compact, bit) = address::split_dotted(&full);
        let (letters, digits) = address::split_letters_digits(compact);

        sym.area = letters;
        sym.address = digits.parse().ok();
        sym.bit = bit.and_then(|bit| bit.parse().ok());

        trace!("Decoded .sdf address {}{:?}", sym.area, sym.address);
    }

    sym
}
