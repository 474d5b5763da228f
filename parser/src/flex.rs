//! Decoder for the WinCC flexible tag export (.csv).
//!
//! Tab-delimited. The area descriptor is itself a space-delimited
//! sub-field, e.g. `DB 17 DBX 1474.0`. Only data-block descriptors
//! produce an addressable symbol; tags bound to other connections keep
//! their name but contribute no address.

use kepgen_dsl::{areas, symbol::Symbol};
use log::trace;

use crate::{address, schema::flex_tags};

/// Decodes one tag export line into a partially-populated symbol.
pub fn decode_line(line: &str) -> Symbol {
    let mut sym = Symbol::default();

    let fields: Vec<&str> = line.split('\t').collect();
    let first = fields.first().copied().unwrap_or("");
    if first.is_empty() || first.starts_with(flex_tags::COMMENT_MARKER) {
        return sym;
    }
    sym.name = first.to_string();

    if let Some(descriptor) = fields.get(flex_tags::ADDRESS_FIELD) {
        let sub: Vec<&str> = descriptor.split(' ').collect();
        if sub.first() == Some(&flex_tags::DB_KEYWORD) {
            if let Some(nr) = sub.get(1) {
                sym.area = format!("{}{}", flex_tags::DB_KEYWORD, nr);
                sym.db_nr = nr.parse().ok();
            }
            if let Some(declared_type) = sub.get(2) {
                sym.declared_type = declared_type.to_string();
            }
            if let Some(addr) = sub.get(3) {
                let (hi, lo) = address::split_dotted(addr);
                sym.address = hi.parse().ok();
                sym.bit = lo.and_then(|lo| lo.parse().ok());
            }
        }
    }

    if let Some(size_field) = fields.get(flex_tags::SIZE_FIELD) {
        // A stated length beyond a dword is an explicit size; anything
        // smaller falls back to the type convention.
        let explicit: u16 = size_field.parse().unwrap_or(0);
        sym.declared_size = if explicit > 4 {
            Some(explicit)
        } else {
            areas::db_declared_size(&sym.declared_type)
        };
    }

    if let Some(comment) = fields.get(flex_tags::COMMENT_FIELD) {
        sym.comment = comment.to_string();
    }

    trace!("Decoded HMI symbol {} at {}{:?}", sym.name, sym.area, sym.address);
    sym
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a tab-delimited line with the descriptor, size and comment
    /// at their fixed field positions.
    fn flex_line(name: &str, descriptor: &str, size: &str, comment: &str) -> String {
        let mut fields = vec![""; 20];
        fields[0] = name;
        fields[2] = descriptor;
        fields[5] = size;
        fields[19] = comment;
        fields.join("\t")
    }

    #[test]
    fn decode_line_when_db_bit_then_block_and_address() {
        let line = flex_line("Alarm_word_bit", "DB 17 DBX 1474.0", "0", "First alarm bit");
        let sym = decode_line(&line);

        assert_eq!(sym.name, "Alarm_word_bit");
        assert_eq!(sym.area, "DB17");
        assert_eq!(sym.db_nr, Some(17));
        assert_eq!(sym.declared_type, "DBX");
        assert_eq!(sym.address, Some(1474));
        assert_eq!(sym.bit, Some(0));
        assert_eq!(sym.declared_size, Some(0));
        assert_eq!(sym.comment, "First alarm bit");
    }

    #[test]
    fn decode_line_when_word_type_then_size_from_convention() {
        let line = flex_line("Setpoint", "DB 5 DBW 100", "2", "");
        let sym = decode_line(&line);
        assert_eq!(sym.declared_size, Some(2));
        assert_eq!(sym.bit, None);
    }

    #[test]
    fn decode_line_when_explicit_size_then_size_from_field() {
        let line = flex_line("Recipe", "DB 5 DBB 200", "32", "");
        let sym = decode_line(&line);
        assert_eq!(sym.declared_size, Some(32));
    }

    #[test]
    fn decode_line_when_comment_line_then_empty_symbol() {
        let sym = decode_line("# WinCC flexible export\tx\ty");
        assert_eq!(sym, Symbol::default());
    }

    #[test]
    fn decode_line_when_not_a_data_block_then_name_only() {
        let line = flex_line("Internal_tag", "Internal tag", "2", "Not polled");
        let sym = decode_line(&line);
        assert_eq!(sym.name, "Internal_tag");
        assert_eq!(sym.area, "");
        assert_eq!(sym.address, None);
    }

    #[test]
    fn decode_line_when_short_line_then_no_panic() {
        let sym = decode_line("Lone_name");
        assert_eq!(sym.name, "Lone_name");
        assert_eq!(sym.declared_size, None);
        assert_eq!(sym.comment, "");
    }

    #[test]
    fn decode_line_when_block_nr_not_numeric_then_db_nr_none() {
        let line = flex_line("Odd", "DB x DBX 4.1", "0", "");
        let sym = decode_line(&line);
        assert_eq!(sym.area, "DBx");
        assert_eq!(sym.db_nr, None);
    }
}
