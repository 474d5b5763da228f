//! Re-associates every original symbol with the consolidated tag that
//! covers its address.

use kepgen_dsl::{
    export::{BoundSymbol, TagRegistry},
    symbol::Symbol,
    tag::ConsolidatedTag,
};
use log::debug;

/// Binds every non-container symbol to the first consolidated tag whose
/// label equals the symbol's area token and whose byte range contains
/// the symbol's address.
///
/// Symbols with no covering tag are omitted; their address was never
/// marked occupied, which points at a decoder/format mismatch and is a
/// data-quality signal, not an error.
pub fn bind_symbols(
    symbols: &[Symbol],
    tags: &[ConsolidatedTag],
    connection: &str,
    timestamp: i64,
) -> TagRegistry {
    let mut registry = TagRegistry {
        connection_name: connection.to_string(),
        timestamp,
        source_filename: String::new(),
        source_info: String::new(),
        tags: Vec::new(),
    };

    for sym in symbols {
        if sym.is_container() {
            continue;
        }

        let address = sym.address.unwrap_or(0) as usize;
        let Some(tag) = tags
            .iter()
            .find(|tag| tag.area == sym.area && tag.contains(address))
        else {
            if !sym.name.is_empty() {
                debug!("No covering tag for symbol {} ({}{})", sym.name, sym.area, address);
            }
            continue;
        };

        registry.tags.push(BoundSymbol {
            symbol_name: sym.name.clone(),
            symbol_periph: sym.area.clone(),
            symbol_address_hi: sym.address.map(|a| a.to_string()).unwrap_or_default(),
            symbol_address_lo: sym.bit.map(|b| b.to_string()).unwrap_or_default(),
            comment: sym.comment.clone(),
            tag_name: tag.tag_name(),
            index: (address - tag.start) as u32,
            bit_nr: sym.bit.unwrap_or(0) as u32,
            size: sym.declared_size.unwrap_or(0) as u32,
        });
    }

    registry
}
