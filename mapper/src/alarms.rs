//! Resolves HMI alarm triggers onto consolidated tags.

use kepgen_dsl::{
    alarm::AlarmLine,
    export::{AlarmRecord, AlarmRegistry},
    symbol::Symbol,
    tag::ConsolidatedTag,
};
use log::debug;

/// Resolves each alarm line against the symbol table and the packed
/// tags.
///
/// The trigger tag is looked up by exact symbol name; the consolidated
/// tag must match the symbol's area label and start exactly at the
/// symbol's address (not a containment scan). The trigger bit is split
/// into a byte index and bit number; the byte index must fall inside the
/// tag. Lines that fail any lookup are dropped without aborting the run.
pub fn resolve_alarms(
    alarm_lines: &[AlarmLine],
    symbols: &[Symbol],
    tags: &[ConsolidatedTag],
    connection: &str,
    source_filename: &str,
    source_info: &str,
    timestamp: i64,
) -> AlarmRegistry {
    let mut registry = AlarmRegistry {
        connection_name: connection.to_string(),
        timestamp,
        source_filename: source_filename.to_string(),
        source_info: source_info.to_string(),
        alarms: Vec::new(),
    };

    for alarm in alarm_lines {
        let Some(sym) = symbols.iter().find(|sym| sym.name == alarm.trigger_tag) else {
            debug!("Alarm {}: trigger tag {} not in symbol table", alarm.number, alarm.trigger_tag);
            continue;
        };

        let address = sym.address.unwrap_or(0) as usize;
        let Some(tag) = tags
            .iter()
            .find(|tag| tag.start == address && tag.area == sym.area)
        else {
            debug!("Alarm {}: no tag starting at {}{}", alarm.number, sym.area, address);
            continue;
        };

        let index = (alarm.trigger_bit / 8) as usize;
        let bit_nr = alarm.trigger_bit % 8;
        if index >= tag.size {
            debug!("Alarm {}: trigger byte {} outside tag {}", alarm.number, index, tag.tag_name());
            continue;
        }

        registry.alarms.push(AlarmRecord {
            number: alarm.number,
            tag_name: tag.tag_name(),
            index: index as u32,
            bit_nr,
            texts: alarm.texts.clone(),
        });
    }

    registry
}
