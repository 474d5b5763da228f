//! Decoder for the WinCC flexible alarm export (.csv).

use kepgen_dsl::alarm::AlarmLine;
use log::trace;

use crate::schema::flex_alarms;

fn unquote(field: &str) -> String {
    field.replace('"', "")
}

/// Decodes one alarm export line.
///
/// Returns `None` for comment lines, empty lines and lines too short to
/// carry a trigger reference. A decoded line may still fail to resolve
/// later; that is not this decoder's concern.
pub fn decode_line(line: &str) -> Option<AlarmLine> {
    if line.is_empty() || line.contains('#') || line.contains("//") {
        return None;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() <= flex_alarms::TRIGGER_BIT_FIELD {
        return None;
    }

    let number = unquote(fields[flex_alarms::NUMBER_FIELD]).parse().unwrap_or(0);
    let trigger_tag = unquote(fields[flex_alarms::TRIGGER_TAG_FIELD]);
    let trigger_bit = unquote(fields[flex_alarms::TRIGGER_BIT_FIELD])
        .parse()
        .unwrap_or(0);

    let mut texts = Vec::new();
    for idx in flex_alarms::TEXT_FIELDS {
        if let Some(field) = fields.get(idx) {
            // Short cells are placeholders, not messages.
            if field.len() > flex_alarms::MIN_TEXT_LEN {
                texts.push(unquote(field));
            }
        }
    }

    trace!("Decoded alarm {} trigger {}", number, trigger_tag);
    Some(AlarmLine {
        number,
        trigger_tag,
        trigger_bit,
        texts,
    })
}
