//! The normalized symbol record produced by the line decoders.

/// Declared types that describe program structure rather than polled data.
///
/// Symbols with these types are never bound to a consolidated tag: a
/// function block or a data-block declaration has no byte of its own to
/// poll.
pub const CONTAINER_TYPES: &[&str] = &["FB", "DB", "FC", "TIMER", "UDT"];

/// One declared controller or HMI item.
///
/// A `Symbol` is created once per decoded input line and is immutable
/// afterwards. Fields a source format does not carry stay at their
/// defaults; a decoder never fails a line outright.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Symbol {
    /// Symbol name, or empty when the format does not carry one.
    pub name: String,
    /// Raw area-code token (`I`, `IB`, ..., `QD`) or a data-block
    /// reference such as `DB17`.
    pub area: String,
    /// Data-block number, present only for data-block references.
    pub db_nr: Option<u32>,
    /// Byte offset within the area.
    pub address: Option<u16>,
    /// Bit offset 0..=7, absent for byte/word/dword items.
    pub bit: Option<u8>,
    /// Raw type token from the source, e.g. `BOOL` or `DBW`.
    pub declared_type: String,
    /// Byte count reported in the registry output. Explicit when the
    /// source states a size greater than a dword, otherwise derived from
    /// the type convention (0 for bit-addressed items).
    pub declared_size: Option<u16>,
    /// Free-text comment.
    pub comment: String,
}

impl Symbol {
    /// True when the declared type describes structure, not data.
    pub fn is_container(&self) -> bool {
        CONTAINER_TYPES.contains(&self.declared_type.as_str())
    }

    /// True when the area token references a numbered data block.
    pub fn is_data_block(&self) -> bool {
        self.area.contains("DB")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_when_container_type_then_is_container() {
        for declared_type in ["FB", "DB", "FC", "TIMER", "UDT"] {
            let sym = Symbol {
                declared_type: declared_type.to_string(),
                ..Default::default()
            };
            assert!(sym.is_container(), "{declared_type} must be a container");
        }
    }

    #[test]
    fn symbol_when_data_type_then_not_container() {
        for declared_type in ["BOOL", "BYTE", "WORD", "DINT", "DBX", ""] {
            let sym = Symbol {
                declared_type: declared_type.to_string(),
                ..Default::default()
            };
            assert!(!sym.is_container());
        }
    }

    #[test]
    fn symbol_when_db_area_then_is_data_block() {
        let sym = Symbol {
            area: "DB17".to_string(),
            ..Default::default()
        };
        assert!(sym.is_data_block());

        let sym = Symbol {
            area: "IB".to_string(),
            ..Default::default()
        };
        assert!(!sym.is_data_block());
    }
}
