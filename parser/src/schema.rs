//! Field layout descriptors for the delimited export formats.
//!
//! The legacy tools write fixed field positions. Naming the positions
//! here keeps the decoders free of bare index arithmetic and gives format
//! revisions a single place to change.

/// Step7 symbol table export (.asc).
pub mod step7 {
    /// Width of the symbol name column, in characters, following the
    /// leading record number and comma.
    pub const NAME_WIDTH: usize = 24;
}

/// WinCC flexible tag export (.csv), tab-delimited.
pub mod flex_tags {
    /// Lines whose first field starts with this marker are comments.
    pub const COMMENT_MARKER: char = '#';
    /// The space-delimited area descriptor, e.g. `DB 17 DBX 1474.0`.
    pub const ADDRESS_FIELD: usize = 2;
    /// Leading sub-token of a data-block descriptor.
    pub const DB_KEYWORD: &str = "DB";
    /// Explicit length in bytes, when the export states one.
    pub const SIZE_FIELD: usize = 5;
    /// Free-text comment.
    pub const COMMENT_FIELD: usize = 19;
}

/// WinCC flexible alarm export (.csv), tab-delimited.
pub mod flex_alarms {
    use std::ops::Range;

    /// Alarm number.
    pub const NUMBER_FIELD: usize = 1;
    /// Name of the trigger symbol.
    pub const TRIGGER_TAG_FIELD: usize = 3;
    /// Bit index relative to the trigger symbol's address.
    pub const TRIGGER_BIT_FIELD: usize = 4;
    /// Message text columns, one per configured HMI language.
    pub const TEXT_FIELDS: Range<usize> = 11..18;
    /// Raw fields at or below this length are placeholders, not messages.
    pub const MIN_TEXT_LEN: usize = 7;
}
