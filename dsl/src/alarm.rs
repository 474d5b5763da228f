//! The decoded HMI alarm line.

/// One alarm declaration from an HMI alarm export.
///
/// The trigger tag names an HMI symbol; the trigger bit is a bit index
/// counted from the start of that symbol's address. Resolution against
/// the consolidated tags happens later, in the mapper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlarmLine {
    /// Alarm number from the export.
    pub number: u32,
    /// Name of the symbol that triggers the alarm.
    pub trigger_tag: String,
    /// Bit index relative to the trigger symbol's starting address.
    pub trigger_bit: u32,
    /// Message texts, placeholders already filtered out.
    pub texts: Vec<String>,
}
