//! The consolidated byte-range tag emitted by the block packer.

/// A packed contiguous byte range polled as one bulk item.
///
/// Created by the packer, read by the symbol binder, the alarm resolver
/// and the output emitters; never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsolidatedTag {
    /// Area label: `IB`, `MB`, `QB` or `DB<n>`.
    pub area: String,
    /// First byte of the packed range.
    pub start: usize,
    /// Length of the packed range in bytes. May exceed the configured
    /// block size by up to one item's width; the overrun is accepted.
    pub size: usize,
}

impl ConsolidatedTag {
    /// The tag identifier used across all output files.
    pub fn tag_name(&self) -> String {
        format!("tab{}_{}", self.area, self.start)
    }

    /// The server address expression for the packed range.
    ///
    /// Register areas address bytes directly; data blocks go through the
    /// `DBB` byte accessor.
    pub fn address_expression(&self) -> String {
        if self.area.contains("DB") {
            format!("{}.DBB{}[{}]", self.area, self.start, self.size)
        } else {
            format!("{}{}[{}]", self.area, self.start, self.size)
        }
    }

    /// True when `address` falls inside the packed range.
    pub fn contains(&self, address: usize) -> bool {
        address >= self.start && address < self.start + self.size
    }
}
