//! The per-area occupancy image.

/// Number of addressable bytes in one memory area.
pub const IMAGE_LEN: usize = 65536;

/// A byte-indexed map of which addresses are claimed and by what width.
///
/// A non-zero entry at position `p` is the byte width of the item known
/// to start at `p`; zero means free. Multi-byte items mark only their
/// starting byte. Cells are `u16` so the whole explicit-size range
/// (2..=256) is representable.
pub struct OccupancyImage {
    cells: Vec<u16>,
}

impl OccupancyImage {
    pub fn new() -> Self {
        Self {
            cells: vec![0; IMAGE_LEN],
        }
    }

    /// Records `width` at the starting byte. Last writer wins; the bytes
    /// a multi-byte item spans are left untouched.
    pub fn mark(&mut self, address: u16, width: u16) {
        self.cells[address as usize] = width;
    }

    /// Returns the width recorded at `address`, 0 when free or out of
    /// range.
    pub fn get(&self, address: usize) -> u16 {
        self.cells.get(address).copied().unwrap_or(0)
    }

    /// True when no address is claimed.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }
}

impl Default for OccupancyImage {
    fn default() -> Self {
        Self::new()
    }
}
