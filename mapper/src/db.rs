//! Registry of per-data-block occupancy images.

use kepgen_dsl::{areas, symbol::Symbol};
use log::debug;

use crate::image::OccupancyImage;

/// Explicit sizes outside this range fall back to the type convention.
const EXPLICIT_SIZE_MIN: u16 = 2;
const EXPLICIT_SIZE_MAX: u16 = 256;

/// One numbered data block and its occupancy image.
pub struct DbBlock {
    pub nr: u32,
    pub image: OccupancyImage,
}

/// Data-block images, created lazily in first-reference order.
#[derive(Default)]
pub struct DbRegistry {
    blocks: Vec<DbBlock>,
}

impl DbRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a data-block symbol in its block's image.
    ///
    /// A symbol without a numeric block number or address is dropped
    /// silently; nothing is mutated.
    pub fn add_symbol(&mut self, sym: &Symbol) {
        let Some(nr) = sym.db_nr else {
            return;
        };
        let Some(address) = sym.address else {
            return;
        };

        let width = resolve_width(sym);
        let block = self.block_mut(nr);
        block.image.mark(address, width);
    }

    /// Blocks in the order they were first referenced.
    pub fn blocks(&self) -> &[DbBlock] {
        &self.blocks
    }

    fn block_mut(&mut self, nr: u32) -> &mut DbBlock {
        let idx = match self.blocks.iter().position(|block| block.nr == nr) {
            Some(idx) => idx,
            None => {
                debug!("New data block DB{}", nr);
                self.blocks.push(DbBlock {
                    nr,
                    image: OccupancyImage::new(),
                });
                self.blocks.len() - 1
            }
        };
        &mut self.blocks[idx]
    }
}

/// Byte width for a data-block symbol: the explicit size when it is in
/// range, else the declared-type convention, else 0 (unmarked).
fn resolve_width(sym: &Symbol) -> u16 {
    match sym.declared_size {
        Some(size) if (EXPLICIT_SIZE_MIN..=EXPLICIT_SIZE_MAX).contains(&size) => size,
        _ => areas::db_image_width(&sym.declared_type).unwrap_or(0),
    }
}
