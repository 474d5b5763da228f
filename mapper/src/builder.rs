//! Projects symbols onto the per-area occupancy images.

use kepgen_dsl::{
    areas::{self, MemoryArea},
    symbol::Symbol,
};

use crate::{db::DbRegistry, image::OccupancyImage};

/// The three fixed-area images plus the lazily-created data-block images.
#[derive(Default)]
pub struct ImageSet {
    pub inputs: OccupancyImage,
    pub markers: OccupancyImage,
    pub outputs: OccupancyImage,
    pub data_blocks: DbRegistry,
}

impl ImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one symbol in the image its area token selects.
    ///
    /// Symbols without an address, and symbols whose area token is
    /// neither a fixed-area code nor a data-block reference, contribute
    /// nothing.
    pub fn add_symbol(&mut self, sym: &Symbol) {
        let Some(address) = sym.address else {
            return;
        };

        if let (Some(width), Some(area)) = (
            areas::image_width(&sym.area),
            MemoryArea::from_token(&sym.area),
        ) {
            self.image_mut(area).mark(address, width);
            return;
        }

        if sym.is_data_block() {
            self.data_blocks.add_symbol(sym);
        }
    }

    pub fn image(&self, area: MemoryArea) -> &OccupancyImage {
        match area {
            MemoryArea::Inputs => &self.inputs,
            MemoryArea::Markers => &self.markers,
            MemoryArea::Outputs => &self.outputs,
        }
    }

    fn image_mut(&mut self, area: MemoryArea) -> &mut OccupancyImage {
        match area {
            MemoryArea::Inputs => &mut self.inputs,
            MemoryArea::Markers => &mut self.markers,
            MemoryArea::Outputs => &mut self.outputs,
        }
    }
}
