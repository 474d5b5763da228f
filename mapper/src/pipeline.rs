//! The run-owned conversion context.
//!
//! One `Conversion` owns all state for a single run: the accumulated
//! symbol table, the occupancy images and the packed tags. It is created
//! for a run, threaded through the stages, and discarded; nothing is
//! shared across runs.

use kepgen_dsl::{
    alarm::AlarmLine,
    areas::MemoryArea,
    export::{AlarmRegistry, TagRegistry},
    symbol::Symbol,
    tag::ConsolidatedTag,
};
use log::info;

use crate::{alarms, binder, builder::ImageSet, emit, packer};

#[derive(Default)]
pub struct Conversion {
    /// All decoded symbols, in input order.
    symbols: Vec<Symbol>,
    /// Packed tags, filled by [`Conversion::consolidate`].
    tags: Vec<ConsolidatedTag>,
    images: ImageSet,
}

impl Conversion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends decoded symbols to the table. Call for each input source;
    /// input order is preserved in all outputs.
    pub fn add_symbols(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.symbols.extend(symbols);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn tags(&self) -> &[ConsolidatedTag] {
        &self.tags
    }

    /// Projects the symbol table onto the occupancy images and packs
    /// every image into consolidated tags.
    ///
    /// Fixed areas are packed first (Inputs, Markers, Outputs), then the
    /// data blocks in first-reference order. Within one image the tags
    /// are strictly increasing in starting byte.
    pub fn consolidate(&mut self, block_size: usize) {
        let Self { symbols, images, .. } = self;
        for sym in symbols.iter() {
            images.add_symbol(sym);
        }

        let mut tags = Vec::new();
        for area in [MemoryArea::Inputs, MemoryArea::Markers, MemoryArea::Outputs] {
            tags.extend(packer::pack(images.image(area), area.label(), block_size));
        }
        for block in images.data_blocks.blocks() {
            let label = format!("DB{}", block.nr);
            tags.extend(packer::pack(&block.image, &label, block_size));
        }

        info!(
            "Consolidated {} symbols into {} tags",
            self.symbols.len(),
            tags.len()
        );
        self.tags = tags;
    }

    /// The PLC tag import file for the packed tags.
    pub fn plc_lines(&self, poll_freq: u32) -> Vec<String> {
        emit::plc_lines(&self.tags, poll_freq)
    }

    /// The gateway item file for the packed tags.
    pub fn iot_lines(&self, connection: &str, poll_freq: u32) -> Vec<String> {
        emit::iot_lines(&self.tags, connection, poll_freq)
    }

    /// Binds every qualifying symbol to its covering tag.
    pub fn bind_symbols(&self, connection: &str, timestamp: i64) -> TagRegistry {
        binder::bind_symbols(&self.symbols, &self.tags, connection, timestamp)
    }

    /// Resolves alarm lines against the symbol table and packed tags.
    pub fn resolve_alarms(
        &self,
        alarm_lines: &[AlarmLine],
        connection: &str,
        source_filename: &str,
        source_info: &str,
        timestamp: i64,
    ) -> AlarmRegistry {
        alarms::resolve_alarms(
            alarm_lines,
            &self.symbols,
            &self.tags,
            connection,
            source_filename,
            source_info,
            timestamp,
        )
    }
}
