//! The address-space consolidation engine.
//!
//! Symbols are projected onto per-area occupancy images, contiguous
//! occupied runs are packed into bounded-size polling tags, and every
//! original symbol and alarm trigger is resolved back to a
//! (tag, byte index, bit number) triple.

pub mod alarms;
pub mod binder;
pub mod builder;
pub mod db;
pub mod emit;
pub mod image;
pub mod packer;
pub mod pipeline;
