//! Domain objects for the tag generator.
//!
//! This crate defines the records that flow through the conversion: the
//! normalized [`symbol::Symbol`] produced by the line decoders, the
//! [`tag::ConsolidatedTag`] produced by the block packer, and the
//! JSON-exportable registry records that map symbols and alarms back onto
//! the consolidated tags.

pub mod alarm;
pub mod areas;
pub mod export;
pub mod symbol;
pub mod tag;
