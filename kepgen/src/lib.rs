//! Command line front-end for the tag generator.
//!
//! This crate ties the line decoders and the consolidation engine into a
//! single batch run: read the export files, decode, consolidate, write
//! the server import files and the JSON registries.

extern crate kepgen_dsl;
extern crate kepgen_parser;

pub mod cli;
pub mod logger;
pub mod source;
pub mod stages;
