//! tr-strings - Turkish UI string extractor
//!
//! Scans a JavaScript source tree for literal text containing Turkish
//! letters and writes a `key -> string` JSON file that can seed a
//! translation file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Directory walk, string extraction and key derivation
//! - `json_writer`: Pretty JSON output

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
