//! Routable - static route manifest generator
//!
//! Routable scans a project for TypeScript files that declare themselves routable,
//! either with an exported `ROUTABLE_TARGETS` constant or a `@Routable(...)` class
//! decorator, and generates a module listing each file's match patterns next to a
//! lazy `import()` loader.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scan engine (collection, extraction, code generation, build session)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
