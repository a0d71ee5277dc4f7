//! Source parsers.
//!
//! - `typescript`: TypeScript source parser with decorator support (uses swc)

pub mod typescript;

pub use typescript::{ParsedSource, SourceParser, SwcParser, parse_typescript_source};
