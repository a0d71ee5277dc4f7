//! Core scan engine.
//!
//! The pipeline runs in three steps per build:
//!
//! 1. **Collection** (`collect`): list candidate files under each configured directory
//! 2. **Extraction** (`extract`): parse each file and pull patterns out of its
//!    routable declaration sites
//! 3. **Code generation** (`codegen`): render the registry as the manifest module
//!
//! `registry` drives steps 1 and 2; `session` wraps the whole thing in the
//! bundler-style lifecycle.

pub mod codegen;
pub mod collect;
pub mod data;
pub mod error;
pub mod extract;
pub mod parsers;
pub mod registry;
pub mod session;

pub use codegen::render;
pub use data::{Diagnostic, MalformedReason, Pattern, Registry, RoutableRecord, RouteMatchTarget};
pub use error::ScanError;
pub use registry::{ScanOutcome, build_registry};
pub use session::{BuildSession, RESOLVED_VIRTUAL_MODULE_ID, VIRTUAL_MODULE_ID};
