//! Core data types shared by the scan and codegen phases.
//!
//! ## Module Structure
//!
//! - `pattern`: Match patterns and match-target modes
//! - `record`: Routable records and the ordered registry
//! - `diagnostic`: Malformed-declaration diagnostics

pub mod diagnostic;
pub mod pattern;
pub mod record;

pub use diagnostic::{Diagnostic, MalformedReason, SiteKind};
pub use pattern::{Pattern, RouteMatchTarget};
pub use record::{Registry, RoutableRecord};
