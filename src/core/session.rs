//! Build session - the bundler-facing lifecycle around one registry.
//!
//! The session is created from options, receives the project root, is populated by
//! a full scan at build start, and serves the generated manifest when the virtual
//! module is loaded. Every scan replaces the registry wholesale.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::codegen::render;
use crate::core::data::{Diagnostic, Registry};
use crate::core::error::ScanError;
use crate::core::parsers::{SourceParser, SwcParser};
use crate::core::registry::{ScanOutcome, build_registry_with};

/// Identifier application code imports the manifest from.
pub const VIRTUAL_MODULE_ID: &str = "virtual:vue3-routable-manifest";

/// Internal identifier of the manifest. The leading NUL byte marks it as not
/// backed by a file.
pub const RESOLVED_VIRTUAL_MODULE_ID: &str = "\0virtual:vue3-routable-manifest";

pub struct BuildSession<P: SourceParser = SwcParser> {
    root: PathBuf,
    config: Config,
    parser: P,
    registry: Registry,
    diagnostics: Vec<Diagnostic>,
}

impl BuildSession {
    pub fn new(config: Config) -> Self {
        Self::with_parser(config, SwcParser)
    }
}

impl<P: SourceParser> BuildSession<P> {
    pub fn with_parser(config: Config, parser: P) -> Self {
        Self {
            root: PathBuf::from("."),
            config,
            parser,
            registry: Registry::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Supply the resolved project root.
    pub fn config_resolved(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one full scan and replace the registry.
    ///
    /// The registry is cleared first and only repopulated when the scan succeeds,
    /// so a failed scan leaves nothing behind.
    pub fn build_start(&mut self) -> Result<ScanOutcome, ScanError> {
        self.registry = Registry::new();
        self.diagnostics.clear();

        let outcome = build_registry_with(&self.parser, &self.root, &self.config.paths)?;
        self.registry = outcome.registry.clone();
        self.diagnostics = outcome.diagnostics.clone();
        Ok(outcome)
    }

    /// Map the public virtual id to the internal one.
    pub fn resolve_id(&self, id: &str) -> Option<&'static str> {
        (id == VIRTUAL_MODULE_ID).then_some(RESOLVED_VIRTUAL_MODULE_ID)
    }

    /// Source of the manifest module for the internal id; nothing for other ids.
    pub fn load(&self, id: &str) -> Option<String> {
        (id == RESOLVED_VIRTUAL_MODULE_ID).then(|| render(&self.registry))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Diagnostics reported by the last successful scan.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
