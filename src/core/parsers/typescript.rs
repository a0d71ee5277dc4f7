use swc_common::{BytePos, FileName, Globals, SourceMap, Spanned, sync::Lrc};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SyntaxError};
use swc_ecma_visit::VisitWith;

use crate::core::error::ScanError;
use crate::core::extract::{DeclarationSite, SiteMatcher};

/// The parsing capability the extractor depends on: turn source text into the
/// routable declaration sites it contains.
///
/// Implemented by [`SwcParser`]; tests substitute hand-built site trees.
pub trait SourceParser {
    fn declaration_sites(
        &self,
        code: String,
        file_path: &str,
    ) -> Result<Vec<DeclarationSite>, ScanError>;
}

/// swc-backed parser for TypeScript with legacy decorators.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwcParser;

impl SourceParser for SwcParser {
    fn declaration_sites(
        &self,
        code: String,
        file_path: &str,
    ) -> Result<Vec<DeclarationSite>, ScanError> {
        let parsed = parse_typescript_source(code, file_path)?;
        let mut matcher = SiteMatcher::new(&parsed.source_map);
        parsed.module.visit_with(&mut matcher);
        Ok(matcher.into_sites())
    }
}

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Lrc<SourceMap>,
}

/// Parse TypeScript source code into a module AST.
///
/// Decorators are enabled; JSX is not. Errors the parser recovers from are still
/// reported as parse failures.
pub fn parse_typescript_source(code: String, file_path: &str) -> Result<ParsedSource, ScanError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| to_scan_error(&source_map, file_path, &e))?;

        if let Some(e) = parser.take_errors().first() {
            return Err(to_scan_error(&source_map, file_path, e));
        }

        Ok(ParsedSource { module, source_map })
    })
}

fn to_scan_error(source_map: &SourceMap, file_path: &str, error: &SyntaxError) -> ScanError {
    ScanError::Parse {
        path: file_path.to_string(),
        line: line_of(source_map, error.span().lo),
        message: error.kind().msg().into_owned(),
    }
}

/// 1-indexed line for a byte position.
pub(crate) fn line_of(source_map: &SourceMap, pos: BytePos) -> usize {
    source_map.lookup_char_pos(pos).line
}
