//! Declaration site matching.
//!
//! Recognizes the two routable declaration shapes:
//!
//! ```ts
//! export const ROUTABLE_TARGETS = ['user/:id', /^admin/];
//!
//! @Routable({ match: 'profile', matchTarget: 'name' })
//! export class ProfileController {}
//! ```

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{
    Callee, ClassDecl, Decl, Decorator, DefaultDecl, ExportDecl, ExportDefaultDecl, Expr, Pat,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::node::{PatternNode, lower_arg, lower_expr};
use crate::core::data::SiteKind;
use crate::core::parsers::typescript::line_of;

/// Exported identifier that declares a file's patterns.
pub const ROUTABLE_EXPORT: &str = "ROUTABLE_TARGETS";

/// Decorator callee that declares a class's patterns.
pub const ROUTABLE_DECORATOR: &str = "Routable";

/// A routable declaration found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSite {
    pub kind: SiteKind,
    /// 1-indexed line of the declaration.
    pub line: usize,
    /// The initializer or first decorator argument.
    pub node: PatternNode,
}

impl DeclarationSite {
    pub fn new(kind: SiteKind, line: usize, node: PatternNode) -> Self {
        Self { kind, line, node }
    }
}

/// Collects declaration sites in source order.
pub struct SiteMatcher<'a> {
    source_map: &'a SourceMap,
    sites: Vec<DeclarationSite>,
}

impl<'a> SiteMatcher<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self {
            source_map,
            sites: Vec::new(),
        }
    }

    pub fn into_sites(self) -> Vec<DeclarationSite> {
        self.sites
    }

    fn push_site(&mut self, kind: SiteKind, span: Span, node: PatternNode) {
        let line = line_of(self.source_map, span.lo);
        self.sites.push(DeclarationSite::new(kind, line, node));
    }

    fn check_decorators(&mut self, decorators: &[Decorator]) {
        for decorator in decorators {
            if let Expr::Call(call) = &*decorator.expr
                && let Callee::Expr(callee) = &call.callee
                && let Expr::Ident(ident) = &**callee
                && ident.sym.as_str() == ROUTABLE_DECORATOR
            {
                let node = lower_arg(call.args.first());
                self.push_site(SiteKind::Decorator, decorator.span, node);
            }
        }
    }
}

impl Visit for SiteMatcher<'_> {
    fn visit_export_decl(&mut self, node: &ExportDecl) {
        if let Decl::Var(var_decl) = &node.decl
            && let [declarator] = var_decl.decls.as_slice()
            && let Pat::Ident(binding) = &declarator.name
            && binding.id.sym.as_str() == ROUTABLE_EXPORT
        {
            let pattern_node = declarator
                .init
                .as_deref()
                .map_or(PatternNode::Other, lower_expr);
            self.push_site(SiteKind::NamedExport, node.span, pattern_node);
        }
        node.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        self.check_decorators(&node.class.decorators);
        node.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        if let DefaultDecl::Class(class_expr) = &node.decl {
            self.check_decorators(&class_expr.class.decorators);
        }
        node.visit_children_with(self);
    }
}
