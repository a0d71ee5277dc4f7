//! Pattern nodes: the subset of expression shapes the converter understands.
//!
//! Lowering an swc expression into a [`PatternNode`] keeps the converter independent
//! of the parser's AST types, so it can be exercised with hand-built trees.

use swc_ecma_ast::{ArrayLit, Expr, ExprOrSpread, Lit, ObjectLit, Prop, PropName, PropOrSpread};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternNode {
    /// String literal.
    Literal(String),
    /// Regular-expression literal.
    Regex { source: String, flags: String },
    /// Array literal. Holes are dropped during lowering.
    ArrayOf(Vec<PatternNode>),
    /// Object literal, reduced to its plain identifier-keyed properties.
    ObjectConfig(Vec<Property>),
    /// Anything else: identifiers, calls, template literals, spreads...
    Other,
}

/// A `key: value` object property with a non-computed identifier key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: PatternNode,
}

impl Property {
    pub fn new(key: impl Into<String>, value: PatternNode) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl PatternNode {
    pub fn literal(text: impl Into<String>) -> Self {
        PatternNode::Literal(text.into())
    }

    pub fn regex(source: impl Into<String>, flags: impl Into<String>) -> Self {
        PatternNode::Regex {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Value of the last property named `key`, mirroring JavaScript object
    /// literal semantics for repeated keys.
    pub fn property<'a>(props: &'a [Property], key: &str) -> Option<&'a PatternNode> {
        props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }
}

/// Lower an swc expression into a pattern node.
pub fn lower_expr(expr: &Expr) -> PatternNode {
    match unwrap_ts_expr(expr) {
        // Strings holding unpaired surrogates have no UTF-8 form.
        Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
            Some(value) => PatternNode::Literal(value.to_string()),
            None => PatternNode::Other,
        },
        Expr::Lit(Lit::Regex(regex)) => PatternNode::Regex {
            source: regex.exp.to_string(),
            flags: regex.flags.to_string(),
        },
        Expr::Array(arr) => lower_array(arr),
        Expr::Object(obj) => lower_object(obj),
        _ => PatternNode::Other,
    }
}

/// Lower an optional call argument or initializer.
pub fn lower_arg(arg: Option<&ExprOrSpread>) -> PatternNode {
    match arg {
        Some(ExprOrSpread { spread: None, expr }) => lower_expr(expr),
        _ => PatternNode::Other,
    }
}

fn lower_array(arr: &ArrayLit) -> PatternNode {
    PatternNode::ArrayOf(
        arr.elems
            .iter()
            .flatten()
            .map(|elem| lower_arg(Some(elem)))
            .collect(),
    )
}

fn lower_object(obj: &ObjectLit) -> PatternNode {
    let mut props = Vec::new();

    for prop in &obj.props {
        let PropOrSpread::Prop(prop) = prop else {
            continue;
        };
        match &**prop {
            Prop::KeyValue(kv) => {
                if let PropName::Ident(ident) = &kv.key {
                    props.push(Property::new(ident.sym.as_str(), lower_expr(&kv.value)));
                }
            }
            // `{ matchTarget }` names an identifier key whose value is a variable.
            Prop::Shorthand(ident) => {
                props.push(Property::new(ident.sym.as_str(), PatternNode::Other));
            }
            _ => {}
        }
    }

    PatternNode::ObjectConfig(props)
}

/// Strip type-only wrappers (`as`, `as const`, `satisfies`, `!`) and parentheses.
fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::TsNonNull(ts_non_null) => unwrap_ts_expr(&ts_non_null.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}
