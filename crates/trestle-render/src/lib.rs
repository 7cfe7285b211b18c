//! Target-language rendering for the Trestle source-to-source translator.
//!
//! The [`Renderer`] turns a fully-rewritten [`Document`] into
//! Kotlin-family source text. It expects the tree the second-round passes
//! produce: extensions flattened, statics gathered into companion objects,
//! convertible switches marked, and so on. Statement rendering emits a
//! trailing newline per statement and indents by one [`Config::indent`]
//! unit per level; expression rendering returns bare strings.
//!
//! Untranslatable nodes render as comments and produce diagnostics;
//! [`RenderError`] is reserved for trees no pass schedule can produce.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

use thiserror::Error;
use tracing::debug;
use trestle_ast::Diagnostics;
use trestle_ast::Document;
use trestle_ast::SourceRange;
use trestle_ast::types::Type;
use trestle_transform::TranspilationContext;

mod expressions;
mod statements;

/// Rendering configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The indentation unit, one per nesting level.
    indent: String,
}

impl Config {
    /// Creates the default configuration: tab indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Gets the indentation unit.
    pub fn indent(&self) -> &str {
        &self.indent
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

/// An error rendering a document.
///
/// Rendering fails only on trees the pass schedule cannot produce, e.g. an
/// extension that was never flattened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot render: {message}")]
pub struct RenderError {
    /// What made the tree unrenderable.
    pub message: String,
    /// The source range of the offending node.
    pub range: Option<SourceRange>,
}

impl RenderError {
    /// Creates an error for an unrenderable node.
    pub(crate) fn new(message: impl Into<String>, range: Option<SourceRange>) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A renderer for rewritten documents.
#[derive(Debug)]
pub struct Renderer<'a> {
    /// The shared context recorded during the first round.
    context: &'a TranspilationContext,
    /// The rendering configuration.
    config: Config,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer over the given context and configuration.
    pub fn new(context: &'a TranspilationContext, config: Config) -> Self {
        Self { context, config }
    }

    /// Gets the shared context.
    pub(crate) fn context(&self) -> &TranspilationContext {
        self.context
    }

    /// Appends one indentation unit to an indentation string.
    pub(crate) fn increase(&self, indentation: &str) -> String {
        format!("{indentation}{unit}", unit = self.config.indent)
    }

    /// Renders a whole document.
    ///
    /// Top-level declarations render first; any top-level non-declaration
    /// statements are wrapped in a generated entry function.
    pub fn render_document(
        &self,
        document: &Document,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        debug!(path = %document.path, "rendering document");

        let mut result = String::new();
        for declaration in &document.declarations {
            result.push_str(&self.render_statement(declaration, "", diagnostics)?);
        }

        if !document.statements.is_empty() {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str("fun main(args: Array<String>) {\n");
            result.push_str(&self.render_statements(
                &document.statements,
                self.config.indent(),
                diagnostics,
            )?);
            result.push_str("}\n");
        }

        Ok(result)
    }

    /// Renders a source type string as a target type.
    ///
    /// Unparseable type strings pass through unchanged.
    pub(crate) fn render_type(&self, type_name: &str) -> String {
        match Type::parse(type_name) {
            Ok(parsed) => self.render_parsed_type(&parsed),
            Err(_) => type_name.to_string(),
        }
    }

    /// Renders a structured type as a target type.
    fn render_parsed_type(&self, ty: &Type) -> String {
        match ty {
            Type::Named(name) => match name.as_str() {
                "Bool" => "Boolean".to_string(),
                "Character" => "Char".to_string(),
                other => other.to_string(),
            },
            Type::Optional(inner) => {
                if matches!(&**inner, Type::Function { .. }) {
                    format!("({inner})?", inner = self.render_parsed_type(inner))
                } else {
                    format!("{inner}?", inner = self.render_parsed_type(inner))
                }
            }
            Type::Array(element) => format!(
                "MutableList<{element}>",
                element = self.render_parsed_type(element)
            ),
            Type::Dictionary(key, value) => format!(
                "MutableMap<{key}, {value}>",
                key = self.render_parsed_type(key),
                value = self.render_parsed_type(value)
            ),
            Type::Tuple(members) if members.is_empty() => "Unit".to_string(),
            Type::Tuple(members) if members.len() == 2 => format!(
                "Pair<{first}, {second}>",
                first = self.render_parsed_type(&members[0].ty),
                second = self.render_parsed_type(&members[1].ty)
            ),
            Type::Tuple(members) if members.len() == 3 => format!(
                "Triple<{first}, {second}, {third}>",
                first = self.render_parsed_type(&members[0].ty),
                second = self.render_parsed_type(&members[1].ty),
                third = self.render_parsed_type(&members[2].ty)
            ),
            Type::Tuple(_) => ty.to_string(),
            Type::Function {
                parameters,
                return_type,
            } => {
                let parameters = parameters
                    .iter()
                    .map(|parameter| self.render_parsed_type(parameter))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "({parameters}) -> {return_type}",
                    return_type = self.render_parsed_type(return_type)
                )
            }
            Type::Generic { base, arguments } => {
                let base = match base.as_str() {
                    "ArrayClass" => "MutableList",
                    "DictionaryClass" => "MutableMap",
                    other => other,
                };
                let arguments = arguments
                    .iter()
                    .map(|argument| self.render_parsed_type(argument))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{base}<{arguments}>")
            }
            Type::Dot { left, right } => format!(
                "{left}.{right}",
                left = self.render_parsed_type(left)
            ),
        }
    }

    /// Renders an inheritance list, calling superclasses with parentheses
    /// and leaving recorded protocols bare.
    pub(crate) fn render_inheritance(&self, inherits: &[String]) -> String {
        if inherits.is_empty() {
            return String::new();
        }

        let rendered = inherits
            .iter()
            .map(|name| {
                if self.context.is_protocol(name) {
                    self.render_type(name)
                } else {
                    format!("{name}()", name = self.render_type(name))
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(": {rendered}")
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    /// A renderer over an empty context.
    fn renderer(context: &TranspilationContext) -> Renderer<'_> {
        Renderer::new(context, Config::new())
    }

    #[test]
    fn type_rendering_maps_the_builtins() {
        let context = TranspilationContext::new();
        let renderer = renderer(&context);

        assert_eq!(renderer.render_type("Bool"), "Boolean");
        assert_eq!(renderer.render_type("Character"), "Char");
        assert_eq!(renderer.render_type("Int?"), "Int?");
        assert_eq!(renderer.render_type("[Int]"), "MutableList<Int>");
        assert_eq!(
            renderer.render_type("[String: Bool]"),
            "MutableMap<String, Boolean>"
        );
        assert_eq!(renderer.render_type("ArrayClass<Int>"), "MutableList<Int>");
        assert_eq!(renderer.render_type("()"), "Unit");
        assert_eq!(
            renderer.render_type("(Int) -> Bool"),
            "(Int) -> Boolean"
        );
        assert_eq!(renderer.render_type("(Int, String)"), "Pair<Int, String>");
    }

    #[test]
    fn inheritance_distinguishes_protocols() {
        let mut context = TranspilationContext::new();
        context.record_protocol("Printable");
        let renderer = renderer(&context);

        assert_eq!(
            renderer.render_inheritance(&["Base".to_string(), "Printable".to_string()]),
            ": Base(), Printable"
        );
        assert_eq!(renderer.render_inheritance(&[]), "");
    }
}
