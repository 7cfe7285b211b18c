//! A pass that records translation templates and removes their
//! declarations.
//!
//! The frontend surfaces templates as ordinary functions whose names start
//! with `templates`. Inside such a function, `_`-prefixed local variables
//! declare the typed free variables, and the remaining statements come in
//! pairs: an expression statement holding the source pattern, then an
//! expression statement holding the target translation as a string literal.
//! The function itself is deleted from the tree once consumed.

use std::collections::HashMap;

use itertools::Itertools;
use trestle_ast::Diagnostic;
use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::Expression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::SourceRange;
use trestle_ast::Statement;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the record-templates pass.
pub const ID: &str = "RecordTemplates";

/// The naming convention marking a function as a template declaration.
const TEMPLATE_FUNCTION_PREFIX: &str = "templates";

/// Creates a "malformed template declaration" diagnostic.
fn malformed_template(range: Option<SourceRange>) -> Diagnostic {
    Diagnostic::warning("malformed template declaration")
        .with_pass(ID)
        .with_range(range)
        .with_detail("expected a pattern expression followed by a translation string literal")
}

/// Records templates from `templates*` functions and deletes them.
#[derive(Debug)]
pub struct RecordTemplatesPass<'a> {
    /// The context the templates are recorded into.
    context: &'a mut TranspilationContext,
}

impl<'a> RecordTemplatesPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a mut TranspilationContext) -> Self {
        Self { context }
    }
}

impl Pass for RecordTemplatesPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: FunctionDeclaration,
    ) -> Vec<Statement> {
        if !declaration.prefix.starts_with(TEMPLATE_FUNCTION_PREFIX) {
            return walk::function_declaration(self, cx, declaration);
        }

        let Some(statements) = &declaration.statements else {
            return Vec::new();
        };

        // Free variables declared in the body carry the types the patterns
        // reference them with.
        let mut variable_types = HashMap::new();
        for statement in statements {
            if let Statement::Variable(variable) = statement
                && variable.identifier.starts_with('_')
            {
                variable_types.insert(variable.identifier.clone(), variable.type_annotation.clone());
            }
        }

        // The remaining statements pair up: a pattern, then its
        // translation.
        let mut pairs = statements
            .iter()
            .filter(|statement| !matches!(statement, Statement::Variable(_)))
            .tuples();
        for (pattern_statement, translation_statement) in pairs.by_ref() {
            let (
                Statement::Expression(pattern_statement),
                Statement::Expression(translation_statement),
            ) = (pattern_statement, translation_statement)
            else {
                cx.diagnostics
                    .add(malformed_template(pattern_statement.range()));
                continue;
            };

            match (&pattern_statement.expression, &translation_statement.expression) {
                (Expression::LiteralString(_), _) => {
                    cx.diagnostics
                        .add(malformed_template(pattern_statement.range));
                }
                (pattern, Expression::LiteralString(translation)) => {
                    let pattern = attach_types(pattern.clone(), &variable_types);
                    self.context
                        .record_template(pattern, translation.value.clone());
                }
                _ => {
                    cx.diagnostics
                        .add(malformed_template(translation_statement.range));
                }
            }
        }

        if let Some(unpaired) = pairs.into_buffer().next() {
            cx.diagnostics
                .add(malformed_template(unpaired.range().or(declaration.range)));
        }

        Vec::new()
    }
}

/// Stamps the declared free-variable types onto the pattern's references.
fn attach_types(pattern: Expression, variable_types: &HashMap<String, String>) -> Expression {
    /// A helper pass that rewrites free-variable reference types.
    struct AttachTypes<'a> {
        /// The declared types, by variable name.
        types: &'a HashMap<String, String>,
    }

    impl Pass for AttachTypes<'_> {
        fn name(&self) -> &'static str {
            ID
        }

        fn replace_declaration_reference_expression(
            &mut self,
            _cx: &mut PassContext<'_>,
            mut expression: DeclarationReferenceExpression,
        ) -> Expression {
            if let Some(declared) = self.types.get(&expression.identifier) {
                expression.type_name = Some(declared.clone());
            }
            Expression::DeclarationReference(expression)
        }
    }

    let mut diagnostics = trestle_ast::Diagnostics::new();
    let mut cx = PassContext::new(&mut diagnostics);
    let mut helper = AttachTypes {
        types: variable_types,
    };
    helper.replace_expression(&mut cx, pattern)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::ExpressionStatement;

    use super::*;
    use crate::testing;

    #[test]
    fn records_pattern_translation_pairs_and_deletes_the_function() {
        let body = vec![
            Statement::Variable(testing::variable("_value", "Any", None)),
            Statement::Expression(ExpressionStatement {
                range: None,
                expression: testing::call(
                    testing::reference("print", None),
                    vec![testing::reference("_value", None)],
                ),
            }),
            Statement::Expression(ExpressionStatement {
                range: None,
                expression: testing::string_literal("println(_value)"),
            }),
        ];
        let mut document = Document::new("templates.swift");
        document
            .declarations
            .push(Statement::Function(testing::function(
                "templatesForOutput",
                body,
            )));

        let mut context = TranspilationContext::new();
        let mut diagnostics = Diagnostics::new();
        let output =
            RecordTemplatesPass::new(&mut context).run(document, &mut diagnostics);

        assert!(output.declarations.is_empty());
        assert!(diagnostics.is_empty());
        assert_eq!(context.templates().len(), 1);
        assert_eq!(context.templates()[0].translation, "println(_value)");

        // The free variable inside the recorded pattern carries its declared
        // type.
        let Expression::Call(call) = &context.templates()[0].pattern else {
            panic!("expected a call pattern");
        };
        let Expression::Tuple(tuple) = &*call.parameters else {
            panic!("expected tuple parameters");
        };
        let Expression::DeclarationReference(reference) = &tuple.pairs[0].expression else {
            panic!("expected a reference argument");
        };
        assert_eq!(reference.type_name.as_deref(), Some("Any"));
    }

    #[test]
    fn warns_on_unpaired_translation() {
        let body = vec![Statement::Expression(ExpressionStatement {
            range: None,
            expression: testing::string_literal("println()"),
        })];
        let mut document = Document::new("templates.swift");
        document
            .declarations
            .push(Statement::Function(testing::function("templates", body)));

        let mut context = TranspilationContext::new();
        let mut diagnostics = Diagnostics::new();
        RecordTemplatesPass::new(&mut context).run(document, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(context.templates().len(), 0);
    }
}
