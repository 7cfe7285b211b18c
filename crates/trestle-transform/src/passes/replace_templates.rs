//! A pass that replaces recorded template patterns with their translations.
//!
//! Every expression is unified against the recorded templates in
//! registration order; the first match wins. A matched expression becomes a
//! template expression carrying the target translation and the bound
//! subtrees, which themselves are rewritten so nested template matches still
//! apply.

use trestle_ast::Expression;
use trestle_ast::TemplateExpression;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::template;
use crate::walk;

/// The identifier for the replace-templates pass.
pub const ID: &str = "ReplaceTemplates";

/// Replaces template-matching expressions with template expressions.
#[derive(Debug)]
pub struct ReplaceTemplatesPass<'a> {
    /// The context holding the recorded templates.
    context: &'a TranspilationContext,
}

impl<'a> ReplaceTemplatesPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a TranspilationContext) -> Self {
        Self { context }
    }
}

impl Pass for ReplaceTemplatesPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: Expression,
    ) -> Expression {
        let context = self.context;
        let matched = context.templates().iter().find_map(|template| {
            template::unify(&template.pattern, &expression)
                .map(|matches| (template.translation.clone(), matches))
        });

        let Some((translation, matches)) = matched else {
            return walk::expression(self, cx, expression);
        };

        let range = expression.range();
        let matches = matches
            .into_iter()
            .map(|mut binding| {
                binding.expression = self.replace_expression(cx, binding.expression);
                binding
            })
            .collect();

        Expression::Template(TemplateExpression {
            range,
            pattern: translation,
            matches,
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;

    use super::*;
    use crate::testing;

    #[test]
    fn first_registered_template_wins_and_bindings_recurse() {
        let mut context = TranspilationContext::new();
        context.record_template(
            testing::call(
                testing::reference("print", None),
                vec![testing::reference("_value", Some("Any"))],
            ),
            "println(_value)",
        );
        context.record_template(
            testing::call(
                testing::reference("abs", None),
                vec![testing::reference("_n", Some("Int"))],
            ),
            "kotlin.math.abs(_n)",
        );

        // print(abs(3)): the outer call matches the first template and the
        // bound argument matches the second.
        let mut document = Document::new("test.swift");
        document
            .statements
            .push(testing::expression_statement(testing::call(
                testing::reference("print", None),
                vec![testing::call(
                    testing::reference("abs", None),
                    vec![testing::int_literal(3)],
                )],
            )));

        let mut diagnostics = Diagnostics::new();
        let output = ReplaceTemplatesPass::new(&context).run(document, &mut diagnostics);

        let trestle_ast::Statement::Expression(statement) = &output.statements[0] else {
            panic!("expected an expression statement");
        };
        let Expression::Template(outer) = &statement.expression else {
            panic!("expected a template expression, got {:?}", statement.expression);
        };
        assert_eq!(outer.pattern, "println(_value)");
        assert_eq!(outer.matches.len(), 1);
        let Expression::Template(inner) = &outer.matches[0].expression else {
            panic!("expected the binding to be rewritten");
        };
        assert_eq!(inner.pattern, "kotlin.math.abs(_n)");
    }
}
