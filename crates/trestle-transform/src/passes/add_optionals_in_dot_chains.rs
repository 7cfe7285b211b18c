//! A pass that propagates `?.` through member-access chains.
//!
//! Once any prefix of a dot chain is an optional access, every later link
//! must also chain optionally: `foo?.bar.baz` reads from a value that may
//! not exist and becomes `foo?.bar?.baz`.

use trestle_ast::DotExpression;
use trestle_ast::Expression;
use trestle_ast::OptionalExpression;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the add-optionals-in-dot-chains pass.
pub const ID: &str = "AddOptionalsInDotChains";

/// Determines if an expression's rightmost link chains optionally.
fn chains_optionally(expression: &Expression) -> bool {
    match expression {
        Expression::Optional(_) => true,
        Expression::Dot(dot) => chains_optionally(&dot.left),
        _ => false,
    }
}

/// Propagates optional chaining down dot chains.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddOptionalsInDotChainsPass;

impl Pass for AddOptionalsInDotChainsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_dot_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        mut expression: DotExpression,
    ) -> Expression {
        if !matches!(&*expression.left, Expression::Optional(_))
            && chains_optionally(&expression.left)
        {
            expression.left = Box::new(Expression::Optional(OptionalExpression {
                range: expression.left.range(),
                expression: expression.left,
            }));
        }

        walk::dot_expression(self, cx, expression)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;

    use super::*;
    use crate::testing;

    /// Wraps an expression in an optional access.
    fn optional(expression: Expression) -> Expression {
        Expression::Optional(OptionalExpression {
            range: None,
            expression: Box::new(expression),
        })
    }

    #[test]
    fn optionality_propagates_down_the_chain() {
        // foo?.bar.baz
        let chain = testing::dot(
            testing::dot(
                optional(testing::reference("foo", Some("Foo?"))),
                testing::reference("bar", Some("Bar")),
            ),
            testing::reference("baz", Some("Int")),
        );

        let mut document = Document::new("test.swift");
        document.statements.push(testing::expression_statement(chain));

        let mut diagnostics = Diagnostics::new();
        let output = AddOptionalsInDotChainsPass.run(document, &mut diagnostics);

        // foo?.bar?.baz
        let expected = testing::dot(
            optional(testing::dot(
                optional(testing::reference("foo", Some("Foo?"))),
                testing::reference("bar", Some("Bar")),
            )),
            testing::reference("baz", Some("Int")),
        );
        assert_eq!(output.statements[0], testing::expression_statement(expected));
    }

    #[test]
    fn plain_chains_are_untouched() {
        let chain = testing::dot(
            testing::dot(
                testing::reference("foo", Some("Foo")),
                testing::reference("bar", Some("Bar")),
            ),
            testing::reference("baz", Some("Int")),
        );

        let mut document = Document::new("test.swift");
        document
            .statements
            .push(testing::expression_statement(chain.clone()));

        let mut diagnostics = Diagnostics::new();
        let output = AddOptionalsInDotChainsPass.run(document, &mut diagnostics);
        assert_eq!(output.statements[0], testing::expression_statement(chain));
    }
}
