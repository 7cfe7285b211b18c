//! A pass that removes parentheses the target syntax makes redundant.
//!
//! Tuples and interpolated strings supply their own grouping, so a
//! parenthesized expression directly inside either is unwrapped. Subscript
//! indices and the three children of a ternary lose one level of
//! parentheses for the same reason.

use trestle_ast::Expression;
use trestle_ast::ExpressionKind;
use trestle_ast::IfExpression;
use trestle_ast::ParenthesizedExpression;
use trestle_ast::SubscriptExpression;

use crate::pass::ParentNode;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the remove-parentheses pass.
pub const ID: &str = "RemoveParentheses";

/// Unwraps one level of parentheses, if present.
fn unwrap_parentheses(expression: Expression) -> Expression {
    match expression {
        Expression::Parenthesized(parenthesized) => *parenthesized.expression,
        other => other,
    }
}

/// Removes parentheses made redundant by the surrounding syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveParenthesesPass;

impl Pass for RemoveParenthesesPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_subscript_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        mut expression: SubscriptExpression,
    ) -> Expression {
        expression.index = Box::new(unwrap_parentheses(*expression.index));
        walk::subscript_expression(self, cx, expression)
    }

    fn replace_if_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        mut expression: IfExpression,
    ) -> Expression {
        expression.condition = Box::new(unwrap_parentheses(*expression.condition));
        expression.then_expression = Box::new(unwrap_parentheses(*expression.then_expression));
        expression.else_expression = Box::new(unwrap_parentheses(*expression.else_expression));
        walk::if_expression(self, cx, expression)
    }

    fn replace_parenthesized_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ParenthesizedExpression,
    ) -> Expression {
        let redundant = matches!(
            cx.parent(),
            Some(ParentNode::Expression(
                ExpressionKind::Tuple | ExpressionKind::InterpolatedString
            ))
        );

        if redundant {
            return self.replace_expression(cx, *expression.expression);
        }

        walk::parenthesized_expression(self, cx, expression)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::ParenthesizedExpression;

    use super::*;
    use crate::testing;

    /// Wraps an expression in parentheses.
    fn parenthesized(expression: Expression) -> Expression {
        Expression::Parenthesized(ParenthesizedExpression {
            range: None,
            expression: Box::new(expression),
        })
    }

    #[test]
    fn unwraps_inside_tuples_but_not_elsewhere() {
        let mut document = Document::new("test.swift");
        // f((1)) and let x = (1): the call argument tuple supplies its own
        // grouping, the variable initializer does not.
        document
            .statements
            .push(testing::expression_statement(testing::call(
                testing::reference("f", None),
                vec![parenthesized(testing::int_literal(1))],
            )));
        document
            .statements
            .push(trestle_ast::Statement::Variable(testing::variable(
                "x",
                "Int",
                Some(parenthesized(testing::int_literal(1))),
            )));

        let mut diagnostics = Diagnostics::new();
        let output = RemoveParenthesesPass.run(document, &mut diagnostics);

        assert_eq!(
            output.statements[0],
            testing::expression_statement(testing::call(
                testing::reference("f", None),
                vec![testing::int_literal(1)],
            ))
        );
        assert_eq!(
            output.statements[1],
            trestle_ast::Statement::Variable(testing::variable(
                "x",
                "Int",
                Some(parenthesized(testing::int_literal(1))),
            ))
        );
    }

    #[test]
    fn is_idempotent() {
        let mut document = Document::new("test.swift");
        document
            .statements
            .push(testing::expression_statement(testing::call(
                testing::reference("f", None),
                vec![parenthesized(testing::int_literal(1))],
            )));

        let mut diagnostics = Diagnostics::new();
        let once = RemoveParenthesesPass.run(document, &mut diagnostics);
        let twice = RemoveParenthesesPass.run(once.clone(), &mut diagnostics);
        assert_eq!(once, twice);
    }
}
