//! A pass that rewrites subscripts on optional values as `get` calls.
//!
//! The target's index operator cannot chain through `?.`; the method form
//! `value?.get(index)` can, and preserves the indexed element type.

use trestle_ast::CallExpression;
use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::DotExpression;
use trestle_ast::Expression;
use trestle_ast::SubscriptExpression;
use trestle_ast::TupleExpression;
use trestle_ast::TuplePair;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the refactor-optionals-in-subscripts pass.
pub const ID: &str = "RefactorOptionalsInSubscripts";

/// Rewrites `optional[index]` as `optional?.get(index)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RefactorOptionalsInSubscriptsPass;

impl Pass for RefactorOptionalsInSubscriptsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_subscript_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: SubscriptExpression,
    ) -> Expression {
        if !matches!(&*expression.subscripted, Expression::Optional(_)) {
            return walk::subscript_expression(self, cx, expression);
        }

        let subscripted = self.replace_expression(cx, *expression.subscripted);
        let index = self.replace_expression(cx, *expression.index);

        Expression::Dot(DotExpression {
            range: expression.range,
            left: Box::new(subscripted),
            right: Box::new(Expression::Call(CallExpression {
                range: None,
                function: Box::new(Expression::DeclarationReference(
                    DeclarationReferenceExpression {
                        range: None,
                        identifier: "get".to_string(),
                        type_name: None,
                        is_standard_library: false,
                        is_implicit: false,
                    },
                )),
                parameters: Box::new(Expression::Tuple(TupleExpression {
                    range: None,
                    pairs: vec![TuplePair {
                        label: None,
                        expression: index,
                    }],
                })),
                type_name: expression.type_name,
            })),
        })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::OptionalExpression;

    use super::*;
    use crate::testing;

    #[test]
    fn optional_subscripts_become_get_calls() {
        let subscript = Expression::Subscript(SubscriptExpression {
            range: None,
            subscripted: Box::new(Expression::Optional(OptionalExpression {
                range: None,
                expression: Box::new(testing::reference("xs", Some("[Int]?"))),
            })),
            index: Box::new(testing::int_literal(0)),
            type_name: Some("Int".to_string()),
        });

        let mut document = Document::new("test.swift");
        document.statements.push(testing::expression_statement(subscript));

        let mut diagnostics = Diagnostics::new();
        let output = RefactorOptionalsInSubscriptsPass.run(document, &mut diagnostics);

        let trestle_ast::Statement::Expression(statement) = &output.statements[0] else {
            panic!("expected an expression statement");
        };
        let Expression::Dot(dot) = &statement.expression else {
            panic!("expected a dot expression, got {:?}", statement.expression);
        };
        assert!(matches!(&*dot.left, Expression::Optional(_)));
        let Expression::Call(call) = &*dot.right else {
            panic!("expected a get call");
        };
        assert_eq!(call.type_name.as_deref(), Some("Int"));
    }

    #[test]
    fn plain_subscripts_are_untouched() {
        let subscript = Expression::Subscript(SubscriptExpression {
            range: None,
            subscripted: Box::new(testing::reference("xs", Some("[Int]"))),
            index: Box::new(testing::int_literal(0)),
            type_name: Some("Int".to_string()),
        });

        let mut document = Document::new("test.swift");
        document
            .statements
            .push(testing::expression_statement(subscript.clone()));

        let mut diagnostics = Diagnostics::new();
        let output = RefactorOptionalsInSubscriptsPass.run(document, &mut diagnostics);
        assert_eq!(
            output.statements[0],
            testing::expression_statement(subscript)
        );
    }
}
