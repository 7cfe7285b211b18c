//! A pass that rewrites nil-check early returns as elvis expressions.
//!
//! `if x == nil { return e }` is the target idiom `x ?: return e`, using a
//! return in expression position.

use trestle_ast::BinaryOperatorExpression;
use trestle_ast::Expression;
use trestle_ast::ExpressionStatement;
use trestle_ast::IfCondition;
use trestle_ast::IfStatement;
use trestle_ast::ReturnExpression;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the return-if-nil pass.
pub const ID: &str = "ReturnIfNil";

/// Rewrites `if x == nil { return e }` as `x ?: return e`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnIfNilPass;

impl Pass for ReturnIfNilPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_if_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: IfStatement,
    ) -> Vec<Statement> {
        let matches_shape = !statement.is_guard
            && statement.else_statement.is_none()
            && statement.conditions.len() == 1
            && statement.statements.len() == 1
            && matches!(
                &statement.conditions[0],
                IfCondition::Condition(Expression::BinaryOperator(comparison))
                    if comparison.operator == "==" && matches!(*comparison.right, Expression::Nil(_))
            )
            && matches!(
                &statement.statements[0],
                Statement::Return(ReturnStatement { expression: Some(_), .. })
            );
        if !matches_shape {
            return walk::if_statement(self, cx, statement);
        }

        let IfStatement {
            range,
            mut conditions,
            mut statements,
            ..
        } = statement;
        let IfCondition::Condition(Expression::BinaryOperator(comparison)) = conditions.remove(0)
        else {
            unreachable!("the shape check just matched a nil comparison");
        };
        let Statement::Return(return_statement) = statements.remove(0) else {
            unreachable!("the shape check just matched a value return");
        };

        let checked = self.replace_expression(cx, *comparison.left);
        let fallback = return_statement
            .expression
            .map(|expression| self.replace_expression(cx, expression));

        vec![Statement::Expression(ExpressionStatement {
            range,
            expression: Expression::BinaryOperator(BinaryOperatorExpression {
                range,
                left: Box::new(checked),
                right: Box::new(Expression::Return(ReturnExpression {
                    range: return_statement.range,
                    expression: fallback.map(Box::new),
                })),
                operator: "?:".to_string(),
                type_name: None,
            }),
        })]
    }
}
