//! A pass that simplifies negated guard conditions.
//!
//! A guard renders as an if over its negated condition, so a guard whose
//! single condition is already a negation (`!x`, `a != b`) — or an equality
//! that negates cleanly (`a == b`) — folds the two negations together and
//! becomes a plain if statement.

use trestle_ast::Expression;
use trestle_ast::IfCondition;
use trestle_ast::IfStatement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the double-negatives-in-guards pass.
pub const ID: &str = "DoubleNegativesInGuards";

/// Folds double negations out of single-condition guards.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleNegativesInGuardsPass;

impl Pass for DoubleNegativesInGuardsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_if_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        mut statement: IfStatement,
    ) -> IfStatement {
        if statement.is_guard
            && statement.conditions.len() == 1
            && let IfCondition::Condition(condition) = &mut statement.conditions[0]
        {
            match condition {
                Expression::PrefixUnary(negation) if negation.operator == "!" => {
                    *condition = (*negation.subexpression).clone();
                    statement.is_guard = false;
                }
                Expression::BinaryOperator(comparison) if comparison.operator == "!=" => {
                    comparison.operator = "==".to_string();
                    statement.is_guard = false;
                }
                Expression::BinaryOperator(comparison) if comparison.operator == "==" => {
                    comparison.operator = "!=".to_string();
                    statement.is_guard = false;
                }
                _ => {}
            }
        }

        walk::process_if_statement(self, cx, statement)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::PrefixUnaryExpression;
    use trestle_ast::Statement;

    use super::*;
    use crate::testing;

    /// A guard with the given single condition.
    fn guard(condition: Expression) -> Statement {
        Statement::If(IfStatement {
            range: None,
            conditions: vec![IfCondition::Condition(condition)],
            is_guard: true,
            statements: vec![testing::return_statement(None)],
            else_statement: None,
        })
    }

    #[test]
    fn negated_comparison_inverts_and_becomes_if() {
        let mut document = Document::new("test.swift");
        document.statements.push(guard(testing::binary(
            testing::reference("x", Some("Int?")),
            "!=",
            testing::nil(),
        )));

        let mut diagnostics = Diagnostics::new();
        let output = DoubleNegativesInGuardsPass.run(document, &mut diagnostics);

        let Statement::If(if_statement) = &output.statements[0] else {
            panic!("expected an if statement");
        };
        assert!(!if_statement.is_guard);
        let IfCondition::Condition(Expression::BinaryOperator(comparison)) =
            &if_statement.conditions[0]
        else {
            panic!("expected a comparison condition");
        };
        assert_eq!(comparison.operator, "==");
    }

    #[test]
    fn prefix_negation_unwraps() {
        let negation = Expression::PrefixUnary(PrefixUnaryExpression {
            range: None,
            subexpression: Box::new(testing::reference("done", Some("Bool"))),
            operator: "!".to_string(),
            type_name: Some("Bool".to_string()),
        });

        let mut document = Document::new("test.swift");
        document.statements.push(guard(negation));

        let mut diagnostics = Diagnostics::new();
        let output = DoubleNegativesInGuardsPass.run(document, &mut diagnostics);

        let Statement::If(if_statement) = &output.statements[0] else {
            panic!("expected an if statement");
        };
        assert!(!if_statement.is_guard);
        assert_eq!(
            if_statement.conditions[0],
            IfCondition::Condition(testing::reference("done", Some("Bool")))
        );
    }

    #[test]
    fn other_guards_stay_guards() {
        let statement = guard(testing::reference("ready", Some("Bool")));
        let mut document = Document::new("test.swift");
        document.statements.push(statement.clone());

        let mut diagnostics = Diagnostics::new();
        let output = DoubleNegativesInGuardsPass.run(document, &mut diagnostics);
        assert_eq!(output.statements[0], statement);
    }
}
