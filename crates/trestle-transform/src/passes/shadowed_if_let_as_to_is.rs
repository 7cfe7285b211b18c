//! A pass that simplifies shadowing conditional casts to type checks.
//!
//! `if let x = x as? T` rebinds a name to itself under a cast; inside the
//! branch only the type matters, so the target idiom is a smart-cast-friendly
//! `x is T` check.

use trestle_ast::BinaryOperatorExpression;
use trestle_ast::Expression;
use trestle_ast::IfCondition;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the shadowed-if-let-as-to-is pass.
pub const ID: &str = "ShadowedIfLetAsToIs";

/// Rewrites `let x = x as? T` conditions as `x is T`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShadowedIfLetAsToIsPass;

impl Pass for ShadowedIfLetAsToIsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_if_condition(
        &mut self,
        cx: &mut PassContext<'_>,
        condition: IfCondition,
    ) -> IfCondition {
        if let IfCondition::Declaration(declaration) = &condition
            && let Some(Expression::BinaryOperator(cast)) = &declaration.expression
            && cast.operator == "as?"
            && let Expression::DeclarationReference(source) = &*cast.left
            && source.identifier == declaration.identifier
        {
            return IfCondition::Condition(Expression::BinaryOperator(
                BinaryOperatorExpression {
                    range: cast.range,
                    left: cast.left.clone(),
                    right: cast.right.clone(),
                    operator: "is".to_string(),
                    type_name: Some("Bool".to_string()),
                },
            ));
        }

        walk::process_if_condition(self, cx, condition)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::IfStatement;
    use trestle_ast::Statement;
    use trestle_ast::VariableDeclaration;

    use super::*;
    use crate::testing;

    #[test]
    fn shadowing_cast_becomes_is_check() {
        let mut binding = testing::variable("x", "String", None);
        binding.expression = Some(testing::binary(
            testing::reference("x", Some("Any")),
            "as?",
            testing::type_expression("String"),
        ));

        let mut document = Document::new("test.swift");
        document.statements.push(Statement::If(IfStatement {
            range: None,
            conditions: vec![IfCondition::Declaration(binding)],
            is_guard: false,
            statements: vec![testing::expression_statement(testing::call(
                testing::reference("f", None),
                vec![testing::reference("x", None)],
            ))],
            else_statement: None,
        }));

        let mut diagnostics = Diagnostics::new();
        let output = ShadowedIfLetAsToIsPass.run(document, &mut diagnostics);

        let Statement::If(if_statement) = &output.statements[0] else {
            panic!("expected an if statement");
        };
        let IfCondition::Condition(Expression::BinaryOperator(check)) =
            &if_statement.conditions[0]
        else {
            panic!("expected a plain condition");
        };
        assert_eq!(check.operator, "is");
    }

    #[test]
    fn non_shadowing_bindings_are_untouched() {
        let mut binding: VariableDeclaration = testing::variable("y", "String", None);
        binding.expression = Some(testing::binary(
            testing::reference("x", Some("Any")),
            "as?",
            testing::type_expression("String"),
        ));
        let condition = IfCondition::Declaration(binding);

        let mut document = Document::new("test.swift");
        document.statements.push(Statement::If(IfStatement {
            range: None,
            conditions: vec![condition.clone()],
            is_guard: false,
            statements: vec![testing::return_statement(None)],
            else_statement: None,
        }));

        let mut diagnostics = Diagnostics::new();
        let output = ShadowedIfLetAsToIsPass.run(document, &mut diagnostics);

        let Statement::If(if_statement) = &output.statements[0] else {
            panic!("expected an if statement");
        };
        assert_eq!(if_statement.conditions[0], condition);
    }
}
