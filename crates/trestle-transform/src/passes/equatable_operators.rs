//! A pass that rewrites `==` operator functions as `equals` methods.
//!
//! The target language dispatches equality through an `equals(other: Any?)`
//! method. The rewrite binds the original left operand to `this` and the
//! right operand to the incoming argument, guards the original body behind a
//! type check, and falls through to `false`.

use trestle_ast::BinaryOperatorExpression;
use trestle_ast::Expression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::FunctionParameter;
use trestle_ast::IfCondition;
use trestle_ast::IfStatement;
use trestle_ast::LiteralBoolExpression;
use trestle_ast::Statement;
use trestle_ast::TypeExpression;
use trestle_ast::VariableDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the equatable-operators pass.
pub const ID: &str = "EquatableOperators";

/// A reference to the given identifier with no recorded type.
fn reference(identifier: &str) -> Expression {
    Expression::DeclarationReference(trestle_ast::DeclarationReferenceExpression {
        range: None,
        identifier: identifier.to_string(),
        type_name: None,
        is_standard_library: false,
        is_implicit: false,
    })
}

/// A `let` binding of an identifier to an expression.
fn binding(identifier: &str, type_annotation: &str, expression: Expression) -> Statement {
    Statement::Variable(VariableDeclaration {
        range: None,
        identifier: identifier.to_string(),
        type_annotation: type_annotation.to_string(),
        expression: Some(expression),
        getter: None,
        setter: None,
        access: None,
        is_let: true,
        is_implicit: false,
        is_static: false,
        extends_type: None,
        annotations: Vec::new(),
    })
}

/// Rewrites two-parameter `==` functions into `equals` methods.
#[derive(Debug, Default, Clone, Copy)]
pub struct EquatableOperatorsPass;

impl Pass for EquatableOperatorsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: FunctionDeclaration,
    ) -> Option<FunctionDeclaration> {
        if declaration.prefix != "==" || declaration.parameters.len() != 2 {
            return walk::process_function_declaration(self, cx, declaration);
        }
        let Some(body) = declaration.statements.take() else {
            return walk::process_function_declaration(self, cx, declaration);
        };

        let left = &declaration.parameters[0];
        let right = &declaration.parameters[1];
        let operand_type = left.type_name.clone();

        let type_check = Expression::BinaryOperator(BinaryOperatorExpression {
            range: None,
            left: Box::new(reference(&right.label)),
            right: Box::new(Expression::Type(TypeExpression {
                range: None,
                type_name: operand_type.clone(),
            })),
            operator: "is".to_string(),
            type_name: Some("Bool".to_string()),
        });

        let statements = vec![
            binding(&left.label, &operand_type, reference("this")),
            binding(&right.label, "Any?", reference("other")),
            Statement::If(IfStatement {
                range: None,
                conditions: vec![IfCondition::Condition(type_check)],
                is_guard: false,
                statements: body,
                else_statement: None,
            }),
            Statement::Return(trestle_ast::ReturnStatement {
                range: None,
                expression: Some(Expression::LiteralBool(LiteralBoolExpression {
                    range: None,
                    value: false,
                })),
                label: None,
            }),
        ];

        let equals = FunctionDeclaration {
            prefix: "equals".to_string(),
            parameters: vec![FunctionParameter {
                label: "other".to_string(),
                api_label: None,
                type_name: "Any?".to_string(),
                value: None,
            }],
            return_type: "Bool".to_string(),
            function_type: "(Any?) -> Bool".to_string(),
            annotations: vec!["override".to_string()],
            statements: Some(statements),
            ..declaration
        };

        walk::process_function_declaration(self, cx, equals)
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
    fn rewrites_equality_operator() {
        let mut function = testing::function(
            "==",
            vec![testing::return_statement(Some(testing::binary(
                testing::dot(testing::reference("lhs", None), testing::reference("x", None)),
                "==",
                testing::dot(testing::reference("rhs", None), testing::reference("x", None)),
            )))],
        );
        function.parameters = vec![
            FunctionParameter {
                label: "lhs".to_string(),
                api_label: None,
                type_name: "Point".to_string(),
                value: None,
            },
            FunctionParameter {
                label: "rhs".to_string(),
                api_label: None,
                type_name: "Point".to_string(),
                value: None,
            },
        ];
        function.return_type = "Bool".to_string();
        function.function_type = "(Point, Point) -> Bool".to_string();

        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Function(function));

        let mut diagnostics = Diagnostics::new();
        let output = EquatableOperatorsPass.run(document, &mut diagnostics);

        let Statement::Function(equals) = &output.declarations[0] else {
            panic!("expected a function");
        };
        assert_eq!(equals.prefix, "equals");
        assert_eq!(equals.return_type, "Bool");
        assert_eq!(equals.parameters.len(), 1);
        assert_eq!(equals.parameters[0].type_name, "Any?");
        assert_eq!(equals.annotations, vec!["override".to_string()]);

        let body = equals.statements.as_ref().unwrap();
        assert_eq!(body.len(), 4);
        assert_eq!(
            body[0],
            binding("lhs", "Point", reference("this"))
        );
        assert_eq!(body[1], binding("rhs", "Any?", reference("other")));
        assert!(matches!(&body[2], Statement::If(_)));
        assert_eq!(
            body[3],
            testing::return_statement(Some(Expression::LiteralBool(LiteralBoolExpression {
                range: None,
                value: false,
            })))
        );
    }
}
