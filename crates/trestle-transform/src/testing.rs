//! Construction helpers for pass unit tests.

use trestle_ast::AssignmentStatement;
use trestle_ast::BinaryOperatorExpression;
use trestle_ast::CallExpression;
use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::DotExpression;
use trestle_ast::Expression;
use trestle_ast::ExpressionStatement;
use trestle_ast::FunctionDeclaration;
use trestle_ast::IfCondition;
use trestle_ast::IfStatement;
use trestle_ast::LiteralIntExpression;
use trestle_ast::LiteralStringExpression;
use trestle_ast::NilLiteralExpression;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;
use trestle_ast::TupleExpression;
use trestle_ast::TuplePair;
use trestle_ast::TypeExpression;
use trestle_ast::VariableDeclaration;

/// A declaration reference with an optional type.
pub fn reference(identifier: &str, type_name: Option<&str>) -> Expression {
    Expression::DeclarationReference(DeclarationReferenceExpression {
        range: None,
        identifier: identifier.to_string(),
        type_name: type_name.map(str::to_string),
        is_standard_library: false,
        is_implicit: false,
    })
}

/// A type reference expression.
pub fn type_expression(type_name: &str) -> Expression {
    Expression::Type(TypeExpression {
        range: None,
        type_name: type_name.to_string(),
    })
}

/// An integer literal.
pub fn int_literal(value: i64) -> Expression {
    Expression::LiteralInt(LiteralIntExpression { range: None, value })
}

/// A string literal.
pub fn string_literal(value: &str) -> Expression {
    Expression::LiteralString(LiteralStringExpression {
        range: None,
        value: value.to_string(),
    })
}

/// The nil literal.
pub fn nil() -> Expression {
    Expression::Nil(NilLiteralExpression { range: None })
}

/// A member access.
pub fn dot(left: Expression, right: Expression) -> Expression {
    Expression::Dot(DotExpression {
        range: None,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// A binary operator application.
pub fn binary(left: Expression, operator: &str, right: Expression) -> Expression {
    Expression::BinaryOperator(BinaryOperatorExpression {
        range: None,
        left: Box::new(left),
        right: Box::new(right),
        operator: operator.to_string(),
        type_name: None,
    })
}

/// A call with unlabeled arguments.
pub fn call(function: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call(CallExpression {
        range: None,
        function: Box::new(function),
        parameters: Box::new(tuple(arguments)),
        type_name: None,
    })
}

/// A tuple of unlabeled elements.
pub fn tuple(elements: Vec<Expression>) -> Expression {
    Expression::Tuple(TupleExpression {
        range: None,
        pairs: elements
            .into_iter()
            .map(|expression| TuplePair {
                label: None,
                expression,
            })
            .collect(),
    })
}

/// An expression statement.
pub fn expression_statement(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement {
        range: None,
        expression,
    })
}

/// A return statement.
pub fn return_statement(expression: Option<Expression>) -> Statement {
    Statement::Return(ReturnStatement {
        range: None,
        expression,
        label: None,
    })
}

/// An assignment statement.
pub fn assignment(left: Expression, right: Expression) -> Statement {
    Statement::Assignment(AssignmentStatement {
        range: None,
        left,
        right,
    })
}

/// A stored `let` variable declaration.
pub fn variable(identifier: &str, type_annotation: &str, expression: Option<Expression>) -> VariableDeclaration {
    VariableDeclaration {
        range: None,
        identifier: identifier.to_string(),
        type_annotation: type_annotation.to_string(),
        expression,
        getter: None,
        setter: None,
        access: None,
        is_let: true,
        is_implicit: false,
        is_static: false,
        extends_type: None,
        annotations: Vec::new(),
    }
}

/// A function declaration with the given body and unremarkable defaults.
pub fn function(prefix: &str, statements: Vec<Statement>) -> FunctionDeclaration {
    FunctionDeclaration {
        range: None,
        prefix: prefix.to_string(),
        parameters: Vec::new(),
        return_type: "()".to_string(),
        function_type: "() -> ()".to_string(),
        generics: Vec::new(),
        is_implicit: false,
        is_static: false,
        is_mutating: false,
        is_pure: false,
        extends_type: None,
        statements: Some(statements),
        access: None,
        annotations: Vec::new(),
    }
}

/// An if statement with plain conditions and no else branch.
pub fn if_statement(conditions: Vec<Expression>, statements: Vec<Statement>) -> IfStatement {
    IfStatement {
        range: None,
        conditions: conditions.into_iter().map(IfCondition::Condition).collect(),
        is_guard: false,
        statements,
        else_statement: None,
    }
}
