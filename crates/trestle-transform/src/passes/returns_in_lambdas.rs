//! A pass that converts returns inside closures to bare expressions.
//!
//! A target lambda's last expression is its value; a `return x` inside one
//! would return from the enclosing function instead. Nested function
//! declarations reset the context, so their returns are left alone.

use trestle_ast::ClosureExpression;
use trestle_ast::Expression;
use trestle_ast::ExpressionStatement;
use trestle_ast::FunctionDeclaration;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the returns-in-lambdas pass.
pub const ID: &str = "ReturnsInLambdas";

/// Converts `return x` statements inside closures to expressions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnsInLambdasPass {
    /// How many closures the traversal is currently inside.
    closure_depth: usize,
}

impl Pass for ReturnsInLambdasPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_closure_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ClosureExpression,
    ) -> Expression {
        self.closure_depth += 1;
        let result = walk::closure_expression(self, cx, expression);
        self.closure_depth -= 1;
        result
    }

    fn process_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: FunctionDeclaration,
    ) -> Option<FunctionDeclaration> {
        // A function declared inside a closure starts a new return context.
        let depth = std::mem::take(&mut self.closure_depth);
        let result = walk::process_function_declaration(self, cx, declaration);
        self.closure_depth = depth;
        result
    }

    fn replace_return_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ReturnStatement,
    ) -> Vec<Statement> {
        if self.closure_depth > 0
            && let Some(expression) = statement.expression
        {
            let expression = self.replace_expression(cx, expression);
            return vec![Statement::Expression(ExpressionStatement {
                range: statement.range,
                expression,
            })];
        }

        walk::return_statement(self, cx, statement)
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
    fn returns_become_expressions_only_inside_closures() {
        let closure = Expression::Closure(ClosureExpression {
            range: None,
            parameters: Vec::new(),
            statements: vec![testing::return_statement(Some(testing::int_literal(1)))],
            type_name: None,
        });
        let function = testing::function(
            "f",
            vec![
                testing::expression_statement(closure),
                testing::return_statement(Some(testing::int_literal(2))),
            ],
        );

        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Function(function));

        let mut diagnostics = Diagnostics::new();
        let output = ReturnsInLambdasPass::default().run(document, &mut diagnostics);

        let Statement::Function(function) = &output.declarations[0] else {
            panic!("expected a function");
        };
        let body = function.statements.as_ref().unwrap();
        let Statement::Expression(statement) = &body[0] else {
            panic!("expected an expression statement");
        };
        let Expression::Closure(closure) = &statement.expression else {
            panic!("expected a closure");
        };
        assert_eq!(
            closure.statements[0],
            testing::expression_statement(testing::int_literal(1))
        );
        assert_eq!(
            body[1],
            testing::return_statement(Some(testing::int_literal(2)))
        );
    }
}
