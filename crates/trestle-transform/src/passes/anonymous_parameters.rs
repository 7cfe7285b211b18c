//! A pass that translates anonymous closure parameters.
//!
//! The source's `$0` is the target's `it`, and a closure whose only
//! declared parameter is `$0` drops its parameter list so the implicit
//! receiver applies.

use trestle_ast::ClosureExpression;
use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::Expression;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the anonymous-parameters pass.
pub const ID: &str = "AnonymousParameters";

/// Rewrites `$0` as `it` and removes `$0` parameter lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousParametersPass;

impl Pass for AnonymousParametersPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_declaration_reference_expression(
        &mut self,
        _cx: &mut PassContext<'_>,
        mut expression: DeclarationReferenceExpression,
    ) -> Expression {
        if expression.identifier == "$0" {
            expression.identifier = "it".to_string();
        }
        Expression::DeclarationReference(expression)
    }

    fn replace_closure_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        mut expression: ClosureExpression,
    ) -> Expression {
        if expression.parameters.len() == 1
            && expression.parameters[0].label.as_deref() == Some("$0")
        {
            expression.parameters.clear();
        }

        walk::closure_expression(self, cx, expression)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::LabeledType;

    use super::*;
    use crate::testing;

    #[test]
    fn rewrites_anonymous_closures() {
        let closure = Expression::Closure(ClosureExpression {
            range: None,
            parameters: vec![LabeledType {
                label: Some("$0".to_string()),
                type_name: "Int".to_string(),
            }],
            statements: vec![testing::expression_statement(testing::call(
                testing::reference("print", None),
                vec![testing::reference("$0", Some("Int"))],
            ))],
            type_name: Some("(Int) -> ()".to_string()),
        });

        let mut document = Document::new("test.swift");
        document.statements.push(testing::expression_statement(closure));

        let mut diagnostics = Diagnostics::new();
        let output = AnonymousParametersPass.run(document, &mut diagnostics);

        let trestle_ast::Statement::Expression(statement) = &output.statements[0] else {
            panic!("expected an expression statement");
        };
        let Expression::Closure(closure) = &statement.expression else {
            panic!("expected a closure");
        };
        assert!(closure.parameters.is_empty());
        assert_eq!(
            closure.statements[0],
            testing::expression_statement(testing::call(
                testing::reference("print", None),
                vec![testing::reference("it", Some("Int"))],
            ))
        );
    }
}
