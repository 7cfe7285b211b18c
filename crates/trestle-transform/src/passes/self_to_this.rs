//! A pass that translates `self` references.
//!
//! An explicit `self` becomes the target's `this`; an implicit `self.x`
//! inserted by the source compiler disappears entirely, leaving `x`.

use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::DotExpression;
use trestle_ast::Expression;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the self-to-this pass.
pub const ID: &str = "SelfToThis";

/// Rewrites explicit `self` to `this` and drops implicit `self.`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelfToThisPass;

impl Pass for SelfToThisPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_dot_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: DotExpression,
    ) -> Expression {
        if let Expression::DeclarationReference(reference) = &*expression.left
            && reference.identifier == "self"
            && reference.is_implicit
        {
            return self.replace_expression(cx, *expression.right);
        }

        walk::dot_expression(self, cx, expression)
    }

    fn replace_declaration_reference_expression(
        &mut self,
        _cx: &mut PassContext<'_>,
        mut expression: DeclarationReferenceExpression,
    ) -> Expression {
        if expression.identifier == "self" {
            expression.identifier = "this".to_string();
        }
        Expression::DeclarationReference(expression)
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
    fn explicit_self_becomes_this_and_implicit_self_disappears() {
        let implicit_self = Expression::DeclarationReference(DeclarationReferenceExpression {
            range: None,
            identifier: "self".to_string(),
            type_name: None,
            is_standard_library: false,
            is_implicit: true,
        });

        let mut document = Document::new("test.swift");
        document
            .statements
            .push(testing::expression_statement(testing::dot(
                testing::reference("self", None),
                testing::reference("x", None),
            )));
        document
            .statements
            .push(testing::expression_statement(Expression::Dot(DotExpression {
                range: None,
                left: Box::new(implicit_self),
                right: Box::new(testing::reference("x", None)),
            })));

        let mut diagnostics = Diagnostics::new();
        let output = SelfToThisPass.run(document, &mut diagnostics);

        assert_eq!(
            output.statements[0],
            testing::expression_statement(testing::dot(
                testing::reference("this", None),
                testing::reference("x", None),
            ))
        );
        assert_eq!(
            output.statements[1],
            testing::expression_statement(testing::reference("x", None))
        );
    }
}
