//! A pass that warns when hoisting an if-let may reorder side effects.
//!
//! `RearrangeIfLets` hoists binding initializers above the if statement,
//! which evaluates them unconditionally and earlier than the source did. A
//! call in such an initializer may therefore run when it previously would
//! not have; recorded pure functions are exempt. The warning must fire
//! before the rearrangement so ranges still point at the original
//! condition.

use trestle_ast::Diagnostic;
use trestle_ast::Expression;
use trestle_ast::IfStatement;
use trestle_ast::SourceRange;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the side-effects-in-if-lets pass.
pub const ID: &str = "WarnSideEffectsInIfLets";

/// Creates the hoisted-side-effect warning.
fn possible_side_effect(range: Option<SourceRange>) -> Diagnostic {
    Diagnostic::warning("if-let condition containing a call will be evaluated unconditionally")
        .with_pass(ID)
        .with_range(range)
        .with_detail("the binding is hoisted above the if statement when translated")
}

/// Warns about calls inside if-let initializers.
#[derive(Debug)]
pub struct WarnSideEffectsInIfLetsPass<'a> {
    /// The context holding the recorded pure functions.
    context: &'a TranspilationContext,
}

impl<'a> WarnSideEffectsInIfLetsPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a TranspilationContext) -> Self {
        Self { context }
    }

    /// Finds a call with possible side effects inside an expression.
    fn find_impure_call(&self, expression: &Expression) -> Option<Option<SourceRange>> {
        match expression {
            Expression::Call(call) => {
                let argument_count = match &*call.parameters {
                    Expression::Tuple(tuple) => tuple.pairs.len(),
                    _ => 1,
                };
                let callee = match &*call.function {
                    Expression::DeclarationReference(reference) => Some(&reference.identifier),
                    Expression::Dot(dot) => match &*dot.right {
                        Expression::DeclarationReference(reference) => Some(&reference.identifier),
                        _ => None,
                    },
                    _ => None,
                };

                let exempt = callee
                    .is_some_and(|name| self.context.is_pure_function(name, argument_count));
                if exempt {
                    self.find_impure_call(&call.parameters)
                } else {
                    Some(call.range)
                }
            }
            Expression::Parenthesized(e) => self.find_impure_call(&e.expression),
            Expression::ForceValue(e) => self.find_impure_call(&e.expression),
            Expression::Optional(e) => self.find_impure_call(&e.expression),
            Expression::Dot(e) => self
                .find_impure_call(&e.left)
                .or_else(|| self.find_impure_call(&e.right)),
            Expression::BinaryOperator(e) => self
                .find_impure_call(&e.left)
                .or_else(|| self.find_impure_call(&e.right)),
            Expression::PrefixUnary(e) => self.find_impure_call(&e.subexpression),
            Expression::PostfixUnary(e) => self.find_impure_call(&e.subexpression),
            Expression::Subscript(e) => self
                .find_impure_call(&e.subscripted)
                .or_else(|| self.find_impure_call(&e.index)),
            Expression::Tuple(e) => e
                .pairs
                .iter()
                .find_map(|pair| self.find_impure_call(&pair.expression)),
            _ => None,
        }
    }
}

impl Pass for WarnSideEffectsInIfLetsPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_if_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: IfStatement,
    ) -> IfStatement {
        for condition in &statement.conditions {
            if let trestle_ast::IfCondition::Declaration(declaration) = condition
                && let Some(initializer) = &declaration.expression
                && let Some(range) = self.find_impure_call(initializer)
            {
                cx.diagnostics
                    .add(possible_side_effect(range.or(declaration.range)));
            }
        }

        walk::process_if_statement(self, cx, statement)
    }
}
