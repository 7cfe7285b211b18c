//! A pass that hoists `super.init(...)` calls out of initializer bodies.
//!
//! The target places a superclass constructor call in the constructor's
//! delegation clause, not in the body. Exactly one such call may be hoisted;
//! an initializer with more than one keeps its body and gets a warning.

use trestle_ast::CallExpression;
use trestle_ast::Diagnostic;
use trestle_ast::Expression;
use trestle_ast::InitializerDeclaration;
use trestle_ast::SourceRange;
use trestle_ast::Statement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the calls-to-superclass-initializers pass.
pub const ID: &str = "CallsToSuperclassInitializers";

/// Creates the multiple-super-calls warning.
fn multiple_super_calls(range: Option<SourceRange>) -> Diagnostic {
    Diagnostic::warning("initializer calls the superclass initializer more than once")
        .with_pass(ID)
        .with_range(range)
        .with_detail("only a single call can move to the constructor delegation clause")
}

/// Determines if a statement is a `super.init(...)` call, returning the
/// call.
fn as_super_call(statement: &Statement) -> Option<&CallExpression> {
    let Statement::Expression(expression_statement) = statement else {
        return None;
    };
    let Expression::Call(call) = &expression_statement.expression else {
        return None;
    };
    let Expression::Dot(dot) = &*call.function else {
        return None;
    };
    let Expression::DeclarationReference(receiver) = &*dot.left else {
        return None;
    };
    let Expression::DeclarationReference(method) = &*dot.right else {
        return None;
    };
    (receiver.identifier == "super" && method.identifier == "init").then_some(call)
}

/// Hoists a single `super.init(...)` call into the initializer's
/// delegation slot.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallsToSuperclassInitializersPass;

impl Pass for CallsToSuperclassInitializersPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_initializer_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: InitializerDeclaration,
    ) -> Option<InitializerDeclaration> {
        let Some(statements) = declaration.statements.take() else {
            return walk::process_initializer_declaration(self, cx, declaration);
        };

        let super_calls = statements.iter().filter_map(as_super_call).count();
        if super_calls > 1 {
            cx.diagnostics.add(multiple_super_calls(declaration.range));
            declaration.statements = Some(statements);
            return walk::process_initializer_declaration(self, cx, declaration);
        }

        let mut body = Vec::with_capacity(statements.len());
        for statement in statements {
            if let Some(call) = as_super_call(&statement) {
                declaration.super_call = Some(call.clone());
            } else {
                body.push(statement);
            }
        }
        declaration.statements = Some(body);

        walk::process_initializer_declaration(self, cx, declaration)
    }
}
