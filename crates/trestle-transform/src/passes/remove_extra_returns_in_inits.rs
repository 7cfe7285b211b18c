//! A pass that drops a trailing bare return from a static initializer.
//!
//! Static factory initializers in the source often end with an explicit
//! `return`, which is redundant once the body becomes a target function.

use trestle_ast::InitializerDeclaration;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the remove-extra-returns-in-inits pass.
pub const ID: &str = "RemoveExtraReturnsInInits";

/// Drops trailing bare returns from static initializers.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveExtraReturnsInInitsPass;

impl Pass for RemoveExtraReturnsInInitsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_initializer_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: InitializerDeclaration,
    ) -> Option<InitializerDeclaration> {
        if declaration.is_static
            && let Some(statements) = &mut declaration.statements
            && matches!(
                statements.last(),
                Some(Statement::Return(ReturnStatement {
                    expression: None,
                    ..
                }))
            )
        {
            statements.pop();
        }

        walk::process_initializer_declaration(self, cx, declaration)
    }
}
