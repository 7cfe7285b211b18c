//! A pass that removes `break` statements from switch cases.
//!
//! The source's cases don't fall through, so a `break` directly inside one
//! is a no-op; the target's `when` has no `break` at all. A case left empty
//! by the removal is dropped entirely, which is why this pass runs after
//! `SwitchesToExpressions` — dropping a case first could make an exhaustive
//! switch non-exhaustive and block the expression form.

use trestle_ast::Statement;
use trestle_ast::SwitchStatement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the remove-breaks-in-switches pass.
pub const ID: &str = "RemoveBreaksInSwitches";

/// Removes breaks directly inside switch cases.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveBreaksInSwitchesPass;

impl Pass for RemoveBreaksInSwitchesPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_switch_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        mut statement: SwitchStatement,
    ) -> Vec<Statement> {
        for case in &mut statement.cases {
            case.statements
                .retain(|statement| !matches!(statement, Statement::Break(_)));
        }
        statement.cases.retain(|case| !case.statements.is_empty());

        walk::switch_statement(self, cx, statement)
    }
}
