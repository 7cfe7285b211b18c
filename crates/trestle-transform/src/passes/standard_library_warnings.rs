//! A pass that warns about untranslated standard-library references.
//!
//! References the frontend resolved into the source standard library have
//! no general translation; the ones a template rewrote are already gone by
//! the time this pass runs, so whatever is left renders as-is and deserves
//! a warning.

use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::Diagnostic;
use trestle_ast::Expression;

use crate::pass::Pass;
use crate::pass::PassContext;

/// The identifier for the standard-library-warnings pass.
pub const ID: &str = "StandardLibraryWarnings";

/// Creates the unresolved-reference warning.
fn unresolved_reference(expression: &DeclarationReferenceExpression) -> Diagnostic {
    Diagnostic::warning(format!(
        "reference to standard library symbol `{identifier}` was not translated",
        identifier = expression.identifier
    ))
    .with_pass(ID)
    .with_range(expression.range)
}

/// Warns on standard-library references no template translated.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardLibraryWarningsPass;

impl Pass for StandardLibraryWarningsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_declaration_reference_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: DeclarationReferenceExpression,
    ) -> Expression {
        if expression.is_standard_library {
            cx.diagnostics.add(unresolved_reference(&expression));
        }
        Expression::DeclarationReference(expression)
    }
}
