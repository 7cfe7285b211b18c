//! A pass that rewrites failable static initializers as `invoke` functions.
//!
//! A static initializer whose constructed type ends in `?` cannot be a
//! target constructor (constructors cannot fail); it becomes an `invoke`
//! operator function on the companion object instead. Inside such an
//! initializer, `self = expression` assignments are the source's way of
//! producing the value and become returns.

use trestle_ast::AssignmentStatement;
use trestle_ast::Expression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::InitializerDeclaration;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the optional-inits pass.
pub const ID: &str = "OptionalInits";

/// Rewrites failable static initializers as `invoke` functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptionalInitsPass {
    /// Whether the traversal is inside a failable initializer being
    /// converted.
    in_failable_initializer: bool,
}

impl Pass for OptionalInitsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_initializer_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: InitializerDeclaration,
    ) -> Vec<Statement> {
        if !(declaration.is_static && declaration.return_type.ends_with('?')) {
            return walk::initializer_declaration(self, cx, declaration);
        }

        self.in_failable_initializer = true;
        let processed = walk::process_initializer_declaration(self, cx, declaration);
        self.in_failable_initializer = false;

        let Some(declaration) = processed else {
            return Vec::new();
        };

        let invoke = FunctionDeclaration {
            range: declaration.range,
            prefix: "invoke".to_string(),
            parameters: declaration.parameters,
            return_type: declaration.return_type,
            function_type: declaration.function_type,
            generics: Vec::new(),
            is_implicit: declaration.is_implicit,
            is_static: true,
            is_mutating: false,
            is_pure: false,
            extends_type: declaration.extends_type,
            statements: declaration.statements,
            access: declaration.access,
            annotations: declaration.annotations,
        };

        vec![Statement::Function(invoke)]
    }

    fn replace_assignment_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: AssignmentStatement,
    ) -> Vec<Statement> {
        if self.in_failable_initializer
            && matches!(
                &statement.left,
                Expression::DeclarationReference(reference) if reference.identifier == "self"
            )
        {
            let right = self.replace_expression(cx, statement.right);
            return vec![Statement::Return(ReturnStatement {
                range: statement.range,
                expression: Some(right),
                label: None,
            })];
        }

        walk::assignment_statement(self, cx, statement)
    }
}
