//! A pass that warns about mutable value types.
//!
//! Source structs copy on assignment; the translated classes share by
//! reference. A struct with mutable stored members or mutating methods can
//! therefore behave differently after translation. The rewrite proceeds;
//! the warning tells the author to check.

use trestle_ast::Diagnostic;
use trestle_ast::EnumDeclaration;
use trestle_ast::SourceRange;
use trestle_ast::Statement;
use trestle_ast::StructDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the mutable-value-type-warnings pass.
pub const ID: &str = "MutableValueTypeWarnings";

/// Creates the mutable-struct warning.
fn mutable_struct(name: &str, range: Option<SourceRange>) -> Diagnostic {
    Diagnostic::warning(format!(
        "struct `{name}` has mutable members and will translate with reference semantics"
    ))
    .with_pass(ID)
    .with_range(range)
}

/// Creates the mutating-enum warning.
fn mutating_enum(name: &str, range: Option<SourceRange>) -> Diagnostic {
    Diagnostic::warning(format!(
        "enum `{name}` has mutating functions and will translate with reference semantics"
    ))
    .with_pass(ID)
    .with_range(range)
}

/// Determines if a member is a mutable stored variable.
fn is_mutable_stored_variable(member: &Statement) -> bool {
    matches!(
        member,
        Statement::Variable(variable)
            if !variable.is_let && variable.getter.is_none() && variable.setter.is_none()
    )
}

/// Determines if a member is a mutating function.
fn is_mutating_function(member: &Statement) -> bool {
    matches!(member, Statement::Function(function) if function.is_mutating)
}

/// Warns about structs and enums whose value semantics won't survive.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutableValueTypeWarningsPass;

impl Pass for MutableValueTypeWarningsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_struct_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: StructDeclaration,
    ) -> Vec<Statement> {
        let mutable = declaration
            .members
            .iter()
            .any(|member| is_mutable_stored_variable(member) || is_mutating_function(member));
        if mutable {
            cx.diagnostics
                .add(mutable_struct(&declaration.name, declaration.range));
        }

        walk::struct_declaration(self, cx, declaration)
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        if declaration.members.iter().any(is_mutating_function) {
            cx.diagnostics
                .add(mutating_enum(&declaration.name, declaration.range));
        }

        walk::enum_declaration(self, cx, declaration)
    }
}
