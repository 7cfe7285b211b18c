//! A pass that removes compiler-synthesized declarations.
//!
//! The source compiler materializes declarations the programmer never wrote
//! (synthesized conformance members, implicit raw-value initializers, and
//! the like). They have no place in the translated output.

use trestle_ast::EnumDeclaration;
use trestle_ast::FunctionDeclaration;
use trestle_ast::InitializerDeclaration;
use trestle_ast::Statement;
use trestle_ast::TypealiasDeclaration;
use trestle_ast::VariableDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the remove-implicit-declarations pass.
pub const ID: &str = "RemoveImplicitDeclarations";

/// Removes declarations flagged implicit by the frontend.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveImplicitDeclarationsPass;

impl Pass for RemoveImplicitDeclarationsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        if declaration.is_implicit {
            return Vec::new();
        }

        walk::enum_declaration(self, cx, declaration)
    }

    fn replace_typealias_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: TypealiasDeclaration,
    ) -> Vec<Statement> {
        if declaration.is_implicit {
            return Vec::new();
        }

        walk::typealias_declaration(self, cx, declaration)
    }

    fn process_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: FunctionDeclaration,
    ) -> Option<FunctionDeclaration> {
        if declaration.is_implicit {
            return None;
        }

        walk::process_function_declaration(self, cx, declaration)
    }

    fn process_initializer_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: InitializerDeclaration,
    ) -> Option<InitializerDeclaration> {
        if declaration.is_implicit {
            return None;
        }

        walk::process_initializer_declaration(self, cx, declaration)
    }

    fn replace_variable_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: VariableDeclaration,
    ) -> Vec<Statement> {
        if declaration.is_implicit {
            return Vec::new();
        }

        walk::variable_declaration(self, cx, declaration)
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
    fn drops_implicit_declarations_and_keeps_the_rest() {
        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Typealias(TypealiasDeclaration {
            range: None,
            identifier: "RawValue".to_string(),
            type_name: "Int".to_string(),
            is_implicit: true,
        }));
        document
            .declarations
            .push(Statement::Variable(testing::variable("kept", "Int", None)));

        let mut diagnostics = Diagnostics::new();
        let output = RemoveImplicitDeclarationsPass.run(document, &mut diagnostics);

        assert_eq!(output.declarations.len(), 1);
        assert_eq!(
            output.declarations[0],
            Statement::Variable(testing::variable("kept", "Int", None))
        );
        assert!(diagnostics.is_empty());
    }
}
