//! A pass that flattens extensions into their members.
//!
//! The target language has no extension blocks; each member becomes a
//! top-level extension function or property stamped with the extended type,
//! which the renderer emits as a `Type.member` prefix.

use trestle_ast::ExtensionDeclaration;
use trestle_ast::Statement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the remove-extensions pass.
pub const ID: &str = "RemoveExtensions";

/// Replaces extensions with their members, stamped with the extended type.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoveExtensionsPass;

impl Pass for RemoveExtensionsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_extension_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: ExtensionDeclaration,
    ) -> Vec<Statement> {
        for member in &mut declaration.members {
            match member {
                Statement::Function(function) => {
                    function.extends_type = Some(declaration.extended_type.clone());
                }
                Statement::Initializer(initializer) => {
                    initializer.extends_type = Some(declaration.extended_type.clone());
                }
                Statement::Variable(variable) => {
                    variable.extends_type = Some(declaration.extended_type.clone());
                }
                _ => {}
            }
        }

        self.replace_statements(cx, declaration.members)
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
    fn flattens_members_with_the_extended_type() {
        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Extension(ExtensionDeclaration {
            range: None,
            extended_type: "String".to_string(),
            members: vec![
                Statement::Function(testing::function("shouted", Vec::new())),
                Statement::Variable(testing::variable("half", "Int", None)),
            ],
        }));

        let mut diagnostics = Diagnostics::new();
        let output = RemoveExtensionsPass.run(document, &mut diagnostics);

        assert_eq!(output.declarations.len(), 2);
        let Statement::Function(function) = &output.declarations[0] else {
            panic!("expected a function");
        };
        assert_eq!(function.extends_type.as_deref(), Some("String"));
        let Statement::Variable(variable) = &output.declarations[1] else {
            panic!("expected a variable");
        };
        assert_eq!(variable.extends_type.as_deref(), Some("String"));
    }

    /// `walk::extension_declaration` is unused once this override exists,
    /// but the default must still recurse for passes that keep extensions.
    #[test]
    fn default_walk_preserves_extensions() {
        struct Identity;
        impl Pass for Identity {
            fn name(&self) -> &'static str {
                "Identity"
            }
        }

        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Extension(ExtensionDeclaration {
            range: None,
            extended_type: "String".to_string(),
            members: Vec::new(),
        }));

        let mut diagnostics = Diagnostics::new();
        let output = Identity.run(document.clone(), &mut diagnostics);
        assert_eq!(output, document);
    }
}
