//! A pass that strips bodies from protocol members.
//!
//! Protocol requirements are signatures; any body the frontend carried
//! along (for instance from a protocol extension folded into the
//! declaration) must not render inside the target interface.

use trestle_ast::ProtocolDeclaration;
use trestle_ast::Statement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the fix-protocol-contents pass.
pub const ID: &str = "FixProtocolContents";

/// Clears function and variable bodies inside protocol declarations.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixProtocolContentsPass;

impl Pass for FixProtocolContentsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_protocol_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: ProtocolDeclaration,
    ) -> Vec<Statement> {
        for member in &mut declaration.members {
            match member {
                Statement::Function(function) => {
                    function.statements = None;
                }
                Statement::Variable(variable) => {
                    variable.expression = None;
                    if let Some(getter) = &mut variable.getter {
                        getter.statements = None;
                    }
                    if let Some(setter) = &mut variable.setter {
                        setter.statements = None;
                    }
                }
                _ => {}
            }
        }

        walk::protocol_declaration(self, cx, declaration)
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
    fn clears_bodies_but_keeps_signatures() {
        let function = testing::function(
            "describe",
            vec![testing::return_statement(Some(testing::string_literal("x")))],
        );
        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Protocol(ProtocolDeclaration {
            range: None,
            name: "Printable".to_string(),
            members: vec![Statement::Function(function)],
        }));

        let mut diagnostics = Diagnostics::new();
        let output = FixProtocolContentsPass.run(document, &mut diagnostics);

        let Statement::Protocol(protocol) = &output.declarations[0] else {
            panic!("expected a protocol");
        };
        let Statement::Function(function) = &protocol.members[0] else {
            panic!("expected a function");
        };
        assert_eq!(function.prefix, "describe");
        assert_eq!(function.statements, None);
    }
}
