//! A pass that turns `description` computed properties into `toString`.
//!
//! The source idiom for printable types is a `description: String` computed
//! property; the target's is an overridden `toString(): String` method.
//! Only the getter form converts — a stored `description` property is just
//! a property and stays one.

use trestle_ast::FunctionDeclaration;
use trestle_ast::Statement;
use trestle_ast::VariableDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the description-as-toString pass.
pub const ID: &str = "DescriptionAsToString";

/// Rewrites `description: String` getters as `toString` methods.
#[derive(Debug, Default, Clone, Copy)]
pub struct DescriptionAsToStringPass;

impl Pass for DescriptionAsToStringPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_variable_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: VariableDeclaration,
    ) -> Vec<Statement> {
        if declaration.identifier != "description" || declaration.type_annotation != "String" {
            return walk::variable_declaration(self, cx, declaration);
        }
        let Some(getter) = declaration.getter.take() else {
            return walk::variable_declaration(self, cx, declaration);
        };

        let to_string = FunctionDeclaration {
            prefix: "toString".to_string(),
            parameters: Vec::new(),
            return_type: "String".to_string(),
            function_type: "() -> String".to_string(),
            annotations: vec!["override".to_string()],
            extends_type: declaration.extends_type,
            access: declaration.access,
            ..*getter
        };

        walk::function_declaration(self, cx, to_string)
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
    fn converts_getter_form_only() {
        let mut computed = testing::variable("description", "String", None);
        computed.is_let = false;
        computed.getter = Some(Box::new(testing::function(
            "get",
            vec![testing::return_statement(Some(testing::string_literal(
                "a point",
            )))],
        )));

        let stored = testing::variable(
            "description",
            "String",
            Some(testing::string_literal("stored")),
        );

        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Variable(computed));
        document.declarations.push(Statement::Variable(stored.clone()));

        let mut diagnostics = Diagnostics::new();
        let output = DescriptionAsToStringPass.run(document, &mut diagnostics);

        let Statement::Function(function) = &output.declarations[0] else {
            panic!("expected a toString function, got {:?}", output.declarations[0]);
        };
        assert_eq!(function.prefix, "toString");
        assert_eq!(function.return_type, "String");
        assert_eq!(function.annotations, vec!["override".to_string()]);
        assert_eq!(
            function.statements.as_ref().unwrap()[0],
            testing::return_statement(Some(testing::string_literal("a point")))
        );

        assert_eq!(output.declarations[1], Statement::Variable(stored));
    }
}
