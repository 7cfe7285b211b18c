//! A pass that strips enclosing-type prefixes from type references.
//!
//! Inside `Outer`, the source compiler spells nested types fully qualified
//! (`Outer.Inner`); the target resolves the bare name from context.

use trestle_ast::ClassDeclaration;
use trestle_ast::EnumDeclaration;
use trestle_ast::Expression;
use trestle_ast::Statement;
use trestle_ast::StructDeclaration;
use trestle_ast::TypeExpression;
use trestle_ast::VariableDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the inner-type-prefixes pass.
pub const ID: &str = "InnerTypePrefixes";

/// Strips `Enclosing.` prefixes from type references and annotations.
#[derive(Debug, Default)]
pub struct InnerTypePrefixesPass {
    /// The names of the types the traversal is currently inside, outermost
    /// first.
    type_stack: Vec<String>,
}

impl InnerTypePrefixesPass {
    /// Strips every matching enclosing-type prefix from a type name.
    fn strip(&self, type_name: &str) -> String {
        let mut name = type_name;
        loop {
            let stripped = self.type_stack.iter().find_map(|enclosing| {
                name.strip_prefix(enclosing.as_str())
                    .and_then(|rest| rest.strip_prefix('.'))
            });
            match stripped {
                Some(rest) => name = rest,
                None => break,
            }
        }
        name.to_string()
    }
}

impl Pass for InnerTypePrefixesPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_class_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: ClassDeclaration,
    ) -> Vec<Statement> {
        self.type_stack.push(declaration.name.clone());
        let result = walk::class_declaration(self, cx, declaration);
        self.type_stack.pop();
        result
    }

    fn replace_struct_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: StructDeclaration,
    ) -> Vec<Statement> {
        self.type_stack.push(declaration.name.clone());
        let result = walk::struct_declaration(self, cx, declaration);
        self.type_stack.pop();
        result
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        self.type_stack.push(declaration.name.clone());
        let result = walk::enum_declaration(self, cx, declaration);
        self.type_stack.pop();
        result
    }

    fn replace_type_expression(
        &mut self,
        _cx: &mut PassContext<'_>,
        mut expression: TypeExpression,
    ) -> Expression {
        expression.type_name = self.strip(&expression.type_name);
        Expression::Type(expression)
    }

    fn process_variable_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: VariableDeclaration,
    ) -> VariableDeclaration {
        declaration.type_annotation = self.strip(&declaration.type_annotation);
        walk::process_variable_declaration(self, cx, declaration)
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
    fn strips_prefixes_only_inside_the_type() {
        let member = Statement::Variable(testing::variable("node", "Tree.Node", None));
        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Class(ClassDeclaration {
            range: None,
            name: "Tree".to_string(),
            inherits: Vec::new(),
            members: vec![member],
        }));
        document
            .declarations
            .push(Statement::Variable(testing::variable(
                "outside",
                "Tree.Node",
                None,
            )));

        let mut diagnostics = Diagnostics::new();
        let output = InnerTypePrefixesPass::default().run(document, &mut diagnostics);

        let Statement::Class(class) = &output.declarations[0] else {
            panic!("expected a class");
        };
        let Statement::Variable(inside) = &class.members[0] else {
            panic!("expected a variable");
        };
        assert_eq!(inside.type_annotation, "Node");

        let Statement::Variable(outside) = &output.declarations[1] else {
            panic!("expected a variable");
        };
        assert_eq!(outside.type_annotation, "Tree.Node");
    }

    #[test]
    fn nested_types_strip_repeatedly() {
        let pass = InnerTypePrefixesPass {
            type_stack: vec!["Outer".to_string(), "Inner".to_string()],
        };
        assert_eq!(pass.strip("Outer.Inner.Leaf"), "Leaf");
        assert_eq!(pass.strip("Other.Leaf"), "Other.Leaf");
    }
}
