//! A pass that renames enum cases to target naming conventions.
//!
//! Sealed-class cases are types and take upper camel case; enum-class cases
//! are constants and take upper snake case. References through the enum's
//! name and the element declarations themselves are renamed together so the
//! two stay consistent.

use convert_case::Case;
use convert_case::Casing;
use trestle_ast::DotExpression;
use trestle_ast::EnumDeclaration;
use trestle_ast::Expression;
use trestle_ast::Statement;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the capitalize-enums pass.
pub const ID: &str = "CapitalizeEnums";

/// Renames a sealed-class case.
fn sealed_case_name(name: &str) -> String {
    name.to_case(Case::UpperCamel)
}

/// Renames an enum-class case.
fn enum_case_name(name: &str) -> String {
    name.to_case(Case::UpperSnake)
}

/// Capitalizes enum case declarations and references.
#[derive(Debug)]
pub struct CapitalizeEnumsPass<'a> {
    /// The context holding the recorded enum classifications.
    context: &'a TranspilationContext,
}

impl<'a> CapitalizeEnumsPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a TranspilationContext) -> Self {
        Self { context }
    }
}

impl Pass for CapitalizeEnumsPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_dot_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        mut expression: DotExpression,
    ) -> Expression {
        if let Expression::Type(enum_type) = &*expression.left
            && let Expression::DeclarationReference(member) = &mut *expression.right
        {
            if self.context.is_sealed_class(&enum_type.type_name) {
                member.identifier = sealed_case_name(&member.identifier);
            } else if self.context.is_enum_class(&enum_type.type_name) {
                member.identifier = enum_case_name(&member.identifier);
            }
        }

        walk::dot_expression(self, cx, expression)
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        if self.context.is_sealed_class(&declaration.name) {
            for element in &mut declaration.elements {
                element.name = sealed_case_name(&element.name);
            }
        } else if self.context.is_enum_class(&declaration.name) {
            for element in &mut declaration.elements {
                element.name = enum_case_name(&element.name);
            }
        }

        walk::enum_declaration(self, cx, declaration)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::EnumElement;

    use super::*;
    use crate::testing;

    /// An element with no payload.
    fn element(name: &str) -> EnumElement {
        EnumElement {
            range: None,
            name: name.to_string(),
            associated_values: Vec::new(),
            raw_value: None,
            annotations: None,
        }
    }

    #[test]
    fn renames_declarations_and_references_by_classification() {
        let mut context = TranspilationContext::new();
        context.record_sealed_class("Expression");
        context.record_enum_class("CompassDirection");

        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Enum(EnumDeclaration {
            range: None,
            access: None,
            name: "CompassDirection".to_string(),
            inherits: Vec::new(),
            elements: vec![element("northWest")],
            members: Vec::new(),
            is_implicit: false,
        }));
        document
            .statements
            .push(testing::expression_statement(testing::dot(
                testing::type_expression("Expression"),
                testing::reference("binaryOperator", None),
            )));
        document
            .statements
            .push(testing::expression_statement(testing::dot(
                testing::type_expression("CompassDirection"),
                testing::reference("northWest", None),
            )));

        let mut diagnostics = Diagnostics::new();
        let output = CapitalizeEnumsPass::new(&context).run(document, &mut diagnostics);

        let Statement::Enum(declaration) = &output.declarations[0] else {
            panic!("expected an enum");
        };
        assert_eq!(declaration.elements[0].name, "NORTH_WEST");

        assert_eq!(
            output.statements[0],
            testing::expression_statement(testing::dot(
                testing::type_expression("Expression"),
                testing::reference("BinaryOperator", None),
            ))
        );
        assert_eq!(
            output.statements[1],
            testing::expression_statement(testing::dot(
                testing::type_expression("CompassDirection"),
                testing::reference("NORTH_WEST", None),
            ))
        );
    }
}
