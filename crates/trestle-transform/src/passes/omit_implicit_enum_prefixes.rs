//! A pass that drops redundant enum prefixes from returned cases.
//!
//! When a function returns `E` (or `E?`), the target resolves a bare case
//! name in return position, so `return E.MEMBER` can be `return MEMBER` —
//! unless `E` is a sealed class, whose cases are nested types that always
//! need qualification.

use trestle_ast::Expression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the omit-implicit-enum-prefixes pass.
pub const ID: &str = "OmitImplicitEnumPrefixes";

/// Drops `E.` prefixes from returns in functions returning `E`.
#[derive(Debug)]
pub struct OmitImplicitEnumPrefixesPass<'a> {
    /// The context holding the recorded enum classifications.
    context: &'a TranspilationContext,
    /// The return types of the functions the traversal is inside.
    return_types: Vec<String>,
}

impl<'a> OmitImplicitEnumPrefixesPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a TranspilationContext) -> Self {
        Self {
            context,
            return_types: Vec::new(),
        }
    }
}

impl Pass for OmitImplicitEnumPrefixesPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: FunctionDeclaration,
    ) -> Option<FunctionDeclaration> {
        self.return_types.push(declaration.return_type.clone());
        let result = walk::process_function_declaration(self, cx, declaration);
        self.return_types.pop();
        result
    }

    fn replace_return_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        mut statement: ReturnStatement,
    ) -> Vec<Statement> {
        let enum_name = self
            .return_types
            .last()
            .map(|return_type| return_type.strip_suffix('?').unwrap_or(return_type))
            .filter(|name| !self.context.is_sealed_class(name));

        if let Some(enum_name) = enum_name
            && let Some(Expression::Dot(dot)) = &statement.expression
            && matches!(&*dot.left, Expression::Type(prefix) if prefix.type_name == enum_name)
        {
            statement.expression = Some((*dot.right).clone());
        }

        walk::return_statement(self, cx, statement)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;

    use super::*;
    use crate::testing;

    /// A function returning `return_type` whose body returns `E.NORTH`.
    fn returning_function(return_type: &str) -> FunctionDeclaration {
        let mut function = testing::function(
            "pick",
            vec![testing::return_statement(Some(testing::dot(
                testing::type_expression("Direction"),
                testing::reference("NORTH", None),
            )))],
        );
        function.return_type = return_type.to_string();
        function.function_type = format!("() -> {return_type}");
        function
    }

    #[test]
    fn drops_prefix_for_enum_class_returns() {
        let mut context = TranspilationContext::new();
        context.record_enum_class("Direction");

        let mut document = Document::new("test.swift");
        document
            .declarations
            .push(Statement::Function(returning_function("Direction?")));

        let mut diagnostics = Diagnostics::new();
        let output =
            OmitImplicitEnumPrefixesPass::new(&context).run(document, &mut diagnostics);

        let Statement::Function(function) = &output.declarations[0] else {
            panic!("expected a function");
        };
        assert_eq!(
            function.statements.as_ref().unwrap()[0],
            testing::return_statement(Some(testing::reference("NORTH", None)))
        );
    }

    #[test]
    fn sealed_classes_keep_their_prefix() {
        let mut context = TranspilationContext::new();
        context.record_sealed_class("Direction");

        let function = returning_function("Direction");
        let mut document = Document::new("test.swift");
        document
            .declarations
            .push(Statement::Function(function.clone()));

        let mut diagnostics = Diagnostics::new();
        let output =
            OmitImplicitEnumPrefixesPass::new(&context).run(document, &mut diagnostics);
        assert_eq!(output.declarations[0], Statement::Function(function));
    }
}
