//! A pass that warns about native array and dictionary literals.
//!
//! The source's native `[...]` collections are value types; the translated
//! `mutableListOf`/`mutableMapOf` collections are not, so literals typed
//! with the native bracket form (rather than the translatable wrapper
//! classes) may change behavior.

use trestle_ast::ArrayExpression;
use trestle_ast::Diagnostic;
use trestle_ast::DictionaryExpression;
use trestle_ast::Expression;
use trestle_ast::SourceRange;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the native-data-structure-warnings pass.
pub const ID: &str = "NativeDataStructureWarnings";

/// Creates the native-collection warning.
fn native_collection(kind: &str, range: Option<SourceRange>) -> Diagnostic {
    Diagnostic::warning(format!(
        "native {kind} will translate with reference semantics"
    ))
    .with_pass(ID)
    .with_range(range)
}

/// Determines if a type string uses the native bracket form.
fn is_native_type(type_name: Option<&str>) -> bool {
    type_name.is_some_and(|name| name.starts_with('['))
}

/// Warns about array and dictionary literals with native types.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDataStructureWarningsPass;

impl Pass for NativeDataStructureWarningsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_array_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ArrayExpression,
    ) -> Expression {
        if is_native_type(expression.type_name.as_deref()) {
            cx.diagnostics
                .add(native_collection("array", expression.range));
        }

        walk::array_expression(self, cx, expression)
    }

    fn replace_dictionary_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: DictionaryExpression,
    ) -> Expression {
        if is_native_type(expression.type_name.as_deref()) {
            cx.diagnostics
                .add(native_collection("dictionary", expression.range));
        }

        walk::dictionary_expression(self, cx, expression)
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
    fn warns_on_native_types_only() {
        let native = Expression::Array(ArrayExpression {
            range: None,
            elements: vec![testing::int_literal(1)],
            type_name: Some("[Int]".to_string()),
        });
        let wrapped = Expression::Array(ArrayExpression {
            range: None,
            elements: vec![testing::int_literal(1)],
            type_name: Some("ArrayClass<Int>".to_string()),
        });

        let mut document = Document::new("test.swift");
        document.statements.push(testing::expression_statement(native));
        document.statements.push(testing::expression_statement(wrapped));

        let mut diagnostics = Diagnostics::new();
        NativeDataStructureWarningsPass.run(document, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
    }
}
