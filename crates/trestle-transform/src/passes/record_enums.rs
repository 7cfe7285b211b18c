//! A pass that classifies enums and records their names.
//!
//! An enum with inheritance or associated values becomes a sealed class in
//! the target language; a plain enum becomes an enum class. Later passes and
//! the renderer consult the recorded classification. `CleanInheritances`
//! must already have run, since a leftover raw-value base would read as
//! inheritance here.

use trestle_ast::EnumDeclaration;
use trestle_ast::Statement;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the record-enums pass.
pub const ID: &str = "RecordEnums";

/// Records every enum as sealed-class-style or enum-class-style.
#[derive(Debug)]
pub struct RecordEnumsPass<'a> {
    /// The context the classifications are recorded into.
    context: &'a mut TranspilationContext,
}

impl<'a> RecordEnumsPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a mut TranspilationContext) -> Self {
        Self { context }
    }
}

impl Pass for RecordEnumsPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        let is_plain = declaration.inherits.is_empty()
            && declaration
                .elements
                .iter()
                .all(|element| element.associated_values.is_empty());

        if is_plain {
            self.context.record_enum_class(&declaration.name);
        } else {
            self.context.record_sealed_class(&declaration.name);
        }

        walk::enum_declaration(self, cx, declaration)
    }
}
