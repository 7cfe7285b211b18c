//! A pass that records function-signature translations and pure functions.
//!
//! Every named function contributes a translation entry mapping its source
//! API name (name plus external argument labels) and function type to the
//! target name and internal parameter names; the renderer uses these to emit
//! target argument labels. Functions the frontend flagged pure are recorded
//! separately so the side-effect warnings can exempt calls to them.

use trestle_ast::FunctionDeclaration;

use crate::context::FunctionTranslation;
use crate::context::PureFunction;
use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the record-functions pass.
pub const ID: &str = "RecordFunctions";

/// Records function translations and pure-function signatures.
#[derive(Debug)]
pub struct RecordFunctionsPass<'a> {
    /// The context the signatures are recorded into.
    context: &'a mut TranspilationContext,
}

impl<'a> RecordFunctionsPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a mut TranspilationContext) -> Self {
        Self { context }
    }
}

/// Builds a function's source API name, e.g. `insert(_:at:)`.
fn source_api_name(declaration: &FunctionDeclaration) -> String {
    let mut name = String::from(&declaration.prefix);
    name.push('(');
    for parameter in &declaration.parameters {
        name.push_str(parameter.api_label.as_deref().unwrap_or(&parameter.label));
        name.push(':');
    }
    name.push(')');
    name
}

impl Pass for RecordFunctionsPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn process_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: FunctionDeclaration,
    ) -> Option<FunctionDeclaration> {
        self.context.record_function_translation(FunctionTranslation {
            source_name: source_api_name(&declaration),
            function_type: declaration.function_type.clone(),
            target_name: declaration.prefix.clone(),
            parameters: declaration
                .parameters
                .iter()
                .map(|parameter| parameter.label.clone())
                .collect(),
        });

        if declaration.is_pure {
            self.context.record_pure_function(PureFunction {
                prefix: declaration.prefix.clone(),
                parameter_count: declaration.parameters.len(),
            });
        }

        walk::process_function_declaration(self, cx, declaration)
    }
}
