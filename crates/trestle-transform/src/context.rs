//! The shared context populated by first-round passes.
//!
//! The context is process-scoped: the first round records into it while
//! walking every document of the batch, and the second round (and the
//! renderer) only read from it. All writes are appends; nothing is removed
//! until [`TranspilationContext::clear`] resets the registries for the next
//! invocation.

use indexmap::IndexSet;
use serde::Deserialize;
use serde::Serialize;
use trestle_ast::Expression;

/// A recorded source-pattern/target-translation pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatePattern {
    /// The source-language pattern, with `_`-prefixed free variables.
    pub pattern: Expression,
    /// The target-language translation, with `_`-prefixed holes.
    pub translation: String,
}

/// A recorded translation of a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTranslation {
    /// The source API name, e.g. `f(of:with:)`.
    pub source_name: String,
    /// The source function type, e.g. `(Int, String) -> Bool`.
    pub function_type: String,
    /// The target function name.
    pub target_name: String,
    /// The target parameter names, in declaration order.
    pub parameters: Vec<String>,
}

/// A recorded pure-function signature.
///
/// Calls matching a recorded signature are exempt from the
/// side-effects-in-if-lets warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PureFunction {
    /// The function name.
    pub prefix: String,
    /// The number of declared parameters.
    pub parameter_count: usize,
}

/// The registries shared across passes and with the renderer.
#[derive(Debug, Default, Clone)]
pub struct TranspilationContext {
    /// The recorded templates, in registration order.
    templates: Vec<TemplatePattern>,
    /// Names of enums translated as sealed classes.
    sealed_classes: IndexSet<String>,
    /// Names of enums translated as enum classes.
    enum_classes: IndexSet<String>,
    /// Names of declared protocols.
    protocols: IndexSet<String>,
    /// The recorded function-signature translations.
    function_translations: Vec<FunctionTranslation>,
    /// The recorded pure-function signatures.
    pure_functions: Vec<PureFunction>,
}

impl TranspilationContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every registry for the next invocation.
    pub fn clear(&mut self) {
        self.templates.clear();
        self.sealed_classes.clear();
        self.enum_classes.clear();
        self.protocols.clear();
        self.function_translations.clear();
        self.pure_functions.clear();
    }

    /// Records a template, after any previously recorded templates.
    pub fn record_template(&mut self, pattern: Expression, translation: impl Into<String>) {
        self.templates.push(TemplatePattern {
            pattern,
            translation: translation.into(),
        });
    }

    /// Gets the recorded templates, in registration order.
    pub fn templates(&self) -> &[TemplatePattern] {
        &self.templates
    }

    /// Records an enum as translating to a sealed class.
    pub fn record_sealed_class(&mut self, name: impl Into<String>) {
        self.sealed_classes.insert(name.into());
    }

    /// Determines if an enum was recorded as a sealed class.
    pub fn is_sealed_class(&self, name: &str) -> bool {
        self.sealed_classes.contains(name)
    }

    /// Records an enum as translating to an enum class.
    pub fn record_enum_class(&mut self, name: impl Into<String>) {
        self.enum_classes.insert(name.into());
    }

    /// Determines if an enum was recorded as an enum class.
    pub fn is_enum_class(&self, name: &str) -> bool {
        self.enum_classes.contains(name)
    }

    /// Records a protocol name.
    pub fn record_protocol(&mut self, name: impl Into<String>) {
        self.protocols.insert(name.into());
    }

    /// Determines if a name was recorded as a protocol.
    pub fn is_protocol(&self, name: &str) -> bool {
        self.protocols.contains(name)
    }

    /// Records a function-signature translation.
    pub fn record_function_translation(&mut self, translation: FunctionTranslation) {
        self.function_translations.push(translation);
    }

    /// Finds the translation recorded for a source name and function type,
    /// if any.
    pub fn find_function_translation(
        &self,
        source_name: &str,
        function_type: &str,
    ) -> Option<&FunctionTranslation> {
        self.function_translations
            .iter()
            .find(|t| t.source_name == source_name && t.function_type == function_type)
    }

    /// Records a pure-function signature.
    pub fn record_pure_function(&mut self, function: PureFunction) {
        self.pure_functions.push(function);
    }

    /// Determines if a call target matches a recorded pure function.
    pub fn is_pure_function(&self, prefix: &str, argument_count: usize) -> bool {
        self.pure_functions
            .iter()
            .any(|f| f.prefix == prefix && f.parameter_count == argument_count)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registries_append_and_clear() {
        let mut context = TranspilationContext::new();
        context.record_sealed_class("Expression");
        context.record_enum_class("Direction");
        context.record_protocol("Printable");
        assert!(context.is_sealed_class("Expression"));
        assert!(!context.is_sealed_class("Direction"));
        assert!(context.is_enum_class("Direction"));
        assert!(context.is_protocol("Printable"));

        context.record_pure_function(PureFunction {
            prefix: "abs".to_string(),
            parameter_count: 1,
        });
        assert!(context.is_pure_function("abs", 1));
        assert!(!context.is_pure_function("abs", 2));

        context.clear();
        assert!(!context.is_sealed_class("Expression"));
        assert!(!context.is_pure_function("abs", 1));
        assert_eq!(context.templates().len(), 0);
    }

    #[test]
    fn function_translation_lookup_is_exact() {
        let mut context = TranspilationContext::new();
        context.record_function_translation(FunctionTranslation {
            source_name: "print(_:)".to_string(),
            function_type: "(Any) -> ()".to_string(),
            target_name: "println".to_string(),
            parameters: vec!["message".to_string()],
        });

        assert!(
            context
                .find_function_translation("print(_:)", "(Any) -> ()")
                .is_some()
        );
        assert!(
            context
                .find_function_translation("print(_:)", "(Int) -> ()")
                .is_none()
        );
    }
}
