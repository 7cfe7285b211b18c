//! The two-round pass schedule.
//!
//! The first round records into the shared context and must finish for
//! every document of the batch before the second round touches any of
//! them: a second-round rewrite in one file may depend on an enum or
//! template declared in another. The second round rewrites one document at
//! a time against the frozen context, in an order with real constraints —
//! see the notes on [`run_second_round`].

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use indexmap::IndexSet;
use tracing::debug;
use tracing::trace;
use trestle_ast::Diagnostics;
use trestle_ast::Document;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::passes;

/// Configuration for a translation run.
///
/// The reference behavior runs every pass; individual second-round passes
/// can be disabled by identifier.
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// The identifiers of disabled passes.
    disabled: IndexSet<String>,
}

impl Config {
    /// Creates the default configuration, with every pass enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the pass with the given identifier.
    pub fn disable(&mut self, id: impl Into<String>) {
        self.disabled.insert(id.into());
    }

    /// Determines if the pass with the given identifier is enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        !self.disabled.contains(id)
    }
}

/// A handle used to request cancellation between passes.
///
/// Passes are not interruptible mid-traversal; a cancelled run returns its
/// documents as rewritten so far.
#[derive(Debug, Default, Clone)]
pub struct Cancellation {
    /// The shared cancellation flag.
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    /// Creates a fresh, uncancelled handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Determines if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Runs one pass over a document, honoring cancellation and configuration.
fn apply<P: Pass>(
    mut pass: P,
    document: Document,
    config: &Config,
    diagnostics: &mut Diagnostics,
    cancellation: &Cancellation,
) -> Document {
    if cancellation.is_cancelled() || !config.is_enabled(pass.name()) {
        return document;
    }

    trace!(pass = pass.name(), "running pass");
    pass.run(document, diagnostics)
}

/// Runs the recording round over every document of the batch.
///
/// The context is writable only here; the passes append to its registries
/// and never remove. Within a document the order matters:
/// `CleanInheritances` must precede `RecordEnums`, since a raw-value base
/// left in an inheritance list would misclassify the enum.
pub fn run_first_round(
    documents: Vec<Document>,
    context: &mut TranspilationContext,
    diagnostics: &mut Diagnostics,
    cancellation: &Cancellation,
) -> Vec<Document> {
    let config = Config::new();
    let mut recorded = Vec::with_capacity(documents.len());
    for document in documents {
        debug!(path = %document.path, "recording document");
        let d = document;
        let d = apply(
            passes::RemoveImplicitDeclarationsPass,
            d,
            &config,
            diagnostics,
            cancellation,
        );
        let d = apply(passes::CleanInheritancesPass, d, &config, diagnostics, cancellation);
        let d = apply(
            passes::RecordTemplatesPass::new(&mut *context),
            d,
            &config,
            diagnostics,
            cancellation,
        );
        let d = apply(
            passes::RecordEnumsPass::new(&mut *context),
            d,
            &config,
            diagnostics,
            cancellation,
        );
        let d = apply(
            passes::RecordProtocolsPass::new(&mut *context),
            d,
            &config,
            diagnostics,
            cancellation,
        );
        let d = apply(
            passes::RecordFunctionsPass::new(&mut *context),
            d,
            &config,
            diagnostics,
            cancellation,
        );
        recorded.push(d);
    }
    recorded
}

/// Runs the rewriting round over a single document.
///
/// The order is load-bearing in several places:
///
/// - `CapitalizeEnums` must precede `IsOperatorsInSealedClasses`, which
///   reads the capitalized case names.
/// - `SwitchesToExpressions` must precede `RemoveBreaksInSwitches`:
///   removing a break-only case first would make an exhaustive switch
///   non-exhaustive and block the expression form.
/// - `ShadowedIfLetAsToIs` must precede `WarnSideEffectsInIfLets` (the
///   rewrite removes spurious warning triggers), which must precede
///   `RearrangeIfLets` (the warnings need the original condition shape).
pub fn run_second_round(
    document: Document,
    context: &TranspilationContext,
    config: &Config,
    diagnostics: &mut Diagnostics,
    cancellation: &Cancellation,
) -> Document {
    debug!(path = %document.path, "rewriting document");
    let d = document;
    let d = apply(
        passes::ReplaceTemplatesPass::new(context),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(passes::RemoveParenthesesPass, d, config, diagnostics, cancellation);
    let d = apply(
        passes::RemoveExtraReturnsInInitsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(passes::EquatableOperatorsPass, d, config, diagnostics, cancellation);
    let d = apply(
        passes::RawValuesPass::new(context),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::DescriptionAsToStringPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::OptionalInitsPass::default(),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(passes::StaticMembersPass, d, config, diagnostics, cancellation);
    let d = apply(passes::FixProtocolContentsPass, d, config, diagnostics, cancellation);
    let d = apply(passes::RemoveExtensionsPass, d, config, diagnostics, cancellation);
    let d = apply(passes::ShadowedIfLetAsToIsPass, d, config, diagnostics, cancellation);
    let d = apply(
        passes::WarnSideEffectsInIfLetsPass::new(context),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(passes::RearrangeIfLetsPass, d, config, diagnostics, cancellation);
    let d = apply(passes::SelfToThisPass, d, config, diagnostics, cancellation);
    let d = apply(passes::AnonymousParametersPass, d, config, diagnostics, cancellation);
    let d = apply(
        passes::CovarianceInitsAsCallsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::ReturnsInLambdasPass::default(),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::RefactorOptionalsInSubscriptsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::AddOptionalsInDotChainsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(passes::RenameOperatorsPass, d, config, diagnostics, cancellation);
    let d = apply(
        passes::CallsToSuperclassInitializersPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::CapitalizeEnumsPass::new(context),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::IsOperatorsInSealedClassesPass::new(context),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::SwitchesToExpressionsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::RemoveBreaksInSwitchesPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::OmitImplicitEnumPrefixesPass::new(context),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::InnerTypePrefixesPass::default(),
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::DoubleNegativesInGuardsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(passes::ReturnIfNilPass, d, config, diagnostics, cancellation);
    let d = apply(
        passes::StandardLibraryWarningsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    let d = apply(
        passes::MutableValueTypeWarningsPass,
        d,
        config,
        diagnostics,
        cancellation,
    );
    apply(
        passes::NativeDataStructureWarningsPass,
        d,
        config,
        diagnostics,
        cancellation,
    )
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn disabled_passes_are_skipped() {
        let mut config = Config::new();
        config.disable(passes::rename_operators::ID);
        assert!(!config.is_enabled("RenameOperators"));
        assert!(config.is_enabled("SelfToThis"));
    }

    #[test]
    fn cancellation_freezes_the_document() {
        let cancellation = Cancellation::new();
        cancellation.cancel();

        let mut document = Document::new("test.swift");
        document
            .statements
            .push(trestle_ast::Statement::Expression(
                trestle_ast::ExpressionStatement {
                    range: None,
                    expression: trestle_ast::Expression::DeclarationReference(
                        trestle_ast::DeclarationReferenceExpression {
                            range: None,
                            identifier: "self".to_string(),
                            type_name: None,
                            is_standard_library: false,
                            is_implicit: false,
                        },
                    ),
                },
            ));

        let context = TranspilationContext::new();
        let mut diagnostics = Diagnostics::new();
        let output = run_second_round(
            document.clone(),
            &context,
            &Config::new(),
            &mut diagnostics,
            &cancellation,
        );

        // `self` would have become `this` had any pass run.
        assert_eq!(output, document);
    }
}
