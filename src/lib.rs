//! Trestle: a source-to-source translation core.
//!
//! Trestle rewrites a typed AST of a Swift-family source language into
//! Kotlin-family source text. An external frontend parses and type-checks
//! the source and delivers each file as a [`Document`] (see
//! [`Document::from_json`] for the data boundary); trestle runs the
//! documents through a fixed two-round pass pipeline and renders the
//! result.
//!
//! The member crates carry the pieces — [`ast`] the tree, [`transform`]
//! the passes and schedule, [`render`] the emitter — and the [`Transpiler`]
//! here drives them:
//!
//! ```rust
//! use trestle::Transpiler;
//! use trestle::ast::Document;
//!
//! let mut transpiler = Transpiler::default();
//! let output = transpiler
//!     .transpile(vec![Document::new("empty.swift")])
//!     .expect("an empty document renders");
//! assert_eq!(output.documents[0].code, "");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

use anyhow::Context as _;
use anyhow::Result;
use tracing::info;
#[doc(inline)]
pub use trestle_ast as ast;
#[doc(inline)]
pub use trestle_render as render;
#[doc(inline)]
pub use trestle_transform as transform;

use trestle_ast::Diagnostic;
use trestle_ast::Diagnostics;
use trestle_ast::Document;
use trestle_render::Renderer;
use trestle_transform::Cancellation;
use trestle_transform::TranspilationContext;
use trestle_transform::run_first_round;
use trestle_transform::run_second_round;

/// Configuration for a [`Transpiler`].
#[derive(Debug, Default, Clone)]
pub struct Config {
    /// The pass-pipeline configuration.
    pub transform: trestle_transform::Config,
    /// The rendering configuration.
    pub render: trestle_render::Config,
}

/// One translated document.
#[derive(Debug, Clone)]
pub struct TranspiledDocument {
    /// The source path of the document.
    pub path: String,
    /// The rendered target-language text.
    pub code: String,
    /// The diagnostics emitted while rewriting and rendering the document.
    pub diagnostics: Vec<Diagnostic>,
}

/// The result of transpiling a batch of documents.
#[derive(Debug, Clone)]
pub struct TranspilationOutput {
    /// The translated documents, in input order.
    pub documents: Vec<TranspiledDocument>,
    /// The diagnostics emitted while recording over the whole batch.
    pub recording_diagnostics: Vec<Diagnostic>,
}

/// The translation driver.
///
/// A transpiler owns the shared context the first round records into; the
/// context is cleared at the start of every [`transpile`](Self::transpile)
/// call, so a transpiler can be reused across batches.
#[derive(Debug, Default)]
pub struct Transpiler {
    /// The configuration for every batch this transpiler runs.
    config: Config,
    /// The shared context, rebuilt per batch.
    context: TranspilationContext,
    /// The cancellation handle checked between passes.
    cancellation: Cancellation,
}

impl Transpiler {
    /// Creates a transpiler with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            context: TranspilationContext::new(),
            cancellation: Cancellation::new(),
        }
    }

    /// Gets a handle that cancels this transpiler's current batch.
    ///
    /// Cancellation is honored between passes; a cancelled batch still
    /// returns, with its documents rewritten only as far as they got.
    pub fn cancellation(&self) -> Cancellation {
        self.cancellation.clone()
    }

    /// Translates a batch of documents.
    ///
    /// The first round records declarations from every document before the
    /// second round rewrites any of them, so cross-document references
    /// (templates, enums, protocols, function signatures) resolve no matter
    /// which file declares them.
    pub fn transpile(&mut self, documents: Vec<Document>) -> Result<TranspilationOutput> {
        info!(documents = documents.len(), "transpiling batch");
        self.context.clear();

        let mut recording_diagnostics = Diagnostics::new();
        let documents = run_first_round(
            documents,
            &mut self.context,
            &mut recording_diagnostics,
            &self.cancellation,
        );

        let renderer = Renderer::new(&self.context, self.config.render.clone());
        let mut results = Vec::with_capacity(documents.len());
        for document in documents {
            let mut diagnostics = Diagnostics::new();
            let document = run_second_round(
                document,
                &self.context,
                &self.config.transform,
                &mut diagnostics,
                &self.cancellation,
            );
            let code = renderer
                .render_document(&document, &mut diagnostics)
                .with_context(|| format!("failed to render `{path}`", path = document.path))?;
            results.push(TranspiledDocument {
                path: document.path,
                code,
                diagnostics: diagnostics.into_vec(),
            });
        }

        Ok(TranspilationOutput {
            documents: results,
            recording_diagnostics: recording_diagnostics.into_vec(),
        })
    }

    /// Translates a batch of documents delivered as frontend JSON.
    pub fn transpile_json(&mut self, documents: &[&str]) -> Result<TranspilationOutput> {
        let documents = documents
            .iter()
            .map(|json| Document::from_json(json).context("invalid document from the frontend"))
            .collect::<Result<Vec<_>>>()?;
        self.transpile(documents)
    }
}
