//! An abstract syntax tree for the Trestle source-to-source translator.
//!
//! The tree is an owned, tagged-union representation of a single source
//! file: a [`Document`] holds top-level declarations and statements, each a
//! [`Statement`]; expression positions hold [`Expression`] values. The tree
//! is produced by an external frontend (delivered as data; see
//! [`Document::from_json`]), rewritten by the passes in `trestle-transform`,
//! and finally rendered to target-language text by `trestle-render`.
//!
//! Nodes carry optional [`SourceRange`]s so that diagnostics emitted late in
//! the pipeline still point at the original source, and optional
//! source-language type strings, which [`types::Type`] parses into a
//! structured form on demand.
//!
//! Trees are plain values: passes take ownership of their input and build
//! their output, and structural equality is `PartialEq`.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

use serde::Deserialize;
use serde::Serialize;

mod diagnostic;
mod expression;
mod printable;
mod statement;

pub mod types;

pub use diagnostic::*;
pub use expression::*;
pub use printable::*;
pub use statement::*;

/// A single translated source file.
///
/// The frontend splits a file's top level into declarations and executable
/// statements so that a file with an entry point can have its statements
/// wrapped in a generated main function at rendering time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The path of the source file, for diagnostics.
    pub path: String,
    /// The top-level declarations, in source order.
    pub declarations: Vec<Statement>,
    /// The top-level non-declaration statements, in source order.
    pub statements: Vec<Statement>,
}

impl Document {
    /// Creates an empty document for the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            declarations: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Deserializes a document from the frontend's JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes the document to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
