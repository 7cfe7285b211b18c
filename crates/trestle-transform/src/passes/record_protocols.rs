//! A pass that records the names of declared protocols.

use trestle_ast::ProtocolDeclaration;
use trestle_ast::Statement;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the record-protocols pass.
pub const ID: &str = "RecordProtocols";

/// Records every protocol declaration's name.
#[derive(Debug)]
pub struct RecordProtocolsPass<'a> {
    /// The context the names are recorded into.
    context: &'a mut TranspilationContext,
}

impl<'a> RecordProtocolsPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a mut TranspilationContext) -> Self {
        Self { context }
    }
}

impl Pass for RecordProtocolsPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_protocol_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: ProtocolDeclaration,
    ) -> Vec<Statement> {
        self.context.record_protocol(&declaration.name);
        walk::protocol_declaration(self, cx, declaration)
    }
}
