//! A pass that renames operators to their target spellings.
//!
//! Nil-coalescing becomes the elvis operator, and the bitwise and shift
//! operators become the target's named infix functions.

use trestle_ast::BinaryOperatorExpression;
use trestle_ast::Expression;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the rename-operators pass.
pub const ID: &str = "RenameOperators";

/// The source-to-target operator spellings.
const RENAMES: &[(&str, &str)] = &[
    ("??", "?:"),
    ("<<", "shl"),
    (">>", "shr"),
    ("&", "and"),
    ("|", "or"),
    ("^", "xor"),
];

/// Renames operators with different target spellings.
#[derive(Debug, Default, Clone, Copy)]
pub struct RenameOperatorsPass;

impl Pass for RenameOperatorsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_binary_operator_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        mut expression: BinaryOperatorExpression,
    ) -> Expression {
        if let Some((_, target)) = RENAMES
            .iter()
            .find(|(source, _)| *source == expression.operator)
        {
            expression.operator = (*target).to_string();
        }

        walk::binary_operator_expression(self, cx, expression)
    }
}
