//! A pass that strips source-only entries from inheritance lists.
//!
//! Conformances like `Equatable` exist only for the source compiler, and a
//! raw-representable enum's base type (`Int`, `String`, …) is not an
//! inheritance at all in the target language. Both would render as bogus
//! supertypes, and a leftover raw-value base would make `RecordEnums`
//! misclassify a plain enum as a sealed class.

use trestle_ast::ClassDeclaration;
use trestle_ast::EnumDeclaration;
use trestle_ast::Statement;
use trestle_ast::StructDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the clean-inheritances pass.
pub const ID: &str = "CleanInheritances";

/// Conformances that exist only for the source compiler.
const SOURCE_ONLY_CONFORMANCES: &[&str] = &[
    "Equatable",
    "Hashable",
    "Comparable",
    "Codable",
    "Encodable",
    "Decodable",
    "CustomStringConvertible",
];

/// Types that serve as raw-value bases for enums.
const RAW_VALUE_BASES: &[&str] = &["Int", "UInt", "Float", "Double", "String", "Character"];

/// Determines if an inheritance entry should be stripped.
fn is_source_only(name: &str) -> bool {
    SOURCE_ONLY_CONFORMANCES.contains(&name) || RAW_VALUE_BASES.contains(&name)
}

/// Strips source-only protocols and raw-value bases from inheritance lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanInheritancesPass;

impl Pass for CleanInheritancesPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_class_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: ClassDeclaration,
    ) -> Vec<Statement> {
        declaration.inherits.retain(|name| !is_source_only(name));
        walk::class_declaration(self, cx, declaration)
    }

    fn replace_struct_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: StructDeclaration,
    ) -> Vec<Statement> {
        declaration.inherits.retain(|name| !is_source_only(name));
        walk::struct_declaration(self, cx, declaration)
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        declaration.inherits.retain(|name| !is_source_only(name));
        walk::enum_declaration(self, cx, declaration)
    }
}
