//! A pass that gathers static members into a companion object.
//!
//! The target language has no static members; a type's static functions and
//! variables live on its companion object. Initializers stay put — they
//! translate to constructors or factory functions, not companion members of
//! their own.

use trestle_ast::ClassDeclaration;
use trestle_ast::CompanionObject;
use trestle_ast::EnumDeclaration;
use trestle_ast::Statement;
use trestle_ast::StructDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the static-members pass.
pub const ID: &str = "StaticMembers";

/// Determines if a member belongs on the companion object.
fn is_static_member(member: &Statement) -> bool {
    match member {
        Statement::Function(function) => function.is_static,
        Statement::Variable(variable) => variable.is_static,
        _ => false,
    }
}

/// Partitions members, prepending a companion object when any are static.
fn gather(members: Vec<Statement>) -> Vec<Statement> {
    let (statics, mut members): (Vec<_>, Vec<_>) =
        members.into_iter().partition(is_static_member);

    if !statics.is_empty() {
        members.insert(
            0,
            Statement::CompanionObject(CompanionObject {
                range: None,
                members: statics,
            }),
        );
    }
    members
}

/// Moves static functions and variables into a companion object.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticMembersPass;

impl Pass for StaticMembersPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_class_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: ClassDeclaration,
    ) -> Vec<Statement> {
        declaration.members = gather(declaration.members);
        walk::class_declaration(self, cx, declaration)
    }

    fn replace_struct_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: StructDeclaration,
    ) -> Vec<Statement> {
        declaration.members = gather(declaration.members);
        walk::struct_declaration(self, cx, declaration)
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        declaration.members = gather(declaration.members);
        walk::enum_declaration(self, cx, declaration)
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
    fn statics_move_to_a_prepended_companion_object() {
        let mut static_function = testing::function("f", Vec::new());
        static_function.is_static = true;
        let instance_function = testing::function("g", Vec::new());

        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Class(ClassDeclaration {
            range: None,
            name: "C".to_string(),
            inherits: Vec::new(),
            members: vec![
                Statement::Function(static_function.clone()),
                Statement::Function(instance_function.clone()),
            ],
        }));

        let mut diagnostics = Diagnostics::new();
        let output = StaticMembersPass.run(document, &mut diagnostics);

        let Statement::Class(class) = &output.declarations[0] else {
            panic!("expected a class");
        };
        assert_eq!(class.members.len(), 2);
        let Statement::CompanionObject(companion) = &class.members[0] else {
            panic!("expected a companion object first");
        };
        assert_eq!(
            companion.members,
            vec![Statement::Function(static_function)]
        );
        assert_eq!(class.members[1], Statement::Function(instance_function));
    }

    #[test]
    fn no_companion_without_statics() {
        let mut document = Document::new("test.swift");
        document.declarations.push(Statement::Class(ClassDeclaration {
            range: None,
            name: "C".to_string(),
            inherits: Vec::new(),
            members: vec![Statement::Function(testing::function("g", Vec::new()))],
        }));

        let mut diagnostics = Diagnostics::new();
        let output = StaticMembersPass.run(document.clone(), &mut diagnostics);
        assert_eq!(output, document);
    }
}
