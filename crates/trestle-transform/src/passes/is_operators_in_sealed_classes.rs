//! A pass that rewrites sealed-class switch cases as type checks.
//!
//! Matching a sealed class's case means asking "is this value that
//! subclass", so `case .member` over a sealed value becomes the check
//! `subject is E.Member`. `CapitalizeEnums` has already renamed the member,
//! and this pass reads the capitalized form.

use trestle_ast::BinaryOperatorExpression;
use trestle_ast::Expression;
use trestle_ast::SwitchStatement;
use trestle_ast::TypeExpression;
use trestle_ast::types::Type;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the is-operators-in-sealed-classes pass.
pub const ID: &str = "IsOperatorsInSealedClasses";

/// Extracts the plain type name a switch subject has, if any.
fn subject_type_name(expression: &Expression) -> Option<String> {
    let parsed = Type::parse(&expression.type_name()?).ok()?;
    match parsed {
        Type::Named(name) => Some(name),
        Type::Optional(inner) => match *inner {
            Type::Named(name) => Some(name),
            _ => None,
        },
        _ => None,
    }
}

/// Rewrites switch cases over sealed classes as `is` checks.
#[derive(Debug)]
pub struct IsOperatorsInSealedClassesPass<'a> {
    /// The context holding the recorded enum classifications.
    context: &'a TranspilationContext,
}

impl<'a> IsOperatorsInSealedClassesPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a TranspilationContext) -> Self {
        Self { context }
    }
}

impl Pass for IsOperatorsInSealedClassesPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_switch_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        mut statement: SwitchStatement,
    ) -> Vec<trestle_ast::Statement> {
        let sealed = subject_type_name(&statement.expression)
            .is_some_and(|name| self.context.is_sealed_class(&name));
        if !sealed {
            return walk::switch_statement(self, cx, statement);
        }

        for case in &mut statement.cases {
            for expression in &mut case.expressions {
                if let Expression::Dot(dot) = expression
                    && let Expression::Type(enum_type) = &*dot.left
                    && let Expression::DeclarationReference(member) = &*dot.right
                {
                    *expression = Expression::BinaryOperator(BinaryOperatorExpression {
                        range: dot.range,
                        left: Box::new(statement.expression.clone()),
                        right: Box::new(Expression::Type(TypeExpression {
                            range: None,
                            type_name: format!(
                                "{base}.{member}",
                                base = enum_type.type_name,
                                member = member.identifier
                            ),
                        })),
                        operator: "is".to_string(),
                        type_name: Some("Bool".to_string()),
                    });
                }
            }
        }

        walk::switch_statement(self, cx, statement)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::Statement;
    use trestle_ast::SwitchCase;

    use super::*;
    use crate::testing;

    #[test]
    fn sealed_cases_become_is_checks() {
        let mut context = TranspilationContext::new();
        context.record_sealed_class("Expression");

        let switch = SwitchStatement {
            range: None,
            converts_to_expression: None,
            expression: testing::reference("expression", Some("Expression")),
            cases: vec![SwitchCase {
                expressions: vec![testing::dot(
                    testing::type_expression("Expression"),
                    testing::reference("Literal", None),
                )],
                statements: vec![testing::return_statement(None)],
            }],
        };

        let mut document = Document::new("test.swift");
        document.statements.push(Statement::Switch(switch));

        let mut diagnostics = Diagnostics::new();
        let output =
            IsOperatorsInSealedClassesPass::new(&context).run(document, &mut diagnostics);

        let Statement::Switch(switch) = &output.statements[0] else {
            panic!("expected a switch");
        };
        let Expression::BinaryOperator(check) = &switch.cases[0].expressions[0] else {
            panic!("expected an is check");
        };
        assert_eq!(check.operator, "is");
        let Expression::Type(target) = &*check.right else {
            panic!("expected a type on the right");
        };
        assert_eq!(target.type_name, "Expression.Literal");
    }

    #[test]
    fn enum_class_switches_are_untouched() {
        let mut context = TranspilationContext::new();
        context.record_enum_class("Direction");

        let switch = SwitchStatement {
            range: None,
            converts_to_expression: None,
            expression: testing::reference("direction", Some("Direction")),
            cases: vec![SwitchCase {
                expressions: vec![testing::dot(
                    testing::type_expression("Direction"),
                    testing::reference("NORTH", None),
                )],
                statements: vec![testing::return_statement(None)],
            }],
        };
        let statement = Statement::Switch(switch);

        let mut document = Document::new("test.swift");
        document.statements.push(statement.clone());

        let mut diagnostics = Diagnostics::new();
        let output =
            IsOperatorsInSealedClassesPass::new(&context).run(document, &mut diagnostics);
        assert_eq!(output.statements[0], statement);
    }
}
