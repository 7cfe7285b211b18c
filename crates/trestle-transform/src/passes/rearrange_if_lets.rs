//! A pass that hoists if-let bindings above their if statements.
//!
//! The target's `if` takes a plain boolean, so each optional binding becomes
//! a variable declaration immediately before the statement, and the
//! condition becomes a null check. Bindings are deduplicated across an
//! else-if chain (the same name bound in several branches hoists once), and
//! the pure shadowing form `let x = x` needs no declaration at all.

use trestle_ast::BinaryOperatorExpression;
use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::Expression;
use trestle_ast::IfCondition;
use trestle_ast::IfStatement;
use trestle_ast::NilLiteralExpression;
use trestle_ast::Statement;
use trestle_ast::VariableDeclaration;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the rearrange-if-lets pass.
pub const ID: &str = "RearrangeIfLets";

/// Determines if a binding merely shadows the same name.
fn is_shadowing(declaration: &VariableDeclaration) -> bool {
    matches!(
        &declaration.expression,
        Some(Expression::DeclarationReference(reference))
            if reference.identifier == declaration.identifier
    )
}

/// Determines if any condition in the chain is a binding.
fn has_bindings(statement: &IfStatement) -> bool {
    statement
        .conditions
        .iter()
        .any(|condition| matches!(condition, IfCondition::Declaration(_)))
        || statement
            .else_statement
            .as_deref()
            .is_some_and(has_bindings)
}

/// Collects the declarations to hoist from the whole else-if chain.
fn gather_declarations(statement: &IfStatement, declarations: &mut Vec<VariableDeclaration>) {
    for condition in &statement.conditions {
        if let IfCondition::Declaration(declaration) = condition
            && !is_shadowing(declaration)
        {
            let mut hoisted = declaration.clone();
            if !hoisted.type_annotation.ends_with('?') {
                hoisted.type_annotation.push('?');
            }
            if !declarations.contains(&hoisted) {
                declarations.push(hoisted);
            }
        }
    }

    if let Some(else_statement) = &statement.else_statement {
        gather_declarations(else_statement, declarations);
    }
}

/// Rewrites every binding condition in the chain as a null check.
fn rewrite_conditions(mut statement: IfStatement) -> IfStatement {
    statement.conditions = statement
        .conditions
        .into_iter()
        .map(|condition| match condition {
            IfCondition::Declaration(declaration) => {
                let reference = Expression::DeclarationReference(DeclarationReferenceExpression {
                    range: declaration.range,
                    identifier: declaration.identifier.clone(),
                    type_name: Some(declaration.type_annotation.clone()),
                    is_standard_library: false,
                    is_implicit: false,
                });
                IfCondition::Condition(Expression::BinaryOperator(BinaryOperatorExpression {
                    range: declaration.range,
                    left: Box::new(reference),
                    right: Box::new(Expression::Nil(NilLiteralExpression { range: None })),
                    operator: "!=".to_string(),
                    type_name: Some("Bool".to_string()),
                }))
            }
            condition => condition,
        })
        .collect();
    statement.else_statement = statement
        .else_statement
        .map(|else_statement| Box::new(rewrite_conditions(*else_statement)));
    statement
}

/// Hoists if-let bindings to declarations preceding the if statement.
#[derive(Debug, Default, Clone, Copy)]
pub struct RearrangeIfLetsPass;

impl Pass for RearrangeIfLetsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_if_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: IfStatement,
    ) -> Vec<Statement> {
        if !has_bindings(&statement) {
            return walk::if_statement(self, cx, statement);
        }

        let mut declarations = Vec::new();
        gather_declarations(&statement, &mut declarations);
        let rewritten = rewrite_conditions(statement);

        let mut result: Vec<Statement> = declarations
            .into_iter()
            .map(Statement::Variable)
            .collect();
        result.push(Statement::If(rewritten));

        // The rewritten chain re-enters this hook binding-free, so the
        // default recursion applies below it.
        result
            .into_iter()
            .flat_map(|statement| self.replace_statement(cx, statement))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;

    use super::*;
    use crate::testing;

    /// An if-let binding of `name` to `initializer`.
    fn binding(name: &str, initializer: Expression) -> IfCondition {
        let mut declaration = testing::variable(name, "Int", None);
        declaration.expression = Some(initializer);
        IfCondition::Declaration(declaration)
    }

    #[test]
    fn hoists_binding_and_rewrites_condition() {
        let mut document = Document::new("test.swift");
        document.statements.push(Statement::If(IfStatement {
            range: None,
            conditions: vec![binding("x", testing::reference("value", Some("Int?")))],
            is_guard: false,
            statements: vec![testing::return_statement(None)],
            else_statement: None,
        }));

        let mut diagnostics = Diagnostics::new();
        let output = RearrangeIfLetsPass.run(document, &mut diagnostics);

        assert_eq!(output.statements.len(), 2);
        let Statement::Variable(hoisted) = &output.statements[0] else {
            panic!("expected a hoisted declaration");
        };
        assert_eq!(hoisted.identifier, "x");
        assert_eq!(hoisted.type_annotation, "Int?");

        let Statement::If(if_statement) = &output.statements[1] else {
            panic!("expected the if statement");
        };
        let IfCondition::Condition(Expression::BinaryOperator(check)) =
            &if_statement.conditions[0]
        else {
            panic!("expected a null-check condition");
        };
        assert_eq!(check.operator, "!=");
        assert!(matches!(*check.right, Expression::Nil(_)));
    }

    #[test]
    fn shadowing_bindings_hoist_nothing() {
        let mut document = Document::new("test.swift");
        document.statements.push(Statement::If(IfStatement {
            range: None,
            conditions: vec![binding("x", testing::reference("x", Some("Int?")))],
            is_guard: false,
            statements: vec![testing::return_statement(None)],
            else_statement: None,
        }));

        let mut diagnostics = Diagnostics::new();
        let output = RearrangeIfLetsPass.run(document, &mut diagnostics);

        assert_eq!(output.statements.len(), 1);
        assert!(matches!(&output.statements[0], Statement::If(_)));
    }

    #[test]
    fn chains_deduplicate_hoisted_bindings() {
        let inner = IfStatement {
            range: None,
            conditions: vec![binding("x", testing::reference("value", Some("Int?")))],
            is_guard: false,
            statements: vec![testing::return_statement(Some(testing::int_literal(2)))],
            else_statement: None,
        };
        let outer = IfStatement {
            range: None,
            conditions: vec![binding("x", testing::reference("value", Some("Int?")))],
            is_guard: false,
            statements: vec![testing::return_statement(Some(testing::int_literal(1)))],
            else_statement: Some(Box::new(inner)),
        };

        let mut document = Document::new("test.swift");
        document.statements.push(Statement::If(outer));

        let mut diagnostics = Diagnostics::new();
        let output = RearrangeIfLetsPass.run(document, &mut diagnostics);

        // One hoisted declaration for both branches.
        assert_eq!(output.statements.len(), 2);
        assert!(matches!(&output.statements[0], Statement::Variable(_)));
        assert!(matches!(&output.statements[1], Statement::If(_)));
    }
}
