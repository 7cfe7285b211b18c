//! A pass that marks switches translatable as `when` expressions.
//!
//! A switch whose every case ends by returning a value can be the body of a
//! single `return when (...)`; one whose every case ends by assigning the
//! same target can be `target = when (...)`; and an assigning switch that
//! immediately follows the target's uninitialized declaration collapses
//! into `val target = when (...)`. The conversion is recorded in the
//! switch's `converts_to_expression` marker, the per-case terminators are
//! dropped to bare expressions, and the renderer synthesizes the
//! surrounding text.

use itertools::Itertools;
use trestle_ast::AssignmentStatement;
use trestle_ast::Expression;
use trestle_ast::ExpressionStatement;
use trestle_ast::NilLiteralExpression;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;
use trestle_ast::SwitchStatement;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the switches-to-expressions pass.
pub const ID: &str = "SwitchesToExpressions";

/// The conversion a switch's case terminators support.
enum Conversion {
    /// Every case ends with `return <expression>`.
    Returns,
    /// Every case ends by assigning the same target.
    Assigns(Expression),
}

/// Determines which conversion, if any, a switch supports.
fn conversion(statement: &SwitchStatement) -> Option<Conversion> {
    if statement.cases.is_empty() {
        return None;
    }

    let returns = statement.cases.iter().all(|case| {
        matches!(
            case.statements.last(),
            Some(Statement::Return(ReturnStatement {
                expression: Some(_),
                ..
            }))
        )
    });
    if returns {
        return Some(Conversion::Returns);
    }

    let mut target: Option<&Expression> = None;
    for case in &statement.cases {
        let Some(Statement::Assignment(assignment)) = case.statements.last() else {
            return None;
        };
        match target {
            None => target = Some(&assignment.left),
            Some(existing) if *existing == assignment.left => {}
            Some(_) => return None,
        }
    }
    target.cloned().map(Conversion::Assigns)
}

/// Drops each case's terminator down to a bare expression statement.
fn drop_terminators(statement: &mut SwitchStatement) {
    for case in &mut statement.cases {
        let Some(last) = case.statements.pop() else {
            continue;
        };
        let (range, expression) = match last {
            Statement::Return(ReturnStatement {
                range,
                expression: Some(expression),
                ..
            }) => (range, expression),
            Statement::Assignment(AssignmentStatement { range, right, .. }) => (range, right),
            other => {
                case.statements.push(other);
                continue;
            }
        };
        case.statements
            .push(Statement::Expression(ExpressionStatement {
                range,
                expression,
            }));
    }
}

/// Marks convertible switches and collapses declaration-assignment pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwitchesToExpressionsPass;

impl Pass for SwitchesToExpressionsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_statements(
        &mut self,
        cx: &mut PassContext<'_>,
        statements: Vec<Statement>,
    ) -> Vec<Statement> {
        // Collapse `var x: T` immediately followed by a switch assigning
        // `x` into a declaration initialized by the switch expression.
        walk::statements(self, cx, statements)
            .into_iter()
            .coalesce(|previous, statement| match (previous, statement) {
                (Statement::Variable(declaration), Statement::Switch(mut switch))
                    if declaration.expression.is_none()
                        && declaration.getter.is_none()
                        && matches!(
                            switch.converts_to_expression.as_deref(),
                            Some(Statement::Assignment(assignment))
                                if matches!(
                                    &assignment.left,
                                    Expression::DeclarationReference(target)
                                        if target.identifier == declaration.identifier
                                )
                        ) =>
                {
                    switch.converts_to_expression =
                        Some(Box::new(Statement::Variable(declaration)));
                    Ok(Statement::Switch(switch))
                }
                (previous, statement) => Err((previous, statement)),
            })
            .collect()
    }

    fn replace_switch_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        mut statement: SwitchStatement,
    ) -> Vec<Statement> {
        if statement.converts_to_expression.is_none() {
            match conversion(&statement) {
                Some(Conversion::Returns) => {
                    statement.converts_to_expression =
                        Some(Box::new(Statement::Return(ReturnStatement {
                            range: None,
                            expression: Some(Expression::Nil(NilLiteralExpression {
                                range: None,
                            })),
                            label: None,
                        })));
                    drop_terminators(&mut statement);
                }
                Some(Conversion::Assigns(target)) => {
                    statement.converts_to_expression =
                        Some(Box::new(Statement::Assignment(AssignmentStatement {
                            range: None,
                            left: target,
                            right: Expression::Nil(NilLiteralExpression { range: None }),
                        })));
                    drop_terminators(&mut statement);
                }
                None => {}
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
    use trestle_ast::SwitchCase;

    use super::*;
    use crate::testing;

    /// A case matching `expression` whose body is just `terminator`.
    fn case(expression: Option<Expression>, terminator: Statement) -> SwitchCase {
        SwitchCase {
            expressions: expression.into_iter().collect(),
            statements: vec![terminator],
        }
    }

    #[test]
    fn all_returning_switch_converts() {
        let switch = SwitchStatement {
            range: None,
            converts_to_expression: None,
            expression: testing::reference("k", Some("Int")),
            cases: vec![
                case(
                    Some(testing::int_literal(1)),
                    testing::return_statement(Some(testing::string_literal("a"))),
                ),
                case(
                    None,
                    testing::return_statement(Some(testing::string_literal("b"))),
                ),
            ],
        };

        let mut document = Document::new("test.swift");
        document.statements.push(Statement::Switch(switch));

        let mut diagnostics = Diagnostics::new();
        let output = SwitchesToExpressionsPass.run(document, &mut diagnostics);

        let Statement::Switch(switch) = &output.statements[0] else {
            panic!("expected a switch");
        };
        assert!(matches!(
            switch.converts_to_expression.as_deref(),
            Some(Statement::Return(_))
        ));
        assert_eq!(
            switch.cases[0].statements,
            vec![testing::expression_statement(testing::string_literal("a"))]
        );
        assert_eq!(
            switch.cases[1].statements,
            vec![testing::expression_statement(testing::string_literal("b"))]
        );
    }

    #[test]
    fn mixed_terminators_do_not_convert() {
        let switch = SwitchStatement {
            range: None,
            converts_to_expression: None,
            expression: testing::reference("k", Some("Int")),
            cases: vec![
                case(
                    Some(testing::int_literal(1)),
                    testing::return_statement(Some(testing::string_literal("a"))),
                ),
                case(None, testing::return_statement(None)),
            ],
        };
        let statement = Statement::Switch(switch);

        let mut document = Document::new("test.swift");
        document.statements.push(statement.clone());

        let mut diagnostics = Diagnostics::new();
        let output = SwitchesToExpressionsPass.run(document, &mut diagnostics);
        assert_eq!(output.statements[0], statement);
    }

    #[test]
    fn declaration_and_assigning_switch_collapse() {
        let mut declaration = testing::variable("result", "String", None);
        declaration.is_let = false;

        let switch = SwitchStatement {
            range: None,
            converts_to_expression: None,
            expression: testing::reference("k", Some("Int")),
            cases: vec![
                case(
                    Some(testing::int_literal(1)),
                    testing::assignment(
                        testing::reference("result", None),
                        testing::string_literal("a"),
                    ),
                ),
                case(
                    None,
                    testing::assignment(
                        testing::reference("result", None),
                        testing::string_literal("b"),
                    ),
                ),
            ],
        };

        let mut document = Document::new("test.swift");
        document.statements.push(Statement::Variable(declaration));
        document.statements.push(Statement::Switch(switch));

        let mut diagnostics = Diagnostics::new();
        let output = SwitchesToExpressionsPass.run(document, &mut diagnostics);

        assert_eq!(output.statements.len(), 1);
        let Statement::Switch(switch) = &output.statements[0] else {
            panic!("expected a switch");
        };
        let Some(marker) = switch.converts_to_expression.as_deref() else {
            panic!("expected a conversion marker");
        };
        let Statement::Variable(declaration) = marker else {
            panic!("expected the collapsed declaration, got {marker:?}");
        };
        assert_eq!(declaration.identifier, "result");
    }
}
