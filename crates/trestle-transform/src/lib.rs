//! AST rewrite passes for the Trestle source-to-source translator.
//!
//! A [`Pass`] is a single-purpose tree rewrite built on a traversal with
//! one overridable hook per node kind; the default for every hook recurses
//! into children and rebuilds the node, so a pass describes only the shapes
//! it changes. Passes run in two rounds over a batch of documents
//! (see [`schedule`]): the first records facts about the whole batch into a
//! shared [`TranspilationContext`] — templates, enum classifications,
//! protocol names, function signatures — and the second rewrites each
//! document against the frozen context.
//!
//! The concrete rewrites live in [`passes`], one module each, and the
//! template unification engine in [`template`].

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

mod context;
mod pass;
mod schedule;

pub mod passes;
pub mod template;
pub mod walk;

#[cfg(test)]
pub(crate) mod testing;

pub use context::*;
pub use pass::*;
pub use schedule::*;

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;
    use trestle_ast::Expression;
    use trestle_ast::ExpressionKind;
    use trestle_ast::IfExpression;
    use trestle_ast::Statement;
    use trestle_ast::StatementKind;

    use super::*;
    use crate::testing;

    /// A pass with no overrides.
    struct IdentityPass;

    impl Pass for IdentityPass {
        fn name(&self) -> &'static str {
            "Identity"
        }
    }

    /// Builds a document exercising most node kinds.
    fn busy_document() -> Document {
        let mut document = Document::new("busy.swift");
        document
            .declarations
            .push(Statement::Function(testing::function(
                "f",
                vec![
                    Statement::If(testing::if_statement(
                        vec![testing::binary(
                            testing::reference("x", Some("Int?")),
                            "!=",
                            testing::nil(),
                        )],
                        vec![testing::return_statement(Some(testing::call(
                            testing::reference("g", None),
                            vec![testing::int_literal(1), testing::string_literal("two")],
                        )))],
                    )),
                    testing::return_statement(None),
                ],
            )));
        document
            .statements
            .push(testing::expression_statement(testing::dot(
                testing::reference("a", Some("A")),
                testing::reference("b", Some("Int")),
            )));
        document
    }

    #[test]
    fn identity_pass_returns_an_equal_tree() {
        let document = busy_document();
        let mut diagnostics = Diagnostics::new();
        let output = IdentityPass.run(document.clone(), &mut diagnostics);
        assert_eq!(output, document);
        assert!(diagnostics.is_empty());
    }

    /// A pass that records the parent observed at each ternary condition.
    #[derive(Default)]
    struct ParentSpy {
        /// The parents observed for declaration references.
        observed: Vec<Option<ParentNode>>,
    }

    impl Pass for ParentSpy {
        fn name(&self) -> &'static str {
            "ParentSpy"
        }

        fn replace_declaration_reference_expression(
            &mut self,
            cx: &mut PassContext<'_>,
            expression: trestle_ast::DeclarationReferenceExpression,
        ) -> Expression {
            self.observed.push(cx.parent());
            Expression::DeclarationReference(expression)
        }
    }

    #[test]
    fn parent_stack_reports_the_actual_parent() {
        let mut document = Document::new("parents.swift");
        document
            .statements
            .push(testing::expression_statement(Expression::If(IfExpression {
                range: None,
                condition: Box::new(testing::reference("flag", Some("Bool"))),
                then_expression: Box::new(testing::int_literal(1)),
                else_expression: Box::new(testing::int_literal(2)),
            })));
        document
            .statements
            .push(testing::return_statement(Some(testing::reference("x", None))));

        let mut spy = ParentSpy::default();
        let mut diagnostics = Diagnostics::new();
        spy.run(document, &mut diagnostics);

        assert_eq!(
            spy.observed,
            vec![
                Some(ParentNode::Expression(ExpressionKind::If)),
                Some(ParentNode::Statement(StatementKind::Return)),
            ]
        );
    }

    /// Each second-round pass applied twice must equal itself applied
    /// once.
    #[test]
    fn second_round_is_idempotent_on_a_busy_document() {
        let context = TranspilationContext::new();
        let config = Config::new();
        let cancellation = Cancellation::new();

        let mut diagnostics = Diagnostics::new();
        let once = run_second_round(
            busy_document(),
            &context,
            &config,
            &mut diagnostics,
            &cancellation,
        );
        let mut diagnostics = Diagnostics::new();
        let twice = run_second_round(
            once.clone(),
            &context,
            &config,
            &mut diagnostics,
            &cancellation,
        );
        assert_eq!(twice, once);
    }
}
