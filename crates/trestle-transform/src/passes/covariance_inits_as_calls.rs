//! A pass that unwraps covariance-workaround constructor calls.
//!
//! The source wraps lists in `ArrayClass<T>(list)` to work around generic
//! invariance. When the wrapped list already has element type `T` the
//! wrapper is a no-op and disappears; otherwise it becomes an element-typed
//! copy, `list.toMutableList<T>()`. The companion form
//! `value.as(T)` becomes a safe cast, `value as? T`.

use trestle_ast::BinaryOperatorExpression;
use trestle_ast::CallExpression;
use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::DotExpression;
use trestle_ast::Expression;
use trestle_ast::TupleExpression;
use trestle_ast::types::Type;

use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the covariance-inits-as-calls pass.
pub const ID: &str = "CovarianceInitsAsCalls";

/// The source-side wrapper class for covariant lists.
const ARRAY_CLASS: &str = "ArrayClass";

/// Extracts the single unlabeled argument of a call, if that is the whole
/// argument list.
fn single_argument(parameters: &Expression) -> Option<&Expression> {
    match parameters {
        Expression::Tuple(TupleExpression { pairs, .. }) if pairs.len() == 1 => {
            pairs[0].label.is_none().then(|| &pairs[0].expression)
        }
        _ => None,
    }
}

/// Determines if a type string names the wrapper class.
fn is_array_class(type_name: &str) -> bool {
    matches!(
        Type::parse(type_name),
        Ok(Type::Generic { base, .. }) if base == ARRAY_CLASS
    )
}

/// Unwraps `ArrayClass<T>(x)` wrappers and `x.as(T)` casts.
#[derive(Debug, Default, Clone, Copy)]
pub struct CovarianceInitsAsCallsPass;

impl CovarianceInitsAsCallsPass {
    /// Rewrites `ArrayClass<T>(argument)`, if the call has that shape.
    fn replace_wrapper(
        &mut self,
        cx: &mut PassContext<'_>,
        call: &CallExpression,
    ) -> Option<Expression> {
        let Expression::Type(callee) = &*call.function else {
            return None;
        };
        let Ok(Type::Generic { base, arguments }) = Type::parse(&callee.type_name) else {
            return None;
        };
        if base != ARRAY_CLASS || arguments.len() != 1 {
            return None;
        }
        let argument = single_argument(&call.parameters)?.clone();

        let element_type = &arguments[0];
        let argument_element = argument
            .type_name()
            .and_then(|name| Type::parse(&name).ok())
            .and_then(|ty| match ty {
                Type::Array(element) => Some(*element),
                Type::Generic { base, mut arguments }
                    if base == ARRAY_CLASS && arguments.len() == 1 =>
                {
                    Some(arguments.remove(0))
                }
                _ => None,
            });

        if argument_element.as_ref() == Some(element_type) {
            return Some(self.replace_expression(cx, argument));
        }

        let argument = self.replace_expression(cx, argument);
        Some(Expression::Dot(DotExpression {
            range: call.range,
            left: Box::new(argument),
            right: Box::new(Expression::Call(CallExpression {
                range: None,
                function: Box::new(Expression::DeclarationReference(
                    DeclarationReferenceExpression {
                        range: None,
                        identifier: format!("toMutableList<{element_type}>"),
                        type_name: None,
                        is_standard_library: false,
                        is_implicit: false,
                    },
                )),
                parameters: Box::new(Expression::Tuple(TupleExpression {
                    range: None,
                    pairs: Vec::new(),
                })),
                type_name: call.type_name.clone(),
            })),
        }))
    }

    /// Rewrites `value.as(T)`, if the call has that shape.
    fn replace_cast(
        &mut self,
        cx: &mut PassContext<'_>,
        call: &CallExpression,
    ) -> Option<Expression> {
        let Expression::Dot(dot) = &*call.function else {
            return None;
        };
        let Expression::DeclarationReference(method) = &*dot.right else {
            return None;
        };
        if method.identifier != "as" {
            return None;
        }
        if !dot.left.type_name().as_deref().is_some_and(is_array_class) {
            return None;
        }
        let target = single_argument(&call.parameters)?.clone();

        let value = self.replace_expression(cx, (*dot.left).clone());
        Some(Expression::BinaryOperator(BinaryOperatorExpression {
            range: call.range,
            left: Box::new(value),
            right: Box::new(target),
            operator: "as?".to_string(),
            type_name: call.type_name.clone(),
        }))
    }
}

impl Pass for CovarianceInitsAsCallsPass {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_call_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: CallExpression,
    ) -> Expression {
        if let Some(replacement) = self.replace_wrapper(cx, &expression) {
            return replacement;
        }
        if let Some(replacement) = self.replace_cast(cx, &expression) {
            return replacement;
        }

        walk::call_expression(self, cx, expression)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::Diagnostics;
    use trestle_ast::Document;

    use super::*;
    use crate::testing;

    /// A call of `ArrayClass<Int>` over the given argument.
    fn wrapper_call(argument: Expression) -> Expression {
        Expression::Call(CallExpression {
            range: None,
            function: Box::new(testing::type_expression("ArrayClass<Int>")),
            parameters: Box::new(testing::tuple(vec![argument])),
            type_name: Some("ArrayClass<Int>".to_string()),
        })
    }

    #[test]
    fn matching_element_types_drop_the_wrapper() {
        let mut document = Document::new("test.swift");
        document
            .statements
            .push(testing::expression_statement(wrapper_call(
                testing::reference("xs", Some("[Int]")),
            )));

        let mut diagnostics = Diagnostics::new();
        let output = CovarianceInitsAsCallsPass.run(document, &mut diagnostics);

        assert_eq!(
            output.statements[0],
            testing::expression_statement(testing::reference("xs", Some("[Int]")))
        );
    }

    #[test]
    fn mismatched_element_types_copy_the_list() {
        let mut document = Document::new("test.swift");
        document
            .statements
            .push(testing::expression_statement(wrapper_call(
                testing::reference("xs", Some("[Never]")),
            )));

        let mut diagnostics = Diagnostics::new();
        let output = CovarianceInitsAsCallsPass.run(document, &mut diagnostics);

        let trestle_ast::Statement::Expression(statement) = &output.statements[0] else {
            panic!("expected an expression statement");
        };
        let Expression::Dot(dot) = &statement.expression else {
            panic!("expected a dot expression, got {:?}", statement.expression);
        };
        let Expression::Call(call) = &*dot.right else {
            panic!("expected a call on the right");
        };
        let Expression::DeclarationReference(reference) = &*call.function else {
            panic!("expected a reference callee");
        };
        assert_eq!(reference.identifier, "toMutableList<Int>");
    }

    #[test]
    fn as_method_becomes_safe_cast() {
        let cast = Expression::Call(CallExpression {
            range: None,
            function: Box::new(testing::dot(
                testing::reference("xs", Some("ArrayClass<Any>")),
                testing::reference("as", None),
            )),
            parameters: Box::new(testing::tuple(vec![testing::type_expression(
                "ArrayClass<Int>",
            )])),
            type_name: Some("ArrayClass<Int>?".to_string()),
        });

        let mut document = Document::new("test.swift");
        document.statements.push(testing::expression_statement(cast));

        let mut diagnostics = Diagnostics::new();
        let output = CovarianceInitsAsCallsPass.run(document, &mut diagnostics);

        let trestle_ast::Statement::Expression(statement) = &output.statements[0] else {
            panic!("expected an expression statement");
        };
        let Expression::BinaryOperator(binary) = &statement.expression else {
            panic!("expected a cast, got {:?}", statement.expression);
        };
        assert_eq!(binary.operator, "as?");
    }
}
