//! Unification of template patterns against expressions.
//!
//! A template pattern is an ordinary expression tree in which declaration
//! references whose identifiers start with `_` act as free variables. A free
//! variable matches any expression whose source type is a structural subtype
//! of the variable's declared type (untyped variables and untyped candidates
//! match unconditionally); every other node must match structurally, payload
//! by payload, ignoring source ranges.

use trestle_ast::Expression;
use trestle_ast::TemplateMatch;
use trestle_ast::types::Type;

/// The prefix marking a pattern identifier as a free variable.
const FREE_VARIABLE_PREFIX: &str = "_";

/// Attempts to unify a pattern against an expression.
///
/// On success, returns the free-variable bindings in the order the
/// variables first occur in the pattern. A variable occurring twice must
/// bind structurally equal expressions both times.
pub fn unify(pattern: &Expression, expression: &Expression) -> Option<Vec<TemplateMatch>> {
    let mut bindings = Vec::new();
    if unify_into(pattern, expression, &mut bindings) {
        Some(bindings)
    } else {
        None
    }
}

/// Recursively unifies, accumulating bindings.
fn unify_into(
    pattern: &Expression,
    expression: &Expression,
    bindings: &mut Vec<TemplateMatch>,
) -> bool {
    if let Expression::DeclarationReference(reference) = pattern
        && reference.identifier.starts_with(FREE_VARIABLE_PREFIX)
    {
        if !type_matches(reference.type_name.as_deref(), expression) {
            return false;
        }

        return bind(&reference.identifier, expression, bindings);
    }

    match (pattern, expression) {
        (Expression::LiteralCode(p), Expression::LiteralCode(e))
        | (Expression::LiteralDeclaration(p), Expression::LiteralDeclaration(e)) => {
            p.string == e.string
        }
        (Expression::Parenthesized(p), Expression::Parenthesized(e)) => {
            unify_into(&p.expression, &e.expression, bindings)
        }
        (Expression::ForceValue(p), Expression::ForceValue(e)) => {
            unify_into(&p.expression, &e.expression, bindings)
        }
        (Expression::Optional(p), Expression::Optional(e)) => {
            unify_into(&p.expression, &e.expression, bindings)
        }
        (Expression::DeclarationReference(p), Expression::DeclarationReference(e)) => {
            p.identifier == e.identifier
        }
        (Expression::Type(p), Expression::Type(e)) => p.type_name == e.type_name,
        (Expression::Subscript(p), Expression::Subscript(e)) => {
            unify_into(&p.subscripted, &e.subscripted, bindings)
                && unify_into(&p.index, &e.index, bindings)
        }
        (Expression::Array(p), Expression::Array(e)) => {
            p.elements.len() == e.elements.len()
                && p.elements
                    .iter()
                    .zip(&e.elements)
                    .all(|(p, e)| unify_into(p, e, bindings))
        }
        (Expression::Dictionary(p), Expression::Dictionary(e)) => {
            p.keys.len() == e.keys.len()
                && p.keys
                    .iter()
                    .zip(&e.keys)
                    .all(|(p, e)| unify_into(p, e, bindings))
                && p.values
                    .iter()
                    .zip(&e.values)
                    .all(|(p, e)| unify_into(p, e, bindings))
        }
        (Expression::Return(p), Expression::Return(e)) => match (&p.expression, &e.expression) {
            (Some(p), Some(e)) => unify_into(p, e, bindings),
            (None, None) => true,
            _ => false,
        },
        (Expression::Dot(p), Expression::Dot(e)) => {
            unify_into(&p.left, &e.left, bindings) && unify_into(&p.right, &e.right, bindings)
        }
        (Expression::BinaryOperator(p), Expression::BinaryOperator(e)) => {
            p.operator == e.operator
                && unify_into(&p.left, &e.left, bindings)
                && unify_into(&p.right, &e.right, bindings)
        }
        (Expression::PrefixUnary(p), Expression::PrefixUnary(e)) => {
            p.operator == e.operator && unify_into(&p.subexpression, &e.subexpression, bindings)
        }
        (Expression::PostfixUnary(p), Expression::PostfixUnary(e)) => {
            p.operator == e.operator && unify_into(&p.subexpression, &e.subexpression, bindings)
        }
        (Expression::If(p), Expression::If(e)) => {
            unify_into(&p.condition, &e.condition, bindings)
                && unify_into(&p.then_expression, &e.then_expression, bindings)
                && unify_into(&p.else_expression, &e.else_expression, bindings)
        }
        (Expression::Call(p), Expression::Call(e)) => {
            unify_into(&p.function, &e.function, bindings)
                && unify_into(&p.parameters, &e.parameters, bindings)
        }
        (Expression::LiteralInt(p), Expression::LiteralInt(e)) => p.value == e.value,
        (Expression::LiteralUInt(p), Expression::LiteralUInt(e)) => p.value == e.value,
        (Expression::LiteralDouble(p), Expression::LiteralDouble(e)) => p.value == e.value,
        (Expression::LiteralFloat(p), Expression::LiteralFloat(e)) => p.value == e.value,
        (Expression::LiteralBool(p), Expression::LiteralBool(e)) => p.value == e.value,
        (Expression::LiteralString(p), Expression::LiteralString(e)) => p.value == e.value,
        (Expression::LiteralCharacter(p), Expression::LiteralCharacter(e)) => p.value == e.value,
        (Expression::Nil(_), Expression::Nil(_)) => true,
        (Expression::InterpolatedString(p), Expression::InterpolatedString(e)) => {
            p.expressions.len() == e.expressions.len()
                && p.expressions
                    .iter()
                    .zip(&e.expressions)
                    .all(|(p, e)| unify_into(p, e, bindings))
        }
        (Expression::Tuple(p), Expression::Tuple(e)) => {
            p.pairs.len() == e.pairs.len()
                && p.pairs.iter().zip(&e.pairs).all(|(p, e)| {
                    p.label == e.label && unify_into(&p.expression, &e.expression, bindings)
                })
        }
        _ => false,
    }
}

/// Binds a free variable, requiring consistency with any earlier binding of
/// the same name.
fn bind(name: &str, expression: &Expression, bindings: &mut Vec<TemplateMatch>) -> bool {
    if let Some(existing) = bindings.iter().find(|binding| binding.name == name) {
        return existing.expression == *expression;
    }

    bindings.push(TemplateMatch {
        name: name.to_string(),
        expression: expression.clone(),
    });
    true
}

/// Checks a free variable's type constraint against a candidate expression.
///
/// The constraint passes when either side has no parseable type; otherwise
/// the candidate's type must be a structural subtype of the pattern's.
fn type_matches(pattern_type: Option<&str>, expression: &Expression) -> bool {
    let Some(pattern_type) = pattern_type.and_then(|t| Type::parse(t).ok()) else {
        return true;
    };
    let Some(expression_type) = expression.type_name().and_then(|t| Type::parse(&t).ok()) else {
        return true;
    };

    expression_type.is_subtype_of(&pattern_type)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::CallExpression;
    use trestle_ast::DeclarationReferenceExpression;
    use trestle_ast::LiteralIntExpression;
    use trestle_ast::TupleExpression;
    use trestle_ast::TuplePair;

    use super::*;

    /// A declaration reference with an optional type.
    fn reference(identifier: &str, type_name: Option<&str>) -> Expression {
        Expression::DeclarationReference(DeclarationReferenceExpression {
            range: None,
            identifier: identifier.to_string(),
            type_name: type_name.map(str::to_string),
            is_standard_library: false,
            is_implicit: false,
        })
    }

    /// A call of `function` with a single unlabeled argument.
    fn call(function: Expression, argument: Expression) -> Expression {
        Expression::Call(CallExpression {
            range: None,
            function: Box::new(function),
            parameters: Box::new(Expression::Tuple(TupleExpression {
                range: None,
                pairs: vec![TuplePair {
                    label: None,
                    expression: argument,
                }],
            })),
            type_name: None,
        })
    }

    #[test]
    fn free_variable_binds_any_expression() {
        let pattern = call(reference("print", None), reference("_value", Some("Any")));
        let candidate = call(
            reference("print", None),
            Expression::LiteralInt(LiteralIntExpression {
                range: None,
                value: 42,
            }),
        );

        let bindings = unify(&pattern, &candidate).expect("pattern should match");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].name, "_value");
    }

    #[test]
    fn type_constraint_rejects_non_subtypes() {
        let pattern = call(
            reference("describe", None),
            reference("_value", Some("String")),
        );
        let candidate = call(reference("describe", None), reference("x", Some("Int")));
        assert_eq!(unify(&pattern, &candidate), None);
    }

    #[test]
    fn supertype_constraint_accepts_subtypes() {
        let pattern = call(
            reference("describe", None),
            reference("_value", Some("Compare")),
        );
        let candidate = call(reference("describe", None), reference("x", Some("Int")));
        assert!(unify(&pattern, &candidate).is_some());
    }

    #[test]
    fn mismatched_callee_fails() {
        let pattern = call(reference("print", None), reference("_value", None));
        let candidate = call(reference("dump", None), reference("x", None));
        assert_eq!(unify(&pattern, &candidate), None);
    }

    #[test]
    fn repeated_variables_must_bind_equal_subtrees() {
        let pattern = Expression::BinaryOperator(trestle_ast::BinaryOperatorExpression {
            range: None,
            left: Box::new(reference("_a", None)),
            right: Box::new(reference("_a", None)),
            operator: "==".to_string(),
            type_name: None,
        });

        let same = Expression::BinaryOperator(trestle_ast::BinaryOperatorExpression {
            range: None,
            left: Box::new(reference("x", None)),
            right: Box::new(reference("x", None)),
            operator: "==".to_string(),
            type_name: None,
        });
        assert!(unify(&pattern, &same).is_some());

        let different = Expression::BinaryOperator(trestle_ast::BinaryOperatorExpression {
            range: None,
            left: Box::new(reference("x", None)),
            right: Box::new(reference("y", None)),
            operator: "==".to_string(),
            type_name: None,
        });
        assert_eq!(unify(&pattern, &different), None);
    }
}
