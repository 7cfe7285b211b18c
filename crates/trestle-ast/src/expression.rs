//! Expression nodes of the abstract syntax tree.

use serde::Deserialize;
use serde::Serialize;

use crate::SourceRange;
use crate::statement::LabeledType;
use crate::statement::Statement;

/// An expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A matched template, carrying the target translation and bindings.
    Template(TemplateExpression),
    /// Literal target-language code inserted verbatim in expression
    /// position.
    LiteralCode(LiteralCodeExpression),
    /// Literal target-language code inserted verbatim in declaration
    /// position.
    LiteralDeclaration(LiteralCodeExpression),
    /// A parenthesized expression.
    Parenthesized(ParenthesizedExpression),
    /// A force-unwrap (`!`) of an optional value.
    ForceValue(ForceValueExpression),
    /// An optional-chaining (`?`) access of an optional value.
    Optional(OptionalExpression),
    /// A reference to a declared name.
    DeclarationReference(DeclarationReferenceExpression),
    /// A reference to a type.
    Type(TypeExpression),
    /// A subscript access.
    Subscript(SubscriptExpression),
    /// An array literal.
    Array(ArrayExpression),
    /// A dictionary literal.
    Dictionary(DictionaryExpression),
    /// A return in expression position, e.g. the right side of `?:`.
    Return(ReturnExpression),
    /// A member access.
    Dot(DotExpression),
    /// A binary operator application.
    BinaryOperator(BinaryOperatorExpression),
    /// A prefix unary operator application.
    PrefixUnary(PrefixUnaryExpression),
    /// A postfix unary operator application.
    PostfixUnary(PostfixUnaryExpression),
    /// A ternary conditional.
    If(IfExpression),
    /// A call.
    Call(CallExpression),
    /// A closure literal.
    Closure(ClosureExpression),
    /// A signed integer literal.
    LiteralInt(LiteralIntExpression),
    /// An unsigned integer literal.
    LiteralUInt(LiteralUIntExpression),
    /// A double-precision floating point literal.
    LiteralDouble(LiteralDoubleExpression),
    /// A single-precision floating point literal.
    LiteralFloat(LiteralFloatExpression),
    /// A boolean literal.
    LiteralBool(LiteralBoolExpression),
    /// A string literal.
    LiteralString(LiteralStringExpression),
    /// A character literal.
    LiteralCharacter(LiteralCharacterExpression),
    /// The nil literal.
    Nil(NilLiteralExpression),
    /// A string literal with interpolated expressions.
    InterpolatedString(InterpolatedStringExpression),
    /// A tuple literal; an empty tuple denotes `Void`.
    Tuple(TupleExpression),
    /// A tuple whose elements were reordered or defaulted by the frontend.
    TupleShuffle(TupleShuffleExpression),
    /// An expression that could not be translated.
    Error(ErrorExpression),
}

/// The kind of an expression, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// A matched template.
    Template,
    /// Literal code in expression position.
    LiteralCode,
    /// Literal code in declaration position.
    LiteralDeclaration,
    /// A parenthesized expression.
    Parenthesized,
    /// A force-unwrap.
    ForceValue,
    /// An optional-chaining access.
    Optional,
    /// A declaration reference.
    DeclarationReference,
    /// A type reference.
    Type,
    /// A subscript access.
    Subscript,
    /// An array literal.
    Array,
    /// A dictionary literal.
    Dictionary,
    /// A return in expression position.
    Return,
    /// A member access.
    Dot,
    /// A binary operator application.
    BinaryOperator,
    /// A prefix unary operator application.
    PrefixUnary,
    /// A postfix unary operator application.
    PostfixUnary,
    /// A ternary conditional.
    If,
    /// A call.
    Call,
    /// A closure literal.
    Closure,
    /// A signed integer literal.
    LiteralInt,
    /// An unsigned integer literal.
    LiteralUInt,
    /// A double literal.
    LiteralDouble,
    /// A float literal.
    LiteralFloat,
    /// A boolean literal.
    LiteralBool,
    /// A string literal.
    LiteralString,
    /// A character literal.
    LiteralCharacter,
    /// The nil literal.
    Nil,
    /// An interpolated string.
    InterpolatedString,
    /// A tuple literal.
    Tuple,
    /// A tuple shuffle.
    TupleShuffle,
    /// An error placeholder.
    Error,
}

impl Expression {
    /// Gets the kind of the expression.
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Self::Template(_) => ExpressionKind::Template,
            Self::LiteralCode(_) => ExpressionKind::LiteralCode,
            Self::LiteralDeclaration(_) => ExpressionKind::LiteralDeclaration,
            Self::Parenthesized(_) => ExpressionKind::Parenthesized,
            Self::ForceValue(_) => ExpressionKind::ForceValue,
            Self::Optional(_) => ExpressionKind::Optional,
            Self::DeclarationReference(_) => ExpressionKind::DeclarationReference,
            Self::Type(_) => ExpressionKind::Type,
            Self::Subscript(_) => ExpressionKind::Subscript,
            Self::Array(_) => ExpressionKind::Array,
            Self::Dictionary(_) => ExpressionKind::Dictionary,
            Self::Return(_) => ExpressionKind::Return,
            Self::Dot(_) => ExpressionKind::Dot,
            Self::BinaryOperator(_) => ExpressionKind::BinaryOperator,
            Self::PrefixUnary(_) => ExpressionKind::PrefixUnary,
            Self::PostfixUnary(_) => ExpressionKind::PostfixUnary,
            Self::If(_) => ExpressionKind::If,
            Self::Call(_) => ExpressionKind::Call,
            Self::Closure(_) => ExpressionKind::Closure,
            Self::LiteralInt(_) => ExpressionKind::LiteralInt,
            Self::LiteralUInt(_) => ExpressionKind::LiteralUInt,
            Self::LiteralDouble(_) => ExpressionKind::LiteralDouble,
            Self::LiteralFloat(_) => ExpressionKind::LiteralFloat,
            Self::LiteralBool(_) => ExpressionKind::LiteralBool,
            Self::LiteralString(_) => ExpressionKind::LiteralString,
            Self::LiteralCharacter(_) => ExpressionKind::LiteralCharacter,
            Self::Nil(_) => ExpressionKind::Nil,
            Self::InterpolatedString(_) => ExpressionKind::InterpolatedString,
            Self::Tuple(_) => ExpressionKind::Tuple,
            Self::TupleShuffle(_) => ExpressionKind::TupleShuffle,
            Self::Error(_) => ExpressionKind::Error,
        }
    }

    /// Gets the source range of the expression, if the frontend supplied
    /// one.
    pub fn range(&self) -> Option<SourceRange> {
        match self {
            Self::Template(e) => e.range,
            Self::LiteralCode(e) | Self::LiteralDeclaration(e) => e.range,
            Self::Parenthesized(e) => e.range,
            Self::ForceValue(e) => e.range,
            Self::Optional(e) => e.range,
            Self::DeclarationReference(e) => e.range,
            Self::Type(e) => e.range,
            Self::Subscript(e) => e.range,
            Self::Array(e) => e.range,
            Self::Dictionary(e) => e.range,
            Self::Return(e) => e.range,
            Self::Dot(e) => e.range,
            Self::BinaryOperator(e) => e.range,
            Self::PrefixUnary(e) => e.range,
            Self::PostfixUnary(e) => e.range,
            Self::If(e) => e.range,
            Self::Call(e) => e.range,
            Self::Closure(e) => e.range,
            Self::LiteralInt(e) => e.range,
            Self::LiteralUInt(e) => e.range,
            Self::LiteralDouble(e) => e.range,
            Self::LiteralFloat(e) => e.range,
            Self::LiteralBool(e) => e.range,
            Self::LiteralString(e) => e.range,
            Self::LiteralCharacter(e) => e.range,
            Self::Nil(e) => e.range,
            Self::InterpolatedString(e) => e.range,
            Self::Tuple(e) => e.range,
            Self::TupleShuffle(e) => e.range,
            Self::Error(e) => e.range,
        }
    }

    /// Gets the source-language type of the expression, when statically
    /// available.
    ///
    /// Wrappers that merely group or chain propagate the inner type:
    /// parentheses and optional accesses report their subexpression's type,
    /// member accesses report the right side's type, and a force-unwrap
    /// strips the trailing `?` from its subexpression's type.
    pub fn type_name(&self) -> Option<String> {
        match self {
            Self::Template(_)
            | Self::LiteralCode(_)
            | Self::LiteralDeclaration(_)
            | Self::Return(_)
            | Self::Tuple(_)
            | Self::TupleShuffle(_)
            | Self::Nil(_)
            | Self::Error(_) => None,
            Self::Parenthesized(e) => e.expression.type_name(),
            Self::ForceValue(e) => e
                .expression
                .type_name()
                .map(|t| t.strip_suffix('?').map(str::to_string).unwrap_or(t)),
            Self::Optional(e) => e.expression.type_name(),
            Self::DeclarationReference(e) => e.type_name.clone(),
            Self::Type(e) => Some(e.type_name.clone()),
            Self::Subscript(e) => e.type_name.clone(),
            Self::Array(e) => e.type_name.clone(),
            Self::Dictionary(e) => e.type_name.clone(),
            Self::Dot(e) => e.right.type_name(),
            Self::BinaryOperator(e) => e.type_name.clone(),
            Self::PrefixUnary(e) => e.type_name.clone(),
            Self::PostfixUnary(e) => e.type_name.clone(),
            Self::If(e) => e.then_expression.type_name(),
            Self::Call(e) => e.type_name.clone(),
            Self::Closure(e) => e.type_name.clone(),
            Self::LiteralInt(_) => Some("Int".to_string()),
            Self::LiteralUInt(_) => Some("UInt".to_string()),
            Self::LiteralDouble(_) => Some("Double".to_string()),
            Self::LiteralFloat(_) => Some("Float".to_string()),
            Self::LiteralBool(_) => Some("Bool".to_string()),
            Self::LiteralString(_) | Self::InterpolatedString(_) => Some("String".to_string()),
            Self::LiteralCharacter(_) => Some("Character".to_string()),
        }
    }
}

/// A matched template, carrying the target translation and the subtrees
/// bound to its free variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExpression {
    /// The source range of the matched expression.
    pub range: Option<SourceRange>,
    /// The target-language translation, with `_`-prefixed holes.
    pub pattern: String,
    /// The bindings from hole names to matched subtrees, in hole order.
    pub matches: Vec<TemplateMatch>,
}

/// A single binding produced by template unification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateMatch {
    /// The free-variable name, including its `_` prefix.
    pub name: String,
    /// The matched subtree.
    pub expression: Expression,
}

/// Literal target-language code inserted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralCodeExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The code to emit.
    pub string: String,
}

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The grouped subexpression.
    pub expression: Box<Expression>,
}

/// A force-unwrap (`!`) of an optional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceValueExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The unwrapped subexpression.
    pub expression: Box<Expression>,
}

/// An optional-chaining (`?`) access of an optional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionalExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The chained subexpression.
    pub expression: Box<Expression>,
}

/// A reference to a declared name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationReferenceExpression {
    /// The source range of the reference.
    pub range: Option<SourceRange>,
    /// The referenced identifier.
    pub identifier: String,
    /// The type of the referenced declaration, when known.
    pub type_name: Option<String>,
    /// Whether the reference resolves into the source standard library.
    pub is_standard_library: bool,
    /// Whether the reference was synthesized by the source compiler, e.g.
    /// the implicit `self` of a member access.
    pub is_implicit: bool,
}

/// A reference to a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeExpression {
    /// The source range of the reference.
    pub range: Option<SourceRange>,
    /// The referenced type.
    pub type_name: String,
}

/// A subscript access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The value being indexed.
    pub subscripted: Box<Expression>,
    /// The index expression.
    pub index: Box<Expression>,
    /// The type of the indexed element, when known.
    pub type_name: Option<String>,
}

/// An array literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The element expressions.
    pub elements: Vec<Expression>,
    /// The array type, when known.
    pub type_name: Option<String>,
}

/// A dictionary literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The key expressions, parallel to [`values`](Self::values).
    pub keys: Vec<Expression>,
    /// The value expressions, parallel to [`keys`](Self::keys).
    pub values: Vec<Expression>,
    /// The dictionary type, when known.
    pub type_name: Option<String>,
}

/// A return in expression position.
///
/// Produced by the `ReturnIfNil` pass for the target idiom
/// `value ?: return fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The returned expression; `None` for a bare return.
    pub expression: Option<Box<Expression>>,
}

/// A member access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The accessed value or type.
    pub left: Box<Expression>,
    /// The accessed member.
    pub right: Box<Expression>,
}

/// A binary operator application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperatorExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The left operand.
    pub left: Box<Expression>,
    /// The right operand.
    pub right: Box<Expression>,
    /// The operator symbol.
    pub operator: String,
    /// The result type, when known.
    pub type_name: Option<String>,
}

/// A prefix unary operator application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixUnaryExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The operand.
    pub subexpression: Box<Expression>,
    /// The operator symbol.
    pub operator: String,
    /// The result type, when known.
    pub type_name: Option<String>,
}

/// A postfix unary operator application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostfixUnaryExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The operand.
    pub subexpression: Box<Expression>,
    /// The operator symbol.
    pub operator: String,
    /// The result type, when known.
    pub type_name: Option<String>,
}

/// A ternary conditional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExpression {
    /// The source range of the expression.
    pub range: Option<SourceRange>,
    /// The condition.
    pub condition: Box<Expression>,
    /// The value when the condition holds.
    pub then_expression: Box<Expression>,
    /// The value when the condition fails.
    pub else_expression: Box<Expression>,
}

/// A call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    /// The source range of the call.
    pub range: Option<SourceRange>,
    /// The called function or constructed type.
    pub function: Box<Expression>,
    /// The arguments, as a tuple (or tuple-shuffle) expression.
    pub parameters: Box<Expression>,
    /// The result type, when known.
    pub type_name: Option<String>,
}

/// A closure literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosureExpression {
    /// The source range of the closure.
    pub range: Option<SourceRange>,
    /// The parameters, in declaration order.
    pub parameters: Vec<LabeledType>,
    /// The body statements.
    pub statements: Vec<Statement>,
    /// The closure's function type, when known.
    pub type_name: Option<String>,
}

/// A signed integer literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralIntExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The literal value.
    pub value: i64,
}

/// An unsigned integer literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralUIntExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The literal value.
    pub value: u64,
}

/// A double-precision floating point literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralDoubleExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The literal value.
    pub value: f64,
}

/// A single-precision floating point literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralFloatExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The literal value.
    pub value: f32,
}

/// A boolean literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralBoolExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The literal value.
    pub value: bool,
}

/// A string literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralStringExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The literal value, without quotes.
    pub value: String,
}

/// A character literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralCharacterExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The literal value.
    pub value: char,
}

/// The nil literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NilLiteralExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
}

/// A string literal with interpolated expressions.
///
/// Literal segments appear as [`Expression::LiteralString`] entries in
/// [`expressions`](Self::expressions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedStringExpression {
    /// The source range of the literal.
    pub range: Option<SourceRange>,
    /// The alternating literal and interpolated segments.
    pub expressions: Vec<Expression>,
}

/// A tuple literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleExpression {
    /// The source range of the tuple.
    pub range: Option<SourceRange>,
    /// The labeled elements; an empty list denotes `Void`.
    pub pairs: Vec<TuplePair>,
}

/// A single element of a tuple literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuplePair {
    /// The element label; `None` when unlabeled.
    pub label: Option<String>,
    /// The element expression.
    pub expression: Expression,
}

/// A tuple whose elements were reordered or defaulted by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleShuffleExpression {
    /// The source range of the tuple.
    pub range: Option<SourceRange>,
    /// The labels, in declaration order.
    pub labels: Vec<String>,
    /// How each declared element maps onto the supplied expressions.
    pub indices: Vec<TupleShuffleIndex>,
    /// The supplied expressions.
    pub expressions: Vec<Expression>,
}

/// An expression that could not be translated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorExpression {
    /// The source range of the untranslatable expression.
    pub range: Option<SourceRange>,
}

/// A mapping entry of a tuple shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TupleShuffleIndex {
    /// The element consumes `count` variadic arguments.
    Variadic {
        /// The number of supplied expressions consumed.
        count: usize,
    },
    /// The element was defaulted and consumes no expression.
    Absent,
    /// The element consumes the next supplied expression.
    Present,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    /// A declaration reference with the given identifier and type.
    fn reference(identifier: &str, type_name: &str) -> Expression {
        Expression::DeclarationReference(DeclarationReferenceExpression {
            range: None,
            identifier: identifier.to_string(),
            type_name: Some(type_name.to_string()),
            is_standard_library: false,
            is_implicit: false,
        })
    }

    #[test]
    fn literal_types() {
        let int = Expression::LiteralInt(LiteralIntExpression {
            range: None,
            value: 3,
        });
        assert_eq!(int.type_name().as_deref(), Some("Int"));

        let string = Expression::LiteralString(LiteralStringExpression {
            range: None,
            value: "hi".to_string(),
        });
        assert_eq!(string.type_name().as_deref(), Some("String"));
    }

    #[test]
    fn parentheses_propagate_types() {
        let wrapped = Expression::Parenthesized(ParenthesizedExpression {
            range: None,
            expression: Box::new(reference("x", "Double")),
        });
        assert_eq!(wrapped.type_name().as_deref(), Some("Double"));
    }

    #[test]
    fn force_value_strips_optional() {
        let forced = Expression::ForceValue(ForceValueExpression {
            range: None,
            expression: Box::new(reference("x", "Int?")),
        });
        assert_eq!(forced.type_name().as_deref(), Some("Int"));
    }

    #[test]
    fn dot_reports_right_side() {
        let dot = Expression::Dot(DotExpression {
            range: None,
            left: Box::new(reference("point", "Point")),
            right: Box::new(reference("x", "Int")),
        });
        assert_eq!(dot.type_name().as_deref(), Some("Int"));
        assert_eq!(dot.kind(), ExpressionKind::Dot);
    }
}
