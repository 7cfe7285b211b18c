//! Statement nodes of the abstract syntax tree.
//!
//! `Statement` is a closed sum over every statement-position construct the
//! source language can produce, including type declarations. The split
//! between declarations and executable statements happens at the
//! [`Document`](crate::Document) level, not here; an extension member list,
//! for instance, is just a `Vec<Statement>`.

use serde::Deserialize;
use serde::Serialize;

use crate::SourceRange;
use crate::expression::CallExpression;
use crate::expression::Expression;

/// A statement or declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// An import of a module.
    Import(ImportStatement),
    /// A type alias declaration.
    Typealias(TypealiasDeclaration),
    /// An extension of an existing type.
    Extension(ExtensionDeclaration),
    /// A class declaration.
    Class(ClassDeclaration),
    /// A struct declaration.
    Struct(StructDeclaration),
    /// An enum declaration.
    Enum(EnumDeclaration),
    /// A protocol declaration.
    Protocol(ProtocolDeclaration),
    /// A companion object holding a type's static members.
    CompanionObject(CompanionObject),
    /// A function declaration.
    Function(FunctionDeclaration),
    /// An initializer declaration.
    Initializer(InitializerDeclaration),
    /// A variable declaration.
    Variable(VariableDeclaration),
    /// A `do` block.
    Do(DoStatement),
    /// A `catch` clause following a `do` block.
    Catch(CatchStatement),
    /// A for-each loop.
    ForEach(ForEachStatement),
    /// A while loop.
    While(WhileStatement),
    /// An if (or guard) statement.
    If(IfStatement),
    /// A switch statement.
    Switch(SwitchStatement),
    /// A deferred block.
    Defer(DeferStatement),
    /// A throw statement.
    Throw(ThrowStatement),
    /// A return statement.
    Return(ReturnStatement),
    /// A break statement.
    Break(BreakStatement),
    /// A continue statement.
    Continue(ContinueStatement),
    /// An assignment.
    Assignment(AssignmentStatement),
    /// An expression evaluated for its effects.
    Expression(ExpressionStatement),
    /// A comment carried through translation.
    Comment(CommentStatement),
    /// A construct that could not be translated.
    Error(ErrorStatement),
}

/// The kind of a statement, without its payload.
///
/// Used for parent-stack queries during traversal, where identity of the
/// construct matters but its contents do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// An import statement.
    Import,
    /// A type alias declaration.
    Typealias,
    /// An extension declaration.
    Extension,
    /// A class declaration.
    Class,
    /// A struct declaration.
    Struct,
    /// An enum declaration.
    Enum,
    /// A protocol declaration.
    Protocol,
    /// A companion object.
    CompanionObject,
    /// A function declaration.
    Function,
    /// An initializer declaration.
    Initializer,
    /// A variable declaration.
    Variable,
    /// A `do` block.
    Do,
    /// A `catch` clause.
    Catch,
    /// A for-each loop.
    ForEach,
    /// A while loop.
    While,
    /// An if statement.
    If,
    /// A switch statement.
    Switch,
    /// A deferred block.
    Defer,
    /// A throw statement.
    Throw,
    /// A return statement.
    Return,
    /// A break statement.
    Break,
    /// A continue statement.
    Continue,
    /// An assignment.
    Assignment,
    /// An expression statement.
    ExpressionStatement,
    /// A comment.
    Comment,
    /// An error placeholder.
    Error,
}

impl Statement {
    /// Gets the kind of the statement.
    pub fn kind(&self) -> StatementKind {
        match self {
            Self::Import(_) => StatementKind::Import,
            Self::Typealias(_) => StatementKind::Typealias,
            Self::Extension(_) => StatementKind::Extension,
            Self::Class(_) => StatementKind::Class,
            Self::Struct(_) => StatementKind::Struct,
            Self::Enum(_) => StatementKind::Enum,
            Self::Protocol(_) => StatementKind::Protocol,
            Self::CompanionObject(_) => StatementKind::CompanionObject,
            Self::Function(_) => StatementKind::Function,
            Self::Initializer(_) => StatementKind::Initializer,
            Self::Variable(_) => StatementKind::Variable,
            Self::Do(_) => StatementKind::Do,
            Self::Catch(_) => StatementKind::Catch,
            Self::ForEach(_) => StatementKind::ForEach,
            Self::While(_) => StatementKind::While,
            Self::If(_) => StatementKind::If,
            Self::Switch(_) => StatementKind::Switch,
            Self::Defer(_) => StatementKind::Defer,
            Self::Throw(_) => StatementKind::Throw,
            Self::Return(_) => StatementKind::Return,
            Self::Break(_) => StatementKind::Break,
            Self::Continue(_) => StatementKind::Continue,
            Self::Assignment(_) => StatementKind::Assignment,
            Self::Expression(_) => StatementKind::ExpressionStatement,
            Self::Comment(_) => StatementKind::Comment,
            Self::Error(_) => StatementKind::Error,
        }
    }

    /// Gets the source range of the statement, if the frontend supplied one.
    pub fn range(&self) -> Option<SourceRange> {
        match self {
            Self::Import(s) => s.range,
            Self::Typealias(s) => s.range,
            Self::Extension(s) => s.range,
            Self::Class(s) => s.range,
            Self::Struct(s) => s.range,
            Self::Enum(s) => s.range,
            Self::Protocol(s) => s.range,
            Self::CompanionObject(s) => s.range,
            Self::Function(s) => s.range,
            Self::Initializer(s) => s.range,
            Self::Variable(s) => s.range,
            Self::Do(s) => s.range,
            Self::Catch(s) => s.range,
            Self::ForEach(s) => s.range,
            Self::While(s) => s.range,
            Self::If(s) => s.range,
            Self::Switch(s) => s.range,
            Self::Defer(s) => s.range,
            Self::Throw(s) => s.range,
            Self::Return(s) => s.range,
            Self::Break(s) => s.range,
            Self::Continue(s) => s.range,
            Self::Assignment(s) => s.range,
            Self::Expression(s) => s.range,
            Self::Comment(s) => s.range,
            Self::Error(s) => s.range,
        }
    }
}

/// An import of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The imported module path.
    pub module: String,
}

/// A type alias declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypealiasDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The alias being introduced.
    pub identifier: String,
    /// The aliased type.
    pub type_name: String,
    /// Whether the declaration was synthesized by the source compiler.
    pub is_implicit: bool,
}

/// An extension of an existing type.
///
/// Extensions do not survive to the target language; the
/// `RemoveExtensions` pass flattens their members, stamping each with
/// [`extends_type`](FunctionDeclaration::extends_type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The type being extended.
    pub extended_type: String,
    /// The members declared by the extension.
    pub members: Vec<Statement>,
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The class name.
    pub name: String,
    /// The superclass and conformances, in declaration order.
    pub inherits: Vec<String>,
    /// The member declarations.
    pub members: Vec<Statement>,
}

/// A struct declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// An annotation rendered before the declaration, e.g. `data`.
    pub annotations: Option<String>,
    /// The struct name.
    pub name: String,
    /// The conformances, in declaration order.
    pub inherits: Vec<String>,
    /// The member declarations.
    pub members: Vec<Statement>,
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The access modifier, if any.
    pub access: Option<String>,
    /// The enum name.
    pub name: String,
    /// The raw-value base type and conformances, in declaration order.
    pub inherits: Vec<String>,
    /// The declared elements.
    pub elements: Vec<EnumElement>,
    /// The non-element member declarations.
    pub members: Vec<Statement>,
    /// Whether the declaration was synthesized by the source compiler.
    pub is_implicit: bool,
}

/// A single element of an enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumElement {
    /// The source range of the element.
    pub range: Option<SourceRange>,
    /// The element name.
    pub name: String,
    /// The associated values, if the element carries a payload.
    pub associated_values: Vec<LabeledType>,
    /// The raw value, present on all elements of a raw-representable enum
    /// or on none.
    pub raw_value: Option<Expression>,
    /// An annotation attached to the element.
    pub annotations: Option<String>,
}

/// A protocol declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The protocol name.
    pub name: String,
    /// The member requirements.
    pub members: Vec<Statement>,
}

/// A companion object holding a type's static members.
///
/// Companion objects never come from the frontend; the `StaticMembers` pass
/// synthesizes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionObject {
    /// The source range of the object.
    pub range: Option<SourceRange>,
    /// The member declarations.
    pub members: Vec<Statement>,
}

/// A single parameter of a function or initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameter {
    /// The internal parameter name.
    pub label: String,
    /// The external argument label, when it differs from the internal name.
    pub api_label: Option<String>,
    /// The parameter type.
    pub type_name: String,
    /// The default value, if any.
    pub value: Option<Expression>,
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The function name, without parameter labels.
    pub prefix: String,
    /// The parameters, in declaration order.
    pub parameters: Vec<FunctionParameter>,
    /// The return type.
    pub return_type: String,
    /// The full function type, e.g. `(Int, Int) -> Int`.
    pub function_type: String,
    /// The generic parameter names.
    pub generics: Vec<String>,
    /// Whether the declaration was synthesized by the source compiler.
    pub is_implicit: bool,
    /// Whether the function is a static member.
    pub is_static: bool,
    /// Whether the function is declared `mutating`.
    pub is_mutating: bool,
    /// Whether the function was recorded as pure by the frontend.
    pub is_pure: bool,
    /// The type this function extends, when it came from an extension.
    pub extends_type: Option<String>,
    /// The body statements; `None` for a bodiless requirement.
    pub statements: Option<Vec<Statement>>,
    /// The access modifier, if any.
    pub access: Option<String>,
    /// Annotations rendered before the declaration, e.g. `override`.
    pub annotations: Vec<String>,
}

/// An initializer declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializerDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The parameters, in declaration order.
    pub parameters: Vec<FunctionParameter>,
    /// The constructed type; ends in `?` for a failable initializer.
    pub return_type: String,
    /// The full function type of the initializer.
    pub function_type: String,
    /// Whether the declaration was synthesized by the source compiler.
    pub is_implicit: bool,
    /// Whether the initializer is a static factory.
    pub is_static: bool,
    /// The type this initializer extends, when it came from an extension.
    pub extends_type: Option<String>,
    /// The body statements; `None` for a bodiless requirement.
    pub statements: Option<Vec<Statement>>,
    /// The access modifier, if any.
    pub access: Option<String>,
    /// Annotations rendered before the declaration.
    pub annotations: Vec<String>,
    /// A call to the superclass initializer hoisted out of the body.
    pub super_call: Option<CallExpression>,
}

/// A variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// The source range of the declaration.
    pub range: Option<SourceRange>,
    /// The variable name.
    pub identifier: String,
    /// The declared type.
    pub type_annotation: String,
    /// The initializer expression, if any.
    pub expression: Option<Expression>,
    /// The getter, for a computed property.
    pub getter: Option<Box<FunctionDeclaration>>,
    /// The setter, for a computed property.
    pub setter: Option<Box<FunctionDeclaration>>,
    /// The access modifier, if any.
    pub access: Option<String>,
    /// Whether the variable is immutable.
    pub is_let: bool,
    /// Whether the declaration was synthesized by the source compiler.
    pub is_implicit: bool,
    /// Whether the variable is a static member.
    pub is_static: bool,
    /// The type this variable extends, when it came from an extension.
    pub extends_type: Option<String>,
    /// Annotations rendered before the declaration.
    pub annotations: Vec<String>,
}

/// A `do` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The block body.
    pub statements: Vec<Statement>,
}

/// A `catch` clause following a `do` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The caught-error binding, if the clause declares one.
    pub variable: Option<VariableDeclaration>,
    /// The clause body.
    pub statements: Vec<Statement>,
}

/// A for-each loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForEachStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The collection being iterated.
    pub collection: Expression,
    /// The loop variable pattern.
    pub variable: Expression,
    /// The loop body.
    pub statements: Vec<Statement>,
}

/// A while loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The loop condition.
    pub expression: Expression,
    /// The loop body.
    pub statements: Vec<Statement>,
}

/// A single condition of an if (or guard) statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IfCondition {
    /// A boolean condition.
    Condition(Expression),
    /// An optional-binding (`if let`) condition.
    Declaration(VariableDeclaration),
}

/// An if (or guard) statement.
///
/// Else-if chains are encoded as a nested [`IfStatement`] in
/// [`else_statement`](Self::else_statement); a terminal `else` block is an
/// if statement with no conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The conditions, all of which must hold.
    pub conditions: Vec<IfCondition>,
    /// Whether this is a guard statement (the body runs when the conditions
    /// fail).
    pub is_guard: bool,
    /// The branch body.
    pub statements: Vec<Statement>,
    /// The else branch, itself an if statement.
    pub else_statement: Option<Box<IfStatement>>,
}

/// A single case of a switch statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// The expressions matched by this case; empty for `default`.
    pub expressions: Vec<Expression>,
    /// The case body; never empty in frontend-produced trees.
    pub statements: Vec<Statement>,
}

/// A switch statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// When present, the statement form this switch converts to as a target
    /// `when` expression: a return, an assignment, or a collapsed variable
    /// declaration. Set by the `SwitchesToExpressions` pass and consumed by
    /// the renderer.
    pub converts_to_expression: Option<Box<Statement>>,
    /// The subject expression.
    pub expression: Expression,
    /// The cases, in declaration order.
    pub cases: Vec<SwitchCase>,
}

/// A deferred block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The deferred body.
    pub statements: Vec<Statement>,
}

/// A throw statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The thrown expression.
    pub expression: Expression,
}

/// A return statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The returned expression; `None` for a bare return.
    pub expression: Option<Expression>,
    /// The label of the enclosing construct being returned from, if any.
    pub label: Option<String>,
}

/// A break statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
}

/// A continue statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
}

/// An assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The assignment target.
    pub left: Expression,
    /// The assigned value.
    pub right: Expression,
}

/// An expression evaluated for its effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    /// The source range of the statement.
    pub range: Option<SourceRange>,
    /// The expression.
    pub expression: Expression,
}

/// A comment carried through translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentStatement {
    /// The source range of the comment.
    pub range: Option<SourceRange>,
    /// The comment text, without delimiters.
    pub text: String,
}

/// A construct that could not be translated.
///
/// Passes treat error statements as opaque; the renderer emits them as
/// comments rather than failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorStatement {
    /// The source range of the untranslatable construct.
    pub range: Option<SourceRange>,
}

/// A label paired with a type, as used by closure parameters and enum
/// associated values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledType {
    /// The label; `None` when unlabeled.
    pub label: Option<String>,
    /// The type.
    pub type_name: String,
}
