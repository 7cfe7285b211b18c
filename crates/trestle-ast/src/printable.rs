//! A printable projection of the tree, for diagnostics and test output.

use std::fmt;

use crate::Document;
use crate::expression::Expression;
use crate::statement::IfCondition;
use crate::statement::IfStatement;
use crate::statement::Statement;
use crate::statement::VariableDeclaration;

/// A node of the printable projection: a label plus ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableTree {
    /// The node label.
    pub label: String,
    /// The child nodes, in source order.
    pub children: Vec<PrintableTree>,
}

impl PrintableTree {
    /// Creates a leaf node.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with children.
    pub fn node(label: impl Into<String>, children: Vec<PrintableTree>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Writes the node and its children at the given depth.
    fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        writeln!(f, "{label}", label = self.label)?;
        for child in &self.children {
            child.write(f, depth + 1)?;
        }

        Ok(())
    }
}

impl fmt::Display for PrintableTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}

impl Document {
    /// Gets the printable projection of the document.
    pub fn printable(&self) -> PrintableTree {
        let mut children = Vec::new();
        children.push(PrintableTree::node(
            "declarations",
            self.declarations.iter().map(Statement::printable).collect(),
        ));
        children.push(PrintableTree::node(
            "statements",
            self.statements.iter().map(Statement::printable).collect(),
        ));
        PrintableTree::node(format!("document {path}", path = self.path), children)
    }
}

/// Builds the projection of a statement list.
fn statements(statements: &[Statement]) -> Vec<PrintableTree> {
    statements.iter().map(Statement::printable).collect()
}

/// Builds the projection of a variable declaration.
fn variable(declaration: &VariableDeclaration) -> PrintableTree {
    let keyword = if declaration.is_let { "let" } else { "var" };
    let mut children = Vec::new();
    if let Some(expression) = &declaration.expression {
        children.push(expression.printable());
    }
    if let Some(getter) = &declaration.getter {
        children.push(PrintableTree::node(
            "get",
            statements(getter.statements.as_deref().unwrap_or(&[])),
        ));
    }
    if let Some(setter) = &declaration.setter {
        children.push(PrintableTree::node(
            "set",
            statements(setter.statements.as_deref().unwrap_or(&[])),
        ));
    }
    PrintableTree::node(
        format!(
            "{keyword} {identifier}: {ty}",
            identifier = declaration.identifier,
            ty = declaration.type_annotation
        ),
        children,
    )
}

/// Builds the projection of an if statement, including its else chain.
fn if_statement(statement: &IfStatement) -> PrintableTree {
    let label = if statement.is_guard { "guard" } else { "if" };
    let mut children = vec![PrintableTree::node(
        "conditions",
        statement
            .conditions
            .iter()
            .map(|condition| match condition {
                IfCondition::Condition(expression) => expression.printable(),
                IfCondition::Declaration(declaration) => variable(declaration),
            })
            .collect(),
    )];
    children.push(PrintableTree::node("then", statements(&statement.statements)));
    if let Some(else_statement) = &statement.else_statement {
        children.push(PrintableTree::node(
            "else",
            vec![if_statement(else_statement)],
        ));
    }
    PrintableTree::node(label, children)
}

impl Statement {
    /// Gets the printable projection of the statement.
    pub fn printable(&self) -> PrintableTree {
        match self {
            Self::Import(s) => PrintableTree::leaf(format!("import {module}", module = s.module)),
            Self::Typealias(s) => PrintableTree::leaf(format!(
                "typealias {identifier} = {ty}",
                identifier = s.identifier,
                ty = s.type_name
            )),
            Self::Extension(s) => PrintableTree::node(
                format!("extension {ty}", ty = s.extended_type),
                statements(&s.members),
            ),
            Self::Class(s) => PrintableTree::node(
                format!("class {name}", name = s.name),
                statements(&s.members),
            ),
            Self::Struct(s) => PrintableTree::node(
                format!("struct {name}", name = s.name),
                statements(&s.members),
            ),
            Self::Enum(s) => {
                let mut children: Vec<_> = s
                    .elements
                    .iter()
                    .map(|element| {
                        let mut element_children = Vec::new();
                        if let Some(raw_value) = &element.raw_value {
                            element_children.push(raw_value.printable());
                        }
                        PrintableTree::node(
                            format!("case {name}", name = element.name),
                            element_children,
                        )
                    })
                    .collect();
                children.extend(statements(&s.members));
                PrintableTree::node(format!("enum {name}", name = s.name), children)
            }
            Self::Protocol(s) => PrintableTree::node(
                format!("protocol {name}", name = s.name),
                statements(&s.members),
            ),
            Self::CompanionObject(s) => {
                PrintableTree::node("companion object", statements(&s.members))
            }
            Self::Function(s) => PrintableTree::node(
                format!(
                    "function {prefix}: {ty}",
                    prefix = s.prefix,
                    ty = s.function_type
                ),
                statements(s.statements.as_deref().unwrap_or(&[])),
            ),
            Self::Initializer(s) => PrintableTree::node(
                format!("initializer: {ty}", ty = s.function_type),
                statements(s.statements.as_deref().unwrap_or(&[])),
            ),
            Self::Variable(s) => variable(s),
            Self::Do(s) => PrintableTree::node("do", statements(&s.statements)),
            Self::Catch(s) => PrintableTree::node("catch", statements(&s.statements)),
            Self::ForEach(s) => PrintableTree::node(
                "for-each",
                vec![
                    PrintableTree::node("variable", vec![s.variable.printable()]),
                    PrintableTree::node("collection", vec![s.collection.printable()]),
                    PrintableTree::node("body", statements(&s.statements)),
                ],
            ),
            Self::While(s) => PrintableTree::node(
                "while",
                vec![
                    s.expression.printable(),
                    PrintableTree::node("body", statements(&s.statements)),
                ],
            ),
            Self::If(s) => if_statement(s),
            Self::Switch(s) => PrintableTree::node(
                "switch",
                std::iter::once(s.expression.printable())
                    .chain(s.cases.iter().map(|case| {
                        let mut children: Vec<_> =
                            case.expressions.iter().map(Expression::printable).collect();
                        children.push(PrintableTree::node("body", statements(&case.statements)));
                        PrintableTree::node(
                            if case.expressions.is_empty() {
                                "default"
                            } else {
                                "case"
                            },
                            children,
                        )
                    }))
                    .collect(),
            ),
            Self::Defer(s) => PrintableTree::node("defer", statements(&s.statements)),
            Self::Throw(s) => PrintableTree::node("throw", vec![s.expression.printable()]),
            Self::Return(s) => PrintableTree::node(
                "return",
                s.expression.iter().map(Expression::printable).collect(),
            ),
            Self::Break(_) => PrintableTree::leaf("break"),
            Self::Continue(_) => PrintableTree::leaf("continue"),
            Self::Assignment(s) => PrintableTree::node(
                "assignment",
                vec![s.left.printable(), s.right.printable()],
            ),
            Self::Expression(s) => s.expression.printable(),
            Self::Comment(s) => PrintableTree::leaf(format!("comment: {text}", text = s.text)),
            Self::Error(_) => PrintableTree::leaf("error"),
        }
    }
}

impl Expression {
    /// Gets the printable projection of the expression.
    pub fn printable(&self) -> PrintableTree {
        match self {
            Self::Template(e) => PrintableTree::node(
                format!("template \"{pattern}\"", pattern = e.pattern),
                e.matches
                    .iter()
                    .map(|binding| {
                        PrintableTree::node(
                            binding.name.clone(),
                            vec![binding.expression.printable()],
                        )
                    })
                    .collect(),
            ),
            Self::LiteralCode(e) => {
                PrintableTree::leaf(format!("literal code \"{code}\"", code = e.string))
            }
            Self::LiteralDeclaration(e) => {
                PrintableTree::leaf(format!("literal declaration \"{code}\"", code = e.string))
            }
            Self::Parenthesized(e) => {
                PrintableTree::node("parentheses", vec![e.expression.printable()])
            }
            Self::ForceValue(e) => {
                PrintableTree::node("force-value", vec![e.expression.printable()])
            }
            Self::Optional(e) => PrintableTree::node("optional", vec![e.expression.printable()]),
            Self::DeclarationReference(e) => PrintableTree::leaf(match &e.type_name {
                Some(ty) => format!("reference {identifier}: {ty}", identifier = e.identifier),
                None => format!("reference {identifier}", identifier = e.identifier),
            }),
            Self::Type(e) => PrintableTree::leaf(format!("type {ty}", ty = e.type_name)),
            Self::Subscript(e) => PrintableTree::node(
                "subscript",
                vec![e.subscripted.printable(), e.index.printable()],
            ),
            Self::Array(e) => PrintableTree::node(
                "array",
                e.elements.iter().map(Expression::printable).collect(),
            ),
            Self::Dictionary(e) => PrintableTree::node(
                "dictionary",
                e.keys
                    .iter()
                    .zip(&e.values)
                    .map(|(key, value)| {
                        PrintableTree::node("entry", vec![key.printable(), value.printable()])
                    })
                    .collect(),
            ),
            Self::Return(e) => PrintableTree::node(
                "return-expression",
                e.expression.iter().map(|inner| inner.printable()).collect(),
            ),
            Self::Dot(e) => PrintableTree::node("dot", vec![e.left.printable(), e.right.printable()]),
            Self::BinaryOperator(e) => PrintableTree::node(
                format!("operator {operator}", operator = e.operator),
                vec![e.left.printable(), e.right.printable()],
            ),
            Self::PrefixUnary(e) => PrintableTree::node(
                format!("prefix {operator}", operator = e.operator),
                vec![e.subexpression.printable()],
            ),
            Self::PostfixUnary(e) => PrintableTree::node(
                format!("postfix {operator}", operator = e.operator),
                vec![e.subexpression.printable()],
            ),
            Self::If(e) => PrintableTree::node(
                "if-expression",
                vec![
                    e.condition.printable(),
                    e.then_expression.printable(),
                    e.else_expression.printable(),
                ],
            ),
            Self::Call(e) => PrintableTree::node(
                "call",
                vec![e.function.printable(), e.parameters.printable()],
            ),
            Self::Closure(e) => PrintableTree::node(
                "closure",
                statements_projection(&e.statements),
            ),
            Self::LiteralInt(e) => PrintableTree::leaf(format!("int {value}", value = e.value)),
            Self::LiteralUInt(e) => PrintableTree::leaf(format!("uint {value}", value = e.value)),
            Self::LiteralDouble(e) => {
                PrintableTree::leaf(format!("double {value}", value = e.value))
            }
            Self::LiteralFloat(e) => PrintableTree::leaf(format!("float {value}", value = e.value)),
            Self::LiteralBool(e) => PrintableTree::leaf(format!("bool {value}", value = e.value)),
            Self::LiteralString(e) => {
                PrintableTree::leaf(format!("string \"{value}\"", value = e.value))
            }
            Self::LiteralCharacter(e) => {
                PrintableTree::leaf(format!("character '{value}'", value = e.value))
            }
            Self::Nil(_) => PrintableTree::leaf("nil"),
            Self::InterpolatedString(e) => PrintableTree::node(
                "interpolated string",
                e.expressions.iter().map(Expression::printable).collect(),
            ),
            Self::Tuple(e) => PrintableTree::node(
                "tuple",
                e.pairs
                    .iter()
                    .map(|pair| match &pair.label {
                        Some(label) => {
                            PrintableTree::node(label.clone(), vec![pair.expression.printable()])
                        }
                        None => pair.expression.printable(),
                    })
                    .collect(),
            ),
            Self::TupleShuffle(e) => PrintableTree::node(
                "tuple-shuffle",
                e.expressions.iter().map(Expression::printable).collect(),
            ),
            Self::Error(_) => PrintableTree::leaf("error"),
        }
    }
}

/// Builds the projection of a statement list owned by an expression.
fn statements_projection(list: &[Statement]) -> Vec<PrintableTree> {
    list.iter().map(Statement::printable).collect()
}
