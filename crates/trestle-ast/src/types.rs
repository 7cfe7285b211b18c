//! The structured representation of source-language types.
//!
//! The AST transports types as strings; this module parses those strings
//! into a structural [`Type`] when a pass needs to ask subtype questions or
//! take a type apart. Printing a parsed type yields a string equivalent to
//! the input up to interior whitespace.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Type names that act as supertypes of everything during template
/// matching.
const SUPERTYPE_NAMES: &[&str] = &["Any", "AnyType", "Hash", "Compare", "MyOptional"];

/// Determines if a name is one of the universal supertype names.
fn is_supertype_name(name: &str) -> bool {
    SUPERTYPE_NAMES.contains(&name)
}

/// A structured source-language type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A plain named type.
    Named(String),
    /// An optional type, `T?`.
    Optional(Box<Type>),
    /// An array type, `[T]`.
    Array(Box<Type>),
    /// A dictionary type, `[K: V]`.
    Dictionary(Box<Type>, Box<Type>),
    /// A tuple type, `(A, B)`; empty denotes `Void`.
    Tuple(Vec<TupleMember>),
    /// A function type, `(A, B) -> R`.
    Function {
        /// The parameter types.
        parameters: Vec<Type>,
        /// The return type.
        return_type: Box<Type>,
    },
    /// A generic application, `Base<A, B>`.
    Generic {
        /// The base type name.
        base: String,
        /// The type arguments.
        arguments: Vec<Type>,
    },
    /// A nested type reference, `Outer.Inner`.
    Dot {
        /// The qualifying type.
        left: Box<Type>,
        /// The nested name.
        right: String,
    },
}

/// A single member of a tuple type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleMember {
    /// The member label; `None` when unlabeled.
    pub label: Option<String>,
    /// The member type.
    pub ty: Type,
}

/// An error parsing a type string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid type `{input}`: {message} (at offset {offset})")]
pub struct TypeParseError {
    /// The input that failed to parse.
    pub input: String,
    /// What went wrong.
    pub message: String,
    /// The character offset of the failure.
    pub offset: usize,
}

impl Type {
    /// Parses a type from its string form.
    ///
    /// Parsing is insensitive to interior whitespace: `[Int:String]` and
    /// `[Int : String]` produce the same value.
    pub fn parse(input: &str) -> Result<Self, TypeParseError> {
        let mut parser = Parser::new(input);
        let ty = parser.parse_type()?;
        parser.skip_whitespace();
        if !parser.is_at_end() {
            return Err(parser.error("trailing characters"));
        }

        Ok(ty)
    }

    /// Determines if this type is a structural subtype of `supertype`.
    ///
    /// The universal supertype names (`Any`, `AnyType`, `Hash`, `Compare`,
    /// `MyOptional`) match anything, except that `MyOptional` nested under
    /// an optional matches only optionals. Optionals, arrays, dictionaries,
    /// tuples, functions, and generic arguments are checked pairwise and
    /// covariantly.
    pub fn is_subtype_of(&self, supertype: &Type) -> bool {
        if self == supertype {
            return true;
        }

        // `T??` style supertypes: `MyOptional` directly under an optional
        // constrains the candidate to be optional itself.
        if let Type::Optional(inner) = supertype
            && matches!(&**inner, Type::Named(name) if name == "MyOptional")
        {
            return matches!(self, Type::Optional(_));
        }

        if let Type::Named(name) = supertype
            && is_supertype_name(name)
        {
            return true;
        }

        match (self, supertype) {
            (Type::Optional(inner), Type::Optional(super_inner)) => {
                inner.is_subtype_of(super_inner)
            }
            // A required value fits where an optional is expected.
            (_, Type::Optional(super_inner)) => self.is_subtype_of(super_inner),
            (Type::Optional(_), _) => false,
            (Type::Array(element), Type::Array(super_element)) => {
                element.is_subtype_of(super_element)
            }
            (Type::Dictionary(key, value), Type::Dictionary(super_key, super_value)) => {
                key.is_subtype_of(super_key) && value.is_subtype_of(super_value)
            }
            (Type::Tuple(members), Type::Tuple(super_members)) => {
                members.len() == super_members.len()
                    && members
                        .iter()
                        .zip(super_members)
                        .all(|(member, super_member)| member.ty.is_subtype_of(&super_member.ty))
            }
            (
                Type::Function {
                    parameters,
                    return_type,
                },
                Type::Function {
                    parameters: super_parameters,
                    return_type: super_return,
                },
            ) => {
                parameters.len() == super_parameters.len()
                    && parameters
                        .iter()
                        .zip(super_parameters)
                        .all(|(parameter, super_parameter)| {
                            parameter.is_subtype_of(super_parameter)
                        })
                    && return_type.is_subtype_of(super_return)
            }
            (
                Type::Generic { base, arguments },
                Type::Generic {
                    base: super_base,
                    arguments: super_arguments,
                },
            ) => {
                (base == super_base || is_supertype_name(super_base))
                    && arguments.len() == super_arguments.len()
                    && arguments
                        .iter()
                        .zip(super_arguments)
                        .all(|(argument, super_argument)| argument.is_subtype_of(super_argument))
            }
            // A generic application fits a bare reference to its base.
            (Type::Generic { base, .. }, Type::Named(name)) => base == name,
            _ => false,
        }
    }

    /// Determines if the type is optional at its top level.
    pub fn is_optional(&self) -> bool {
        matches!(self, Type::Optional(_))
    }
}

impl FromStr for Type {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::parse(s)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(name) => write!(f, "{name}"),
            Type::Optional(inner) => {
                if matches!(&**inner, Type::Function { .. }) {
                    write!(f, "({inner})?")
                } else {
                    write!(f, "{inner}?")
                }
            }
            Type::Array(element) => write!(f, "[{element}]"),
            Type::Dictionary(key, value) => write!(f, "[{key}: {value}]"),
            Type::Tuple(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if let Some(label) = &member.label {
                        write!(f, "{label}: ")?;
                    }
                    write!(f, "{ty}", ty = member.ty)?;
                }
                write!(f, ")")
            }
            Type::Function {
                parameters,
                return_type,
            } => {
                write!(f, "(")?;
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") -> {return_type}")
            }
            Type::Generic { base, arguments } => {
                write!(f, "{base}<")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ">")
            }
            Type::Dot { left, right } => write!(f, "{left}.{right}"),
        }
    }
}

/// A recursive-descent parser over a type string.
struct Parser {
    /// The input characters.
    chars: Vec<char>,
    /// The current offset into [`chars`](Self::chars).
    offset: usize,
    /// The original input, kept for error reporting.
    input: String,
}

impl Parser {
    /// Creates a parser over the given input.
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            offset: 0,
            input: input.to_string(),
        }
    }

    /// Builds an error at the current offset.
    fn error(&self, message: impl Into<String>) -> TypeParseError {
        TypeParseError {
            input: self.input.clone(),
            message: message.into(),
            offset: self.offset,
        }
    }

    /// Determines if the whole input has been consumed.
    fn is_at_end(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// Peeks at the current character.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// Advances past the current character.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.offset += 1;
        }
        c
    }

    /// Skips any whitespace.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.offset += 1;
        }
    }

    /// Consumes the given character, or fails.
    fn expect(&mut self, expected: char) -> Result<(), TypeParseError> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.offset += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected `{expected}`")))
        }
    }

    /// Consumes the given character if it is next.
    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `->` if it is next.
    fn eat_arrow(&mut self) -> bool {
        self.skip_whitespace();
        if self.chars.get(self.offset) == Some(&'-') && self.chars.get(self.offset + 1) == Some(&'>')
        {
            self.offset += 2;
            true
        } else {
            false
        }
    }

    /// Parses an identifier.
    fn parse_identifier(&mut self) -> Result<String, TypeParseError> {
        self.skip_whitespace();
        let start = self.offset;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.offset += 1;
        }
        if self.offset == start {
            return Err(self.error("expected an identifier"));
        }

        Ok(self.chars[start..self.offset].iter().collect())
    }

    /// Parses a full type, including postfix `?` and `.Name` applications.
    fn parse_type(&mut self) -> Result<Type, TypeParseError> {
        let mut ty = self.parse_primary()?;

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('?') => {
                    self.bump();
                    ty = Type::Optional(Box::new(ty));
                }
                Some('.') => {
                    self.bump();
                    let right = self.parse_identifier()?;
                    ty = Type::Dot {
                        left: Box::new(ty),
                        right,
                    };
                }
                _ => break,
            }
        }

        Ok(ty)
    }

    /// Parses a primary type: a bracket form, a paren form, or a name with
    /// optional generic arguments.
    fn parse_primary(&mut self) -> Result<Type, TypeParseError> {
        self.skip_whitespace();
        match self.peek() {
            Some('[') => {
                self.bump();
                let first = self.parse_type()?;
                if self.eat(':') {
                    let value = self.parse_type()?;
                    self.expect(']')?;
                    Ok(Type::Dictionary(Box::new(first), Box::new(value)))
                } else {
                    self.expect(']')?;
                    Ok(Type::Array(Box::new(first)))
                }
            }
            Some('(') => {
                self.bump();
                let mut members = Vec::new();
                self.skip_whitespace();
                if !self.eat(')') {
                    loop {
                        members.push(self.parse_tuple_member()?);
                        if !self.eat(',') {
                            break;
                        }
                    }
                    self.expect(')')?;
                }

                if self.eat_arrow() {
                    let return_type = self.parse_type()?;
                    return Ok(Type::Function {
                        parameters: members.into_iter().map(|member| member.ty).collect(),
                        return_type: Box::new(return_type),
                    });
                }

                // `(T)` is just `T`; keep genuine tuples as tuples.
                if members.len() == 1 && members[0].label.is_none() {
                    Ok(members.remove(0).ty)
                } else {
                    Ok(Type::Tuple(members))
                }
            }
            Some(c) if c.is_alphanumeric() || c == '_' => {
                let name = self.parse_identifier()?;
                self.skip_whitespace();
                if self.peek() == Some('<') {
                    self.bump();
                    let mut arguments = Vec::new();
                    loop {
                        arguments.push(self.parse_type()?);
                        if !self.eat(',') {
                            break;
                        }
                    }
                    self.expect('>')?;
                    Ok(Type::Generic {
                        base: name,
                        arguments,
                    })
                } else {
                    Ok(Type::Named(name))
                }
            }
            _ => Err(self.error("expected a type")),
        }
    }

    /// Parses one tuple member, with an optional `label:` prefix.
    fn parse_tuple_member(&mut self) -> Result<TupleMember, TypeParseError> {
        self.skip_whitespace();
        let checkpoint = self.offset;
        if let Ok(label) = self.parse_identifier() {
            self.skip_whitespace();
            // A `:` here means the identifier was a label, unless this is
            // the key of a dictionary type, which cannot appear unbracketed.
            if self.peek() == Some(':') {
                self.bump();
                let ty = self.parse_type()?;
                return Ok(TupleMember {
                    label: Some(label),
                    ty,
                });
            }
        }

        self.offset = checkpoint;
        let ty = self.parse_type()?;
        Ok(TupleMember { label: None, ty })
    }
}
