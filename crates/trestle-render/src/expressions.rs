//! Expression rendering.
//!
//! Expressions render to bare strings with no leading or trailing
//! whitespace; only multi-line closures consult the indentation they are
//! rendered at.

use itertools::Itertools;
use trestle_ast::CallExpression;
use trestle_ast::ClosureExpression;
use trestle_ast::Diagnostic;
use trestle_ast::Diagnostics;
use trestle_ast::Expression;
use trestle_ast::Statement;
use trestle_ast::TupleShuffleExpression;
use trestle_ast::TupleShuffleIndex;

use crate::RenderError;
use crate::Renderer;

/// The identifier rendering diagnostics are attributed to.
const ID: &str = "Renderer";

/// Creates the untranslatable-expression diagnostic.
fn untranslatable_expression(range: Option<trestle_ast::SourceRange>) -> Diagnostic {
    Diagnostic::error("untranslatable expression")
        .with_pass(ID)
        .with_range(range)
}

/// Escapes a string literal's contents.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a character literal's contents.
fn escape_character(value: char) -> String {
    match value {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        c => c.to_string(),
    }
}

/// Renders a floating point value with an explicit decimal point.
fn render_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl Renderer<'_> {
    /// Renders one expression to a bare string.
    pub(crate) fn render_expression(
        &self,
        expression: &Expression,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        match expression {
            Expression::Template(template) => {
                // Longer names substitute first so `_a` never clobbers the
                // `_a` inside `_ab`.
                let mut bindings = template.matches.iter().collect::<Vec<_>>();
                bindings.sort_by_key(|binding| std::cmp::Reverse(binding.name.len()));

                let mut text = template.pattern.clone();
                for binding in bindings {
                    let rendered =
                        self.render_expression(&binding.expression, indentation, diagnostics)?;
                    text = text.replace(&binding.name, &rendered);
                }
                Ok(text)
            }
            Expression::LiteralCode(code) | Expression::LiteralDeclaration(code) => {
                Ok(code.string.clone())
            }
            Expression::Parenthesized(parenthesized) => Ok(format!(
                "({inner})",
                inner =
                    self.render_expression(&parenthesized.expression, indentation, diagnostics)?
            )),
            Expression::ForceValue(force) => Ok(format!(
                "{inner}!!",
                inner = self.render_expression(&force.expression, indentation, diagnostics)?
            )),
            Expression::Optional(optional) => Ok(format!(
                "{inner}?",
                inner = self.render_expression(&optional.expression, indentation, diagnostics)?
            )),
            Expression::DeclarationReference(reference) => Ok(reference.identifier.clone()),
            Expression::Type(ty) => Ok(self.render_type(&ty.type_name)),
            Expression::Subscript(subscript) => Ok(format!(
                "{base}[{index}]",
                base = self.render_expression(&subscript.subscripted, indentation, diagnostics)?,
                index = self.render_expression(&subscript.index, indentation, diagnostics)?
            )),
            Expression::Array(array) => {
                if array.elements.is_empty()
                    && let Some(element_type) = array
                        .type_name
                        .as_deref()
                        .and_then(|name| self.element_type(name))
                {
                    return Ok(format!("mutableListOf<{element_type}>()"));
                }
                let mut elements = Vec::with_capacity(array.elements.len());
                for element in &array.elements {
                    elements.push(self.render_expression(element, indentation, diagnostics)?);
                }
                Ok(format!(
                    "mutableListOf({elements})",
                    elements = elements.join(", ")
                ))
            }
            Expression::Dictionary(dictionary) => {
                if dictionary.keys.is_empty()
                    && let Some(entry_types) = dictionary
                        .type_name
                        .as_deref()
                        .and_then(|name| self.entry_types(name))
                {
                    return Ok(format!("mutableMapOf<{entry_types}>()"));
                }
                let mut entries = Vec::with_capacity(dictionary.keys.len());
                for (key, value) in dictionary.keys.iter().zip(&dictionary.values) {
                    entries.push(format!(
                        "{key} to {value}",
                        key = self.render_expression(key, indentation, diagnostics)?,
                        value = self.render_expression(value, indentation, diagnostics)?
                    ));
                }
                Ok(format!("mutableMapOf({entries})", entries = entries.join(", ")))
            }
            Expression::Return(return_expression) => match &return_expression.expression {
                Some(inner) => Ok(format!(
                    "return {inner}",
                    inner = self.render_expression(inner, indentation, diagnostics)?
                )),
                None => Ok("return".to_string()),
            },
            Expression::Dot(dot) => Ok(format!(
                "{left}.{right}",
                left = self.render_expression(&dot.left, indentation, diagnostics)?,
                right = self.render_expression(&dot.right, indentation, diagnostics)?
            )),
            Expression::BinaryOperator(binary) => Ok(format!(
                "{left} {operator} {right}",
                left = self.render_expression(&binary.left, indentation, diagnostics)?,
                operator = binary.operator,
                right = self.render_expression(&binary.right, indentation, diagnostics)?
            )),
            Expression::PrefixUnary(unary) => Ok(format!(
                "{operator}{operand}",
                operator = unary.operator,
                operand = self.render_expression(&unary.subexpression, indentation, diagnostics)?
            )),
            Expression::PostfixUnary(unary) => Ok(format!(
                "{operand}{operator}",
                operand = self.render_expression(&unary.subexpression, indentation, diagnostics)?,
                operator = unary.operator
            )),
            Expression::If(ternary) => Ok(format!(
                "if ({condition}) {then} else {otherwise}",
                condition = self.render_expression(&ternary.condition, indentation, diagnostics)?,
                then =
                    self.render_expression(&ternary.then_expression, indentation, diagnostics)?,
                otherwise =
                    self.render_expression(&ternary.else_expression, indentation, diagnostics)?
            )),
            Expression::Call(call) => self.render_call(call, indentation, diagnostics),
            Expression::Closure(closure) => self.render_closure(closure, indentation, diagnostics),
            Expression::LiteralInt(literal) => Ok(literal.value.to_string()),
            Expression::LiteralUInt(literal) => Ok(format!("{value}u", value = literal.value)),
            Expression::LiteralDouble(literal) => Ok(render_double(literal.value)),
            Expression::LiteralFloat(literal) => {
                Ok(format!("{value}f", value = render_double(literal.value.into())))
            }
            Expression::LiteralBool(literal) => Ok(literal.value.to_string()),
            Expression::LiteralString(literal) => {
                Ok(format!("\"{value}\"", value = escape_string(&literal.value)))
            }
            Expression::LiteralCharacter(literal) => Ok(format!(
                "'{value}'",
                value = escape_character(literal.value)
            )),
            Expression::Nil(_) => Ok("null".to_string()),
            Expression::InterpolatedString(interpolated) => {
                let mut result = String::from("\"");
                for segment in &interpolated.expressions {
                    match segment {
                        Expression::LiteralString(literal) => {
                            result.push_str(&escape_string(&literal.value));
                        }
                        expression => {
                            result.push_str(&format!(
                                "${{{inner}}}",
                                inner =
                                    self.render_expression(expression, indentation, diagnostics)?
                            ));
                        }
                    }
                }
                result.push('"');
                Ok(result)
            }
            Expression::Tuple(tuple) => {
                let mut elements = Vec::with_capacity(tuple.pairs.len());
                for pair in &tuple.pairs {
                    elements.push(self.render_expression(
                        &pair.expression,
                        indentation,
                        diagnostics,
                    )?);
                }
                Ok(format!("({elements})", elements = elements.join(", ")))
            }
            Expression::TupleShuffle(shuffle) => Ok(format!(
                "({arguments})",
                arguments = self.render_shuffle(shuffle, None, indentation, diagnostics)?
            )),
            Expression::Error(error) => {
                diagnostics.add(untranslatable_expression(error.range));
                Ok("/* error: untranslatable expression */".to_string())
            }
        }
    }

    /// Gets the rendered element type of an array type string.
    fn element_type(&self, type_name: &str) -> Option<String> {
        use trestle_ast::types::Type;
        match Type::parse(type_name).ok()? {
            Type::Array(element) => Some(self.render_type(&element.to_string())),
            Type::Generic { base, arguments }
                if base == "ArrayClass" && arguments.len() == 1 =>
            {
                Some(self.render_type(&arguments[0].to_string()))
            }
            _ => None,
        }
    }

    /// Gets the rendered `K, V` entry types of a dictionary type string.
    fn entry_types(&self, type_name: &str) -> Option<String> {
        use trestle_ast::types::Type;
        match Type::parse(type_name).ok()? {
            Type::Dictionary(key, value) => Some(format!(
                "{key}, {value}",
                key = self.render_type(&key.to_string()),
                value = self.render_type(&value.to_string())
            )),
            Type::Generic { base, arguments }
                if base == "DictionaryClass" && arguments.len() == 2 =>
            {
                Some(format!(
                    "{key}, {value}",
                    key = self.render_type(&arguments[0].to_string()),
                    value = self.render_type(&arguments[1].to_string())
                ))
            }
            _ => None,
        }
    }

    /// Renders a call, consulting the recorded function translations for
    /// the target name and argument labels.
    fn render_call(
        &self,
        call: &CallExpression,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let translation = self.find_translation(call);

        let function = match (&*call.function, translation) {
            (Expression::DeclarationReference(_), Some(translation)) => {
                translation.target_name.clone()
            }
            (Expression::Dot(dot), Some(translation)) => format!(
                "{left}.{name}",
                left = self.render_expression(&dot.left, indentation, diagnostics)?,
                name = translation.target_name
            ),
            (function, _) => self.render_expression(function, indentation, diagnostics)?,
        };

        let labels = translation.map(|t| t.parameters.as_slice());
        Ok(format!(
            "{function}({arguments})",
            arguments = self.render_arguments(&call.parameters, labels, indentation, diagnostics)?
        ))
    }

    /// Finds the recorded translation matching a call's name, labels, and
    /// function type.
    fn find_translation(&self, call: &CallExpression) -> Option<&trestle_transform::FunctionTranslation> {
        let name = match &*call.function {
            Expression::DeclarationReference(reference) => &reference.identifier,
            Expression::Dot(dot) => match &*dot.right {
                Expression::DeclarationReference(reference) => &reference.identifier,
                _ => return None,
            },
            _ => return None,
        };
        let function_type = call.function.type_name()?;

        let labels = match &*call.parameters {
            Expression::Tuple(tuple) => tuple
                .pairs
                .iter()
                .map(|pair| format!("{label}:", label = pair.label.as_deref().unwrap_or("_")))
                .collect::<String>(),
            _ => return None,
        };
        let source_name = format!("{name}({labels})");

        self.context()
            .find_function_translation(&source_name, &function_type)
    }

    /// Renders a call's arguments without the surrounding parentheses.
    ///
    /// When translation labels are supplied, arguments that were labeled in
    /// the source become named arguments with the target's internal names.
    pub(crate) fn render_arguments(
        &self,
        parameters: &Expression,
        labels: Option<&[String]>,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        match parameters {
            Expression::Tuple(tuple) => {
                let mut arguments = Vec::with_capacity(tuple.pairs.len());
                for (i, pair) in tuple.pairs.iter().enumerate() {
                    let rendered =
                        self.render_expression(&pair.expression, indentation, diagnostics)?;
                    let label = pair
                        .label
                        .as_ref()
                        .map(|label| {
                            labels
                                .and_then(|labels| labels.get(i))
                                .unwrap_or(label)
                                .clone()
                        });
                    arguments.push(match label {
                        Some(label) => format!("{label} = {rendered}"),
                        None => rendered,
                    });
                }
                Ok(arguments.join(", "))
            }
            Expression::TupleShuffle(shuffle) => {
                self.render_shuffle(shuffle, labels, indentation, diagnostics)
            }
            single => self.render_expression(single, indentation, diagnostics),
        }
    }

    /// Renders a tuple shuffle's supplied expressions in declaration
    /// order.
    fn render_shuffle(
        &self,
        shuffle: &TupleShuffleExpression,
        labels: Option<&[String]>,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let mut arguments = Vec::with_capacity(shuffle.expressions.len());
        let mut next = 0usize;
        for (i, index) in shuffle.indices.iter().enumerate() {
            match index {
                TupleShuffleIndex::Absent => {}
                TupleShuffleIndex::Present => {
                    let Some(expression) = shuffle.expressions.get(next) else {
                        return Err(RenderError::new(
                            "tuple shuffle is missing a supplied expression",
                            shuffle.range,
                        ));
                    };
                    next += 1;
                    let rendered = self.render_expression(expression, indentation, diagnostics)?;
                    let label = labels
                        .and_then(|labels| labels.get(i).cloned())
                        .or_else(|| shuffle.labels.get(i).cloned());
                    arguments.push(match label {
                        Some(label) => format!("{label} = {rendered}"),
                        None => rendered,
                    });
                }
                TupleShuffleIndex::Variadic { count } => {
                    for _ in 0..*count {
                        let Some(expression) = shuffle.expressions.get(next) else {
                            return Err(RenderError::new(
                                "tuple shuffle is missing a variadic expression",
                                shuffle.range,
                            ));
                        };
                        next += 1;
                        arguments.push(self.render_expression(
                            expression,
                            indentation,
                            diagnostics,
                        )?);
                    }
                }
            }
        }
        Ok(arguments.join(", "))
    }

    /// Renders a closure, on one line when its body is a single expression
    /// statement.
    fn render_closure(
        &self,
        closure: &ClosureExpression,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let parameters = closure
            .parameters
            .iter()
            .map(|parameter| parameter.label.as_deref().unwrap_or("_"))
            .join(", ");

        if let [Statement::Expression(single)] = closure.statements.as_slice() {
            let arrow = if parameters.is_empty() {
                String::new()
            } else {
                format!("{parameters} -> ")
            };
            return Ok(format!(
                "{{ {arrow}{body} }}",
                body = self.render_expression(&single.expression, indentation, diagnostics)?
            ));
        }

        let header = if parameters.is_empty() {
            "{\n".to_string()
        } else {
            format!("{{ {parameters} ->\n")
        };
        let inner = self.increase(indentation);
        let mut result = header;
        result.push_str(&self.render_statements(&closure.statements, &inner, diagnostics)?);
        result.push_str(&format!("{indentation}}}"));
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::ClosureExpression;
    use trestle_ast::DeclarationReferenceExpression;
    use trestle_ast::DictionaryExpression;
    use trestle_ast::Diagnostics;
    use trestle_ast::Expression;
    use trestle_ast::ExpressionStatement;
    use trestle_ast::InterpolatedStringExpression;
    use trestle_ast::LiteralDoubleExpression;
    use trestle_ast::LiteralIntExpression;
    use trestle_ast::LiteralStringExpression;
    use trestle_ast::ReturnStatement;
    use trestle_ast::Statement;
    use trestle_transform::TranspilationContext;

    use crate::Config;
    use crate::Renderer;

    /// Renders an expression over an empty context.
    fn render(expression: &Expression) -> String {
        let context = TranspilationContext::new();
        let renderer = Renderer::new(&context, Config::new());
        let mut diagnostics = Diagnostics::new();
        renderer
            .render_expression(expression, "", &mut diagnostics)
            .expect("the expression should render")
    }

    /// A declaration reference.
    fn reference(identifier: &str) -> Expression {
        Expression::DeclarationReference(DeclarationReferenceExpression {
            range: None,
            identifier: identifier.to_string(),
            type_name: None,
            is_standard_library: false,
            is_implicit: false,
        })
    }

    /// A string literal.
    fn string(value: &str) -> Expression {
        Expression::LiteralString(LiteralStringExpression {
            range: None,
            value: value.to_string(),
        })
    }

    #[test]
    fn literals() {
        assert_eq!(
            render(&Expression::LiteralInt(LiteralIntExpression {
                range: None,
                value: -3,
            })),
            "-3"
        );
        assert_eq!(
            render(&Expression::LiteralDouble(LiteralDoubleExpression {
                range: None,
                value: 2.0,
            })),
            "2.0"
        );
        assert_eq!(render(&string("say \"hi\"\n")), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn interpolated_strings_wrap_expressions() {
        let interpolated = Expression::InterpolatedString(InterpolatedStringExpression {
            range: None,
            expressions: vec![string("count: "), reference("count"), string("!")],
        });
        assert_eq!(render(&interpolated), "\"count: ${count}!\"");
    }

    #[test]
    fn single_expression_closures_render_inline() {
        let closure = Expression::Closure(ClosureExpression {
            range: None,
            parameters: Vec::new(),
            statements: vec![Statement::Expression(ExpressionStatement {
                range: None,
                expression: reference("it"),
            })],
            type_name: None,
        });
        assert_eq!(render(&closure), "{ it }");
    }

    #[test]
    fn multi_statement_closures_span_lines() {
        let closure = Expression::Closure(ClosureExpression {
            range: None,
            parameters: vec![trestle_ast::LabeledType {
                label: Some("x".to_string()),
                type_name: "Int".to_string(),
            }],
            statements: vec![
                Statement::Expression(ExpressionStatement {
                    range: None,
                    expression: reference("x"),
                }),
                Statement::Return(ReturnStatement {
                    range: None,
                    expression: None,
                    label: None,
                }),
            ],
            type_name: None,
        });
        assert_eq!(render(&closure), "{ x ->\n\tx\n\treturn\n}");
    }

    #[test]
    fn collections_use_the_mutable_factories() {
        let array = Expression::Array(trestle_ast::ArrayExpression {
            range: None,
            elements: Vec::new(),
            type_name: Some("[Int]".to_string()),
        });
        assert_eq!(render(&array), "mutableListOf<Int>()");

        let dictionary = Expression::Dictionary(DictionaryExpression {
            range: None,
            keys: vec![string("a")],
            values: vec![Expression::LiteralInt(LiteralIntExpression {
                range: None,
                value: 1,
            })],
            type_name: Some("[String: Int]".to_string()),
        });
        assert_eq!(render(&dictionary), "mutableMapOf(\"a\" to 1)");
    }
}
