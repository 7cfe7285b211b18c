//! Statement rendering.
//!
//! Every statement renders with its leading indentation and a trailing
//! newline. Multi-line constructs indent their bodies one unit deeper and
//! close the brace back at their own level.

use itertools::Itertools;
use trestle_ast::CatchStatement;
use trestle_ast::ClassDeclaration;
use trestle_ast::CompanionObject;
use trestle_ast::Diagnostic;
use trestle_ast::Diagnostics;
use trestle_ast::EnumDeclaration;
use trestle_ast::Expression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::FunctionParameter;
use trestle_ast::IfCondition;
use trestle_ast::IfStatement;
use trestle_ast::InitializerDeclaration;
use trestle_ast::Statement;
use trestle_ast::StructDeclaration;
use trestle_ast::SwitchStatement;
use trestle_ast::VariableDeclaration;

use crate::RenderError;
use crate::Renderer;

/// The identifier rendering diagnostics are attributed to.
const ID: &str = "Renderer";

/// Creates the untranslatable-statement diagnostic.
fn untranslatable_statement(range: Option<trestle_ast::SourceRange>) -> Diagnostic {
    Diagnostic::error("untranslatable statement")
        .with_pass(ID)
        .with_range(range)
}

/// Creates the deferred-block note.
fn deferred_block(range: Option<trestle_ast::SourceRange>) -> Diagnostic {
    Diagnostic::warning("deferred block renders in place, not at the end of its scope")
        .with_pass(ID)
        .with_range(range)
}

/// Creates the unlowered-binding diagnostic.
fn unlowered_binding(range: Option<trestle_ast::SourceRange>) -> Diagnostic {
    Diagnostic::error("if statement still carries an optional binding")
        .with_pass(ID)
        .with_range(range)
        .with_detail("the rearrange-if-lets rewrite should have replaced this with a null check")
}

impl Renderer<'_> {
    /// Renders a statement list at the given indentation.
    pub(crate) fn render_statements(
        &self,
        statements: &[Statement],
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let mut result = String::new();
        for statement in statements {
            result.push_str(&self.render_statement(statement, indentation, diagnostics)?);
        }
        Ok(result)
    }

    /// Renders one statement, with indentation and a trailing newline.
    pub(crate) fn render_statement(
        &self,
        statement: &Statement,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        match statement {
            // Source imports have no target equivalent; the target's own
            // imports come from templates.
            Statement::Import(_) => Ok(String::new()),
            Statement::Typealias(declaration) => Ok(format!(
                "{indentation}typealias {identifier} = {ty}\n",
                identifier = declaration.identifier,
                ty = self.render_type(&declaration.type_name)
            )),
            Statement::Extension(declaration) => Err(RenderError::new(
                "extension was not flattened before rendering",
                declaration.range,
            )),
            Statement::Class(declaration) => {
                self.render_class(declaration, indentation, diagnostics)
            }
            Statement::Struct(declaration) => {
                self.render_struct(declaration, indentation, diagnostics)
            }
            Statement::Enum(declaration) => {
                self.render_enum(declaration, indentation, diagnostics)
            }
            Statement::Protocol(declaration) => {
                let inner = self.increase(indentation);
                Ok(format!(
                    "{indentation}interface {name} {{\n{members}{indentation}}}\n",
                    name = declaration.name,
                    members = self.render_statements(&declaration.members, &inner, diagnostics)?
                ))
            }
            Statement::CompanionObject(object) => {
                self.render_companion_object(object, indentation, diagnostics)
            }
            Statement::Function(declaration) => {
                self.render_function(declaration, indentation, diagnostics)
            }
            Statement::Initializer(declaration) => {
                self.render_initializer(declaration, indentation, diagnostics)
            }
            Statement::Variable(declaration) => {
                self.render_variable(declaration, indentation, diagnostics)
            }
            Statement::Do(statement) => {
                let inner = self.increase(indentation);
                Ok(format!(
                    "{indentation}try {{\n{body}{indentation}}}\n",
                    body = self.render_statements(&statement.statements, &inner, diagnostics)?
                ))
            }
            Statement::Catch(statement) => self.render_catch(statement, indentation, diagnostics),
            Statement::ForEach(statement) => {
                let inner = self.increase(indentation);
                Ok(format!(
                    "{indentation}for ({variable} in {collection}) {{\n{body}{indentation}}}\n",
                    variable =
                        self.render_expression(&statement.variable, indentation, diagnostics)?,
                    collection =
                        self.render_expression(&statement.collection, indentation, diagnostics)?,
                    body = self.render_statements(&statement.statements, &inner, diagnostics)?
                ))
            }
            Statement::While(statement) => {
                let inner = self.increase(indentation);
                Ok(format!(
                    "{indentation}while ({condition}) {{\n{body}{indentation}}}\n",
                    condition =
                        self.render_expression(&statement.expression, indentation, diagnostics)?,
                    body = self.render_statements(&statement.statements, &inner, diagnostics)?
                ))
            }
            Statement::If(statement) => {
                let chain = self.render_if_chain(statement, indentation, diagnostics)?;
                Ok(format!("{indentation}{chain}\n"))
            }
            Statement::Switch(statement) => {
                self.render_switch(statement, indentation, diagnostics)
            }
            Statement::Defer(statement) => {
                diagnostics.add(deferred_block(statement.range));
                let mut result =
                    format!("{indentation}// deferred in the source; runs in place here\n");
                result.push_str(&self.render_statements(
                    &statement.statements,
                    indentation,
                    diagnostics,
                )?);
                Ok(result)
            }
            Statement::Throw(statement) => Ok(format!(
                "{indentation}throw {expression}\n",
                expression =
                    self.render_expression(&statement.expression, indentation, diagnostics)?
            )),
            Statement::Return(statement) => {
                let label = statement
                    .label
                    .as_ref()
                    .map(|label| format!("@{label}"))
                    .unwrap_or_default();
                match &statement.expression {
                    Some(expression) => Ok(format!(
                        "{indentation}return{label} {expression}\n",
                        expression = self.render_expression(expression, indentation, diagnostics)?
                    )),
                    None => Ok(format!("{indentation}return{label}\n")),
                }
            }
            Statement::Break(_) => Ok(format!("{indentation}break\n")),
            Statement::Continue(_) => Ok(format!("{indentation}continue\n")),
            Statement::Assignment(statement) => Ok(format!(
                "{indentation}{left} = {right}\n",
                left = self.render_expression(&statement.left, indentation, diagnostics)?,
                right = self.render_expression(&statement.right, indentation, diagnostics)?
            )),
            Statement::Expression(statement) => Ok(format!(
                "{indentation}{expression}\n",
                expression =
                    self.render_expression(&statement.expression, indentation, diagnostics)?
            )),
            Statement::Comment(statement) => Ok(format!(
                "{indentation}//{text}\n",
                text = if statement.text.starts_with(' ') || statement.text.is_empty() {
                    statement.text.clone()
                } else {
                    format!(" {text}", text = statement.text)
                }
            )),
            Statement::Error(statement) => {
                diagnostics.add(untranslatable_statement(statement.range));
                Ok(format!("{indentation}// error: untranslatable statement\n"))
            }
        }
    }

    /// Renders a class declaration.
    fn render_class(
        &self,
        declaration: &ClassDeclaration,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let inner = self.increase(indentation);
        Ok(format!(
            "{indentation}class {name}{inheritance} {{\n{members}{indentation}}}\n",
            name = declaration.name,
            inheritance = self.render_inheritance(&declaration.inherits),
            members = self.render_statements(&declaration.members, &inner, diagnostics)?
        ))
    }

    /// Renders a struct declaration as a data class.
    ///
    /// Stored properties become the primary constructor; everything else
    /// stays in the body.
    fn render_struct(
        &self,
        declaration: &StructDeclaration,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let (stored, members): (Vec<_>, Vec<_>) =
            declaration.members.iter().partition(|member| {
                matches!(
                    member,
                    Statement::Variable(variable)
                        if variable.getter.is_none() && variable.setter.is_none()
                )
            });

        let mut parameters = Vec::with_capacity(stored.len());
        for member in stored {
            let Statement::Variable(variable) = member else {
                unreachable!("the partition only keeps variables");
            };
            let keyword = if variable.is_let { "val" } else { "var" };
            let default = match &variable.expression {
                Some(expression) => format!(
                    " = {expression}",
                    expression = self.render_expression(expression, indentation, diagnostics)?
                ),
                None => String::new(),
            };
            parameters.push(format!(
                "{keyword} {identifier}: {ty}{default}",
                identifier = variable.identifier,
                ty = self.render_type(&variable.type_annotation)
            ));
        }

        let keyword = declaration.annotations.as_deref().unwrap_or("data");
        let header = format!(
            "{indentation}{keyword} class {name}({parameters}){inheritance}",
            name = declaration.name,
            parameters = parameters.join(", "),
            inheritance = self.render_inheritance(&declaration.inherits)
        );

        if members.is_empty() {
            return Ok(format!("{header}\n"));
        }

        let inner = self.increase(indentation);
        let mut body = String::new();
        for member in members {
            body.push_str(&self.render_statement(member, &inner, diagnostics)?);
        }
        Ok(format!("{header} {{\n{body}{indentation}}}\n"))
    }

    /// Renders an enum declaration as a sealed class or an enum class,
    /// according to the recorded classification.
    fn render_enum(
        &self,
        declaration: &EnumDeclaration,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let inner = self.increase(indentation);
        if self.context().is_sealed_class(&declaration.name) {
            let mut result = format!(
                "{indentation}sealed class {name}{inheritance} {{\n",
                name = declaration.name,
                inheritance = self.render_inheritance(&declaration.inherits)
            );
            for element in &declaration.elements {
                if element.associated_values.is_empty() {
                    result.push_str(&format!(
                        "{inner}object {element} : {name}()\n",
                        element = element.name,
                        name = declaration.name
                    ));
                } else {
                    let values = element
                        .associated_values
                        .iter()
                        .enumerate()
                        .map(|(i, value)| {
                            format!(
                                "val {label}: {ty}",
                                label = value.label.clone().unwrap_or_else(|| format!("value{i}")),
                                ty = self.render_type(&value.type_name)
                            )
                        })
                        .join(", ");
                    result.push_str(&format!(
                        "{inner}class {element}({values}) : {name}()\n",
                        element = element.name,
                        name = declaration.name
                    ));
                }
            }
            result.push_str(&self.render_statements(&declaration.members, &inner, diagnostics)?);
            result.push_str(&format!("{indentation}}}\n"));
            return Ok(result);
        }

        // Enum class: raw values render as a constructor property plus
        // per-case suffixes.
        let raw_type = declaration
            .elements
            .first()
            .and_then(|element| element.raw_value.as_ref())
            .and_then(Expression::type_name);
        let constructor = match &raw_type {
            Some(raw_type) => format!(
                "(val rawValue: {ty})",
                ty = self.render_type(raw_type)
            ),
            None => String::new(),
        };

        let mut result = format!(
            "{indentation}enum class {name}{constructor} {{\n",
            name = declaration.name
        );
        for (i, element) in declaration.elements.iter().enumerate() {
            let suffix = match &element.raw_value {
                Some(raw_value) => format!(
                    "({value})",
                    value = self.render_expression(raw_value, &inner, diagnostics)?
                ),
                None => String::new(),
            };
            let last = i + 1 == declaration.elements.len();
            let terminator = match (last, declaration.members.is_empty()) {
                (false, _) => ",",
                (true, true) => "",
                (true, false) => ";",
            };
            result.push_str(&format!(
                "{inner}{element}{suffix}{terminator}\n",
                element = element.name
            ));
        }
        result.push_str(&self.render_statements(&declaration.members, &inner, diagnostics)?);
        result.push_str(&format!("{indentation}}}\n"));
        Ok(result)
    }

    /// Renders a companion object.
    fn render_companion_object(
        &self,
        object: &CompanionObject,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let inner = self.increase(indentation);
        Ok(format!(
            "{indentation}companion object {{\n{members}{indentation}}}\n",
            members = self.render_statements(&object.members, &inner, diagnostics)?
        ))
    }

    /// Renders a parameter list.
    fn render_parameters(
        &self,
        parameters: &[FunctionParameter],
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let mut rendered = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            let default = match &parameter.value {
                Some(value) => format!(
                    " = {value}",
                    value = self.render_expression(value, indentation, diagnostics)?
                ),
                None => String::new(),
            };
            rendered.push(format!(
                "{label}: {ty}{default}",
                label = parameter.label,
                ty = self.render_type(&parameter.type_name)
            ));
        }
        Ok(rendered.join(", "))
    }

    /// Renders the access modifier and annotations that prefix a
    /// declaration.
    fn render_prefixes(&self, access: Option<&str>, annotations: &[String]) -> String {
        let mut result = String::new();
        // The target's default visibility; spelling it out is noise.
        if let Some(access) = access
            && access != "internal"
        {
            result.push_str(access);
            result.push(' ');
        }
        for annotation in annotations {
            result.push_str(annotation);
            result.push(' ');
        }
        result
    }

    /// Renders a function declaration.
    fn render_function(
        &self,
        declaration: &FunctionDeclaration,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let mut result = String::from(indentation);
        result.push_str(&self.render_prefixes(
            declaration.access.as_deref(),
            &declaration.annotations,
        ));
        result.push_str("fun ");
        if !declaration.generics.is_empty() {
            result.push_str(&format!(
                "<{generics}> ",
                generics = declaration.generics.iter().join(", ")
            ));
        }
        if let Some(extends_type) = &declaration.extends_type {
            result.push_str(&self.render_type(extends_type));
            result.push('.');
        }
        result.push_str(&declaration.prefix);
        result.push('(');
        result.push_str(&self.render_parameters(
            &declaration.parameters,
            indentation,
            diagnostics,
        )?);
        result.push(')');
        if !matches!(declaration.return_type.as_str(), "" | "()" | "Void" | "Unit") {
            result.push_str(": ");
            result.push_str(&self.render_type(&declaration.return_type));
        }

        match &declaration.statements {
            None => result.push('\n'),
            Some(statements) if statements.is_empty() => result.push_str(" { }\n"),
            Some(statements) => {
                let inner = self.increase(indentation);
                result.push_str(" {\n");
                result.push_str(&self.render_statements(statements, &inner, diagnostics)?);
                result.push_str(&format!("{indentation}}}\n"));
            }
        }
        Ok(result)
    }

    /// Renders an initializer as a constructor.
    fn render_initializer(
        &self,
        declaration: &InitializerDeclaration,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let mut result = String::from(indentation);
        result.push_str(&self.render_prefixes(
            declaration.access.as_deref(),
            &declaration.annotations,
        ));
        result.push_str("constructor(");
        result.push_str(&self.render_parameters(
            &declaration.parameters,
            indentation,
            diagnostics,
        )?);
        result.push(')');

        if let Some(super_call) = &declaration.super_call {
            result.push_str(&format!(
                " : super({arguments})",
                arguments =
                    self.render_arguments(&super_call.parameters, None, indentation, diagnostics)?
            ));
        }

        match &declaration.statements {
            None => result.push('\n'),
            Some(statements) if statements.is_empty() => result.push_str(" { }\n"),
            Some(statements) => {
                let inner = self.increase(indentation);
                result.push_str(" {\n");
                result.push_str(&self.render_statements(statements, &inner, diagnostics)?);
                result.push_str(&format!("{indentation}}}\n"));
            }
        }
        Ok(result)
    }

    /// Renders a variable declaration, with accessor bodies one level
    /// deeper.
    fn render_variable(
        &self,
        declaration: &VariableDeclaration,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let keyword = if declaration.setter.is_some() {
            "var"
        } else if declaration.is_let || declaration.getter.is_some() {
            "val"
        } else {
            "var"
        };

        let mut result = String::from(indentation);
        result.push_str(&self.render_prefixes(
            declaration.access.as_deref(),
            &declaration.annotations,
        ));
        result.push_str(keyword);
        result.push(' ');
        if let Some(extends_type) = &declaration.extends_type {
            result.push_str(&self.render_type(extends_type));
            result.push('.');
        }
        result.push_str(&declaration.identifier);
        if !declaration.type_annotation.is_empty() {
            result.push_str(": ");
            result.push_str(&self.render_type(&declaration.type_annotation));
        }
        if let Some(expression) = &declaration.expression {
            result.push_str(&format!(
                " = {expression}",
                expression = self.render_expression(expression, indentation, diagnostics)?
            ));
        }
        result.push('\n');

        let accessor_indentation = self.increase(indentation);
        if let Some(getter) = &declaration.getter
            && let Some(statements) = &getter.statements
        {
            let inner = self.increase(&accessor_indentation);
            result.push_str(&format!("{accessor_indentation}get() {{\n"));
            result.push_str(&self.render_statements(statements, &inner, diagnostics)?);
            result.push_str(&format!("{accessor_indentation}}}\n"));
        }
        if let Some(setter) = &declaration.setter
            && let Some(statements) = &setter.statements
        {
            let inner = self.increase(&accessor_indentation);
            result.push_str(&format!("{accessor_indentation}set(value) {{\n"));
            result.push_str(&self.render_statements(statements, &inner, diagnostics)?);
            result.push_str(&format!("{accessor_indentation}}}\n"));
        }
        Ok(result)
    }

    /// Renders a catch clause.
    fn render_catch(
        &self,
        statement: &CatchStatement,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let binding = match &statement.variable {
            Some(variable) => {
                let ty = match self.render_type(&variable.type_annotation).as_str() {
                    // The source's error protocol maps onto the target's
                    // exception root.
                    "" | "Error" => "Exception".to_string(),
                    ty => ty.to_string(),
                };
                format!("{identifier}: {ty}", identifier = variable.identifier)
            }
            None => "e: Exception".to_string(),
        };

        let inner = self.increase(indentation);
        Ok(format!(
            "{indentation}catch ({binding}) {{\n{body}{indentation}}}\n",
            body = self.render_statements(&statement.statements, &inner, diagnostics)?
        ))
    }

    /// Renders an if/else-if/else chain, without leading indentation or a
    /// trailing newline.
    fn render_if_chain(
        &self,
        statement: &IfStatement,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let mut conditions = Vec::with_capacity(statement.conditions.len());
        for condition in &statement.conditions {
            match condition {
                IfCondition::Condition(expression) => {
                    conditions.push(self.render_expression(expression, indentation, diagnostics)?);
                }
                IfCondition::Declaration(declaration) => {
                    diagnostics.add(unlowered_binding(declaration.range));
                    conditions.push(format!(
                        "{identifier} != null",
                        identifier = declaration.identifier
                    ));
                }
            }
        }
        let condition = conditions.join(" && ");
        let condition = if statement.is_guard {
            format!("!({condition})")
        } else {
            condition
        };

        let inner = self.increase(indentation);
        let mut result = format!(
            "if ({condition}) {{\n{body}{indentation}}}",
            body = self.render_statements(&statement.statements, &inner, diagnostics)?
        );

        if let Some(else_statement) = &statement.else_statement {
            if else_statement.conditions.is_empty() {
                result.push_str(&format!(
                    " else {{\n{body}{indentation}}}",
                    body = self.render_statements(
                        &else_statement.statements,
                        &inner,
                        diagnostics
                    )?
                ));
            } else {
                result.push_str(" else ");
                result.push_str(&self.render_if_chain(else_statement, indentation, diagnostics)?);
            }
        }
        Ok(result)
    }

    /// Renders a switch statement as `when`, honoring its
    /// converts-to-expression marker.
    fn render_switch(
        &self,
        statement: &SwitchStatement,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        let subject = self.render_expression(&statement.expression, indentation, diagnostics)?;

        let prefix = match statement.converts_to_expression.as_deref() {
            None => String::new(),
            Some(Statement::Return(_)) => "return ".to_string(),
            Some(Statement::Assignment(assignment)) => format!(
                "{left} = ",
                left = self.render_expression(&assignment.left, indentation, diagnostics)?
            ),
            Some(Statement::Variable(declaration)) => {
                let keyword = if declaration.is_let { "val" } else { "var" };
                format!(
                    "{keyword} {identifier}: {ty} = ",
                    identifier = declaration.identifier,
                    ty = self.render_type(&declaration.type_annotation)
                )
            }
            Some(other) => {
                return Err(RenderError::new(
                    "switch carries an unrecognized conversion marker",
                    other.range(),
                ));
            }
        };

        let inner = self.increase(indentation);
        let mut result = format!("{indentation}{prefix}when ({subject}) {{\n");
        for case in &statement.cases {
            let label = if case.expressions.is_empty() {
                "else".to_string()
            } else {
                let mut labels = Vec::with_capacity(case.expressions.len());
                for expression in &case.expressions {
                    labels.push(self.render_case_label(
                        expression,
                        &statement.expression,
                        &inner,
                        diagnostics,
                    )?);
                }
                labels.join(", ")
            };

            match case.statements.as_slice() {
                [Statement::Expression(single)] => {
                    result.push_str(&format!(
                        "{inner}{label} -> {expression}\n",
                        expression =
                            self.render_expression(&single.expression, &inner, diagnostics)?
                    ));
                }
                statements => {
                    let body_indentation = self.increase(&inner);
                    result.push_str(&format!("{inner}{label} -> {{\n"));
                    result.push_str(&self.render_statements(
                        statements,
                        &body_indentation,
                        diagnostics,
                    )?);
                    result.push_str(&format!("{inner}}}\n"));
                }
            }
        }
        result.push_str(&format!("{indentation}}}\n"));
        Ok(result)
    }

    /// Renders one case-label expression, using the `is Type` form for the
    /// subject's own type checks.
    fn render_case_label(
        &self,
        expression: &Expression,
        subject: &Expression,
        indentation: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<String, RenderError> {
        if let Expression::BinaryOperator(check) = expression
            && check.operator == "is"
            && *check.left == *subject
        {
            return Ok(format!(
                "is {ty}",
                ty = self.render_expression(&check.right, indentation, diagnostics)?
            ));
        }

        self.render_expression(expression, indentation, diagnostics)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use trestle_ast::DeclarationReferenceExpression;
    use trestle_ast::Expression;
    use trestle_ast::LiteralBoolExpression;
    use trestle_ast::LiteralStringExpression;
    use trestle_ast::ReturnStatement;

    use super::*;
    use crate::Config;
    use crate::Renderer;
    use trestle_transform::TranspilationContext;

    /// Renders a statement at the top level over the given context.
    fn render(context: &TranspilationContext, statement: &Statement) -> String {
        let renderer = Renderer::new(context, Config::new());
        let mut diagnostics = Diagnostics::new();
        renderer
            .render_statement(statement, "", &mut diagnostics)
            .expect("the statement should render")
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

    #[test]
    fn computed_variables_render_accessors_one_level_deeper() {
        let getter = FunctionDeclaration {
            range: None,
            prefix: "get".to_string(),
            parameters: Vec::new(),
            return_type: "String".to_string(),
            function_type: "() -> String".to_string(),
            generics: Vec::new(),
            is_implicit: false,
            is_static: false,
            is_mutating: false,
            is_pure: false,
            extends_type: None,
            statements: Some(vec![Statement::Return(ReturnStatement {
                range: None,
                expression: Some(Expression::LiteralString(LiteralStringExpression {
                    range: None,
                    value: "x".to_string(),
                })),
                label: None,
            })]),
            access: None,
            annotations: Vec::new(),
        };
        let variable = Statement::Variable(VariableDeclaration {
            range: None,
            identifier: "label".to_string(),
            type_annotation: "String".to_string(),
            expression: None,
            getter: Some(Box::new(getter)),
            setter: None,
            access: None,
            is_let: false,
            is_implicit: false,
            is_static: false,
            extends_type: None,
            annotations: Vec::new(),
        });

        let context = TranspilationContext::new();
        assert_eq!(
            render(&context, &variable),
            "val label: String\n\tget() {\n\t\treturn \"x\"\n\t}\n"
        );
    }

    #[test]
    fn else_if_chains_render_flat() {
        let terminal_else = IfStatement {
            range: None,
            conditions: Vec::new(),
            is_guard: false,
            statements: vec![Statement::Return(ReturnStatement {
                range: None,
                expression: None,
                label: None,
            })],
            else_statement: None,
        };
        let else_if = IfStatement {
            range: None,
            conditions: vec![IfCondition::Condition(reference("b"))],
            is_guard: false,
            statements: vec![Statement::Continue(trestle_ast::ContinueStatement {
                range: None,
            })],
            else_statement: Some(Box::new(terminal_else)),
        };
        let chain = Statement::If(IfStatement {
            range: None,
            conditions: vec![IfCondition::Condition(reference("a"))],
            is_guard: false,
            statements: vec![Statement::Break(trestle_ast::BreakStatement { range: None })],
            else_statement: Some(Box::new(else_if)),
        });

        let context = TranspilationContext::new();
        assert_eq!(
            render(&context, &chain),
            "if (a) {\n\tbreak\n} else if (b) {\n\tcontinue\n} else {\n\treturn\n}\n"
        );
    }

    #[test]
    fn sealed_enums_render_case_subclasses() {
        let mut context = TranspilationContext::new();
        context.record_sealed_class("Shape");

        let declaration = Statement::Enum(EnumDeclaration {
            range: None,
            access: None,
            name: "Shape".to_string(),
            inherits: Vec::new(),
            elements: vec![
                trestle_ast::EnumElement {
                    range: None,
                    name: "Circle".to_string(),
                    associated_values: vec![trestle_ast::LabeledType {
                        label: Some("radius".to_string()),
                        type_name: "Double".to_string(),
                    }],
                    raw_value: None,
                    annotations: None,
                },
                trestle_ast::EnumElement {
                    range: None,
                    name: "Unknown".to_string(),
                    associated_values: Vec::new(),
                    raw_value: None,
                    annotations: None,
                },
            ],
            members: Vec::new(),
            is_implicit: false,
        });

        assert_eq!(
            render(&context, &declaration),
            "sealed class Shape {\n\
             \tclass Circle(val radius: Double) : Shape()\n\
             \tobject Unknown : Shape()\n\
             }\n"
        );
    }

    #[test]
    fn structs_render_as_data_classes() {
        let stored = VariableDeclaration {
            range: None,
            identifier: "x".to_string(),
            type_annotation: "Int".to_string(),
            expression: None,
            getter: None,
            setter: None,
            access: None,
            is_let: true,
            is_implicit: false,
            is_static: false,
            extends_type: None,
            annotations: Vec::new(),
        };
        let declaration = Statement::Struct(StructDeclaration {
            range: None,
            annotations: None,
            name: "Point".to_string(),
            inherits: Vec::new(),
            members: vec![
                Statement::Variable(stored.clone()),
                Statement::Variable(VariableDeclaration {
                    identifier: "y".to_string(),
                    ..stored
                }),
            ],
        });

        let context = TranspilationContext::new();
        assert_eq!(
            render(&context, &declaration),
            "data class Point(val x: Int, val y: Int)\n"
        );
    }

    #[test]
    fn guards_render_with_a_negated_condition() {
        let guard = Statement::If(IfStatement {
            range: None,
            conditions: vec![IfCondition::Condition(Expression::LiteralBool(
                LiteralBoolExpression {
                    range: None,
                    value: true,
                },
            ))],
            is_guard: true,
            statements: vec![Statement::Return(ReturnStatement {
                range: None,
                expression: None,
                label: None,
            })],
            else_statement: None,
        });

        let context = TranspilationContext::new();
        assert_eq!(
            render(&context, &guard),
            "if (!(true)) {\n\treturn\n}\n"
        );
    }
}
