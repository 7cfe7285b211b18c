//! A pass that synthesizes raw-value members for raw-representable enums.
//!
//! An enum whose elements all carry a raw value gains a static failable
//! initializer switching over the raw value (renamed `invoke` by the later
//! `OptionalInits` pass and moved into the companion object by
//! `StaticMembers`). Sealed-style enums also gain a computed `rawValue`
//! property switching over `self`; enum-class-style enums get theirs from
//! the renderer instead, as a constructor property with per-case suffixes.
//! The synthesized switches are ordinary statements, so the downstream
//! switch-to-expression and enum-capitalization rewrites apply to them like
//! any user code.

use trestle_ast::Diagnostic;
use trestle_ast::DotExpression;
use trestle_ast::EnumDeclaration;
use trestle_ast::Expression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::FunctionParameter;
use trestle_ast::InitializerDeclaration;
use trestle_ast::NilLiteralExpression;
use trestle_ast::ReturnStatement;
use trestle_ast::SourceRange;
use trestle_ast::Statement;
use trestle_ast::SwitchCase;
use trestle_ast::SwitchStatement;
use trestle_ast::TypeExpression;
use trestle_ast::VariableDeclaration;

use crate::context::TranspilationContext;
use crate::pass::Pass;
use crate::pass::PassContext;
use crate::walk;

/// The identifier for the raw-values pass.
pub const ID: &str = "RawValues";

/// Creates a diagnostic for a raw value whose type cannot be determined.
fn unknown_raw_value_type(range: Option<SourceRange>) -> Diagnostic {
    Diagnostic::warning("unable to determine the raw-value type of this enum")
        .with_pass(ID)
        .with_range(range)
}

/// A reference to the given identifier.
fn reference(identifier: &str) -> Expression {
    Expression::DeclarationReference(trestle_ast::DeclarationReferenceExpression {
        range: None,
        identifier: identifier.to_string(),
        type_name: None,
        is_standard_library: false,
        is_implicit: false,
    })
}

/// A `E.element` member access.
fn element_access(enum_name: &str, element_name: &str) -> Expression {
    Expression::Dot(DotExpression {
        range: None,
        left: Box::new(Expression::Type(TypeExpression {
            range: None,
            type_name: enum_name.to_string(),
        })),
        right: Box::new(reference(element_name)),
    })
}

/// A `return expression` statement.
fn return_of(expression: Expression) -> Statement {
    Statement::Return(ReturnStatement {
        range: None,
        expression: Some(expression),
        label: None,
    })
}

/// Builds the static `init(rawValue:)` factory for the enum.
fn raw_value_initializer(declaration: &EnumDeclaration, raw_type: &str) -> InitializerDeclaration {
    let mut cases: Vec<SwitchCase> = declaration
        .elements
        .iter()
        .map(|element| SwitchCase {
            expressions: vec![element.raw_value.clone().expect("element should have a raw value")],
            statements: vec![return_of(element_access(&declaration.name, &element.name))],
        })
        .collect();
    cases.push(SwitchCase {
        expressions: Vec::new(),
        statements: vec![return_of(Expression::Nil(NilLiteralExpression { range: None }))],
    });

    InitializerDeclaration {
        range: None,
        parameters: vec![FunctionParameter {
            label: "rawValue".to_string(),
            api_label: None,
            type_name: raw_type.to_string(),
            value: None,
        }],
        return_type: format!("{name}?", name = declaration.name),
        function_type: format!("({raw_type}) -> {name}?", name = declaration.name),
        is_implicit: false,
        is_static: true,
        extends_type: None,
        statements: Some(vec![Statement::Switch(SwitchStatement {
            range: None,
            converts_to_expression: None,
            expression: reference("rawValue"),
            cases,
        })]),
        access: declaration.access.clone(),
        annotations: Vec::new(),
        super_call: None,
    }
}

/// Builds the computed `rawValue` property for the enum.
fn raw_value_property(declaration: &EnumDeclaration, raw_type: &str) -> VariableDeclaration {
    let cases: Vec<SwitchCase> = declaration
        .elements
        .iter()
        .map(|element| SwitchCase {
            expressions: vec![element_access(&declaration.name, &element.name)],
            statements: vec![return_of(
                element.raw_value.clone().expect("element should have a raw value"),
            )],
        })
        .collect();

    let getter = FunctionDeclaration {
        range: None,
        prefix: "get".to_string(),
        parameters: Vec::new(),
        return_type: raw_type.to_string(),
        function_type: format!("() -> {raw_type}"),
        generics: Vec::new(),
        is_implicit: false,
        is_static: false,
        is_mutating: false,
        is_pure: false,
        extends_type: None,
        statements: Some(vec![Statement::Switch(SwitchStatement {
            range: None,
            converts_to_expression: None,
            expression: reference("self"),
            cases,
        })]),
        access: None,
        annotations: Vec::new(),
    };

    VariableDeclaration {
        range: None,
        identifier: "rawValue".to_string(),
        type_annotation: raw_type.to_string(),
        expression: None,
        getter: Some(Box::new(getter)),
        setter: None,
        access: declaration.access.clone(),
        is_let: false,
        is_implicit: false,
        is_static: false,
        extends_type: None,
        annotations: Vec::new(),
    }
}

/// Synthesizes `init(rawValue:)` and `rawValue` for raw-representable
/// enums.
#[derive(Debug)]
pub struct RawValuesPass<'a> {
    /// The context holding the recorded enum classifications.
    context: &'a TranspilationContext,
}

impl<'a> RawValuesPass<'a> {
    /// Creates the pass over the given context.
    pub fn new(context: &'a TranspilationContext) -> Self {
        Self { context }
    }
}

impl Pass for RawValuesPass<'_> {
    fn name(&self) -> &'static str {
        ID
    }

    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        mut declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        let raw_representable = !declaration.elements.is_empty()
            && declaration
                .elements
                .iter()
                .all(|element| element.raw_value.is_some());
        let already_synthesized = declaration.members.iter().any(|member| {
            matches!(
                member,
                Statement::Initializer(initializer)
                    if initializer.parameters.len() == 1
                        && initializer.parameters[0].label == "rawValue"
            )
        });
        if !raw_representable || already_synthesized {
            return walk::enum_declaration(self, cx, declaration);
        }

        let raw_type = declaration.elements[0]
            .raw_value
            .as_ref()
            .and_then(Expression::type_name);
        let Some(raw_type) = raw_type else {
            cx.diagnostics.add(unknown_raw_value_type(declaration.range));
            return walk::enum_declaration(self, cx, declaration);
        };

        // An enum class keeps its raw values as constructor suffixes, which
        // already declare the property.
        if !self.context.is_enum_class(&declaration.name) {
            let property = raw_value_property(&declaration, &raw_type);
            declaration.members.insert(0, Statement::Variable(property));
        }
        let initializer = raw_value_initializer(&declaration, &raw_type);
        declaration
            .members
            .insert(0, Statement::Initializer(initializer));

        walk::enum_declaration(self, cx, declaration)
    }
}
