//! Default traversals for every hook of [`Pass`].
//!
//! Each function here is the "super" implementation of the hook with the
//! same name: it recurses into the node's children through the pass (so
//! overridden hooks still apply below) and rebuilds the node around the
//! results. Overrides call back into these functions when they want the
//! default recursion in addition to their own rewrite.

use trestle_ast::ArrayExpression;
use trestle_ast::AssignmentStatement;
use trestle_ast::BinaryOperatorExpression;
use trestle_ast::BreakStatement;
use trestle_ast::CallExpression;
use trestle_ast::CatchStatement;
use trestle_ast::ClassDeclaration;
use trestle_ast::ClosureExpression;
use trestle_ast::CommentStatement;
use trestle_ast::CompanionObject;
use trestle_ast::ContinueStatement;
use trestle_ast::DeferStatement;
use trestle_ast::DictionaryExpression;
use trestle_ast::DoStatement;
use trestle_ast::Document;
use trestle_ast::DotExpression;
use trestle_ast::EnumDeclaration;
use trestle_ast::EnumElement;
use trestle_ast::ErrorStatement;
use trestle_ast::Expression;
use trestle_ast::ExpressionStatement;
use trestle_ast::ExtensionDeclaration;
use trestle_ast::ForEachStatement;
use trestle_ast::ForceValueExpression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::FunctionParameter;
use trestle_ast::IfCondition;
use trestle_ast::IfExpression;
use trestle_ast::IfStatement;
use trestle_ast::ImportStatement;
use trestle_ast::InitializerDeclaration;
use trestle_ast::InterpolatedStringExpression;
use trestle_ast::OptionalExpression;
use trestle_ast::ParenthesizedExpression;
use trestle_ast::PostfixUnaryExpression;
use trestle_ast::PrefixUnaryExpression;
use trestle_ast::ProtocolDeclaration;
use trestle_ast::ReturnExpression;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;
use trestle_ast::StructDeclaration;
use trestle_ast::SubscriptExpression;
use trestle_ast::SwitchCase;
use trestle_ast::SwitchStatement;
use trestle_ast::TemplateExpression;
use trestle_ast::ThrowStatement;
use trestle_ast::TupleExpression;
use trestle_ast::TupleShuffleExpression;
use trestle_ast::TypealiasDeclaration;
use trestle_ast::VariableDeclaration;
use trestle_ast::WhileStatement;

use crate::pass::ParentNode;
use crate::pass::Pass;
use crate::pass::PassContext;

/// Rewrites a whole document.
pub fn document<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut document: Document,
) -> Document {
    document.declarations = pass.replace_statements(cx, document.declarations);
    document.statements = pass.replace_statements(cx, document.statements);
    document
}

/// Rewrites a statement list, flattening each statement's replacements.
pub fn statements<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    statements: Vec<Statement>,
) -> Vec<Statement> {
    statements
        .into_iter()
        .flat_map(|statement| pass.replace_statement(cx, statement))
        .collect()
}

/// Dispatches a statement to its kind-specific hook, maintaining the parent
/// stack.
pub fn statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    statement: Statement,
) -> Vec<Statement> {
    cx.push(ParentNode::Statement(statement.kind()));
    let result = match statement {
        Statement::Import(s) => pass.replace_import_statement(cx, s),
        Statement::Typealias(s) => pass.replace_typealias_declaration(cx, s),
        Statement::Extension(s) => pass.replace_extension_declaration(cx, s),
        Statement::Class(s) => pass.replace_class_declaration(cx, s),
        Statement::Struct(s) => pass.replace_struct_declaration(cx, s),
        Statement::Enum(s) => pass.replace_enum_declaration(cx, s),
        Statement::Protocol(s) => pass.replace_protocol_declaration(cx, s),
        Statement::CompanionObject(s) => pass.replace_companion_object(cx, s),
        Statement::Function(s) => pass.replace_function_declaration(cx, s),
        Statement::Initializer(s) => pass.replace_initializer_declaration(cx, s),
        Statement::Variable(s) => pass.replace_variable_declaration(cx, s),
        Statement::Do(s) => pass.replace_do_statement(cx, s),
        Statement::Catch(s) => pass.replace_catch_statement(cx, s),
        Statement::ForEach(s) => pass.replace_for_each_statement(cx, s),
        Statement::While(s) => pass.replace_while_statement(cx, s),
        Statement::If(s) => pass.replace_if_statement(cx, s),
        Statement::Switch(s) => pass.replace_switch_statement(cx, s),
        Statement::Defer(s) => pass.replace_defer_statement(cx, s),
        Statement::Throw(s) => pass.replace_throw_statement(cx, s),
        Statement::Return(s) => pass.replace_return_statement(cx, s),
        Statement::Break(s) => pass.replace_break_statement(cx, s),
        Statement::Continue(s) => pass.replace_continue_statement(cx, s),
        Statement::Assignment(s) => pass.replace_assignment_statement(cx, s),
        Statement::Expression(s) => pass.replace_expression_statement(cx, s),
        Statement::Comment(s) => pass.replace_comment_statement(cx, s),
        Statement::Error(s) => pass.replace_error_statement(cx, s),
    };
    cx.pop();
    result
}

/// Keeps an import statement unchanged.
pub fn import_statement<P: Pass + ?Sized>(
    _pass: &mut P,
    _cx: &mut PassContext<'_>,
    statement: ImportStatement,
) -> Vec<Statement> {
    vec![Statement::Import(statement)]
}

/// Keeps a typealias declaration unchanged.
pub fn typealias_declaration<P: Pass + ?Sized>(
    _pass: &mut P,
    _cx: &mut PassContext<'_>,
    declaration: TypealiasDeclaration,
) -> Vec<Statement> {
    vec![Statement::Typealias(declaration)]
}

/// Recurses into an extension's members.
pub fn extension_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: ExtensionDeclaration,
) -> Vec<Statement> {
    declaration.members = pass.replace_statements(cx, declaration.members);
    vec![Statement::Extension(declaration)]
}

/// Recurses into a class's members.
pub fn class_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: ClassDeclaration,
) -> Vec<Statement> {
    declaration.members = pass.replace_statements(cx, declaration.members);
    vec![Statement::Class(declaration)]
}

/// Recurses into a struct's members.
pub fn struct_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: StructDeclaration,
) -> Vec<Statement> {
    declaration.members = pass.replace_statements(cx, declaration.members);
    vec![Statement::Struct(declaration)]
}

/// Recurses into an enum's elements and members.
pub fn enum_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: EnumDeclaration,
) -> Vec<Statement> {
    declaration.elements = declaration
        .elements
        .into_iter()
        .flat_map(|element| pass.replace_enum_element(cx, element))
        .collect();
    declaration.members = pass.replace_statements(cx, declaration.members);
    vec![Statement::Enum(declaration)]
}

/// Recurses into an enum element's raw value.
pub fn enum_element<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut element: EnumElement,
) -> Vec<EnumElement> {
    element.raw_value = element
        .raw_value
        .map(|raw_value| pass.replace_expression(cx, raw_value));
    vec![element]
}

/// Recurses into a protocol's members.
pub fn protocol_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: ProtocolDeclaration,
) -> Vec<Statement> {
    declaration.members = pass.replace_statements(cx, declaration.members);
    vec![Statement::Protocol(declaration)]
}

/// Recurses into a companion object's members.
pub fn companion_object<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut object: CompanionObject,
) -> Vec<Statement> {
    object.members = pass.replace_statements(cx, object.members);
    vec![Statement::CompanionObject(object)]
}

/// Lifts [`Pass::process_function_declaration`] to statement position.
pub fn function_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    declaration: FunctionDeclaration,
) -> Vec<Statement> {
    pass.process_function_declaration(cx, declaration)
        .map(Statement::Function)
        .into_iter()
        .collect()
}

/// Recurses into a function's parameter defaults and body.
pub fn process_function_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: FunctionDeclaration,
) -> Option<FunctionDeclaration> {
    declaration.parameters = function_parameters(pass, cx, declaration.parameters);
    declaration.statements = declaration
        .statements
        .map(|statements| pass.replace_statements(cx, statements));
    Some(declaration)
}

/// Lifts [`Pass::process_initializer_declaration`] to statement position.
pub fn initializer_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    declaration: InitializerDeclaration,
) -> Vec<Statement> {
    pass.process_initializer_declaration(cx, declaration)
        .map(Statement::Initializer)
        .into_iter()
        .collect()
}

/// Recurses into an initializer's parameter defaults and body.
pub fn process_initializer_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: InitializerDeclaration,
) -> Option<InitializerDeclaration> {
    declaration.parameters = function_parameters(pass, cx, declaration.parameters);
    declaration.statements = declaration
        .statements
        .map(|statements| pass.replace_statements(cx, statements));
    Some(declaration)
}

/// Recurses into a parameter list's default values.
fn function_parameters<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    parameters: Vec<FunctionParameter>,
) -> Vec<FunctionParameter> {
    parameters
        .into_iter()
        .map(|mut parameter| {
            parameter.value = parameter
                .value
                .map(|value| pass.replace_expression(cx, value));
            parameter
        })
        .collect()
}

/// Lifts [`Pass::process_variable_declaration`] to statement position.
pub fn variable_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    declaration: VariableDeclaration,
) -> Vec<Statement> {
    vec![Statement::Variable(
        pass.process_variable_declaration(cx, declaration),
    )]
}

/// Recurses into a variable's initializer and accessors.
pub fn process_variable_declaration<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut declaration: VariableDeclaration,
) -> VariableDeclaration {
    declaration.expression = declaration
        .expression
        .map(|expression| pass.replace_expression(cx, expression));
    declaration.getter = declaration
        .getter
        .and_then(|getter| pass.process_function_declaration(cx, *getter).map(Box::new));
    declaration.setter = declaration
        .setter
        .and_then(|setter| pass.process_function_declaration(cx, *setter).map(Box::new));
    declaration
}

/// Recurses into a `do` block's body.
pub fn do_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: DoStatement,
) -> Vec<Statement> {
    statement.statements = pass.replace_statements(cx, statement.statements);
    vec![Statement::Do(statement)]
}

/// Recurses into a `catch` clause's binding and body.
pub fn catch_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: CatchStatement,
) -> Vec<Statement> {
    statement.variable = statement
        .variable
        .map(|variable| pass.process_variable_declaration(cx, variable));
    statement.statements = pass.replace_statements(cx, statement.statements);
    vec![Statement::Catch(statement)]
}

/// Recurses into a for-each loop's collection, variable, and body.
pub fn for_each_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: ForEachStatement,
) -> Vec<Statement> {
    statement.collection = pass.replace_expression(cx, statement.collection);
    statement.variable = pass.replace_expression(cx, statement.variable);
    statement.statements = pass.replace_statements(cx, statement.statements);
    vec![Statement::ForEach(statement)]
}

/// Recurses into a while loop's condition and body.
pub fn while_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: WhileStatement,
) -> Vec<Statement> {
    statement.expression = pass.replace_expression(cx, statement.expression);
    statement.statements = pass.replace_statements(cx, statement.statements);
    vec![Statement::While(statement)]
}

/// Lifts [`Pass::process_if_statement`] to statement position.
pub fn if_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    statement: IfStatement,
) -> Vec<Statement> {
    vec![Statement::If(pass.process_if_statement(cx, statement))]
}

/// Recurses into an if statement's conditions, body, and else chain.
pub fn process_if_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: IfStatement,
) -> IfStatement {
    statement.conditions = statement
        .conditions
        .into_iter()
        .map(|condition| pass.process_if_condition(cx, condition))
        .collect();
    statement.statements = pass.replace_statements(cx, statement.statements);
    statement.else_statement = statement
        .else_statement
        .map(|else_statement| Box::new(pass.process_if_statement(cx, *else_statement)));
    statement
}

/// Recurses into a single if condition.
pub fn process_if_condition<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    condition: IfCondition,
) -> IfCondition {
    match condition {
        IfCondition::Condition(expression) => {
            IfCondition::Condition(pass.replace_expression(cx, expression))
        }
        IfCondition::Declaration(declaration) => {
            IfCondition::Declaration(pass.process_variable_declaration(cx, declaration))
        }
    }
}

/// Recurses into a switch's subject, conversion marker, and cases.
pub fn switch_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: SwitchStatement,
) -> Vec<Statement> {
    statement.converts_to_expression = statement.converts_to_expression.and_then(|marker| {
        let mut replaced = pass.replace_statement(cx, *marker);
        if replaced.len() == 1 {
            Some(Box::new(replaced.remove(0)))
        } else {
            None
        }
    });
    statement.expression = pass.replace_expression(cx, statement.expression);
    statement.cases = statement
        .cases
        .into_iter()
        .map(|case| pass.process_switch_case(cx, case))
        .collect();
    vec![Statement::Switch(statement)]
}

/// Recurses into a switch case's expressions and body.
pub fn process_switch_case<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut case: SwitchCase,
) -> SwitchCase {
    case.expressions = case
        .expressions
        .into_iter()
        .map(|expression| pass.replace_expression(cx, expression))
        .collect();
    case.statements = pass.replace_statements(cx, case.statements);
    case
}

/// Recurses into a deferred block's body.
pub fn defer_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: DeferStatement,
) -> Vec<Statement> {
    statement.statements = pass.replace_statements(cx, statement.statements);
    vec![Statement::Defer(statement)]
}

/// Recurses into a throw statement's expression.
pub fn throw_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: ThrowStatement,
) -> Vec<Statement> {
    statement.expression = pass.replace_expression(cx, statement.expression);
    vec![Statement::Throw(statement)]
}

/// Recurses into a return statement's expression.
pub fn return_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: ReturnStatement,
) -> Vec<Statement> {
    statement.expression = statement
        .expression
        .map(|expression| pass.replace_expression(cx, expression));
    vec![Statement::Return(statement)]
}

/// Keeps a break statement unchanged.
pub fn break_statement<P: Pass + ?Sized>(
    _pass: &mut P,
    _cx: &mut PassContext<'_>,
    statement: BreakStatement,
) -> Vec<Statement> {
    vec![Statement::Break(statement)]
}

/// Keeps a continue statement unchanged.
pub fn continue_statement<P: Pass + ?Sized>(
    _pass: &mut P,
    _cx: &mut PassContext<'_>,
    statement: ContinueStatement,
) -> Vec<Statement> {
    vec![Statement::Continue(statement)]
}

/// Recurses into both sides of an assignment.
pub fn assignment_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: AssignmentStatement,
) -> Vec<Statement> {
    statement.left = pass.replace_expression(cx, statement.left);
    statement.right = pass.replace_expression(cx, statement.right);
    vec![Statement::Assignment(statement)]
}

/// Recurses into an expression statement's expression.
pub fn expression_statement<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut statement: ExpressionStatement,
) -> Vec<Statement> {
    statement.expression = pass.replace_expression(cx, statement.expression);
    vec![Statement::Expression(statement)]
}

/// Keeps a comment unchanged.
pub fn comment_statement<P: Pass + ?Sized>(
    _pass: &mut P,
    _cx: &mut PassContext<'_>,
    statement: CommentStatement,
) -> Vec<Statement> {
    vec![Statement::Comment(statement)]
}

/// Keeps an error statement unchanged.
pub fn error_statement<P: Pass + ?Sized>(
    _pass: &mut P,
    _cx: &mut PassContext<'_>,
    statement: ErrorStatement,
) -> Vec<Statement> {
    vec![Statement::Error(statement)]
}

/// Dispatches an expression to its kind-specific hook, maintaining the
/// parent stack.
pub fn expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    expression: Expression,
) -> Expression {
    cx.push(ParentNode::Expression(expression.kind()));
    let result = match expression {
        Expression::Template(e) => pass.replace_template_expression(cx, e),
        Expression::LiteralCode(e) => pass.replace_literal_code_expression(cx, e),
        Expression::LiteralDeclaration(e) => pass.replace_literal_declaration_expression(cx, e),
        Expression::Parenthesized(e) => pass.replace_parenthesized_expression(cx, e),
        Expression::ForceValue(e) => pass.replace_force_value_expression(cx, e),
        Expression::Optional(e) => pass.replace_optional_expression(cx, e),
        Expression::DeclarationReference(e) => {
            pass.replace_declaration_reference_expression(cx, e)
        }
        Expression::Type(e) => pass.replace_type_expression(cx, e),
        Expression::Subscript(e) => pass.replace_subscript_expression(cx, e),
        Expression::Array(e) => pass.replace_array_expression(cx, e),
        Expression::Dictionary(e) => pass.replace_dictionary_expression(cx, e),
        Expression::Return(e) => pass.replace_return_expression(cx, e),
        Expression::Dot(e) => pass.replace_dot_expression(cx, e),
        Expression::BinaryOperator(e) => pass.replace_binary_operator_expression(cx, e),
        Expression::PrefixUnary(e) => pass.replace_prefix_unary_expression(cx, e),
        Expression::PostfixUnary(e) => pass.replace_postfix_unary_expression(cx, e),
        Expression::If(e) => pass.replace_if_expression(cx, e),
        Expression::Call(e) => pass.replace_call_expression(cx, e),
        Expression::Closure(e) => pass.replace_closure_expression(cx, e),
        Expression::LiteralInt(e) => pass.replace_literal_int_expression(cx, e),
        Expression::LiteralUInt(e) => pass.replace_literal_uint_expression(cx, e),
        Expression::LiteralDouble(e) => pass.replace_literal_double_expression(cx, e),
        Expression::LiteralFloat(e) => pass.replace_literal_float_expression(cx, e),
        Expression::LiteralBool(e) => pass.replace_literal_bool_expression(cx, e),
        Expression::LiteralString(e) => pass.replace_literal_string_expression(cx, e),
        Expression::LiteralCharacter(e) => pass.replace_literal_character_expression(cx, e),
        Expression::Nil(e) => pass.replace_nil_literal_expression(cx, e),
        Expression::InterpolatedString(e) => pass.replace_interpolated_string_expression(cx, e),
        Expression::Tuple(e) => pass.replace_tuple_expression(cx, e),
        Expression::TupleShuffle(e) => pass.replace_tuple_shuffle_expression(cx, e),
        Expression::Error(e) => pass.replace_error_expression(cx, e),
    };
    cx.pop();
    result
}

/// Recurses into a template's bound subtrees.
pub fn template_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: TemplateExpression,
) -> Expression {
    expression.matches = expression
        .matches
        .into_iter()
        .map(|mut binding| {
            binding.expression = pass.replace_expression(cx, binding.expression);
            binding
        })
        .collect();
    Expression::Template(expression)
}

/// Recurses into a parenthesized expression.
pub fn parenthesized_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: ParenthesizedExpression,
) -> Expression {
    expression.expression = Box::new(pass.replace_expression(cx, *expression.expression));
    Expression::Parenthesized(expression)
}

/// Recurses into a force-unwrap's subexpression.
pub fn force_value_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: ForceValueExpression,
) -> Expression {
    expression.expression = Box::new(pass.replace_expression(cx, *expression.expression));
    Expression::ForceValue(expression)
}

/// Recurses into an optional access's subexpression.
pub fn optional_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: OptionalExpression,
) -> Expression {
    expression.expression = Box::new(pass.replace_expression(cx, *expression.expression));
    Expression::Optional(expression)
}

/// Recurses into a subscript's base and index.
pub fn subscript_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: SubscriptExpression,
) -> Expression {
    expression.subscripted = Box::new(pass.replace_expression(cx, *expression.subscripted));
    expression.index = Box::new(pass.replace_expression(cx, *expression.index));
    Expression::Subscript(expression)
}

/// Recurses into an array literal's elements.
pub fn array_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: ArrayExpression,
) -> Expression {
    expression.elements = expression
        .elements
        .into_iter()
        .map(|element| pass.replace_expression(cx, element))
        .collect();
    Expression::Array(expression)
}

/// Recurses into a dictionary literal's keys and values.
pub fn dictionary_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: DictionaryExpression,
) -> Expression {
    expression.keys = expression
        .keys
        .into_iter()
        .map(|key| pass.replace_expression(cx, key))
        .collect();
    expression.values = expression
        .values
        .into_iter()
        .map(|value| pass.replace_expression(cx, value))
        .collect();
    Expression::Dictionary(expression)
}

/// Recurses into an expression-position return.
pub fn return_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: ReturnExpression,
) -> Expression {
    expression.expression = expression
        .expression
        .map(|inner| Box::new(pass.replace_expression(cx, *inner)));
    Expression::Return(expression)
}

/// Recurses into both sides of a member access.
pub fn dot_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: DotExpression,
) -> Expression {
    expression.left = Box::new(pass.replace_expression(cx, *expression.left));
    expression.right = Box::new(pass.replace_expression(cx, *expression.right));
    Expression::Dot(expression)
}

/// Recurses into both operands of a binary operator.
pub fn binary_operator_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: BinaryOperatorExpression,
) -> Expression {
    expression.left = Box::new(pass.replace_expression(cx, *expression.left));
    expression.right = Box::new(pass.replace_expression(cx, *expression.right));
    Expression::BinaryOperator(expression)
}

/// Recurses into a prefix operator's operand.
pub fn prefix_unary_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: PrefixUnaryExpression,
) -> Expression {
    expression.subexpression = Box::new(pass.replace_expression(cx, *expression.subexpression));
    Expression::PrefixUnary(expression)
}

/// Recurses into a postfix operator's operand.
pub fn postfix_unary_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: PostfixUnaryExpression,
) -> Expression {
    expression.subexpression = Box::new(pass.replace_expression(cx, *expression.subexpression));
    Expression::PostfixUnary(expression)
}

/// Recurses into a ternary conditional's three children.
pub fn if_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: IfExpression,
) -> Expression {
    expression.condition = Box::new(pass.replace_expression(cx, *expression.condition));
    expression.then_expression = Box::new(pass.replace_expression(cx, *expression.then_expression));
    expression.else_expression = Box::new(pass.replace_expression(cx, *expression.else_expression));
    Expression::If(expression)
}

/// Recurses into a call's function and arguments.
pub fn call_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: CallExpression,
) -> Expression {
    expression.function = Box::new(pass.replace_expression(cx, *expression.function));
    expression.parameters = Box::new(pass.replace_expression(cx, *expression.parameters));
    Expression::Call(expression)
}

/// Recurses into a closure's body.
pub fn closure_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: ClosureExpression,
) -> Expression {
    expression.statements = pass.replace_statements(cx, expression.statements);
    Expression::Closure(expression)
}

/// Recurses into an interpolated string's segments.
pub fn interpolated_string_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: InterpolatedStringExpression,
) -> Expression {
    expression.expressions = expression
        .expressions
        .into_iter()
        .map(|segment| pass.replace_expression(cx, segment))
        .collect();
    Expression::InterpolatedString(expression)
}

/// Recurses into a tuple's elements.
pub fn tuple_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: TupleExpression,
) -> Expression {
    expression.pairs = expression
        .pairs
        .into_iter()
        .map(|mut pair| {
            pair.expression = pass.replace_expression(cx, pair.expression);
            pair
        })
        .collect();
    Expression::Tuple(expression)
}

/// Recurses into a tuple shuffle's supplied expressions.
pub fn tuple_shuffle_expression<P: Pass + ?Sized>(
    pass: &mut P,
    cx: &mut PassContext<'_>,
    mut expression: TupleShuffleExpression,
) -> Expression {
    expression.expressions = expression
        .expressions
        .into_iter()
        .map(|supplied| pass.replace_expression(cx, supplied))
        .collect();
    Expression::TupleShuffle(expression)
}
