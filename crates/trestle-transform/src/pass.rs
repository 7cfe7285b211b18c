//! The rewriting traversal every pass is built on.
//!
//! A pass implements [`Pass`], overriding only the hooks for the node kinds
//! it cares about. Every hook has a default implementation that delegates to
//! the matching function in [`walk`](crate::walk), which recurses into the
//! node's children and rebuilds it; an override that wants the default
//! behavior before or after its own logic calls that `walk` function
//! directly.
//!
//! Statement hooks return a `Vec<Statement>`: returning an empty list
//! deletes the statement, and returning several inlines them in order. The
//! `process_*` hooks return a single node (or `Option` where deletion makes
//! sense) for positions where lifting to a list would be awkward.
//!
//! The dispatchers ([`Pass::replace_statement`] and
//! [`Pass::replace_expression`]) maintain a parent stack on the
//! [`PassContext`]: the node being visited is pushed before its hook runs,
//! so [`PassContext::parent`] — the second-to-last entry — is the parent of
//! the node a hook currently sees.

use trestle_ast::AssignmentStatement;
use trestle_ast::ArrayExpression;
use trestle_ast::BinaryOperatorExpression;
use trestle_ast::BreakStatement;
use trestle_ast::CallExpression;
use trestle_ast::CatchStatement;
use trestle_ast::ClassDeclaration;
use trestle_ast::ClosureExpression;
use trestle_ast::CommentStatement;
use trestle_ast::CompanionObject;
use trestle_ast::ContinueStatement;
use trestle_ast::DeclarationReferenceExpression;
use trestle_ast::DeferStatement;
use trestle_ast::Diagnostics;
use trestle_ast::DictionaryExpression;
use trestle_ast::DoStatement;
use trestle_ast::Document;
use trestle_ast::DotExpression;
use trestle_ast::EnumDeclaration;
use trestle_ast::EnumElement;
use trestle_ast::ErrorExpression;
use trestle_ast::ErrorStatement;
use trestle_ast::Expression;
use trestle_ast::ExpressionKind;
use trestle_ast::ExpressionStatement;
use trestle_ast::ExtensionDeclaration;
use trestle_ast::ForEachStatement;
use trestle_ast::ForceValueExpression;
use trestle_ast::FunctionDeclaration;
use trestle_ast::IfCondition;
use trestle_ast::IfExpression;
use trestle_ast::IfStatement;
use trestle_ast::ImportStatement;
use trestle_ast::InitializerDeclaration;
use trestle_ast::InterpolatedStringExpression;
use trestle_ast::LiteralBoolExpression;
use trestle_ast::LiteralCharacterExpression;
use trestle_ast::LiteralCodeExpression;
use trestle_ast::LiteralDoubleExpression;
use trestle_ast::LiteralFloatExpression;
use trestle_ast::LiteralIntExpression;
use trestle_ast::LiteralStringExpression;
use trestle_ast::LiteralUIntExpression;
use trestle_ast::NilLiteralExpression;
use trestle_ast::OptionalExpression;
use trestle_ast::ParenthesizedExpression;
use trestle_ast::PostfixUnaryExpression;
use trestle_ast::PrefixUnaryExpression;
use trestle_ast::ProtocolDeclaration;
use trestle_ast::ReturnExpression;
use trestle_ast::ReturnStatement;
use trestle_ast::Statement;
use trestle_ast::StatementKind;
use trestle_ast::StructDeclaration;
use trestle_ast::SubscriptExpression;
use trestle_ast::SwitchCase;
use trestle_ast::SwitchStatement;
use trestle_ast::TemplateExpression;
use trestle_ast::ThrowStatement;
use trestle_ast::TupleExpression;
use trestle_ast::TupleShuffleExpression;
use trestle_ast::TypeExpression;
use trestle_ast::TypealiasDeclaration;
use trestle_ast::VariableDeclaration;
use trestle_ast::WhileStatement;

use crate::walk;

/// An entry of the parent stack: the kind of a node currently being
/// visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentNode {
    /// A statement of the given kind.
    Statement(StatementKind),
    /// An expression of the given kind.
    Expression(ExpressionKind),
}

/// The traversal state handed to every hook.
#[derive(Debug)]
pub struct PassContext<'a> {
    /// The stack of nodes currently being visited, outermost first. The last
    /// entry is the node whose hook is running.
    parents: Vec<ParentNode>,
    /// The diagnostics collector for the current run.
    pub diagnostics: &'a mut Diagnostics,
}

impl<'a> PassContext<'a> {
    /// Creates a context for a fresh traversal.
    pub fn new(diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            parents: Vec::new(),
            diagnostics,
        }
    }

    /// Gets the parent of the node currently being visited.
    pub fn parent(&self) -> Option<ParentNode> {
        let len = self.parents.len();
        if len < 2 { None } else { Some(self.parents[len - 2]) }
    }

    /// Gets the full stack of nodes being visited, outermost first.
    pub fn parents(&self) -> &[ParentNode] {
        &self.parents
    }

    /// Pushes the node about to be dispatched.
    pub(crate) fn push(&mut self, node: ParentNode) {
        self.parents.push(node);
    }

    /// Pops the node whose dispatch just finished.
    pub(crate) fn pop(&mut self) {
        self.parents.pop();
    }
}

/// A single-purpose tree rewrite.
///
/// Implementations override the hooks for the node kinds they rewrite and
/// inherit shape-preserving recursion for everything else, so a pass with no
/// overrides returns a tree structurally equal to its input.
#[allow(unused_variables)]
pub trait Pass {
    /// The identifier of the pass, for tracing and diagnostic attribution.
    fn name(&self) -> &'static str;

    /// Runs the pass over a whole document, returning the rewritten
    /// document.
    fn run(&mut self, document: Document, diagnostics: &mut Diagnostics) -> Document {
        let mut cx = PassContext::new(diagnostics);
        walk::document(self, &mut cx, document)
    }

    /// Replaces a statement list.
    fn replace_statements(
        &mut self,
        cx: &mut PassContext<'_>,
        statements: Vec<Statement>,
    ) -> Vec<Statement> {
        walk::statements(self, cx, statements)
    }

    /// Replaces a single statement, dispatching to the kind-specific hook.
    fn replace_statement(&mut self, cx: &mut PassContext<'_>, statement: Statement) -> Vec<Statement> {
        walk::statement(self, cx, statement)
    }

    /// Replaces an import statement.
    fn replace_import_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ImportStatement,
    ) -> Vec<Statement> {
        walk::import_statement(self, cx, statement)
    }

    /// Replaces a typealias declaration.
    fn replace_typealias_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: TypealiasDeclaration,
    ) -> Vec<Statement> {
        walk::typealias_declaration(self, cx, declaration)
    }

    /// Replaces an extension declaration.
    fn replace_extension_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: ExtensionDeclaration,
    ) -> Vec<Statement> {
        walk::extension_declaration(self, cx, declaration)
    }

    /// Replaces a class declaration.
    fn replace_class_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: ClassDeclaration,
    ) -> Vec<Statement> {
        walk::class_declaration(self, cx, declaration)
    }

    /// Replaces a struct declaration.
    fn replace_struct_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: StructDeclaration,
    ) -> Vec<Statement> {
        walk::struct_declaration(self, cx, declaration)
    }

    /// Replaces an enum declaration.
    fn replace_enum_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: EnumDeclaration,
    ) -> Vec<Statement> {
        walk::enum_declaration(self, cx, declaration)
    }

    /// Replaces a single enum element.
    fn replace_enum_element(
        &mut self,
        cx: &mut PassContext<'_>,
        element: EnumElement,
    ) -> Vec<EnumElement> {
        walk::enum_element(self, cx, element)
    }

    /// Replaces a protocol declaration.
    fn replace_protocol_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: ProtocolDeclaration,
    ) -> Vec<Statement> {
        walk::protocol_declaration(self, cx, declaration)
    }

    /// Replaces a companion object.
    fn replace_companion_object(
        &mut self,
        cx: &mut PassContext<'_>,
        object: CompanionObject,
    ) -> Vec<Statement> {
        walk::companion_object(self, cx, object)
    }

    /// Replaces a function declaration.
    fn replace_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: FunctionDeclaration,
    ) -> Vec<Statement> {
        walk::function_declaration(self, cx, declaration)
    }

    /// Processes a function declaration; returning `None` deletes it.
    fn process_function_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: FunctionDeclaration,
    ) -> Option<FunctionDeclaration> {
        walk::process_function_declaration(self, cx, declaration)
    }

    /// Replaces an initializer declaration.
    fn replace_initializer_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: InitializerDeclaration,
    ) -> Vec<Statement> {
        walk::initializer_declaration(self, cx, declaration)
    }

    /// Processes an initializer declaration; returning `None` deletes it.
    fn process_initializer_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: InitializerDeclaration,
    ) -> Option<InitializerDeclaration> {
        walk::process_initializer_declaration(self, cx, declaration)
    }

    /// Replaces a variable declaration.
    fn replace_variable_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: VariableDeclaration,
    ) -> Vec<Statement> {
        walk::variable_declaration(self, cx, declaration)
    }

    /// Processes a variable declaration in a position that requires one.
    fn process_variable_declaration(
        &mut self,
        cx: &mut PassContext<'_>,
        declaration: VariableDeclaration,
    ) -> VariableDeclaration {
        walk::process_variable_declaration(self, cx, declaration)
    }

    /// Replaces a `do` block.
    fn replace_do_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: DoStatement,
    ) -> Vec<Statement> {
        walk::do_statement(self, cx, statement)
    }

    /// Replaces a `catch` clause.
    fn replace_catch_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: CatchStatement,
    ) -> Vec<Statement> {
        walk::catch_statement(self, cx, statement)
    }

    /// Replaces a for-each loop.
    fn replace_for_each_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ForEachStatement,
    ) -> Vec<Statement> {
        walk::for_each_statement(self, cx, statement)
    }

    /// Replaces a while loop.
    fn replace_while_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: WhileStatement,
    ) -> Vec<Statement> {
        walk::while_statement(self, cx, statement)
    }

    /// Replaces an if statement.
    fn replace_if_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: IfStatement,
    ) -> Vec<Statement> {
        walk::if_statement(self, cx, statement)
    }

    /// Processes an if statement, including its else chain.
    fn process_if_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: IfStatement,
    ) -> IfStatement {
        walk::process_if_statement(self, cx, statement)
    }

    /// Processes a single if condition.
    fn process_if_condition(
        &mut self,
        cx: &mut PassContext<'_>,
        condition: IfCondition,
    ) -> IfCondition {
        walk::process_if_condition(self, cx, condition)
    }

    /// Replaces a switch statement.
    fn replace_switch_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: SwitchStatement,
    ) -> Vec<Statement> {
        walk::switch_statement(self, cx, statement)
    }

    /// Processes a single switch case.
    fn process_switch_case(&mut self, cx: &mut PassContext<'_>, case: SwitchCase) -> SwitchCase {
        walk::process_switch_case(self, cx, case)
    }

    /// Replaces a deferred block.
    fn replace_defer_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: DeferStatement,
    ) -> Vec<Statement> {
        walk::defer_statement(self, cx, statement)
    }

    /// Replaces a throw statement.
    fn replace_throw_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ThrowStatement,
    ) -> Vec<Statement> {
        walk::throw_statement(self, cx, statement)
    }

    /// Replaces a return statement.
    fn replace_return_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ReturnStatement,
    ) -> Vec<Statement> {
        walk::return_statement(self, cx, statement)
    }

    /// Replaces a break statement.
    fn replace_break_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: BreakStatement,
    ) -> Vec<Statement> {
        walk::break_statement(self, cx, statement)
    }

    /// Replaces a continue statement.
    fn replace_continue_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ContinueStatement,
    ) -> Vec<Statement> {
        walk::continue_statement(self, cx, statement)
    }

    /// Replaces an assignment.
    fn replace_assignment_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: AssignmentStatement,
    ) -> Vec<Statement> {
        walk::assignment_statement(self, cx, statement)
    }

    /// Replaces an expression statement.
    fn replace_expression_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ExpressionStatement,
    ) -> Vec<Statement> {
        walk::expression_statement(self, cx, statement)
    }

    /// Replaces a comment.
    fn replace_comment_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: CommentStatement,
    ) -> Vec<Statement> {
        walk::comment_statement(self, cx, statement)
    }

    /// Replaces an error statement.
    fn replace_error_statement(
        &mut self,
        cx: &mut PassContext<'_>,
        statement: ErrorStatement,
    ) -> Vec<Statement> {
        walk::error_statement(self, cx, statement)
    }

    /// Replaces a single expression, dispatching to the kind-specific hook.
    fn replace_expression(&mut self, cx: &mut PassContext<'_>, expression: Expression) -> Expression {
        walk::expression(self, cx, expression)
    }

    /// Replaces a matched template expression.
    fn replace_template_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: TemplateExpression,
    ) -> Expression {
        walk::template_expression(self, cx, expression)
    }

    /// Replaces a literal-code expression.
    fn replace_literal_code_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralCodeExpression,
    ) -> Expression {
        Expression::LiteralCode(expression)
    }

    /// Replaces a literal-declaration expression.
    fn replace_literal_declaration_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralCodeExpression,
    ) -> Expression {
        Expression::LiteralDeclaration(expression)
    }

    /// Replaces a parenthesized expression.
    fn replace_parenthesized_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ParenthesizedExpression,
    ) -> Expression {
        walk::parenthesized_expression(self, cx, expression)
    }

    /// Replaces a force-unwrap expression.
    fn replace_force_value_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ForceValueExpression,
    ) -> Expression {
        walk::force_value_expression(self, cx, expression)
    }

    /// Replaces an optional-chaining expression.
    fn replace_optional_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: OptionalExpression,
    ) -> Expression {
        walk::optional_expression(self, cx, expression)
    }

    /// Replaces a declaration reference.
    fn replace_declaration_reference_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: DeclarationReferenceExpression,
    ) -> Expression {
        Expression::DeclarationReference(expression)
    }

    /// Replaces a type reference.
    fn replace_type_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: TypeExpression,
    ) -> Expression {
        Expression::Type(expression)
    }

    /// Replaces a subscript expression.
    fn replace_subscript_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: SubscriptExpression,
    ) -> Expression {
        walk::subscript_expression(self, cx, expression)
    }

    /// Replaces an array literal.
    fn replace_array_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ArrayExpression,
    ) -> Expression {
        walk::array_expression(self, cx, expression)
    }

    /// Replaces a dictionary literal.
    fn replace_dictionary_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: DictionaryExpression,
    ) -> Expression {
        walk::dictionary_expression(self, cx, expression)
    }

    /// Replaces a return in expression position.
    fn replace_return_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ReturnExpression,
    ) -> Expression {
        walk::return_expression(self, cx, expression)
    }

    /// Replaces a member access.
    fn replace_dot_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: DotExpression,
    ) -> Expression {
        walk::dot_expression(self, cx, expression)
    }

    /// Replaces a binary operator application.
    fn replace_binary_operator_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: BinaryOperatorExpression,
    ) -> Expression {
        walk::binary_operator_expression(self, cx, expression)
    }

    /// Replaces a prefix unary operator application.
    fn replace_prefix_unary_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: PrefixUnaryExpression,
    ) -> Expression {
        walk::prefix_unary_expression(self, cx, expression)
    }

    /// Replaces a postfix unary operator application.
    fn replace_postfix_unary_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: PostfixUnaryExpression,
    ) -> Expression {
        walk::postfix_unary_expression(self, cx, expression)
    }

    /// Replaces a ternary conditional.
    fn replace_if_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: IfExpression,
    ) -> Expression {
        walk::if_expression(self, cx, expression)
    }

    /// Replaces a call.
    fn replace_call_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: CallExpression,
    ) -> Expression {
        walk::call_expression(self, cx, expression)
    }

    /// Replaces a closure literal.
    fn replace_closure_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ClosureExpression,
    ) -> Expression {
        walk::closure_expression(self, cx, expression)
    }

    /// Replaces a signed integer literal.
    fn replace_literal_int_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralIntExpression,
    ) -> Expression {
        Expression::LiteralInt(expression)
    }

    /// Replaces an unsigned integer literal.
    fn replace_literal_uint_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralUIntExpression,
    ) -> Expression {
        Expression::LiteralUInt(expression)
    }

    /// Replaces a double literal.
    fn replace_literal_double_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralDoubleExpression,
    ) -> Expression {
        Expression::LiteralDouble(expression)
    }

    /// Replaces a float literal.
    fn replace_literal_float_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralFloatExpression,
    ) -> Expression {
        Expression::LiteralFloat(expression)
    }

    /// Replaces a boolean literal.
    fn replace_literal_bool_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralBoolExpression,
    ) -> Expression {
        Expression::LiteralBool(expression)
    }

    /// Replaces a string literal.
    fn replace_literal_string_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralStringExpression,
    ) -> Expression {
        Expression::LiteralString(expression)
    }

    /// Replaces a character literal.
    fn replace_literal_character_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: LiteralCharacterExpression,
    ) -> Expression {
        Expression::LiteralCharacter(expression)
    }

    /// Replaces the nil literal.
    fn replace_nil_literal_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: NilLiteralExpression,
    ) -> Expression {
        Expression::Nil(expression)
    }

    /// Replaces an interpolated string.
    fn replace_interpolated_string_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: InterpolatedStringExpression,
    ) -> Expression {
        walk::interpolated_string_expression(self, cx, expression)
    }

    /// Replaces a tuple literal.
    fn replace_tuple_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: TupleExpression,
    ) -> Expression {
        walk::tuple_expression(self, cx, expression)
    }

    /// Replaces a tuple shuffle.
    fn replace_tuple_shuffle_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: TupleShuffleExpression,
    ) -> Expression {
        walk::tuple_shuffle_expression(self, cx, expression)
    }

    /// Replaces an error expression.
    fn replace_error_expression(
        &mut self,
        cx: &mut PassContext<'_>,
        expression: ErrorExpression,
    ) -> Expression {
        Expression::Error(expression)
    }
}
