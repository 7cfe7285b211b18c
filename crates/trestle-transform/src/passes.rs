//! The concrete passes, one module per rewrite.
//!
//! Every pass follows the same shape: a `const ID` naming it, free
//! functions building any diagnostics it emits, and a struct implementing
//! [`Pass`](crate::Pass) that overrides only the hooks it needs. The
//! ordering constraints between passes live in [`crate::schedule`].

pub mod add_optionals_in_dot_chains;
pub mod anonymous_parameters;
pub mod calls_to_superclass_initializers;
pub mod capitalize_enums;
pub mod clean_inheritances;
pub mod covariance_inits_as_calls;
pub mod description_as_to_string;
pub mod double_negatives_in_guards;
pub mod equatable_operators;
pub mod fix_protocol_contents;
pub mod inner_type_prefixes;
pub mod is_operators_in_sealed_classes;
pub mod mutable_value_type_warnings;
pub mod native_data_structure_warnings;
pub mod omit_implicit_enum_prefixes;
pub mod optional_inits;
pub mod raw_values;
pub mod rearrange_if_lets;
pub mod record_enums;
pub mod record_functions;
pub mod record_protocols;
pub mod record_templates;
pub mod refactor_optionals_in_subscripts;
pub mod remove_breaks_in_switches;
pub mod remove_extensions;
pub mod remove_extra_returns_in_inits;
pub mod remove_implicit_declarations;
pub mod remove_parentheses;
pub mod rename_operators;
pub mod replace_templates;
pub mod return_if_nil;
pub mod returns_in_lambdas;
pub mod self_to_this;
pub mod shadowed_if_let_as_to_is;
pub mod side_effects_in_if_lets;
pub mod standard_library_warnings;
pub mod static_members;
pub mod switches_to_expressions;

pub use add_optionals_in_dot_chains::AddOptionalsInDotChainsPass;
pub use anonymous_parameters::AnonymousParametersPass;
pub use calls_to_superclass_initializers::CallsToSuperclassInitializersPass;
pub use capitalize_enums::CapitalizeEnumsPass;
pub use clean_inheritances::CleanInheritancesPass;
pub use covariance_inits_as_calls::CovarianceInitsAsCallsPass;
pub use description_as_to_string::DescriptionAsToStringPass;
pub use double_negatives_in_guards::DoubleNegativesInGuardsPass;
pub use equatable_operators::EquatableOperatorsPass;
pub use fix_protocol_contents::FixProtocolContentsPass;
pub use inner_type_prefixes::InnerTypePrefixesPass;
pub use is_operators_in_sealed_classes::IsOperatorsInSealedClassesPass;
pub use mutable_value_type_warnings::MutableValueTypeWarningsPass;
pub use native_data_structure_warnings::NativeDataStructureWarningsPass;
pub use omit_implicit_enum_prefixes::OmitImplicitEnumPrefixesPass;
pub use optional_inits::OptionalInitsPass;
pub use raw_values::RawValuesPass;
pub use rearrange_if_lets::RearrangeIfLetsPass;
pub use record_enums::RecordEnumsPass;
pub use record_functions::RecordFunctionsPass;
pub use record_protocols::RecordProtocolsPass;
pub use record_templates::RecordTemplatesPass;
pub use refactor_optionals_in_subscripts::RefactorOptionalsInSubscriptsPass;
pub use remove_breaks_in_switches::RemoveBreaksInSwitchesPass;
pub use remove_extensions::RemoveExtensionsPass;
pub use remove_extra_returns_in_inits::RemoveExtraReturnsInInitsPass;
pub use remove_implicit_declarations::RemoveImplicitDeclarationsPass;
pub use remove_parentheses::RemoveParenthesesPass;
pub use rename_operators::RenameOperatorsPass;
pub use replace_templates::ReplaceTemplatesPass;
pub use return_if_nil::ReturnIfNilPass;
pub use returns_in_lambdas::ReturnsInLambdasPass;
pub use self_to_this::SelfToThisPass;
pub use shadowed_if_let_as_to_is::ShadowedIfLetAsToIsPass;
pub use side_effects_in_if_lets::WarnSideEffectsInIfLetsPass;
pub use standard_library_warnings::StandardLibraryWarningsPass;
pub use static_members::StaticMembersPass;
pub use switches_to_expressions::SwitchesToExpressionsPass;
