use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// This enum can be printed using the [`fmt::Display`] trait.
/// It's used in diagnostics, for instance when a transformation leaves a node behind that its
/// parent has no place for.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum NodeKind {
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::SchemaDefinition]
    SchemaDefinition,
    /// See: [crate::ast::ScalarTypeDefinition]
    ScalarTypeDefinition,
    /// See: [crate::ast::ObjectTypeDefinition]
    ObjectTypeDefinition,
    /// See: [crate::ast::InterfaceTypeDefinition]
    InterfaceTypeDefinition,
    /// See: [crate::ast::UnionTypeDefinition]
    UnionTypeDefinition,
    /// See: [crate::ast::EnumTypeDefinition]
    EnumTypeDefinition,
    /// See: [crate::ast::InputObjectTypeDefinition]
    InputObjectTypeDefinition,
    /// See: [crate::ast::DirectiveDefinition]
    DirectiveDefinition,
    /// See: [crate::ast::SchemaExtension]
    SchemaExtension,
    /// See: [crate::ast::ScalarTypeExtension]
    ScalarTypeExtension,
    /// See: [crate::ast::ObjectTypeExtension]
    ObjectTypeExtension,
    /// See: [crate::ast::InterfaceTypeExtension]
    InterfaceTypeExtension,
    /// See: [crate::ast::UnionTypeExtension]
    UnionTypeExtension,
    /// See: [crate::ast::EnumTypeExtension]
    EnumTypeExtension,
    /// See: [crate::ast::InputObjectTypeExtension]
    InputObjectTypeExtension,
    /// See: [crate::ast::OperationTypeDefinition]
    OperationTypeDefinition,
    /// See: [crate::ast::FieldDefinition]
    FieldDefinition,
    /// See: [crate::ast::InputValueDefinition]
    InputValueDefinition,
    /// See: [crate::ast::EnumValueDefinition]
    EnumValueDefinition,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: `List` on [crate::ast::Type]
    ListType,
    /// See: `NonNull` on [crate::ast::Type]
    NonNullType,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::IntValue]
    Int,
    /// See: [crate::ast::FloatValue]
    Float,
    /// See: [crate::ast::StringValue]
    String,
    /// See: [crate::ast::BooleanValue]
    Boolean,
    /// See: [crate::ast::NullValue]
    Null,
    /// See: [crate::ast::EnumValue]
    Enum,
    /// See: [crate::ast::ListValue]
    List,
    /// See: [crate::ast::ObjectValue]
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Document => f.write_str("Document"),
            NodeKind::OperationDefinition => f.write_str("Operation Definition"),
            NodeKind::FragmentDefinition => f.write_str("Fragment Definition"),
            NodeKind::SchemaDefinition => f.write_str("Schema Definition"),
            NodeKind::ScalarTypeDefinition => f.write_str("Scalar Type Definition"),
            NodeKind::ObjectTypeDefinition => f.write_str("Object Type Definition"),
            NodeKind::InterfaceTypeDefinition => f.write_str("Interface Type Definition"),
            NodeKind::UnionTypeDefinition => f.write_str("Union Type Definition"),
            NodeKind::EnumTypeDefinition => f.write_str("Enum Type Definition"),
            NodeKind::InputObjectTypeDefinition => f.write_str("Input Object Type Definition"),
            NodeKind::DirectiveDefinition => f.write_str("Directive Definition"),
            NodeKind::SchemaExtension => f.write_str("Schema Extension"),
            NodeKind::ScalarTypeExtension => f.write_str("Scalar Type Extension"),
            NodeKind::ObjectTypeExtension => f.write_str("Object Type Extension"),
            NodeKind::InterfaceTypeExtension => f.write_str("Interface Type Extension"),
            NodeKind::UnionTypeExtension => f.write_str("Union Type Extension"),
            NodeKind::EnumTypeExtension => f.write_str("Enum Type Extension"),
            NodeKind::InputObjectTypeExtension => f.write_str("Input Object Type Extension"),
            NodeKind::OperationTypeDefinition => f.write_str("Operation Type Definition"),
            NodeKind::FieldDefinition => f.write_str("Field Definition"),
            NodeKind::InputValueDefinition => f.write_str("Input Value Definition"),
            NodeKind::EnumValueDefinition => f.write_str("Enum Value Definition"),
            NodeKind::VariableDefinition => f.write_str("Variable Definition"),
            NodeKind::Field => f.write_str("Field"),
            NodeKind::FragmentSpread => f.write_str("Fragment Spread"),
            NodeKind::InlineFragment => f.write_str("Inline Fragment"),
            NodeKind::Argument => f.write_str("Argument"),
            NodeKind::Directive => f.write_str("Directive"),
            NodeKind::ObjectField => f.write_str("Object Field"),
            NodeKind::NamedType => f.write_str("Type Name"),
            NodeKind::ListType => f.write_str("List Type"),
            NodeKind::NonNullType => f.write_str("Non-null Type"),
            NodeKind::Variable => f.write_str("Variable"),
            NodeKind::Int => f.write_str("Integer"),
            NodeKind::Float => f.write_str("Float"),
            NodeKind::String => f.write_str("String"),
            NodeKind::Boolean => f.write_str("Boolean"),
            NodeKind::Null => f.write_str("Null"),
            NodeKind::Enum => f.write_str("Enum"),
            NodeKind::List => f.write_str("List"),
            NodeKind::Object => f.write_str("Object"),
        }
    }
}
