use super::ast::*;
use super::ast_kind::NodeKind;

/// A universal AST node.
///
/// Every node of a GraphQL document can be wrapped in this enum, which is what the generic
/// transformation machinery in [`crate::visit`] operates on. Nodes are grouped into their
/// closed families, so a `Node` is always one of the thirteen variants below, with
/// [`Node::kind`] refining the family to the concrete node.
#[derive(Debug, PartialEq, Clone)]
pub enum Node<'a> {
    Document(Document<'a>),
    Definition(Definition<'a>),
    Selection(Selection<'a>),
    Type(Type<'a>),
    Value(Value<'a>),
    Argument(Argument<'a>),
    Directive(Directive<'a>),
    ObjectField(ObjectField<'a>),
    VariableDefinition(VariableDefinition<'a>),
    InputValueDefinition(InputValueDefinition<'a>),
    FieldDefinition(FieldDefinition<'a>),
    EnumValueDefinition(EnumValueDefinition<'a>),
    OperationTypeDefinition(OperationTypeDefinition<'a>),
}

impl<'a> Node<'a> {
    /// The concrete kind of AST node this `Node` wraps.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Document(_) => NodeKind::Document,
            Node::Definition(definition) => match definition {
                Definition::Operation(_) => NodeKind::OperationDefinition,
                Definition::Fragment(_) => NodeKind::FragmentDefinition,
                Definition::Schema(_) => NodeKind::SchemaDefinition,
                Definition::Type(TypeDefinition::Scalar(_)) => NodeKind::ScalarTypeDefinition,
                Definition::Type(TypeDefinition::Object(_)) => NodeKind::ObjectTypeDefinition,
                Definition::Type(TypeDefinition::Interface(_)) => NodeKind::InterfaceTypeDefinition,
                Definition::Type(TypeDefinition::Union(_)) => NodeKind::UnionTypeDefinition,
                Definition::Type(TypeDefinition::Enum(_)) => NodeKind::EnumTypeDefinition,
                Definition::Type(TypeDefinition::InputObject(_)) => {
                    NodeKind::InputObjectTypeDefinition
                }
                Definition::Directive(_) => NodeKind::DirectiveDefinition,
                Definition::TypeSystemExtension(extension) => match extension {
                    TypeSystemExtension::Schema(_) => NodeKind::SchemaExtension,
                    TypeSystemExtension::Scalar(_) => NodeKind::ScalarTypeExtension,
                    TypeSystemExtension::Object(_) => NodeKind::ObjectTypeExtension,
                    TypeSystemExtension::Interface(_) => NodeKind::InterfaceTypeExtension,
                    TypeSystemExtension::Union(_) => NodeKind::UnionTypeExtension,
                    TypeSystemExtension::Enum(_) => NodeKind::EnumTypeExtension,
                    TypeSystemExtension::InputObject(_) => NodeKind::InputObjectTypeExtension,
                },
            },
            Node::Selection(selection) => match selection {
                Selection::Field(_) => NodeKind::Field,
                Selection::FragmentSpread(_) => NodeKind::FragmentSpread,
                Selection::InlineFragment(_) => NodeKind::InlineFragment,
            },
            Node::Type(of_type) => match of_type {
                Type::Named(_) => NodeKind::NamedType,
                Type::List(_) => NodeKind::ListType,
                Type::NonNull(_) => NodeKind::NonNullType,
            },
            Node::Value(value) => match value {
                Value::Variable(_) => NodeKind::Variable,
                Value::Int(_) => NodeKind::Int,
                Value::Float(_) => NodeKind::Float,
                Value::String(_) => NodeKind::String,
                Value::Boolean(_) => NodeKind::Boolean,
                Value::Null(_) => NodeKind::Null,
                Value::Enum(_) => NodeKind::Enum,
                Value::List(_) => NodeKind::List,
                Value::Object(_) => NodeKind::Object,
            },
            Node::Argument(_) => NodeKind::Argument,
            Node::Directive(_) => NodeKind::Directive,
            Node::ObjectField(_) => NodeKind::ObjectField,
            Node::VariableDefinition(_) => NodeKind::VariableDefinition,
            Node::InputValueDefinition(_) => NodeKind::InputValueDefinition,
            Node::FieldDefinition(_) => NodeKind::FieldDefinition,
            Node::EnumValueDefinition(_) => NodeKind::EnumValueDefinition,
            Node::OperationTypeDefinition(_) => NodeKind::OperationTypeDefinition,
        }
    }

    /// The provenance of this node in its source text, if it has one.
    pub fn source_location(&self) -> Option<SourceLocation<'a>> {
        match self {
            Node::Document(x) => x.source_location,
            Node::Definition(definition) => match definition {
                Definition::Operation(x) => x.source_location,
                Definition::Fragment(x) => x.source_location,
                Definition::Schema(x) => x.source_location,
                Definition::Type(TypeDefinition::Scalar(x)) => x.source_location,
                Definition::Type(TypeDefinition::Object(x)) => x.source_location,
                Definition::Type(TypeDefinition::Interface(x)) => x.source_location,
                Definition::Type(TypeDefinition::Union(x)) => x.source_location,
                Definition::Type(TypeDefinition::Enum(x)) => x.source_location,
                Definition::Type(TypeDefinition::InputObject(x)) => x.source_location,
                Definition::Directive(x) => x.source_location,
                Definition::TypeSystemExtension(extension) => match extension {
                    TypeSystemExtension::Schema(x) => x.source_location,
                    TypeSystemExtension::Scalar(x) => x.source_location,
                    TypeSystemExtension::Object(x) => x.source_location,
                    TypeSystemExtension::Interface(x) => x.source_location,
                    TypeSystemExtension::Union(x) => x.source_location,
                    TypeSystemExtension::Enum(x) => x.source_location,
                    TypeSystemExtension::InputObject(x) => x.source_location,
                },
            },
            Node::Selection(selection) => match selection {
                Selection::Field(x) => x.source_location,
                Selection::FragmentSpread(x) => x.source_location,
                Selection::InlineFragment(x) => x.source_location,
            },
            // List and non-null wrappers don't carry locations of their own
            Node::Type(of_type) => match of_type {
                Type::Named(x) => x.source_location,
                Type::List(_) | Type::NonNull(_) => None,
            },
            Node::Value(value) => match value {
                Value::Variable(x) => x.source_location,
                Value::Int(x) => x.source_location,
                Value::Float(x) => x.source_location,
                Value::String(x) => x.source_location,
                Value::Boolean(x) => x.source_location,
                Value::Null(x) => x.source_location,
                Value::Enum(x) => x.source_location,
                Value::List(x) => x.source_location,
                Value::Object(x) => x.source_location,
            },
            Node::Argument(x) => x.source_location,
            Node::Directive(x) => x.source_location,
            Node::ObjectField(x) => x.source_location,
            Node::VariableDefinition(x) => x.source_location,
            Node::InputValueDefinition(x) => x.source_location,
            Node::FieldDefinition(x) => x.source_location,
            Node::EnumValueDefinition(x) => x.source_location,
            Node::OperationTypeDefinition(x) => x.source_location,
        }
    }

    /// The flattened, ordered list of this node's children, cloned into a fresh arena list.
    ///
    /// The order is the fixed declaration order of the node's child-bearing members; it's the
    /// order transformations traverse and the order [`crate::visit::NodeContainer`] observes
    /// when a node is rebuilt. Leaf nodes return an empty list.
    ///
    /// Type references, default values on input values and field arguments, and nullability
    /// designators aren't children; they're carried along unchanged by transformations.
    pub fn children(&self, ctx: &'a ASTContext) -> bumpalo::collections::Vec<'a, Node<'a>> {
        let mut children = bumpalo::collections::Vec::new_in(&ctx.arena);
        match self {
            Node::Document(document) => {
                children.extend(document.definitions.iter().cloned().map(Node::Definition));
            }
            Node::Definition(Definition::Operation(operation)) => {
                children.extend(
                    operation
                        .variable_definitions
                        .iter()
                        .cloned()
                        .map(Node::VariableDefinition),
                );
                children.extend(operation.directives.iter().cloned().map(Node::Directive));
                children.extend(operation.selections.iter().cloned().map(Node::Selection));
            }
            Node::Definition(Definition::Fragment(fragment)) => {
                children.extend(fragment.directives.iter().cloned().map(Node::Directive));
                children.extend(fragment.selections.iter().cloned().map(Node::Selection));
                children.push(Node::Type(Type::Named(fragment.type_condition)));
            }
            Node::Definition(Definition::Schema(schema)) => {
                children.extend(schema.directives.iter().cloned().map(Node::Directive));
                children.extend(
                    schema
                        .operation_types
                        .iter()
                        .cloned()
                        .map(Node::OperationTypeDefinition),
                );
            }
            Node::Definition(Definition::Type(TypeDefinition::Scalar(scalar))) => {
                children.extend(scalar.directives.iter().cloned().map(Node::Directive));
            }
            Node::Definition(Definition::Type(TypeDefinition::Object(object))) => {
                children.extend(object.directives.iter().cloned().map(Node::Directive));
                if let Some(fields) = &object.fields {
                    children.extend(fields.iter().cloned().map(Node::FieldDefinition));
                }
            }
            Node::Definition(Definition::Type(TypeDefinition::Interface(interface))) => {
                children.extend(interface.directives.iter().cloned().map(Node::Directive));
                children.extend(interface.fields.iter().cloned().map(Node::FieldDefinition));
            }
            Node::Definition(Definition::Type(TypeDefinition::Union(union))) => {
                children.extend(union.directives.iter().cloned().map(Node::Directive));
                children.extend(
                    union
                        .members
                        .iter()
                        .map(|member| Node::Type(Type::Named(*member))),
                );
            }
            Node::Definition(Definition::Type(TypeDefinition::Enum(enum_type))) => {
                children.extend(enum_type.directives.iter().cloned().map(Node::Directive));
                children.extend(
                    enum_type
                        .values
                        .iter()
                        .cloned()
                        .map(Node::EnumValueDefinition),
                );
            }
            Node::Definition(Definition::Type(TypeDefinition::InputObject(input_object))) => {
                children.extend(input_object.directives.iter().cloned().map(Node::Directive));
                children.extend(
                    input_object
                        .input_fields
                        .iter()
                        .cloned()
                        .map(Node::InputValueDefinition),
                );
            }
            Node::Definition(Definition::Directive(directive)) => {
                children.extend(
                    directive
                        .arguments
                        .iter()
                        .cloned()
                        .map(Node::InputValueDefinition),
                );
            }
            Node::Definition(Definition::TypeSystemExtension(extension)) => match extension {
                TypeSystemExtension::Schema(schema) => {
                    children.extend(schema.directives.iter().cloned().map(Node::Directive));
                    children.extend(
                        schema
                            .operation_types
                            .iter()
                            .cloned()
                            .map(Node::OperationTypeDefinition),
                    );
                }
                TypeSystemExtension::Scalar(scalar) => {
                    children.extend(scalar.directives.iter().cloned().map(Node::Directive));
                }
                TypeSystemExtension::Object(object) => {
                    children.extend(object.directives.iter().cloned().map(Node::Directive));
                    children.extend(object.fields.iter().cloned().map(Node::FieldDefinition));
                }
                TypeSystemExtension::Interface(interface) => {
                    children.extend(interface.directives.iter().cloned().map(Node::Directive));
                    children.extend(interface.fields.iter().cloned().map(Node::FieldDefinition));
                }
                TypeSystemExtension::Union(union) => {
                    children.extend(union.directives.iter().cloned().map(Node::Directive));
                    children.extend(
                        union
                            .members
                            .iter()
                            .map(|member| Node::Type(Type::Named(*member))),
                    );
                }
                TypeSystemExtension::Enum(enum_type) => {
                    children.extend(enum_type.directives.iter().cloned().map(Node::Directive));
                    children.extend(
                        enum_type
                            .values
                            .iter()
                            .cloned()
                            .map(Node::EnumValueDefinition),
                    );
                }
                TypeSystemExtension::InputObject(input_object) => {
                    children.extend(input_object.directives.iter().cloned().map(Node::Directive));
                    children.extend(
                        input_object
                            .input_fields
                            .iter()
                            .cloned()
                            .map(Node::InputValueDefinition),
                    );
                }
            },
            Node::Selection(Selection::Field(field)) => {
                children.extend(field.selections.iter().cloned().map(Node::Selection));
                children.extend(field.arguments.iter().cloned().map(Node::Argument));
                children.extend(field.directives.iter().cloned().map(Node::Directive));
            }
            Node::Selection(Selection::FragmentSpread(spread)) => {
                children.extend(spread.directives.iter().cloned().map(Node::Directive));
            }
            Node::Selection(Selection::InlineFragment(inline)) => {
                children.extend(inline.directives.iter().cloned().map(Node::Directive));
                children.extend(inline.selections.iter().cloned().map(Node::Selection));
                if let Some(type_condition) = inline.type_condition {
                    children.push(Node::Type(Type::Named(type_condition)));
                }
            }
            Node::Type(of_type) => match of_type {
                Type::Named(_) => {}
                Type::List(inner) | Type::NonNull(inner) => {
                    children.push(Node::Type(**inner));
                }
            },
            Node::Value(value) => match value {
                Value::List(list) => {
                    children.extend(list.values.iter().cloned().map(Node::Value));
                }
                Value::Object(object) => {
                    children.extend(object.fields.iter().cloned().map(Node::ObjectField));
                }
                _ => {}
            },
            Node::Argument(argument) => {
                children.push(Node::Value(argument.value.clone()));
            }
            Node::Directive(directive) => {
                children.extend(directive.arguments.iter().cloned().map(Node::Argument));
            }
            Node::ObjectField(field) => {
                children.push(Node::Value(field.value.clone()));
            }
            Node::VariableDefinition(variable_definition) => {
                if let Some(default_value) = &variable_definition.default_value {
                    children.push(Node::Value(default_value.clone()));
                }
                children.extend(
                    variable_definition
                        .directives
                        .iter()
                        .cloned()
                        .map(Node::Directive),
                );
            }
            Node::InputValueDefinition(input_value) => {
                children.extend(input_value.directives.iter().cloned().map(Node::Directive));
            }
            Node::FieldDefinition(field_definition) => {
                children.extend(
                    field_definition
                        .directives
                        .iter()
                        .cloned()
                        .map(Node::Directive),
                );
                children.extend(
                    field_definition
                        .arguments
                        .iter()
                        .cloned()
                        .map(Node::InputValueDefinition),
                );
            }
            Node::EnumValueDefinition(enum_value) => {
                children.extend(enum_value.directives.iter().cloned().map(Node::Directive));
            }
            Node::OperationTypeDefinition(_) => {}
        };
        children
    }

    /// The node's name, for the kinds of nodes that carry one.
    ///
    /// For fields this is the field's name, never its alias.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Node::Document(_) => None,
            Node::Definition(definition) => match definition {
                Definition::Operation(operation) => operation.name,
                Definition::Fragment(fragment) => Some(fragment.name),
                Definition::Schema(_) => None,
                Definition::Type(type_definition) => Some(type_definition.name()),
                Definition::Directive(directive) => Some(directive.name),
                Definition::TypeSystemExtension(extension) => extension.name(),
            },
            Node::Selection(selection) => match selection {
                Selection::Field(field) => Some(field.name),
                Selection::FragmentSpread(spread) => Some(spread.name),
                Selection::InlineFragment(_) => None,
            },
            Node::Type(of_type) => match of_type {
                Type::Named(named) => Some(named.name),
                _ => None,
            },
            Node::Value(Value::Variable(variable)) => Some(variable.name),
            Node::Value(_) => None,
            Node::Argument(argument) => Some(argument.name),
            Node::Directive(directive) => Some(directive.name),
            Node::ObjectField(field) => Some(field.name),
            Node::VariableDefinition(variable_definition) => Some(variable_definition.name),
            Node::InputValueDefinition(input_value) => Some(input_value.name),
            Node::FieldDefinition(field_definition) => Some(field_definition.name),
            Node::EnumValueDefinition(enum_value) => Some(enum_value.name),
            Node::OperationTypeDefinition(_) => None,
        }
    }

    /// The node's description, for the kinds of nodes that carry one.
    pub fn description(&self) -> Option<&'a str> {
        match self {
            Node::Definition(definition) => match definition {
                Definition::Operation(operation) => operation.description,
                Definition::Fragment(fragment) => fragment.description,
                Definition::Schema(schema) => schema.description,
                Definition::Type(type_definition) => type_definition.description(),
                Definition::Directive(directive) => directive.description,
                Definition::TypeSystemExtension(_) => None,
            },
            Node::InputValueDefinition(input_value) => input_value.description,
            Node::FieldDefinition(field_definition) => field_definition.description,
            Node::EnumValueDefinition(enum_value) => enum_value.description,
            _ => None,
        }
    }

    /// The node's attached directives. Nodes that can't carry directives return an empty slice.
    pub fn directives(&self) -> &[Directive<'a>] {
        match self {
            Node::Definition(definition) => definition.directives(),
            Node::Selection(selection) => selection.directives(),
            Node::VariableDefinition(variable_definition) => &variable_definition.directives,
            Node::InputValueDefinition(input_value) => &input_value.directives,
            Node::FieldDefinition(field_definition) => &field_definition.directives,
            Node::EnumValueDefinition(enum_value) => &enum_value.directives,
            _ => &[],
        }
    }
}

impl<'a> From<Document<'a>> for Node<'a> {
    #[inline]
    fn from(x: Document<'a>) -> Self {
        Node::Document(x)
    }
}

impl<'a> From<Definition<'a>> for Node<'a> {
    #[inline]
    fn from(x: Definition<'a>) -> Self {
        Node::Definition(x)
    }
}

impl<'a> From<Selection<'a>> for Node<'a> {
    #[inline]
    fn from(x: Selection<'a>) -> Self {
        Node::Selection(x)
    }
}

impl<'a> From<Type<'a>> for Node<'a> {
    #[inline]
    fn from(x: Type<'a>) -> Self {
        Node::Type(x)
    }
}

impl<'a> From<Value<'a>> for Node<'a> {
    #[inline]
    fn from(x: Value<'a>) -> Self {
        Node::Value(x)
    }
}

impl<'a> From<Argument<'a>> for Node<'a> {
    #[inline]
    fn from(x: Argument<'a>) -> Self {
        Node::Argument(x)
    }
}

impl<'a> From<Directive<'a>> for Node<'a> {
    #[inline]
    fn from(x: Directive<'a>) -> Self {
        Node::Directive(x)
    }
}

impl<'a> From<ObjectField<'a>> for Node<'a> {
    #[inline]
    fn from(x: ObjectField<'a>) -> Self {
        Node::ObjectField(x)
    }
}

impl<'a> From<VariableDefinition<'a>> for Node<'a> {
    #[inline]
    fn from(x: VariableDefinition<'a>) -> Self {
        Node::VariableDefinition(x)
    }
}

impl<'a> From<InputValueDefinition<'a>> for Node<'a> {
    #[inline]
    fn from(x: InputValueDefinition<'a>) -> Self {
        Node::InputValueDefinition(x)
    }
}

impl<'a> From<FieldDefinition<'a>> for Node<'a> {
    #[inline]
    fn from(x: FieldDefinition<'a>) -> Self {
        Node::FieldDefinition(x)
    }
}

impl<'a> From<EnumValueDefinition<'a>> for Node<'a> {
    #[inline]
    fn from(x: EnumValueDefinition<'a>) -> Self {
        Node::EnumValueDefinition(x)
    }
}

impl<'a> From<OperationTypeDefinition<'a>> for Node<'a> {
    #[inline]
    fn from(x: OperationTypeDefinition<'a>) -> Self {
        Node::OperationTypeDefinition(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_children_order() {
        let ctx = ASTContext::new();
        let mut field = Field::new_leaf(&ctx, "hero");
        field.selections.push(Selection::Field(Field::new_leaf(&ctx, "name")));
        field.arguments.push(Argument {
            name: "episode",
            value: Value::Enum(EnumValue {
                value: "EMPIRE",
                source_location: None,
            }),
            source_location: None,
        });
        field.directives.push(Directive::new(&ctx, "include"));

        let node = Node::Selection(Selection::Field(field));
        let children = node.children(&ctx);
        let kinds: Vec<NodeKind> = children.iter().map(|child| child.kind()).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Field, NodeKind::Argument, NodeKind::Directive]
        );
    }

    #[test]
    fn fragment_children_include_type_condition() {
        let ctx = ASTContext::new();
        let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
        selections.push(Selection::Field(Field::new_leaf(&ctx, "name")));
        let fragment = Definition::Fragment(FragmentDefinition {
            name: "F",
            type_condition: NamedType::from("Character"),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            selections,
            description: None,
            source_location: None,
        });
        let children = Node::Definition(fragment).children(&ctx);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].kind(), NodeKind::Field);
        assert_eq!(children[1].kind(), NodeKind::NamedType);
        assert_eq!(children[1].name(), Some("Character"));
    }

    #[test]
    fn leaves_have_no_children() {
        let ctx = ASTContext::new();
        let value = Node::Value(Value::Int(IntValue::from(42)));
        assert!(value.children(&ctx).is_empty());
        let named = Node::Type(Type::Named(NamedType::from("Int")));
        assert!(named.children(&ctx).is_empty());
    }

    #[test]
    fn wrapped_types_unwrap_one_level() {
        let ctx = ASTContext::new();
        let of_type = Type::Named(NamedType::from("Int"))
            .into_nonnull(&ctx)
            .into_list(&ctx);
        let node = Node::Type(of_type);
        assert_eq!(node.kind(), NodeKind::ListType);
        let children = node.children(&ctx);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind(), NodeKind::NonNullType);
    }
}
