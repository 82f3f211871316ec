use super::container::NodeContainer;
use crate::ast::*;

/// A transformer's decision for a single rebuilt node.
pub enum TransformResult<'a> {
    /// Carry the rebuilt node into the output tree unchanged.
    Keep,
    /// Remove the node, and with it its subtree, from the output tree.
    Delete,
    /// Substitute another node in place of the rebuilt one. The replacement isn't traversed
    /// again and its kind must fit the parent's child slots.
    Replace(Node<'a>),
}

/// Trait for transforming an AST into a modified copy of itself.
///
/// The transformer is offered every node of the tree exactly once, bottom-up: by the time it
/// sees a node, that node has already been rebuilt around the transformed versions of its
/// children. Deleting or replacing a node therefore composes with decisions made further down
/// the tree.
pub trait NodeTransformer<'a> {
    fn transform(&mut self, ctx: &'a ASTContext, node: &Node<'a>) -> TransformResult<'a>;
}

impl<'a, F> NodeTransformer<'a> for F
where
    F: FnMut(&'a ASTContext, &Node<'a>) -> TransformResult<'a>,
{
    #[inline]
    fn transform(&mut self, ctx: &'a ASTContext, node: &Node<'a>) -> TransformResult<'a> {
        self(ctx, node)
    }
}

impl<'a> Node<'a> {
    /// Transforms the subtree rooted at this node, returning the new root or `None` when the
    /// transformer deleted it.
    pub fn transform<T: NodeTransformer<'a>>(
        &self,
        ctx: &'a ASTContext,
        transformer: &mut T,
    ) -> Option<Node<'a>> {
        let mut new_children = bumpalo::collections::Vec::new_in(&ctx.arena);
        for child in self.children(ctx).iter() {
            if let Some(new_child) = child.transform(ctx, transformer) {
                new_children.push(new_child);
            }
        }
        let rebuilt = self.copy_with_new_children(ctx, new_children);
        match transformer.transform(ctx, &rebuilt) {
            TransformResult::Keep => Some(rebuilt),
            TransformResult::Delete => None,
            TransformResult::Replace(replacement) => Some(replacement),
        }
    }

    /// Copies this node with the given list of children in place of its own.
    ///
    /// The children are sorted back into the node's typed child lists via a [`NodeContainer`].
    /// Members that aren't children, like type references and names, are carried over from
    /// `self`. Panics when a child is left over that this node has no place for.
    pub fn copy_with_new_children(
        &self,
        ctx: &'a ASTContext,
        children: bumpalo::collections::Vec<'a, Node<'a>>,
    ) -> Node<'a> {
        let mut container = NodeContainer::new(ctx, children);
        let rebuilt = self.rebuild(&mut container);
        container.assert_drained();
        rebuilt
    }

    fn rebuild(&self, container: &mut NodeContainer<'a>) -> Node<'a> {
        match self {
            Node::Document(document) => Node::Document(Document {
                definitions: container.take(),
                source_location: document.source_location,
            }),
            Node::Definition(Definition::Operation(operation)) => {
                Node::Definition(Definition::Operation(OperationDefinition {
                    operation: operation.operation,
                    name: operation.name,
                    variable_definitions: container.take(),
                    directives: container.take(),
                    selections: container.take(),
                    description: operation.description,
                    source_location: operation.source_location,
                }))
            }
            Node::Definition(Definition::Fragment(fragment)) => {
                Node::Definition(Definition::Fragment(FragmentDefinition {
                    name: fragment.name,
                    type_condition: container
                        .take_single::<NamedType>()
                        .expect("Fragment definition is missing its type condition"),
                    directives: container.take(),
                    selections: container.take(),
                    description: fragment.description,
                    source_location: fragment.source_location,
                }))
            }
            Node::Definition(Definition::Schema(schema)) => {
                Node::Definition(Definition::Schema(SchemaDefinition {
                    description: schema.description,
                    directives: container.take(),
                    operation_types: container.take(),
                    source_location: schema.source_location,
                }))
            }
            Node::Definition(Definition::Type(TypeDefinition::Scalar(scalar))) => {
                Node::Definition(Definition::Type(TypeDefinition::Scalar(
                    ScalarTypeDefinition {
                        description: scalar.description,
                        name: scalar.name,
                        directives: container.take(),
                        source_location: scalar.source_location,
                    },
                )))
            }
            Node::Definition(Definition::Type(TypeDefinition::Object(object))) => {
                Node::Definition(Definition::Type(TypeDefinition::Object(
                    ObjectTypeDefinition {
                        description: object.description,
                        name: object.name,
                        implements_interfaces: object.implements_interfaces.clone(),
                        directives: container.take(),
                        // A bodyless type stays bodyless, a type with a body keeps it even
                        // when the transformation emptied it
                        fields: object.fields.as_ref().map(|_| container.take()),
                        source_location: object.source_location,
                    },
                )))
            }
            Node::Definition(Definition::Type(TypeDefinition::Interface(interface))) => {
                Node::Definition(Definition::Type(TypeDefinition::Interface(
                    InterfaceTypeDefinition {
                        description: interface.description,
                        name: interface.name,
                        implements_interfaces: interface.implements_interfaces.clone(),
                        directives: container.take(),
                        fields: container.take(),
                        source_location: interface.source_location,
                    },
                )))
            }
            Node::Definition(Definition::Type(TypeDefinition::Union(union))) => {
                Node::Definition(Definition::Type(TypeDefinition::Union(UnionTypeDefinition {
                    description: union.description,
                    name: union.name,
                    directives: container.take(),
                    members: container.take(),
                    source_location: union.source_location,
                })))
            }
            Node::Definition(Definition::Type(TypeDefinition::Enum(enum_type))) => {
                Node::Definition(Definition::Type(TypeDefinition::Enum(EnumTypeDefinition {
                    description: enum_type.description,
                    name: enum_type.name,
                    directives: container.take(),
                    values: container.take(),
                    source_location: enum_type.source_location,
                })))
            }
            Node::Definition(Definition::Type(TypeDefinition::InputObject(input_object))) => {
                Node::Definition(Definition::Type(TypeDefinition::InputObject(
                    InputObjectTypeDefinition {
                        description: input_object.description,
                        name: input_object.name,
                        directives: container.take(),
                        input_fields: container.take(),
                        source_location: input_object.source_location,
                    },
                )))
            }
            Node::Definition(Definition::Directive(directive)) => {
                Node::Definition(Definition::Directive(DirectiveDefinition {
                    description: directive.description,
                    name: directive.name,
                    arguments: container.take(),
                    repeatable: directive.repeatable,
                    locations: directive.locations.clone(),
                    source_location: directive.source_location,
                }))
            }
            Node::Definition(Definition::TypeSystemExtension(extension)) => {
                let extension = match extension {
                    TypeSystemExtension::Schema(schema) => {
                        TypeSystemExtension::Schema(SchemaExtension {
                            directives: container.take(),
                            operation_types: container.take(),
                            source_location: schema.source_location,
                        })
                    }
                    TypeSystemExtension::Scalar(scalar) => {
                        TypeSystemExtension::Scalar(ScalarTypeExtension {
                            name: scalar.name,
                            directives: container.take(),
                            source_location: scalar.source_location,
                        })
                    }
                    TypeSystemExtension::Object(object) => {
                        TypeSystemExtension::Object(ObjectTypeExtension {
                            name: object.name,
                            implements_interfaces: object.implements_interfaces.clone(),
                            directives: container.take(),
                            fields: container.take(),
                            source_location: object.source_location,
                        })
                    }
                    TypeSystemExtension::Interface(interface) => {
                        TypeSystemExtension::Interface(InterfaceTypeExtension {
                            name: interface.name,
                            implements_interfaces: interface.implements_interfaces.clone(),
                            directives: container.take(),
                            fields: container.take(),
                            source_location: interface.source_location,
                        })
                    }
                    TypeSystemExtension::Union(union) => {
                        TypeSystemExtension::Union(UnionTypeExtension {
                            name: union.name,
                            directives: container.take(),
                            members: container.take(),
                            source_location: union.source_location,
                        })
                    }
                    TypeSystemExtension::Enum(enum_type) => {
                        TypeSystemExtension::Enum(EnumTypeExtension {
                            name: enum_type.name,
                            directives: container.take(),
                            values: container.take(),
                            source_location: enum_type.source_location,
                        })
                    }
                    TypeSystemExtension::InputObject(input_object) => {
                        TypeSystemExtension::InputObject(InputObjectTypeExtension {
                            name: input_object.name,
                            directives: container.take(),
                            input_fields: container.take(),
                            source_location: input_object.source_location,
                        })
                    }
                };
                Node::Definition(Definition::TypeSystemExtension(extension))
            }
            Node::Selection(Selection::Field(field)) => Node::Selection(Selection::Field(Field {
                alias: field.alias,
                name: field.name,
                arguments: container.take(),
                directives: container.take(),
                selections: container.take(),
                nullability: field.nullability,
                source_location: field.source_location,
            })),
            Node::Selection(Selection::FragmentSpread(spread)) => {
                Node::Selection(Selection::FragmentSpread(FragmentSpread {
                    name: spread.name,
                    directives: container.take(),
                    source_location: spread.source_location,
                }))
            }
            Node::Selection(Selection::InlineFragment(inline)) => {
                Node::Selection(Selection::InlineFragment(InlineFragment {
                    type_condition: container.take_single::<NamedType>(),
                    directives: container.take(),
                    selections: container.take(),
                    source_location: inline.source_location,
                }))
            }
            Node::Type(Type::Named(_)) => self.clone(),
            Node::Type(Type::List(_)) => {
                let inner = container
                    .take_single::<Type>()
                    .expect("List type is missing its inner type");
                Node::Type(Type::List(container.ctx().alloc(inner)))
            }
            Node::Type(Type::NonNull(_)) => {
                let inner = container
                    .take_single::<Type>()
                    .expect("Non-null type is missing its inner type");
                Node::Type(Type::NonNull(container.ctx().alloc(inner)))
            }
            Node::Value(Value::List(list)) => Node::Value(Value::List(ListValue {
                values: container.take(),
                source_location: list.source_location,
            })),
            Node::Value(Value::Object(object)) => Node::Value(Value::Object(ObjectValue {
                fields: container.take(),
                source_location: object.source_location,
            })),
            Node::Value(_) => self.clone(),
            Node::Argument(argument) => Node::Argument(Argument {
                name: argument.name,
                value: container
                    .take_single::<Value>()
                    .expect("Argument is missing its value"),
                source_location: argument.source_location,
            }),
            Node::Directive(directive) => Node::Directive(Directive {
                name: directive.name,
                arguments: container.take(),
                source_location: directive.source_location,
            }),
            Node::ObjectField(field) => Node::ObjectField(ObjectField {
                name: field.name,
                value: container
                    .take_single::<Value>()
                    .expect("Object field is missing its value"),
                source_location: field.source_location,
            }),
            Node::VariableDefinition(variable_definition) => {
                Node::VariableDefinition(VariableDefinition {
                    name: variable_definition.name,
                    of_type: variable_definition.of_type,
                    default_value: container.take_single::<Value>(),
                    directives: container.take(),
                    source_location: variable_definition.source_location,
                })
            }
            Node::InputValueDefinition(input_value) => {
                Node::InputValueDefinition(InputValueDefinition {
                    description: input_value.description,
                    name: input_value.name,
                    directives: container.take(),
                    of_type: input_value.of_type,
                    default_value: input_value.default_value.clone(),
                    source_location: input_value.source_location,
                })
            }
            Node::FieldDefinition(field_definition) => Node::FieldDefinition(FieldDefinition {
                description: field_definition.description,
                name: field_definition.name,
                arguments: container.take(),
                of_type: field_definition.of_type,
                directives: container.take(),
                source_location: field_definition.source_location,
            }),
            Node::EnumValueDefinition(enum_value) => Node::EnumValueDefinition(EnumValueDefinition {
                description: enum_value.description,
                name: enum_value.name,
                directives: container.take(),
                source_location: enum_value.source_location,
            }),
            Node::OperationTypeDefinition(_) => self.clone(),
        }
    }
}

impl<'a> Document<'a> {
    /// Transforms this document, returning the new document or `None` when the transformer
    /// deleted the root.
    ///
    /// Panics when the transformer replaces the root with a node that isn't a document.
    pub fn transform<T: NodeTransformer<'a>>(
        &self,
        ctx: &'a ASTContext,
        transformer: &mut T,
    ) -> Option<Document<'a>> {
        match Node::Document(self.clone()).transform(ctx, transformer)? {
            Node::Document(document) => Some(document),
            node => panic!(
                "Document transform replaced the root with a {} node",
                node.kind()
            ),
        }
    }
}
