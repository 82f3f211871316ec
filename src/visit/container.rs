use crate::ast::*;

/// Trait for recovering a concrete AST node from a universal [`Node`].
///
/// `from_node` returns the node back unchanged in the `Err` case so a [`NodeContainer`] can
/// offer it to the next extraction.
pub trait FromNode<'a>: Sized {
    fn from_node(node: Node<'a>) -> Result<Self, Node<'a>>;
}

macro_rules! impl_from_node {
    ($($variant:ident => $for_type:ident),+ $(,)?) => {
        $(
            impl<'a> FromNode<'a> for $for_type<'a> {
                #[inline]
                fn from_node(node: Node<'a>) -> Result<Self, Node<'a>> {
                    match node {
                        Node::$variant(x) => Ok(x),
                        node => Err(node),
                    }
                }
            }
        )+
    };
}

impl_from_node!(
    Document => Document,
    Definition => Definition,
    Selection => Selection,
    Type => Type,
    Value => Value,
    Argument => Argument,
    Directive => Directive,
    ObjectField => ObjectField,
    VariableDefinition => VariableDefinition,
    InputValueDefinition => InputValueDefinition,
    FieldDefinition => FieldDefinition,
    EnumValueDefinition => EnumValueDefinition,
    OperationTypeDefinition => OperationTypeDefinition,
);

impl<'a> FromNode<'a> for NamedType<'a> {
    /// Type names travel as plain named type references, e.g. union members and type conditions.
    #[inline]
    fn from_node(node: Node<'a>) -> Result<Self, Node<'a>> {
        match node {
            Node::Type(Type::Named(named)) => Ok(named),
            node => Err(node),
        }
    }
}

/// A typed view over the transformed children of a node while it's being rebuilt.
///
/// The container starts out holding the full, ordered child list. Each [`NodeContainer::take`]
/// call extracts every child a given node type can be recovered from, preserving order, and
/// leaves the rest in place for later extractions. A rebuild must consume every child; a node
/// left behind means a transformer produced a node its parent has no place for, which is a bug
/// in the transformer and panics via [`NodeContainer::assert_drained`].
pub struct NodeContainer<'a> {
    ctx: &'a ASTContext,
    remaining: bumpalo::collections::Vec<'a, Option<Node<'a>>>,
}

impl<'a> NodeContainer<'a> {
    pub fn new(ctx: &'a ASTContext, children: bumpalo::collections::Vec<'a, Node<'a>>) -> Self {
        let mut remaining = bumpalo::collections::Vec::new_in(&ctx.arena);
        remaining.extend(children.into_iter().map(Some));
        NodeContainer { ctx, remaining }
    }

    #[inline]
    pub fn ctx(&self) -> &'a ASTContext {
        self.ctx
    }

    /// Extracts all children that convert into `T`, in their original relative order.
    pub fn take<T: FromNode<'a>>(&mut self) -> bumpalo::collections::Vec<'a, T> {
        let mut taken = bumpalo::collections::Vec::new_in(&self.ctx.arena);
        for slot in self.remaining.iter_mut() {
            if let Some(node) = slot.take() {
                match T::from_node(node) {
                    Ok(value) => taken.push(value),
                    Err(node) => *slot = Some(node),
                }
            }
        }
        taken
    }

    /// Extracts at most one child converting into `T`.
    ///
    /// Panics when more than one child converts, since the caller asked for a child its node
    /// kind holds at most once.
    pub fn take_single<T: FromNode<'a> + 'a>(&mut self) -> Option<T> {
        let mut taken = self.take::<T>();
        assert!(
            taken.len() <= 1,
            "Multiple candidate nodes for a single child slot"
        );
        taken.pop()
    }

    /// Panics when any child is left unconsumed after a rebuild.
    pub fn assert_drained(&self) {
        let remaining: std::vec::Vec<&Node<'a>> = self.remaining.iter().flatten().collect();
        assert!(remaining.is_empty(), "Remaining nodes: {:?}", remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_of<'a>(ctx: &'a ASTContext, nodes: &[Node<'a>]) -> NodeContainer<'a> {
        let mut children = bumpalo::collections::Vec::new_in(&ctx.arena);
        children.extend(nodes.iter().cloned());
        NodeContainer::new(ctx, children)
    }

    #[test]
    fn take_partitions_by_type_and_preserves_order() {
        let ctx = ASTContext::new();
        let mut container = container_of(
            &ctx,
            &[
                Node::Directive(Directive::new(&ctx, "a")),
                Node::Selection(Selection::Field(Field::new_leaf(&ctx, "first"))),
                Node::Directive(Directive::new(&ctx, "b")),
                Node::Selection(Selection::Field(Field::new_leaf(&ctx, "second"))),
            ],
        );

        let selections = container.take::<Selection>();
        let names: Vec<&str> = selections
            .iter()
            .filter_map(|selection| selection.field())
            .map(|field| field.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);

        let directives = container.take::<Directive>();
        let names: Vec<&str> = directives.iter().map(|directive| directive.name).collect();
        assert_eq!(names, vec!["a", "b"]);

        container.assert_drained();
    }

    #[test]
    fn take_single_returns_none_when_absent() {
        let ctx = ASTContext::new();
        let mut container = container_of(&ctx, &[Node::Directive(Directive::new(&ctx, "a"))]);
        assert!(container.take_single::<NamedType>().is_none());
        let named = container_of(&ctx, &[Node::Type(Type::Named(NamedType::from("Query")))])
            .take_single::<NamedType>();
        assert_eq!(named.map(|n| n.name), Some("Query"));
    }

    #[test]
    #[should_panic(expected = "Multiple candidate nodes")]
    fn take_single_panics_on_duplicates() {
        let ctx = ASTContext::new();
        let mut container = container_of(
            &ctx,
            &[
                Node::Type(Type::Named(NamedType::from("A"))),
                Node::Type(Type::Named(NamedType::from("B"))),
            ],
        );
        let _ = container.take_single::<NamedType>();
    }

    #[test]
    #[should_panic(expected = "Remaining nodes")]
    fn assert_drained_panics_on_leftovers() {
        let ctx = ASTContext::new();
        let mut container = container_of(
            &ctx,
            &[
                Node::Directive(Directive::new(&ctx, "a")),
                Node::Value(Value::null()),
            ],
        );
        container.take::<Directive>();
        container.assert_drained();
    }
}
