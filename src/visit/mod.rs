//! # Transforming GraphQL ASTs
//!
//! The `graphql_document::visit` module contains utilities to transform GraphQL ASTs into
//! modified copies of themselves. Mainly, this module exposes two pieces relevant to this task:
//!
//! - The [`NodeTransformer`] trait can be used to implement a transformation.
//! - The [`NodeContainer`] struct reassembles a node from its transformed children.
//!
//! A transformation starts at `Document::transform` or `Node::transform` and proceeds bottom-up:
//! for each node, its children are transformed first, the node is rebuilt around the surviving
//! children, and only then is the rebuilt node offered to the transformer, which decides whether
//! to keep it, delete it, or substitute a different node in its place. The input AST is never
//! mutated and nodes shared between the input and output tree stay allocated in the same
//! [`ASTContext`](crate::ast::ASTContext).
//!
//! In this example we'll define a transformer that strips all fields named `deprecated` from a
//! document:
//!
//! ```
//! use graphql_document::{ast::*, visit::*};
//!
//! #[derive(Default)]
//! struct StripDeprecated {}
//!
//! impl<'a> NodeTransformer<'a> for StripDeprecated {
//!     fn transform(&mut self, _ctx: &'a ASTContext, node: &Node<'a>) -> TransformResult<'a> {
//!         match node {
//!             Node::Selection(Selection::Field(field)) if field.name == "deprecated" => {
//!                 TransformResult::Delete
//!             }
//!             _ => TransformResult::Keep,
//!         }
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
//! selections.push(Selection::Field(Field::new_leaf(&ctx, "hello")));
//! selections.push(Selection::Field(Field::new_leaf(&ctx, "deprecated")));
//! let mut document = Document::new_in(&ctx, None);
//! document.definitions.push(Definition::Operation(OperationDefinition {
//!     operation: OperationKind::Query,
//!     name: None,
//!     variable_definitions: bumpalo::collections::Vec::new_in(&ctx.arena),
//!     directives: bumpalo::collections::Vec::new_in(&ctx.arena),
//!     selections,
//!     description: None,
//!     source_location: None,
//! }));
//!
//! let stripped = document
//!     .transform(&ctx, &mut StripDeprecated::default())
//!     .unwrap();
//! assert_eq!(stripped.print(), "query {\n  hello\n}\n");
//! ```
//!
//! Because the transformer only sees rebuilt nodes, a decision like the one above composes with
//! deletions below it: deleting every field of an object type definition leaves the rebuilt
//! definition with an empty field list, which the transformer may then delete in turn or keep as
//! an empty type.

mod container;
mod transform;

pub use container::{FromNode, NodeContainer};
pub use transform::{NodeTransformer, TransformResult};
