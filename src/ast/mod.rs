//! # GraphQL Document AST
//!
//! The `graphql_document::ast` module contains the full GraphQL document AST, covering both the
//! executable language and the schema definition language, along with a writer that turns AST
//! nodes back into source text.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its three main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`Node`], a universal wrapper around any AST node that generic code operates on
//! - [`WriteNode`], a trait using which AST Nodes are printed into source text
//!
//! The following workflow describes the minimum that's done using this module and while an AST
//! Context is active in the given scope.
//!
//! ```
//! use graphql_document::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Build a node programmatically (or receive a tree from a parser)
//! let field = Field::new_leaf(&ctx, "field");
//!
//! // Print the node to an output String
//! let output = field.print();
//! assert_eq!(output, "field\n");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod node;
mod writer;

pub use ast::*;
pub use ast_kind::NodeKind;
pub use node::Node;
pub use writer::{SDLWriter, WriteNode};
