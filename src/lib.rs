//! `graphql_document`
//! =========
//!
//! _Easy and fast GraphQL document handling._
//!
//! The **`graphql_document`** library follows two goals:
//!
//! - To support a pleasant-to-use API for GraphQL documents, both executable and type system ones
//! - To be fast at copying, transforming, and printing GraphQL ASTs
//!
//! This crate does not contain a parser and does not aim to support server-side GraphQL
//! execution or validation. Its contract starts where a valid document tree exists, whether it
//! was built programmatically via the AST types in [`ast`] or handed over by an external parser.
//!
//! What it does contain is the full GraphQL AST including schema definition language nodes, a
//! generic tree transformation protocol that creates modified copies of a document in
//! [`visit`], and an SDL writer that turns any node back into source text.
//!
//! ```
//! use graphql_document::{ast::*, visit::*};
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Build a document programmatically (or receive one from a parser)
//! let field = Field::new_leaf(&ctx, "hello");
//! let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
//! selections.push(Selection::Field(field));
//! let mut definitions = bumpalo::collections::Vec::new_in(&ctx.arena);
//! definitions.push(Definition::Operation(OperationDefinition {
//!     source_location: None,
//!     operation: OperationKind::Query,
//!     name: None,
//!     variable_definitions: bumpalo::collections::Vec::new_in(&ctx.arena),
//!     directives: bumpalo::collections::Vec::new_in(&ctx.arena),
//!     selections,
//!     description: None,
//! }));
//! let document = Document { source_location: None, definitions };
//!
//! // Print the Document node to an output String
//! let output = document.print();
//! assert_eq!(output, "query {\n  hello\n}\n");
//! ```

pub mod ast;
pub mod error;
pub mod visit;

pub use bumpalo;
