use crate::error::{Error, Result};
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of building, storing, transforming, and printing an AST its
/// performant and convenient to allocate memory in one chunk for the AST's operations. This
/// context represents the lifetime of an AST and its derivatives.
///
/// An AST Context in other words represents the memory a document and the operations you perform
/// on it take up. This is efficient since once you're done with the document this entire allocated
/// memory can be dropped all at once. Hence however, it's inadvisable to reuse the AST Context
/// across multiple unrelated GraphQL documents.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provenance of an AST node in its original source text.
///
/// Programmatically created nodes carry no location, which is why every node stores an
/// `Option<SourceLocation>`. Locations are carried along by copies and transformed nodes but
/// never participate in node equality.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SourceLocation<'a> {
    pub line: usize,
    pub column: usize,
    pub file_path: Option<&'a str>,
}

impl<'a> SourceLocation<'a> {
    #[inline]
    pub fn new(line: usize, column: usize) -> Self {
        SourceLocation {
            line,
            column,
            file_path: None,
        }
    }

    /// Create a location that only carries a file path, as used on document roots.
    #[inline]
    pub fn for_path(file_path: &'a str) -> Self {
        SourceLocation {
            line: 0,
            column: 0,
            file_path: Some(file_path),
        }
    }
}

/// The names of the types every GraphQL schema carries implicitly, including the
/// introspection meta types.
pub const BUILT_IN_TYPES: [&str; 13] = [
    "Int",
    "Float",
    "String",
    "Boolean",
    "ID",
    "__Schema",
    "__Type",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__TypeKind",
    "__Directive",
    "__DirectiveLocation",
];

/// The names of the directives every GraphQL schema carries implicitly.
pub const BUILT_IN_DIRECTIVES: [&str; 3] = ["include", "skip", "deprecated"];

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// In GraphQL there are three different operations, with each having a unique identifier on
/// Operation Definitions.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Returns the keyword of this operation kind as it appears in source text.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// Locations a directive definition may be applied to.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Returns this location's spelling in schema definition language.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node of an integer value.
///
/// Integers in GraphQL are limited to 32-bit signed, non-fractional values.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: i32,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node of a floating point value.
///
/// Floats in GraphQL are signed, double precision values as defined by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754).
/// They are however limited to finite values only.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: f64,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node of a string value.
///
/// GraphQL has a number of escaped characters that are normalised away when parsing and
/// hence this `value` is expected to not contain escaped characters.
/// The strings in GraphQL can be compared to JSON Unicode strings.
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
    pub source_location: Option<SourceLocation<'a>>,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
            source_location: None,
        }
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, Clone, Copy)]
pub struct BooleanValue<'a> {
    pub value: bool,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node representing JSON-like `null` values or the absence of a value.
#[derive(Debug, Clone, Copy)]
pub struct NullValue<'a> {
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its
/// contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, Clone)]
pub struct ListValue<'a> {
    pub values: bumpalo::collections::Vec<'a, Value<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// AST Node for a field of an Object value.
///
/// Objects in GraphQL are unordered lists of keyed input values and serialize to JSON objects.
/// An Object literal's contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, Clone)]
pub struct ObjectValue<'a> {
    pub fields: bumpalo::collections::Vec<'a, ObjectField<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

impl<'a> ObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a `Map` keyed by all object field's names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for field in self.fields.iter() {
            map.insert(field.name, &field.value);
        }
        map
    }
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue<'a>),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    Null(NullValue<'a>),
}

impl<'a> Value<'a> {
    /// Shorthand for a `null` literal without a source location.
    #[inline]
    pub fn null() -> Self {
        Value::Null(NullValue {
            source_location: None,
        })
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// Arguments in GraphQL are unordered lists of inputs to a field's or directive's arguments.
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in documents are for example `@skip`, `@include`, and
/// `@deprecated`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, Clone)]
pub struct Directive<'a> {
    /// The name of the directive without the `@` sign. Example: `"include"`
    pub name: &'a str,
    pub arguments: bumpalo::collections::Vec<'a, Argument<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

impl<'a> Directive<'a> {
    /// Creates a new directive with the given `name` and no arguments.
    #[inline]
    pub fn new(ctx: &'a ASTContext, name: &'a str) -> Self {
        Directive {
            name,
            arguments: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        }
    }
}

/// AST Node for a type name.
///
/// This AST uses this reference instead of a raw `&str` slice whenever it refers to a concrete
/// object type, input type, fragment type condition, or union member.
#[derive(Debug, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a type reference.
///
/// Variable definitions, field definitions, and input values must describe their type, including
/// whether they expect lists, non-null values, or a type reference, which is a recursive type
/// definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named type, which is a leaf node of a [Type].
    Named(NamedType<'a>),
    /// A list node wrapper for a Type, which indicates that a GraphQL API will always pass a list
    /// of the contained type in place.
    List(&'a Type<'a>),
    /// A non-null node wrapper for a Type, which indicates that a GraphQL API may not pass `null`
    /// instead of the contained type.
    NonNull(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Wraps this type in a list, indicating that it expects the current Type to be a list of
    /// itself instead.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::List(ctx.alloc(self))
    }

    /// A non-null node wrapper for a Type, indicating that a GraphQL API may not pass `null`
    /// instead of the contained type.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::NonNull(ctx.alloc(self))
    }

    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn of_type(&'a self) -> &'a NamedType<'a> {
        match self {
            Type::Named(of_type) => of_type,
            Type::List(inner) => inner.of_type(),
            Type::NonNull(inner) => inner.of_type(),
        }
    }
}

/// Client-controlled nullability designator on a [Field] selection.
///
/// This is a spec extension that allows a client to override the schema's nullability for the
/// field it annotates, e.g. `field!` or `field[?]!`. Designators aren't part of a field's
/// children and travel with the field through transformations.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Nullability<'a> {
    /// Written as `!`, marks the field's value as non-nullable.
    NonNull,
    /// Written as `?`, marks the field's value as nullable.
    Nullable,
    /// Written as `[...]` with an optional trailing designator for the list itself.
    List {
        item: &'a Nullability<'a>,
        self_nullability: Option<&'a Nullability<'a>>,
    },
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<&'a str>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: &'a str,
    /// Arguments that are passed to a Field.
    pub arguments: bumpalo::collections::Vec<'a, Argument<'a>>,
    /// Directives that are annotating this Field.
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    /// Sub-selections that are passed below this field to add selections to this field's
    /// returned GraphQL object type. Empty on leaf fields.
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    /// An optional client-controlled nullability designator.
    pub nullability: Option<Nullability<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Creates a new leaf field with the given `name`.
    ///
    /// All sub-lists, like `arguments`, `directives` and `selections` will be created as empty
    /// defaults.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            alias: None,
            name,
            arguments: bumpalo::collections::Vec::new_in(&ctx.arena),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            selections: bumpalo::collections::Vec::new_in(&ctx.arena),
            nullability: None,
            source_location: None,
        }
    }

    /// Creates a new leaf field with the given `name` and `alias`.
    ///
    /// All sub-lists, like `arguments`, `directives` and `selections` will be created as empty
    /// defaults.
    #[inline]
    pub fn new_aliased_leaf(ctx: &'a ASTContext, alias: &'a str, name: &'a str) -> Self {
        Field {
            alias: Some(alias),
            ..Field::new_leaf(ctx, name)
        }
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] by name.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, Clone)]
pub struct FragmentSpread<'a> {
    /// A given name of the [FragmentDefinition] that must be spread in place of this Fragment
    /// Spread on a GraphQL API.
    pub name: &'a str,
    /// Directives that are annotating this Fragment Spread.
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an inline Fragment with its own selections.
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, Clone)]
pub struct InlineFragment<'a> {
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API. On inline fragments this is optional and no type condition has to be passed.
    pub type_condition: Option<NamedType<'a>>,
    /// Directives that are annotating this Inline Fragment.
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    /// Sub-selections that are applied when this Fragment is applied to the parent selections.
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node of a selection as contained inside selection lists.
///
/// Any given selection list may contain fields, fragment spreads, and inline fragments.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&'a self) -> Option<&'a Field<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&'a self) -> Option<&'a FragmentSpread<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            _ => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&'a self) -> Option<&'a InlineFragment<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            _ => None,
        }
    }
}

/// AST Node for a variable definition.
///
/// A variable definition introduces a [Variable] identifier that can be used in place of any
/// other non-static [Value] throughout the document.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub name: &'a str,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type<'a>,
    /// An optional default value that applies when the variable isn't passed.
    pub default_value: Option<Value<'a>>,
    /// Directives that are annotating this Variable Definition.
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    /// An optional name, as given to the operation definition.
    ///
    /// A [Document] may contain multiple Operation Definitions from which a single one can be
    /// selected during execution. When a Document contains only a single operation, it doesn't
    /// have to have a name.
    pub name: Option<&'a str>,
    /// A list of variables that the operation defines and accepts during execution.
    pub variable_definitions: bumpalo::collections::Vec<'a, VariableDefinition<'a>>,
    /// Directives that are annotating this Operation Definition.
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    /// Selections that are applied to the root type of the specified kind of operation when this
    /// definition is executed.
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    /// A description, as a spec extension. Descriptions aren't printed on operations.
    pub description: Option<&'a str>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a Fragment definition with its own selections.
///
/// This may only be applied when the type condition matches and extends a selection list by
/// being applied using a [`FragmentSpread`] selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, Clone)]
pub struct FragmentDefinition<'a> {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition.
    pub name: &'a str,
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API.
    pub type_condition: NamedType<'a>,
    /// Directives that are annotating this Fragment.
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    /// Selections that are applied when this Fragment is applied to the parent selections.
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    /// A description, as a spec extension. Descriptions aren't printed on fragments.
    pub description: Option<&'a str>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node mapping one kind of operation to the schema type implementing its root.
///
/// [Reference](https://spec.graphql.org/October2021/#RootOperationTypeDefinition)
#[derive(Debug, Clone, Copy)]
pub struct OperationTypeDefinition<'a> {
    pub operation: OperationKind,
    /// The name of the root object type, i.e. `"Query"`, ...
    pub named_type: &'a str,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a schema definition, listing the root operation types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Clone)]
pub struct SchemaDefinition<'a> {
    pub description: Option<&'a str>,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub operation_types: bumpalo::collections::Vec<'a, OperationTypeDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a field on an object or interface type.
///
/// The field's type reference is not one of the node's children and is carried along
/// unchanged by transformations.
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub arguments: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
    pub of_type: Type<'a>,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an input value, as used for arguments and input object fields.
///
/// Like on [FieldDefinition], the type reference and default value are carried along unchanged
/// by transformations.
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub of_type: Type<'a>,
    pub default_value: Option<Value<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a single value of an enum type.
#[derive(Debug, Clone)]
pub struct EnumValueDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a scalar type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an object type definition.
///
/// The `fields` are optional to tell a type declared without a body (`type T`) apart from a
/// type declared with one, even when a transformation has since emptied that body. Only the
/// latter prints its braces.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub implements_interfaces: bumpalo::collections::Vec<'a, &'a str>,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub fields: Option<bumpalo::collections::Vec<'a, FieldDefinition<'a>>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an interface type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub implements_interfaces: bumpalo::collections::Vec<'a, &'a str>,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a union type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub members: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub values: bumpalo::collections::Vec<'a, EnumValueDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an input object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub input_fields: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for any kind of type definition inside a type system document.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    Union(UnionTypeDefinition<'a>),
    Enum(EnumTypeDefinition<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
}

impl<'a> TypeDefinition<'a> {
    /// Whether this definition redefines one of the types every schema carries implicitly.
    ///
    /// Recognition is by name lookup in [`BUILT_IN_TYPES`], not by the node itself.
    #[inline]
    pub fn is_built_in(&self) -> bool {
        BUILT_IN_TYPES.contains(&self.name())
    }
}

/// AST Node for a directive definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, Clone)]
pub struct DirectiveDefinition<'a> {
    pub description: Option<&'a str>,
    /// The name of the directive without the `@` sign. Example: `"include"`
    pub name: &'a str,
    pub arguments: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
    pub repeatable: bool,
    pub locations: bumpalo::collections::Vec<'a, DirectiveLocation>,
    pub source_location: Option<SourceLocation<'a>>,
}

impl<'a> DirectiveDefinition<'a> {
    /// Whether this definition redefines one of the directives every schema carries implicitly.
    ///
    /// Recognition is by name lookup in [`BUILT_IN_DIRECTIVES`], not by the node itself.
    #[inline]
    pub fn is_built_in(&self) -> bool {
        BUILT_IN_DIRECTIVES.contains(&self.name)
    }
}

/// AST Node for a schema extension.
#[derive(Debug, Clone)]
pub struct SchemaExtension<'a> {
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub operation_types: bumpalo::collections::Vec<'a, OperationTypeDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a scalar type extension.
#[derive(Debug, Clone)]
pub struct ScalarTypeExtension<'a> {
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an object type extension.
#[derive(Debug, Clone)]
pub struct ObjectTypeExtension<'a> {
    pub name: &'a str,
    pub implements_interfaces: bumpalo::collections::Vec<'a, &'a str>,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an interface type extension.
#[derive(Debug, Clone)]
pub struct InterfaceTypeExtension<'a> {
    pub name: &'a str,
    pub implements_interfaces: bumpalo::collections::Vec<'a, &'a str>,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for a union type extension.
#[derive(Debug, Clone)]
pub struct UnionTypeExtension<'a> {
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub members: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an enum type extension.
#[derive(Debug, Clone)]
pub struct EnumTypeExtension<'a> {
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub values: bumpalo::collections::Vec<'a, EnumValueDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for an input object type extension.
#[derive(Debug, Clone)]
pub struct InputObjectTypeExtension<'a> {
    pub name: &'a str,
    pub directives: bumpalo::collections::Vec<'a, Directive<'a>>,
    pub input_fields: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

/// AST Node for any type system extension.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System-Extensions)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeSystemExtension<'a> {
    Schema(SchemaExtension<'a>),
    Scalar(ScalarTypeExtension<'a>),
    Object(ObjectTypeExtension<'a>),
    Interface(InterfaceTypeExtension<'a>),
    Union(UnionTypeExtension<'a>),
    Enum(EnumTypeExtension<'a>),
    InputObject(InputObjectTypeExtension<'a>),
}

impl<'a> TypeSystemExtension<'a> {
    /// The name of the extended type, or `None` for schema extensions.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        match self {
            TypeSystemExtension::Schema(_) => None,
            TypeSystemExtension::Scalar(x) => Some(x.name),
            TypeSystemExtension::Object(x) => Some(x.name),
            TypeSystemExtension::Interface(x) => Some(x.name),
            TypeSystemExtension::Union(x) => Some(x.name),
            TypeSystemExtension::Enum(x) => Some(x.name),
            TypeSystemExtension::InputObject(x) => Some(x.name),
        }
    }
}

/// AST Node for a Definition inside a GraphQL document.
///
/// A document may freely mix executable definitions, type system definitions, and type system
/// extensions.
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
    Schema(SchemaDefinition<'a>),
    Type(TypeDefinition<'a>),
    Directive(DirectiveDefinition<'a>),
    TypeSystemExtension(TypeSystemExtension<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an
    /// `OperationDefinition`.
    #[inline]
    pub fn operation(&'a self) -> Option<&'a OperationDefinition<'a>> {
        match self {
            Definition::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a
    /// `FragmentDefinition`.
    #[inline]
    pub fn fragment(&'a self) -> Option<&'a FragmentDefinition<'a>> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Helper method to return the [`TypeDefinition`] if the Definition is a `TypeDefinition`.
    #[inline]
    pub fn type_definition(&'a self) -> Option<&'a TypeDefinition<'a>> {
        match self {
            Definition::Type(type_definition) => Some(type_definition),
            _ => None,
        }
    }
}

/// AST Root Node for a GraphQL document. This contains one or more definitions of
/// operations, fragments, types, or type system extensions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub definitions: bumpalo::collections::Vec<'a, Definition<'a>>,
    pub source_location: Option<SourceLocation<'a>>,
}

impl<'a, 'b> Document<'a> {
    /// Create an empty document, optionally tagged with the path it originates from.
    pub fn new_in(ctx: &'a ASTContext, file_path: Option<&'a str>) -> Self {
        Document {
            definitions: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: file_path.map(SourceLocation::for_path),
        }
    }

    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns a `Map` keyed by all fragment names mapped to their fragment definitions.
    /// This is useful for manually traversing the document and resolving [`FragmentSpread`] nodes
    /// to their definitions.
    pub fn fragments(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &'a FragmentDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for definition in self.definitions.iter() {
            if let Definition::Fragment(fragment) = definition {
                map.insert(fragment.name, fragment);
            }
        }
        map
    }

    /// Finds an operation definition by name or the single operation contained in the document
    /// when `None` is passed.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#GetOperation())
    pub fn operation(&'a self, by_name: Option<&'b str>) -> Result<&'a OperationDefinition<'a>> {
        if let Some(by_name) = by_name {
            self.definitions
                .iter()
                .find_map(|definition| match definition {
                    Definition::Operation(
                        operation @ OperationDefinition {
                            name: Some(name), ..
                        },
                    ) if *name == by_name => Some(operation),
                    _ => None,
                })
                .ok_or(Error::new(format!(
                    "Operation with name {by_name} does not exist"
                )))
        } else {
            let operations = self
                .definitions
                .iter()
                .filter_map(|definition| definition.operation())
                .collect::<std::vec::Vec<&'a OperationDefinition>>();
            match operations.len() {
                0 => Err(Error::new("Document does not contain any operations")),
                1 => Ok(operations[0]),
                _ => Err(Error::new(
                    "Document contains more than one operation, missing operation name",
                )),
            }
        }
    }
}

/// Trait implemented by all AST nodes that carry a name.
pub trait Named<'a> {
    fn name(&self) -> &'a str;
}

macro_rules! impl_named {
    ($($for_type:ident),+ $(,)?) => {
        $(
            impl<'a> Named<'a> for $for_type<'a> {
                #[inline]
                fn name(&self) -> &'a str {
                    self.name
                }
            }
        )+
    };
}

impl_named!(
    Variable,
    NamedType,
    Argument,
    ObjectField,
    Directive,
    Field,
    FragmentSpread,
    FragmentDefinition,
    VariableDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
);

impl<'a> Named<'a> for TypeDefinition<'a> {
    #[inline]
    fn name(&self) -> &'a str {
        match self {
            TypeDefinition::Scalar(x) => x.name,
            TypeDefinition::Object(x) => x.name,
            TypeDefinition::Interface(x) => x.name,
            TypeDefinition::Union(x) => x.name,
            TypeDefinition::Enum(x) => x.name,
            TypeDefinition::InputObject(x) => x.name,
        }
    }
}

/// Trait implemented by all AST nodes that may carry a description.
pub trait Described<'a> {
    fn description(&self) -> Option<&'a str>;
}

macro_rules! impl_described {
    ($($for_type:ident),+ $(,)?) => {
        $(
            impl<'a> Described<'a> for $for_type<'a> {
                #[inline]
                fn description(&self) -> Option<&'a str> {
                    self.description
                }
            }
        )+
    };
}

impl_described!(
    OperationDefinition,
    FragmentDefinition,
    SchemaDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
);

impl<'a> Described<'a> for TypeDefinition<'a> {
    #[inline]
    fn description(&self) -> Option<&'a str> {
        match self {
            TypeDefinition::Scalar(x) => x.description,
            TypeDefinition::Object(x) => x.description,
            TypeDefinition::Interface(x) => x.description,
            TypeDefinition::Union(x) => x.description,
            TypeDefinition::Enum(x) => x.description,
            TypeDefinition::InputObject(x) => x.description,
        }
    }
}

/// Trait implemented by all AST nodes that can have directives attached.
pub trait WithDirectives<'a> {
    fn directives(&self) -> &[Directive<'a>];
}

macro_rules! with_directives {
    ($($for_type:ident),+ $(,)?) => {
        $(
            impl<'a> WithDirectives<'a> for $for_type<'a> {
                #[inline]
                fn directives(&self) -> &[Directive<'a>] {
                    &self.directives
                }
            }
        )+
    };
}

with_directives!(
    Field,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    SchemaDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
);

impl<'a> WithDirectives<'a> for Selection<'a> {
    /// Helper method to get all Directives for a given selection directly.
    ///
    /// Any selection AST node may carry Directives, so when those are checked
    /// it's unnecessary to first match the type of selection.
    fn directives(&self) -> &[Directive<'a>] {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(fragment) => &fragment.directives,
        }
    }
}

impl<'a> WithDirectives<'a> for TypeDefinition<'a> {
    #[inline]
    fn directives(&self) -> &[Directive<'a>] {
        match self {
            TypeDefinition::Scalar(x) => &x.directives,
            TypeDefinition::Object(x) => &x.directives,
            TypeDefinition::Interface(x) => &x.directives,
            TypeDefinition::Union(x) => &x.directives,
            TypeDefinition::Enum(x) => &x.directives,
            TypeDefinition::InputObject(x) => &x.directives,
        }
    }
}

impl<'a> WithDirectives<'a> for TypeSystemExtension<'a> {
    #[inline]
    fn directives(&self) -> &[Directive<'a>] {
        match self {
            TypeSystemExtension::Schema(x) => &x.directives,
            TypeSystemExtension::Scalar(x) => &x.directives,
            TypeSystemExtension::Object(x) => &x.directives,
            TypeSystemExtension::Interface(x) => &x.directives,
            TypeSystemExtension::Union(x) => &x.directives,
            TypeSystemExtension::Enum(x) => &x.directives,
            TypeSystemExtension::InputObject(x) => &x.directives,
        }
    }
}

impl<'a> WithDirectives<'a> for Definition<'a> {
    /// Helper method to get all Directives for a given definition directly.
    ///
    /// Directive definitions cannot be annotated and hence return an empty slice.
    fn directives(&self) -> &[Directive<'a>] {
        match self {
            Definition::Operation(operation) => &operation.directives,
            Definition::Fragment(fragment) => &fragment.directives,
            Definition::Schema(schema) => &schema.directives,
            Definition::Type(type_definition) => type_definition.directives(),
            Definition::Directive(_) => &[],
            Definition::TypeSystemExtension(extension) => extension.directives(),
        }
    }
}

// Node equality deliberately ignores source locations so that a written and re-read document
// compares equal to the tree it was written from.
macro_rules! impl_node_eq {
    ($for_type:ident: $($field:ident),+ $(,)?) => {
        impl<'a> PartialEq for $for_type<'a> {
            fn eq(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
        }
    };
}

impl_node_eq!(Variable: name);
impl_node_eq!(IntValue: value);
impl_node_eq!(FloatValue: value);
impl_node_eq!(StringValue: value);
impl_node_eq!(BooleanValue: value);
impl_node_eq!(EnumValue: value);
impl_node_eq!(ListValue: values);
impl_node_eq!(ObjectValue: fields);
impl_node_eq!(ObjectField: name, value);
impl_node_eq!(Argument: name, value);
impl_node_eq!(Directive: name, arguments);
impl_node_eq!(NamedType: name);
impl_node_eq!(Field: alias, name, arguments, directives, selections, nullability);
impl_node_eq!(FragmentSpread: name, directives);
impl_node_eq!(InlineFragment: type_condition, directives, selections);
impl_node_eq!(VariableDefinition: name, of_type, default_value, directives);
impl_node_eq!(OperationDefinition: operation, name, variable_definitions, directives, selections, description);
impl_node_eq!(FragmentDefinition: name, type_condition, directives, selections, description);
impl_node_eq!(OperationTypeDefinition: operation, named_type);
impl_node_eq!(SchemaDefinition: description, directives, operation_types);
impl_node_eq!(FieldDefinition: description, name, arguments, of_type, directives);
impl_node_eq!(InputValueDefinition: description, name, directives, of_type, default_value);
impl_node_eq!(EnumValueDefinition: description, name, directives);
impl_node_eq!(ScalarTypeDefinition: description, name, directives);
impl_node_eq!(ObjectTypeDefinition: description, name, implements_interfaces, directives, fields);
impl_node_eq!(InterfaceTypeDefinition: description, name, implements_interfaces, directives, fields);
impl_node_eq!(UnionTypeDefinition: description, name, directives, members);
impl_node_eq!(EnumTypeDefinition: description, name, directives, values);
impl_node_eq!(InputObjectTypeDefinition: description, name, directives, input_fields);
impl_node_eq!(DirectiveDefinition: description, name, arguments, repeatable, locations);
impl_node_eq!(SchemaExtension: directives, operation_types);
impl_node_eq!(ScalarTypeExtension: name, directives);
impl_node_eq!(ObjectTypeExtension: name, implements_interfaces, directives, fields);
impl_node_eq!(InterfaceTypeExtension: name, implements_interfaces, directives, fields);
impl_node_eq!(UnionTypeExtension: name, directives, members);
impl_node_eq!(EnumTypeExtension: name, directives, values);
impl_node_eq!(InputObjectTypeExtension: name, directives, input_fields);
impl_node_eq!(Document: definitions);

impl<'a> PartialEq for NullValue<'a> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::WriteNode;

    fn query_op<'a>(ctx: &'a ASTContext, name: Option<&'a str>) -> Definition<'a> {
        let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
        selections.push(Selection::Field(Field::new_leaf(ctx, "hello")));
        Definition::Operation(OperationDefinition {
            operation: OperationKind::Query,
            name,
            variable_definitions: bumpalo::collections::Vec::new_in(&ctx.arena),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            selections,
            description: None,
            source_location: None,
        })
    }

    fn fragment<'a>(ctx: &'a ASTContext, name: &'a str) -> Definition<'a> {
        let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
        selections.push(Selection::Field(Field::new_leaf(ctx, "hello")));
        Definition::Fragment(FragmentDefinition {
            name,
            type_condition: NamedType::from("Query"),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            selections,
            description: None,
            source_location: None,
        })
    }

    #[test]
    fn operation_no_operations() {
        let ctx = ASTContext::new();
        let mut ast = Document::new_in(&ctx, None);
        ast.definitions.push(fragment(&ctx, "Foo"));
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message,
            "Operation with name queryName does not exist"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message,
            "Document does not contain any operations"
        );
    }

    #[test]
    fn operation_one_operation() {
        let ctx = ASTContext::new();
        let mut ast = Document::new_in(&ctx, None);
        ast.definitions.push(query_op(&ctx, Some("queryName")));
        assert_eq!(
            ast.operation(Some("queryName")).unwrap().print(),
            "query queryName {\n  hello\n}\n"
        );
        assert_eq!(
            ast.operation(None).unwrap().print(),
            "query queryName {\n  hello\n}\n"
        );
    }

    #[test]
    fn operation_one_operation_anonymous() {
        let ctx = ASTContext::new();
        let mut ast = Document::new_in(&ctx, None);
        ast.definitions.push(query_op(&ctx, None));
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message,
            "Operation with name queryName does not exist"
        );
        assert_eq!(ast.operation(None).unwrap().print(), "query {\n  hello\n}\n");
    }

    #[test]
    fn operation_two_operations() {
        let ctx = ASTContext::new();
        let mut ast = Document::new_in(&ctx, None);
        ast.definitions.push(query_op(&ctx, Some("queryName")));
        ast.definitions.push(query_op(&ctx, Some("otherName")));
        assert!(ast.operation(Some("queryName")).is_ok());
        assert!(ast.operation(Some("otherName")).is_ok());
        assert_eq!(
            ast.operation(Some("badName")).unwrap_err().message,
            "Operation with name badName does not exist"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message,
            "Document contains more than one operation, missing operation name"
        );
    }

    #[test]
    fn fragments_map() {
        let ctx = ASTContext::new();
        let mut ast = Document::new_in(&ctx, None);
        ast.definitions.push(fragment(&ctx, "Foo"));
        ast.definitions.push(fragment(&ctx, "Bar"));
        ast.definitions.push(query_op(&ctx, None));
        let fragments = ast.fragments(&ctx);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments["Foo"].name, "Foo");
        assert_eq!(fragments["Bar"].type_condition.name, "Query");
    }

    #[test]
    fn built_in_lookups() {
        let ctx = ASTContext::new();
        let scalar = TypeDefinition::Scalar(ScalarTypeDefinition {
            description: None,
            name: "ID",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        });
        assert!(scalar.is_built_in());
        let scalar = TypeDefinition::Scalar(ScalarTypeDefinition {
            description: None,
            name: "DateTime",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        });
        assert!(!scalar.is_built_in());

        let directive = DirectiveDefinition {
            description: None,
            name: "deprecated",
            arguments: bumpalo::collections::Vec::new_in(&ctx.arena),
            repeatable: false,
            locations: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        };
        assert!(directive.is_built_in());
    }

    #[test]
    fn equality_ignores_source_location() {
        let ctx = ASTContext::new();
        let mut with_location = Field::new_leaf(&ctx, "hero");
        with_location.source_location = Some(SourceLocation::new(3, 7));
        let without_location = Field::new_leaf(&ctx, "hero");
        assert_eq!(with_location, without_location);
        assert_ne!(with_location, Field::new_leaf(&ctx, "villain"));
    }

    #[test]
    fn alias_or_name() {
        let ctx = ASTContext::new();
        let field = Field::new_aliased_leaf(&ctx, "alias", "field");
        assert_eq!(field.alias_or_name(), "alias");
        let field = Field::new_leaf(&ctx, "field");
        assert_eq!(field.alias_or_name(), "field");
    }
}
