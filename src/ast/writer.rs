use super::ast::*;
use std::{fmt, fmt::Write};

/// A sink for GraphQL source text that tracks indentation.
///
/// The writer wraps any [`fmt::Write`] sink and lazily writes two spaces per indentation level
/// at the start of every non-empty line. Empty lines stay empty.
pub struct SDLWriter<'w> {
    output: &'w mut dyn Write,
    indent: usize,
    bol: bool,
}

impl<'w> SDLWriter<'w> {
    #[inline]
    pub fn new(output: &'w mut dyn Write) -> Self {
        SDLWriter {
            output,
            indent: 0,
            bol: true,
        }
    }

    #[inline]
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    #[inline]
    pub fn unindent(&mut self) {
        self.indent -= 1;
    }

    /// Writes a block description, i.e. `"""description"""` followed by a line break.
    ///
    /// Any `"""` sequence contained in the description itself is escaped.
    pub fn write_description(&mut self, description: Option<&str>) -> fmt::Result {
        if let Some(description) = description {
            write!(
                self,
                "\"\"\"{}\"\"\"\n",
                description.replace("\"\"\"", "\\\"\"\"")
            )?;
        }
        Ok(())
    }

    /// Writes a description as a single-quoted string followed by a space, as used in front of
    /// inline input value definitions.
    pub fn write_inline_description(&mut self, description: Option<&str>) -> fmt::Result {
        if let Some(description) = description {
            write_quoted(self, description)?;
            self.write_char(' ')?;
        }
        Ok(())
    }
}

impl<'w> Write for SDLWriter<'w> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for chunk in s.split_inclusive('\n') {
            let (line, newline) = match chunk.strip_suffix('\n') {
                Some(line) => (line, true),
                None => (chunk, false),
            };
            if !line.is_empty() {
                if self.bol {
                    for _ in 0..self.indent {
                        self.output.write_str("  ")?;
                    }
                    self.bol = false;
                }
                self.output.write_str(line)?;
            }
            if newline {
                self.output.write_char('\n')?;
                self.bol = true;
            }
        }
        Ok(())
    }
}

/// Trait for writing AST Nodes to source text.
/// This is implemented by all AST Nodes and can hence be used to granularly print GraphQL
/// language. However, mostly this will be used via `Document::print`.
///
/// This typically is the last operation that's done in a given AST context and is hence outside
/// of its lifetime and arena.
///
/// Document-level definitions terminate themselves with a line break, while inline nodes like
/// values and type references don't.
pub trait WriteNode {
    /// Write an AST node to an [`SDLWriter`].
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result;

    /// Print an AST Node to source text as a String allocated on the heap.
    ///
    /// For convience when debugging, AST Nodes that implement `WriteNode` also automatically
    /// implement the [`fmt::Display`] trait.
    fn print(&self) -> String {
        let mut buf = String::new();
        let mut writer = SDLWriter::new(&mut buf);
        match self.write_node(&mut writer) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn WriteNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = SDLWriter::new(f);
        self.write_node(&mut writer)
    }
}

fn write_quoted(writer: &mut SDLWriter, value: &str) -> fmt::Result {
    writer.write_char('"')?;
    for c in value.chars() {
        match c {
            '\r' => writer.write_str(r"\r")?,
            '\n' => writer.write_str(r"\n")?,
            '\t' => writer.write_str(r"\t")?,
            '"' => writer.write_str("\\\"")?,
            '\\' => writer.write_str(r"\\")?,
            // Escapes are limited to four hex digits, so anything above the control range,
            // astral characters included, passes through raw
            c if c >= '\u{0020}' => writer.write_char(c)?,
            _ => write!(writer, "\\u{:0>4X}", c as u32)?,
        };
    }
    writer.write_char('"')
}

fn write_directives(writer: &mut SDLWriter, directives: &[Directive]) -> fmt::Result {
    for directive in directives.iter() {
        writer.write_char(' ')?;
        directive.write_node(writer)?;
    }
    Ok(())
}

fn write_arguments(writer: &mut SDLWriter, arguments: &[Argument]) -> fmt::Result {
    if !arguments.is_empty() {
        writer.write_char('(')?;
        let mut first = true;
        for argument in arguments.iter() {
            if first {
                first = false;
            } else {
                writer.write_str(", ")?;
            }
            argument.write_node(writer)?;
        }
        writer.write_char(')')?;
    }
    Ok(())
}

fn write_selections(writer: &mut SDLWriter, selections: &[Selection]) -> fmt::Result {
    writer.write_str("{\n")?;
    writer.indent();
    for selection in selections.iter() {
        selection.write_node(writer)?;
    }
    writer.unindent();
    writer.write_str("}\n")
}

fn write_implements(writer: &mut SDLWriter, implements_interfaces: &[&str]) -> fmt::Result {
    if !implements_interfaces.is_empty() {
        writer.write_str(" implements ")?;
        let mut first = true;
        for interface in implements_interfaces.iter() {
            if first {
                first = false;
            } else {
                writer.write_str(" & ")?;
            }
            writer.write_str(interface)?;
        }
    }
    Ok(())
}

fn write_field_block(writer: &mut SDLWriter, fields: &[FieldDefinition]) -> fmt::Result {
    if fields.is_empty() {
        return writer.write_str(" {\n}\n");
    }
    writer.write_str(" {\n")?;
    writer.indent();
    let mut first = true;
    for field in fields.iter() {
        if first {
            first = false;
        } else {
            writer.write_str("\n\n")?;
        }
        field.write_node(writer)?;
    }
    writer.unindent();
    writer.write_str("\n}\n")
}

fn write_enum_block(writer: &mut SDLWriter, values: &[EnumValueDefinition]) -> fmt::Result {
    writer.write_str(" {\n")?;
    writer.indent();
    for value in values.iter() {
        value.write_node(writer)?;
    }
    writer.unindent();
    writer.write_str("}\n")
}

fn write_input_fields_block(
    writer: &mut SDLWriter,
    input_fields: &[InputValueDefinition],
) -> fmt::Result {
    writer.write_str(" {\n")?;
    writer.indent();
    for input_field in input_fields.iter() {
        write_input_value(writer, input_field, false)?;
    }
    writer.unindent();
    writer.write_str("}\n")
}

fn write_input_arguments(
    writer: &mut SDLWriter,
    arguments: &[InputValueDefinition],
) -> fmt::Result {
    writer.write_char('(')?;
    let mut first = true;
    for argument in arguments.iter() {
        if first {
            first = false;
        } else {
            writer.write_str(", ")?;
        }
        write_input_value(writer, argument, true)?;
    }
    writer.write_char(')')
}

/// Input value definitions appear both inline, as field or directive arguments, and as blocks
/// inside input object types. Inline ones carry their description as a quoted string in front,
/// block ones as a block description above and terminate their own line.
fn write_input_value(
    writer: &mut SDLWriter,
    input_value: &InputValueDefinition,
    inline: bool,
) -> fmt::Result {
    if inline {
        writer.write_inline_description(input_value.description)?;
    } else {
        writer.write_description(input_value.description)?;
    }
    write!(writer, "{}: ", input_value.name)?;
    input_value.of_type.write_node(writer)?;
    if let Some(default_value) = &input_value.default_value {
        writer.write_str(" = ")?;
        default_value.write_node(writer)?;
    }
    write_directives(writer, &input_value.directives)?;
    if !inline {
        writer.write_char('\n')?;
    }
    Ok(())
}

impl<'a> WriteNode for NamedType<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_str(self.name)
    }
}

impl<'a> WriteNode for Variable<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "${}", self.name)
    }
}

impl<'a> WriteNode for IntValue<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "{}", self.value)
    }
}

impl<'a> WriteNode for FloatValue<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        let formatted = self.value.to_string();
        writer.write_str(&formatted)?;
        // Keep a fractional part so the value reads back as a Float, not an Int
        if !formatted.contains('.') && !formatted.contains('e') {
            writer.write_str(".0")?;
        }
        Ok(())
    }
}

impl<'a> WriteNode for StringValue<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write_quoted(writer, self.value)
    }
}

impl<'a> WriteNode for BooleanValue<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self.value {
            true => writer.write_str("true"),
            false => writer.write_str("false"),
        }
    }
}

impl<'a> WriteNode for NullValue<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_str("null")
    }
}

impl<'a> WriteNode for EnumValue<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_str(self.value)
    }
}

impl<'a> WriteNode for ListValue<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_char('[')?;
        let mut first = true;
        for value in self.values.iter() {
            if first {
                first = false;
            } else {
                writer.write_str(", ")?;
            }
            value.write_node(writer)?;
        }
        writer.write_char(']')
    }
}

impl<'a> WriteNode for ObjectValue<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_char('{')?;
        let mut first = true;
        for field in self.fields.iter() {
            if first {
                first = false;
            } else {
                writer.write_str(", ")?;
            }
            field.write_node(writer)?;
        }
        writer.write_char('}')
    }
}

impl<'a> WriteNode for ObjectField<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "{}: ", self.name)?;
        self.value.write_node(writer)
    }
}

impl<'a> WriteNode for Value<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self {
            Value::Variable(value) => value.write_node(writer),
            Value::String(value) => value.write_node(writer),
            Value::Float(value) => value.write_node(writer),
            Value::Int(value) => value.write_node(writer),
            Value::Boolean(value) => value.write_node(writer),
            Value::Enum(value) => value.write_node(writer),
            Value::List(value) => value.write_node(writer),
            Value::Object(value) => value.write_node(writer),
            Value::Null(value) => value.write_node(writer),
        }
    }
}

impl<'a> WriteNode for Argument<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "{}: ", self.name)?;
        self.value.write_node(writer)
    }
}

impl<'a> WriteNode for Directive<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "@{}", self.name)?;
        write_arguments(writer, &self.arguments)
    }
}

impl<'a> WriteNode for Type<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self {
            Type::Named(name) => name.write_node(writer),
            Type::List(inner) => {
                writer.write_char('[')?;
                inner.write_node(writer)?;
                writer.write_char(']')
            }
            Type::NonNull(inner) => {
                inner.write_node(writer)?;
                writer.write_char('!')
            }
        }
    }
}

impl<'a> WriteNode for Nullability<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self {
            Nullability::NonNull => writer.write_char('!'),
            Nullability::Nullable => writer.write_char('?'),
            Nullability::List {
                item,
                self_nullability,
            } => {
                writer.write_char('[')?;
                item.write_node(writer)?;
                writer.write_char(']')?;
                if let Some(self_nullability) = self_nullability {
                    self_nullability.write_node(writer)?;
                }
                Ok(())
            }
        }
    }
}

impl<'a> WriteNode for Field<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        if let Some(alias) = self.alias {
            write!(writer, "{}: ", alias)?;
        }
        writer.write_str(self.name)?;
        write_arguments(writer, &self.arguments)?;
        write_directives(writer, &self.directives)?;
        if let Some(nullability) = &self.nullability {
            nullability.write_node(writer)?;
        }
        if self.selections.is_empty() {
            writer.write_char('\n')
        } else {
            writer.write_char(' ')?;
            write_selections(writer, &self.selections)
        }
    }
}

impl<'a> WriteNode for FragmentSpread<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "...{}", self.name)?;
        write_directives(writer, &self.directives)?;
        writer.write_char('\n')
    }
}

impl<'a> WriteNode for InlineFragment<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_str("...")?;
        if let Some(type_condition) = &self.type_condition {
            write!(writer, " on {}", type_condition.name)?;
        }
        write_directives(writer, &self.directives)?;
        if self.selections.is_empty() {
            writer.write_char('\n')
        } else {
            writer.write_char(' ')?;
            write_selections(writer, &self.selections)
        }
    }
}

impl<'a> WriteNode for Selection<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_node(writer),
            Selection::FragmentSpread(spread) => spread.write_node(writer),
            Selection::InlineFragment(inline) => inline.write_node(writer),
        }
    }
}

impl<'a> WriteNode for VariableDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "${}: ", self.name)?;
        self.of_type.write_node(writer)?;
        if let Some(default_value) = &self.default_value {
            writer.write_str(" = ")?;
            default_value.write_node(writer)?;
        }
        write_directives(writer, &self.directives)
    }
}

impl<'a> WriteNode for OperationDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_str(self.operation.as_str())?;
        if let Some(name) = self.name {
            write!(writer, " {}", name)?;
        }
        if !self.variable_definitions.is_empty() {
            if self.name.is_none() {
                writer.write_char(' ')?;
            }
            writer.write_char('(')?;
            let mut first = true;
            for variable_definition in self.variable_definitions.iter() {
                if first {
                    first = false;
                } else {
                    writer.write_str(", ")?;
                }
                variable_definition.write_node(writer)?;
            }
            writer.write_char(')')?;
        }
        write_directives(writer, &self.directives)?;
        if self.selections.is_empty() {
            writer.write_char('\n')
        } else {
            writer.write_char(' ')?;
            write_selections(writer, &self.selections)
        }
    }
}

impl<'a> WriteNode for FragmentDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "fragment {} on {}", self.name, self.type_condition.name)?;
        write_directives(writer, &self.directives)?;
        if self.selections.is_empty() {
            writer.write_char('\n')
        } else {
            writer.write_char(' ')?;
            write_selections(writer, &self.selections)
        }
    }
}

impl<'a> WriteNode for OperationTypeDefinition<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "{}: {}\n", self.operation.as_str(), self.named_type)
    }
}

impl<'a> WriteNode for SchemaDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        writer.write_str("schema")?;
        write_directives(writer, &self.directives)?;
        writer.write_str(" {\n")?;
        writer.indent();
        for operation_type in self.operation_types.iter() {
            operation_type.write_node(writer)?;
        }
        writer.unindent();
        writer.write_str("}\n")
    }
}

impl<'a> WriteNode for ScalarTypeDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        write!(writer, "scalar {}", self.name)?;
        write_directives(writer, &self.directives)?;
        writer.write_char('\n')
    }
}

impl<'a> WriteNode for ObjectTypeDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        write!(writer, "type {}", self.name)?;
        write_implements(writer, &self.implements_interfaces)?;
        write_directives(writer, &self.directives)?;
        match &self.fields {
            // A type declared without a body keeps printing without one
            None => writer.write_char('\n'),
            Some(fields) => write_field_block(writer, fields),
        }
    }
}

impl<'a> WriteNode for InterfaceTypeDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        write!(writer, "interface {}", self.name)?;
        write_implements(writer, &self.implements_interfaces)?;
        write_directives(writer, &self.directives)?;
        write_field_block(writer, &self.fields)
    }
}

impl<'a> WriteNode for UnionTypeDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        write!(writer, "union {}", self.name)?;
        write_directives(writer, &self.directives)?;
        writer.write_str(" = ")?;
        let mut first = true;
        for member in self.members.iter() {
            if first {
                first = false;
            } else {
                writer.write_char('|')?;
            }
            member.write_node(writer)?;
        }
        writer.write_char('\n')
    }
}

impl<'a> WriteNode for EnumTypeDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        write!(writer, "enum {}", self.name)?;
        write_directives(writer, &self.directives)?;
        write_enum_block(writer, &self.values)
    }
}

impl<'a> WriteNode for EnumValueDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        writer.write_str(self.name)?;
        write_directives(writer, &self.directives)?;
        writer.write_char('\n')
    }
}

impl<'a> WriteNode for InputObjectTypeDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        write!(writer, "input {}", self.name)?;
        write_directives(writer, &self.directives)?;
        write_input_fields_block(writer, &self.input_fields)
    }
}

impl<'a> WriteNode for FieldDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        writer.write_str(self.name)?;
        if !self.arguments.is_empty() {
            write_input_arguments(writer, &self.arguments)?;
        }
        writer.write_str(": ")?;
        self.of_type.write_node(writer)?;
        write_directives(writer, &self.directives)
    }
}

impl<'a> WriteNode for InputValueDefinition<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write_input_value(writer, self, false)
    }
}

impl<'a> WriteNode for DirectiveDefinition<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_description(self.description)?;
        write!(writer, "directive @{}", self.name)?;
        if !self.arguments.is_empty() {
            writer.write_char(' ')?;
            write_input_arguments(writer, &self.arguments)?;
        }
        if self.repeatable {
            writer.write_str(" repeatable")?;
        }
        writer.write_str(" on ")?;
        let mut first = true;
        for location in self.locations.iter() {
            if first {
                first = false;
            } else {
                writer.write_char('|')?;
            }
            writer.write_str(location.as_str())?;
        }
        writer.write_char('\n')
    }
}

impl<'a> WriteNode for SchemaExtension<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        writer.write_str("extend schema")?;
        write_directives(writer, &self.directives)?;
        if self.operation_types.is_empty() {
            writer.write_char('\n')
        } else {
            writer.write_str(" {\n")?;
            writer.indent();
            for operation_type in self.operation_types.iter() {
                operation_type.write_node(writer)?;
            }
            writer.unindent();
            writer.write_str("}\n")
        }
    }
}

impl<'a> WriteNode for ScalarTypeExtension<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "extend scalar {}", self.name)?;
        write_directives(writer, &self.directives)?;
        writer.write_char('\n')
    }
}

impl<'a> WriteNode for ObjectTypeExtension<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "extend type {}", self.name)?;
        write_implements(writer, &self.implements_interfaces)?;
        write_directives(writer, &self.directives)?;
        if self.fields.is_empty() {
            writer.write_char('\n')
        } else {
            write_field_block(writer, &self.fields)
        }
    }
}

impl<'a> WriteNode for InterfaceTypeExtension<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "extend interface {}", self.name)?;
        write_implements(writer, &self.implements_interfaces)?;
        write_directives(writer, &self.directives)?;
        if self.fields.is_empty() {
            writer.write_char('\n')
        } else {
            write_field_block(writer, &self.fields)
        }
    }
}

impl<'a> WriteNode for UnionTypeExtension<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "extend union {}", self.name)?;
        write_directives(writer, &self.directives)?;
        writer.write_str(" = ")?;
        let mut first = true;
        for member in self.members.iter() {
            if first {
                first = false;
            } else {
                writer.write_char('|')?;
            }
            member.write_node(writer)?;
        }
        writer.write_char('\n')
    }
}

impl<'a> WriteNode for EnumTypeExtension<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "extend enum {}", self.name)?;
        write_directives(writer, &self.directives)?;
        if self.values.is_empty() {
            writer.write_char('\n')
        } else {
            write_enum_block(writer, &self.values)
        }
    }
}

impl<'a> WriteNode for InputObjectTypeExtension<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        write!(writer, "extend input {}", self.name)?;
        write_directives(writer, &self.directives)?;
        if self.input_fields.is_empty() {
            writer.write_char('\n')
        } else {
            write_input_fields_block(writer, &self.input_fields)
        }
    }
}

impl<'a> WriteNode for TypeDefinition<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self {
            TypeDefinition::Scalar(scalar) => scalar.write_node(writer),
            TypeDefinition::Object(object) => object.write_node(writer),
            TypeDefinition::Interface(interface) => interface.write_node(writer),
            TypeDefinition::Union(union) => union.write_node(writer),
            TypeDefinition::Enum(enum_type) => enum_type.write_node(writer),
            TypeDefinition::InputObject(input_object) => input_object.write_node(writer),
        }
    }
}

impl<'a> WriteNode for TypeSystemExtension<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self {
            TypeSystemExtension::Schema(schema) => schema.write_node(writer),
            TypeSystemExtension::Scalar(scalar) => scalar.write_node(writer),
            TypeSystemExtension::Object(object) => object.write_node(writer),
            TypeSystemExtension::Interface(interface) => interface.write_node(writer),
            TypeSystemExtension::Union(union) => union.write_node(writer),
            TypeSystemExtension::Enum(enum_type) => enum_type.write_node(writer),
            TypeSystemExtension::InputObject(input_object) => input_object.write_node(writer),
        }
    }
}

impl<'a> WriteNode for Definition<'a> {
    #[inline]
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        match self {
            Definition::Operation(operation) => operation.write_node(writer),
            Definition::Fragment(fragment) => fragment.write_node(writer),
            Definition::Schema(schema) => schema.write_node(writer),
            Definition::Type(type_definition) => type_definition.write_node(writer),
            Definition::Directive(directive) => directive.write_node(writer),
            Definition::TypeSystemExtension(extension) => extension.write_node(writer),
        }
    }
}

impl<'a> WriteNode for Document<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        let mut first = true;
        for definition in self.definitions.iter() {
            if first {
                first = false;
            } else {
                // Definitions self-terminate, so this leaves a blank line between them
                writer.write_char('\n')?;
            }
            definition.write_node(writer)?;
        }
        Ok(())
    }
}

impl<'a> WriteNode for super::node::Node<'a> {
    fn write_node(&self, writer: &mut SDLWriter) -> fmt::Result {
        use super::node::Node;
        match self {
            Node::Document(document) => document.write_node(writer),
            Node::Definition(definition) => definition.write_node(writer),
            Node::Selection(selection) => selection.write_node(writer),
            Node::Type(of_type) => of_type.write_node(writer),
            Node::Value(value) => value.write_node(writer),
            Node::Argument(argument) => argument.write_node(writer),
            Node::Directive(directive) => directive.write_node(writer),
            Node::ObjectField(field) => field.write_node(writer),
            Node::VariableDefinition(variable_definition) => variable_definition.write_node(writer),
            Node::InputValueDefinition(input_value) => input_value.write_node(writer),
            Node::FieldDefinition(field_definition) => field_definition.write_node(writer),
            Node::EnumValueDefinition(enum_value) => enum_value.write_node(writer),
            Node::OperationTypeDefinition(operation_type) => operation_type.write_node(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use indoc::indoc;

    fn list_of<'a>(ctx: &'a ASTContext, values: &[Value<'a>]) -> Value<'a> {
        let mut list = bumpalo::collections::Vec::new_in(&ctx.arena);
        list.extend(values.iter().cloned());
        Value::List(ListValue {
            values: list,
            source_location: None,
        })
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        assert_eq!(Value::from(IntValue::from(123)).print(), "123");
        assert_eq!(Value::from(FloatValue::from(123.23)).print(), "123.23");
        assert_eq!(Value::from(FloatValue::from(1.0)).print(), "1.0");
        assert_eq!(Value::from(BooleanValue::from(true)).print(), "true");
        assert_eq!(Value::null().print(), "null");
        assert_eq!(Value::from(Variable::from("var")).print(), "$var");
        assert_eq!(
            Value::from(EnumValue {
                value: "MOBILE_WEB",
                source_location: None
            })
            .print(),
            "MOBILE_WEB"
        );

        let list = list_of(
            &ctx,
            &[
                Value::from(IntValue::from(1)),
                Value::from(IntValue::from(2)),
            ],
        );
        assert_eq!(list.print(), "[1, 2]");

        let mut fields = bumpalo::collections::Vec::new_in(&ctx.arena);
        fields.push(ObjectField {
            name: "a",
            value: Value::from(BooleanValue::from(true)),
            source_location: None,
        });
        fields.push(ObjectField {
            name: "b",
            value: list,
            source_location: None,
        });
        let object = Value::Object(ObjectValue {
            fields,
            source_location: None,
        });
        assert_eq!(object.print(), "{a: true, b: [1, 2]}");
    }

    #[test]
    fn strings() {
        assert_eq!(Value::from(StringValue::from("value")).print(), "\"value\"");
        assert_eq!(
            Value::from(StringValue::from("a\"b\\c\nd\te")).print(),
            "\"a\\\"b\\\\c\\nd\\te\""
        );
        assert_eq!(Value::from(StringValue::from("\u{0001}")).print(), "\"\\u0001\"");
        assert_eq!(Value::from(StringValue::from("\0")).print(), "\"\\u0000\"");
        assert_eq!(
            Value::from(StringValue::from("rocket \u{1F680}")).print(),
            "\"rocket \u{1F680}\""
        );
    }

    #[test]
    fn types() {
        let ctx = ASTContext::new();
        let named = Type::Named(NamedType::from("Type"));
        assert_eq!(named.print(), "Type");
        assert_eq!(named.into_list(&ctx).print(), "[Type]");
        assert_eq!(
            named.into_nonnull(&ctx).into_list(&ctx).into_nonnull(&ctx).print(),
            "[Type!]!"
        );
    }

    #[test]
    fn directives() {
        let ctx = ASTContext::new();
        let mut directive = Directive::new(&ctx, "skip");
        directive.arguments.push(Argument {
            name: "if",
            value: Value::from(BooleanValue::from(true)),
            source_location: None,
        });
        assert_eq!(directive.print(), "@skip(if: true)");
    }

    #[test]
    fn fields() {
        let ctx = ASTContext::new();
        let field = Field::new_leaf(&ctx, "field");
        assert_eq!(field.print(), "field\n");

        let field = Field::new_aliased_leaf(&ctx, "alias", "field");
        assert_eq!(field.print(), "alias: field\n");

        let mut field = Field::new_leaf(&ctx, "field");
        field.arguments.push(Argument {
            name: "test",
            value: Value::from(BooleanValue::from(true)),
            source_location: None,
        });
        field.directives.push(Directive::new(&ctx, "test"));
        assert_eq!(field.print(), "field(test: true) @test\n");

        let mut field = Field::new_leaf(&ctx, "parent");
        field
            .selections
            .push(Selection::Field(Field::new_leaf(&ctx, "child")));
        assert_eq!(field.print(), "parent {\n  child\n}\n");
    }

    #[test]
    fn field_nullability() {
        let ctx = ASTContext::new();
        let mut field = Field::new_leaf(&ctx, "field");
        field.nullability = Some(Nullability::NonNull);
        assert_eq!(field.print(), "field!\n");

        let mut field = Field::new_leaf(&ctx, "list");
        field.nullability = Some(Nullability::List {
            item: ctx.alloc(Nullability::Nullable),
            self_nullability: Some(ctx.alloc(Nullability::NonNull)),
        });
        assert_eq!(field.print(), "list[?]!\n");
    }

    #[test]
    fn fragment_spreads() {
        let ctx = ASTContext::new();
        let mut directives = bumpalo::collections::Vec::new_in(&ctx.arena);
        directives.push(Directive::new(&ctx, "test"));
        let spread = FragmentSpread {
            name: "Type",
            directives,
            source_location: None,
        };
        assert_eq!(spread.print(), "...Type @test\n");
    }

    #[test]
    fn inline_fragments() {
        let ctx = ASTContext::new();
        let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
        selections.push(Selection::Field(Field::new_leaf(&ctx, "field")));
        let inline = InlineFragment {
            type_condition: Some(NamedType::from("Type")),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            selections,
            source_location: None,
        };
        assert_eq!(inline.print(), "... on Type {\n  field\n}\n");

        let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
        selections.push(Selection::Field(Field::new_leaf(&ctx, "field")));
        let mut directives = bumpalo::collections::Vec::new_in(&ctx.arena);
        directives.push(Directive::new(&ctx, "test"));
        let inline = InlineFragment {
            type_condition: None,
            directives,
            selections,
            source_location: None,
        };
        assert_eq!(inline.print(), "... @test {\n  field\n}\n");
    }

    #[test]
    fn operation_definitions() {
        let ctx = ASTContext::new();
        let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
        selections.push(Selection::Field(Field::new_leaf(&ctx, "field")));
        let mut operation = OperationDefinition {
            operation: OperationKind::Query,
            name: None,
            variable_definitions: bumpalo::collections::Vec::new_in(&ctx.arena),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            selections,
            description: None,
            source_location: None,
        };
        assert_eq!(operation.print(), "query {\n  field\n}\n");

        operation.name = Some("Name");
        assert_eq!(operation.print(), "query Name {\n  field\n}\n");

        operation.variable_definitions.push(VariableDefinition {
            name: "var",
            of_type: Type::Named(NamedType::from("String")),
            default_value: None,
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        });
        assert_eq!(operation.print(), "query Name($var: String) {\n  field\n}\n");

        operation.name = None;
        assert_eq!(operation.print(), "query ($var: String) {\n  field\n}\n");

        operation.variable_definitions[0].default_value = Some(Value::from(IntValue::from(1)));
        assert_eq!(operation.print(), "query ($var: String = 1) {\n  field\n}\n");

        operation.operation = OperationKind::Mutation;
        operation.variable_definitions.clear();
        assert_eq!(operation.print(), "mutation {\n  field\n}\n");
    }

    #[test]
    fn fragment_definitions() {
        let ctx = ASTContext::new();
        let mut selections = bumpalo::collections::Vec::new_in(&ctx.arena);
        selections.push(Selection::Field(Field::new_leaf(&ctx, "name")));
        let fragment = FragmentDefinition {
            name: "F",
            type_condition: NamedType::from("Character"),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            selections,
            description: None,
            source_location: None,
        };
        assert_eq!(fragment.print(), "fragment F on Character {\n  name\n}\n");
    }

    #[test]
    fn schema_definitions() {
        let ctx = ASTContext::new();
        let mut operation_types = bumpalo::collections::Vec::new_in(&ctx.arena);
        operation_types.push(OperationTypeDefinition {
            operation: OperationKind::Query,
            named_type: "Query",
            source_location: None,
        });
        operation_types.push(OperationTypeDefinition {
            operation: OperationKind::Mutation,
            named_type: "Mutation",
            source_location: None,
        });
        let schema = SchemaDefinition {
            description: None,
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            operation_types,
            source_location: None,
        };
        assert_eq!(
            schema.print(),
            "schema {\n  query: Query\n  mutation: Mutation\n}\n"
        );
    }

    #[test]
    fn object_type_definitions() {
        let ctx = ASTContext::new();
        let mut object = ObjectTypeDefinition {
            description: None,
            name: "Query",
            implements_interfaces: bumpalo::collections::Vec::new_in(&ctx.arena),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            fields: None,
            source_location: None,
        };
        assert_eq!(object.print(), "type Query\n");

        object.fields = Some(bumpalo::collections::Vec::new_in(&ctx.arena));
        assert_eq!(object.print(), "type Query {\n}\n");

        let mut fields = bumpalo::collections::Vec::new_in(&ctx.arena);
        fields.push(FieldDefinition {
            description: None,
            name: "hero",
            arguments: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("Character")),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        });
        fields.push(FieldDefinition {
            description: None,
            name: "droid",
            arguments: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("Droid")),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        });
        object.fields = Some(fields);
        assert_eq!(
            object.print(),
            "type Query {\n  hero: Character\n\n  droid: Droid\n}\n"
        );

        object.implements_interfaces.push("Node");
        object.implements_interfaces.push("Entity");
        assert_eq!(
            object.print(),
            "type Query implements Node & Entity {\n  hero: Character\n\n  droid: Droid\n}\n"
        );
    }

    #[test]
    fn field_definition_arguments() {
        let ctx = ASTContext::new();
        let mut arguments = bumpalo::collections::Vec::new_in(&ctx.arena);
        arguments.push(InputValueDefinition {
            description: None,
            name: "episode",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("Episode")),
            default_value: Some(Value::from(EnumValue {
                value: "NEWHOPE",
                source_location: None,
            })),
            source_location: None,
        });
        arguments.push(InputValueDefinition {
            description: Some("how many"),
            name: "first",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("Int")),
            default_value: None,
            source_location: None,
        });
        let field = FieldDefinition {
            description: None,
            name: "hero",
            arguments,
            of_type: Type::Named(NamedType::from("Character")),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        };
        assert_eq!(
            field.print(),
            "hero(episode: Episode = NEWHOPE, \"how many\" first: Int): Character"
        );
    }

    #[test]
    fn union_type_definitions() {
        let ctx = ASTContext::new();
        let mut members = bumpalo::collections::Vec::new_in(&ctx.arena);
        members.push(NamedType::from("Human"));
        members.push(NamedType::from("Droid"));
        members.push(NamedType::from("Starship"));
        let union = UnionTypeDefinition {
            description: None,
            name: "SearchResult",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            members,
            source_location: None,
        };
        assert_eq!(union.print(), "union SearchResult = Human|Droid|Starship\n");
    }

    #[test]
    fn enum_type_definitions() {
        let ctx = ASTContext::new();
        let mut values = bumpalo::collections::Vec::new_in(&ctx.arena);
        for name in ["NEWHOPE", "EMPIRE", "JEDI"] {
            values.push(EnumValueDefinition {
                description: None,
                name,
                directives: bumpalo::collections::Vec::new_in(&ctx.arena),
                source_location: None,
            });
        }
        let enum_type = EnumTypeDefinition {
            description: None,
            name: "Episode",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            values,
            source_location: None,
        };
        assert_eq!(
            enum_type.print(),
            "enum Episode {\n  NEWHOPE\n  EMPIRE\n  JEDI\n}\n"
        );
    }

    #[test]
    fn input_object_type_definitions() {
        let ctx = ASTContext::new();
        let mut input_fields = bumpalo::collections::Vec::new_in(&ctx.arena);
        input_fields.push(InputValueDefinition {
            description: None,
            name: "stars",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("Int")).into_nonnull(&ctx),
            default_value: None,
            source_location: None,
        });
        input_fields.push(InputValueDefinition {
            description: None,
            name: "commentary",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("String")),
            default_value: None,
            source_location: None,
        });
        let input = InputObjectTypeDefinition {
            description: None,
            name: "ReviewInput",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            input_fields,
            source_location: None,
        };
        assert_eq!(
            input.print(),
            "input ReviewInput {\n  stars: Int!\n  commentary: String\n}\n"
        );
    }

    #[test]
    fn directive_definitions() {
        let ctx = ASTContext::new();
        let mut arguments = bumpalo::collections::Vec::new_in(&ctx.arena);
        arguments.push(InputValueDefinition {
            description: None,
            name: "url",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("String")).into_nonnull(&ctx),
            default_value: None,
            source_location: None,
        });
        let mut locations = bumpalo::collections::Vec::new_in(&ctx.arena);
        locations.push(DirectiveLocation::FieldDefinition);
        locations.push(DirectiveLocation::Object);
        let directive = DirectiveDefinition {
            description: None,
            name: "delegate",
            arguments,
            repeatable: true,
            locations,
            source_location: None,
        };
        assert_eq!(
            directive.print(),
            "directive @delegate (url: String!) repeatable on FIELD_DEFINITION|OBJECT\n"
        );
    }

    #[test]
    fn descriptions() {
        let ctx = ASTContext::new();
        let scalar = ScalarTypeDefinition {
            description: Some("An ISO-8601 date"),
            name: "Date",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        };
        assert_eq!(
            scalar.print(),
            "\"\"\"An ISO-8601 date\"\"\"\nscalar Date\n"
        );

        let mut fields = bumpalo::collections::Vec::new_in(&ctx.arena);
        fields.push(FieldDefinition {
            description: Some("The hero of the saga"),
            name: "hero",
            arguments: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("Character")),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        });
        let object = ObjectTypeDefinition {
            description: None,
            name: "Query",
            implements_interfaces: bumpalo::collections::Vec::new_in(&ctx.arena),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            fields: Some(fields),
            source_location: None,
        };
        assert_eq!(
            object.print(),
            "type Query {\n  \"\"\"The hero of the saga\"\"\"\n  hero: Character\n}\n"
        );
    }

    #[test]
    fn extensions() {
        let ctx = ASTContext::new();
        let mut directives = bumpalo::collections::Vec::new_in(&ctx.arena);
        directives.push(Directive::new(&ctx, "contact"));
        let scalar = ScalarTypeExtension {
            name: "Date",
            directives,
            source_location: None,
        };
        assert_eq!(scalar.print(), "extend scalar Date @contact\n");

        let mut members = bumpalo::collections::Vec::new_in(&ctx.arena);
        members.push(NamedType::from("Wookiee"));
        let union = UnionTypeExtension {
            name: "SearchResult",
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            members,
            source_location: None,
        };
        assert_eq!(union.print(), "extend union SearchResult = Wookiee\n");

        let mut directives = bumpalo::collections::Vec::new_in(&ctx.arena);
        directives.push(Directive::new(&ctx, "auth"));
        let schema = SchemaExtension {
            directives,
            operation_types: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        };
        assert_eq!(schema.print(), "extend schema @auth\n");
    }

    #[test]
    fn document() {
        let ctx = ASTContext::new();
        let mut ast = Document::new_in(&ctx, None);

        let mut operation_types = bumpalo::collections::Vec::new_in(&ctx.arena);
        operation_types.push(OperationTypeDefinition {
            operation: OperationKind::Query,
            named_type: "Query",
            source_location: None,
        });
        ast.definitions.push(Definition::Schema(SchemaDefinition {
            description: None,
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            operation_types,
            source_location: None,
        }));

        let mut fields = bumpalo::collections::Vec::new_in(&ctx.arena);
        fields.push(FieldDefinition {
            description: None,
            name: "hero",
            arguments: bumpalo::collections::Vec::new_in(&ctx.arena),
            of_type: Type::Named(NamedType::from("Character")),
            directives: bumpalo::collections::Vec::new_in(&ctx.arena),
            source_location: None,
        });
        ast.definitions
            .push(Definition::Type(TypeDefinition::Object(
                ObjectTypeDefinition {
                    description: None,
                    name: "Query",
                    implements_interfaces: bumpalo::collections::Vec::new_in(&ctx.arena),
                    directives: bumpalo::collections::Vec::new_in(&ctx.arena),
                    fields: Some(fields),
                    source_location: None,
                },
            )));

        let expected = indoc! {r#"
            schema {
              query: Query
            }

            type Query {
              hero: Character
            }
        "#};
        assert_eq!(ast.print(), expected);
    }
}
