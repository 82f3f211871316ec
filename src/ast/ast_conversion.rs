use super::ast::*;

impl<'a> From<&'a str> for NamedType<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NamedType {
            name,
            source_location: None,
        }
    }
}

impl<'a> From<&'a str> for Variable<'a> {
    #[inline]
    fn from(name: &'a str) -> Variable<'a> {
        Variable {
            name,
            source_location: None,
        }
    }
}

impl<'a> From<bool> for BooleanValue<'a> {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue {
            value,
            source_location: None,
        }
    }
}

impl<'a> From<i32> for IntValue<'a> {
    #[inline]
    fn from(value: i32) -> Self {
        IntValue {
            value,
            source_location: None,
        }
    }
}

impl<'a> From<f64> for FloatValue<'a> {
    #[inline]
    fn from(value: f64) -> Self {
        FloatValue {
            value,
            source_location: None,
        }
    }
}

impl<'a> From<&'a str> for StringValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        StringValue {
            value,
            source_location: None,
        }
    }
}

impl<'a> From<Variable<'a>> for Value<'a> {
    #[inline]
    fn from(x: Variable<'a>) -> Self {
        Value::Variable(x)
    }
}

impl<'a> From<StringValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: StringValue<'a>) -> Self {
        Value::String(x)
    }
}

impl<'a> From<FloatValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: FloatValue<'a>) -> Self {
        Value::Float(x)
    }
}

impl<'a> From<IntValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: IntValue<'a>) -> Self {
        Value::Int(x)
    }
}

impl<'a> From<BooleanValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: BooleanValue<'a>) -> Self {
        Value::Boolean(x)
    }
}

impl<'a> From<EnumValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: EnumValue<'a>) -> Self {
        Value::Enum(x)
    }
}

impl<'a> From<ListValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ListValue<'a>) -> Self {
        Value::List(x)
    }
}

impl<'a> From<ObjectValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ObjectValue<'a>) -> Self {
        Value::Object(x)
    }
}

impl<'a> From<NullValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: NullValue<'a>) -> Self {
        Value::Null(x)
    }
}

impl<'a> From<NamedType<'a>> for Type<'a> {
    #[inline]
    fn from(x: NamedType<'a>) -> Self {
        Type::Named(x)
    }
}

impl<'a> From<Field<'a>> for Selection<'a> {
    #[inline]
    fn from(x: Field<'a>) -> Self {
        Selection::Field(x)
    }
}

impl<'a> From<FragmentSpread<'a>> for Selection<'a> {
    #[inline]
    fn from(x: FragmentSpread<'a>) -> Self {
        Selection::FragmentSpread(x)
    }
}

impl<'a> From<InlineFragment<'a>> for Selection<'a> {
    #[inline]
    fn from(x: InlineFragment<'a>) -> Self {
        Selection::InlineFragment(x)
    }
}

impl<'a> From<OperationDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: OperationDefinition<'a>) -> Self {
        Definition::Operation(x)
    }
}

impl<'a> From<FragmentDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: FragmentDefinition<'a>) -> Self {
        Definition::Fragment(x)
    }
}

impl<'a> From<SchemaDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: SchemaDefinition<'a>) -> Self {
        Definition::Schema(x)
    }
}

impl<'a> From<TypeDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: TypeDefinition<'a>) -> Self {
        Definition::Type(x)
    }
}

impl<'a> From<DirectiveDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: DirectiveDefinition<'a>) -> Self {
        Definition::Directive(x)
    }
}

impl<'a> From<TypeSystemExtension<'a>> for Definition<'a> {
    #[inline]
    fn from(x: TypeSystemExtension<'a>) -> Self {
        Definition::TypeSystemExtension(x)
    }
}

impl<'a> From<ScalarTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: ScalarTypeDefinition<'a>) -> Self {
        TypeDefinition::Scalar(x)
    }
}

impl<'a> From<ObjectTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: ObjectTypeDefinition<'a>) -> Self {
        TypeDefinition::Object(x)
    }
}

impl<'a> From<InterfaceTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: InterfaceTypeDefinition<'a>) -> Self {
        TypeDefinition::Interface(x)
    }
}

impl<'a> From<UnionTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: UnionTypeDefinition<'a>) -> Self {
        TypeDefinition::Union(x)
    }
}

impl<'a> From<EnumTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: EnumTypeDefinition<'a>) -> Self {
        TypeDefinition::Enum(x)
    }
}

impl<'a> From<InputObjectTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: InputObjectTypeDefinition<'a>) -> Self {
        TypeDefinition::InputObject(x)
    }
}
