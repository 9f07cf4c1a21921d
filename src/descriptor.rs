//! Field and type descriptor tables
//!
//! Registered types describe themselves through these declarative tables
//! instead of runtime type introspection: each type records the marker
//! capabilities it satisfies and an ordered field list, fixed at
//! registration time.

/// Marker capabilities a vocabulary type satisfies.
///
/// Recorded once when the descriptor is built. A value step always satisfies
/// the step capability as well, which is why the range resolver checks the
/// more specific capability first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Step that additionally yields a scalar value.
    pub value_step: bool,
    /// Query pipeline stage.
    pub step: bool,
    /// Composable predicate or expression construct.
    pub operator: bool,
    /// Native value of the query language.
    pub value: bool,
}

impl Capabilities {
    /// A plain pipeline step
    pub fn step() -> Self {
        Self {
            step: true,
            ..Self::default()
        }
    }

    /// A step that also yields a scalar value
    pub fn value_step() -> Self {
        Self {
            value_step: true,
            step: true,
            ..Self::default()
        }
    }

    /// A predicate/expression operator
    pub fn operator() -> Self {
        Self {
            operator: true,
            ..Self::default()
        }
    }

    /// A native query language value
    pub fn value() -> Self {
        Self {
            value: true,
            ..Self::default()
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 text.
    String,
    /// Boolean flag.
    Bool,
    /// Machine integer, any width.
    Int,
    /// Reference to another vocabulary entity, classified by its
    /// capabilities.
    Typed(Capabilities),
    /// Ordered sequence of an element type.
    Sequence(Box<FieldType>),
}

impl FieldType {
    /// A sequence of the given element type
    pub fn sequence_of(element: FieldType) -> Self {
        FieldType::Sequence(Box::new(element))
    }

    /// A reference to a plain step type
    pub fn step() -> Self {
        FieldType::Typed(Capabilities::step())
    }

    /// A reference to a value step type
    pub fn value_step() -> Self {
        FieldType::Typed(Capabilities::value_step())
    }

    /// A reference to an operator type
    pub fn operator() -> Self {
        FieldType::Typed(Capabilities::operator())
    }

    /// A reference to a native value
    pub fn value() -> Self {
        FieldType::Typed(Capabilities::value())
    }

    /// Whether this is a sequence type
    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldType::Sequence(_))
    }

    /// Whether the outer kind is a primitive literal kind.
    ///
    /// A sequence is never primitive here, whatever its element type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, FieldType::String | FieldType::Bool | FieldType::Int)
    }
}

/// One field of a registered type: its serialization tag name and declared
/// type, in declaration order within the owning descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: String,
    pub field_type: FieldType,
}

impl Field {
    /// Create a field descriptor
    pub fn new(tag: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            tag: tag.into(),
            field_type,
        }
    }
}

/// Descriptor for one registered vocabulary type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Capabilities of the type itself.
    pub capabilities: Capabilities,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl TypeDescriptor {
    /// Create a descriptor with the given capabilities and no fields
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            fields: Vec::new(),
        }
    }

    /// Descriptor for a plain step type
    pub fn step() -> Self {
        Self::new(Capabilities::step())
    }

    /// Descriptor for a value step type
    pub fn value_step() -> Self {
        Self::new(Capabilities::value_step())
    }

    /// Append a field, preserving declaration order
    pub fn with_field(mut self, tag: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(Field::new(tag, field_type));
        self
    }
}
