//! Type descriptors
//!
//! Each entity type is described by a `TypeDescriptor`: an ordered list of
//! fields, each pairing an output `FieldType` with a tagged `FieldBinding`
//! telling the executor how to compute the value from a parent record.
//! Named references are resolved by name at execution time, which is what
//! breaks the Book↔Author cycle.

/// Output type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// 32-bit signed integer scalar
    Int,
    /// UTF-8 string scalar
    String,
    /// Nullable reference to a registered object type
    Named(String),
    /// List of the inner type
    List(Box<FieldType>),
    /// Non-null wrapper around the inner type
    NonNull(Box<FieldType>),
}

impl FieldType {
    /// The object type name this field ultimately points at, if any.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            FieldType::Int | FieldType::String => None,
            FieldType::Named(name) => Some(name),
            FieldType::List(inner) | FieldType::NonNull(inner) => inner.object_name(),
        }
    }

    /// Whether resolving this field requires a sub-selection.
    pub fn is_object(&self) -> bool {
        self.object_name().is_some()
    }

    /// GraphQL SDL rendering of the type.
    pub fn render(&self) -> String {
        match self {
            FieldType::Int => "Int".to_string(),
            FieldType::String => "String".to_string(),
            FieldType::Named(name) => name.clone(),
            FieldType::List(inner) => format!("[{}]", inner.render()),
            FieldType::NonNull(inner) => format!("{}!", inner.render()),
        }
    }
}

/// The entity kind a type's records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Author,
}

impl EntityKind {
    /// Lowercase label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Book => "book",
            EntityKind::Author => "author",
        }
    }
}

/// Scalar attributes a binding can copy off a parent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Id,
    Name,
    /// Book-only foreign key
    AuthorId,
}

impl ScalarField {
    /// Whether the attribute exists on records of the given kind.
    pub fn applies_to(&self, kind: EntityKind) -> bool {
        match self {
            ScalarField::Id | ScalarField::Name => true,
            ScalarField::AuthorId => kind == EntityKind::Book,
        }
    }
}

/// How a field's value is computed from its parent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldBinding {
    /// Direct attribute copy
    Scalar(ScalarField),
    /// The author referenced by `Book.authorId`, or null
    BookAuthor,
    /// All books whose `authorId` equals the author's id
    AuthorBooks,
}

impl FieldBinding {
    /// Whether the binding can execute against records of the given kind.
    pub fn applies_to(&self, kind: EntityKind) -> bool {
        match self {
            FieldBinding::Scalar(scalar) => scalar.applies_to(kind),
            FieldBinding::BookAuthor => kind == EntityKind::Book,
            FieldBinding::AuthorBooks => kind == EntityKind::Author,
        }
    }

}

/// One field of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub field_type: FieldType,
    pub binding: FieldBinding,
}

impl FieldDescriptor {
    /// Scalar field shorthand.
    pub fn scalar(name: &str, field_type: FieldType, scalar: ScalarField) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            field_type,
            binding: FieldBinding::Scalar(scalar),
        }
    }

    /// Relation field shorthand.
    pub fn relation(name: &str, field_type: FieldType, binding: FieldBinding) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            field_type,
            binding,
        }
    }
}

/// An object type: name, description, entity kind, ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub kind: EntityKind,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Create a descriptor with no fields yet.
    pub fn new(name: &str, description: &str, kind: EntityKind) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            kind,
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving declaration order.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
