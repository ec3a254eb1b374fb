//! Type registry
//!
//! Forward-declared type descriptors registered in a by-name table. All
//! validation happens at build time; execution only ever does table
//! lookups.

use std::collections::HashMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::{
    EntityKind, FieldBinding, FieldDescriptor, FieldType, ScalarField, TypeDescriptor,
};

/// By-name lookup table of object types.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
    /// Registration order, for stable SDL output.
    order: Vec<String>,
}

impl TypeRegistry {
    /// Build a registry from descriptors, validating the whole set.
    ///
    /// Checks, in order: no duplicate type names, no duplicate field names
    /// within a type, every binding applies to its type's entity kind,
    /// object-typed fields carry a relation binding, and every `Named`
    /// reference resolves in the table.
    pub fn build(descriptors: Vec<TypeDescriptor>) -> SchemaResult<Self> {
        let mut types = HashMap::new();
        let mut order = Vec::new();

        for descriptor in descriptors {
            if types.contains_key(&descriptor.name) {
                return Err(SchemaError::DuplicateType(descriptor.name));
            }
            Self::check_fields(&descriptor)?;
            order.push(descriptor.name.clone());
            types.insert(descriptor.name.clone(), descriptor);
        }

        let registry = Self { types, order };
        registry.check_references()?;
        Ok(registry)
    }

    fn check_fields(descriptor: &TypeDescriptor) -> SchemaResult<()> {
        for (i, field) in descriptor.fields.iter().enumerate() {
            if descriptor.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    type_name: descriptor.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !field.binding.applies_to(descriptor.kind) {
                return Err(SchemaError::BindingMismatch {
                    type_name: descriptor.name.clone(),
                    field: field.name.clone(),
                    kind: descriptor.kind.label(),
                });
            }
            if field.field_type.is_object() && matches!(field.binding, FieldBinding::Scalar(_)) {
                return Err(SchemaError::ScalarBindingOnObject {
                    type_name: descriptor.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn check_references(&self) -> SchemaResult<()> {
        for descriptor in self.order.iter().filter_map(|name| self.types.get(name)) {
            for field in &descriptor.fields {
                if let Some(target) = field.field_type.object_name() {
                    if !self.types.contains_key(target) {
                        return Err(SchemaError::UnknownTypeReference {
                            type_name: descriptor.name.clone(),
                            field: field.name.clone(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Look up a type by name.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Type names in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Render the registered types as GraphQL SDL.
    pub fn sdl(&self) -> String {
        let mut out = String::new();
        for descriptor in self.order.iter().filter_map(|name| self.types.get(name)) {
            if !out.is_empty() {
                out.push('\n');
            }
            if let Some(description) = &descriptor.description {
                out.push_str(&format!("\"\"\"{}\"\"\"\n", description));
            }
            out.push_str(&format!("type {} {{\n", descriptor.name));
            for field in &descriptor.fields {
                if let Some(description) = &field.description {
                    out.push_str(&format!("  \"\"\"{}\"\"\"\n", description));
                }
                out.push_str(&format!(
                    "  {}: {}\n",
                    field.name,
                    field.field_type.render()
                ));
            }
            out.push_str("}\n");
        }
        out
    }
}

/// The library catalog's type registry: Book and Author, with the mutual
/// references declared by name.
pub fn library_registry() -> SchemaResult<TypeRegistry> {
    let book = TypeDescriptor::new(
        "Book",
        "This represents a book written by an author",
        EntityKind::Book,
    )
    .with_field(FieldDescriptor::scalar(
        "id",
        FieldType::NonNull(Box::new(FieldType::Int)),
        ScalarField::Id,
    ))
    .with_field(FieldDescriptor::scalar(
        "name",
        FieldType::NonNull(Box::new(FieldType::String)),
        ScalarField::Name,
    ))
    .with_field(FieldDescriptor::scalar(
        "authorId",
        FieldType::NonNull(Box::new(FieldType::Int)),
        ScalarField::AuthorId,
    ))
    .with_field(FieldDescriptor::relation(
        "author",
        FieldType::Named("Author".to_string()),
        FieldBinding::BookAuthor,
    ));

    let author = TypeDescriptor::new(
        "Author",
        "This represents an author of a book",
        EntityKind::Author,
    )
    .with_field(FieldDescriptor::scalar(
        "id",
        FieldType::NonNull(Box::new(FieldType::Int)),
        ScalarField::Id,
    ))
    .with_field(FieldDescriptor::scalar(
        "name",
        FieldType::NonNull(Box::new(FieldType::String)),
        ScalarField::Name,
    ))
    .with_field(FieldDescriptor::relation(
        "books",
        FieldType::List(Box::new(FieldType::Named("Book".to_string()))),
        FieldBinding::AuthorBooks,
    ));

    TypeRegistry::build(vec![book, author])
}
