//! Query executor for shelfql
//!
//! Executes one parsed operation against the store, producing a JSON tree
//! mirroring the selection shape.
//!
//! Execution flow (strict order per request):
//! 1. Bind every root selection through the dispatch table, coercing
//!    arguments into typed calls, and validate every selection tree
//!    against the type registry
//! 2. Execute the bound calls in selection order
//! 3. Recursively resolve selected fields, consulting the store only
//!    for relation fields that were selected
//! 4. Not-found single-entity lookups resolve to explicit null

use serde_json::{json, Map, Value};

use crate::query::{Operation, OperationKind, Selection};
use crate::schema::{FieldBinding, ScalarField, TypeRegistry};
use crate::store::{Author, Book, Record};

use super::errors::{ExecutorError, ExecutorResult};
use super::root::{RootCall, RootOperation, RootRegistry};

/// Read side of the record store.
pub trait RecordReader {
    /// The book with this id, if any
    fn book_by_id(&self, id: i32) -> Option<Book>;

    /// The author with this id, if any
    fn author_by_id(&self, id: i32) -> Option<Author>;

    /// All books in insertion order
    fn books(&self) -> Vec<Book>;

    /// All authors in insertion order
    fn authors(&self) -> Vec<Author>;

    /// Books whose `authorId` matches, in insertion order
    fn books_by_author(&self, author_id: i32) -> Vec<Book>;
}

/// Write side of the record store.
pub trait RecordWriter {
    /// Append a book, assigning the next sequential id
    fn insert_book(&self, name: String, author_id: i32) -> Book;

    /// Append an author, assigning the next sequential id
    fn insert_author(&self, name: String) -> Author;
}

/// A root selection with its call bound, ready to execute.
enum BoundRoot<'a> {
    /// `__typename` on the root type
    Typename(&'a Selection),
    Call {
        selection: &'a Selection,
        operation: RootOperation,
        call: RootCall,
    },
}

/// Executes parsed operations against a store and type registry.
///
/// Holds no state across requests; same operation + same data = same
/// result.
pub struct QueryExecutor<'a, S> {
    store: &'a S,
    types: &'a TypeRegistry,
    roots: &'a RootRegistry,
}

impl<'a, S: RecordReader + RecordWriter> QueryExecutor<'a, S> {
    /// Creates a new executor over the given store and registries.
    pub fn new(store: &'a S, types: &'a TypeRegistry, roots: &'a RootRegistry) -> Self {
        Self {
            store,
            types,
            roots,
        }
    }

    /// Execute one operation, returning the response data tree.
    pub fn execute(
        &self,
        operation: &Operation,
        variables: &Map<String, Value>,
    ) -> ExecutorResult<Value> {
        let root_type = match operation.kind {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
        };

        // Phase 1: bind and validate everything before executing anything,
        // so argument, dispatch, and selection-shape errors cannot leave a
        // mutation half-applied.
        check_duplicate_keys(root_type, &operation.selections)?;
        let mut bound = Vec::with_capacity(operation.selections.len());
        for selection in &operation.selections {
            if selection.name == "__typename" {
                check_typename(root_type, selection)?;
                bound.push(BoundRoot::Typename(selection));
                continue;
            }
            let root = self
                .roots
                .lookup(operation.kind, &selection.name)
                .ok_or_else(|| ExecutorError::unknown_field(root_type, &selection.name))?;
            let call = root.bind(selection, variables)?;
            self.validate_root_selection(root_type, root, selection)?;
            bound.push(BoundRoot::Call {
                selection,
                operation: root,
                call,
            });
        }

        // Phase 2: execute in selection order.
        let mut data = Map::new();
        for entry in bound {
            match entry {
                BoundRoot::Typename(selection) => {
                    data.insert(selection.output_key().to_string(), json!(root_type));
                }
                BoundRoot::Call {
                    selection,
                    operation,
                    call,
                } => {
                    let value = self.execute_root(selection, operation, call)?;
                    data.insert(selection.output_key().to_string(), value);
                }
            }
        }
        Ok(Value::Object(data))
    }

    /// Validate a root selection's result tree before any call executes.
    fn validate_root_selection(
        &self,
        root_type: &str,
        operation: RootOperation,
        selection: &Selection,
    ) -> ExecutorResult<()> {
        // Every root field yields an object type; a sub-selection is
        // required even when the result turns out to be null or empty.
        if selection.selection_set.is_empty() {
            return Err(ExecutorError::InvalidSelection {
                parent: root_type.to_string(),
                field: selection.name.clone(),
                reason: "requires a sub-selection",
            });
        }
        self.validate_selections(operation.result_type(), &selection.selection_set)
    }

    /// Walk one selection tree against the type registry: field existence,
    /// scalar-vs-object shape, no arguments on nested fields, unique output
    /// keys per level.
    fn validate_selections(
        &self,
        type_name: &str,
        selections: &[Selection],
    ) -> ExecutorResult<()> {
        let descriptor = self
            .types
            .get(type_name)
            .ok_or_else(|| ExecutorError::UnknownType(type_name.to_string()))?;

        check_duplicate_keys(type_name, selections)?;
        for selection in selections {
            if selection.name == "__typename" {
                check_typename(type_name, selection)?;
                continue;
            }
            let field = descriptor
                .field(&selection.name)
                .ok_or_else(|| ExecutorError::unknown_field(type_name, &selection.name))?;
            if let Some((argument, _)) = selection.arguments.first() {
                return Err(ExecutorError::bad_argument(
                    &selection.name,
                    argument,
                    "is not accepted here",
                ));
            }
            match field.field_type.object_name() {
                Some(nested) => {
                    if selection.selection_set.is_empty() {
                        return Err(ExecutorError::InvalidSelection {
                            parent: type_name.to_string(),
                            field: selection.name.clone(),
                            reason: "requires a sub-selection",
                        });
                    }
                    self.validate_selections(nested, &selection.selection_set)?;
                }
                None => {
                    if !selection.selection_set.is_empty() {
                        return Err(ExecutorError::InvalidSelection {
                            parent: type_name.to_string(),
                            field: selection.name.clone(),
                            reason: "cannot have a sub-selection",
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn execute_root(
        &self,
        selection: &Selection,
        operation: RootOperation,
        call: RootCall,
    ) -> ExecutorResult<Value> {
        let result_type = operation.result_type();
        match call {
            RootCall::Book { id } => {
                self.resolve_optional(result_type, id.and_then(|id| self.store.book_by_id(id)), selection)
            }
            RootCall::Books => self.resolve_list(result_type, self.store.books(), selection),
            RootCall::Author { id } => self.resolve_optional(
                result_type,
                id.and_then(|id| self.store.author_by_id(id)),
                selection,
            ),
            RootCall::Authors => self.resolve_list(result_type, self.store.authors(), selection),
            RootCall::AddBook { name, author_id } => {
                let book = self.store.insert_book(name, author_id);
                self.resolve_record(result_type, &Record::Book(book), &selection.selection_set)
            }
            RootCall::AddAuthor { name } => {
                let author = self.store.insert_author(name);
                self.resolve_record(result_type, &Record::Author(author), &selection.selection_set)
            }
        }
    }

    fn resolve_optional<R: Into<Record>>(
        &self,
        type_name: &str,
        record: Option<R>,
        selection: &Selection,
    ) -> ExecutorResult<Value> {
        match record {
            Some(record) => {
                self.resolve_record(type_name, &record.into(), &selection.selection_set)
            }
            None => Ok(Value::Null),
        }
    }

    fn resolve_list<R: Into<Record>>(
        &self,
        type_name: &str,
        records: Vec<R>,
        selection: &Selection,
    ) -> ExecutorResult<Value> {
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            out.push(self.resolve_record(type_name, &record.into(), &selection.selection_set)?);
        }
        Ok(Value::Array(out))
    }

    /// Resolve the selected fields of one record.
    ///
    /// The selection tree was already validated in the bind phase; this
    /// only computes. Relation bindings hit the store, scalar bindings
    /// copy off the record.
    fn resolve_record(
        &self,
        type_name: &str,
        record: &Record,
        selections: &[Selection],
    ) -> ExecutorResult<Value> {
        let descriptor = self
            .types
            .get(type_name)
            .ok_or_else(|| ExecutorError::UnknownType(type_name.to_string()))?;

        let mut out = Map::new();
        for selection in selections {
            if selection.name == "__typename" {
                check_typename(type_name, selection)?;
                out.insert(selection.output_key().to_string(), json!(descriptor.name));
                continue;
            }

            let field = descriptor
                .field(&selection.name)
                .ok_or_else(|| ExecutorError::unknown_field(type_name, &selection.name))?;

            let value = match field.binding {
                FieldBinding::Scalar(scalar) => {
                    resolve_scalar(type_name, &selection.name, scalar, record)?
                }
                FieldBinding::BookAuthor => {
                    let nested = self.nested_type(type_name, field)?;
                    let Record::Book(book) = record else {
                        return Err(ExecutorError::ResolverMismatch {
                            parent: type_name.to_string(),
                            field: selection.name.clone(),
                        });
                    };
                    match self.store.author_by_id(book.author_id) {
                        Some(author) => self.resolve_record(
                            nested,
                            &Record::Author(author),
                            &selection.selection_set,
                        )?,
                        None => Value::Null,
                    }
                }
                FieldBinding::AuthorBooks => {
                    let nested = self.nested_type(type_name, field)?;
                    let Record::Author(author) = record else {
                        return Err(ExecutorError::ResolverMismatch {
                            parent: type_name.to_string(),
                            field: selection.name.clone(),
                        });
                    };
                    let books = self.store.books_by_author(author.id);
                    let mut values = Vec::with_capacity(books.len());
                    for book in books {
                        values.push(self.resolve_record(
                            nested,
                            &Record::Book(book),
                            &selection.selection_set,
                        )?);
                    }
                    Value::Array(values)
                }
            };
            out.insert(selection.output_key().to_string(), value);
        }
        Ok(Value::Object(out))
    }

    fn nested_type<'f>(
        &self,
        parent: &str,
        field: &'f crate::schema::FieldDescriptor,
    ) -> ExecutorResult<&'f str> {
        field
            .field_type
            .object_name()
            .ok_or_else(|| ExecutorError::InvalidSelection {
                parent: parent.to_string(),
                field: field.name.clone(),
                reason: "cannot have a sub-selection",
            })
    }

}

/// Reject two selections writing the same output key at one level.
/// Aliases keep repeated fields legal; an unaliased repeat is not merged.
fn check_duplicate_keys(parent: &str, selections: &[Selection]) -> ExecutorResult<()> {
    for (index, selection) in selections.iter().enumerate() {
        let key = selection.output_key();
        if selections[..index].iter().any(|s| s.output_key() == key) {
            return Err(ExecutorError::DuplicateKey {
                parent: parent.to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

fn check_typename(parent: &str, selection: &Selection) -> ExecutorResult<()> {
    if !selection.selection_set.is_empty() {
        return Err(ExecutorError::InvalidSelection {
            parent: parent.to_string(),
            field: "__typename".to_string(),
            reason: "cannot have a sub-selection",
        });
    }
    if let Some((argument, _)) = selection.arguments.first() {
        return Err(ExecutorError::bad_argument(
            "__typename",
            argument,
            "is not accepted here",
        ));
    }
    Ok(())
}

fn resolve_scalar(
    parent: &str,
    field: &str,
    scalar: ScalarField,
    record: &Record,
) -> ExecutorResult<Value> {
    match (scalar, record) {
        (ScalarField::Id, record) => Ok(json!(record.id())),
        (ScalarField::Name, record) => Ok(json!(record.name())),
        (ScalarField::AuthorId, Record::Book(book)) => Ok(json!(book.author_id)),
        (ScalarField::AuthorId, Record::Author(_)) => Err(ExecutorError::ResolverMismatch {
            parent: parent.to_string(),
            field: field.to_string(),
        }),
    }
}
