//! Root operation dispatch
//!
//! Root field names map through a registry (validated at registration
//! time) to tagged `RootOperation` variants. Binding a selection coerces
//! its arguments into a typed `RootCall` before anything executes, so an
//! argument error can never leave a mutation half-applied.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::query::{ArgumentValue, OperationKind, Selection};
use crate::schema::{SchemaError, SchemaResult};

use super::errors::{ExecutorError, ExecutorResult};

/// The six root operations of the library schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootOperation {
    /// `book(id: Int): Book`
    Book,
    /// `books: [Book]`
    Books,
    /// `author(id: Int): Author`
    Author,
    /// `authors: [Author]`
    Authors,
    /// `addBook(name: String!, authorId: Int!): Book`
    AddBook,
    /// `addAuthor(name: String!): Author`
    AddAuthor,
}

impl RootOperation {
    /// Whether this operation mutates the store.
    pub fn is_mutation(&self) -> bool {
        matches!(self, RootOperation::AddBook | RootOperation::AddAuthor)
    }

    /// Name of the object type the operation yields.
    pub fn result_type(&self) -> &'static str {
        match self {
            RootOperation::Book | RootOperation::Books | RootOperation::AddBook => "Book",
            RootOperation::Author | RootOperation::Authors | RootOperation::AddAuthor => "Author",
        }
    }

    /// SDL argument signature.
    fn signature(&self) -> &'static str {
        match self {
            RootOperation::Book | RootOperation::Author => "(id: Int)",
            RootOperation::Books | RootOperation::Authors => "",
            RootOperation::AddBook => "(name: String!, authorId: Int!)",
            RootOperation::AddAuthor => "(name: String!)",
        }
    }

    /// SDL result type rendering.
    fn result_render(&self) -> &'static str {
        match self {
            RootOperation::Book | RootOperation::AddBook => "Book",
            RootOperation::Books => "[Book]",
            RootOperation::Author | RootOperation::AddAuthor => "Author",
            RootOperation::Authors => "[Author]",
        }
    }

    /// Coerce a selection's arguments into a typed call.
    pub fn bind(
        &self,
        selection: &Selection,
        variables: &Map<String, Value>,
    ) -> ExecutorResult<RootCall> {
        let args = Arguments::new(selection, variables);
        let call = match self {
            RootOperation::Book => {
                let id = args.optional_int("id")?;
                args.finish(&["id"])?;
                RootCall::Book { id }
            }
            RootOperation::Books => {
                args.finish(&[])?;
                RootCall::Books
            }
            RootOperation::Author => {
                let id = args.optional_int("id")?;
                args.finish(&["id"])?;
                RootCall::Author { id }
            }
            RootOperation::Authors => {
                args.finish(&[])?;
                RootCall::Authors
            }
            RootOperation::AddBook => {
                let name = args.required_string("name")?;
                let author_id = args.required_int("authorId")?;
                args.finish(&["name", "authorId"])?;
                RootCall::AddBook { name, author_id }
            }
            RootOperation::AddAuthor => {
                let name = args.required_string("name")?;
                args.finish(&["name"])?;
                RootCall::AddAuthor { name }
            }
        };
        Ok(call)
    }
}

/// A root operation with its arguments fully coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootCall {
    Book { id: Option<i32> },
    Books,
    Author { id: Option<i32> },
    Authors,
    AddBook { name: String, author_id: i32 },
    AddAuthor { name: String },
}

/// Argument coercion over one selection.
struct Arguments<'a> {
    selection: &'a Selection,
    variables: &'a Map<String, Value>,
}

impl<'a> Arguments<'a> {
    fn new(selection: &'a Selection, variables: &'a Map<String, Value>) -> Self {
        Self {
            selection,
            variables,
        }
    }

    /// Resolve `$variable` references; literals pass through.
    fn resolve(&self, name: &str, value: &ArgumentValue) -> ExecutorResult<ArgumentValue> {
        match value {
            ArgumentValue::Variable(var) => {
                let json = self.variables.get(var).ok_or_else(|| {
                    ExecutorError::bad_argument(
                        &self.selection.name,
                        name,
                        format!("variable `${}` is not defined", var),
                    )
                })?;
                match json {
                    Value::Null => Ok(ArgumentValue::Null),
                    Value::Bool(b) => Ok(ArgumentValue::Boolean(*b)),
                    Value::Number(n) => n.as_i64().map(ArgumentValue::Int).ok_or_else(|| {
                        ExecutorError::bad_argument(
                            &self.selection.name,
                            name,
                            format!("variable `${}` is not an integer", var),
                        )
                    }),
                    Value::String(s) => Ok(ArgumentValue::String(s.clone())),
                    Value::Array(_) | Value::Object(_) => Err(ExecutorError::bad_argument(
                        &self.selection.name,
                        name,
                        format!("variable `${}` has an unsupported value", var),
                    )),
                }
            }
            other => Ok(other.clone()),
        }
    }

    fn optional_int(&self, name: &str) -> ExecutorResult<Option<i32>> {
        let Some(value) = self.selection.argument(name) else {
            return Ok(None);
        };
        match self.resolve(name, value)? {
            ArgumentValue::Null => Ok(None),
            ArgumentValue::Int(i) => i32::try_from(i).map(Some).map_err(|_| {
                ExecutorError::bad_argument(&self.selection.name, name, "exceeds Int range")
            }),
            _ => Err(ExecutorError::bad_argument(
                &self.selection.name,
                name,
                "must be an Int",
            )),
        }
    }

    fn required_int(&self, name: &str) -> ExecutorResult<i32> {
        let value = self.selection.argument(name).ok_or_else(|| {
            ExecutorError::bad_argument(&self.selection.name, name, "is required")
        })?;
        match self.resolve(name, value)? {
            ArgumentValue::Int(i) => i32::try_from(i).map_err(|_| {
                ExecutorError::bad_argument(&self.selection.name, name, "exceeds Int range")
            }),
            ArgumentValue::Null => Err(ExecutorError::bad_argument(
                &self.selection.name,
                name,
                "must not be null",
            )),
            _ => Err(ExecutorError::bad_argument(
                &self.selection.name,
                name,
                "must be an Int",
            )),
        }
    }

    fn required_string(&self, name: &str) -> ExecutorResult<String> {
        let value = self.selection.argument(name).ok_or_else(|| {
            ExecutorError::bad_argument(&self.selection.name, name, "is required")
        })?;
        match self.resolve(name, value)? {
            ArgumentValue::String(s) => Ok(s),
            ArgumentValue::Null => Err(ExecutorError::bad_argument(
                &self.selection.name,
                name,
                "must not be null",
            )),
            _ => Err(ExecutorError::bad_argument(
                &self.selection.name,
                name,
                "must be a String",
            )),
        }
    }

    /// Reject arguments outside the accepted set.
    fn finish(&self, accepted: &[&str]) -> ExecutorResult<()> {
        for (name, _) in &self.selection.arguments {
            if !accepted.contains(&name.as_str()) {
                return Err(ExecutorError::bad_argument(
                    &self.selection.name,
                    name,
                    "is not accepted here",
                ));
            }
        }
        Ok(())
    }
}

/// One registered root field.
#[derive(Debug, Clone)]
pub struct RootField {
    pub name: String,
    pub description: String,
    pub operation: RootOperation,
}

/// Dispatch table mapping root field names to operations.
#[derive(Debug, Clone, Default)]
pub struct RootRegistry {
    queries: Vec<RootField>,
    mutations: Vec<RootField>,
    query_index: HashMap<String, RootOperation>,
    mutation_index: HashMap<String, RootOperation>,
}

impl RootRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a query root field.
    pub fn register_query(
        &mut self,
        name: &str,
        description: &str,
        operation: RootOperation,
    ) -> SchemaResult<()> {
        if operation.is_mutation() {
            return Err(SchemaError::RootKindMismatch(name.to_string()));
        }
        if self.query_index.contains_key(name) {
            return Err(SchemaError::DuplicateRootField(name.to_string()));
        }
        self.query_index.insert(name.to_string(), operation);
        self.queries.push(RootField {
            name: name.to_string(),
            description: description.to_string(),
            operation,
        });
        Ok(())
    }

    /// Register a mutation root field.
    pub fn register_mutation(
        &mut self,
        name: &str,
        description: &str,
        operation: RootOperation,
    ) -> SchemaResult<()> {
        if !operation.is_mutation() {
            return Err(SchemaError::RootKindMismatch(name.to_string()));
        }
        if self.mutation_index.contains_key(name) {
            return Err(SchemaError::DuplicateRootField(name.to_string()));
        }
        self.mutation_index.insert(name.to_string(), operation);
        self.mutations.push(RootField {
            name: name.to_string(),
            description: description.to_string(),
            operation,
        });
        Ok(())
    }

    /// Look up a root field under the given operation kind.
    pub fn lookup(&self, kind: OperationKind, name: &str) -> Option<RootOperation> {
        match kind {
            OperationKind::Query => self.query_index.get(name).copied(),
            OperationKind::Mutation => self.mutation_index.get(name).copied(),
        }
    }

    /// The library schema's root fields.
    pub fn library() -> SchemaResult<Self> {
        let mut registry = Self::new();
        registry.register_query("book", "A single book", RootOperation::Book)?;
        registry.register_query("books", "List of books", RootOperation::Books)?;
        registry.register_query("author", "A single author", RootOperation::Author)?;
        registry.register_query("authors", "List of authors", RootOperation::Authors)?;
        registry.register_mutation("addBook", "Add a new book", RootOperation::AddBook)?;
        registry.register_mutation("addAuthor", "Add a new author", RootOperation::AddAuthor)?;
        Ok(registry)
    }

    /// Render the Query and Mutation blocks as GraphQL SDL.
    pub fn sdl(&self) -> String {
        let mut out = String::new();
        render_root_block(&mut out, "Query", "Root query", &self.queries);
        if !self.mutations.is_empty() {
            out.push('\n');
            render_root_block(&mut out, "Mutation", "Root mutation", &self.mutations);
        }
        out
    }
}

fn render_root_block(out: &mut String, name: &str, description: &str, fields: &[RootField]) {
    out.push_str(&format!("\"\"\"{}\"\"\"\n", description));
    out.push_str(&format!("type {} {{\n", name));
    for field in fields {
        out.push_str(&format!("  \"\"\"{}\"\"\"\n", field.description));
        out.push_str(&format!(
            "  {}{}: {}\n",
            field.name,
            field.operation.signature(),
            field.operation.result_render()
        ));
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(name: &str, arguments: Vec<(&str, ArgumentValue)>) -> Selection {
        Selection {
            name: name.to_string(),
            alias: None,
            arguments: arguments
                .into_iter()
                .map(|(n, v)| (n.to_string(), v))
                .collect(),
            selection_set: Vec::new(),
        }
    }

    fn no_vars() -> Map<String, Value> {
        Map::new()
    }

    #[test]
    fn test_library_registry_dispatch() {
        let registry = RootRegistry::library().unwrap();
        assert_eq!(
            registry.lookup(OperationKind::Query, "books"),
            Some(RootOperation::Books)
        );
        assert_eq!(
            registry.lookup(OperationKind::Mutation, "addAuthor"),
            Some(RootOperation::AddAuthor)
        );
        // Kind partitions: mutations are invisible to queries and vice versa.
        assert_eq!(registry.lookup(OperationKind::Query, "addBook"), None);
        assert_eq!(registry.lookup(OperationKind::Mutation, "books"), None);
    }

    #[test]
    fn test_duplicate_root_field_rejected() {
        let mut registry = RootRegistry::new();
        registry
            .register_query("book", "A single book", RootOperation::Book)
            .unwrap();
        let err = registry
            .register_query("book", "again", RootOperation::Book)
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateRootField("book".to_string()));
    }

    #[test]
    fn test_kind_mismatch_rejected_at_registration() {
        let mut registry = RootRegistry::new();
        let err = registry
            .register_query("addBook", "Add a new book", RootOperation::AddBook)
            .unwrap_err();
        assert_eq!(err, SchemaError::RootKindMismatch("addBook".to_string()));
    }

    #[test]
    fn test_bind_optional_id() {
        let sel = selection("book", vec![("id", ArgumentValue::Int(1))]);
        let call = RootOperation::Book.bind(&sel, &no_vars()).unwrap();
        assert_eq!(call, RootCall::Book { id: Some(1) });

        let sel = selection("book", vec![]);
        let call = RootOperation::Book.bind(&sel, &no_vars()).unwrap();
        assert_eq!(call, RootCall::Book { id: None });
    }

    #[test]
    fn test_bind_rejects_mistyped_id() {
        let sel = selection(
            "book",
            vec![("id", ArgumentValue::String("one".to_string()))],
        );
        let err = RootOperation::Book.bind(&sel, &no_vars()).unwrap_err();
        assert_eq!(err.code(), "BAD_ARGUMENT");
    }

    #[test]
    fn test_bind_requires_mutation_arguments() {
        let sel = selection(
            "addBook",
            vec![("name", ArgumentValue::String("dune".to_string()))],
        );
        let err = RootOperation::AddBook.bind(&sel, &no_vars()).unwrap_err();
        assert_eq!(
            err,
            ExecutorError::bad_argument("addBook", "authorId", "is required")
        );
    }

    #[test]
    fn test_bind_rejects_unknown_argument() {
        let sel = selection("books", vec![("limit", ArgumentValue::Int(3))]);
        let err = RootOperation::Books.bind(&sel, &no_vars()).unwrap_err();
        assert_eq!(
            err,
            ExecutorError::bad_argument("books", "limit", "is not accepted here")
        );
    }

    #[test]
    fn test_bind_resolves_variables() {
        let mut variables = Map::new();
        variables.insert("name".to_string(), Value::String("Dune".to_string()));
        variables.insert("authorId".to_string(), Value::from(2));
        let sel = selection(
            "addBook",
            vec![
                ("name", ArgumentValue::Variable("name".to_string())),
                ("authorId", ArgumentValue::Variable("authorId".to_string())),
            ],
        );
        let call = RootOperation::AddBook.bind(&sel, &variables).unwrap();
        assert_eq!(
            call,
            RootCall::AddBook {
                name: "Dune".to_string(),
                author_id: 2
            }
        );
    }

    #[test]
    fn test_bind_rejects_undefined_variable() {
        let sel = selection(
            "addAuthor",
            vec![("name", ArgumentValue::Variable("name".to_string()))],
        );
        let err = RootOperation::AddAuthor.bind(&sel, &no_vars()).unwrap_err();
        assert!(err.to_string().contains("$name"));
    }

    #[test]
    fn test_bind_rejects_int_overflow() {
        let sel = selection("author", vec![("id", ArgumentValue::Int(i64::MAX))]);
        let err = RootOperation::Author.bind(&sel, &no_vars()).unwrap_err();
        assert!(err.to_string().contains("Int range"));
    }

    #[test]
    fn test_sdl_lists_all_roots() {
        let registry = RootRegistry::library().unwrap();
        let sdl = registry.sdl();
        assert!(sdl.contains("\"\"\"Root query\"\"\""));
        assert!(sdl.contains("  book(id: Int): Book"));
        assert!(sdl.contains("  addBook(name: String!, authorId: Int!): Book"));
        assert!(sdl.contains("type Mutation {"));
    }
}
