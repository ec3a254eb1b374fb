//! Document parsing
//!
//! Thin adapter over the `graphql-parser` crate: its AST is converted into
//! the owned selection tree the executor walks. Fragments and
//! subscriptions are rejected here, before execution starts.

use graphql_parser::query as gql;

use super::ast::{ArgumentValue, Operation, OperationKind, ParsedDocument, Selection};
use super::errors::{QueryError, QueryResult};

/// Parse a request document into an executable form.
pub fn parse_document(text: &str) -> QueryResult<ParsedDocument> {
    let document =
        gql::parse_query::<String>(text).map_err(|e| QueryError::Syntax(e.to_string()))?;

    let mut operations = Vec::new();
    for definition in document.definitions {
        match definition {
            gql::Definition::Operation(op) => operations.push(convert_operation(op)?),
            gql::Definition::Fragment(_) => return Err(QueryError::FragmentsUnsupported),
        }
    }

    if operations.is_empty() {
        return Err(QueryError::NoOperations);
    }

    Ok(ParsedDocument { operations })
}

fn convert_operation(op: gql::OperationDefinition<String>) -> QueryResult<Operation> {
    match op {
        // Bare `{ ... }` shorthand is a query.
        gql::OperationDefinition::SelectionSet(set) => Ok(Operation {
            kind: OperationKind::Query,
            name: None,
            selections: convert_selection_set(set)?,
        }),
        gql::OperationDefinition::Query(query) => Ok(Operation {
            kind: OperationKind::Query,
            name: query.name,
            selections: convert_selection_set(query.selection_set)?,
        }),
        gql::OperationDefinition::Mutation(mutation) => Ok(Operation {
            kind: OperationKind::Mutation,
            name: mutation.name,
            selections: convert_selection_set(mutation.selection_set)?,
        }),
        gql::OperationDefinition::Subscription(_) => Err(QueryError::SubscriptionsUnsupported),
    }
}

fn convert_selection_set(set: gql::SelectionSet<String>) -> QueryResult<Vec<Selection>> {
    let mut selections = Vec::with_capacity(set.items.len());
    for item in set.items {
        match item {
            gql::Selection::Field(field) => selections.push(convert_field(field)?),
            gql::Selection::FragmentSpread(_) | gql::Selection::InlineFragment(_) => {
                return Err(QueryError::FragmentsUnsupported)
            }
        }
    }
    Ok(selections)
}

fn convert_field(field: gql::Field<String>) -> QueryResult<Selection> {
    let mut arguments = Vec::with_capacity(field.arguments.len());
    for (name, value) in field.arguments {
        let value = convert_value(&name, value)?;
        arguments.push((name, value));
    }

    Ok(Selection {
        name: field.name,
        alias: field.alias,
        arguments,
        selection_set: convert_selection_set(field.selection_set)?,
    })
}

fn convert_value(argument: &str, value: gql::Value<String>) -> QueryResult<ArgumentValue> {
    match value {
        gql::Value::Variable(name) => Ok(ArgumentValue::Variable(name)),
        gql::Value::Int(number) => number
            .as_i64()
            .map(ArgumentValue::Int)
            .ok_or_else(|| QueryError::UnsupportedArgumentValue(argument.to_string())),
        gql::Value::Float(f) => Ok(ArgumentValue::Float(f)),
        gql::Value::String(s) => Ok(ArgumentValue::String(s)),
        gql::Value::Boolean(b) => Ok(ArgumentValue::Boolean(b)),
        gql::Value::Null => Ok(ArgumentValue::Null),
        // No enum, list, or input-object arguments exist in this schema.
        gql::Value::Enum(_) | gql::Value::List(_) | gql::Value::Object(_) => {
            Err(QueryError::UnsupportedArgumentValue(argument.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_query() {
        let doc = parse_document("{ books { id name } }").unwrap();
        assert_eq!(doc.operations.len(), 1);
        let op = &doc.operations[0];
        assert_eq!(op.kind, OperationKind::Query);
        assert_eq!(op.selections[0].name, "books");
        assert_eq!(op.selections[0].selection_set.len(), 2);
    }

    #[test]
    fn test_parse_arguments_and_alias() {
        let doc = parse_document("query { rose: book(id: 1) { name } }").unwrap();
        let sel = &doc.operations[0].selections[0];
        assert_eq!(sel.name, "book");
        assert_eq!(sel.alias.as_deref(), Some("rose"));
        assert_eq!(sel.argument("id"), Some(&ArgumentValue::Int(1)));
    }

    #[test]
    fn test_parse_mutation_with_variables() {
        let doc = parse_document(
            "mutation AddBook($name: String!, $authorId: Int!) {\
               addBook(name: $name, authorId: $authorId) { id }\
             }",
        )
        .unwrap();
        let op = &doc.operations[0];
        assert_eq!(op.kind, OperationKind::Mutation);
        assert_eq!(op.name.as_deref(), Some("AddBook"));
        let sel = &op.selections[0];
        assert_eq!(
            sel.argument("name"),
            Some(&ArgumentValue::Variable("name".to_string()))
        );
    }

    #[test]
    fn test_syntax_error_reported() {
        let err = parse_document("{ books {").unwrap_err();
        assert_eq!(err.code(), "PARSE_FAILED");
    }

    #[test]
    fn test_fragments_rejected() {
        let err =
            parse_document("{ books { ...bookFields } } fragment bookFields on Book { id }")
                .unwrap_err();
        assert_eq!(err, QueryError::FragmentsUnsupported);
    }

    #[test]
    fn test_subscriptions_rejected() {
        let err = parse_document("subscription { books { id } }").unwrap_err();
        assert_eq!(err, QueryError::SubscriptionsUnsupported);
    }

    #[test]
    fn test_list_argument_rejected() {
        let err = parse_document("{ book(id: [1, 2]) { id } }").unwrap_err();
        assert_eq!(
            err,
            QueryError::UnsupportedArgumentValue("id".to_string())
        );
    }
}
