//! GraphiQL explorer page
//!
//! Served on GET /graphql to browsers when the config enables it,
//! mirroring express-graphql's `graphiql: true` behavior. The page loads
//! GraphiQL from a CDN and points its fetcher at the same endpoint.

/// Static explorer page.
pub const GRAPHIQL_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>GraphiQL</title>
    <style>
      body { margin: 0; }
      #graphiql { height: 100vh; }
    </style>
    <link rel="stylesheet" href="https://unpkg.com/graphiql@3/graphiql.min.css" />
  </head>
  <body>
    <div id="graphiql">Loading…</div>
    <script crossorigin src="https://unpkg.com/react@18/umd/react.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.production.min.js"></script>
    <script crossorigin src="https://unpkg.com/graphiql@3/graphiql.min.js"></script>
    <script>
      const root = ReactDOM.createRoot(document.getElementById('graphiql'));
      root.render(
        React.createElement(GraphiQL, {
          fetcher: GraphiQL.createFetcher({ url: '/graphql' }),
        })
      );
    </script>
  </body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_posts_back_to_graphql() {
        assert!(GRAPHIQL_PAGE.contains("url: '/graphql'"));
        assert!(GRAPHIQL_PAGE.starts_with("<!DOCTYPE html>"));
    }
}
