use async_graphql::Object;

pub const GREETING: &str = "Hello, GraphQL!";

#[derive(Default)]
pub struct SystemQuery;

#[Object]
impl SystemQuery {
    /// Static greeting, handy as a smoke test.
    async fn hello(&self) -> &'static str {
        GREETING
    }
}
