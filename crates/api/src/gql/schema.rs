use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use super::loaders::{CustomerLoader, OrderProductsLoader};
use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type CrmSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> CrmSchema {
    let customer_loader = DataLoader::new(CustomerLoader::new(state.store.clone()), tokio::spawn);
    let order_products_loader =
        DataLoader::new(OrderProductsLoader::new(state.store.clone()), tokio::spawn);

    let introspection_enabled = state.config().gql_introspection;

    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state) // AppState is Clone; available in resolvers via ctx.data::<AppState>()
    .data(customer_loader)
    .data(order_products_loader)
    .limit_depth(15)
    .limit_complexity(200);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
