use async_graphql::MergedObject;

use crate::gql::domains::customers::CustomerQuery;
use crate::gql::domains::orders::OrderQuery;
use crate::gql::domains::products::ProductQuery;
use crate::gql::domains::system::SystemQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(CustomerQuery, OrderQuery, ProductQuery, SystemQuery);
