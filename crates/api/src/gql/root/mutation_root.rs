use async_graphql::MergedObject;

use crate::gql::domains::customers::CustomerMutation;
use crate::gql::domains::orders::OrderMutation;
use crate::gql::domains::products::ProductMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CustomerMutation, OrderMutation, ProductMutation);
