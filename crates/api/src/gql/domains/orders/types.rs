use async_graphql::SimpleObject;

use crate::gql::types::Order;

#[derive(SimpleObject)]
pub struct CreateOrderPayload {
    pub order: Order,
}
