use async_graphql::SimpleObject;

use crate::gql::types::Product;

#[derive(SimpleObject)]
pub struct CreateProductPayload {
    pub product: Product,
}
