use async_graphql::{Context, Object, Result};

use crate::gql::error::ResultExt;
use crate::gql::types::Product;
use crate::state::AppState;

use super::service;
use super::types::CreateProductPayload;

#[derive(Default)]
pub struct ProductQuery;

#[Object]
impl ProductQuery {
    async fn all_products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_products().await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

#[derive(Default)]
pub struct ProductMutation;

#[Object]
impl ProductMutation {
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        price: f64,
        stock: Option<i32>,
    ) -> Result<CreateProductPayload> {
        let state = ctx.data::<AppState>()?;

        let data = service::validate_product(&name, price, stock).gql()?;
        let row = service::create_product(state.store.as_ref(), data)
            .await
            .gql()?;

        tracing::info!(product_id = %row.id, price = %row.price, "Product created");

        Ok(CreateProductPayload {
            product: row.into(),
        })
    }
}
