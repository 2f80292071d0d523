use async_graphql::{Context, Object, Result, ID};

use crate::gql::error::ResultExt;
use crate::gql::types::Order;
use crate::state::AppState;

use super::service::{self, CreateOrderParams};
use super::types::CreateOrderPayload;

#[derive(Default)]
pub struct OrderQuery;

#[Object]
impl OrderQuery {
    async fn all_orders(&self, ctx: &Context<'_>) -> Result<Vec<Order>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_orders().await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }
}

#[derive(Default)]
pub struct OrderMutation;

#[Object]
impl OrderMutation {
    /// Place an order for an existing customer. Product ids that match no
    /// product are ignored; at least one must match.
    async fn create_order(
        &self,
        ctx: &Context<'_>,
        customer_id: ID,
        product_ids: Vec<Option<ID>>,
        order_date: Option<String>,
    ) -> Result<CreateOrderPayload> {
        let state = ctx.data::<AppState>()?;

        let params = CreateOrderParams {
            customer_id,
            product_ids,
            order_date,
        };
        let (row, products) = service::create_order(state.store.as_ref(), params)
            .await
            .gql()?;

        tracing::info!(
            order_id = %row.id,
            customer_id = %row.customer_id,
            products = products.len(),
            total = %row.total_amount,
            "Order created"
        );

        Ok(CreateOrderPayload { order: row.into() })
    }
}
