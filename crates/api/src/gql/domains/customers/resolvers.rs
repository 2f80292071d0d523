use async_graphql::{Context, Json, Object, Result};

use crate::gql::error::ResultExt;
use crate::gql::types::Customer;
use crate::state::AppState;

use super::service;
use super::types::{BulkCreateCustomersPayload, CreateCustomerPayload};

#[derive(Default)]
pub struct CustomerQuery;

#[Object]
impl CustomerQuery {
    /// Every customer, in creation order.
    async fn all_customers(&self, ctx: &Context<'_>) -> Result<Vec<Customer>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_customers().await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}

#[derive(Default)]
pub struct CustomerMutation;

#[Object]
impl CustomerMutation {
    async fn create_customer(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: Option<String>,
    ) -> Result<CreateCustomerPayload> {
        let state = ctx.data::<AppState>()?;

        let data = service::validate_customer(&name, &email, phone.as_deref()).gql()?;
        let row = service::create_customer(state.store.as_ref(), data)
            .await
            .gql()?;

        tracing::info!(customer_id = %row.id, "Customer created");

        Ok(CreateCustomerPayload {
            customer: row.into(),
            message: service::CUSTOMER_CREATED.to_string(),
        })
    }

    /// Create many customers at once. Failures are reported per item in
    /// `errors` and never abort the remaining payloads.
    async fn bulk_create_customers(
        &self,
        ctx: &Context<'_>,
        input: Option<Vec<Option<Json<serde_json::Value>>>>,
    ) -> Result<BulkCreateCustomersPayload> {
        let state = ctx.data::<AppState>()?;

        let items = input
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.map(|Json(value)| value))
            .collect();

        let outcome = service::create_customers_bulk(state.store.as_ref(), items).await;

        Ok(BulkCreateCustomersPayload {
            customers: outcome.customers.into_iter().map(Customer::from).collect(),
            errors: outcome.errors,
        })
    }
}
