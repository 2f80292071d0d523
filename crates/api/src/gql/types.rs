use async_graphql::dataloader::DataLoader;
use async_graphql::{ComplexObject, Context, Error, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::gql::loaders::{CustomerLoader, OrderProductsLoader};

#[derive(SimpleObject, Clone, Debug)]
pub struct Customer {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<infra::models::CustomerRow> for Customer {
    fn from(row: infra::models::CustomerRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Product {
    pub id: ID,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}

impl From<infra::models::ProductRow> for Product {
    fn from(row: infra::models::ProductRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            price: row.price,
            stock: row.stock,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Order {
    pub id: ID,
    #[graphql(skip)]
    pub order_id: Uuid,
    #[graphql(skip)]
    pub customer_id: Uuid,
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
}

impl From<infra::models::OrderRow> for Order {
    fn from(row: infra::models::OrderRow) -> Self {
        Self {
            id: row.id.into(),
            order_id: row.id,
            customer_id: row.customer_id,
            total_amount: row.total_amount,
            order_date: row.order_date,
        }
    }
}

#[ComplexObject]
impl Order {
    async fn customer(&self, ctx: &Context<'_>) -> Result<Customer> {
        let loader = ctx.data::<DataLoader<CustomerLoader>>()?;
        loader
            .load_one(self.customer_id)
            .await?
            .map(Customer::from)
            .ok_or_else(|| Error::new("Customer not found"))
    }

    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let loader = ctx.data::<DataLoader<OrderProductsLoader>>()?;
        let rows = loader.load_one(self.order_id).await?.unwrap_or_default();
        Ok(rows.into_iter().map(Product::from).collect())
    }
}
