use async_trait::async_trait;
use uuid::Uuid;

use super::{CrmStore, StoreResult};
use crate::db::Db;
use crate::models::{CustomerRow, OrderProductRow, OrderRow, ProductRow};
use crate::repos::{customers, orders, products, CreateCustomer, CreateOrder, CreateProduct};

/// [`CrmStore`] backed by the sqlx repositories.
#[derive(Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrmStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }

    async fn create_customer(&self, data: CreateCustomer) -> StoreResult<CustomerRow> {
        Ok(customers::create(&self.db, data).await?)
    }

    async fn customer_email_exists(&self, email: &str) -> StoreResult<bool> {
        Ok(customers::email_exists(&self.db, email).await?)
    }

    async fn get_customer(&self, id: Uuid) -> StoreResult<Option<CustomerRow>> {
        Ok(customers::get_by_id(&self.db, id).await?)
    }

    async fn list_customers_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<CustomerRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(customers::list_by_ids(&self.db, ids).await?)
    }

    async fn list_customers(&self) -> StoreResult<Vec<CustomerRow>> {
        Ok(customers::list(&self.db).await?)
    }

    async fn create_product(&self, data: CreateProduct) -> StoreResult<ProductRow> {
        Ok(products::create(&self.db, data).await?)
    }

    async fn list_products_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<ProductRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(products::list_by_ids(&self.db, ids).await?)
    }

    async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
        Ok(products::list(&self.db).await?)
    }

    async fn create_order(&self, data: CreateOrder) -> StoreResult<OrderRow> {
        let mut tx = self.db.begin().await?;

        let order =
            orders::create(&mut *tx, data.customer_id, data.total_amount, data.order_date).await?;
        let attached = orders::attach_products(&mut *tx, order.id, &data.product_ids).await?;

        tx.commit().await?;

        tracing::debug!(order_id = %order.id, attached, "Order persisted");
        Ok(order)
    }

    async fn list_orders(&self) -> StoreResult<Vec<OrderRow>> {
        Ok(orders::list(&self.db).await?)
    }

    async fn list_order_products(&self, order_ids: &[Uuid]) -> StoreResult<Vec<OrderProductRow>> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(orders::list_products_for_orders(&self.db, order_ids).await?)
    }
}
