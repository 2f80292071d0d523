use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{
    CrmStore, StoreError, StoreResult, CUSTOMER_EMAIL_CONSTRAINT, ORDER_CUSTOMER_CONSTRAINT,
    ORDER_PRODUCT_CONSTRAINT, PRODUCT_PRICE_CONSTRAINT, PRODUCT_STOCK_CONSTRAINT,
};
use crate::models::{CustomerRow, OrderProductRow, OrderRow, ProductRow};
use crate::repos::{CreateCustomer, CreateOrder, CreateProduct};

#[derive(Default)]
struct Tables {
    customers: Vec<CustomerRow>,
    products: Vec<ProductRow>,
    orders: Vec<OrderRow>,
    /// (order_id, product_id)
    order_products: Vec<(Uuid, Uuid)>,
}

/// In-process [`CrmStore`] that mirrors the Postgres constraints.
///
/// Rows are kept in insertion order, which is what the list operations return.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CrmStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_customer(&self, data: CreateCustomer) -> StoreResult<CustomerRow> {
        let mut tables = self.tables.write();

        if tables.customers.iter().any(|c| c.email == data.email) {
            return Err(StoreError::UniqueViolation(
                CUSTOMER_EMAIL_CONSTRAINT.to_string(),
            ));
        }

        let row = CustomerRow {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            created_at: Utc::now(),
        };
        tables.customers.push(row.clone());
        Ok(row)
    }

    async fn customer_email_exists(&self, email: &str) -> StoreResult<bool> {
        Ok(self.tables.read().customers.iter().any(|c| c.email == email))
    }

    async fn get_customer(&self, id: Uuid) -> StoreResult<Option<CustomerRow>> {
        Ok(self
            .tables
            .read()
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_customers_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<CustomerRow>> {
        let wanted: HashSet<&Uuid> = ids.iter().collect();
        Ok(self
            .tables
            .read()
            .customers
            .iter()
            .filter(|c| wanted.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn list_customers(&self) -> StoreResult<Vec<CustomerRow>> {
        Ok(self.tables.read().customers.clone())
    }

    async fn create_product(&self, data: CreateProduct) -> StoreResult<ProductRow> {
        if data.price <= Decimal::ZERO {
            return Err(StoreError::CheckViolation(
                PRODUCT_PRICE_CONSTRAINT.to_string(),
            ));
        }
        if data.stock < 0 {
            return Err(StoreError::CheckViolation(
                PRODUCT_STOCK_CONSTRAINT.to_string(),
            ));
        }

        let row = ProductRow {
            id: Uuid::new_v4(),
            name: data.name,
            price: data.price,
            stock: data.stock,
            created_at: Utc::now(),
        };
        self.tables.write().products.push(row.clone());
        Ok(row)
    }

    async fn list_products_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<ProductRow>> {
        let wanted: HashSet<&Uuid> = ids.iter().collect();
        Ok(self
            .tables
            .read()
            .products
            .iter()
            .filter(|p| wanted.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn list_products(&self) -> StoreResult<Vec<ProductRow>> {
        Ok(self.tables.read().products.clone())
    }

    async fn create_order(&self, data: CreateOrder) -> StoreResult<OrderRow> {
        let mut tables = self.tables.write();

        if !tables.customers.iter().any(|c| c.id == data.customer_id) {
            return Err(StoreError::ForeignKeyViolation(
                ORDER_CUSTOMER_CONSTRAINT.to_string(),
            ));
        }

        let mut product_ids: Vec<Uuid> = Vec::with_capacity(data.product_ids.len());
        for id in data.product_ids {
            if !tables.products.iter().any(|p| p.id == id) {
                return Err(StoreError::ForeignKeyViolation(
                    ORDER_PRODUCT_CONSTRAINT.to_string(),
                ));
            }
            if !product_ids.contains(&id) {
                product_ids.push(id);
            }
        }

        let now = Utc::now();
        let row = OrderRow {
            id: Uuid::new_v4(),
            customer_id: data.customer_id,
            total_amount: data.total_amount,
            order_date: data.order_date.unwrap_or(now),
            created_at: now,
        };
        tables.orders.push(row.clone());
        tables
            .order_products
            .extend(product_ids.into_iter().map(|pid| (row.id, pid)));

        Ok(row)
    }

    async fn list_orders(&self) -> StoreResult<Vec<OrderRow>> {
        Ok(self.tables.read().orders.clone())
    }

    async fn list_order_products(&self, order_ids: &[Uuid]) -> StoreResult<Vec<OrderProductRow>> {
        let wanted: HashSet<&Uuid> = order_ids.iter().collect();
        let tables = self.tables.read();

        Ok(tables
            .order_products
            .iter()
            .filter(|(order_id, _)| wanted.contains(order_id))
            .filter_map(|(order_id, product_id)| {
                tables
                    .products
                    .iter()
                    .find(|p| p.id == *product_id)
                    .map(|product| OrderProductRow {
                        order_id: *order_id,
                        product: product.clone(),
                    })
            })
            .collect())
    }
}
