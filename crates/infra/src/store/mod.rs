//! Persistence port for the CRM domain.
//!
//! Resolvers talk to a `dyn CrmStore` and never to sqlx directly, so the same
//! schema runs against Postgres in production and against [`MemoryStore`] in
//! tests or when no database is configured.

mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CustomerRow, OrderProductRow, OrderRow, ProductRow};
use crate::repos::{CreateCustomer, CreateOrder, CreateProduct};

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub const CUSTOMER_EMAIL_CONSTRAINT: &str = "customers_email_key";
pub const PRODUCT_PRICE_CONSTRAINT: &str = "products_price_positive";
pub const PRODUCT_STOCK_CONSTRAINT: &str = "products_stock_non_negative";
pub const ORDER_CUSTOMER_CONSTRAINT: &str = "orders_customer_id_fkey";
pub const ORDER_PRODUCT_CONSTRAINT: &str = "order_products_product_id_fkey";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    #[error("database error")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    pub fn is_unique_violation_on(&self, constraint: &str) -> bool {
        matches!(self, StoreError::UniqueViolation(c) if c == constraint)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return StoreError::UniqueViolation(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return StoreError::ForeignKeyViolation(constraint);
            }
            if db_err.is_check_violation() {
                return StoreError::CheckViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Create/find/filter/list operations for customers, products and orders.
#[async_trait]
pub trait CrmStore: Send + Sync {
    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;

    async fn create_customer(&self, data: CreateCustomer) -> StoreResult<CustomerRow>;

    async fn customer_email_exists(&self, email: &str) -> StoreResult<bool>;

    async fn get_customer(&self, id: Uuid) -> StoreResult<Option<CustomerRow>>;

    async fn list_customers_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<CustomerRow>>;

    async fn list_customers(&self) -> StoreResult<Vec<CustomerRow>>;

    async fn create_product(&self, data: CreateProduct) -> StoreResult<ProductRow>;

    /// Existing products among `ids`; unknown ids are dropped silently.
    async fn list_products_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<ProductRow>>;

    async fn list_products(&self) -> StoreResult<Vec<ProductRow>>;

    /// Persist the order row and its product associations as one unit.
    async fn create_order(&self, data: CreateOrder) -> StoreResult<OrderRow>;

    async fn list_orders(&self) -> StoreResult<Vec<OrderRow>>;

    async fn list_order_products(&self, order_ids: &[Uuid]) -> StoreResult<Vec<OrderProductRow>>;
}
