use rust_decimal::Decimal;
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::ProductRow;

#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateProduct,
) -> SqlxResult<ProductRow> {
    sqlx::query_as::<_, ProductRow>(
        r#"
        INSERT INTO products (name, price, stock)
        VALUES ($1, $2, $3)
        RETURNING id, name, price, stock, created_at
        "#,
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.stock)
    .fetch_one(executor)
    .await
}

/// Products whose id is in `ids`. Unknown ids are skipped, duplicates collapse.
pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<ProductRow>> {
    sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, price, stock, created_at
        FROM products
        WHERE id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<ProductRow>> {
    sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, price, stock, created_at
        FROM products
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}
