use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{OrderProductRow, OrderRow};

#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_id: Uuid,
    pub product_ids: Vec<Uuid>,
    pub total_amount: Decimal,
    /// `None` keeps the database default (`NOW()`).
    pub order_date: Option<DateTime<Utc>>,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    customer_id: Uuid,
    total_amount: Decimal,
    order_date: Option<DateTime<Utc>>,
) -> SqlxResult<OrderRow> {
    sqlx::query_as::<_, OrderRow>(
        r#"
        INSERT INTO orders (customer_id, total_amount, order_date)
        VALUES ($1, $2, COALESCE($3, NOW()))
        RETURNING id, customer_id, total_amount, order_date, created_at
        "#,
    )
    .bind(customer_id)
    .bind(total_amount)
    .bind(order_date)
    .fetch_one(executor)
    .await
}

pub async fn attach_products<'e>(
    executor: impl PgExecutor<'e>,
    order_id: Uuid,
    product_ids: &[Uuid],
) -> SqlxResult<u64> {
    let result = sqlx::query(
        r#"
        INSERT INTO order_products (order_id, product_id)
        SELECT $1::uuid, UNNEST($2::uuid[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(order_id)
    .bind(product_ids)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<OrderRow>> {
    sqlx::query_as::<_, OrderRow>(
        r#"
        SELECT id, customer_id, total_amount, order_date, created_at
        FROM orders
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_products_for_orders<'e>(
    executor: impl PgExecutor<'e>,
    order_ids: &[Uuid],
) -> SqlxResult<Vec<OrderProductRow>> {
    sqlx::query_as::<_, OrderProductRow>(
        r#"
        SELECT op.order_id, p.id, p.name, p.price, p.stock, p.created_at
        FROM order_products op
        JOIN products p ON p.id = op.product_id
        WHERE op.order_id = ANY($1::uuid[])
        ORDER BY p.created_at ASC, p.id ASC
        "#,
    )
    .bind(order_ids)
    .fetch_all(executor)
    .await
}
