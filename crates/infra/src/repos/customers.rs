use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::CustomerRow;

#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    data: CreateCustomer,
) -> SqlxResult<CustomerRow> {
    sqlx::query_as::<_, CustomerRow>(
        r#"
        INSERT INTO customers (name, email, phone)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, phone, created_at
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<CustomerRow>> {
    sqlx::query_as::<_, CustomerRow>(
        r#"
        SELECT id, name, email, phone, created_at
        FROM customers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn email_exists<'e>(executor: impl PgExecutor<'e>, email: &str) -> SqlxResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM customers WHERE email = $1)")
        .bind(email)
        .fetch_one(executor)
        .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[Uuid],
) -> SqlxResult<Vec<CustomerRow>> {
    sqlx::query_as::<_, CustomerRow>(
        r#"
        SELECT id, name, email, phone, created_at
        FROM customers
        WHERE id = ANY($1::uuid[])
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<CustomerRow>> {
    sqlx::query_as::<_, CustomerRow>(
        r#"
        SELECT id, name, email, phone, created_at
        FROM customers
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}
