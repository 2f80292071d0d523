use async_graphql::ID;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use infra::models::{OrderRow, ProductRow};
use infra::repos::CreateOrder;
use infra::store::ORDER_CUSTOMER_CONSTRAINT;
use infra::{CrmStore, StoreError};

use crate::gql::domains::products::service::max_amount;
use crate::gql::error::CrmError;

/// Naive layouts accepted for an order date override, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

pub struct CreateOrderParams {
    pub customer_id: ID,
    pub product_ids: Vec<Option<ID>>,
    pub order_date: Option<String>,
}

/// Parse the requested product ids, dropping nulls, malformed ids and repeats.
pub fn parse_product_ids(ids: &[Option<ID>]) -> Vec<Uuid> {
    let mut parsed: Vec<Uuid> = Vec::with_capacity(ids.len());
    for id in ids.iter().flatten() {
        if let Ok(uuid) = Uuid::parse_str(id.as_str()) {
            if !parsed.contains(&uuid) {
                parsed.push(uuid);
            }
        }
    }
    parsed
}

/// `None` or a blank string means "use the creation time".
pub fn parse_order_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, CrmError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Some(midnight.and_utc()));
    }

    Err(CrmError::invalid_input(format!("Invalid order date: {raw}")))
}

/// Sum of the product prices; must fit the NUMERIC(10, 2) total column.
pub fn total_amount(products: &[ProductRow]) -> Result<Decimal, CrmError> {
    let total: Decimal = products.iter().map(|p| p.price).sum();
    if total >= max_amount() {
        return Err(CrmError::invalid_input(format!(
            "Order total {total} exceeds the maximum of {}",
            max_amount() - Decimal::new(1, 2)
        )));
    }
    Ok(total)
}

/// Resolve the customer and products, price the order and persist it with
/// its product associations.
pub async fn create_order(
    store: &dyn CrmStore,
    params: CreateOrderParams,
) -> Result<(OrderRow, Vec<ProductRow>), CrmError> {
    let customer_id =
        Uuid::parse_str(params.customer_id.as_str()).map_err(|_| CrmError::InvalidCustomer)?;
    let customer = store
        .get_customer(customer_id)
        .await?
        .ok_or(CrmError::InvalidCustomer)?;

    // Unknown ids are dropped without being reported individually
    let requested = parse_product_ids(&params.product_ids);
    let products = store.list_products_by_ids(&requested).await?;
    if products.is_empty() {
        return Err(CrmError::NoValidProducts);
    }

    let order_date = parse_order_date(params.order_date.as_deref())?;
    let total = total_amount(&products)?;

    let data = CreateOrder {
        customer_id: customer.id,
        product_ids: products.iter().map(|p| p.id).collect(),
        total_amount: total,
        order_date,
    };

    match store.create_order(data).await {
        Ok(order) => Ok((order, products)),
        // Customer removed between lookup and insert
        Err(StoreError::ForeignKeyViolation(constraint))
            if constraint == ORDER_CUSTOMER_CONSTRAINT =>
        {
            Err(CrmError::InvalidCustomer)
        }
        Err(e) => Err(e.into()),
    }
}
