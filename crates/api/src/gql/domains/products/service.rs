use rust_decimal::{Decimal, RoundingStrategy};

use infra::models::ProductRow;
use infra::repos::CreateProduct;
use infra::{CrmStore, StoreError};

use crate::gql::error::{CrmError, INVALID_PRICE_OR_STOCK};

const MAX_NAME_LEN: usize = 255;

/// Prices are stored as NUMERIC(10, 2).
const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound for a NUMERIC(10, 2) value.
pub(crate) fn max_amount() -> Decimal {
    Decimal::new(100_000_000, 0)
}

/// Convert a client-supplied float into a storage-scale price, rejecting
/// non-positive, non-finite, and out-of-range values.
pub fn normalize_price(price: f64) -> Result<Decimal, CrmError> {
    if !price.is_finite() {
        return Err(CrmError::invalid_input(INVALID_PRICE_OR_STOCK));
    }

    let mut price = Decimal::try_from(price)
        .map_err(|_| CrmError::invalid_input(INVALID_PRICE_OR_STOCK))?
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    price.rescale(PRICE_SCALE);

    if price <= Decimal::ZERO || price >= max_amount() {
        return Err(CrmError::invalid_input(INVALID_PRICE_OR_STOCK));
    }
    Ok(price)
}

pub fn validate_product(
    name: &str,
    price: f64,
    stock: Option<i32>,
) -> Result<CreateProduct, CrmError> {
    let price = normalize_price(price)?;
    let stock = stock.unwrap_or(0);
    if stock < 0 {
        return Err(CrmError::invalid_input(INVALID_PRICE_OR_STOCK));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(CrmError::invalid_input("Name is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CrmError::invalid_input(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }

    Ok(CreateProduct {
        name: name.to_string(),
        price,
        stock,
    })
}

pub async fn create_product(
    store: &dyn CrmStore,
    data: CreateProduct,
) -> Result<ProductRow, CrmError> {
    match store.create_product(data).await {
        Ok(row) => Ok(row),
        Err(StoreError::CheckViolation(_)) => Err(CrmError::invalid_input(INVALID_PRICE_OR_STOCK)),
        Err(e) => Err(e.into()),
    }
}
