//! Domain errors surfaced to GraphQL clients.
//!
//! Each variant maps to a stable `extensions.code` so clients can branch on
//! the failure without parsing messages:
//!   - `DuplicateEmail`  → `DUPLICATE_EMAIL`
//!   - `InvalidInput`    → `INVALID_INPUT`
//!   - `InvalidCustomer` → `INVALID_CUSTOMER`
//!   - `NoValidProducts` → `NO_VALID_PRODUCTS`
//!   - `Storage`         → `INTERNAL` (detail is logged, never shown)

use async_graphql::ErrorExtensions;
use infra::StoreError;
use thiserror::Error;

pub const INVALID_PRICE_OR_STOCK: &str = "Invalid price or stock value";

#[derive(Debug, Error)]
pub enum CrmError {
    #[error("Email already exists.")]
    DuplicateEmail,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid customer ID")]
    InvalidCustomer,

    #[error("No valid products found.")]
    NoValidProducts,

    #[error("Internal database error")]
    Storage(#[source] StoreError),
}

impl CrmError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CrmError::InvalidInput(msg.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            CrmError::DuplicateEmail => "DUPLICATE_EMAIL",
            CrmError::InvalidInput(_) => "INVALID_INPUT",
            CrmError::InvalidCustomer => "INVALID_CUSTOMER",
            CrmError::NoValidProducts => "NO_VALID_PRODUCTS",
            CrmError::Storage(_) => "INTERNAL",
        }
    }
}

impl From<StoreError> for CrmError {
    fn from(e: StoreError) -> Self {
        // Log the real error server-side; clients get a generic message
        tracing::error!("Store error: {e:?}");
        CrmError::Storage(e)
    }
}

impl ErrorExtensions for CrmError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// Extension trait that turns a `Result<T, CrmError>` into an
/// `async_graphql::Result<T>` carrying the error code.
///
/// Usage: `service::create_product(store, input).gql()?`
pub trait ResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T> ResultExt<T> for Result<T, CrmError> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}
