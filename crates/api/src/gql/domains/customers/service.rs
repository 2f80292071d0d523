use serde::Deserialize;
use serde_json::Value;

use infra::models::CustomerRow;
use infra::repos::CreateCustomer;
use infra::store::CUSTOMER_EMAIL_CONSTRAINT;
use infra::CrmStore;

use crate::gql::error::CrmError;

pub const CUSTOMER_CREATED: &str = "Customer created successfully";

const MAX_NAME_LEN: usize = 255;
const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 20;

/// Shape a bulk payload must have once decoded.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub customers: Vec<CustomerRow>,
    pub errors: Vec<String>,
}

/// Trim and check the customer fields, returning the data to persist.
pub fn validate_customer(
    name: &str,
    email: &str,
    phone: Option<&str>,
) -> Result<CreateCustomer, CrmError> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.map(str::trim).filter(|p| !p.is_empty());

    if name.is_empty() {
        return Err(CrmError::invalid_input("Name is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CrmError::invalid_input(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if !is_plausible_email(email) {
        return Err(CrmError::invalid_input("Enter a valid email address"));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(CrmError::invalid_input(format!(
            "Email must be at most {MAX_EMAIL_LEN} characters"
        )));
    }
    if phone.is_some_and(|p| p.chars().count() > MAX_PHONE_LEN) {
        return Err(CrmError::invalid_input(format!(
            "Phone must be at most {MAX_PHONE_LEN} characters"
        )));
    }

    Ok(CreateCustomer {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
    })
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

pub async fn create_customer(
    store: &dyn CrmStore,
    data: CreateCustomer,
) -> Result<CustomerRow, CrmError> {
    if store.customer_email_exists(&data.email).await? {
        return Err(CrmError::DuplicateEmail);
    }

    match store.create_customer(data).await {
        Ok(row) => Ok(row),
        // Lost a race with a concurrent insert of the same email
        Err(e) if e.is_unique_violation_on(CUSTOMER_EMAIL_CONSTRAINT) => {
            Err(CrmError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

/// Create each payload independently; a failing item never stops the rest.
pub async fn create_customers_bulk(store: &dyn CrmStore, items: Vec<Option<Value>>) -> BulkOutcome {
    let mut outcome = BulkOutcome::default();

    for item in items {
        let item = decode_item(item);
        let result = match parse_payload(&item) {
            Ok(data) => create_customer(store, data).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(row) => outcome.customers.push(row),
            Err(e) => outcome.errors.push(format!("{}: {}", item_label(&item), e)),
        }
    }

    tracing::info!(
        created = outcome.customers.len(),
        failed = outcome.errors.len(),
        "Bulk customer creation finished"
    );
    outcome
}

/// Items may arrive as JSON objects or as strings holding a JSON document.
fn decode_item(item: Option<Value>) -> Value {
    match item {
        Some(Value::String(raw)) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
        Some(value) => value,
        None => Value::Null,
    }
}

pub fn parse_payload(item: &Value) -> Result<CreateCustomer, CrmError> {
    if !item.is_object() {
        return Err(CrmError::invalid_input("Expected a JSON object"));
    }

    let payload: CustomerPayload = serde_json::from_value(item.clone())
        .map_err(|e| CrmError::invalid_input(format!("Malformed customer payload: {e}")))?;

    validate_customer(&payload.name, &payload.email, payload.phone.as_deref())
}

/// Label used in bulk error messages: the email, else the name, else empty.
pub fn item_label(item: &Value) -> String {
    label_field(item, "email")
        .or_else(|| label_field(item, "name"))
        .unwrap_or_default()
}

fn label_field(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
