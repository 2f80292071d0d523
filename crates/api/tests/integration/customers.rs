use serde_json::json;

use crate::common::*;

const CREATE_CUSTOMER: &str = r#"
    mutation CreateCustomer($name: String!, $email: String!, $phone: String) {
        createCustomer(name: $name, email: $email, phone: $phone) {
            customer { id name email phone }
            message
        }
    }
"#;

const BULK_CREATE: &str = r#"
    mutation Bulk($input: [JSON]) {
        bulkCreateCustomers(input: $input) {
            customers { id name email phone }
            errors
        }
    }
"#;

#[tokio::test]
async fn test_create_customer() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_CUSTOMER,
        Some(json!({ "name": "Alice", "email": "alice@example.com", "phone": "+1234567890" })),
    )
    .await;

    assert!(
        response.errors.is_empty(),
        "createCustomer should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let payload = &data["createCustomer"];
    assert_eq!(payload["message"], "Customer created successfully");
    assert_eq!(payload["customer"]["name"], "Alice");
    assert_eq!(payload["customer"]["email"], "alice@example.com");
    assert_eq!(payload["customer"]["phone"], "+1234567890");
    assert!(!payload["customer"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_customer_without_phone() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_CUSTOMER,
        Some(json!({ "name": "Bob", "email": "bob@example.com" })),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert!(data["createCustomer"]["customer"]["phone"].is_null());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let schema = setup_test_schema();
    let first_id = create_test_customer(&schema, "Alice", "alice@example.com").await;

    let response = execute_graphql(
        &schema,
        CREATE_CUSTOMER,
        Some(json!({ "name": "Impostor", "email": "alice@example.com" })),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Email already exists.");
    assert_eq!(error_code(&response).as_deref(), Some("DUPLICATE_EMAIL"));

    // The original record is untouched
    let response = execute_graphql(&schema, "{ allCustomers { id name email } }", None).await;
    let data = response.data.into_json().unwrap();
    let customers = data["allCustomers"].as_array().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["id"], first_id);
    assert_eq!(customers[0]["name"], "Alice");
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_CUSTOMER,
        Some(json!({ "name": "Carol", "email": "not-an-email" })),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("INVALID_INPUT"));
}

#[tokio::test]
async fn test_overlong_email_is_rejected() {
    let schema = setup_test_schema();
    let email = format!("{}@example.com", "a".repeat(300));

    let response = execute_graphql(
        &schema,
        CREATE_CUSTOMER,
        Some(json!({ "name": "Carol", "email": email })),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("INVALID_INPUT"));

    let response = execute_graphql(&schema, "{ allCustomers { id } }", None).await;
    let data = response.data.into_json().unwrap();
    assert!(data["allCustomers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_bulk_create_reports_duplicate_and_keeps_going() {
    let schema = setup_test_schema();
    create_test_customer(&schema, "Existing", "dup@example.com").await;

    let input = json!([
        { "name": "First", "email": "first@example.com" },
        { "name": "Dup", "email": "dup@example.com" },
        { "name": "Third", "email": "third@example.com", "phone": "555" }
    ]);

    let response = execute_graphql(&schema, BULK_CREATE, Some(json!({ "input": input }))).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let payload = &data["bulkCreateCustomers"];

    let customers = payload["customers"].as_array().unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0]["email"], "first@example.com");
    assert_eq!(customers[1]["email"], "third@example.com");
    assert_eq!(customers[1]["phone"], "555");

    let errors = payload["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], "dup@example.com: Email already exists.");
}

#[tokio::test]
async fn test_bulk_create_labels_malformed_payloads() {
    let schema = setup_test_schema();

    let input = json!([
        { "name": "No Email" },
        { "phone": "123" },
        { "name": "Extra", "email": "extra@example.com", "nickname": "x" },
        "{\"name\": \"From String\", \"email\": \"string@example.com\"}",
        null
    ]);

    let response = execute_graphql(&schema, BULK_CREATE, Some(json!({ "input": input }))).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let payload = &data["bulkCreateCustomers"];

    let customers = payload["customers"].as_array().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["email"], "string@example.com");

    let errors: Vec<&str> = payload["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert_eq!(errors.len(), 4);
    assert!(errors[0].starts_with("No Email: "), "{}", errors[0]);
    assert!(errors[1].starts_with(": "), "{}", errors[1]);
    assert!(errors[2].starts_with("extra@example.com: "), "{}", errors[2]);
    assert_eq!(errors[3], ": Expected a JSON object");
}

#[tokio::test]
async fn test_bulk_create_with_null_input() {
    let schema = setup_test_schema();

    let response = execute_graphql(&schema, BULK_CREATE, None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert!(data["bulkCreateCustomers"]["customers"]
        .as_array()
        .unwrap()
        .is_empty());
    assert!(data["bulkCreateCustomers"]["errors"]
        .as_array()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_bulk_create_duplicates_within_batch() {
    let schema = setup_test_schema();

    let input = json!([
        { "name": "One", "email": "same@example.com" },
        { "name": "Two", "email": "same@example.com" }
    ]);

    let response = execute_graphql(&schema, BULK_CREATE, Some(json!({ "input": input }))).await;
    let data = response.data.into_json().unwrap();
    let payload = &data["bulkCreateCustomers"];

    assert_eq!(payload["customers"].as_array().unwrap().len(), 1);
    assert_eq!(payload["customers"][0]["name"], "One");
    assert_eq!(
        payload["errors"][0],
        "same@example.com: Email already exists."
    );
}

#[tokio::test]
async fn test_all_customers_returns_every_record() {
    let schema = setup_test_schema();

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(create_test_customer(&schema, &format!("C{i}"), &format!("c{i}@example.com")).await);
    }

    let response = execute_graphql(&schema, "{ allCustomers { id } }", None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let returned: Vec<String> = data["allCustomers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(returned, ids);
}
