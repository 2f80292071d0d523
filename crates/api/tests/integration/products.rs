use serde_json::json;

use crate::common::*;

const CREATE_PRODUCT: &str = r#"
    mutation CreateProduct($name: String!, $price: Float!, $stock: Int) {
        createProduct(name: $name, price: $price, stock: $stock) {
            product { id name price stock }
        }
    }
"#;

async fn product_count(schema: &api::gql::CrmSchema) -> usize {
    let response = execute_graphql(schema, "{ allProducts { id } }", None).await;
    let data = response.data.into_json().unwrap();
    data["allProducts"].as_array().unwrap().len()
}

#[tokio::test]
async fn test_create_product() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_PRODUCT,
        Some(json!({ "name": "Widget", "price": 10.5, "stock": 7 })),
    )
    .await;

    assert!(
        response.errors.is_empty(),
        "createProduct should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let product = &data["createProduct"]["product"];
    assert_eq!(product["name"], "Widget");
    assert_eq!(product["price"], "10.50");
    assert_eq!(product["stock"], 7);
}

#[tokio::test]
async fn test_stock_defaults_to_zero() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_PRODUCT,
        Some(json!({ "name": "Gadget", "price": 3 })),
    )
    .await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["createProduct"]["product"]["stock"], 0);
    assert_eq!(data["createProduct"]["product"]["price"], "3.00");
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_PRODUCT,
        Some(json!({ "name": "Widget", "price": -1, "stock": 5 })),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Invalid price or stock value");
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_INPUT"));
    assert_eq!(product_count(&schema).await, 0, "nothing should be persisted");
}

#[tokio::test]
async fn test_zero_price_is_rejected() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_PRODUCT,
        Some(json!({ "name": "Freebie", "price": 0, "stock": 1 })),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("INVALID_INPUT"));
    assert_eq!(product_count(&schema).await, 0);
}

#[tokio::test]
async fn test_negative_stock_is_rejected() {
    let schema = setup_test_schema();

    let response = execute_graphql(
        &schema,
        CREATE_PRODUCT,
        Some(json!({ "name": "Widget", "price": 10, "stock": -1 })),
    )
    .await;

    assert_eq!(error_code(&response).as_deref(), Some("INVALID_INPUT"));
    assert_eq!(product_count(&schema).await, 0);
}

#[tokio::test]
async fn test_all_products_returns_every_record() {
    let schema = setup_test_schema();

    for i in 1..=4 {
        create_test_product(&schema, &format!("P{i}"), i as f64, i).await;
    }

    let response = execute_graphql(&schema, "{ allProducts { name price stock } }", None).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let products = data["allProducts"].as_array().unwrap();
    assert_eq!(products.len(), 4);
    assert_eq!(products[0]["name"], "P1");
    assert_eq!(products[3]["price"], "4.00");
}
