use crate::common::*;

#[tokio::test]
async fn test_hello_query() {
    let schema = setup_test_schema();

    let response = execute_graphql(&schema, "{ hello }", None).await;

    assert!(
        response.errors.is_empty(),
        "hello should succeed: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    assert_eq!(data["hello"], "Hello, GraphQL!");
}

#[tokio::test]
async fn test_invalid_query() {
    let schema = setup_test_schema();

    let response = execute_graphql(&schema, "{ nonExistentField }", None).await;

    assert!(
        !response.errors.is_empty(),
        "Invalid query should return errors"
    );
    assert!(
        response.errors[0].message.contains("nonExistentField"),
        "Error message should name the unknown field, got: '{}'",
        response.errors[0].message
    );
}
