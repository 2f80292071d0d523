use async_graphql::dataloader::Loader;
use infra::{
    models::{CustomerRow, ProductRow},
    CrmStore, StoreError,
};
use std::{collections::HashMap, future::Future, sync::Arc};
use uuid::Uuid;

// CustomerLoader - batch load customers by ID
#[derive(Clone)]
pub struct CustomerLoader {
    store: Arc<dyn CrmStore>,
}

impl CustomerLoader {
    pub fn new(store: Arc<dyn CrmStore>) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for CustomerLoader {
    type Value = CustomerRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.list_customers_by_ids(&ids).await.map_err(Arc::new)?;

            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// OrderProductsLoader - batch load the product set of each order, keyed by order ID
#[derive(Clone)]
pub struct OrderProductsLoader {
    store: Arc<dyn CrmStore>,
}

impl OrderProductsLoader {
    pub fn new(store: Arc<dyn CrmStore>) -> Self {
        Self { store }
    }
}

impl Loader<Uuid> for OrderProductsLoader {
    type Value = Vec<ProductRow>;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.list_order_products(&ids).await.map_err(Arc::new)?;

            let mut by_order: HashMap<Uuid, Vec<ProductRow>> = HashMap::new();
            for row in rows {
                by_order.entry(row.order_id).or_default().push(row.product);
            }
            Ok(by_order)
        }
    }
}
