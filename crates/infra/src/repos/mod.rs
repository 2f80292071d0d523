pub mod customers;
pub mod orders;
pub mod products;

pub use customers::CreateCustomer;
pub use orders::CreateOrder;
pub use products::CreateProduct;
