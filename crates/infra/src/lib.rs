pub mod db;
pub mod models;
pub mod repos;
pub mod store;

pub use store::{CrmStore, MemoryStore, PgStore, StoreError, StoreResult};
