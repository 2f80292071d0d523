// Each domain contains: mod.rs, resolvers.rs, types.rs (and service.rs when it has business rules)

pub mod customers;
pub mod orders;
pub mod products;
pub mod system;
