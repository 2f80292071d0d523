pub mod resolvers;

pub use resolvers::SystemQuery;
