mod customers;
mod products;
mod system;
