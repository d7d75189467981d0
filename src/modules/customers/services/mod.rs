mod customer_service;

pub use customer_service::{hash_password, verify_password, CustomerService};
