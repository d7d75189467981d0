// Customers module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Address, Customer, CustomerView};
pub use repositories::{CustomerRepository, SqlCustomerRepository};
pub use services::CustomerService;
