mod customer;

pub use customer::{
    validate_cpf, Address, Customer, CustomerView, RegisterCustomerRequest, UpdateCustomerRequest,
};
