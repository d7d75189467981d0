mod credit_service;

pub use credit_service::{CreditService, DEFAULT_FIRST_INSTALLMENT_WINDOW_MONTHS};
