// Credits module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Credit, CreditStatus, CreditSummary, CreditView};
pub use repositories::{CreditRepository, SqlCreditRepository};
pub use services::CreditService;
