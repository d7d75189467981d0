mod credit;

pub use credit::{ApplyCreditRequest, Credit, CreditStatus, CreditSummary, CreditView};
