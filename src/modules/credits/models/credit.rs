// A credit application. The public handle is the `credit_code` UUID generated
// at creation; the numeric id never leaves the database layer. Credits are
// immutable once persisted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;

/// Most installment plans the product sells fit well under this
const MAX_INSTALLMENTS: i32 = 48;

/// Credit application status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// Application received, awaiting analysis
    InProgress,
    /// Analysis accepted the application
    Approved,
    /// Analysis rejected the application
    Rejected,
}

impl Default for CreditStatus {
    fn default() -> Self {
        CreditStatus::InProgress
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::InProgress => write!(f, "IN_PROGRESS"),
            CreditStatus::Approved => write!(f, "APPROVED"),
            CreditStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl std::str::FromStr for CreditStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(CreditStatus::InProgress),
            "APPROVED" => Ok(CreditStatus::Approved),
            "REJECTED" => Ok(CreditStatus::Rejected),
            _ => Err(format!("Invalid credit status: {}", s)),
        }
    }
}

/// Represents one credit application
#[derive(Debug, Clone)]
pub struct Credit {
    /// Database-generated id, `None` until persisted
    pub id: Option<i64>,
    /// Public random handle, unique across all credits
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    /// Owning customer; many credits map to one customer
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Application payload for `POST /api/credits`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyCreditRequest {
    pub credit_value: Decimal,
    pub day_first_of_installment: NaiveDate,
    pub number_of_installments: i32,
    pub customer_id: i64,
}

impl ApplyCreditRequest {
    /// Validate the payload shape and build the entity
    ///
    /// The date upper bound is a business rule checked by the service; here we
    /// only reject values no application could ever carry.
    pub fn to_entity(&self) -> Result<Credit> {
        if self.credit_value <= Decimal::ZERO {
            return Err(AppError::business("Credit value must be positive"));
        }

        if self.number_of_installments < 1 {
            return Err(AppError::business(
                "Number of installments must be at least 1",
            ));
        }

        if self.number_of_installments > MAX_INSTALLMENTS {
            return Err(AppError::business(format!(
                "Number of installments cannot exceed {}",
                MAX_INSTALLMENTS
            )));
        }

        let now = Utc::now();
        if self.day_first_of_installment <= now.date_naive() {
            return Err(AppError::business(
                "First installment date must be in the future",
            ));
        }

        Ok(Credit {
            id: None,
            credit_code: Uuid::new_v4(),
            credit_value: self.credit_value,
            day_first_installment: self.day_first_of_installment,
            number_of_installments: self.number_of_installments,
            status: CreditStatus::InProgress,
            customer_id: self.customer_id,
            created_at: now,
        })
    }
}

/// Full credit view returned on creation and code lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    // Singular by contract, kept for wire compatibility
    #[serde(rename = "numberOfInstallment")]
    pub number_of_installments: i32,
    pub status: CreditStatus,
    pub email_customer: String,
    pub income_customer: Decimal,
}

impl CreditView {
    pub fn new(credit: &Credit, customer: &Customer) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
            status: credit.status,
            email_customer: customer.email.clone(),
            income_customer: customer.income,
        }
    }
}

/// Summary view used by the per-customer listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummary {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installments: i32,
}

impl From<&Credit> for CreditSummary {
    fn from(credit: &Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}
