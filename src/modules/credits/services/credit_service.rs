use std::sync::Arc;

use chrono::{Months, Utc};
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{Credit, CreditSummary, CreditView};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::customers::services::CustomerService;

/// Default window, in months, for the first installment of a new credit
pub const DEFAULT_FIRST_INSTALLMENT_WINDOW_MONTHS: u32 = 3;

/// Business logic for credit applications
///
/// Owns the two domain rules of the system: the first installment of a new
/// credit must fall within the configured window, and a credit is only
/// visible to its owning customer.
pub struct CreditService {
    repository: Arc<dyn CreditRepository>,
    customer_service: Arc<CustomerService>,
    window_months: u32,
}

impl CreditService {
    pub fn new(repository: Arc<dyn CreditRepository>, customer_service: Arc<CustomerService>) -> Self {
        Self {
            repository,
            customer_service,
            window_months: DEFAULT_FIRST_INSTALLMENT_WINDOW_MONTHS,
        }
    }

    /// Override the first-installment window (config-driven)
    pub fn with_window_months(mut self, window_months: u32) -> Self {
        self.window_months = window_months;
        self
    }

    /// Persist a new credit application
    ///
    /// Rejects a first-installment date past `today + window` and binds the
    /// credit to an existing customer before persisting.
    pub async fn save(&self, credit: Credit) -> Result<CreditView> {
        self.validate_day_first_installment(&credit)?;

        let customer = self.customer_service.find_by_id(credit.customer_id).await?;

        let created = self.repository.create(&credit).await?;
        info!(
            credit_code = %created.credit_code,
            customer_id = created.customer_id,
            "credit application registered"
        );

        Ok(CreditView::new(&created, &customer))
    }

    /// List all credits owned by a customer as summaries
    pub async fn find_all_by_customer(&self, customer_id: i64) -> Result<Vec<CreditSummary>> {
        let credits = self.repository.find_all_by_customer_id(customer_id).await?;

        Ok(credits.iter().map(CreditSummary::from).collect())
    }

    /// Look up one credit by its public code, enforcing ownership
    pub async fn find_by_credit_code(
        &self,
        customer_id: i64,
        credit_code: Uuid,
    ) -> Result<CreditView> {
        let credit = self
            .repository
            .find_by_credit_code(credit_code)
            .await?
            .ok_or_else(|| AppError::business(format!("Creditcode {} not found", credit_code)))?;

        if credit.customer_id != customer_id {
            return Err(AppError::invalid_argument("Contact admin"));
        }

        let customer = self.customer_service.find_by_id(credit.customer_id).await?;

        Ok(CreditView::new(&credit, &customer))
    }

    fn validate_day_first_installment(&self, credit: &Credit) -> Result<()> {
        let limit = Utc::now().date_naive() + Months::new(self.window_months);

        if credit.day_first_installment > limit {
            return Err(AppError::business("Invalid Date"));
        }

        Ok(())
    }
}
