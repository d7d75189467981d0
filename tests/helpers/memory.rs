// In-memory repository fakes implementing the persistence seams.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use creditline::core::{AppError, Result};
use creditline::modules::credits::models::Credit;
use creditline::modules::credits::repositories::CreditRepository;
use creditline::modules::customers::models::Customer;
use creditline::modules::customers::repositories::CustomerRepository;

pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
    next_id: AtomicI64,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<Customer> {
        let mut customers = self.customers.lock().unwrap();

        if customers
            .iter()
            .any(|c| c.cpf == customer.cpf || c.email == customer.email)
        {
            return Err(AppError::conflict(format!(
                "Customer with CPF '{}' or email '{}' already registered",
                customer.cpf, customer.email
            )));
        }

        let mut created = customer.clone();
        created.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        customers.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        let mut customers = self.customers.lock().unwrap();
        if let Some(existing) = customers.iter_mut().find(|c| c.id == customer.id) {
            *existing = customer.clone();
        }
        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut customers = self.customers.lock().unwrap();
        let before = customers.len();
        customers.retain(|c| c.id != Some(id));
        Ok(customers.len() < before)
    }
}

pub struct InMemoryCreditRepository {
    credits: Mutex<Vec<Credit>>,
    next_id: AtomicI64,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self {
            credits: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn create(&self, credit: &Credit) -> Result<Credit> {
        let mut credits = self.credits.lock().unwrap();

        let mut created = credit.clone();
        created.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        credits.push(created.clone());

        Ok(created)
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let credits = self.credits.lock().unwrap();
        Ok(credits
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let credits = self.credits.lock().unwrap();
        Ok(credits
            .iter()
            .find(|c| c.credit_code == credit_code)
            .cloned())
    }
}
