use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::customers::models::{
    Address, Customer, CustomerView, RegisterCustomerRequest, UpdateCustomerRequest,
};
use crate::modules::customers::repositories::CustomerRepository;

/// Business logic for customer registration and maintenance
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Register a new customer
    ///
    /// Validates the payload, hashes the password and persists the customer.
    /// Duplicate CPF or email surfaces as a conflict from the repository.
    pub async fn save(&self, request: RegisterCustomerRequest) -> Result<CustomerView> {
        request.validate()?;

        let customer = Customer {
            id: None,
            first_name: request.first_name,
            last_name: request.last_name,
            cpf: request.cpf,
            email: request.email,
            password_hash: hash_password(&request.password)?,
            income: request.income,
            address: Address {
                zip_code: request.zip_code,
                street: request.street,
            },
        };

        let created = self.repository.create(&customer).await?;
        info!(customer_id = created.id, "customer registered");

        Ok(CustomerView::from_customer(&created))
    }

    /// Fetch a customer entity by id
    ///
    /// Unknown ids are a business error, mirrored by every caller that needs
    /// to resolve an owner.
    pub async fn find_by_id(&self, id: i64) -> Result<Customer> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::business(format!("Id {} not found", id)))
    }

    /// Apply a partial update to name, income and address fields
    pub async fn update(&self, id: i64, patch: UpdateCustomerRequest) -> Result<CustomerView> {
        let mut customer = self.find_by_id(id).await?;

        if let Some(first_name) = patch.first_name {
            customer.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            customer.last_name = last_name;
        }
        if let Some(income) = patch.income {
            if income < rust_decimal::Decimal::ZERO {
                return Err(AppError::business("Income cannot be negative"));
            }
            customer.income = income;
        }
        if let Some(zip_code) = patch.zip_code {
            customer.address.zip_code = zip_code;
        }
        if let Some(street) = patch.street {
            customer.address.street = street;
        }

        let updated = self.repository.update(&customer).await?;
        info!(customer_id = updated.id, "customer updated");

        Ok(CustomerView::from_customer(&updated))
    }

    /// Delete a customer by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::business(format!("Id {} not found", id)));
        }
        info!(customer_id = id, "customer deleted");
        Ok(())
    }
}

/// Hash a plaintext password with Argon2 and a fresh random salt
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))
}

/// Check a plaintext password against a stored Argon2 hash
pub fn verify_password(plain: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::internal(format!("Stored password hash is malformed: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
