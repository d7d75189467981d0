// A customer is a registered borrower. Registration validates names, CPF
// check digits, email shape and income before anything touches the database;
// the password only ever leaves this module as an Argon2 hash.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Embedded postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

/// Represents a registered customer
#[derive(Debug, Clone)]
pub struct Customer {
    /// Database-generated id, `None` until persisted
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// Brazilian tax id, unique per customer
    pub cpf: String,
    pub email: String,
    /// Argon2 hash, never the plaintext password
    pub password_hash: String,
    pub income: Decimal,
    pub address: Address,
}

/// Registration payload for `POST /api/customers`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl RegisterCustomerRequest {
    /// Validate the payload shape before hashing and persisting
    pub fn validate(&self) -> Result<()> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::business("First name cannot be empty"));
        }
        if self.last_name.trim().is_empty() {
            return Err(AppError::business("Last name cannot be empty"));
        }
        validate_cpf(&self.cpf)?;
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(AppError::business("Password cannot be empty"));
        }
        if self.income < Decimal::ZERO {
            return Err(AppError::business("Income cannot be negative"));
        }
        if self.zip_code.trim().is_empty() {
            return Err(AppError::business("Zip code cannot be empty"));
        }
        if self.street.trim().is_empty() {
            return Err(AppError::business("Street cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update payload for `PATCH /api/customers`
///
/// CPF, email and password are not updatable through this endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub income: Option<Decimal>,
    pub zip_code: Option<String>,
    pub street: Option<String>,
}

/// Public view of a customer, password omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl CustomerView {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            id: customer.id.unwrap_or_default(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            cpf: customer.cpf.clone(),
            email: customer.email.clone(),
            income: customer.income,
            zip_code: customer.address.zip_code.clone(),
            street: customer.address.street.clone(),
        }
    }
}

/// Validate a CPF with the standard two-check-digit algorithm
///
/// Accepts the punctuated form (`322.862.690-33`) and the bare 11 digits.
pub fn validate_cpf(cpf: &str) -> Result<()> {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return Err(AppError::business(format!("Invalid CPF '{}'", cpf)));
    }

    // Sequences like 000.000.000-00 pass the checksum but are not assignable
    if digits.windows(2).all(|w| w[0] == w[1]) {
        return Err(AppError::business(format!("Invalid CPF '{}'", cpf)));
    }

    let check = |len: usize| -> u32 {
        let weight_start = (len + 1) as u32;
        let sum: u32 = digits
            .iter()
            .take(len)
            .enumerate()
            .map(|(i, d)| d * (weight_start - i as u32))
            .sum();
        (sum * 10) % 11 % 10
    };

    if check(9) != digits[9] || check(10) != digits[10] {
        return Err(AppError::business(format!("Invalid CPF '{}'", cpf)));
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let valid = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    });

    if !valid {
        return Err(AppError::business(format!("Invalid email '{}'", email)));
    }

    Ok(())
}
