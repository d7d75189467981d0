// MySQL persistence for customers.
//
// Expects a `customers` table with `id BIGINT AUTO_INCREMENT`, unique keys on
// `cpf` and `email`, and DECIMAL `income`. The service layer owns all business
// rules; this layer only moves rows.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};

use crate::core::{AppError, Result};
use crate::modules::customers::models::{Address, Customer};

/// Persistence seam for customers
///
/// Services depend on this trait so tests can swap in an in-memory store.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a customer and return it with its generated id
    async fn create(&self, customer: &Customer) -> Result<Customer>;

    /// Fetch a customer by internal id
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    /// Persist updated name, income and address fields
    async fn update(&self, customer: &Customer) -> Result<Customer>;

    /// Delete by id, returning whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// MySQL-backed [`CustomerRepository`]
pub struct SqlCustomerRepository {
    pool: MySqlPool,
}

impl SqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                first_name, last_name, cpf, email, password_hash, income, zip_code, street
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.cpf)
        .bind(&customer.email)
        .bind(&customer.password_hash)
        .bind(customer.income)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                return AppError::conflict(format!(
                    "Customer with CPF '{}' or email '{}' already registered",
                    customer.cpf, customer.email
                ));
            }
            AppError::Database(e)
        })?;

        let mut created = customer.clone();
        created.id = Some(result.last_insert_id() as i64);

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, cpf, email, password_hash, income, zip_code, street
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CustomerRow::into_customer))
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        let id = customer
            .id
            .ok_or_else(|| AppError::internal("Cannot update a customer without an id"))?;

        sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, income = ?, zip_code = ?, street = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(customer.income)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    cpf: String,
    email: String,
    password_hash: String,
    income: Decimal,
    zip_code: String,
    street: String,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            id: Some(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            cpf: self.cpf,
            email: self.email,
            password_hash: self.password_hash,
            income: self.income,
            address: Address {
                zip_code: self.zip_code,
                street: self.street,
            },
        }
    }
}
