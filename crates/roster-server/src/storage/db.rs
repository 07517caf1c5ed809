//! MySQL database layer
//!
//! Expects the `category` and `employee` tables to exist already.

use super::{EmployeeChanges, Store, UpdateStatement};
use crate::settings::Settings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use roster_types::{Category, Employee, NewEmployee};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

// `+ 0e0` widens INT/DECIMAL salaries to DOUBLE and keeps NULL as NULL
const LIST_EMPLOYEES: &str = r#"
    SELECT id, name, email, password, address, salary + 0e0 AS salary, image, category_id
    FROM employee ORDER BY id
    "#;

const TOTAL_SALARY: &str = r#"
    SELECT SUM(salary) + 0e0 AS total_salary FROM employee
    "#;

pub struct Database {
    pool: MySqlPool,
}

impl Database {
    pub async fn connect(settings: &Settings) -> Result<Self> {
        tracing::info!(
            "Connecting to MySQL at {}:{}/{} as {}",
            settings.db_host,
            settings.db_port,
            settings.db_name,
            settings.db_user
        );

        let options = MySqlConnectOptions::new()
            .host(&settings.db_host)
            .port(settings.db_port)
            .username(&settings.db_user)
            .password(&settings.db_password)
            .database(&settings.db_name);

        let pool = MySqlPoolOptions::new()
            .max_connections(settings.db_max_connections)
            .connect_with(options)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to MySQL database at {}:{}",
                    settings.db_host, settings.db_port
                )
            })?;

        tracing::info!("Connected to the MySQL database");

        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for Database {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name FROM category ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create_category(&self, name: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO category (name) VALUES (?)
            "#,
        )
        .bind(name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(LIST_EMPLOYEES)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO employee (name, email, password, address, salary, image, category_id)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.password_hash)
        .bind(&employee.address)
        .bind(employee.salary)
        .bind(&employee.image)
        .bind(employee.category_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_employee(&self, id: i64, changes: &EmployeeChanges) -> Result<u64> {
        let statement = UpdateStatement::for_employee(id, changes)
            .ok_or_else(|| anyhow::anyhow!("No fields to update"))?;

        let result = statement.query().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete_employee(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM employee WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn employee_count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) AS total_employees FROM employee
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn total_salary(&self) -> Result<Option<f64>> {
        let total: Option<f64> = sqlx::query_scalar(TOTAL_SALARY)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL connection pool closed");
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Category {
            id: r.id,
            name: r.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    email: String,
    password: String,
    address: Option<String>,
    salary: Option<f64>,
    image: Option<String>,
    category_id: i64,
}

impl From<EmployeeRow> for Employee {
    fn from(r: EmployeeRow) -> Self {
        Employee {
            id: r.id,
            name: r.name,
            email: r.email,
            password: r.password,
            address: r.address,
            salary: r.salary,
            image: r.image,
            category_id: r.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_reads_are_widened_to_double() {
        assert!(LIST_EMPLOYEES.contains("salary + 0e0 AS salary"));
        assert!(TOTAL_SALARY.contains("SUM(salary) + 0e0"));
    }
}
