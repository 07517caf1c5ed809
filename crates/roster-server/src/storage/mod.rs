//! Storage layer
//!
//! MySQL (via sqlx) in production, DashMap (in-memory) for tests and local
//! runs. Handlers only see the `Store` trait.

pub mod db;
pub mod memory;
pub mod update;

pub use db::Database;
pub use memory::MemoryStore;
pub use update::{EmployeeChanges, UpdateStatement};

use anyhow::Result;
use async_trait::async_trait;
use roster_types::{Category, Employee, NewEmployee};

/// One call per request; every method maps to a single statement.
#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap liveness probe
    async fn ping(&self) -> Result<()>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn create_category(&self, name: &str) -> Result<()>;

    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn create_employee(&self, employee: &NewEmployee) -> Result<()>;

    /// Returns the number of rows matched by `id`
    async fn update_employee(&self, id: i64, changes: &EmployeeChanges) -> Result<u64>;

    /// Returns the number of rows removed
    async fn delete_employee(&self, id: i64) -> Result<u64>;

    async fn employee_count(&self) -> Result<i64>;

    /// `None` when there are no salaries to add up
    async fn total_salary(&self) -> Result<Option<f64>>;

    /// Release connections; called once at shutdown
    async fn close(&self);
}
