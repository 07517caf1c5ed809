//! In-memory store using DashMap (stands in for MySQL in tests and local runs)

use super::{EmployeeChanges, Store};
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use roster_types::{Category, Employee, NewEmployee};
use std::sync::atomic::{AtomicI64, Ordering};

/// Same observable behavior as the MySQL tables: ids start at 1 and are
/// never reused, listings come back in id order.
pub struct MemoryStore {
    categories: DashMap<i64, Category>,
    employees: DashMap<i64, Employee>,
    next_category_id: AtomicI64,
    next_employee_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            categories: DashMap::new(),
            employees: DashMap::new(),
            next_category_id: AtomicI64::new(1),
            next_employee_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.categories.iter().map(|c| c.value().clone()).collect();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn create_category(&self, name: &str) -> Result<()> {
        let id = self.next_category_id.fetch_add(1, Ordering::SeqCst);
        self.categories.insert(
            id,
            Category {
                id,
                name: name.to_string(),
            },
        );
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let mut employees: Vec<Employee> =
            self.employees.iter().map(|e| e.value().clone()).collect();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }

    async fn create_employee(&self, employee: &NewEmployee) -> Result<()> {
        let id = self.next_employee_id.fetch_add(1, Ordering::SeqCst);
        self.employees
            .insert(id, employee.clone().into_employee(id));
        Ok(())
    }

    async fn update_employee(&self, id: i64, changes: &EmployeeChanges) -> Result<u64> {
        if changes.is_empty() {
            anyhow::bail!("No fields to update");
        }
        match self.employees.get_mut(&id) {
            Some(mut employee) => {
                changes.apply(employee.value_mut());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_employee(&self, id: i64) -> Result<u64> {
        Ok(self.employees.remove(&id).map_or(0, |_| 1))
    }

    async fn employee_count(&self) -> Result<i64> {
        Ok(self.employees.len() as i64)
    }

    async fn total_salary(&self) -> Result<Option<f64>> {
        // SUM() skips NULLs and yields NULL when nothing is left
        let salaries: Vec<f64> = self.employees.iter().filter_map(|e| e.salary).collect();
        if salaries.is_empty() {
            return Ok(None);
        }
        Ok(Some(salaries.into_iter().sum()))
    }

    async fn close(&self) {}
}
