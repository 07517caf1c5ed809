//! Partial employee update
//!
//! Only the fields a caller supplied end up in the SET clause. Values always
//! travel as bindings; column names come from a fixed list.

use roster_types::Employee;
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Employee fields to overwrite, each independently optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Already hashed
    pub password_hash: Option<String>,
    pub address: Option<String>,
    pub salary: Option<f64>,
    pub category_id: Option<i64>,
    pub image: Option<String>,
}

impl EmployeeChanges {
    /// Present fields as `(column, value)`, in column order
    /// name, email, password, address, salary, category_id, image
    pub fn assignments(&self) -> Vec<(&'static str, SqlValue)> {
        let mut set = Vec::new();
        if let Some(name) = &self.name {
            set.push(("name", SqlValue::Text(name.clone())));
        }
        if let Some(email) = &self.email {
            set.push(("email", SqlValue::Text(email.clone())));
        }
        if let Some(hash) = &self.password_hash {
            set.push(("password", SqlValue::Text(hash.clone())));
        }
        if let Some(address) = &self.address {
            set.push(("address", SqlValue::Text(address.clone())));
        }
        if let Some(salary) = self.salary {
            set.push(("salary", SqlValue::Float(salary)));
        }
        if let Some(category_id) = self.category_id {
            set.push(("category_id", SqlValue::Integer(category_id)));
        }
        if let Some(image) = &self.image {
            set.push(("image", SqlValue::Text(image.clone())));
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// Overwrite the present fields of an in-memory row
    pub fn apply(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(hash) = &self.password_hash {
            employee.password = hash.clone();
        }
        if let Some(address) = &self.address {
            employee.address = Some(address.clone());
        }
        if let Some(salary) = self.salary {
            employee.salary = Some(salary);
        }
        if let Some(category_id) = self.category_id {
            employee.category_id = category_id;
        }
        if let Some(image) = &self.image {
            employee.image = Some(image.clone());
        }
    }
}

/// `UPDATE employee SET ... WHERE id = ?` with its bindings in order
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub sql: String,
    pub bindings: Vec<SqlValue>,
}

impl UpdateStatement {
    /// `None` when there is nothing to set
    pub fn for_employee(id: i64, changes: &EmployeeChanges) -> Option<Self> {
        let assignments = changes.assignments();
        if assignments.is_empty() {
            return None;
        }

        let clauses: Vec<String> = assignments
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();
        let mut bindings: Vec<SqlValue> = assignments.into_iter().map(|(_, v)| v).collect();
        bindings.push(SqlValue::Integer(id));

        Some(Self {
            sql: format!("UPDATE employee SET {} WHERE id = ?", clauses.join(", ")),
            bindings,
        })
    }

    /// Build the sqlx query with every binding applied
    pub fn query(&self) -> Query<'_, MySql, MySqlArguments> {
        let mut query = sqlx::query(&self.sql);
        for binding in &self.bindings {
            query = match binding {
                SqlValue::Text(s) => query.bind(s.as_str()),
                SqlValue::Integer(i) => query.bind(*i),
                SqlValue::Float(f) => query.bind(*f),
            };
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: 7,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$argon2id$old".to_string(),
            address: Some("1 Loop Rd".to_string()),
            salary: Some(1200.0),
            image: Some(String::new()),
            category_id: 2,
        }
    }

    #[test]
    fn test_nothing_to_update() {
        let changes = EmployeeChanges::default();
        assert!(changes.is_empty());
        assert_eq!(UpdateStatement::for_employee(1, &changes), None);
    }

    #[test]
    fn test_single_field() {
        let changes = EmployeeChanges {
            salary: Some(5000.0),
            ..Default::default()
        };
        let stmt = UpdateStatement::for_employee(3, &changes).unwrap();
        assert_eq!(stmt.sql, "UPDATE employee SET salary = ? WHERE id = ?");
        assert_eq!(
            stmt.bindings,
            vec![SqlValue::Float(5000.0), SqlValue::Integer(3)]
        );
    }

    #[test]
    fn test_fixed_column_order() {
        let changes = EmployeeChanges {
            image: Some("image_1700000000000.png".to_string()),
            category_id: Some(4),
            password_hash: Some("$argon2id$new".to_string()),
            name: Some("Grace".to_string()),
            ..Default::default()
        };
        let stmt = UpdateStatement::for_employee(9, &changes).unwrap();
        assert_eq!(
            stmt.sql,
            "UPDATE employee SET name = ?, password = ?, category_id = ?, image = ? WHERE id = ?"
        );
        assert_eq!(
            stmt.bindings,
            vec![
                SqlValue::Text("Grace".to_string()),
                SqlValue::Text("$argon2id$new".to_string()),
                SqlValue::Integer(4),
                SqlValue::Text("image_1700000000000.png".to_string()),
                SqlValue::Integer(9),
            ]
        );
    }

    #[test]
    fn test_values_are_never_inlined() {
        let changes = EmployeeChanges {
            name: Some("x'; DROP TABLE employee; --".to_string()),
            ..Default::default()
        };
        let stmt = UpdateStatement::for_employee(1, &changes).unwrap();
        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.sql.matches('?').count(), stmt.bindings.len());
    }

    #[test]
    fn test_apply_touches_only_present_fields() {
        let mut employee = sample();
        let before = employee.clone();
        EmployeeChanges {
            salary: Some(5000.0),
            ..Default::default()
        }
        .apply(&mut employee);

        assert_eq!(employee.salary, Some(5000.0));
        assert_eq!(
            Employee {
                salary: before.salary,
                ..employee
            },
            before
        );
    }
}
