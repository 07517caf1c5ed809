//! Employee types

use serde::{Deserialize, Serialize};

/// A stored employee row, returned as-is by the listing endpoint
/// (hashed password and raw `category_id` included).
///
/// `address`, `salary` and `image` are nullable in the table and are passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: Option<String>,
    pub salary: Option<f64>,
    pub image: Option<String>,
    pub category_id: i64,
}

/// Values for a new employee row, after defaults have been applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    /// PHC-formatted password hash, never the plaintext
    pub password_hash: String,
    pub address: String,
    pub salary: f64,
    /// Stored image filename, empty when no image was uploaded
    pub image: String,
    pub category_id: i64,
}

impl NewEmployee {
    /// Materialize the row the store will hold under `id`
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            password: self.password_hash,
            address: Some(self.address),
            salary: Some(self.salary),
            image: Some(self.image),
            category_id: self.category_id,
        }
    }
}
