//! Multipart employee form
//!
//! Text fields are presence-checked only: an empty value counts as missing.

use crate::error::{ApiError, ApiResult};
use crate::services::Upload;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;

/// The file part carrying the employee photo
pub const IMAGE_FIELD: &str = "image";

const MISSING_REQUIRED: &str = "Missing required fields: name, email, password, category_id.";

/// Raw form contents before any per-endpoint interpretation
#[derive(Debug, Default)]
pub struct EmployeeForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub salary: Option<String>,
    pub category_id: Option<String>,
    pub image: Option<Upload>,
}

impl EmployeeForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(|s| s.to_string()) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let file_name = field.file_name().map(|s| s.to_string()).unwrap_or_default();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked
                if !file_name.is_empty() && !bytes.is_empty() {
                    form.image = Some(Upload {
                        field: name,
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
                continue;
            }

            let slot = match name.as_str() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "password" => &mut form.password,
                "address" => &mut form.address,
                "salary" => &mut form.salary,
                "category_id" => &mut form.category_id,
                _ => continue,
            };
            *slot = present(field.text().await?);
        }

        Ok(form)
    }
}

fn present(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Input of `POST /add_employee`, defaults applied
#[derive(Debug)]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub salary: f64,
    pub category_id: i64,
    pub image: Option<Upload>,
}

impl TryFrom<EmployeeForm> for CreateEmployee {
    type Error = ApiError;

    fn try_from(form: EmployeeForm) -> ApiResult<Self> {
        let (Some(name), Some(email), Some(password), Some(category_id)) =
            (form.name, form.email, form.password, form.category_id)
        else {
            return Err(ApiError::invalid(MISSING_REQUIRED));
        };

        let category_id = parse_id(&category_id).map_err(ApiError::invalid)?;
        let salary = match form.salary {
            Some(s) => parse_amount(&s).map_err(ApiError::invalid)?,
            None => 0.0,
        };

        Ok(Self {
            name,
            email,
            password,
            address: form.address.unwrap_or_default(),
            salary,
            category_id,
            image: form.image,
        })
    }
}

/// Input of `PUT /employee/:id`
///
/// `salary` and `category_id` equal to zero are dropped like empty strings,
/// so neither can be cleared through this endpoint.
#[derive(Debug, Default)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub salary: Option<f64>,
    pub category_id: Option<i64>,
    pub image: Option<Upload>,
}

impl UpdateEmployee {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.address.is_none()
            && self.salary.is_none()
            && self.category_id.is_none()
            && self.image.is_none()
    }
}

impl TryFrom<EmployeeForm> for UpdateEmployee {
    type Error = ApiError;

    fn try_from(form: EmployeeForm) -> ApiResult<Self> {
        let salary = form
            .salary
            .map(|s| parse_amount(&s))
            .transpose()
            .map_err(ApiError::rejected)?
            .filter(|s| *s != 0.0);
        let category_id = form
            .category_id
            .map(|s| parse_id(&s))
            .transpose()
            .map_err(ApiError::rejected)?
            .filter(|id| *id != 0);

        Ok(Self {
            name: form.name,
            email: form.email,
            password: form.password,
            address: form.address,
            salary,
            category_id,
            image: form.image,
        })
    }
}

fn parse_id(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid category_id: {}", value))
}

fn parse_amount(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid salary: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[(&str, &str)]) -> EmployeeForm {
        let mut form = EmployeeForm::default();
        for (k, v) in fields {
            let value = present(v.to_string());
            match *k {
                "name" => form.name = value,
                "email" => form.email = value,
                "password" => form.password = value,
                "address" => form.address = value,
                "salary" => form.salary = value,
                "category_id" => form.category_id = value,
                _ => {}
            }
        }
        form
    }

    #[test]
    fn test_create_applies_defaults() {
        let input = CreateEmployee::try_from(form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("password", "secret"),
            ("category_id", "2"),
        ]))
        .unwrap();
        assert_eq!(input.address, "");
        assert_eq!(input.salary, 0.0);
        assert_eq!(input.category_id, 2);
        assert!(input.image.is_none());
    }

    #[test]
    fn test_create_requires_each_field() {
        let full = [
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("password", "secret"),
            ("category_id", "2"),
        ];
        for skip in 0..full.len() {
            let fields: Vec<(&str, &str)> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, f)| *f)
                .collect();
            assert!(matches!(
                CreateEmployee::try_from(form(&fields)),
                Err(ApiError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_create_treats_empty_as_missing() {
        let result = CreateEmployee::try_from(form(&[
            ("name", ""),
            ("email", "ada@example.com"),
            ("password", "secret"),
            ("category_id", "2"),
        ]));
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_create_rejects_non_numeric_category() {
        let result = CreateEmployee::try_from(form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("password", "secret"),
            ("category_id", "engineering"),
        ]));
        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_update_drops_zero_and_empty_values() {
        let input = UpdateEmployee::try_from(form(&[
            ("salary", "0"),
            ("address", ""),
            ("category_id", "0"),
        ]))
        .unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn test_update_keeps_supplied_values() {
        let input = UpdateEmployee::try_from(form(&[("salary", "5000"), ("email", "new@example.com")]))
            .unwrap();
        assert_eq!(input.salary, Some(5000.0));
        assert_eq!(input.email.as_deref(), Some("new@example.com"));
        assert!(input.name.is_none());
        assert!(!input.is_empty());
    }

    #[test]
    fn test_update_rejects_bad_salary() {
        let result = UpdateEmployee::try_from(form(&[("salary", "lots")]));
        assert!(matches!(result, Err(ApiError::Rejected(_))));
    }
}
