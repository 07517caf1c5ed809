//! Employee handlers

use super::form::{CreateEmployee, EmployeeForm, UpdateEmployee};
use crate::error::{ApiError, ApiResult};
use crate::services::{credentials, Upload};
use crate::storage::EmployeeChanges;
use crate::AppState;
use axum::{
    extract::{multipart::MultipartRejection, rejection::PathRejection, Multipart, Path, State},
    Json,
};
use roster_types::{Employee, Message, NewEmployee, StatusMessage};
use tracing::info;

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.store.list_employees().await?;
    Ok(Json(employees))
}

pub async fn create(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<Message>> {
    let multipart = multipart.map_err(|e| ApiError::invalid(e.body_text()))?;
    let form = EmployeeForm::read(multipart)
        .await
        .map_err(|e| ApiError::invalid(format!("Invalid multipart request: {}", e)))?;
    let input = CreateEmployee::try_from(form)?;

    let image = match &input.image {
        Some(upload) => store_image(&state, upload).await?,
        None => String::new(),
    };
    let password_hash = hash(input.password).await?;

    let employee = NewEmployee {
        name: input.name,
        email: input.email,
        password_hash,
        address: input.address,
        salary: input.salary,
        image,
        category_id: input.category_id,
    };
    state
        .store
        .create_employee(&employee)
        .await
        .map_err(ApiError::EmployeeInsert)?;

    info!(
        email = %employee.email,
        category_id = employee.category_id,
        image = %employee.image,
        "Employee added"
    );

    Ok(Json(Message::new("Employee added successfully.")))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<StatusMessage>> {
    let id = employee_id(id)?;
    let multipart = multipart.map_err(|e| ApiError::rejected(e.body_text()))?;
    let input = UpdateEmployee::try_from(EmployeeForm::read(multipart).await?)?;

    if input.is_empty() {
        return Err(ApiError::rejected("No fields to update."));
    }

    let password_hash = match input.password {
        Some(password) => Some(hash(password).await?),
        None => None,
    };
    let image = match &input.image {
        Some(upload) => Some(store_image(&state, upload).await?),
        None => None,
    };

    let changes = EmployeeChanges {
        name: input.name,
        email: input.email,
        password_hash,
        address: input.address,
        salary: input.salary,
        category_id: input.category_id,
        image,
    };

    let matched = state.store.update_employee(id, &changes).await?;
    if matched == 0 {
        return Err(ApiError::not_found("Employee not found."));
    }

    let fields: Vec<&str> = changes.assignments().iter().map(|(c, _)| *c).collect();
    info!(employee_id = id, fields = ?fields, "Employee updated");

    Ok(Json(StatusMessage::ok("Employee updated successfully.")))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<StatusMessage>> {
    let id = employee_id(id)?;
    let removed = state.store.delete_employee(id).await?;
    if removed == 0 {
        return Err(ApiError::not_found("Employee not found."));
    }

    info!(employee_id = id, "Employee deleted");

    Ok(Json(StatusMessage::ok("Employee deleted successfully.")))
}

fn employee_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|e| ApiError::rejected(format!("Invalid employee id: {}", e.body_text())))
}

async fn hash(password: String) -> ApiResult<String> {
    credentials::hash_password_blocking(password)
        .await
        .map_err(|e| ApiError::internal(format!("{:#}", e)))
}

async fn store_image(state: &AppState, upload: &Upload) -> ApiResult<String> {
    state
        .images
        .save(upload)
        .await
        .map_err(|e| ApiError::internal(format!("{:#}", e)))
}
