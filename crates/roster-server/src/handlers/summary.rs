//! Dashboard aggregates

use crate::error::ApiResult;
use crate::AppState;
use axum::{extract::State, Json};
use roster_types::{EmployeeCount, TotalSalary};

pub async fn employee_count(State(state): State<AppState>) -> ApiResult<Json<EmployeeCount>> {
    let total_employees = state.store.employee_count().await?;
    Ok(Json(EmployeeCount { total_employees }))
}

/// `total_salary` is `null` when there is nothing to sum
pub async fn total_salary(State(state): State<AppState>) -> ApiResult<Json<TotalSalary>> {
    let total_salary = state.store.total_salary().await?;
    Ok(Json(TotalSalary { total_salary }))
}
