//! Category handlers

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use roster_types::{AddCategoryRequest, Category, StatusMessage};
use tracing::{debug, info};

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<AddCategoryRequest>, JsonRejection>,
) -> ApiResult<Json<StatusMessage>> {
    // An unreadable body is the same as one without a name
    let req = match body {
        Ok(Json(req)) => req,
        Err(e) => {
            debug!("Ignoring unreadable category body: {}", e);
            AddCategoryRequest::default()
        }
    };

    let name = req
        .category
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::invalid("Category name is required."))?;

    state.store.create_category(&name).await?;
    info!(category = %name, "Category added");

    Ok(Json(StatusMessage::ok("Category added successfully.")))
}
