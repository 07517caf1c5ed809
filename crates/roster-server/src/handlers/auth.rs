//! Authentication handlers
//!
//! There is no session store; logout only expires the client's cookie.

use axum::{http::header, response::IntoResponse, Json};
use roster_types::StatusMessage;

/// Cookie the admin frontend keeps its token in
pub const TOKEN_COOKIE: &str = "token";

pub async fn logout() -> impl IntoResponse {
    let expired = format!(
        "{}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        TOKEN_COOKIE
    );
    (
        [(header::SET_COOKIE, expired)],
        Json(StatusMessage::ok("Logged out successfully")),
    )
}
