//! Root endpoint

use axum::Json;

use crate::error::MessageResponse;

pub const WELCOME_MESSAGE: &str = "Welcome to the Book API. Visit /swagger/index.html for docs.";

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}
