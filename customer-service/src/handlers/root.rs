use crate::dtos::MessageResponse;
use axum::Json;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from FastAPI Backend!"))
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the backend API!"))
}
