use crate::error::AssetError;
use rocket::http::{ContentType, Status};
use rocket::response::Responder;
use rocket::{Request, Response};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// Standard API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a successful response
    pub fn success(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            error_code: None,
            message: None,
        }
    }

    /// Create an error response
    pub fn error(error_code: i32, message: Option<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            value: None,
            error_code: Some(error_code),
            message,
        }
    }
}

/// Implement Responder for ApiResponse
impl<'r, T> Responder<'r, 'static> for ApiResponse<T>
where
    T: Serialize,
{
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(Status::Ok)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

/// Implement Responder for AssetError
impl<'r> Responder<'r, 'static> for AssetError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = Status::from_code(self.status()).unwrap_or(Status::InternalServerError);

        let error_response = ApiResponse::<()>::error(self.error_code(), Some(self.to_string()));
        let json =
            serde_json::to_string(&error_response).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}

/// Helper function to create success response
pub fn success_return<T>(value: T) -> ApiResponse<T>
where
    T: Serialize,
{
    ApiResponse::success(value)
}

/// Result type alias for route handlers
pub type RouteResult<T> = Result<ApiResponse<T>, AssetError>;
