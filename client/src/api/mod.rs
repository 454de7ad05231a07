mod admin;
mod auth;
mod products;

pub use admin::AdminClient;
pub use auth::AuthClient;
pub use products::ProductClient;

use reqwest::Response;

use crate::error::{ApiError, ApiResult};
use crate::models::ApiErrorBody;

/// Map an error status onto the client's failure taxonomy. A 403 carries a
/// JSON body with the server message and the caller's actual role.
pub(crate) async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(match status.as_u16() {
        401 => ApiError::Unauthorized,
        403 => {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            ApiError::Forbidden {
                message: body.message,
                user_role: body.user_role,
            }
        }
        503 => ApiError::ServiceUnavailable,
        504 => ApiError::GatewayTimeout,
        code => ApiError::Status(code),
    })
}

pub(crate) async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
