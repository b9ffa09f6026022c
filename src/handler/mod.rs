use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use usuarios_store::{DirectoryError, ErrorKind, request::UserPayload};

pub mod auth;
pub mod usuarios;

pub type ApiResult<T> = Result<T, ApiError>;
pub type ApiMessage = (StatusCode, Json<String>);

#[derive(Debug)]
pub struct ApiError(DirectoryError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::NOT_ACCEPTABLE,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::debug!("request rejected with {}: {}", status, self.0);
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<DirectoryError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub fn message(status: StatusCode, text: String) -> ApiMessage {
    (status, Json(text))
}

/// JSON body holding `login` and `password`. Bodies that fail to decode are
/// turned away with 400 before the handler runs.
pub struct Payload(pub UserPayload);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<UserPayload>::from_request(req, state)
            .await
            .map_err(|rejection| DirectoryError::InvalidRequest(rejection.body_text()))?;
        Ok(Payload(payload))
    }
}
