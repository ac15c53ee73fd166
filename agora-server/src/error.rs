use agora_api::Error as ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub fn bad_request() -> Error {
        Error::Api(ApiError::BadRequest)
    }

    pub fn not_found() -> Error {
        Error::Api(ApiError::NotFound)
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Anyhow(err) => {
                tracing::error!(?err, "internal server error");
                axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Error::Api(err) => {
                tracing::info!("returning error to client: {err}");
                match err.contents() {
                    Some(body) => (err.status_code(), body).into_response(),
                    None => err.status_code().into_response(),
                }
            }
        }
    }
}
