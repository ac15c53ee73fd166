use http::StatusCode;

use crate::comment::NewComment;

/// Error taxonomy of the HTTP surface. The API carries no error body
/// schema beyond echoing the submitted comment on invalid comment
/// submissions.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Missing or invalid required field, missing referenced entity,
    /// unmatched route, or malformed numeric id.
    #[error("bad request")]
    BadRequest,

    /// Invalid comment submission; the submission is echoed back.
    #[error("bad request")]
    BadComment(NewComment),

    /// Syntactically valid id with no live entity behind it.
    #[error("not found")]
    NotFound,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest | Error::BadComment(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        match self {
            Error::BadComment(comment) => Some(
                serde_json::to_vec(&serde_json::json!({ "comment": comment }))
                    .expect("serializing comment echo"),
            ),
            Error::BadRequest | Error::NotFound => None,
        }
    }
}
