use crate::{article::ArticleId, comment::CommentId};

/// A forum member. Users are keyed by name, created on first reference and
/// never deleted; the two id lists mirror the user's live articles and
/// comments.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub article_ids: Vec<ArticleId>,
    pub comment_ids: Vec<CommentId>,
}

impl User {
    pub fn new(username: String) -> User {
        User {
            username,
            article_ids: Vec::new(),
            comment_ids: Vec::new(),
        }
    }
}

/// Body of `POST /users` and of the vote routes.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserPayload {
    pub username: Option<String>,
}
